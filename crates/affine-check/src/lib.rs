//! Affine atomic propositions for threshold-based model checking
//!
//! Piecewise-affine models (e.g. gene regulatory networks) are abstracted into
//! a finite grid of rectangles bounded by species thresholds. A state of the
//! abstraction is a vector of grid positions, one per species. This crate
//! provides the predicates a model checker evaluates over those states:
//!
//! - [`AffineProp`]: an atomic proposition `species op threshold`, or `true`
//! - [`PropertyTransition`]: a transition guarded by propositions
//! - [`PropertyAutomaton`]: the Büchi automaton of the property, run in
//!   lockstep with the system during exploration
//!
//! # Example
//!
//! ```
//! use affine_check::{AffineProp, Comparison};
//!
//! let ap = AffineProp::compare(1, Comparison::GreaterEqual, 5, "cro>=5");
//! assert!(ap.valid(&[0usize, 5, 10]));
//! assert!(!ap.valid(&[0usize, 4, 10]));
//! assert_eq!(ap.to_string(), "cro>=5");
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod property;
pub mod proposition;
pub mod state;
pub mod var_index;

pub use config::EvalConfig;
pub use error::{PropertyError, PropertyResult, PropositionError, PropositionResult};
pub use guard::PropertyTransition;
pub use property::{LocationId, PropertyAutomaton, Successors};
pub use proposition::{AffineProp, Comparison, OpCode};
pub use state::{AffineState, ComponentRead, Word};
pub use var_index::{SpeciesIndex, SpeciesRegistry};
