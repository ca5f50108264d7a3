//! Property automaton for affine systems
//!
//! The property to check is given as a Büchi automaton whose transitions are
//! guarded by affine atomic propositions. During exploration the automaton
//! runs in lockstep with the system: a product state stores the current
//! automaton location after the species values, and every system successor is
//! paired with each automaton transition enabled in the *source* state.
//!
//! A property violation exists iff there is a reachable cycle through an
//! accepting location in the product.

use crate::config::EvalConfig;
use crate::error::{PropertyError, PropertyResult};
use crate::guard::PropertyTransition;
use crate::state::{AffineState, ComponentRead};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Index of a location of the property automaton
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub u32);

impl LocationId {
    #[inline(always)]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Target locations of the transitions enabled in one step
pub type Successors = SmallVec<[LocationId; 4]>;

/// Büchi automaton over named locations with guarded transitions
#[derive(Debug, Clone, Default)]
pub struct PropertyAutomaton {
    /// Location names in id order
    names: Vec<Arc<str>>,
    ids: FxHashMap<Arc<str>, LocationId>,
    accepting: Vec<bool>,
    initial: Option<LocationId>,
    transitions: Vec<PropertyTransition>,
}

impl PropertyAutomaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Re-adding an existing name returns its id.
    /// New locations are not accepting.
    pub fn add_location(&mut self, name: impl Into<Arc<str>>) -> LocationId {
        let name: Arc<str> = name.into();
        if let Some(&id) = self.ids.get(&name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(Arc::clone(&name));
        self.ids.insert(name, id);
        self.accepting.push(false);
        id
    }

    /// Look up a location id by name
    pub fn location(&self, name: &str) -> Option<LocationId> {
        self.ids.get(name).copied()
    }

    /// Name of a location
    pub fn location_name(&self, id: LocationId) -> PropertyResult<&str> {
        self.check_id(id)?;
        Ok(&self.names[id.as_usize()])
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    fn resolve(&self, name: &str) -> PropertyResult<LocationId> {
        self.location(name)
            .ok_or_else(|| PropertyError::unknown_location(name))
    }

    fn check_id(&self, id: LocationId) -> PropertyResult<()> {
        if id.as_usize() < self.names.len() {
            Ok(())
        } else {
            Err(PropertyError::InvalidLocation {
                id: id.0,
                count: self.names.len(),
            })
        }
    }

    /// Mark an existing location as initial
    pub fn set_initial(&mut self, name: &str) -> PropertyResult<LocationId> {
        let id = self.resolve(name)?;
        self.initial = Some(id);
        Ok(id)
    }

    /// The initial location, if one was marked
    pub fn initial(&self) -> Option<LocationId> {
        self.initial
    }

    /// Mark an existing location as accepting
    pub fn set_accepting(&mut self, name: &str) -> PropertyResult<LocationId> {
        let id = self.resolve(name)?;
        self.accepting[id.as_usize()] = true;
        Ok(id)
    }

    pub fn is_accepting(&self, id: LocationId) -> PropertyResult<bool> {
        self.check_id(id)?;
        Ok(self.accepting[id.as_usize()])
    }

    /// Add a transition between existing locations; returns its index
    pub fn add_transition(&mut self, mut transition: PropertyTransition) -> PropertyResult<usize> {
        transition.from = self.resolve(transition.from_name())?;
        transition.to = self.resolve(transition.to_name())?;
        debug!(transition = %transition, "property transition added");
        self.transitions.push(transition);
        Ok(self.transitions.len() - 1)
    }

    pub fn transition(&self, index: usize) -> Option<&PropertyTransition> {
        self.transitions.get(index)
    }

    pub fn transitions(&self) -> &[PropertyTransition] {
        &self.transitions
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Targets of transitions leaving `location` that are enabled in `state`
    pub fn successors<S: ComponentRead + ?Sized>(
        &self,
        location: LocationId,
        state: &S,
        config: &EvalConfig,
    ) -> PropertyResult<Successors> {
        self.check_id(location)?;
        let mut targets = Successors::new();
        for transition in self.transitions.iter().filter(|t| t.from == location) {
            let enabled = if config.check_indices {
                transition.try_enabled(state)?
            } else {
                transition.enabled(state)
            };
            if enabled {
                targets.push(transition.to);
            }
        }
        Ok(targets)
    }

    /// Pair a system successor with the property.
    ///
    /// Guards are evaluated on `state` (the source of the system step). Each
    /// enabled transition leaving its location yields a copy of `candidate`
    /// whose location slot holds the transition target.
    pub fn synchronize(
        &self,
        state: &AffineState,
        candidate: &AffineState,
        config: &EvalConfig,
    ) -> PropertyResult<Vec<AffineState>> {
        let location = state.location().ok_or(PropertyError::MissingLocation)?;
        let targets = self.successors(location, state, config)?;
        let mut succs = Vec::with_capacity(targets.len());
        for target in targets {
            let mut next = candidate.clone();
            if !next.set_location(target) {
                return Err(PropertyError::MissingLocation);
            }
            if config.trace {
                trace!(from = %location, to = %target, state = ?next, "property step");
            }
            succs.push(next);
        }
        Ok(succs)
    }
}

impl fmt::Display for PropertyAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut by_name: Vec<(&str, usize)> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, n)| (&**n, i))
            .collect();
        by_name.sort_unstable();

        writeln!(f, "process LTL_property {{")?;
        let names: Vec<&str> = by_name.iter().map(|&(n, _)| n).collect();
        writeln!(f, "state {};", names.join(", "))?;

        let init = match self.initial {
            Some(id) => &*self.names[id.as_usize()],
            None => "",
        };
        writeln!(f, "init {};", init)?;

        let accepting: Vec<&str> = by_name
            .iter()
            .filter(|&&(_, i)| self.accepting[i])
            .map(|&(n, _)| n)
            .collect();
        writeln!(f, "accept {};", accepting.join(", "))?;

        writeln!(f, "trans")?;
        for (i, transition) in self.transitions.iter().enumerate() {
            if i > 0 {
                writeln!(f, ",")?;
            }
            write!(f, "   {}", transition)?;
        }
        writeln!(f, ";")?;
        writeln!(f, "}}")
    }
}
