//! Error types for proposition evaluation and property automata

use thiserror::Error;

/// Result type alias for proposition operations
pub type PropositionResult<T> = std::result::Result<T, PropositionError>;

/// Result type alias for property automaton operations
pub type PropertyResult<T> = std::result::Result<T, PropertyError>;

/// Errors raised while building or evaluating an atomic proposition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropositionError {
    /// Operator code has no evaluation case (includes EQUAL and NOT_EQUAL)
    #[error("unsupported comparison operator code {code}")]
    UnsupportedOperator { code: i32 },

    /// Component index lies outside the state vector
    #[error("component index {index} out of bounds for state of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Armed propositions need a display text
    #[error("atomic proposition text must not be empty")]
    EmptyText,
}

/// Errors raised while building or running a property automaton
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// Named location was never added to the automaton
    #[error("unknown property location '{name}'")]
    UnknownLocation { name: String },

    /// Location id does not belong to the automaton
    #[error("property location id {id} out of range ({count} locations)")]
    InvalidLocation { id: u32, count: usize },

    /// Product state carries no property location slot
    #[error("state has no property location")]
    MissingLocation,

    /// Guard evaluation failed
    #[error(transparent)]
    Proposition(#[from] PropositionError),
}

impl PropertyError {
    pub fn unknown_location(name: impl Into<String>) -> Self {
        PropertyError::UnknownLocation { name: name.into() }
    }
}
