//! Evaluation configuration
//!
//! Controls how property guards are evaluated during exploration:
//! - `check_indices`: evaluate propositions with bounds-checked component
//!   reads and report violations as errors instead of panicking
//! - `trace`: emit a `tracing` event for every synchronisation step
//!
//! Both can be switched on from the environment:
//!
//! ```text
//! AFFINE_CHECK_INDICES=1   # checked component reads
//! AFFINE_CHECK_TRACE=1     # per-step trace events
//! ```

use std::sync::OnceLock;

/// Evaluation settings passed to the property automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    /// Use checked component reads (`try_valid`) for guards
    pub check_indices: bool,
    /// Emit trace events while synchronising with the property
    pub trace: bool,
}

fn env_flag(cell: &'static OnceLock<bool>, name: &str) -> bool {
    *cell.get_or_init(|| std::env::var_os(name).is_some())
}

fn env_check_indices() -> bool {
    static FLAG: OnceLock<bool> = OnceLock::new();
    env_flag(&FLAG, "AFFINE_CHECK_INDICES")
}

fn env_trace() -> bool {
    static FLAG: OnceLock<bool> = OnceLock::new();
    env_flag(&FLAG, "AFFINE_CHECK_TRACE")
}

impl EvalConfig {
    /// Default configuration with environment overrides applied.
    /// Variables are read once per process.
    pub fn from_env() -> Self {
        EvalConfig {
            check_indices: env_check_indices(),
            trace: env_trace(),
        }
    }

    pub fn with_check_indices(mut self, enabled: bool) -> Self {
        self.check_indices = enabled;
        self
    }

    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }
}
