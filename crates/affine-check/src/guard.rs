//! Guarded transitions of a property automaton
//!
//! A transition `from -> to` is enabled in a state when all of its positive
//! guards hold and none of its negative guards hold. A transition without
//! guards carries a single `true` positive guard.

use crate::error::PropositionResult;
use crate::property::LocationId;
use crate::proposition::AffineProp;
use crate::state::ComponentRead;
use std::fmt;
use std::sync::Arc;

/// Transition of the property automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTransition {
    from_name: Arc<str>,
    to_name: Arc<str>,
    pub(crate) from: LocationId,
    pub(crate) to: LocationId,
    positive: Vec<AffineProp>,
    negative: Vec<AffineProp>,
}

impl PropertyTransition {
    /// Create a transition. Location ids are resolved when it is added to an automaton.
    pub fn new(
        from: impl Into<Arc<str>>,
        to: impl Into<Arc<str>>,
        positive: Vec<AffineProp>,
        negative: Vec<AffineProp>,
    ) -> Self {
        PropertyTransition {
            from_name: from.into(),
            to_name: to.into(),
            from: LocationId(0),
            to: LocationId(0),
            positive,
            negative,
        }
    }

    /// Transition guarded by `true` only
    pub fn unconditional(from: impl Into<Arc<str>>, to: impl Into<Arc<str>>) -> Self {
        Self::new(from, to, vec![AffineProp::new()], Vec::new())
    }

    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    pub fn to_name(&self) -> &str {
        &self.to_name
    }

    /// Source location id (meaningful once added to an automaton)
    pub fn from_id(&self) -> LocationId {
        self.from
    }

    /// Target location id (meaningful once added to an automaton)
    pub fn to_id(&self) -> LocationId {
        self.to
    }

    pub fn positive_guards(&self) -> &[AffineProp] {
        &self.positive
    }

    pub fn negative_guards(&self) -> &[AffineProp] {
        &self.negative
    }

    /// Whether the transition is enabled in `state`
    #[inline]
    pub fn enabled<S: ComponentRead + ?Sized>(&self, state: &S) -> bool {
        self.positive.iter().all(|ap| ap.valid(state))
            && !self.negative.iter().any(|ap| ap.valid(state))
    }

    /// Like [`PropertyTransition::enabled`], with bounds-checked component reads
    pub fn try_enabled<S: ComponentRead + ?Sized>(&self, state: &S) -> PropositionResult<bool> {
        for ap in &self.positive {
            if !ap.try_valid(state)? {
                return Ok(false);
            }
        }
        for ap in &self.negative {
            if ap.try_valid(state)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for PropertyTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {{", self.from_name, self.to_name)?;
        let has_guards = !self.positive.is_empty() || !self.negative.is_empty();
        if has_guards {
            f.write_str("guard ")?;
        }
        let positive = self.positive.iter().map(|ap| (false, ap));
        let negative = self.negative.iter().map(|ap| (true, ap));
        for (i, (negated, ap)) in positive.chain(negative).enumerate() {
            if i > 0 {
                f.write_str(" && ")?;
            }
            if negated {
                write!(f, "(not {})", ap)?;
            } else {
                write!(f, "({})", ap)?;
            }
        }
        if has_guards {
            f.write_str(";")?;
        }
        f.write_str("}")
    }
}
