//! Affine atomic propositions
//!
//! An affine atomic proposition compares one component of an affine state
//! against a threshold, e.g. `cI >= 2`. Propositions are the leaves of the
//! temporal formulas checked over piecewise-affine models; they are compiled
//! once from the property text and then evaluated for every visited state.
//!
//! States of an affine system are positions in a threshold grid, so a value
//! never lies *on* a threshold hyperplane. Strict and non-strict comparisons
//! are therefore observationally identical: `<` and `<=` both evaluate as
//! `value < threshold`, `>` and `>=` both as `value >= threshold`.

use crate::error::{PropositionError, PropositionResult};
use crate::state::{ComponentRead, Word};
use std::fmt;

/// Symbolic operator codes emitted by the formula layer
///
/// EQUAL and NOT_EQUAL are reserved but have no evaluation semantics;
/// [`Comparison::from_code`] rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpCode(pub i32);

impl OpCode {
    pub const LESS: OpCode = OpCode(112);
    pub const LESS_EQUAL: OpCode = OpCode(113);
    pub const EQUAL: OpCode = OpCode(114);
    pub const GREATER: OpCode = OpCode(115);
    pub const GREATER_EQUAL: OpCode = OpCode(116);
    pub const NOT_EQUAL: OpCode = OpCode(117);
}

/// Comparison kind of an armed proposition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Comparison {
    /// Decode a symbolic operator code
    pub fn from_code(code: OpCode) -> PropositionResult<Self> {
        match code {
            OpCode::LESS => Ok(Comparison::Less),
            OpCode::LESS_EQUAL => Ok(Comparison::LessEqual),
            OpCode::GREATER => Ok(Comparison::Greater),
            OpCode::GREATER_EQUAL => Ok(Comparison::GreaterEqual),
            OpCode(code) => Err(PropositionError::UnsupportedOperator { code }),
        }
    }

    /// Symbolic code of this comparison
    pub fn code(self) -> OpCode {
        match self {
            Comparison::Less => OpCode::LESS,
            Comparison::LessEqual => OpCode::LESS_EQUAL,
            Comparison::Greater => OpCode::GREATER,
            Comparison::GreaterEqual => OpCode::GREATER_EQUAL,
        }
    }

    /// Operator symbol, e.g. `<=`
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
        }
    }

    /// Apply the comparison to a grid value.
    ///
    /// Strict and non-strict variants coincide: threshold hyperplanes are
    /// never occupied by a state.
    #[inline(always)]
    pub fn holds(self, value: Word, threshold: Word) -> bool {
        match self {
            Comparison::Less | Comparison::LessEqual => value < threshold,
            Comparison::Greater | Comparison::GreaterEqual => value >= threshold,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Predicate {
    True,
    Compare {
        index: usize,
        op: Comparison,
        threshold: Word,
    },
}

/// Affine atomic proposition
///
/// Either the trivial `true` proposition or "component `index` satisfies
/// `op` against `threshold`". The display text is supplied by whoever
/// compiles the proposition and is returned verbatim; it is never rebuilt
/// from the numeric fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffineProp {
    predicate: Predicate,
    text: String,
}

impl Default for AffineProp {
    fn default() -> Self {
        Self::new()
    }
}

impl AffineProp {
    /// The trivial `true` proposition
    pub fn new() -> Self {
        AffineProp {
            predicate: Predicate::True,
            text: String::from("true"),
        }
    }

    /// An armed proposition `component[index] op threshold`
    pub fn compare(index: usize, op: Comparison, threshold: Word, text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "atomic proposition text must not be empty");
        AffineProp {
            predicate: Predicate::Compare {
                index,
                op,
                threshold,
            },
            text,
        }
    }

    /// Build from a symbolic operator code.
    ///
    /// Fails for codes without evaluation semantics (EQUAL, NOT_EQUAL and
    /// anything unknown) and for empty text.
    pub fn from_code(
        index: usize,
        code: OpCode,
        threshold: Word,
        text: impl Into<String>,
    ) -> PropositionResult<Self> {
        let op = Comparison::from_code(code)?;
        let text = text.into();
        if text.is_empty() {
            return Err(PropositionError::EmptyText);
        }
        Ok(Self::compare(index, op, threshold, text))
    }

    /// Re-arm this proposition with a new comparison
    pub fn set(&mut self, index: usize, op: Comparison, threshold: Word, text: impl Into<String>) {
        *self = Self::compare(index, op, threshold, text);
    }

    /// Turn this proposition into `true`
    pub fn set_true(&mut self) {
        self.set_true_with_text("true");
    }

    /// Turn this proposition into `true`, keeping `text` as caption.
    ///
    /// The caption is stored but `Display` still renders `true`.
    pub fn set_true_with_text(&mut self, text: impl Into<String>) {
        self.predicate = Predicate::True;
        self.text = text.into();
    }

    /// Whether this is the trivial `true` proposition
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self.predicate, Predicate::True)
    }

    /// Component index, `None` for `true`
    pub fn index(&self) -> Option<usize> {
        match self.predicate {
            Predicate::True => None,
            Predicate::Compare { index, .. } => Some(index),
        }
    }

    /// Comparison kind, `None` for `true`
    pub fn comparison(&self) -> Option<Comparison> {
        match self.predicate {
            Predicate::True => None,
            Predicate::Compare { op, .. } => Some(op),
        }
    }

    /// Threshold, `None` for `true`
    pub fn threshold(&self) -> Option<Word> {
        match self.predicate {
            Predicate::True => None,
            Predicate::Compare { threshold, .. } => Some(threshold),
        }
    }

    /// Stored text (for `true` this is the caption given to `set_true_with_text`)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Evaluate against a state.
    ///
    /// # Panics
    ///
    /// Panics if the component index is outside the state. Indices come from
    /// the compiled model, so this is a contract violation of the caller; use
    /// [`AffineProp::try_valid`] where the state layout is not trusted.
    #[inline]
    pub fn valid<S: ComponentRead + ?Sized>(&self, state: &S) -> bool {
        match self.predicate {
            Predicate::True => true,
            Predicate::Compare {
                index,
                op,
                threshold,
            } => op.holds(state.get_component(index), threshold),
        }
    }

    /// Evaluate against a state, reporting an out-of-range index as an error
    #[inline]
    pub fn try_valid<S: ComponentRead + ?Sized>(&self, state: &S) -> PropositionResult<bool> {
        match self.predicate {
            Predicate::True => Ok(true),
            Predicate::Compare {
                index,
                op,
                threshold,
            } => {
                let value = state.try_component(index).ok_or(
                    PropositionError::IndexOutOfBounds {
                        index,
                        len: state.component_count(),
                    },
                )?;
                Ok(op.holds(value, threshold))
            }
        }
    }
}

impl fmt::Display for AffineProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predicate {
            Predicate::True => f.write_str("true"),
            Predicate::Compare { .. } => f.write_str(&self.text),
        }
    }
}
