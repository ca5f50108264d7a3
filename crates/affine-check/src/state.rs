//! State representation for affine systems
//!
//! A state of an affine system is a vector of threshold-grid positions, one
//! word per species. When the system is checked against a property automaton
//! the vector carries one extra trailing word: the current automaton location.
//!
//! Propositions never look at the raw buffer. They read components through
//! [`ComponentRead`], which any state representation can implement.

use crate::property::LocationId;
use crate::var_index::{SpeciesIndex, SpeciesRegistry};
use std::fmt;

/// Machine word holding one state component
pub type Word = usize;

/// Indexed read access to the components of a state
///
/// Implementations must provide O(1) access.
pub trait ComponentRead {
    /// Read component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.component_count()`.
    fn get_component(&self, index: usize) -> Word;

    /// Number of readable components
    fn component_count(&self) -> usize;

    /// Read component `index`, or `None` if it is out of range
    #[inline]
    fn try_component(&self, index: usize) -> Option<Word> {
        if index < self.component_count() {
            Some(self.get_component(index))
        } else {
            None
        }
    }
}

impl ComponentRead for [Word] {
    #[inline(always)]
    fn get_component(&self, index: usize) -> Word {
        self[index]
    }

    #[inline(always)]
    fn component_count(&self) -> usize {
        self.len()
    }
}

impl ComponentRead for Vec<Word> {
    #[inline(always)]
    fn get_component(&self, index: usize) -> Word {
        self[index]
    }

    #[inline(always)]
    fn component_count(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ComponentRead for [Word; N] {
    #[inline(always)]
    fn get_component(&self, index: usize) -> Word {
        self[index]
    }

    #[inline(always)]
    fn component_count(&self) -> usize {
        N
    }
}

/// Array-backed state of an affine system
///
/// Layout: `dim` species words, optionally followed by the property location.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AffineState {
    words: Box<[Word]>,
    dim: usize,
}

impl AffineState {
    /// Create a state with `dim` species, all at grid position 0
    pub fn new(dim: usize) -> Self {
        AffineState {
            words: vec![0; dim].into_boxed_slice(),
            dim,
        }
    }

    /// Create a state from species values, without a property location
    pub fn from_words(words: Vec<Word>) -> Self {
        let dim = words.len();
        AffineState {
            words: words.into_boxed_slice(),
            dim,
        }
    }

    /// Create a product state: species values plus a property location
    pub fn with_location(mut words: Vec<Word>, location: LocationId) -> Self {
        let dim = words.len();
        words.push(location.as_usize());
        AffineState {
            words: words.into_boxed_slice(),
            dim,
        }
    }

    /// Number of species
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Species values
    #[inline]
    pub fn species(&self) -> &[Word] {
        &self.words[..self.dim]
    }

    /// Get a species value by index
    #[inline(always)]
    pub fn get(&self, idx: SpeciesIndex) -> Word {
        self.species()[idx.as_usize()]
    }

    /// Set a species value by index
    #[inline(always)]
    pub fn set(&mut self, idx: SpeciesIndex, value: Word) {
        let i = idx.as_usize();
        assert!(i < self.dim, "species index {i} out of range ({})", self.dim);
        self.words[i] = value;
    }

    /// Current property location, if this is a product state
    #[inline]
    pub fn location(&self) -> Option<LocationId> {
        self.words
            .get(self.dim)
            .map(|&w| LocationId(w as u32))
    }

    /// Overwrite the property location. Returns false if there is no slot.
    #[inline]
    pub fn set_location(&mut self, location: LocationId) -> bool {
        match self.words.get_mut(self.dim) {
            Some(slot) => {
                *slot = location.as_usize();
                true
            }
            None => false,
        }
    }

    /// Render with species names, e.g. `cI=2, cro=0 @1`
    pub fn display<'a>(&'a self, registry: &'a SpeciesRegistry) -> StateDisplay<'a> {
        StateDisplay {
            state: self,
            registry,
        }
    }
}

impl ComponentRead for AffineState {
    #[inline(always)]
    fn get_component(&self, index: usize) -> Word {
        self.species()[index]
    }

    #[inline(always)]
    fn component_count(&self) -> usize {
        self.dim
    }
}

impl fmt::Debug for AffineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.species())?;
        if let Some(loc) = self.location() {
            write!(f, " @{}", loc)?;
        }
        Ok(())
    }
}

/// Named rendering of an [`AffineState`]
pub struct StateDisplay<'a> {
    state: &'a AffineState,
    registry: &'a SpeciesRegistry,
}

impl fmt::Display for StateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.state.species().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.registry.name(SpeciesIndex(i as u32)) {
                Some(name) => write!(f, "{}={}", name, value)?,
                None => write!(f, "#{}={}", i, value)?,
            }
        }
        if let Some(loc) = self.state.location() {
            write!(f, " @{}", loc)?;
        }
        Ok(())
    }
}
