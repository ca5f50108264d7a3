//! Species indexing for O(1) state access
//!
//! A model tracks a fixed set of species (state components). Each species gets
//! a numeric index when the model is loaded, so states are plain word arrays
//! and propositions read a component by position instead of by name.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Index of a species in the state vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesIndex(pub u32);

impl SpeciesIndex {
    /// Get the index as usize for array indexing
    #[inline(always)]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct SpeciesRegistryInner {
    /// Species names in index order (index -> name)
    names: Vec<Arc<str>>,
    /// Index lookup by name (name -> index)
    indices: FxHashMap<Arc<str>, SpeciesIndex>,
}

/// Registry mapping species names to state vector positions
///
/// Built once per model and shared by everything that renders states.
/// Cloning is O(1) - only increments an Arc reference count.
#[derive(Clone, Debug, Default)]
pub struct SpeciesRegistry {
    inner: Arc<SpeciesRegistryInner>,
}

impl SpeciesRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of species names.
    /// Repeated names keep their first index.
    pub fn from_names<S: Into<Arc<str>>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut registry = Self::new();
        for name in names {
            registry.register(name);
        }
        registry
    }

    /// Register a species and get its index.
    /// Returns the existing index if already registered.
    pub fn register<S: Into<Arc<str>>>(&mut self, name: S) -> SpeciesIndex {
        let name: Arc<str> = name.into();
        if let Some(&idx) = self.inner.indices.get(&name) {
            return idx;
        }
        let inner = Arc::make_mut(&mut self.inner);
        let idx = SpeciesIndex(inner.names.len() as u32);
        inner.names.push(Arc::clone(&name));
        inner.indices.insert(name, idx);
        idx
    }

    /// Look up a species index by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<SpeciesIndex> {
        self.inner.indices.get(name).copied()
    }

    /// Get a species name by index, if registered
    #[inline]
    pub fn name(&self, idx: SpeciesIndex) -> Option<&str> {
        self.inner.names.get(idx.as_usize()).map(|n| &**n)
    }

    /// All species names in index order
    pub fn names(&self) -> &[Arc<str>] {
        &self.inner.names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.names.is_empty()
    }

    /// Iterator over (index, name) pairs
    pub fn iter(&self) -> impl Iterator<Item = (SpeciesIndex, &Arc<str>)> {
        self.inner
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (SpeciesIndex(i as u32), name))
    }
}
