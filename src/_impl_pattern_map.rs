use super::PatternMap;
use fxhash::FxHashMap;
use std::hash::Hash;
use std::ops::Index;

impl<K: Eq + Hash, V> PatternMap<K, V> {
    /// Create an empty map.
    pub fn new() -> PatternMap<K, V> {
        PatternMap {
            values: FxHashMap::default(),
        }
    }

    /// Assign a new value to `node`, replacing the previous one.
    pub fn insert(&mut self, node: K, value: V) {
        self.values.insert(node, value);
    }

    pub fn get(&self, node: &K) -> Option<&V> {
        self.values.get(node)
    }

    pub fn contains(&self, node: &K) -> bool {
        self.values.contains_key(node)
    }

    /// Number of nodes with an assigned value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove all values from the map.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Eq + Hash, V> Default for PatternMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// *Panics* if `node` has no value.
impl<K: Eq + Hash, V> Index<&K> for PatternMap<K, V> {
    type Output = V;

    fn index(&self, node: &K) -> &Self::Output {
        &self.values[node]
    }
}
