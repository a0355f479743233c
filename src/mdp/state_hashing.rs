//! State equivalence. Search and learning algorithms never compare states by
//! identity; they go through a [`StateEquivalence`] strategy so that
//! structurally identical states collapse to one entry.
//!
//! A strategy whose `hash_state` and `equivalent` disagree (equivalent states
//! with different hashes) breaks every structure in this module: states may
//! be duplicated or better paths missed. This cannot be checked generically
//! and is left to the implementor.

use smallvec::SmallVec;
use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
    hash::{BuildHasher, Hash, RandomState},
    marker::PhantomData,
    rc::Rc,
};

pub trait StateEquivalence<S> {
    /// Hash of the semantic content of the state. Equivalent states must
    /// produce the same hash; unequal states may collide.
    fn hash_state(&self, state: &S) -> u64;

    /// Whether the two states are the same state of the world.
    fn equivalent(&self, a: &S, b: &S) -> bool;
}

/// Equivalence given by the state's own [`Hash`] and [`Eq`] implementations.
#[derive(Debug, Clone, Default)]
pub struct StructuralEquivalence {
    build_hasher: RandomState,
}

impl StructuralEquivalence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Hash + Eq> StateEquivalence<S> for StructuralEquivalence {
    fn hash_state(&self, state: &S) -> u64 {
        self.build_hasher.hash_one(state)
    }

    fn equivalent(&self, a: &S, b: &S) -> bool {
        a == b
    }
}

/// Equivalence on a key projected out of the state. Useful when a state
/// carries data that does not matter for planning, e.g. a step counter or
/// a display name.
pub struct ProjectedEquivalence<S, K, F>
where
    F: Fn(&S) -> K,
{
    key: F,
    build_hasher: RandomState,
    _marker: PhantomData<fn(&S) -> K>,
}

impl<S, K, F> ProjectedEquivalence<S, K, F>
where
    K: Hash + Eq,
    F: Fn(&S) -> K,
{
    pub fn new(key: F) -> Self {
        Self {
            key,
            build_hasher: RandomState::new(),
            _marker: PhantomData,
        }
    }
}

impl<S, K, F> Debug for ProjectedEquivalence<S, K, F>
where
    F: Fn(&S) -> K,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ProjectedEquivalence").finish_non_exhaustive()
    }
}

impl<S, K, F> StateEquivalence<S> for ProjectedEquivalence<S, K, F>
where
    K: Hash + Eq,
    F: Fn(&S) -> K,
{
    fn hash_state(&self, state: &S) -> u64 {
        self.build_hasher.hash_one((self.key)(state))
    }

    fn equivalent(&self, a: &S, b: &S) -> bool {
        (self.key)(a) == (self.key)(b)
    }
}

/// Interns states into dense indices `0..len()` in insertion order. One
/// representative state is stored per equivalence class; hash collisions
/// between inequivalent states are kept apart in small buckets.
pub struct StateIndex<S> {
    states: Vec<S>,
    buckets: HashMap<u64, SmallVec<[usize; 1]>>,
    equivalence: Rc<dyn StateEquivalence<S>>,
}

impl<S> StateIndex<S> {
    pub fn new(equivalence: Rc<dyn StateEquivalence<S>>) -> Self {
        Self {
            states: Vec::new(),
            buckets: HashMap::new(),
            equivalence,
        }
    }

    /// Index of the equivalence class of `state`, if it has been seen.
    pub fn find(&self, state: &S) -> Option<usize> {
        let hash = self.equivalence.hash_state(state);
        self.find_with_hash(state, hash)
    }

    fn find_with_hash(&self, state: &S, hash: u64) -> Option<usize> {
        self.buckets.get(&hash).and_then(|bucket| {
            bucket
                .iter()
                .copied()
                .find(|&index| self.equivalence.equivalent(&self.states[index], state))
        })
    }

    /// Returns the index of the equivalence class of `state` and whether it
    /// was newly inserted. An already present representative is kept.
    pub fn insert(&mut self, state: S) -> (usize, bool) {
        let hash = self.equivalence.hash_state(&state);
        if let Some(index) = self.find_with_hash(&state, hash) {
            return (index, false);
        }
        let index = self.states.len();
        self.states.push(state);
        self.buckets.entry(hash).or_default().push(index);
        (index, true)
    }

    pub fn get(&self, index: usize) -> &S {
        &self.states[index]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.buckets.clear();
    }

    pub fn equivalence(&self) -> &Rc<dyn StateEquivalence<S>> {
        &self.equivalence
    }
}

impl<S: Debug> Debug for StateIndex<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("StateIndex")
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

/// A map from state equivalence classes to values.
#[derive(Debug)]
pub struct StateMap<S, V> {
    index: StateIndex<S>,
    values: Vec<V>,
}

impl<S, V> StateMap<S, V> {
    pub fn new(equivalence: Rc<dyn StateEquivalence<S>>) -> Self {
        Self {
            index: StateIndex::new(equivalence),
            values: Vec::new(),
        }
    }

    pub fn get(&self, state: &S) -> Option<&V> {
        self.index.find(state).map(|i| &self.values[i])
    }

    pub fn get_mut(&mut self, state: &S) -> Option<&mut V> {
        self.index.find(state).map(|i| &mut self.values[i])
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.find(state).is_some()
    }

    /// Insert or overwrite the value of the class of `state`, returning the
    /// previous value.
    pub fn insert(&mut self, state: S, value: V) -> Option<V> {
        let (index, is_new) = self.index.insert(state);
        if is_new {
            self.values.push(value);
            None
        } else {
            Some(std::mem::replace(&mut self.values[index], value))
        }
    }

    /// Value of the class of `state`, inserting `default()` first if absent.
    pub fn get_or_insert_with(&mut self, state: S, default: impl FnOnce() -> V) -> &mut V {
        let (index, is_new) = self.index.insert(state);
        if is_new {
            self.values.push(default());
        }
        &mut self.values[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &V)> {
        self.index.iter().zip(self.values.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&S, &mut V)> {
        self.index.iter().zip(self.values.iter_mut())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Labelled {
        position: (i32, i32),
        label: String,
    }

    fn labelled(x: i32, y: i32, label: &str) -> Labelled {
        Labelled {
            position: (x, y),
            label: label.to_string(),
        }
    }

    /// Every state collides, so lookups have to fall back to equivalence.
    struct ConstantHash;

    impl StateEquivalence<i32> for ConstantHash {
        fn hash_state(&self, _state: &i32) -> u64 {
            42
        }

        fn equivalent(&self, a: &i32, b: &i32) -> bool {
            a == b
        }
    }

    #[test]
    fn structural_equivalence_uses_state_contents() {
        let eq = StructuralEquivalence::new();
        let a = labelled(1, 2, "a");
        let b = a.clone();
        assert!(eq.equivalent(&a, &b));
        assert_eq!(eq.hash_state(&a), eq.hash_state(&b));
        assert!(!eq.equivalent(&a, &labelled(1, 2, "b")));
    }

    #[test]
    fn projected_equivalence_ignores_other_fields() {
        let eq = ProjectedEquivalence::new(|s: &Labelled| s.position);
        let a = labelled(1, 2, "a");
        let b = labelled(1, 2, "b");
        assert!(eq.equivalent(&a, &b));
        assert_eq!(eq.hash_state(&a), eq.hash_state(&b));
        assert!(!eq.equivalent(&a, &labelled(2, 1, "a")));
    }

    #[test]
    fn index_deduplicates_equivalent_states() {
        let mut index = StateIndex::new(Rc::new(ProjectedEquivalence::new(
            |s: &Labelled| s.position,
        )));
        assert_eq!(index.insert(labelled(0, 0, "first")), (0, true));
        assert_eq!(index.insert(labelled(1, 0, "x")), (1, true));
        assert_eq!(index.insert(labelled(0, 0, "second")), (0, false));
        assert_eq!(index.len(), 2);
        // the first representative is kept
        assert_eq!(index.get(0).label, "first");
        assert_eq!(index.find(&labelled(1, 0, "y")), Some(1));
        assert_eq!(index.find(&labelled(5, 5, "y")), None);
    }

    #[test]
    fn index_survives_hash_collisions() {
        let mut index = StateIndex::new(Rc::new(ConstantHash));
        for i in 0..5 {
            assert_eq!(index.insert(i), (i as usize, true));
        }
        for i in 0..5 {
            assert_eq!(index.find(&i), Some(i as usize));
        }
        assert_eq!(index.insert(3), (3, false));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn map_insert_get_and_clear() {
        let mut map: StateMap<i32, f64> = StateMap::new(Rc::new(StructuralEquivalence::new()));
        assert_eq!(map.insert(1, 0.5), None);
        assert_eq!(map.insert(1, 1.5), Some(0.5));
        *map.get_or_insert_with(2, || -1.0) += 3.0;
        assert_eq!(map.get(&1), Some(&1.5));
        assert_eq!(map.get(&2), Some(&2.0));
        assert!(!map.contains(&3));
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.iter().map(|(s, v)| (*s, *v)).collect::<Vec<_>>(),
            vec![(1, 1.5), (2, 2.0)]
        );

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
    }
}
