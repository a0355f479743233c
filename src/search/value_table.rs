use crate::search::SearchSpace;
use std::fmt::{self, Debug, Formatter};

/// The best accumulated reward the last search found for every state it
/// generated. States the search never reached have no entry; that means "no
/// information", not a value of zero.
pub struct ValueTable<'a, S> {
    search_space: &'a SearchSpace<S>,
}

impl<'a, S> ValueTable<'a, S> {
    pub(crate) fn new(search_space: &'a SearchSpace<S>) -> Self {
        Self { search_space }
    }

    pub fn value(&self, state: &S) -> Option<f64> {
        self.search_space
            .find_node(state)
            .map(|node_id| self.search_space.get_node(node_id).get_g())
    }

    /// States with their values, in the order the search generated them.
    pub fn iter(&self) -> impl Iterator<Item = (&'a S, f64)> + 'a {
        self.search_space
            .iter()
            .map(|(_, state, node)| (state, node.get_g()))
    }

    pub fn len(&self) -> usize {
        self.search_space.len()
    }

    pub fn is_empty(&self) -> bool {
        self.search_space.is_empty()
    }
}

impl<S: Debug> Debug for ValueTable<'_, S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
