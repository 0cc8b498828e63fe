use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Marker store recording which vertices a traversal has reached.
pub trait Visited<V> {
    /// Marks `value` as visited, returns true when it was not visited before.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash + Copy,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

/// One bit per vertex of a known, sorted id set.
///
/// Ids are located by binary search, so the store is as large as the vertex
/// count no matter how sparse or large the ids are. Ids outside the set are
/// never marked: `visit` on them returns false.
#[derive(Debug, Clone)]
pub struct IndexedVisited<'a> {
    ids: &'a [usize],
    marks: BitVec,
}

impl<'a> IndexedVisited<'a> {
    /// `ids` must be ascending without repeats.
    pub fn new(ids: &'a [usize]) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must be sorted");
        Self {
            ids,
            marks: BitVec::from_elem(ids.len(), false),
        }
    }

    /// Number of marked ids.
    pub fn marked(&self) -> usize {
        self.marks.iter().filter(|&marked| marked).count()
    }

    #[inline]
    fn position(&self, id: usize) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }
}

impl Visited<usize> for IndexedVisited<'_> {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        match self.position(value) {
            Some(at) if !self.marks[at] => {
                self.marks.set(at, true);
                true
            }
            _ => false,
        }
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.position(*value).is_some_and(|at| self.marks[at])
    }
}
