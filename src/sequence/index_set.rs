//! Growable set of positions

use crate::sequence::Natural;
use roaring::RoaringTreemap;

/// Set of naturals backed by a roaring bitmap
///
/// Iteration is in ascending order, which gives the search engine a stable
/// digit order for its binary counter within one round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexSet {
    rep: RoaringTreemap,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a position; returns true if it was not already present
    pub fn insert(&mut self, position: Natural) -> bool {
        self.rep.insert(position)
    }

    pub fn contains(&self, position: Natural) -> bool {
        self.rep.contains(position)
    }

    pub fn len(&self) -> u64 {
        self.rep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rep.is_empty()
    }

    pub fn clear(&mut self) {
        self.rep.clear();
    }

    /// Largest position in the set
    pub fn max(&self) -> Option<Natural> {
        self.rep.max()
    }

    pub fn iter(&self) -> impl Iterator<Item = Natural> + '_ {
        self.rep.iter()
    }

    /// Snapshot the set as an ascending list
    pub fn to_vec(&self) -> Vec<Natural> {
        self.iter().collect()
    }
}

impl Extend<Natural> for IndexSet {
    fn extend<I: IntoIterator<Item = Natural>>(&mut self, iter: I) {
        for position in iter {
            self.insert(position);
        }
    }
}

impl FromIterator<Natural> for IndexSet {
    fn from_iter<I: IntoIterator<Item = Natural>>(iter: I) -> Self {
        let mut set = IndexSet::new();
        set.extend(iter);
        set
    }
}

impl std::fmt::Display for IndexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = IndexSet::new();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_membership() {
        let set: IndexSet = [4, 0, 7].into_iter().collect();
        assert!(set.contains(0));
        assert!(set.contains(4));
        assert!(set.contains(7));
        assert!(!set.contains(1));
        assert!(!set.contains(1 << 40));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set: IndexSet = [12, 1, 7, 4].into_iter().collect();
        assert_eq!(set.to_vec(), vec![1, 4, 7, 12]);
    }

    #[test]
    fn test_max() {
        let mut set = IndexSet::new();
        assert_eq!(set.max(), None);

        set.insert(3);
        set.insert(u64::MAX);
        set.insert(11);
        assert_eq!(set.max(), Some(u64::MAX));
        assert_eq!(set.to_vec(), vec![3, 11, u64::MAX]);
    }

    #[test]
    fn test_sparse_positions() {
        let set: IndexSet = [5, 1 << 33].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.max(), Some(1 << 33));
    }

    #[test]
    fn test_clear() {
        let mut set: IndexSet = (0..10).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_display() {
        let set: IndexSet = [7, 4].into_iter().collect();
        assert_eq!(format!("{}", set), "{4, 7}");
        assert_eq!(format!("{}", IndexSet::new()), "{}");
    }
}
