//! Two-way unique map.
//!
//! [`BiMap`] keeps a forward (`L -> R`) and a reverse (`R -> L`) index in
//! lockstep. Both sides are unique: inserting a pair whose left or right
//! value is already present is rejected and leaves the map untouched.
//! There is no removal; the map only grows.

use std::error::Error;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

/// Which side of a [`BiMap`] rejected an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiMapError {
    /// The left value is already mapped.
    LeftOccupied,
    /// The right value is already mapped.
    RightOccupied,
}

impl fmt::Display for BiMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftOccupied => write!(f, "left value already mapped"),
            Self::RightOccupied => write!(f, "right value already mapped"),
        }
    }
}

impl Error for BiMapError {}

/// A bijective map between `L` and `R`.
///
/// Iteration follows insertion order.
///
/// # Examples
///
/// ```
/// use tabula_board::{BiMap, BiMapError};
///
/// let mut names: BiMap<u32, &str> = BiMap::new();
/// names.insert(1, "one").unwrap();
/// assert_eq!(names.get_by_left(&1), Some(&"one"));
/// assert_eq!(names.get_by_right(&"one"), Some(&1));
///
/// assert_eq!(names.insert(2, "one"), Err(BiMapError::RightOccupied));
/// assert_eq!(names.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BiMap<L, R> {
    forward: IndexMap<L, R>,
    reverse: IndexMap<R, L>,
}

impl<L, R> BiMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }

    /// Create an empty map with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: IndexMap::with_capacity(capacity),
            reverse: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a pair.
    ///
    /// The left side is checked first, so a pair that collides on both
    /// sides reports [`BiMapError::LeftOccupied`].
    pub fn insert(&mut self, left: L, right: R) -> Result<(), BiMapError> {
        if self.forward.contains_key(&left) {
            return Err(BiMapError::LeftOccupied);
        }
        if self.reverse.contains_key(&right) {
            return Err(BiMapError::RightOccupied);
        }
        self.reverse.insert(right.clone(), left.clone());
        self.forward.insert(left, right);
        Ok(())
    }

    /// Look up the right value paired with `left`.
    pub fn get_by_left(&self, left: &L) -> Option<&R> {
        self.forward.get(left)
    }

    /// Look up the left value paired with `right`.
    pub fn get_by_right(&self, right: &R) -> Option<&L> {
        self.reverse.get(right)
    }

    /// Whether `left` is mapped.
    pub fn contains_left(&self, left: &L) -> bool {
        self.forward.contains_key(left)
    }

    /// Whether `right` is mapped.
    pub fn contains_right(&self, right: &R) -> bool {
        self.reverse.contains_key(right)
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &R)> + '_ {
        self.forward.iter()
    }
}

impl<L, R> Default for BiMap<L, R>
where
    L: Eq + Hash + Clone,
    R: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_works_in_both_directions() {
        let mut m = BiMap::new();
        m.insert('a', 1).unwrap();
        m.insert('b', 2).unwrap();
        assert_eq!(m.get_by_left(&'b'), Some(&2));
        assert_eq!(m.get_by_right(&1), Some(&'a'));
        assert_eq!(m.get_by_left(&'z'), None);
        assert_eq!(m.get_by_right(&9), None);
    }

    #[test]
    fn duplicate_left_is_rejected_without_mutation() {
        let mut m = BiMap::new();
        m.insert('a', 1).unwrap();
        assert_eq!(m.insert('a', 2), Err(BiMapError::LeftOccupied));
        assert_eq!(m.len(), 1);
        assert!(!m.contains_right(&2));
        assert_eq!(m.get_by_left(&'a'), Some(&1));
    }

    #[test]
    fn duplicate_right_is_rejected_without_mutation() {
        let mut m = BiMap::new();
        m.insert('a', 1).unwrap();
        assert_eq!(m.insert('b', 1), Err(BiMapError::RightOccupied));
        assert_eq!(m.len(), 1);
        assert!(!m.contains_left(&'b'));
        assert_eq!(m.get_by_right(&1), Some(&'a'));
    }

    #[test]
    fn double_collision_reports_left_first() {
        let mut m = BiMap::new();
        m.insert('a', 1).unwrap();
        assert_eq!(m.insert('a', 1), Err(BiMapError::LeftOccupied));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut m = BiMap::with_capacity(3);
        m.insert(30, "c").unwrap();
        m.insert(10, "a").unwrap();
        m.insert(20, "b").unwrap();
        let order: Vec<_> = m.iter().map(|(l, _)| *l).collect();
        assert_eq!(order, vec![30, 10, 20]);
    }

    #[test]
    fn default_is_empty() {
        let m: BiMap<u8, u8> = BiMap::default();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sides_stay_in_lockstep(
                pairs in proptest::collection::vec((0u8..32, 0u8..32), 0..64),
            ) {
                let mut m = BiMap::new();
                for (l, r) in pairs {
                    let _ = m.insert(l, r);
                }
                prop_assert_eq!(m.forward.len(), m.reverse.len());
                for (l, r) in m.iter() {
                    prop_assert_eq!(m.get_by_right(r), Some(l));
                }
            }

            #[test]
            fn accepted_iff_both_sides_fresh(
                pairs in proptest::collection::vec((0u8..16, 0u8..16), 0..48),
            ) {
                let mut m = BiMap::new();
                for (l, r) in pairs {
                    let fresh = !m.contains_left(&l) && !m.contains_right(&r);
                    prop_assert_eq!(m.insert(l, r).is_ok(), fresh);
                }
            }
        }
    }
}
