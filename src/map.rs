use core::borrow::Borrow;
use core::fmt;
use core::ops::Index;

use alloc::vec::Vec;

use crate::error::{Result, TreeError};
use crate::raw::RawTree;

mod display;
mod iter;

pub use iter::{IntoIter, Iter, Keys, Values};

/// An ordered map backed by a B+tree with a configurable minimum degree.
///
/// Keys must implement [`Ord`]; only a total order is required, never
/// hashing or equality beyond it. All entries live in leaf nodes, which are
/// threaded into a doubly linked chain in ascending key order, so full
/// scans, range lookups and sorted batched lookups never re-descend the
/// tree.
///
/// The *minimum degree* `d` is fixed at construction and must be at least
/// 2. Every node then holds at most `2d - 1` entries and every non-root
/// node at least `d - 1`; each node reserves `2d` slots up front, the last
/// of which is only occupied transiently by the insert that triggers a
/// split. Small degrees make shallow trees easy to exercise in tests;
/// larger degrees trade height for per-node fan-out.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will
/// not result in undefined behavior; it could include panics, incorrect
/// results, aborts or non-termination.
///
/// # Examples
///
/// ```
/// use bptree::BPlusTreeMap;
///
/// let mut inventory = BPlusTreeMap::new(16)?;
///
/// inventory.insert("bolt", 320);
/// inventory.insert("nut", 410);
/// inventory.insert("washer", 88);
///
/// // Point lookups.
/// assert_eq!(inventory.get(&"nut"), Some(&410));
/// assert!(!inventory.contains_key(&"screw"));
///
/// // Update in place; the previous value comes back.
/// assert_eq!(inventory.insert("washer", 90), Some(88));
/// assert_eq!(inventory.len(), 3);
///
/// // Entries are always visited in ascending key order.
/// for (part, count) in inventory.iter() {
///     println!("{part}: {count}");
/// }
///
/// // Range lookup over the leaf chain.
/// assert_eq!(inventory.get_range(&"a", &"n")?, [320]);
/// # Ok::<(), bptree::TreeError>(())
/// ```
pub struct BPlusTreeMap<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> BPlusTreeMap<K, V> {
    /// Makes a new, empty `BPlusTreeMap` with the given minimum degree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidDegree`] if `degree < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::{BPlusTreeMap, TreeError};
    ///
    /// let mut map = BPlusTreeMap::new(2).unwrap();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(BPlusTreeMap::<i32, i32>::new(1).unwrap_err(), TreeError::InvalidDegree(1));
    /// ```
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 2 {
            return Err(TreeError::InvalidDegree(degree));
        }
        Ok(Self {
            raw: RawTree::new(degree),
        })
    }

    /// Makes a new, empty `BPlusTreeMap` pre-sized for roughly `capacity`
    /// entries, so early inserts do not grow the node arena.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidDegree`] if `degree < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let map: BPlusTreeMap<u64, u64> = BPlusTreeMap::with_capacity(16, 10_000)?;
    /// assert!(map.is_empty());
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn with_capacity(degree: usize, capacity: usize) -> Result<Self> {
        if degree < 2 {
            return Err(TreeError::InvalidDegree(degree));
        }
        Ok(Self {
            raw: RawTree::with_node_capacity(degree, capacity),
        })
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(4)?;
    /// assert!(map.is_empty());
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of edges from the root to any leaf. An empty map
    /// (and any map whose root is still a leaf) has height 0.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns the minimum degree the map was constructed with.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.raw.degree()
    }

    /// Clears the map, removing all entries and releasing all nodes. The
    /// map is reset to an empty leaf root at height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.height(), 0);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(3, "c");
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.raw)
    }

    /// Gets an iterator over the keys of the map, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.raw)
    }

    /// Gets an iterator over the values of the map, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(1, "hello");
    /// map.insert(2, "goodbye");
    ///
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(&self.raw)
    }
}

impl<K: Ord + Clone, V> BPlusTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Collects the values of every entry whose key lies in the inclusive
    /// range `[start, end]`, in ascending key order. The range lookup
    /// descends once to the leaf that would hold `start` and then walks the
    /// leaf chain, so it costs O(log n + m) for m results.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidRange`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// for k in [1, 3, 5, 7] {
    ///     map.insert(k, k * 10);
    /// }
    /// assert_eq!(map.get_range(&2, &6)?, [30, 50]);
    /// assert_eq!(map.get_range(&8, &9)?, []);
    /// assert!(map.get_range(&6, &2).is_err());
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn get_range<Q>(&self, start: &Q, end: &Q) -> Result<Vec<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        V: Clone,
    {
        if start > end {
            return Err(TreeError::InvalidRange);
        }
        Ok(self.raw.range_values(start, end))
    }

    /// Looks up a batch of keys in one forward walk over the leaf chain.
    ///
    /// The input **must be sorted ascending**; the walk only ever moves
    /// forward, so out-of-order keys are passed over and reported absent.
    /// The result has the same length and order as the input, with `None`
    /// for each key not present. An empty input yields an empty result.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// for k in [1, 3, 5] {
    ///     map.insert(k, k * 10);
    /// }
    /// assert_eq!(map.get_many(&[1, 2, 5]), [Some(10), None, Some(50)]);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn get_many<Q>(&self, keys: &[Q]) -> Vec<Option<V>>
    where
        K: Borrow<Q>,
        Q: Ord,
        V: Clone,
    {
        self.raw.get_many(keys)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned. If it
    /// did, the value is replaced in place - no entries shift, the length
    /// does not change - and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map[&37], "b");
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning its value if the key was
    /// present. Underfull nodes on the way back up borrow from a sibling
    /// or merge, and the root shrinks when it is left with a single child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Returns the entry with the smallest key, if any.
    ///
    /// # Complexity
    ///
    /// O(log n) - descends leftmost children to the first leaf.
    #[allow(clippy::must_use_candidate)]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the entry with the largest key, if any.
    ///
    /// # Complexity
    ///
    /// O(log n) - descends rightmost children to the last leaf.
    #[allow(clippy::must_use_candidate)]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Removes and returns the entry with the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree::BPlusTreeMap;
    ///
    /// let mut map = BPlusTreeMap::new(2)?;
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// # Ok::<(), bptree::TreeError>(())
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let key = self.raw.first_key_value()?.0.clone();
        let value = self.raw.remove(&key)?;
        Some((key, value))
    }

    /// Removes and returns the entry with the largest key, if any.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.raw.last_key_value()?.0.clone();
        let value = self.raw.remove(&key)?;
        Some((key, value))
    }
}

impl<K: Clone, V: Clone> Clone for BPlusTreeMap<K, V> {
    fn clone(&self) -> Self {
        // Arena slots clone positionally, so every child and chain id in
        // the cloned tree refers to the cloned arena.
        Self {
            raw: self.raw.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BPlusTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Equality is over the logical entry sequence; the minimum degrees of the
/// two maps need not match.
impl<K: PartialEq, V: PartialEq> PartialEq for BPlusTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for BPlusTreeMap<K, V> {}

impl<K: Ord + Clone, V> Extend<(K, V)> for BPlusTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, Q, V> Index<&Q> for BPlusTreeMap<K, V>
where
    K: Borrow<Q> + Ord + Clone,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> IntoIterator for &'a BPlusTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for BPlusTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consumes the map into an iterator over its entries, sorted by key.
    /// The entries are drained through the leaf chain in O(n).
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter::new(self.raw.drain_to_vec())
    }
}
