use crate::bounds::KeyBounds;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::ops::{Bound, Index};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A total map from keys to values, stored as the breakpoints of a step function.
///
/// Each breakpoint `(k, v)` means "from `k` up to the next breakpoint, the value is `v`".
/// A breakpoint at [`KeyBounds::lowest`] is always present and no two adjacent
/// breakpoints hold equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    /// Breakpoints of the step function, by starting key
    pub(crate) breakpoints: BTreeMap<K, V>,
}

#[allow(clippy::len_without_is_empty)]
impl<K, V> IntervalMap<K, V>
where
    K: Ord + Clone + KeyBounds,
    V: Eq + Clone,
{
    /// Create a new `IntervalMap` that maps every key to `initial`.
    ///
    /// # Example
    /// ```rust
    /// use step_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::<u32, &str>::new("free");
    /// assert_eq!(map.get(&0), &"free");
    /// assert_eq!(map.get(&u32::MAX), &"free");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(initial: V) -> Self {
        let mut breakpoints = BTreeMap::new();
        let _ignore = breakpoints.insert(K::lowest(), initial);
        Self { breakpoints }
    }

    /// Build an `IntervalMap` from breakpoints given in ascending key order.
    ///
    /// The sequence must already be canonical: it starts at the lowest key, keys are
    /// strictly ascending and adjacent values differ.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] naming the first violation found.
    ///
    /// # Example
    /// ```rust
    /// use step_interval_map::{Error, IntervalMap};
    ///
    /// let map = IntervalMap::from_breakpoints([(i32::MIN, 'A'), (3, 'B'), (7, 'A')]).unwrap();
    /// assert_eq!(map.get(&5), &'B');
    ///
    /// let err = IntervalMap::from_breakpoints([(i32::MIN, 'A'), (3, 'A')]).unwrap_err();
    /// assert_eq!(err, Error::Redundant { index: 1 });
    /// ```
    #[inline]
    pub fn from_breakpoints<I>(breakpoints: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let breakpoints: Vec<(K, V)> = breakpoints.into_iter().collect();
        let (first, _) = breakpoints.first().ok_or(Error::Empty)?;
        if *first != K::lowest() {
            return Err(Error::MissingLowest);
        }
        for (index, pair) in breakpoints.windows(2).enumerate() {
            let ((prev_key, prev_value), (key, value)) = (&pair[0], &pair[1]);
            if prev_key >= key {
                return Err(Error::Unordered { index: index + 1 });
            }
            if prev_value == value {
                return Err(Error::Redundant { index: index + 1 });
            }
        }
        Ok(Self {
            breakpoints: breakpoints.into_iter().collect(),
        })
    }

    /// Consume the map, returning its breakpoints in ascending key order.
    #[inline]
    #[must_use]
    pub fn into_breakpoints(self) -> Vec<(K, V)> {
        self.breakpoints.into_iter().collect()
    }

    /// Return a reference to the value at `key`.
    ///
    /// Lookup is total: the breakpoint at the lowest key governs every key that no
    /// later breakpoint does.
    ///
    /// # Example
    /// ```rust
    /// use step_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::new(0);
    /// map.assign(10u8, 20, 1);
    /// assert_eq!(map.get(&9), &0);
    /// assert_eq!(map.get(&10), &1);
    /// assert_eq!(map.get(&19), &1);
    /// assert_eq!(map.get(&20), &0);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &K) -> &V {
        self.breakpoints
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map(|(_, value)| value)
            .expect("breakpoint at the lowest key is always present")
    }

    /// Assign `value` to every key in `[begin, end)`, leaving all other keys unchanged.
    ///
    /// An empty range (`begin >= end`) is ignored. Passing [`KeyBounds::highest`] as
    /// `end` assigns through the end of the domain, the highest key included.
    ///
    /// # Example
    /// ```rust
    /// use step_interval_map::IntervalMap;
    ///
    /// let mut map = IntervalMap::new('A');
    /// map.assign(3, 7, 'B');
    /// map.assign(5, 9, 'B');
    /// assert_eq!(map.get(&2), &'A');
    /// assert_eq!(map.get(&8), &'B');
    /// assert_eq!(map.get(&9), &'A');
    /// assert_eq!(map.len(), 3);
    ///
    /// map.assign(i32::MIN, i32::MAX, 'A');
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if begin >= end {
            trace!("ignoring empty assignment range");
            return;
        }
        let open_end = end == K::highest();
        let upper = if open_end {
            Bound::Unbounded
        } else {
            Bound::Excluded(&end)
        };
        if *self.get(&begin) == value
            && self
                .breakpoints
                .range((Bound::Excluded(&begin), upper))
                .next()
                .is_none()
        {
            trace!("assignment already in effect");
            return;
        }

        // Everything the rebuild needs is read before the first mutation.
        let merges_left = self
            .breakpoints
            .range((Bound::Unbounded, Bound::Excluded(&begin)))
            .next_back()
            .is_some_and(|(_, prev)| *prev == value);
        let tail = (!open_end).then(|| self.get(&end).clone());

        let covered: Vec<K> = self
            .breakpoints
            .range((Bound::Included(&begin), upper))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &covered {
            let _ignore = self.breakpoints.remove(key);
        }

        match tail {
            Some(tail) if tail != value => {
                let _ignore = self.breakpoints.insert(end, tail);
            }
            // the following run already holds `value`, so the new one absorbs it
            Some(_) => {
                let _ignore = self.breakpoints.remove(&end);
            }
            None => {}
        }
        if !merges_left {
            let _ignore = self.breakpoints.insert(begin, value);
        }

        trace!(
            removed = covered.len(),
            len = self.breakpoints.len(),
            "assigned interval"
        );
    }

    /// Return the number of breakpoints in the map. It is never zero.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }
}

impl<K, V> Default for IntervalMap<K, V>
where
    K: Ord + Clone + KeyBounds,
    V: Eq + Clone + Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V> Index<&K> for IntervalMap<K, V>
where
    K: Ord + Clone + KeyBounds,
    V: Eq + Clone,
{
    type Output = V;

    #[inline]
    fn index(&self, key: &K) -> &V {
        self.get(key)
    }
}

#[cfg(feature = "serde")]
impl<K, V> Serialize for IntervalMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.breakpoints.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
where
    K: Deserialize<'de> + Ord + Clone + KeyBounds,
    V: Deserialize<'de> + Eq + Clone,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let breakpoints = Vec::<(K, V)>::deserialize(deserializer)?;
        Self::from_breakpoints(breakpoints).map_err(serde::de::Error::custom)
    }
}
