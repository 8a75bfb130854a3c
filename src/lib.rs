//! `step_interval_map` is a total map from ordered keys to values, stored as a step function.
//!
//! The map starts out with a single value covering the whole key domain. Values are
//! changed by assigning a constant to a half-open key interval `[begin, end)`, and any
//! key can be looked up in O(logN) time.
//!
//! Internally the map keeps one breakpoint per value change, starting at the lowest
//! representable key. The breakpoints are always canonical: two adjacent breakpoints
//! never carry the same value, so the size of the map tracks the number of distinct
//! value changes rather than the number of assignments.
//!
//! # Example
//!
//! ```rust
//! use step_interval_map::IntervalMap;
//!
//! let mut map = IntervalMap::<i32, char>::new('A');
//! map.assign(3, 7, 'B');
//! assert_eq!(map.get(&2), &'A');
//! assert_eq!(map[&3], 'B');
//! assert_eq!(map.get(&7), &'A');
//! assert_eq!(map.len(), 3);
//! ```
//!

mod bounds;
mod error;
mod intervalmap;


pub use bounds::KeyBounds;
pub use error::{Error, Result};
pub use intervalmap::IntervalMap;
