use std::cmp;

use step_interval_map::{IntervalMap, KeyBounds};

/// A string key with explicit ends, so that every string lies strictly inside the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringKey {
    /// Before every string, the empty one included
    Lowest,
    /// String
    String(String),
    /// After every string
    Unbounded,
}

impl StringKey {
    pub fn new_key(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl PartialOrd for StringKey {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StringKey {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        match (self, other) {
            (StringKey::String(x), StringKey::String(y)) => x.cmp(y),
            (StringKey::Lowest, StringKey::Lowest) | (StringKey::Unbounded, StringKey::Unbounded) => {
                cmp::Ordering::Equal
            }
            (StringKey::Lowest, _) | (_, StringKey::Unbounded) => cmp::Ordering::Less,
            (_, StringKey::Lowest) | (StringKey::Unbounded, _) => cmp::Ordering::Greater,
        }
    }
}

impl KeyBounds for StringKey {
    fn lowest() -> Self {
        StringKey::Lowest
    }

    fn highest() -> Self {
        StringKey::Unbounded
    }
}

fn main() {
    let mut owners = IntervalMap::<StringKey, &str>::new("unassigned");
    owners.assign(StringKey::new_key("a"), StringKey::new_key("m"), "alice");
    owners.assign(StringKey::new_key("m"), StringKey::Unbounded, "bob");

    assert_eq!(owners.get(&StringKey::new_key("")), &"unassigned");
    assert_eq!(owners.get(&StringKey::new_key("kiwi")), &"alice");
    assert_eq!(owners.get(&StringKey::new_key("zebra")), &"bob");
    assert_eq!(owners.len(), 3);

    // handing "g".."t" to alice extends her run into bob's
    owners.assign(StringKey::new_key("g"), StringKey::new_key("t"), "alice");
    assert_eq!(owners.get(&StringKey::new_key("s")), &"alice");
    assert_eq!(owners.get(&StringKey::new_key("t")), &"bob");
    assert_eq!(owners.len(), 3);

    println!("{:?}", owners.into_breakpoints());
}
