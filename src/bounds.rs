//! Domain bounds of the keys stored in an `IntervalMap`.
//!
//! Every map holds a breakpoint at [`KeyBounds::lowest`], which is what makes lookups
//! total. [`KeyBounds::highest`] is reserved: passed as the end of an assignment it means
//! "through the end of the domain", so it should not be used as an ordinary key.

/// Lowest and highest representable values of a key type.
///
/// Implementations must agree with `Ord`: `lowest()` compares less than or equal to,
/// and `highest()` greater than or equal to, every other value of the type.
pub trait KeyBounds {
    /// The lowest key, where the first breakpoint of every map lives.
    fn lowest() -> Self;

    /// The highest key, used as the open end of an assignment.
    fn highest() -> Self;
}

macro_rules! impl_key_bounds {
    ($($t:ty),* $(,)?) => {
        $(
            impl KeyBounds for $t {
                #[inline(always)]
                fn lowest() -> Self {
                    <$t>::MIN
                }
                #[inline(always)]
                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

impl_key_bounds!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl KeyBounds for char {
    #[inline(always)]
    fn lowest() -> Self {
        '\0'
    }
    #[inline(always)]
    fn highest() -> Self {
        char::MAX
    }
}
