use std::fmt::{Debug, Display};

/// A fixed-width integer that a power sequence can be computed in.
///
/// Multiplication always wraps on overflow, so a sequence never panics no
/// matter how large the exponent gets.
pub trait Accumulator: Copy + Debug + Display + PartialEq {
    /// The multiplicative identity the running product starts from.
    const ONE: Self;

    /// Multiplies `self` by `rhs`, wrapping around at the type's boundary.
    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_accumulator {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Accumulator for $ty {
                const ONE: Self = 1;

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

impl_accumulator!(i32, i64, u32, u64);
