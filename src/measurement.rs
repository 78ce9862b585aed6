//! Numeric capabilities required of a measurement type
//!
//! An [`Accumulator`](crate::statistics::Accumulator) only needs a handful of
//! operations from the values it summarises: an additive zero, the sentinel
//! extremes, ordering, a self-product, division by a population size and a
//! square root that maps a squared value back to the measurement type.
//!
//! The product type is an associated type so that unit-carrying quantities can
//! square into a different type (seconds into seconds squared). For the
//! primitive types it is the type itself and [`Measurement::square`] is `x * x`.
//!
//! ```
//! use runstats::measurement::{DivCount, Measurement};
//!
//! assert_eq!(10.0_f64.div_count(4), 2.5);
//! assert_eq!(10_i32.div_count(4), 2);
//! assert_eq!(<f64 as Measurement>::sqrt_of(9.0), 3.0);
//! ```

use core::fmt::Debug;
use core::ops::Sub;

use num_integer::Roots;
use num_traits::{Bounded, Zero};

use crate::math;

/// Division of a running total by the number of values it was built from
pub trait DivCount: Sized {
    /// Divide `self` by `count`
    ///
    /// Integer implementations truncate toward zero, like `/` does.
    fn div_count(self, count: u64) -> Self;
}

/// A value that can be fed into an accumulator
///
/// `Bounded::max_value()` and `Bounded::min_value()` are used as the sentinel
/// minimum and maximum of an empty accumulator, so `min_value()` must be the
/// lowest representable value (`f64::MIN`, not `f64::MIN_POSITIVE`).
pub trait Measurement: Copy + PartialOrd + Debug + Zero + Bounded + DivCount {
    /// Type of `self * self`
    type Squared: Copy + PartialOrd + Debug + Zero + Sub<Output = Self::Squared> + DivCount;

    /// `self * self`
    fn square(self) -> Self::Squared;

    /// Square root of a squared value, expressed in the measurement type
    fn sqrt_of(squared: Self::Squared) -> Self;
}

macro_rules! impl_float {
    ($($t:ty => $sqrt:path),* $(,)?) => {$(
        impl DivCount for $t {
            #[inline]
            fn div_count(self, count: u64) -> Self {
                self / count as $t
            }
        }

        impl Measurement for $t {
            type Squared = $t;

            #[inline]
            fn square(self) -> $t {
                self * self
            }

            #[inline]
            fn sqrt_of(squared: $t) -> Self {
                $sqrt(squared)
            }
        }
    )*};
}

macro_rules! impl_integer {
    ($wide:ty => $($t:ty),* $(,)?) => {$(
        impl DivCount for $t {
            #[inline]
            fn div_count(self, count: u64) -> Self {
                // |quotient| <= |self|, so narrowing back is lossless.
                (self as $wide / <$wide>::from(count)) as $t
            }
        }

        impl Measurement for $t {
            type Squared = $t;

            #[inline]
            fn square(self) -> $t {
                self * self
            }

            /// Floor of the square root; negative input yields zero.
            #[inline]
            fn sqrt_of(squared: $t) -> Self {
                Roots::sqrt(&squared.max(0))
            }
        }
    )*};
}

impl_float!(f32 => math::sqrtf, f64 => math::sqrt);
impl_integer!(i128 => i8, i16, i32, i64, i128, isize);
impl_integer!(u128 => u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_div_count() {
        assert_eq!(241.0_f64.div_count(23), 241.0 / 23.0);
        assert_eq!(1.5_f32.div_count(3), 0.5);
    }

    #[test]
    fn test_integer_div_count_truncates() {
        assert_eq!(7_u32.div_count(2), 3);
        assert_eq!((-7_i64).div_count(2), -3);
        assert_eq!(0_usize.div_count(1), 0);
    }

    #[test]
    fn test_integer_div_count_beyond_range() {
        assert_eq!(100_u8.div_count(300), 0);
        assert_eq!((-100_i8).div_count(1_000), 0);
        assert_eq!(200_u8.div_count(255), 0);
        assert_eq!(i8::MIN.div_count(128), -1);
        assert_eq!(i16::MIN.div_count(32_768), -1);
        assert_eq!(i128::MIN.div_count(1), i128::MIN);
        assert_eq!(u128::MAX.div_count(u64::MAX), u128::MAX / u128::from(u64::MAX));
    }

    #[test]
    fn test_square() {
        assert_eq!(3.0_f64.square(), 9.0);
        assert_eq!((-4_i32).square(), 16);
        assert_eq!(12_u8.square(), 144);
    }

    #[test]
    fn test_sqrt_of() {
        assert_eq!(<f64 as Measurement>::sqrt_of(2.25), 1.5);
        assert_eq!(<f32 as Measurement>::sqrt_of(4.0), 2.0);
        assert_eq!(<u32 as Measurement>::sqrt_of(17), 4);
        assert_eq!(<i16 as Measurement>::sqrt_of(0), 0);
        assert_eq!(<i32 as Measurement>::sqrt_of(-9), 0);
    }

    #[test]
    fn test_integer_sqrt_of_is_exact_beyond_f64_precision() {
        assert_eq!(<u64 as Measurement>::sqrt_of(u64::MAX), 4_294_967_295);
        assert_eq!(<u64 as Measurement>::sqrt_of(4_611_686_018_427_387_903), 2_147_483_647);
        assert_eq!(<u64 as Measurement>::sqrt_of(4_611_686_018_427_387_904), 2_147_483_648);
        assert_eq!(<i64 as Measurement>::sqrt_of(i64::MAX), 3_037_000_499);
        assert_eq!(<u128 as Measurement>::sqrt_of(u128::MAX), u128::from(u64::MAX));
    }

    #[test]
    fn test_sentinels_are_extremes() {
        assert_eq!(<f64 as Bounded>::min_value(), f64::MIN);
        assert_eq!(<f64 as Bounded>::max_value(), f64::MAX);
        assert_eq!(<u16 as Bounded>::min_value(), 0);
        assert_eq!(<i32 as Bounded>::max_value(), i32::MAX);
    }
}
