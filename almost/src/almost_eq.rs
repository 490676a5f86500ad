// Copyright 2015 Brendan Zabarauskas
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "ordered_float")]
use ordered_float::{NotNan, OrderedFloat};

use crate::abs::{abs_f32, abs_f64};
use crate::{MIN_NORMAL_F32, MIN_NORMAL_F64};

/// Returns `true` if `a` and `b` are equal within a relative error of `epsilon`.
///
/// The relative error is `|a - b| / (|a| + |b|)`. When either operand is zero, or `|a - b|` is
/// below [`MIN_NORMAL_F64`], the difference is instead compared against
/// `epsilon * MIN_NORMAL_F64`. NaN compares unequal to everything, itself included.
///
/// `epsilon` is expected to be positive and finite; it is not checked.
///
/// ```rust
/// use almost::almost_equal_f64;
///
/// assert!(almost_equal_f64(1.0000001, 1.0000002, 0.00001));
/// assert!(!almost_equal_f64(1.0002, 1.0001, 0.00001));
/// assert!(almost_equal_f64(f64::INFINITY, f64::INFINITY, 0.00001));
/// assert!(!almost_equal_f64(f64::MAX, f64::MAX / 2.0, 0.00001));
/// ```
#[must_use]
pub fn almost_equal_f64(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = abs_f64(a - b);
    if a == 0.0 || b == 0.0 || diff < MIN_NORMAL_F64 {
        return diff < epsilon * MIN_NORMAL_F64;
    }
    let sum = abs_f64(a) + abs_f64(b);
    if sum.is_finite() {
        return diff / sum < epsilon;
    }
    // `|a| + |b|` overflowed: halving both sides is exact at this magnitude.
    abs_f64(a * 0.5 - b * 0.5) / (abs_f64(a) * 0.5 + abs_f64(b) * 0.5) < epsilon
}

/// Returns `true` if `a` and `b` are equal within a relative error of `epsilon`.
///
/// This is the [`f32`] counterpart of [`almost_equal_f64`], using [`MIN_NORMAL_F32`] as the
/// absolute floor and single-precision arithmetic throughout.
///
/// ```rust
/// use almost::almost_equal_f32;
///
/// let tiny = f32::from_bits(1);
/// assert!(almost_equal_f32(tiny, -tiny, 0.00001));
/// assert!(!almost_equal_f32(0.000000001, tiny, 0.00001));
/// ```
#[must_use]
pub fn almost_equal_f32(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    let diff = abs_f32(a - b);
    if a == 0.0 || b == 0.0 || diff < MIN_NORMAL_F32 {
        return diff < epsilon * MIN_NORMAL_F32;
    }
    let sum = abs_f32(a) + abs_f32(b);
    if sum.is_finite() {
        return diff / sum < epsilon;
    }
    abs_f32(a * 0.5 - b * 0.5) / (abs_f32(a) * 0.5 + abs_f32(b) * 0.5) < epsilon
}

/// Equality comparisons between two numbers using a relative error with an absolute floor
/// near zero.
///
/// See [`almost_equal_f64`] for the exact test.
pub trait AlmostEq<Rhs = Self>
where
    Rhs: ?Sized,
{
    /// Used for specifying the relative tolerance.
    type Epsilon;

    /// The default tolerance used by the macros and by [`AlmostEqual`](crate::AlmostEqual).
    fn default_epsilon() -> Self::Epsilon;

    /// A test for equality within a relative error of `epsilon`.
    fn almost_eq(&self, other: &Rhs, epsilon: Self::Epsilon) -> bool;

    /// The inverse of [`AlmostEq::almost_eq`].
    fn almost_ne(&self, other: &Rhs, epsilon: Self::Epsilon) -> bool {
        !Self::almost_eq(self, other, epsilon)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
// Base implementations
///////////////////////////////////////////////////////////////////////////////////////////////////

macro_rules! impl_almost_eq {
    ($T:ident, $almost_equal:ident) => {
        impl AlmostEq for $T {
            type Epsilon = $T;

            #[inline]
            fn default_epsilon() -> $T {
                $T::EPSILON
            }

            #[inline]
            fn almost_eq(&self, other: &$T, epsilon: $T) -> bool {
                $almost_equal(*self, *other, epsilon)
            }
        }
    };
}

impl_almost_eq!(f32, almost_equal_f32);
impl_almost_eq!(f64, almost_equal_f64);

///////////////////////////////////////////////////////////////////////////////////////////////////
// Derived implementations
///////////////////////////////////////////////////////////////////////////////////////////////////

impl<'a, T: AlmostEq + ?Sized> AlmostEq for &'a T {
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn almost_eq(&self, other: &&'a T, epsilon: T::Epsilon) -> bool {
        T::almost_eq(*self, *other, epsilon)
    }
}

impl<'a, T: AlmostEq + ?Sized> AlmostEq for &'a mut T {
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn almost_eq(&self, other: &&'a mut T, epsilon: T::Epsilon) -> bool {
        T::almost_eq(*self, *other, epsilon)
    }
}

#[cfg(feature = "ordered_float")]
macro_rules! impl_almost_eq_ordered_float {
    ($T:ident) => {
        impl AlmostEq for OrderedFloat<$T> {
            type Epsilon = $T;

            #[inline]
            fn default_epsilon() -> $T {
                $T::default_epsilon()
            }

            #[inline]
            fn almost_eq(&self, other: &Self, epsilon: $T) -> bool {
                self.0.almost_eq(&other.0, epsilon)
            }
        }

        impl AlmostEq<$T> for OrderedFloat<$T> {
            type Epsilon = $T;

            #[inline]
            fn default_epsilon() -> $T {
                $T::default_epsilon()
            }

            #[inline]
            fn almost_eq(&self, other: &$T, epsilon: $T) -> bool {
                self.0.almost_eq(other, epsilon)
            }
        }

        impl AlmostEq for NotNan<$T> {
            type Epsilon = $T;

            #[inline]
            fn default_epsilon() -> $T {
                $T::default_epsilon()
            }

            #[inline]
            fn almost_eq(&self, other: &Self, epsilon: $T) -> bool {
                self.into_inner().almost_eq(&other.into_inner(), epsilon)
            }
        }
    };
}

#[cfg(feature = "ordered_float")]
impl_almost_eq_ordered_float!(f32);
#[cfg(feature = "ordered_float")]
impl_almost_eq_ordered_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_short_circuit() {
        assert!(almost_equal_f64(0.0, -0.0, 0.0));
        assert!(almost_equal_f64(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0));
        assert!(almost_equal_f32(-0.0, 0.0, 0.0));
        assert!(almost_equal_f32(f32::INFINITY, f32::INFINITY, 0.0));
    }

    #[test]
    fn test_absolute_floor_branch() {
        // One operand is zero: the test is `diff < ε * MIN_NORMAL`.
        assert!(almost_equal_f64(0.0, 1e-310, 0.01));
        assert!(!almost_equal_f64(0.0, 1e-310, 0.000001));
        assert!(almost_equal_f32(0.0, 1e-40, 0.01));
        assert!(!almost_equal_f32(0.0, 1e-40, 0.000001));
    }

    #[test]
    fn test_relative_uses_sum_of_magnitudes() {
        // 1 / (2 + 3) = 0.2: under a max-based denominator this would be 1 / 3.
        assert!(almost_equal_f64(2.0, 3.0, 0.2001));
        assert!(!almost_equal_f64(2.0, 3.0, 0.2));
        assert!(almost_equal_f32(2.0, 3.0, 0.2001));
        assert!(!almost_equal_f32(2.0, 3.0, 0.2));
    }

    #[test]
    fn test_overflowing_sum() {
        assert!(almost_equal_f64(f64::MAX, f64::MAX * 0.999_999_9, 0.00001));
        assert!(!almost_equal_f64(f64::MAX, f64::MAX / 2.0, 0.00001));
        assert!(!almost_equal_f64(f64::MAX, f64::MAX / 2.0, 0.33));
        assert!(almost_equal_f64(f64::MAX, f64::MAX / 2.0, 0.34));
        assert!(almost_equal_f32(f32::MAX, f32::MAX * 0.999_999, 0.00001));
        assert!(!almost_equal_f32(f32::MAX, f32::MAX / 2.0, 0.00001));
    }

    #[test]
    fn test_infinite_operand_is_not_rescued_by_rescaling() {
        assert!(!almost_equal_f64(f64::INFINITY, f64::MAX, 1.0e300));
        assert!(!almost_equal_f64(f64::INFINITY, 1.0, 1.0e300));
        assert!(!almost_equal_f32(f32::NEG_INFINITY, -f32::MAX, 1.0e30));
    }

    #[test]
    fn test_trait_matches_functions() {
        assert!(1.0f64.almost_eq(&1.0000001, 0.00001));
        assert!(1.0f32.almost_ne(&1.1, 0.00001));
        assert_eq!(<f32 as AlmostEq>::default_epsilon(), f32::EPSILON);
        assert_eq!(<f64 as AlmostEq>::default_epsilon(), f64::EPSILON);
    }

    #[test]
    fn test_references() {
        let (a, b) = (1_000_000.0f64, 1_000_001.0f64);
        assert!(AlmostEq::almost_eq(&&a, &&b, 0.00001));
        let (mut c, mut d) = (10_000.0f32, 10_001.0f32);
        assert!(AlmostEq::almost_ne(&&mut c, &&mut d, 0.00001));
    }

    #[cfg(feature = "ordered_float")]
    #[test]
    fn test_ordered_float() {
        assert!(OrderedFloat(1.0f64).almost_eq(&OrderedFloat(1.0000001), 0.00001));
        assert!(OrderedFloat(f32::NAN).almost_ne(&f32::NAN, 1.0));
        let a = NotNan::new(0.3f32).unwrap();
        let b = NotNan::new(0.30000003f32).unwrap();
        assert!(a.almost_eq(&b, 0.00001));
    }
}
