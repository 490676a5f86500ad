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

//! A crate for testing whether two floating-point numbers are "close enough", using a relative
//! error test that falls back to an absolute floor near zero.
//!
//! 1. [Functions](#functions)
//! 2. [Macros](#macros)
//! 3. [The comparison](#the-comparison)
//! 4. [Supported Types](#supported-types)
//! 5. [References](#references)
//!
//! # Functions
//! The comparison is available as one plain function per width, [`almost_equal_f32`] and
//! [`almost_equal_f64`]. Neither is generic; each uses the arithmetic and the constants of its own
//! width.
//!
//! ```rust
//! use almost::{almost_equal_f32, almost_equal_f64};
//!
//! assert!(almost_equal_f64(1_000_000.0, 1_000_001.0, 0.00001));
//! assert!(!almost_equal_f64(10_000.0, 10_001.0, 0.00001));
//! assert!(almost_equal_f32(0.0, -0.0, 0.00001));
//! assert!(!almost_equal_f32(f32::NAN, f32::NAN, 1.0e9));
//! ```
//!
//! # Macros
//! The crate provides macros in the form of `almost_{eq, ne}!` and `assert_almost_{eq, ne}!`.
//! The former return a `bool` while the latter will panic.
//! The assertions are also available as `debug_assert_almost_{eq, ne}!`, which are only executed
//! when `cfg(debug_assertions)` is active.
//!
//! | | `x≈y -> bool` | `x!≈y -> bool` | `assert!(x≈y)` | `assert!(x!≈y)` |
//! |:--|:--|:--|:--|:--|
//! | [`AlmostEq`] | [`almost_eq!`] | [`almost_ne!`] | [`assert_almost_eq!`] | [`assert_almost_ne!`] |
//!
//! ```rust
//! # #[macro_use]
//! # extern crate almost;
//! # fn main() {
//! assert_almost_eq!(1.0, 1.0);                                // ✅
//! assert_almost_eq!(1.0, 1.0 + f64::EPSILON);                 // ✅ default: epsilon = f64::EPSILON
//! assert_almost_ne!(1.0, 1.1);                                // ❌ 0.1/2.1 ≥ ε
//! assert_almost_eq!(1.0, 1.1, epsilon = 0.05);                // ✅ 0.1/2.1 < 0.05
//! assert_almost_eq!(1.1, 1.0, epsilon = 0.05);                // ✅ order doesn't matter
//! assert_almost_ne!(0.0, 1e-300, epsilon = 0.5);              // ❌ zero operand: absolute floor
//! assert_almost_eq!(0.0, 1e-310, epsilon = 0.5);              // ✅ below ε * MIN_NORMAL_F64
//! # }
//! ```
//!
//! # The comparison
//!
//! For a tolerance `ε`, two values `a` and `b` are almost equal when:
//!
//! 1. `a == b` under native equality (this covers `0.0 == -0.0` and equal infinities), or
//! 2. either operand is zero, or `|a - b|` is below the smallest normal value of the width, and
//!    `|a - b| < ε * MIN_NORMAL`, or
//! 3. otherwise `|a - b| / (|a| + |b|) < ε`.
//!
//! The denominator is the *sum* of the magnitudes, not their maximum, so the ratio is symmetric in
//! `a` and `b` and lies in `[0, 2]`. When that sum overflows, the ratio is computed on the halved
//! operands instead, which is exact at those magnitudes.
//!
//! NaN is never almost equal to anything, whatever the tolerance. The tolerance is not validated:
//! a zero, negative or NaN `ε` gives whatever the arithmetic gives, deterministically.
//!
//! # Supported Types
//!
//! | | [`AlmostEq`] | Comment |
//! |--|:--:|--|
//! | [`f32`], [`f64`] | ✅ | |
//! | `&T`, `&mut T` | ✅ | where `T: AlmostEq` |
//! | `ordered_float::OrderedFloat<T>` | ✅ | feature `ordered_float`, `T` is `f32` or `f64` |
//! | `ordered_float::NotNan<T>` | ✅ | feature `ordered_float`, `T` is `f32` or `f64` |
//!
//! # References
//!
//! - [The Floating Point Guide - Comparison](http://floating-point-gui.de/errors/comparison/)
//! - [Comparing Floating Point Numbers, 2012 Edition](
//!   https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/)

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "ordered_float")]
#[cfg_attr(docsrs, doc(cfg(feature = "ordered_float")))]
extern crate ordered_float;

mod abs;
mod almost_eq;

mod macros;

pub use abs::{abs_f32, abs_f64};
pub use almost_eq::{almost_equal_f32, almost_equal_f64, AlmostEq};

/// The smallest positive normal value of type [`f64`].
///
/// Differences below this are compared against `ε * MIN_NORMAL_F64` rather than relatively.
pub const MIN_NORMAL_F64: f64 = f64::from_bits(0x0010_0000_0000_0000);

/// The smallest positive normal value of type [`f32`].
///
/// Differences below this are compared against `ε * MIN_NORMAL_F32` rather than relatively.
pub const MIN_NORMAL_F32: f32 = f32::from_bits(0x0080_0000);

/// The requisite parameters for testing for approximate equality.
///
/// This is not normally used directly, rather via the
/// `assert_almost_{eq|ne}!` and `almost_{eq|ne}!` macros.
///
/// # Example
///
/// ```rust
/// use almost::AlmostEqual;
///
/// assert!(AlmostEqual::default().eq(&1.0, &1.0));
/// assert!(AlmostEqual::default().epsilon(0.00001).eq(&1_000_000.0, &1_000_001.0));
/// assert!(AlmostEqual::default().epsilon(0.00001).ne(&10_000.0, &10_001.0));
/// ```
pub struct AlmostEqual<A, B = A>
where
    A: AlmostEq<B> + ?Sized,
    B: ?Sized,
{
    /// The relative tolerance, also scaling the absolute floor near zero.
    pub epsilon: A::Epsilon,
}

impl<A, B> Default for AlmostEqual<A, B>
where
    A: AlmostEq<B> + ?Sized,
    B: ?Sized,
{
    #[inline]
    fn default() -> AlmostEqual<A, B> {
        AlmostEqual {
            epsilon: A::default_epsilon(),
        }
    }
}

impl<A, B> AlmostEqual<A, B>
where
    A: AlmostEq<B> + ?Sized,
    B: ?Sized,
{
    /// Replace the epsilon value with the one specified.
    #[inline]
    pub fn epsilon(self, epsilon: A::Epsilon) -> AlmostEqual<A, B> {
        AlmostEqual { epsilon }
    }

    /// Perform the equality comparison
    #[inline]
    #[must_use]
    pub fn eq(self, lhs: &A, rhs: &B) -> bool {
        A::almost_eq(lhs, rhs, self.epsilon)
    }

    /// Perform the inequality comparison
    #[inline]
    #[must_use]
    pub fn ne(self, lhs: &A, rhs: &B) -> bool {
        A::almost_ne(lhs, rhs, self.epsilon)
    }
}
