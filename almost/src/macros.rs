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

/// Approximate equality using a relative error with an absolute floor near zero.
///
/// ```rust
/// # #[macro_use] extern crate almost;
/// # fn main() {
/// assert!(almost_eq!(1_000_000.0, 1_000_001.0, epsilon = 0.00001));
/// assert!(almost_eq!(0.0f32, -0.0f32));
/// # }
/// ```
#[macro_export]
macro_rules! almost_eq {
    ($lhs:expr, $rhs:expr $(, $set:ident = $val:expr)* $(,)?) => {
        $crate::AlmostEqual::default()$(.$set($val))*.eq(&$lhs, &$rhs)
    };
}

/// Approximate inequality using a relative error with an absolute floor near zero.
///
/// ```rust
/// # #[macro_use] extern crate almost;
/// # fn main() {
/// assert!(almost_ne!(10_000.0, 10_001.0, epsilon = 0.00001));
/// assert!(almost_ne!(f64::NAN, f64::NAN, epsilon = 1.0e300));
/// # }
/// ```
#[macro_export]
macro_rules! almost_ne {
    ($lhs:expr, $rhs:expr $(, $set:ident = $val:expr)* $(,)?) => {
        $crate::AlmostEqual::default()$(.$set($val))*.ne(&$lhs, &$rhs)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_almost {
    ($eq:ident, $given:expr, $expected:expr) => {{
        match (&($given), &($expected)) {
            (given, expected) => assert!(
                $crate::$eq!(*given, *expected),
"assert_{}!({}, {})

    left  = {:?}
    right = {:?}

",
                stringify!($eq),
                stringify!($given),
                stringify!($expected),
                given, expected,
            ),
        }
    }};
    ($eq:ident, $given:expr, $expected:expr, $($set:ident = $val:expr),+ $(,)?) => {{
        match (&($given), &($expected)) {
            (given, expected) => assert!(
                $crate::$eq!(*given, *expected, $($set = $val),+),
"assert_{}!({}, {}, {})

    left  = {:?}
    right = {:?}

",
                stringify!($eq),
                stringify!($given),
                stringify!($expected),
                stringify!($($set = $val),+),
                given, expected,
            ),
        }
    }};
}

/// An assertion that delegates to [`almost_eq!`], and panics with a helpful error on failure.
#[macro_export]
macro_rules! assert_almost_eq {
    ($given:expr, $expected:expr $(, $set:ident = $val:expr)* $(,)?) => {
        $crate::__assert_almost!(almost_eq, $given, $expected $(, $set = $val)*)
    };
}

/// An assertion that delegates to [`almost_ne!`], and panics with a helpful error on failure.
#[macro_export]
macro_rules! assert_almost_ne {
    ($given:expr, $expected:expr $(, $set:ident = $val:expr)* $(,)?) => {
        $crate::__assert_almost!(almost_ne, $given, $expected $(, $set = $val)*)
    };
}

/// Like [`assert_almost_eq!`], but only checked when `cfg(debug_assertions)` is active.
#[macro_export]
macro_rules! debug_assert_almost_eq {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_almost_eq!($($arg)*);
        }
    };
}

/// Like [`assert_almost_ne!`], but only checked when `cfg(debug_assertions)` is active.
#[macro_export]
macro_rules! debug_assert_almost_ne {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_almost_ne!($($arg)*);
        }
    };
}
