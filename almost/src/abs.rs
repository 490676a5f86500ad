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

//! Magnitude helpers that do not depend on `std`.

/// Returns the magnitude of `x`.
///
/// Unlike a bare `if x < 0.0 { -x } else { x }`, negative zero maps to positive zero. NaN is
/// returned unchanged.
///
/// ```rust
/// use almost::abs_f32;
///
/// assert_eq!(abs_f32(-2.5), 2.5);
/// assert!(abs_f32(-0.0).is_sign_positive());
/// ```
#[inline]
#[must_use]
pub fn abs_f32(x: f32) -> f32 {
    if x < 0.0 {
        -x
    } else if x == 0.0 {
        0.0 // clears the sign bit of -0.0
    } else {
        x
    }
}

/// Returns the magnitude of `x`, the [`f64`] counterpart of [`abs_f32`].
#[inline]
#[must_use]
pub fn abs_f64(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else if x == 0.0 {
        0.0
    } else {
        x
    }
}
