// Copyright 2025 eraflo
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

//! A 3-component vector for projection offsets, rotations and scales.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use super::EPSILON;

/// A 3-dimensional vector with `f32` components.
///
/// Rotations stored in a `Vec3` are Euler angles in degrees, matching how
/// material editors present projection angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if every component differs from `other` by less than `epsilon`.
    #[inline]
    pub fn approx_eq_eps(&self, other: Self, epsilon: f32) -> bool {
        self.abs_diff_eq(&other, epsilon)
    }

    /// Returns a copy where every component equal to `0.0` is replaced by `replacement`.
    ///
    /// Older material files wrote an unset scale axis as zero; a zero scale
    /// would collapse the projection, so loaders substitute `1.0`.
    #[inline]
    pub fn replace_zeros(self, replacement: f32) -> Self {
        let fix = |c: f32| if c == 0.0 { replacement } else { c };
        Self::new(fix(self.x), fix(self.y), fix(self.z))
    }
}

impl Default for Vec3 {
    /// Returns `Vec3::ZERO`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}
