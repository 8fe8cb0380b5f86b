// Copyright 2025 John Brosnihan
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
//! Two-dimensional vector arithmetic
//!
//! [`Vector2D`] is the single value type used for positions, velocities,
//! accelerations and forces. It is `Copy` and every operation returns a new
//! value, so force and integration code never aliases body state.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// 2D vector with double-precision components
///
/// # Examples
///
/// ```
/// use nbody_sim::math::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(Vector2D::add(v, v.scale(-1.0)), Vector2D::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vector2D {
    /// Create a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Vector2D::new(0.0, 0.0)
    }

    /// Elementwise sum of two vectors
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    /// Elementwise difference `self - other`
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Vector2D) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    /// Multiply both components by a scalar
    pub fn scale(self, k: f64) -> Self {
        Vector2D::new(self.x * k, self.y * k)
    }

    /// Squared Euclidean length
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Get the vector as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = Vector2D::add(*self, rhs);
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::sub(self, rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, k: f64) -> Vector2D {
        self.scale(k)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        self.scale(-1.0)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(arr: [f64; 2]) -> Self {
        Vector2D::new(arr[0], arr[1])
    }
}
