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
//! Toroidal wrap policy for display containment
//!
//! Opposite edges of the display area are identified, so a body leaving one
//! edge reappears at the other. This is containment for rendering only:
//! velocities and forces never see the wrap, and separations are measured
//! in unwrapped coordinates.

use crate::math::Vector2D;

/// Rectangular wrap area `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapBounds {
    width: f64,
    height: f64,
}

impl WrapBounds {
    /// Create a wrap area
    ///
    /// Dimensions must be positive and finite; `SimulationConfig::validate`
    /// enforces this for simulations.
    pub fn new(width: f64, height: f64) -> Self {
        WrapBounds { width, height }
    }

    /// Width of the wrap area
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the wrap area
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Check whether a position already lies inside the wrap area
    pub fn contains(&self, position: Vector2D) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }

    /// Map a position into the wrap area
    ///
    /// Positions already inside are returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use nbody_sim::boundary::WrapBounds;
    /// use nbody_sim::math::Vector2D;
    ///
    /// let bounds = WrapBounds::new(1000.0, 800.0);
    /// assert_eq!(bounds.wrap(Vector2D::new(1010.0, -10.0)), Vector2D::new(10.0, 790.0));
    /// assert_eq!(bounds.wrap(Vector2D::new(500.0, 400.0)), Vector2D::new(500.0, 400.0));
    /// ```
    pub fn wrap(&self, position: Vector2D) -> Vector2D {
        Vector2D::new(wrap_coordinate(position.x, self.width), wrap_coordinate(position.y, self.height))
    }
}

fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    if (0.0..extent).contains(&value) {
        return value;
    }

    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negative inputs up to exactly `extent`
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_is_noop() {
        let bounds = WrapBounds::new(1000.0, 800.0);
        for p in [
            Vector2D::new(0.0, 0.0),
            Vector2D::new(999.999, 799.999),
            Vector2D::new(608.2, 399.8249),
        ] {
            assert!(bounds.contains(p));
            assert_eq!(bounds.wrap(p), p);
        }
    }

    #[test]
    fn test_edges_wrap_to_zero() {
        let bounds = WrapBounds::new(1000.0, 800.0);
        assert_eq!(bounds.wrap(Vector2D::new(1000.0, 800.0)), Vector2D::zero());
    }

    #[test]
    fn test_far_out_of_bounds() {
        let bounds = WrapBounds::new(1000.0, 800.0);
        let p = bounds.wrap(Vector2D::new(-2500.0, 1700.0));
        assert_eq!(p, Vector2D::new(500.0, 100.0));
    }

    #[test]
    fn test_tiny_negative_stays_in_range() {
        let bounds = WrapBounds::new(1000.0, 800.0);
        let p = bounds.wrap(Vector2D::new(-1e-17, -1e-300));
        assert!(bounds.contains(p));
    }
}
