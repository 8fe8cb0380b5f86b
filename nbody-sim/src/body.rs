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
//! Simulated bodies
//!
//! A [`Body`] is a plain value record: kinematic state, a validated mass and
//! two display attributes. Force and integration code reads only position,
//! velocity and mass. `radius` and `color` are carried for the renderer and
//! must never influence physics.

use crate::error::{Error, Result};
use crate::math::Vector2D;

/// Opaque RGBA display color
///
/// The simulation stores and returns this value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::rgba(r, g, b, 255)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// One simulated mass
///
/// # Examples
///
/// ```
/// use nbody_sim::{Body, Color};
/// use nbody_sim::math::Vector2D;
///
/// let sun = Body::new(Vector2D::new(500.0, 400.0), Vector2D::zero(), 1.989e30)
///     .unwrap()
///     .with_radius(20.0)
///     .with_color(Color::rgb(255, 255, 0));
/// assert_eq!(sun.mass(), 1.989e30);
///
/// assert!(Body::new(Vector2D::zero(), Vector2D::zero(), 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) position: Vector2D,
    pub(crate) velocity: Vector2D,
    mass: f64,
    radius: f64,
    color: Color,
}

impl Body {
    /// Create a body with the given initial state
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMass`] if `mass` is zero, negative or not
    /// finite. Acceleration divides by mass, so such bodies are never
    /// admitted into a simulation.
    pub fn new(position: Vector2D, velocity: Vector2D, mass: f64) -> Result<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(Error::InvalidMass { mass });
        }

        Ok(Body {
            position,
            velocity,
            mass,
            radius: 1.0,
            color: Color::default(),
        })
    }

    /// Set the display radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the display color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Current position in simulation-space units
    pub fn position(&self) -> Vector2D {
        self.position
    }

    /// Current velocity in simulation-space units per time unit
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    /// Mass in kilograms, always positive and finite
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Display radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Display color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> Vector2D {
        self.velocity.scale(self.mass)
    }

    /// Check if position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_creation() {
        let body = Body::new(Vector2D::new(1.0, 2.0), Vector2D::new(-1.0, 0.5), 10.0).unwrap();
        assert_eq!(body.position(), Vector2D::new(1.0, 2.0));
        assert_eq!(body.velocity(), Vector2D::new(-1.0, 0.5));
        assert_eq!(body.mass(), 10.0);
        assert_eq!(body.radius(), 1.0);
        assert_eq!(body.color(), Color::WHITE);
        assert!(body.is_valid());
    }

    #[test]
    fn test_zero_mass_rejected() {
        let result = Body::new(Vector2D::zero(), Vector2D::zero(), 0.0);
        assert_eq!(result, Err(Error::InvalidMass { mass: 0.0 }));
    }

    #[test]
    fn test_negative_mass_rejected() {
        let result = Body::new(Vector2D::zero(), Vector2D::zero(), -5.0);
        assert!(matches!(result, Err(Error::InvalidMass { mass }) if mass == -5.0));
    }

    #[test]
    fn test_non_finite_mass_rejected() {
        assert!(Body::new(Vector2D::zero(), Vector2D::zero(), f64::NAN).is_err());
        assert!(Body::new(Vector2D::zero(), Vector2D::zero(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_attributes_passthrough() {
        let color = Color::rgba(12, 34, 56, 78);
        let body = Body::new(Vector2D::zero(), Vector2D::zero(), 1.0)
            .unwrap()
            .with_radius(4.5)
            .with_color(color);
        assert_eq!(body.radius(), 4.5);
        assert_eq!(body.color(), color);
    }

    #[test]
    fn test_momentum() {
        let body = Body::new(Vector2D::zero(), Vector2D::new(2.0, -3.0), 4.0).unwrap();
        assert_eq!(body.momentum(), Vector2D::new(8.0, -12.0));
    }
}
