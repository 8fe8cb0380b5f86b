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
//! Softened Newtonian gravity
//!
//! Newton's law of universal gravitation states that every point mass attracts
//! every other point mass with a force proportional to the product of their
//! masses and inversely proportional to the square of the distance between
//! them:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! # Softening
//!
//! To keep forces bounded when two bodies pass very close, a softening length
//! ε is added to the squared separation:
//!
//! **F = G * (m₁ * m₂) / (r² + ε²)**
//!
//! The direction is the exact unit vector from `a` to `b` (ε is not applied
//! under the square root), so the magnitude never exceeds `G*m₁*m₂/ε²`. See
//! Aarseth, S. J. (2003). "Gravitational N-Body Simulations".
//!
//! # Display scaling
//!
//! Positions live in display-scaled units while masses and `G` stay in SI.
//! The resulting force is multiplied by a scale factor so real masses drive a
//! compact on-screen scene.
//!
//! # Numerical Stability
//!
//! - Coincident bodies (zero separation) receive zero force
//! - Non-finite magnitudes or components are rejected and logged

use super::ForceModel;
use crate::body::Body;
use crate::config::SimulationConfig;
use crate::math::Vector2D;

/// Softened gravitational force law
///
/// # Example
///
/// ```
/// use nbody_sim::forces::{ForceModel, SoftenedGravity};
/// use nbody_sim::{Body, SimulationConfig};
/// use nbody_sim::math::Vector2D;
///
/// let gravity = SoftenedGravity::from_config(&SimulationConfig::default());
/// let a = Body::new(Vector2D::new(0.0, 0.0), Vector2D::zero(), 1e30).unwrap();
/// let b = Body::new(Vector2D::new(10.0, 0.0), Vector2D::zero(), 1e30).unwrap();
///
/// let f = gravity.force_between(&a, &b);
/// assert!(f.x > 0.0);
/// assert_eq!(f.y, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftenedGravity {
    g_constant: f64,
    softening: f64,
    scale_factor: f64,
}

impl SoftenedGravity {
    /// Create a gravity model from explicit constants
    ///
    /// Callers are expected to pass values accepted by
    /// [`SimulationConfig::validate`].
    pub fn new(g_constant: f64, softening: f64, scale_factor: f64) -> Self {
        SoftenedGravity {
            g_constant,
            softening,
            scale_factor,
        }
    }

    /// Create a gravity model from a simulation configuration
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.gravitational_constant, config.softening, config.scale_factor)
    }

    /// Get the gravitational constant
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Get the softening length
    pub fn softening(&self) -> f64 {
        self.softening
    }

    /// Get the force scale factor
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Upper bound on the force magnitude between two bodies
    ///
    /// Infinite when softening is zero.
    pub fn max_force(&self, a: &Body, b: &Body) -> f64 {
        self.g_constant * a.mass() * b.mass() / (self.softening * self.softening)
            * self.scale_factor
    }

    /// Softened potential energy of a pair, `-G*m₁*m₂ / sqrt(r² + ε²)`, scaled
    ///
    /// Returns zero for a coincident pair when softening is zero.
    pub fn potential_energy(&self, a: &Body, b: &Body) -> f64 {
        let r_squared = (b.position - a.position).magnitude_squared();
        let softened_r = (r_squared + self.softening * self.softening).sqrt();
        if softened_r == 0.0 {
            return 0.0;
        }
        -self.g_constant * a.mass() * b.mass() / softened_r * self.scale_factor
    }
}

impl Default for SoftenedGravity {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl ForceModel for SoftenedGravity {
    fn force_between(&self, a: &Body, b: &Body) -> Vector2D {
        let dx = b.position.x - a.position.x;
        let dy = b.position.y - a.position.y;

        let r_squared = dx * dx + dy * dy;
        let r = r_squared.sqrt();

        // Direction is undefined for coincident bodies
        if r == 0.0 {
            log::debug!("zero separation between bodies, contributing no force");
            return Vector2D::zero();
        }

        let softened_r_squared = r_squared + self.softening * self.softening;
        let force_magnitude = self.g_constant * a.mass() * b.mass() / softened_r_squared;

        if !force_magnitude.is_finite() {
            log::warn!("invalid force magnitude {:e} at separation {:e}", force_magnitude, r);
            return Vector2D::zero();
        }

        let force = Vector2D::new(
            force_magnitude * dx / r * self.scale_factor,
            force_magnitude * dy / r * self.scale_factor,
        );

        if !force.is_valid() {
            log::warn!("invalid force components {:?} at separation {:e}", force, r);
            return Vector2D::zero();
        }

        force
    }

    fn name(&self) -> &str {
        "softened_gravity"
    }
}

/// Force exerted on `a` by `b` under the given configuration
///
/// Convenience wrapper around [`SoftenedGravity::force_between`].
pub fn gravitational_force(a: &Body, b: &Body, config: &SimulationConfig) -> Vector2D {
    SoftenedGravity::from_config(config).force_between(a, b)
}
