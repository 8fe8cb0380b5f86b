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
//! Simulation constants and configuration
//!
//! All tunables are fixed when a [`Simulation`](crate::Simulation) is built.
//! The defaults reproduce a visually compact solar system: real SI masses and
//! the real gravitational constant, with lengths scaled down by
//! [`DEFAULT_SCALE_FACTOR`] onto a 1000 x 800 display area.

use crate::error::{Error, Result};

/// Standard gravitational constant in SI units (m³/(kg⋅s²))
///
/// CODATA 2018 recommended value: 6.67430(15) × 10⁻¹¹ m³/(kg⋅s²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Default fixed timestep, one 60 Hz frame
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

/// Default softening length
///
/// Large on purpose: positions are display-scaled while masses are not, so
/// `softening²` dominates the denominator for every on-screen separation.
pub const DEFAULT_SOFTENING: f64 = 1e7;

/// Default conversion from SI force to display-scaled units
pub const DEFAULT_SCALE_FACTOR: f64 = 1e-9;

/// Default width of the wrap area
pub const DEFAULT_WIDTH: f64 = 1000.0;

/// Default height of the wrap area
pub const DEFAULT_HEIGHT: f64 = 800.0;

/// Configuration for a [`Simulation`](crate::Simulation)
///
/// # Example
///
/// ```
/// use nbody_sim::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_timestep(1.0 / 120.0)
///     .with_bounds(1920.0, 1080.0);
/// assert!(config.validate().is_ok());
///
/// let broken = SimulationConfig::default().with_timestep(0.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant (default: [`GRAVITATIONAL_CONSTANT`])
    pub gravitational_constant: f64,
    /// Fixed timestep per call to `step` (default: [`DEFAULT_TIMESTEP`])
    pub timestep: f64,
    /// Softening length (default: [`DEFAULT_SOFTENING`])
    pub softening: f64,
    /// Force scale factor (default: [`DEFAULT_SCALE_FACTOR`])
    pub scale_factor: f64,
    /// Wrap area width (default: [`DEFAULT_WIDTH`])
    pub width: f64,
    /// Wrap area height (default: [`DEFAULT_HEIGHT`])
    pub height: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            timestep: DEFAULT_TIMESTEP,
            softening: DEFAULT_SOFTENING,
            scale_factor: DEFAULT_SCALE_FACTOR,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl SimulationConfig {
    /// Set the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Set the fixed timestep
    pub fn with_timestep(mut self, dt: f64) -> Self {
        self.timestep = dt;
        self
    }

    /// Set the softening length
    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    /// Set the force scale factor
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the wrap area dimensions
    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check every parameter against its valid range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first parameter that is
    /// out of range.
    pub fn validate(&self) -> Result<()> {
        check(
            "gravitational constant",
            self.gravitational_constant,
            self.gravitational_constant >= 0.0,
            "must be non-negative and finite",
        )?;
        check("timestep", self.timestep, self.timestep > 0.0, "must be positive and finite")?;
        check(
            "softening",
            self.softening,
            self.softening >= 0.0,
            "must be non-negative and finite",
        )?;
        check(
            "scale factor",
            self.scale_factor,
            self.scale_factor > 0.0,
            "must be positive and finite",
        )?;
        check("width", self.width, self.width > 0.0, "must be positive and finite")?;
        check("height", self.height, self.height > 0.0, "must be positive and finite")?;
        Ok(())
    }

    /// Report a timestep that is valid but numerically suspicious
    ///
    /// Extremely small timesteps lose precision in f64, large ones make the
    /// first-order integrator unstable.
    pub fn timestep_warning(&self) -> Option<String> {
        let dt = self.timestep;
        if dt < 1e-9 {
            Some(format!(
                "timestep {} is extremely small and may cause precision loss with f64",
                dt
            ))
        } else if dt > 1.0 {
            Some(format!("timestep {} is large and may cause instability", dt))
        } else {
            None
        }
    }
}

fn check(name: &'static str, value: f64, in_range: bool, reason: &'static str) -> Result<()> {
    if in_range && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravitational_constant() {
        assert!(GRAVITATIONAL_CONSTANT > 6.6e-11);
        assert!(GRAVITATIONAL_CONSTANT < 6.7e-11);
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.timestep_warning().is_none());
        assert_eq!(config.width, 1000.0);
        assert_eq!(config.height, 800.0);
    }

    #[test]
    fn test_zero_softening_allowed() {
        let config = SimulationConfig::default().with_softening(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_timestep_rejected() {
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = SimulationConfig::default().with_timestep(dt).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "timestep", .. }));
        }
    }

    #[test]
    fn test_negative_constants_rejected() {
        let err = SimulationConfig::default()
            .with_gravitational_constant(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "gravitational constant", .. }));

        let err = SimulationConfig::default().with_softening(-1.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "softening", .. }));

        let err = SimulationConfig::default().with_scale_factor(0.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "scale factor", .. }));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let err = SimulationConfig::default().with_bounds(0.0, 600.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "width", .. }));

        let err = SimulationConfig::default().with_bounds(800.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "height", .. }));
    }

    #[test]
    fn test_timestep_warnings() {
        let small = SimulationConfig::default().with_timestep(1e-10);
        assert!(small.timestep_warning().unwrap().contains("extremely small"));

        let large = SimulationConfig::default().with_timestep(2.0);
        assert!(large.timestep_warning().unwrap().contains("large"));
    }
}
