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
//! The simulation driver
//!
//! [`Simulation`] owns the bodies and advances them one fixed tick per call
//! to [`Simulation::step`]:
//!
//! 1. Sum the pairwise force on every body from the state at the start of
//!    the step into a separate buffer.
//! 2. Integrate each body with semi-implicit Euler.
//! 3. Wrap each position into the display area.
//!
//! No body is mutated until every net force has been computed, so the
//! result does not depend on body order.
//!
//! # Concurrency
//!
//! Stepping is single-threaded and synchronous. `add_body` and `step` both
//! take `&mut self`; callers that share a simulation across threads must
//! serialize access themselves (e.g. behind a `Mutex`).

use crate::body::Body;
use crate::boundary::WrapBounds;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::forces::{accumulate_forces, ForceModel, SoftenedGravity};
use crate::integration::{calculate_total_kinetic_energy, SemiImplicitEuler};
use crate::math::Vector2D;

/// A fixed-step all-pairs N-body simulation
///
/// # Example
///
/// ```
/// use nbody_sim::{Body, Simulation};
/// use nbody_sim::math::Vector2D;
///
/// let mut sim = Simulation::new();
/// sim.add_body(Body::new(Vector2D::new(500.0, 400.0), Vector2D::zero(), 1.989e30).unwrap());
/// sim.add_body(Body::new(Vector2D::new(608.2, 400.0), Vector2D::new(0.0, -10.5), 4.867e24).unwrap());
///
/// sim.step();
///
/// assert_eq!(sim.step_count(), 1);
/// assert!(sim.bodies()[1].velocity().x < 0.0);
/// ```
pub struct Simulation<M: ForceModel = SoftenedGravity> {
    bodies: Vec<Body>,
    config: SimulationConfig,
    model: M,
    integrator: SemiImplicitEuler,
    bounds: WrapBounds,
    /// Net force per body, reused across steps
    forces: Vec<Vector2D>,
    step_count: u64,
}

impl Simulation<SoftenedGravity> {
    /// Create an empty simulation with the default configuration
    pub fn new() -> Self {
        let config = SimulationConfig::default();
        // Defaults always pass validation
        Simulation::from_parts(config, SoftenedGravity::from_config(&config), SemiImplicitEuler::DEFAULT)
    }

    /// Create an empty simulation with softened gravity built from `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
    /// the configuration fails validation.
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        Simulation::with_model(config, SoftenedGravity::from_config(&config))
    }
}

impl Default for Simulation<SoftenedGravity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ForceModel> Simulation<M> {
    /// Create an empty simulation driven by a custom force model
    ///
    /// The gravity-related fields of `config` are ignored by models other
    /// than [`SoftenedGravity`]; timestep and bounds always apply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
    /// the configuration fails validation.
    pub fn with_model(config: SimulationConfig, model: M) -> Result<Self> {
        config.validate()?;
        if let Some(warning) = config.timestep_warning() {
            log::warn!("{}", warning);
        }
        let integrator = SemiImplicitEuler::new(config.timestep)?;

        log::info!(
            "simulation created: model={}, dt={}, bounds={}x{}",
            model.name(),
            config.timestep,
            config.width,
            config.height
        );

        Ok(Simulation::from_parts(config, model, integrator))
    }

    fn from_parts(config: SimulationConfig, model: M, integrator: SemiImplicitEuler) -> Self {
        Simulation {
            bodies: Vec::new(),
            config,
            model,
            integrator,
            bounds: WrapBounds::new(config.width, config.height),
            forces: Vec::new(),
            step_count: 0,
        }
    }

    /// Register a body
    ///
    /// Bodies are appended in order and never removed.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Advance every body by one fixed timestep
    pub fn step(&mut self) {
        accumulate_forces(&self.model, &self.bodies, &mut self.forces);

        for (body, &force) in self.bodies.iter_mut().zip(self.forces.iter()) {
            self.integrator.integrate(body, force);
            body.position = self.bounds.wrap(body.position);
        }

        self.step_count += 1;
        log::trace!("step {} complete for {} bodies", self.step_count, self.bodies.len());
    }

    /// Advance by `n` consecutive steps
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// All bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Get a body by index
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the simulation has no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The configuration this simulation was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The force model driving this simulation
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The wrap area applied after every step
    pub fn bounds(&self) -> WrapBounds {
        self.bounds
    }

    /// Number of completed steps
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time elapsed, `step_count * timestep`
    pub fn elapsed(&self) -> f64 {
        self.step_count as f64 * self.config.timestep
    }

    /// Net force on every body for the current state
    ///
    /// Does not mutate the simulation.
    pub fn net_forces(&self) -> Vec<Vector2D> {
        let mut out = Vec::with_capacity(self.bodies.len());
        accumulate_forces(&self.model, &self.bodies, &mut out);
        out
    }

    /// Total kinetic energy, `Σ ½ m v²`
    pub fn kinetic_energy(&self) -> f64 {
        calculate_total_kinetic_energy(&self.bodies)
    }

    /// Total linear momentum, `Σ m v`
    pub fn total_momentum(&self) -> Vector2D {
        self.bodies
            .iter()
            .fold(Vector2D::zero(), |total, body| total + body.momentum())
    }

    /// Mass-weighted mean position, or `None` when there are no bodies
    pub fn center_of_mass(&self) -> Option<Vector2D> {
        if self.bodies.is_empty() {
            return None;
        }
        let total_mass: f64 = self.bodies.iter().map(Body::mass).sum();
        let weighted = self
            .bodies
            .iter()
            .fold(Vector2D::zero(), |acc, body| acc + body.position() * body.mass());
        Some(Vector2D::new(weighted.x / total_mass, weighted.y / total_mass))
    }
}

impl Simulation<SoftenedGravity> {
    /// Total softened gravitational potential energy, each pair counted once
    pub fn potential_energy(&self) -> f64 {
        let mut total = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                total += self.model.potential_energy(a, b);
            }
        }
        total
    }

    /// Kinetic plus potential energy
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
