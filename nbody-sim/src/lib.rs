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
//! # N-Body Simulation
//!
//! A fixed-step gravitational N-body integrator for small 2D scenes.
//!
//! ## Features
//!
//! - **Softened Gravity**: All-pairs Newtonian forces with a softening length
//! - **Semi-implicit Euler**: Velocity first, then position with the new velocity
//! - **Snapshot Stepping**: Every force in a step is computed from the state at its start
//! - **Wrap Policy**: Positions wrap toroidally into a fixed display area
//!
//! The core never draws anything. A driver calls [`Simulation::step`] once per
//! frame and reads [`Simulation::bodies`] to render.
//!
//! ## Example
//!
//! ```rust
//! use nbody_sim::{Body, Color, Simulation};
//! use nbody_sim::math::Vector2D;
//!
//! let mut sim = Simulation::new();
//! let sun = Body::new(Vector2D::new(500.0, 400.0), Vector2D::zero(), 1.989e30)?
//!     .with_radius(20.0)
//!     .with_color(Color::rgb(255, 255, 0));
//! sim.add_body(sun);
//!
//! sim.step();
//! assert_eq!(sim.bodies()[0].position(), Vector2D::new(500.0, 400.0));
//! # Ok::<(), nbody_sim::Error>(())
//! ```

#![warn(missing_docs)]

/// 2D vector arithmetic
pub mod math;

/// Simulated bodies and display attributes
pub mod body;

/// Error types
pub mod error;

/// Named constants and simulation configuration
pub mod config;

/// Pairwise force models
pub mod forces;

/// Numerical integration
pub mod integration;

/// Display-area wrap policy
pub mod boundary;

/// The simulation driver
pub mod simulation;

pub use body::{Body, Color};
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use simulation::Simulation;
