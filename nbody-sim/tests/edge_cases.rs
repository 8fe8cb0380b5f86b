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
//! Edge case tests for the simulation
//!
//! Tests boundary conditions, extreme values, and unusual scenarios

use nbody_sim::math::Vector2D;
use nbody_sim::{Body, Error, Simulation, SimulationConfig};

fn body(x: f64, y: f64, vx: f64, vy: f64, mass: f64) -> Body {
    Body::new(Vector2D::new(x, y), Vector2D::new(vx, vy), mass).unwrap()
}

#[test]
fn test_coincident_bodies_stay_finite() {
    let mut sim = Simulation::new();
    sim.add_body(body(250.0, 250.0, 0.0, 0.0, 1.989e30));
    sim.add_body(body(250.0, 250.0, 0.0, 0.0, 5.972e24));

    sim.step();

    for b in sim.bodies() {
        assert!(b.is_valid());
        assert_eq!(b.velocity(), Vector2D::zero());
        assert_eq!(b.position(), Vector2D::new(250.0, 250.0));
    }
}

#[test]
fn test_coincident_bodies_without_softening() {
    let config = SimulationConfig::default().with_softening(0.0);
    let mut sim = Simulation::with_config(config).unwrap();
    sim.add_body(body(10.0, 10.0, 1.0, 0.0, 1e24));
    sim.add_body(body(10.0, 10.0, -1.0, 0.0, 1e24));
    sim.add_body(body(90.0, 10.0, 0.0, 0.0, 1e24));

    for _ in 0..100 {
        sim.step();
        assert!(sim.bodies().iter().all(Body::is_valid));
        assert!(sim.net_forces().iter().all(Vector2D::is_valid));
    }
}

#[test]
fn test_body_wrapping_onto_another() {
    // Body 1 crosses the right edge and lands where body 0 started
    let config = SimulationConfig::default()
        .with_timestep(1.0)
        .with_bounds(100.0, 100.0);
    let mut sim = Simulation::with_config(config).unwrap();
    sim.add_body(body(0.0, 50.0, 0.0, 0.0, 1.0));
    sim.add_body(body(99.0, 50.0, 1.0, 0.0, 1.0));

    sim.step();
    assert_eq!(sim.bodies()[1].position(), Vector2D::new(0.0, 50.0));

    sim.step();
    assert!(sim.bodies().iter().all(Body::is_valid));
}

#[test]
fn test_extreme_masses_accepted() {
    let mut sim = Simulation::new();
    sim.add_body(body(500.0, 400.0, 0.0, 0.0, 1e40));
    sim.add_body(body(520.0, 400.0, 0.0, 0.0, 1e-30));

    sim.step();

    let light = &sim.bodies()[1];
    assert!(light.is_valid());
    assert!(light.velocity().x < 0.0);
}

#[test]
fn test_subnormal_mass_single_body() {
    let mut sim = Simulation::new();
    sim.add_body(body(100.0, 100.0, 1.0, 0.0, 1e-310));

    sim.step_n(10);

    let b = &sim.bodies()[0];
    assert!(b.is_valid(), "vel={:?} pos={:?}", b.velocity(), b.position());
    assert_eq!(b.velocity(), Vector2D::new(1.0, 0.0));
    assert!(sim.center_of_mass().is_some_and(|c| c.is_valid()));
}

#[test]
fn test_fast_body_wraps_many_times() {
    let config = SimulationConfig::default().with_timestep(1.0);
    let mut sim = Simulation::with_config(config).unwrap();
    sim.add_body(body(10.0, 10.0, 12345.6, -98765.4, 1.0));

    for _ in 0..50 {
        sim.step();
        let p = sim.bodies()[0].position();
        assert!(sim.bounds().contains(p), "escaped bounds: {:?}", p);
    }
}

#[test]
fn test_display_attributes_do_not_affect_physics() {
    let mut plain = Simulation::new();
    plain.add_body(body(400.0, 400.0, 0.0, 1.0, 1e30));
    plain.add_body(body(600.0, 400.0, 0.0, -1.0, 1e29));

    let mut decorated = Simulation::new();
    decorated.add_body(body(400.0, 400.0, 0.0, 1.0, 1e30).with_radius(50.0));
    decorated.add_body(
        body(600.0, 400.0, 0.0, -1.0, 1e29)
            .with_radius(0.0)
            .with_color(nbody_sim::Color::rgb(255, 0, 0)),
    );

    plain.step_n(20);
    decorated.step_n(20);

    for (a, b) in plain.bodies().iter().zip(decorated.bodies()) {
        assert_eq!(a.position(), b.position());
        assert_eq!(a.velocity(), b.velocity());
    }
    assert_eq!(decorated.bodies()[0].radius(), 50.0);
}

#[test]
fn test_large_timestep_still_constructs() {
    let config = SimulationConfig::default().with_timestep(2.0);
    assert!(config.timestep_warning().is_some());
    assert!(Simulation::with_config(config).is_ok());
}

#[test]
fn test_invalid_configurations() {
    let cases = [
        (SimulationConfig::default().with_timestep(0.0), "timestep"),
        (SimulationConfig::default().with_timestep(f64::NAN), "timestep"),
        (SimulationConfig::default().with_softening(f64::INFINITY), "softening"),
        (SimulationConfig::default().with_gravitational_constant(f64::NAN), "gravitational constant"),
        (SimulationConfig::default().with_scale_factor(-1e-9), "scale factor"),
        (SimulationConfig::default().with_bounds(f64::INFINITY, 800.0), "width"),
        (SimulationConfig::default().with_bounds(1000.0, 0.0), "height"),
    ];

    for (config, expected) in cases {
        match Simulation::with_config(config) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, expected),
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("configuration with bad {} accepted", expected),
        }
    }
}

#[test]
fn test_mass_error_message() {
    let err = Body::new(Vector2D::zero(), Vector2D::zero(), -3.5).unwrap_err();
    assert!(err.to_string().contains("-3.5"));
}
