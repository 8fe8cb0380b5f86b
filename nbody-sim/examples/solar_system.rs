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
//! Solar System Display Simulation
//!
//! A headless driver for the inner solar system plus Jupiter on a
//! 1000 x 800 display area. It does what a render loop would do: call
//! `step` once per 60 Hz frame and read back positions, radii and colors.
//!
//! # Scaling
//!
//! - Orbit radii: real distances in meters times `1e-9`
//! - Speeds: real orbital speeds in m/s times `300000 * 1e-9`
//! - Masses stay in kilograms
//!
//! Orbital data: NASA Planetary Fact Sheet,
//! https://nssdc.gsfc.nasa.gov/planetary/factsheet/
//!
//! # Running
//!
//! ```bash
//! # Ten seconds of 60 FPS frames, report once per second
//! cargo run --example solar_system
//!
//! # One minute of frames with debug logging
//! RUST_LOG=debug cargo run --example solar_system -- --frames 3600 --report-every 600
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use nbody_sim::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use nbody_sim::math::Vector2D;
use nbody_sim::{Body, Color, Simulation};

/// Scale applied to orbital distances in meters
const ORBIT_SCALE: f64 = 1e-9;

/// Scale applied to orbital speeds in m/s
const SPEED_SCALE: f64 = 300000.0 * 1e-9;

#[derive(Parser, Debug)]
#[command(about = "Headless solar system simulation")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print body state every N frames
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

/// Display-scaled planet description
struct Planet {
    name: &'static str,
    /// Mass in kg
    mass: f64,
    /// Orbit radius in meters
    orbit_radius: f64,
    /// Orbital speed in m/s
    orbital_speed: f64,
    /// Display radius
    radius: f64,
    color: Color,
}

const PLANETS: &[Planet] = &[
    Planet {
        name: "Venus",
        mass: 4.867e24,
        orbit_radius: 108.2e9,
        orbital_speed: 35.02e3,
        radius: 4.0,
        color: Color::rgb(255, 198, 73),
    },
    Planet {
        name: "Earth",
        mass: 5.972e24,
        orbit_radius: 149.6e9,
        orbital_speed: 29.78e3,
        radius: 5.0,
        color: Color::rgb(0, 0, 255),
    },
    Planet {
        name: "Mars",
        mass: 6.39e23,
        orbit_radius: 227.9e9,
        orbital_speed: 24.077e3,
        radius: 4.0,
        color: Color::rgb(255, 0, 0),
    },
    Planet {
        name: "Jupiter",
        mass: 1.898e27,
        orbit_radius: 778.5e9,
        orbital_speed: 13.07e3,
        radius: 15.0,
        color: Color::rgb(255, 140, 0),
    },
];

/// Build the simulation and return body names in insertion order
fn create_solar_system(sim: &mut Simulation) -> Result<Vec<&'static str>> {
    let center = Vector2D::new(DEFAULT_WIDTH / 2.0, DEFAULT_HEIGHT / 2.0);
    let mut names = Vec::new();

    let sun = Body::new(center, Vector2D::zero(), 1.989e30)
        .context("creating Sun")?
        .with_radius(20.0)
        .with_color(Color::rgb(255, 255, 0));
    sim.add_body(sun);
    names.push("Sun");

    for planet in PLANETS {
        let position = center + Vector2D::new(planet.orbit_radius * ORBIT_SCALE, 0.0);
        let speed = planet.orbital_speed * SPEED_SCALE;
        let body = Body::new(position, Vector2D::new(0.0, -speed), planet.mass)
            .with_context(|| format!("creating {}", planet.name))?
            .with_radius(planet.radius)
            .with_color(planet.color);
        sim.add_body(body);
        names.push(planet.name);

        log::debug!(
            "created {} at {:?} with speed {:.3}",
            planet.name,
            position,
            speed
        );

        if planet.name == "Earth" {
            // The Moon rides along with Earth, so it inherits Earth's speed
            let moon_position = position + Vector2D::new(384400e3 * ORBIT_SCALE, 0.0);
            let moon_speed = 1.022e3 * SPEED_SCALE + speed;
            let moon = Body::new(moon_position, Vector2D::new(0.0, -moon_speed), 7.34767309e22)
                .context("creating Moon")?
                .with_radius(2.0)
                .with_color(Color::rgb(200, 200, 200));
            sim.add_body(moon);
            names.push("Moon");
        }
    }

    Ok(names)
}

fn print_state(sim: &Simulation, names: &[&str], initial_energy: f64) {
    let energy = sim.total_energy();
    let drift = if initial_energy != 0.0 {
        ((energy - initial_energy) / initial_energy).abs()
    } else {
        0.0
    };

    println!(
        "\n=== Frame {} (t = {:.2}) ===",
        sim.step_count(),
        sim.elapsed()
    );
    println!("Kinetic Energy:   {:.6e}", sim.kinetic_energy());
    println!("Potential Energy: {:.6e}", sim.potential_energy());
    println!("Energy drift:     {:.3e}", drift);

    for (name, body) in names.iter().zip(sim.bodies()) {
        let p = body.position();
        let v = body.velocity();
        let c = body.color();
        println!(
            "  {:<8} pos=({:8.3}, {:8.3}) vel=({:8.4}, {:8.4}) r={:>4.1} rgb=({},{},{})",
            name, p.x, p.y, v.x, v.y, body.radius(), c.r, c.g, c.b
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.report_every > 0, "--report-every must be at least 1");

    println!("==========================================================");
    println!("       Solar System Display Simulation");
    println!("==========================================================");

    let mut sim = Simulation::new();
    let names = create_solar_system(&mut sim)?;

    let config = sim.config();
    println!("Bodies:    {}", sim.len());
    println!("Timestep:  {:.5}", config.timestep);
    println!("Softening: {:.1e}", config.softening);
    println!("Bounds:    {} x {}", config.width, config.height);

    let initial_energy = sim.total_energy();
    print_state(&sim, &names, initial_energy);

    for frame in 1..=args.frames {
        sim.step();
        if frame % args.report_every == 0 {
            print_state(&sim, &names, initial_energy);
        }
    }

    let bounds = sim.bounds();
    anyhow::ensure!(
        sim.bodies().iter().all(|b| b.is_valid() && bounds.contains(b.position())),
        "body state left the display area or became non-finite"
    );

    println!("\nSimulated {} frames", sim.step_count());
    Ok(())
}
