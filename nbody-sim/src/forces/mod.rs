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
//! Pairwise force models
//!
//! A [`ForceModel`] answers one question: what force does body `b` exert on
//! body `a`? The simulation sums that answer over every ordered pair with
//! `i != j` using the state captured at the start of the step.

use crate::body::Body;
use crate::math::Vector2D;

pub mod gravity;

pub use gravity::{gravitational_force, SoftenedGravity};

/// Trait for pairwise force laws
///
/// Implementations must return a finite vector for every pair of valid
/// bodies and must not read display attributes (`radius`, `color`).
pub trait ForceModel {
    /// Force exerted on `a` by `b`
    fn force_between(&self, a: &Body, b: &Body) -> Vector2D;

    /// Get a descriptive name for this force model
    fn name(&self) -> &str;
}

/// Sum the force on every body from every other body
///
/// `out` is cleared and refilled with one entry per body. Reads only the
/// given slice, so the caller can mutate bodies afterwards without mixing
/// old and new positions within one step.
pub fn accumulate_forces<M: ForceModel + ?Sized>(model: &M, bodies: &[Body], out: &mut Vec<Vector2D>) {
    out.clear();
    out.resize(bodies.len(), Vector2D::zero());

    for (i, body) in bodies.iter().enumerate() {
        let mut total = Vector2D::zero();
        for (j, other) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            total += model.force_between(body, other);
        }
        out[i] = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pulls every body toward the other with unit strength per unit distance
    struct LinearSpring;

    impl ForceModel for LinearSpring {
        fn force_between(&self, a: &Body, b: &Body) -> Vector2D {
            b.position() - a.position()
        }

        fn name(&self) -> &str {
            "linear_spring"
        }
    }

    fn body_at(x: f64, y: f64) -> Body {
        Body::new(Vector2D::new(x, y), Vector2D::zero(), 1.0).unwrap()
    }

    #[test]
    fn test_accumulate_excludes_self() {
        let bodies = vec![body_at(0.0, 0.0)];
        let mut out = Vec::new();
        accumulate_forces(&LinearSpring, &bodies, &mut out);
        assert_eq!(out, vec![Vector2D::zero()]);
    }

    #[test]
    fn test_accumulate_sums_all_pairs() {
        let bodies = vec![body_at(0.0, 0.0), body_at(2.0, 0.0), body_at(0.0, 4.0)];
        let mut out = vec![Vector2D::new(99.0, 99.0); 7];
        accumulate_forces(&LinearSpring, &bodies, &mut out);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Vector2D::new(2.0, 4.0));
        assert_eq!(out[1], Vector2D::new(-4.0, 4.0));
        assert_eq!(out[2], Vector2D::new(2.0, -8.0));
    }

    #[test]
    fn test_accumulate_empty() {
        let mut out = vec![Vector2D::new(1.0, 1.0)];
        accumulate_forces(&LinearSpring, &[], &mut out);
        assert!(out.is_empty());
    }
}
