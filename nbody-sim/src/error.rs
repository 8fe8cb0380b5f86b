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
//! Error types for body construction and configuration
//!
//! The error surface is deliberately small. Coincident bodies are not an
//! error: the force model returns zero force for them instead of letting a
//! non-finite value reach the integrator.

use std::fmt;

/// Errors reported by the simulation core
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A body was constructed with a mass that is zero, negative or not finite
    InvalidMass {
        /// The rejected mass in kilograms
        mass: f64,
    },
    /// A configuration parameter is outside its valid range
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human readable constraint that was violated
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMass { mass } => {
                write!(f, "invalid mass {}: mass must be positive and finite", mass)
            }
            Error::InvalidParameter { name, value, reason } => {
                write!(f, "invalid {} {}: {}", name, value, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
