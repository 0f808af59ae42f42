//! Decision-support service core.
//!
//! Houses the multi-criteria decision engine (validation, scoring methods,
//! ranking assembly), the HTTP contract it exposes, and the configuration
//! and telemetry plumbing shared with the deployable service.

pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;
