//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer,
//! representing business entities and operation parameters. Domain models are
//! converted from entity models at the repository boundary, so the service and
//! bot layers never touch database types directly.

pub mod progress;
pub mod settings;
