//! Plot types for layer specifications
//!
//! This module contains the types that represent a point-interval layer
//! specification: the layer itself, the geom subsystem, and the shared
//! value types.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `layer` - Layer struct, builders and the Geom subsystem
//! - `types` - Value types: Mappings, AestheticValue, ParameterValue, etc.

pub mod layer;
pub mod types;

// Re-export all types for convenience
pub use layer::*;
pub use types::*;
