//! Geom subsystem: geometry descriptors and their default tables
//!
//! Each geom is a static descriptor implementing [`GeomTrait`]: it names the
//! aesthetics it understands, their default values, its default layer
//! parameters, and the default aesthetics of its legend key. Descriptors hold
//! no data and perform no rendering; a downstream writer consumes the layer
//! specification they validate.
//!
//! # Architecture
//!
//! - `GeomType`: enum for pattern matching and serialization
//! - `GeomTrait`: trait defining descriptor behavior
//! - `Geom`: wrapper struct holding an `Arc<dyn GeomTrait>`
//!
//! Specialized geoms ([`PointInterval`]) compute their effective default
//! tables by merging an override table onto the base geom's
//! ([`SlabInterval`]) tables at first use; there is no prototype chain.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

use crate::error::{GgIntervalError, Result};
use crate::plot::types::{Mappings, ParameterValue, Parameters};

mod point_interval;
mod slab_interval;
pub mod types;

pub use point_interval::PointInterval;
pub use slab_interval::SlabInterval;
pub use types::{merge_defaults, DefaultAesthetics, DefaultParam, DefaultParamValue};

/// Enum of all geom types for pattern matching and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeomType {
    /// General point/interval/slab mark
    SlabInterval,
    /// Point and interval mark with the slab suppressed
    PointInterval,
}

impl std::fmt::Display for GeomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GeomType::SlabInterval => "slab_interval",
            GeomType::PointInterval => "point_interval",
        };
        write!(f, "{}", s)
    }
}

/// Core trait for geometry descriptors
///
/// Descriptors are pure configuration: every method returns a static table.
/// The validation methods are the delegate-side checks the layer builder
/// defers to; geoms that specialize another geom inherit them unchanged.
pub trait GeomTrait: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Returns which geom this is (for pattern matching)
    fn geom_type(&self) -> GeomType;

    /// Default aesthetic table: supported aesthetics and their defaults
    fn default_aesthetics(&self) -> &'static DefaultAesthetics;

    /// Default layer parameter table
    fn default_params(&self) -> &'static [DefaultParam];

    /// Default aesthetics of the legend key drawn for this geom
    fn default_key_aesthetics(&self) -> &'static DefaultAesthetics;

    /// Reject mappings to aesthetics this geom does not understand
    fn validate_mappings(&self, mappings: &Mappings) -> Result<()> {
        let aesthetics = self.default_aesthetics();
        for name in mappings.keys() {
            if !aesthetics.contains(name) {
                return Err(GgIntervalError::ValidationError(format!(
                    "Geom '{}' does not support aesthetic '{}'",
                    self, name
                )));
            }
        }
        Ok(())
    }

    /// Check that every required aesthetic is present in the mappings
    fn validate_required(&self, mappings: &Mappings) -> Result<()> {
        for name in self.default_aesthetics().required() {
            if !mappings.contains(name) {
                return Err(GgIntervalError::ValidationError(format!(
                    "Geom '{}' requires '{}' aesthetic mapping",
                    self, name
                )));
            }
        }
        Ok(())
    }

    /// Shape-check parameter values against the default table
    ///
    /// Parameters with names the geom does not declare are styling
    /// passthroughs and are accepted untouched. Declared parameters must
    /// match the shape of their default (a `Null` default accepts any
    /// shape), and so must `Null`, which resets to the default.
    fn validate_params(&self, parameters: &Parameters) -> Result<()> {
        for (name, value) in parameters.iter() {
            let Some(param) = self.default_params().iter().find(|p| p.name == name) else {
                continue;
            };
            if matches!(value, ParameterValue::Null) {
                continue;
            }
            let compatible = match param.default {
                DefaultParamValue::String(_) => matches!(value, ParameterValue::String(_)),
                DefaultParamValue::Number(_) => matches!(value, ParameterValue::Number(_)),
                DefaultParamValue::Boolean(_) => matches!(value, ParameterValue::Boolean(_)),
                DefaultParamValue::Null => true,
            };
            if !compatible {
                return Err(GgIntervalError::ValidationError(format!(
                    "The '{}' parameter of geom '{}' does not accept a {} value",
                    name,
                    self,
                    value.shape()
                )));
            }
        }
        Ok(())
    }
}

/// A geometry descriptor, cheap to clone and share
#[derive(Debug, Clone)]
pub struct Geom {
    inner: Arc<dyn GeomTrait>,
}

impl Geom {
    pub fn slab_interval() -> Self {
        Geom {
            inner: Arc::new(SlabInterval),
        }
    }

    pub fn point_interval() -> Self {
        Geom {
            inner: Arc::new(PointInterval),
        }
    }

    pub fn from_type(geom_type: GeomType) -> Self {
        match geom_type {
            GeomType::SlabInterval => Geom::slab_interval(),
            GeomType::PointInterval => Geom::point_interval(),
        }
    }
}

impl std::ops::Deref for Geom {
    type Target = dyn GeomTrait;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl std::fmt::Display for Geom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl PartialEq for Geom {
    fn eq(&self, other: &Self) -> bool {
        self.geom_type() == other.geom_type()
    }
}

impl Serialize for Geom {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.geom_type().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let geom_type = GeomType::deserialize(deserializer)?;
        Ok(Geom::from_type(geom_type))
    }
}
