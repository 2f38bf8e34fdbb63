//! Layer construction
//!
//! A [`Layer`] is one visual component of a plot: a geometry descriptor, an
//! optional data-source reference, a statistical transform, a position
//! adjustment, aesthetic mappings and layer parameters. Layers are built
//! through [`LayerBuilder`] (the generic entry point) or through a geom
//! shorthand like [`point_interval`], which seeds the builder with that
//! geom's default mapping before caller entries are applied.
//!
//! Builders validate nothing themselves; at `build` time the geometry
//! descriptor checks mappings and parameter shapes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plot::types::{AestheticValue, Mappings, ParameterValue, Parameters};

pub mod geom;

pub use geom::{Geom, GeomTrait, GeomType, PointInterval, SlabInterval};

/// Statistical transform applied to layer data before drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Pass data through untransformed
    #[default]
    Identity,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Identity => write!(f, "identity"),
        }
    }
}

/// Position adjustment resolving overlap among drawn marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Draw marks where the data puts them
    #[default]
    Identity,
    /// Shift overlapping groups sideways
    Dodge,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Identity => write!(f, "identity"),
            Position::Dodge => write!(f, "dodge"),
        }
    }
}

/// Which side of the position axis the slab is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Both,
}

impl Side {
    fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
            Side::TopLeft => "topleft",
            Side::TopRight => "topright",
            Side::BottomLeft => "bottomleft",
            Side::BottomRight => "bottomright",
            Side::Both => "both",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orientation of the interval extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One renderable layer specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub geom: Geom,
    /// Reference to the layer's data source, if it has its own
    pub data: Option<String>,
    pub stat: Stat,
    pub position: Position,
    /// Caller-facing mappings, constructor defaults already applied
    pub mappings: Mappings,
    /// Caller-facing parameters; geom defaults fill the gaps at read time
    pub parameters: Parameters,
}

impl Layer {
    /// Generic layer entry point
    pub fn builder(geom: Geom) -> LayerBuilder {
        LayerBuilder::new(geom)
    }

    /// Mappings with the geom's literal aesthetic defaults filled in
    ///
    /// Caller entries win per key; `Required` and `Null` table entries
    /// contribute nothing.
    pub fn effective_mappings(&self) -> Mappings {
        let mut effective = Mappings::new();
        for (name, default) in &self.geom.default_aesthetics().defaults {
            if let Some(value) = default.to_aesthetic_value() {
                effective.insert(*name, value);
            }
        }
        effective.extend_from(&self.mappings);
        effective
    }

    /// Parameters with the geom's defaults filled in, caller entries winning
    ///
    /// A caller entry of `Null` resets the parameter to its default.
    pub fn effective_params(&self) -> Parameters {
        let mut effective = Parameters::new();
        for param in self.geom.default_params() {
            let value = match &param.default {
                geom::DefaultParamValue::String(s) => ParameterValue::String(s.to_string()),
                geom::DefaultParamValue::Number(n) => ParameterValue::Number(*n),
                geom::DefaultParamValue::Boolean(b) => ParameterValue::Boolean(*b),
                geom::DefaultParamValue::Null => ParameterValue::Null,
            };
            effective.insert(param.name, value);
        }
        for (name, value) in self.parameters.iter() {
            if !matches!(value, ParameterValue::Null) {
                effective.insert(name, value.clone());
            }
        }
        effective
    }
}

/// Builder for [`Layer`], the extension API's layer-construction entry point
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    geom: Geom,
    data: Option<String>,
    stat: Stat,
    position: Position,
    mappings: Mappings,
    parameters: Parameters,
}

impl LayerBuilder {
    pub fn new(geom: Geom) -> Self {
        LayerBuilder {
            geom,
            data: None,
            stat: Stat::default(),
            position: Position::default(),
            mappings: Mappings::new(),
            parameters: Parameters::new(),
        }
    }

    pub fn data(mut self, source: impl Into<String>) -> Self {
        self.data = Some(source.into());
        self
    }

    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Map one aesthetic, overriding any earlier entry for the same key
    pub fn mapping(mut self, aesthetic: impl Into<String>, value: AestheticValue) -> Self {
        self.mappings.insert(aesthetic, value);
        self
    }

    /// Overlay a whole mapping table, each entry overriding per key
    pub fn mappings(mut self, mappings: &Mappings) -> Self {
        self.mappings.extend_from(mappings);
        self
    }

    /// Set one layer parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.parameters.insert(name, value.into());
        self
    }

    /// Finish the layer, deferring all validation to the geom descriptor
    pub fn build(self) -> Result<Layer> {
        self.geom.validate_mappings(&self.mappings)?;
        self.geom.validate_required(&self.mappings)?;
        self.geom.validate_params(&self.parameters)?;
        Ok(Layer {
            geom: self.geom,
            data: self.data,
            stat: self.stat,
            position: self.position,
            mappings: self.mappings,
            parameters: self.parameters,
        })
    }
}

/// The default mapping seeded by [`point_interval`]
///
/// Binds the interval extent to the summary columns and sizes the interval
/// by its negated width, so that wider (less certain) intervals draw
/// thinner.
pub fn default_point_interval_mapping() -> Mappings {
    let mut mappings = Mappings::new();
    mappings.insert("ymin", AestheticValue::column(".lower"));
    mappings.insert("ymax", AestheticValue::column(".upper"));
    mappings.insert("size", AestheticValue::negated(".width"));
    mappings
}

/// Start a point-interval layer
///
/// Seeds the builder with [`default_point_interval_mapping`] and tags the
/// layer data as interval-typed; caller mappings and parameters override
/// per key. With no further configuration the result is a complete layer.
pub fn point_interval() -> PointIntervalLayer {
    PointIntervalLayer::new()
}

/// Builder for point-interval layers
///
/// A thin shim over [`LayerBuilder`]: it contributes defaults, never
/// validation.
#[derive(Debug, Clone, Default)]
pub struct PointIntervalLayer {
    data: Option<String>,
    stat: Stat,
    position: Position,
    mappings: Mappings,
    side: Option<Side>,
    orientation: Option<Orientation>,
    show_slab: Option<bool>,
    parameters: Parameters,
}

impl PointIntervalLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, source: impl Into<String>) -> Self {
        self.data = Some(source.into());
        self
    }

    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = stat;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn mapping(mut self, aesthetic: impl Into<String>, value: AestheticValue) -> Self {
        self.mappings.insert(aesthetic, value);
        self
    }

    pub fn mappings(mut self, mappings: &Mappings) -> Self {
        self.mappings.extend_from(mappings);
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn show_slab(mut self, show_slab: bool) -> Self {
        self.show_slab = Some(show_slab);
        self
    }

    /// Arbitrary styling parameter, passed through to the delegate
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.parameters.insert(name, value.into());
        self
    }

    pub fn build(self) -> Result<Layer> {
        let mut builder = LayerBuilder::new(Geom::point_interval())
            .mappings(&default_point_interval_mapping())
            .mappings(&self.mappings);
        if let Some(data) = self.data {
            builder = builder.data(data);
        }
        builder = builder.stat(self.stat).position(self.position);
        if let Some(side) = self.side {
            builder = builder.param("side", side.as_str());
        }
        if let Some(orientation) = self.orientation {
            builder = builder.param("orientation", orientation.as_str());
        }
        if let Some(show_slab) = self.show_slab {
            builder = builder.param("show_slab", show_slab);
        }
        for (name, value) in self.parameters.iter() {
            builder = builder.param(name, value.clone());
        }
        // The interval data tag is fixed; it goes in last so no styling
        // passthrough can displace it
        builder.param("datatype", "interval").build()
    }
}
