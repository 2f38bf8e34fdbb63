//! gginterval - combined point and interval marks for grammar-of-graphics
//! visualization specifications
//!
//! The crate provides two geometry descriptors and a layer constructor:
//!
//! - [`SlabInterval`](plot::SlabInterval): the general slab + point +
//!   interval mark with the full set of default tables.
//! - [`PointInterval`](plot::PointInterval): a declarative specialization
//!   that suppresses the slab, centers the mark (`side = "both"`), tags its
//!   data as interval-typed and draws a fill-less legend key.
//! - [`point_interval`](plot::point_interval): builds a renderable layer
//!   from an optional mapping, data reference, stat and position, seeding
//!   the defaults `ymin ← .lower`, `ymax ← .upper` and `size ← -.width`.
//!
//! Descriptors are configuration only. The crate never renders, lays out
//! panels, infers scales or draws legends; it produces serializable layer
//! specifications for a downstream writer, and the only failure paths are
//! the descriptor-side validation of mappings and parameter shapes.
//!
//! # Example
//!
//! ```
//! use gginterval::{point_interval, AestheticValue, Side};
//!
//! let layer = point_interval()
//!     .data("summaries")
//!     .mapping("x", AestheticValue::column("condition"))
//!     .side(Side::Left)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     layer.mappings.get("ymin"),
//!     Some(&AestheticValue::column(".lower"))
//! );
//! ```

pub mod error;
pub mod plot;

pub use error::{GgIntervalError, Result};
pub use plot::{
    default_point_interval_mapping, point_interval, AestheticValue, Geom, GeomTrait, GeomType,
    Layer, LayerBuilder, LiteralValue, Mappings, Orientation, ParameterValue, Parameters,
    PointInterval, PointIntervalLayer, Position, Side, SlabInterval, Stat,
};
