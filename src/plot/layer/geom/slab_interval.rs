//! SlabInterval geom implementation
//!
//! The general combined mark: a density slab, a point summary and an
//! interval, any of which can be switched off. The specialized interval
//! geoms in this crate override its default tables rather than redefining
//! the descriptor surface.

use std::sync::LazyLock;

use super::{DefaultAesthetics, DefaultParam, DefaultParamValue, GeomTrait, GeomType};
use crate::plot::types::DefaultAestheticValue;

/// SlabInterval geom - slab plus point plus interval
#[derive(Debug, Clone, Copy)]
pub struct SlabInterval;

pub(super) static BASE_AESTHETICS: LazyLock<DefaultAesthetics> = LazyLock::new(|| {
    DefaultAesthetics::from_table(&[
        ("x", DefaultAestheticValue::Null),
        ("y", DefaultAestheticValue::Null),
        ("ymin", DefaultAestheticValue::Required),
        ("ymax", DefaultAestheticValue::Required),
        ("size", DefaultAestheticValue::Null),
        ("shape", DefaultAestheticValue::String("circle")),
        ("fill", DefaultAestheticValue::String("gray65")),
        ("stroke", DefaultAestheticValue::String("black")),
        ("opacity", DefaultAestheticValue::Number(1.0)),
        ("linewidth", DefaultAestheticValue::Number(1.0)),
        ("thickness", DefaultAestheticValue::Null),
        ("datatype", DefaultAestheticValue::Null),
    ])
});

pub(super) static BASE_PARAMS: &[DefaultParam] = &[
    DefaultParam {
        name: "side",
        default: DefaultParamValue::String("topright"),
    },
    DefaultParam {
        name: "orientation",
        default: DefaultParamValue::String("vertical"),
    },
    DefaultParam {
        name: "justification",
        default: DefaultParamValue::Null,
    },
    DefaultParam {
        name: "show_slab",
        default: DefaultParamValue::Boolean(true),
    },
    DefaultParam {
        name: "show_point",
        default: DefaultParamValue::Boolean(true),
    },
    DefaultParam {
        name: "show_interval",
        default: DefaultParamValue::Boolean(true),
    },
    DefaultParam {
        name: "fatten_point",
        default: DefaultParamValue::Number(1.8),
    },
];

pub(super) static BASE_KEY_AESTHETICS: LazyLock<DefaultAesthetics> = LazyLock::new(|| {
    DefaultAesthetics::from_table(&[
        ("shape", DefaultAestheticValue::String("circle")),
        ("fill", DefaultAestheticValue::String("gray65")),
        ("stroke", DefaultAestheticValue::String("black")),
        ("size", DefaultAestheticValue::Number(2.0)),
        ("linewidth", DefaultAestheticValue::Number(1.0)),
        ("opacity", DefaultAestheticValue::Number(1.0)),
    ])
});

impl GeomTrait for SlabInterval {
    fn geom_type(&self) -> GeomType {
        GeomType::SlabInterval
    }

    fn default_aesthetics(&self) -> &'static DefaultAesthetics {
        &BASE_AESTHETICS
    }

    fn default_params(&self) -> &'static [DefaultParam] {
        BASE_PARAMS
    }

    fn default_key_aesthetics(&self) -> &'static DefaultAesthetics {
        &BASE_KEY_AESTHETICS
    }
}

impl std::fmt::Display for SlabInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slab_interval")
    }
}
