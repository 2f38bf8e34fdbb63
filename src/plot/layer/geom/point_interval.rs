//! PointInterval geom implementation
//!
//! A point summary with its interval, drawn without the density slab. The
//! descriptor is a pure specialization of [`SlabInterval`]: its effective
//! tables are the base tables with a small override table merged on top,
//! computed once at first use.

use std::sync::LazyLock;

use super::{slab_interval, DefaultAesthetics, DefaultParam, DefaultParamValue, GeomTrait, GeomType};
use crate::plot::types::DefaultAestheticValue;

/// PointInterval geom - point and interval, slab suppressed
#[derive(Debug, Clone, Copy)]
pub struct PointInterval;

static AESTHETICS: LazyLock<DefaultAesthetics> = LazyLock::new(|| {
    slab_interval::BASE_AESTHETICS
        .merged_with(&[("datatype", DefaultAestheticValue::String("interval"))])
});

static PARAMS: LazyLock<Vec<DefaultParam>> = LazyLock::new(|| {
    let base: Vec<(&'static str, DefaultParamValue)> = slab_interval::BASE_PARAMS
        .iter()
        .map(|param| (param.name, param.default.clone()))
        .collect();
    let overrides = [
        ("side", DefaultParamValue::String("both")),
        ("orientation", DefaultParamValue::String("vertical")),
        ("show_slab", DefaultParamValue::Boolean(false)),
    ];
    super::merge_defaults(&base, &overrides)
        .into_iter()
        .map(|(name, default)| DefaultParam::new(name, default))
        .collect()
});

// The legend key draws no fill, whatever the layer maps fill to.
static KEY_AESTHETICS: LazyLock<DefaultAesthetics> = LazyLock::new(|| {
    slab_interval::BASE_KEY_AESTHETICS.merged_with(&[("fill", DefaultAestheticValue::Null)])
});

impl GeomTrait for PointInterval {
    fn geom_type(&self) -> GeomType {
        GeomType::PointInterval
    }

    fn default_aesthetics(&self) -> &'static DefaultAesthetics {
        &AESTHETICS
    }

    fn default_params(&self) -> &'static [DefaultParam] {
        &PARAMS
    }

    fn default_key_aesthetics(&self) -> &'static DefaultAesthetics {
        &KEY_AESTHETICS
    }
}

impl std::fmt::Display for PointInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "point_interval")
    }
}

#[cfg(test)]
mod tests {
    use super::super::SlabInterval;
    use super::*;

    fn param_default(name: &str) -> &'static DefaultParamValue {
        &PointInterval
            .default_params()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
            .default
    }

    #[test]
    fn test_point_interval_param_overrides() {
        assert_eq!(param_default("side"), &DefaultParamValue::String("both"));
        assert_eq!(
            param_default("orientation"),
            &DefaultParamValue::String("vertical")
        );
        assert_eq!(param_default("show_slab"), &DefaultParamValue::Boolean(false));
    }

    #[test]
    fn test_point_interval_inherits_base_params() {
        assert_eq!(param_default("show_point"), &DefaultParamValue::Boolean(true));
        assert_eq!(
            param_default("show_interval"),
            &DefaultParamValue::Boolean(true)
        );
        assert_eq!(param_default("fatten_point"), &DefaultParamValue::Number(1.8));
    }

    #[test]
    fn test_point_interval_datatype_default() {
        let geom = PointInterval;
        assert_eq!(
            geom.default_aesthetics().get("datatype"),
            Some(&DefaultAestheticValue::String("interval"))
        );
        // The override replaces in place, it does not grow the table
        assert_eq!(
            geom.default_aesthetics().names(),
            SlabInterval.default_aesthetics().names()
        );
    }

    #[test]
    fn test_point_interval_key_fill_unset() {
        let geom = PointInterval;
        assert_eq!(
            geom.default_key_aesthetics().get("fill"),
            Some(&DefaultAestheticValue::Null)
        );
        // Other key entries are inherited untouched
        assert_eq!(
            geom.default_key_aesthetics().get("stroke"),
            Some(&DefaultAestheticValue::String("black"))
        );
    }

    #[test]
    fn test_point_interval_requires_interval_extent() {
        let geom = PointInterval;
        assert_eq!(geom.default_aesthetics().required(), vec!["ymin", "ymax"]);
    }
}
