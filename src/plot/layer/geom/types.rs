//! Core types for the geom trait system
//!
//! These types are used by all geom implementations and are shared across the
//! module. Specialized geoms compute their effective default tables by
//! merging override tables onto a base geom's tables with `merge_defaults`;
//! there is no inheritance chain at runtime.

use crate::plot::types::DefaultAestheticValue;

/// Merge an override table onto a base table of named defaults
///
/// Override entries win per key. Base order is preserved; overridden keys are
/// replaced in place and keys only present in the override table are appended
/// in override order.
pub fn merge_defaults<K, V>(base: &[(K, V)], overrides: &[(K, V)]) -> Vec<(K, V)>
where
    K: PartialEq + Clone,
    V: Clone,
{
    let mut merged: Vec<(K, V)> = base.to_vec();
    for (key, value) in overrides {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }
    merged
}

/// Default aesthetic values for a geom type
///
/// Describes which aesthetics a geom supports, which are required, and their
/// default values.
#[derive(Debug, Clone)]
pub struct DefaultAesthetics {
    /// Aesthetic defaults: maps aesthetic name to default value
    /// - Required: must be provided via the layer's effective mappings
    /// - Null: supported but no default
    /// - Other variants: actual default values
    pub defaults: Vec<(&'static str, DefaultAestheticValue)>,
}

impl DefaultAesthetics {
    pub fn from_table(table: &[(&'static str, DefaultAestheticValue)]) -> Self {
        DefaultAesthetics {
            defaults: table.to_vec(),
        }
    }

    /// Build the effective table of a specialized geom from this base table
    pub fn merged_with(&self, overrides: &[(&'static str, DefaultAestheticValue)]) -> Self {
        DefaultAesthetics {
            defaults: merge_defaults(&self.defaults, overrides),
        }
    }

    /// Get all supported aesthetic names
    pub fn names(&self) -> Vec<&'static str> {
        self.defaults.iter().map(|(name, _)| *name).collect()
    }

    /// Get required aesthetic names (those marked as Required)
    pub fn required(&self) -> Vec<&'static str> {
        self.defaults
            .iter()
            .filter_map(|(name, value)| {
                if matches!(value, DefaultAestheticValue::Required) {
                    Some(*name)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Check if an aesthetic is supported
    pub fn contains(&self, name: &str) -> bool {
        self.defaults.iter().any(|(n, _)| *n == name)
    }

    /// Check if an aesthetic is required
    pub fn is_required(&self, name: &str) -> bool {
        self.defaults
            .iter()
            .any(|(n, value)| *n == name && matches!(value, DefaultAestheticValue::Required))
    }

    /// Look up the default value for an aesthetic
    pub fn get(&self, name: &str) -> Option<&DefaultAestheticValue> {
        self.defaults
            .iter()
            .find_map(|(n, value)| if *n == name { Some(value) } else { None })
    }
}

/// Default value for a layer parameter
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultParamValue {
    String(&'static str),
    Number(f64),
    Boolean(bool),
    Null,
}

/// Layer parameter definition: name and default value
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultParam {
    pub name: &'static str,
    pub default: DefaultParamValue,
}

impl DefaultParam {
    pub fn new(name: &'static str, default: DefaultParamValue) -> Self {
        DefaultParam { name, default }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_defaults_override_wins() {
        let base = [("side", 1.0), ("orientation", 2.0)];
        let overrides = [("side", 9.0)];
        let merged = merge_defaults(&base, &overrides);
        assert_eq!(merged, vec![("side", 9.0), ("orientation", 2.0)]);
    }

    #[test]
    fn test_merge_defaults_appends_new_keys() {
        let base = [("a", 1.0)];
        let overrides = [("b", 2.0), ("c", 3.0)];
        let merged = merge_defaults(&base, &overrides);
        assert_eq!(merged, vec![("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    }

    #[test]
    fn test_merge_defaults_empty_override_is_identity() {
        let base = [("a", 1.0), ("b", 2.0)];
        let merged = merge_defaults(&base, &[]);
        assert_eq!(merged, base.to_vec());
    }

    #[test]
    fn test_default_aesthetics_required() {
        let table = DefaultAesthetics::from_table(&[
            ("ymin", DefaultAestheticValue::Required),
            ("ymax", DefaultAestheticValue::Required),
            ("fill", DefaultAestheticValue::String("gray65")),
            ("size", DefaultAestheticValue::Null),
        ]);
        assert_eq!(table.required(), vec!["ymin", "ymax"]);
        assert!(table.is_required("ymin"));
        assert!(!table.is_required("fill"));
        assert!(table.contains("size"));
        assert!(!table.contains("shape"));
    }

    #[test]
    fn test_merged_with_replaces_in_place() {
        let base = DefaultAesthetics::from_table(&[
            ("fill", DefaultAestheticValue::String("gray65")),
            ("stroke", DefaultAestheticValue::Null),
        ]);
        let merged = base.merged_with(&[("fill", DefaultAestheticValue::Null)]);
        assert_eq!(merged.names(), vec!["fill", "stroke"]);
        assert_eq!(merged.get("fill"), Some(&DefaultAestheticValue::Null));
    }

    fn table_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
        proptest::collection::vec(("[a-e]", any::<i64>()), 0..8).prop_map(|entries| {
            // Keys in a table are unique; keep first occurrence
            let mut table: Vec<(String, i64)> = Vec::new();
            for (k, v) in entries {
                if !table.iter().any(|(existing, _)| *existing == k) {
                    table.push((k, v));
                }
            }
            table
        })
    }

    proptest! {
        #[test]
        fn prop_merge_precedence(base in table_strategy(), overrides in table_strategy()) {
            let merged = merge_defaults(&base, &overrides);
            // Every override key carries the override value
            for (k, v) in &overrides {
                let found = merged.iter().find(|(mk, _)| mk == k);
                prop_assert_eq!(found.map(|(_, mv)| *mv), Some(*v));
            }
            // Base-only keys survive with their base values
            for (k, v) in &base {
                if !overrides.iter().any(|(ok, _)| ok == k) {
                    let found = merged.iter().find(|(mk, _)| mk == k);
                    prop_assert_eq!(found.map(|(_, mv)| *mv), Some(*v));
                }
            }
            // No key appears twice
            for (i, (k, _)) in merged.iter().enumerate() {
                prop_assert!(!merged[i + 1..].iter().any(|(other, _)| other == k));
            }
        }
    }
}
