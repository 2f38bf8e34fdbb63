//! Value types for layer specifications
//!
//! These types form the shared vocabulary of the plot module: aesthetic
//! mapping targets, runtime parameter values, static default-table entries,
//! and the insertion-ordered maps that hold per-layer mappings and
//! parameters.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

/// A literal (non-column) value assigned to an aesthetic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// Target of an aesthetic mapping: a data column reference or a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AestheticValue {
    /// Reference to a data column by name
    Column { name: String },
    /// Reference to a data column with its sign flipped.
    ///
    /// Used for inverse sizing hints, e.g. mapping `size` to the negated
    /// interval width so that wider intervals draw thinner.
    Negated { name: String },
    /// A constant value, not driven by data
    Literal(LiteralValue),
}

impl AestheticValue {
    /// Column reference shorthand
    pub fn column(name: impl Into<String>) -> Self {
        AestheticValue::Column { name: name.into() }
    }

    /// Negated column reference shorthand
    pub fn negated(name: impl Into<String>) -> Self {
        AestheticValue::Negated { name: name.into() }
    }

    /// The referenced column name, if this value is column-driven
    pub fn column_name(&self) -> Option<&str> {
        match self {
            AestheticValue::Column { name } | AestheticValue::Negated { name } => Some(name),
            AestheticValue::Literal(_) => None,
        }
    }
}

/// A runtime layer parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl ParameterValue {
    /// Name of the value's shape, for validation messages
    pub fn shape(&self) -> &'static str {
        match self {
            ParameterValue::String(_) => "string",
            ParameterValue::Number(_) => "number",
            ParameterValue::Boolean(_) => "boolean",
            ParameterValue::Null => "null",
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

/// Entry in a geometry's static aesthetic-default table
///
/// - `Required`: must be present in the layer's effective mappings
/// - `Null`: supported, no default
/// - Other variants: literal default values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultAestheticValue {
    Required,
    Null,
    String(&'static str),
    Number(f64),
    Boolean(bool),
}

impl DefaultAestheticValue {
    /// Convert a table entry into a concrete aesthetic value, if it carries one
    pub fn to_aesthetic_value(&self) -> Option<AestheticValue> {
        match self {
            DefaultAestheticValue::Required | DefaultAestheticValue::Null => None,
            DefaultAestheticValue::String(s) => {
                Some(AestheticValue::Literal(LiteralValue::String(s.to_string())))
            }
            DefaultAestheticValue::Number(n) => {
                Some(AestheticValue::Literal(LiteralValue::Number(*n)))
            }
            DefaultAestheticValue::Boolean(b) => {
                Some(AestheticValue::Literal(LiteralValue::Boolean(*b)))
            }
        }
    }
}

/// Insertion-ordered string-keyed map
///
/// Layer specifications care about declaration order (defaults first, caller
/// overrides in place), so this is a small ordered map rather than a
/// `HashMap`. Key sets are tiny; linear scans are fine.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }

    /// Insert a value, replacing in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Overlay `other` onto `self`: every entry of `other` wins for its key
    pub fn extend_from(&mut self, other: &Self)
    where
        V: Clone,
    {
        for (k, v) in other.iter() {
            self.insert(k, v.clone());
        }
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string-keyed map")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

/// Aesthetic mappings of a layer: aesthetic name to mapping target
pub type Mappings = OrderedMap<AestheticValue>;

/// Layer parameters: parameter name to value
pub type Parameters = OrderedMap<ParameterValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_preserves_insertion_order() {
        let mut map: OrderedMap<f64> = OrderedMap::new();
        map.insert("b", 1.0);
        map.insert("a", 2.0);
        map.insert("c", 3.0);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ordered_map_insert_replaces_in_place() {
        let mut map: OrderedMap<f64> = OrderedMap::new();
        map.insert("a", 1.0);
        map.insert("b", 2.0);
        map.insert("a", 9.0);
        let entries: Vec<(&str, &f64)> = map.iter().collect();
        assert_eq!(entries, vec![("a", &9.0), ("b", &2.0)]);
    }

    #[test]
    fn test_extend_from_overrides() {
        let mut base: OrderedMap<f64> = OrderedMap::new();
        base.insert("x", 1.0);
        base.insert("y", 2.0);
        let mut over: OrderedMap<f64> = OrderedMap::new();
        over.insert("y", 5.0);
        over.insert("z", 6.0);
        base.extend_from(&over);
        assert_eq!(base.get("x"), Some(&1.0));
        assert_eq!(base.get("y"), Some(&5.0));
        assert_eq!(base.get("z"), Some(&6.0));
    }

    #[test]
    fn test_column_name() {
        assert_eq!(AestheticValue::column(".lower").column_name(), Some(".lower"));
        assert_eq!(AestheticValue::negated(".width").column_name(), Some(".width"));
        assert_eq!(
            AestheticValue::Literal(LiteralValue::String("black".to_string())).column_name(),
            None
        );
    }

    #[test]
    fn test_default_aesthetic_value_conversion() {
        assert_eq!(DefaultAestheticValue::Required.to_aesthetic_value(), None);
        assert_eq!(DefaultAestheticValue::Null.to_aesthetic_value(), None);
        assert_eq!(
            DefaultAestheticValue::Number(1.5).to_aesthetic_value(),
            Some(AestheticValue::Literal(LiteralValue::Number(1.5)))
        );
    }
}
