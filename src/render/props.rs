use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key whose values are concatenated instead of replaced during merges.
pub const CLASS_NAME_KEY: &str = "className";

/// Insertion-ordered keyword bag handed to one renderer primitive.
///
/// Keys follow the renderer's option schema (camelCase). `IndexMap` keeps
/// iteration and serialization order stable across compose passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(IndexMap<String, Value>);

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts only when `value` is present.
    #[must_use]
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.get_str(CLASS_NAME_KEY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Lays `other` over `self`. Later keys win, `className` accumulates.
    pub fn overlay(&mut self, other: &Props) {
        for (key, value) in &other.0 {
            if key == CLASS_NAME_KEY {
                let joined = join_class_names([self.class_name(), value.as_str()]);
                match joined {
                    Some(joined) => self.insert(CLASS_NAME_KEY, joined),
                    None => {
                        self.0.shift_remove(CLASS_NAME_KEY);
                    }
                }
                continue;
            }
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns a JSON object view of the bag.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<Props> for Value {
    fn from(props: Props) -> Self {
        Value::Object(props.0.into_iter().collect())
    }
}

/// Merges layers in ascending precedence: each layer overrides the ones before it.
///
/// Composers call this once per facet with `[theme defaults, computed, raw
/// overrides, call-site]` so the precedence of every bundle is readable at a
/// single call site.
#[must_use]
pub fn merge_props(layers: &[&Props]) -> Props {
    let mut merged = Props::new();
    for layer in layers {
        merged.overlay(layer);
    }
    merged
}

/// Joins non-empty class names with single spaces.
#[must_use]
pub fn join_class_names<'a>(names: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let joined = names
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Props carrying only a `className`, used for call-site layers.
#[must_use]
pub fn class_layer(class_name: Option<&str>) -> Props {
    Props::new().with_opt(CLASS_NAME_KEY, join_class_names([class_name]))
}
