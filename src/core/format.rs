use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Caller-supplied numeric label formatter.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f64) -> String + Send + Sync + 'static>);

impl ValueFormatter {
    pub fn new<F>(formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(formatter))
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// Label rule shared by value-axis ticks and tooltip rows: `formatter(v) + unit`.
///
/// Without a formatter, or for non-numeric values, the cell is stringified raw
/// so integer text keeps every digit. A null cell has no label. Only labels go
/// through here; data rows are never rewritten.
#[derive(Debug, Clone, Default)]
pub struct LabelFormatter {
    formatter: Option<ValueFormatter>,
    unit: Option<String>,
}

impl LabelFormatter {
    #[must_use]
    pub fn new(formatter: Option<ValueFormatter>, unit: Option<String>) -> Self {
        Self { formatter, unit }
    }

    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    #[must_use]
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    #[must_use]
    pub fn format_number(&self, value: f64) -> String {
        let mut label = match &self.formatter {
            Some(formatter) => formatter.format(value),
            None => value.to_string(),
        };
        if let Some(unit) = &self.unit {
            label.push_str(unit);
        }
        label
    }

    #[must_use]
    pub fn format_value(&self, value: &Value) -> String {
        if value.is_null() {
            return String::new();
        }
        let mut label = match (&self.formatter, value.as_f64()) {
            (Some(formatter), Some(number)) => formatter.format(number),
            _ => raw_label(value),
        };
        if let Some(unit) = &self.unit {
            label.push_str(unit);
        }
        label
    }
}

impl Serialize for LabelFormatter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LabelFormatter", 2)?;
        state.serialize_field("unit", &self.unit)?;
        state.serialize_field("hasFormatter", &self.has_formatter())?;
        state.end()
    }
}

/// Stringifies a cell the way a label shows it: strings unquoted, null empty.
#[must_use]
pub fn raw_label(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
