use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix shared by every emitted style variable.
pub const STYLE_VAR_PREFIX: &str = "ui";

/// One named style variable attached to the host container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleVar {
    /// Unprefixed name, e.g. `line-0`.
    pub name: String,
    pub value: Value,
}

impl StyleVar {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Fully qualified custom property name, e.g. `--ui-line-0`.
    #[must_use]
    pub fn css_name(&self) -> String {
        css_var_name(&self.name)
    }

    /// `var(--ui-…)` reference usable as a prop value.
    #[must_use]
    pub fn reference(&self) -> String {
        css_var_reference(&self.name)
    }
}

#[must_use]
pub fn css_var_name(name: &str) -> String {
    format!("--{STYLE_VAR_PREFIX}-{name}")
}

#[must_use]
pub fn css_var_reference(name: &str) -> String {
    format!("var({})", css_var_name(name))
}
