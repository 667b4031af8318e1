use serde::{Deserialize, Serialize};

use crate::render::Props;

/// A horizontal (or, in vertical layout, vertical) marker at a value-axis position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceLineDef {
    pub value: f64,
    pub label: Option<String>,
    pub color: Option<String>,
    pub stroke_dasharray: Option<String>,
    pub props: Props,
}

impl ReferenceLineDef {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_stroke_dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}
