use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::Props;

use super::CurveType;

/// One data row: field name to value, in insertion order.
pub type DataRow = IndexMap<String, Value>;

/// One plotted line.
///
/// `key` names the data field the line reads. Uniqueness and presence in
/// every row are not checked; a missing field is a missing point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesDef {
    pub key: String,
    pub color: Option<String>,
    pub label: Option<String>,
    pub with_dots: Option<bool>,
    pub with_active_dots: Option<bool>,
    pub curve_type: Option<CurveType>,
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub connect_nulls: Option<bool>,
    pub stroke_dasharray: Option<String>,
    pub props: Props,
}

impl SeriesDef {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_dots(mut self, with_dots: bool) -> Self {
        self.with_dots = Some(with_dots);
        self
    }

    #[must_use]
    pub fn with_active_dots(mut self, with_active_dots: bool) -> Self {
        self.with_active_dots = Some(with_active_dots);
        self
    }

    #[must_use]
    pub fn with_curve_type(mut self, curve_type: CurveType) -> Self {
        self.curve_type = Some(curve_type);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = Some(fill_opacity);
        self
    }

    #[must_use]
    pub fn with_connect_nulls(mut self, connect_nulls: bool) -> Self {
        self.connect_nulls = Some(connect_nulls);
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

    /// Name shown in legend and tooltip entries.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}
