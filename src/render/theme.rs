use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::Props;

/// Opacity applied to series that are not the highlighted one.
pub const DEFAULT_DIMMED_OPACITY: f64 = 0.3;

/// Color used when no palette entry is available.
pub const FALLBACK_SERIES_COLOR: &str = "currentColor";

/// Resolved style tokens supplied by the host theme.
///
/// Every slot is an opaque keyword bag that composers lay underneath their
/// computed props. The palette is indexed by series position and cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartTheme {
    pub container: Props,
    pub chart: Props,
    pub line: Props,
    pub axis: Props,
    pub grid: Props,
    pub tooltip: Props,
    pub legend: Props,
    pub reference_line: Props,
    pub palette: Vec<String>,
    pub dimmed_opacity: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            container: Props::new().with("maxW", "full"),
            chart: Props::new(),
            line: Props::new(),
            axis: Props::new().with("tick", json!({"fontSize": 12, "fill": "currentColor"})),
            grid: Props::new().with("stroke", "#dee2e6"),
            tooltip: Props::new().with("cursor", json!({"stroke": "#dee2e6", "strokeWidth": 1})),
            legend: Props::new(),
            reference_line: Props::new()
                .with("stroke", "#868e96")
                .with("strokeWidth", 1),
            palette: default_palette(),
            dimmed_opacity: DEFAULT_DIMMED_OPACITY,
        }
    }
}

impl ChartTheme {
    /// Replaces the series palette.
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_dimmed_opacity(mut self, dimmed_opacity: f64) -> Self {
        self.dimmed_opacity = dimmed_opacity;
        self
    }

    /// Palette entry for a series position, cycling when the palette is short.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return FALLBACK_SERIES_COLOR;
        }
        &self.palette[index % self.palette.len()]
    }

    /// Dimmed opacity clamped into `[0, 1]`; non-finite values fall back to the default.
    #[must_use]
    pub fn effective_dimmed_opacity(&self) -> f64 {
        if self.dimmed_opacity.is_finite() {
            self.dimmed_opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_DIMMED_OPACITY
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let theme: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart theme: {e}")))?;
        debug!(palette_len = theme.palette.len(), "loaded chart theme");
        Ok(theme)
    }
}

fn default_palette() -> Vec<String> {
    [
        "#228be6", "#fa5252", "#40c057", "#fab005", "#7950f2", "#15aabf", "#fd7e14", "#e64980",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}
