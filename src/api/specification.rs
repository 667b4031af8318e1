use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataRow, LabelFormatter, LayoutType, ReferenceLineDef, SeriesDef, ValueFormatter};
use crate::error::{ChartError, ChartResult};
use crate::render::Props;

use super::{AxisOptions, GridOptions, LegendOptions, LineOptions, TooltipOptions};

/// Declarative line-chart input.
///
/// Serializable so hosts can load chart setup from JSON; every option has a
/// default. The value formatter is code and is attached with
/// [`ChartSpecification::with_value_formatter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSpecification {
    pub series: Vec<SeriesDef>,
    pub data: Vec<DataRow>,
    #[serde(rename = "layoutType")]
    pub layout: LayoutType,
    pub axis: AxisOptions,
    pub grid: GridOptions,
    pub tooltip: TooltipOptions,
    pub legend: LegendOptions,
    pub line: LineOptions,
    pub reference_lines: Vec<ReferenceLineDef>,
    pub container_props: Props,
    /// Shown when `true`.
    pub with_tooltip: bool,
    /// Shown when `true`.
    pub with_legend: bool,
    /// Appended to value labels on the value axis and in the tooltip.
    pub unit: Option<String>,
    pub class_name: Option<String>,
    /// Unrecognized attributes forwarded untouched to the outermost element.
    pub attributes: Props,
    #[serde(skip)]
    pub value_formatter: Option<ValueFormatter>,
}

impl Default for ChartSpecification {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            data: Vec::new(),
            layout: LayoutType::default(),
            axis: AxisOptions::default(),
            grid: GridOptions::default(),
            tooltip: TooltipOptions::default(),
            legend: LegendOptions::default(),
            line: LineOptions::default(),
            reference_lines: Vec::new(),
            container_props: Props::new(),
            with_tooltip: true,
            with_legend: false,
            unit: None,
            class_name: None,
            attributes: Props::new(),
            value_formatter: None,
        }
    }
}

impl ChartSpecification {
    #[must_use]
    pub fn new(series: Vec<SeriesDef>, data: Vec<DataRow>) -> Self {
        Self {
            series,
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutType) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_data_key(mut self, data_key: impl Into<String>) -> Self {
        self.axis.data_key = Some(data_key.into());
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_tooltip_options(mut self, tooltip: TooltipOptions) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_legend_options(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LineOptions) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_reference_lines(mut self, reference_lines: Vec<ReferenceLineDef>) -> Self {
        self.reference_lines = reference_lines;
        self
    }

    #[must_use]
    pub fn with_container_props(mut self, container_props: Props) -> Self {
        self.container_props = container_props;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, with_tooltip: bool) -> Self {
        self.with_tooltip = with_tooltip;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, with_legend: bool) -> Self {
        self.with_legend = with_legend;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_value_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.value_formatter = Some(ValueFormatter::new(formatter));
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Props) -> Self {
        self.attributes = attributes;
        self
    }

    /// Label rule shared by the value axis and the tooltip.
    #[must_use]
    pub fn label_formatter(&self) -> LabelFormatter {
        LabelFormatter::new(self.value_formatter.clone(), self.unit.clone())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let spec: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart specification: {e}"))
        })?;
        debug!(
            series = spec.series.len(),
            rows = spec.data.len(),
            reference_lines = spec.reference_lines.len(),
            "loaded chart specification"
        );
        Ok(spec)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart specification: {e}"))
        })
    }
}
