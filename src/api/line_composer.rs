use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::{CurveType, DataRow, LayoutType, ReferenceLineDef, SeriesDef};
use crate::render::{ChartTheme, Props, StyleVar, class_layer, css_var_reference, merge_props};

use super::{HighlightState, LegendPayloadItem, series_opacity};

pub const CHART_CLASS_NAME: &str = "ui-line-chart__chart";
pub const LINE_CLASS_NAME: &str = "ui-line-chart__line";

pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const DEFAULT_FILL_OPACITY: f64 = 1.0;
pub const DEFAULT_DOT_RADIUS: f64 = 4.0;

const BASE_MARGIN_PX: f64 = 10.0;
/// Extra right margin reserved for reference-line labels.
const REFERENCE_LABEL_MARGIN_PX: f64 = 30.0;

/// Line styling defaults applied to every series that does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOptions {
    pub with_dots: bool,
    pub with_active_dots: bool,
    pub curve_type: CurveType,
    pub stroke_width: f64,
    pub connect_nulls: bool,
    pub fill_opacity: f64,
    /// Chart-level overrides, laid over the composed chart props.
    pub line_chart_props: Props,
    /// Overrides laid over every composed line.
    pub line_props: Props,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            with_dots: true,
            with_active_dots: true,
            curve_type: CurveType::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            connect_nulls: true,
            fill_opacity: DEFAULT_FILL_OPACITY,
            line_chart_props: Props::new(),
            line_props: Props::new(),
        }
    }
}

/// Composed series line with its resolved color and opacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBundle {
    /// Element identity, `line-{dataKey}`.
    pub key: String,
    pub data_key: String,
    pub color: String,
    pub opacity: f64,
    pub props: Props,
}

#[must_use]
pub fn line_color_var(index: usize) -> String {
    format!("line-{index}")
}

#[must_use]
pub fn line_opacity_var(index: usize) -> String {
    format!("line-{index}-opacity")
}

/// Maps series definitions onto per-line bundles and chart-level props.
///
/// Opacity is read from the shared highlight state on each call, so a bundle
/// composed after [`LineComposer::set_highlighted_area`] reflects the change.
pub struct LineComposer<'a> {
    layout: LayoutType,
    series: &'a [SeriesDef],
    reference_lines: &'a [ReferenceLineDef],
    data: &'a [DataRow],
    options: &'a LineOptions,
    theme: &'a ChartTheme,
    highlight: HighlightState,
}

impl<'a> LineComposer<'a> {
    #[must_use]
    pub fn new(
        layout: LayoutType,
        series: &'a [SeriesDef],
        reference_lines: &'a [ReferenceLineDef],
        data: &'a [DataRow],
        options: &'a LineOptions,
        theme: &'a ChartTheme,
        highlight: HighlightState,
    ) -> Self {
        Self {
            layout,
            series,
            reference_lines,
            data,
            options,
            theme,
            highlight,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Explicit series color, else the palette entry at the series position.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Option<String> {
        let series = self.series.get(index)?;
        Some(self.resolved_color(index, series))
    }

    fn resolved_color(&self, index: usize, series: &SeriesDef) -> String {
        series
            .color
            .clone()
            .unwrap_or_else(|| self.theme.palette_color(index).to_owned())
    }

    #[must_use]
    pub fn series_opacity(&self, index: usize) -> Option<f64> {
        let series = self.series.get(index)?;
        let highlighted = self.highlight.highlighted_area();
        Some(series_opacity(
            highlighted.as_deref(),
            &series.key,
            self.theme.effective_dimmed_opacity(),
        ))
    }

    /// Bundle for the series at `index`, `None` past the end.
    ///
    /// Precedence: theme line tokens < computed < per-series props <
    /// chart-wide `line_props` < call-site class.
    #[must_use]
    pub fn line_props(&self, index: usize, class_name: Option<&str>) -> Option<LineBundle> {
        let series = self.series.get(index)?;
        let color = self.series_color(index)?;
        let opacity = self.series_opacity(index)?;
        let dimmed = opacity < 1.0;
        let color_ref = css_var_reference(&line_color_var(index));

        let with_dots = series.with_dots.unwrap_or(self.options.with_dots);
        let with_active_dots = series
            .with_active_dots
            .unwrap_or(self.options.with_active_dots);
        let fill_opacity = series.fill_opacity.unwrap_or(self.options.fill_opacity);

        let dot = if with_dots {
            json!({
                "fill": color_ref,
                "fillOpacity": if dimmed { 0.0 } else { 1.0 },
                "strokeWidth": 2,
                "r": DEFAULT_DOT_RADIUS,
            })
        } else {
            Value::Bool(false)
        };
        let active_dot = if with_active_dots {
            json!({
                "fill": color_ref,
                "stroke": "#ffffff",
                "strokeWidth": 2,
                "r": DEFAULT_DOT_RADIUS,
            })
        } else {
            Value::Bool(false)
        };

        let computed = Props::new()
            .with("className", LINE_CLASS_NAME)
            .with("name", series.display_name())
            .with("dataKey", series.key.as_str())
            .with(
                "type",
                series
                    .curve_type
                    .unwrap_or(self.options.curve_type)
                    .as_str(),
            )
            .with("stroke", color_ref.as_str())
            .with(
                "strokeWidth",
                series.stroke_width.unwrap_or(self.options.stroke_width),
            )
            .with("strokeOpacity", opacity)
            .with("fill", color_ref.as_str())
            .with("fillOpacity", if dimmed { 0.0 } else { fill_opacity })
            .with("dot", dot)
            .with("activeDot", active_dot)
            .with(
                "connectNulls",
                series.connect_nulls.unwrap_or(self.options.connect_nulls),
            )
            .with("isAnimationActive", false)
            .with_opt("strokeDasharray", series.stroke_dasharray.as_deref());

        Some(LineBundle {
            key: format!("line-{}", series.key),
            data_key: series.key.clone(),
            color,
            opacity,
            props: merge_props(&[
                &self.theme.line,
                &computed,
                &series.props,
                &self.options.line_props,
                &class_layer(class_name),
            ]),
        })
    }

    /// All line bundles in series order.
    #[must_use]
    pub fn bundles(&self, class_name: Option<&str>) -> Vec<LineBundle> {
        (0..self.len())
            .filter_map(|index| self.line_props(index, class_name))
            .collect()
    }

    /// Chart-level props independent of any one series.
    #[must_use]
    pub fn chart_props(&self, class_name: Option<&str>) -> Props {
        let labeled_reference = self
            .reference_lines
            .iter()
            .any(|line| line.label.is_some());
        let right_margin = if labeled_reference {
            BASE_MARGIN_PX + REFERENCE_LABEL_MARGIN_PX
        } else {
            BASE_MARGIN_PX
        };
        let data: Vec<Value> = self
            .data
            .iter()
            .map(|row| {
                Value::Object(
                    row.iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect(),
                )
            })
            .collect();

        let computed = Props::new()
            .with("className", CHART_CLASS_NAME)
            .with("data", data)
            .with("layout", self.layout.as_str())
            .with(
                "margin",
                json!({
                    "top": BASE_MARGIN_PX,
                    "right": right_margin,
                    "bottom": 0.0,
                    "left": 0.0,
                }),
            );
        merge_props(&[
            &self.theme.chart,
            &computed,
            &self.options.line_chart_props,
            &class_layer(class_name),
        ])
    }

    /// Per-series color/opacity variables followed by chart-wide ones.
    #[must_use]
    pub fn style_variables(&self) -> Vec<StyleVar> {
        let highlighted = self.highlight.highlighted_area();
        let dimmed = self.theme.effective_dimmed_opacity();
        let mut vars = Vec::with_capacity(self.series.len() * 2 + 1);
        for (index, series) in self.series.iter().enumerate() {
            vars.push(StyleVar::new(
                line_color_var(index),
                self.resolved_color(index, series),
            ));
            vars.push(StyleVar::new(
                line_opacity_var(index),
                series_opacity(highlighted.as_deref(), &series.key, dimmed),
            ));
        }
        vars.push(StyleVar::new("fill-opacity", self.options.fill_opacity));
        vars
    }

    /// Legend entries derived from the resolved series colors.
    #[must_use]
    pub fn legend_payload(&self) -> Vec<LegendPayloadItem> {
        self.series
            .iter()
            .enumerate()
            .map(|(index, series)| LegendPayloadItem {
                data_key: series.key.clone(),
                value: series.display_name().to_owned(),
                color: self.resolved_color(index, series),
            })
            .collect()
    }

    /// Toggle mutator shared with the legend.
    pub fn set_highlighted_area(&self, key: Option<&str>) {
        self.highlight.set_highlighted_area(key);
    }

    #[must_use]
    pub fn highlighted_area(&self) -> Option<String> {
        self.highlight.highlighted_area()
    }
}
