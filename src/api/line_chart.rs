use serde::Serialize;
use tracing::debug;

use crate::render::{ChartTheme, Props, StyleVar, join_class_names};

use super::{
    AxisBundle, AxisComposer, ChartSpecification, ContainerComposer, GridComposer,
    HighlightState, LegendComposer, LegendElement, LineBundle, LineComposer, ReferenceLineBundle,
    ReferenceLineComposer, TooltipComposer, TooltipElement,
};

pub const ROOT_CLASS_NAME: &str = "ui-line-chart";

/// Fully composed element structure handed to the renderer.
///
/// Nesting: root → container → chart → (grid, axes, legend, tooltip, lines,
/// reference lines).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartTree {
    pub class_name: String,
    /// Style variables attached to the root element.
    pub vars: Vec<StyleVar>,
    /// Theme container tokens for the root element.
    pub css: Props,
    /// Pass-through attributes, untouched.
    pub attributes: Props,
    pub container: Props,
    pub chart: Props,
    pub grid: Props,
    pub x_axis: AxisBundle,
    pub y_axis: AxisBundle,
    pub legend: Option<LegendElement>,
    pub tooltip: Option<TooltipElement>,
    pub lines: Vec<LineBundle>,
    pub reference_lines: Vec<ReferenceLineBundle>,
}

impl LineChartTree {
    #[must_use]
    pub fn line(&self, data_key: &str) -> Option<&LineBundle> {
        self.lines.iter().find(|line| line.data_key == data_key)
    }

    #[must_use]
    pub fn var(&self, name: &str) -> Option<&StyleVar> {
        self.vars.iter().find(|var| var.name == name)
    }
}

/// Root composition: owns the specification, the theme tokens and the
/// highlight state, and wires every composer on each [`LineChart::compose`].
///
/// A clone carries the current highlight but owns its own state from then on.
#[derive(Debug)]
pub struct LineChart {
    spec: ChartSpecification,
    theme: ChartTheme,
    highlight: HighlightState,
}

impl Clone for LineChart {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            theme: self.theme.clone(),
            highlight: self.highlight.detached(),
        }
    }
}

impl LineChart {
    #[must_use]
    pub fn new(spec: ChartSpecification, theme: ChartTheme) -> Self {
        Self {
            spec,
            theme,
            highlight: HighlightState::new(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpecification {
        &self.spec
    }

    #[must_use]
    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    /// Replaces the specification; highlight state survives.
    pub fn set_spec(&mut self, spec: ChartSpecification) {
        self.spec = spec;
    }

    #[must_use]
    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn set_highlighted_area(&self, key: Option<&str>) {
        self.highlight.set_highlighted_area(key);
    }

    #[must_use]
    pub fn line_composer(&self) -> LineComposer<'_> {
        LineComposer::new(
            self.spec.layout,
            &self.spec.series,
            &self.spec.reference_lines,
            &self.spec.data,
            &self.spec.line,
            &self.theme,
            self.highlight.clone(),
        )
    }

    #[must_use]
    pub fn axis_composer(&self) -> AxisComposer<'_> {
        AxisComposer::new(
            &self.spec.axis,
            self.spec.layout,
            self.spec.grid.grid_axis,
            self.spec.label_formatter(),
            &self.theme,
        )
    }

    #[must_use]
    pub fn grid_composer(&self) -> GridComposer<'_> {
        GridComposer::new(&self.spec.grid, &self.theme)
    }

    #[must_use]
    pub fn reference_line_composer(&self) -> ReferenceLineComposer<'_> {
        ReferenceLineComposer::new(&self.spec.reference_lines, self.spec.layout, &self.theme)
    }

    #[must_use]
    pub fn tooltip_composer(&self) -> TooltipComposer<'_> {
        TooltipComposer::new(&self.spec.tooltip, self.spec.label_formatter(), &self.theme)
    }

    #[must_use]
    pub fn legend_composer(&self) -> LegendComposer<'_> {
        LegendComposer::new(&self.spec.legend, self.highlight.setter(), &self.theme)
    }

    #[must_use]
    pub fn container_composer(&self) -> ContainerComposer<'_> {
        ContainerComposer::new(&self.spec.container_props)
    }

    /// One render pass: runs every composer against the current spec and
    /// highlight state.
    #[must_use]
    pub fn compose(&self) -> LineChartTree {
        let lines = self.line_composer();
        let axes = self.axis_composer();
        let tooltip = self.tooltip_composer();

        let mut vars = lines.style_variables();
        vars.extend(tooltip.style_variables());

        let tree = LineChartTree {
            class_name: join_class_names([Some(ROOT_CLASS_NAME), self.spec.class_name.as_deref()])
                .unwrap_or_default(),
            vars,
            css: self.theme.container.clone(),
            attributes: self.spec.attributes.clone(),
            container: self.container_composer().container_props(None),
            chart: lines.chart_props(None),
            grid: self.grid_composer().grid_props(None),
            x_axis: axes.x_axis_props(None),
            y_axis: axes.y_axis_props(None),
            legend: self.spec.with_legend.then(|| {
                self.legend_composer()
                    .element(None, lines.legend_payload())
            }),
            tooltip: self.spec.with_tooltip.then(|| tooltip.element(None)),
            lines: lines.bundles(None),
            reference_lines: self.reference_line_composer().bundles(None),
        };

        debug!(
            series = tree.lines.len(),
            reference_lines = tree.reference_lines.len(),
            legend = tree.legend.is_some(),
            tooltip = tree.tooltip.is_some(),
            highlighted = ?self.highlight.highlighted_area(),
            "composed line chart"
        );
        tree
    }
}
