use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::{
    AxisType, GridAxis, LabelFormatter, LayoutType, TickLine, default_tick_line, raw_label,
};
use crate::render::{ChartTheme, Props, class_layer, merge_props};

pub const X_AXIS_CLASS_NAME: &str = "ui-line-chart__x-axis";
pub const Y_AXIS_CLASS_NAME: &str = "ui-line-chart__y-axis";

/// Axis options exposed on the chart surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisOptions {
    /// Data field plotted along the category axis.
    pub data_key: Option<String>,
    /// Scale kind of the category axis.
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub tick_line: TickLine,
    pub with_x_axis: bool,
    pub with_y_axis: bool,
    pub x_axis_props: Props,
    pub y_axis_props: Props,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            data_key: None,
            axis_type: AxisType::default(),
            tick_line: default_tick_line(),
            with_x_axis: true,
            with_y_axis: true,
            x_axis_props: Props::new(),
            y_axis_props: Props::new(),
        }
    }
}

/// Which side of the chart an axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSide {
    X,
    Y,
}

/// Composed axis: renderer props plus the value-axis tick formatter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBundle {
    pub side: AxisSide,
    pub props: Props,
    /// Present on the value axis only.
    pub tick_formatter: Option<LabelFormatter>,
}

impl AxisBundle {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.props.get_bool("hide").unwrap_or(false)
    }

    #[must_use]
    pub fn is_value_axis(&self) -> bool {
        self.tick_formatter.is_some()
    }

    /// Tick label for `value`; category ticks are shown raw.
    #[must_use]
    pub fn format_tick(&self, value: &Value) -> String {
        match &self.tick_formatter {
            Some(formatter) => formatter.format_value(value),
            None => raw_label(value),
        }
    }
}

/// Maps axis options onto X/Y axis bundles.
pub struct AxisComposer<'a> {
    options: &'a AxisOptions,
    layout: LayoutType,
    grid_axis: GridAxis,
    label_formatter: LabelFormatter,
    theme: &'a ChartTheme,
}

impl<'a> AxisComposer<'a> {
    #[must_use]
    pub fn new(
        options: &'a AxisOptions,
        layout: LayoutType,
        grid_axis: GridAxis,
        label_formatter: LabelFormatter,
        theme: &'a ChartTheme,
    ) -> Self {
        Self {
            options,
            layout,
            grid_axis,
            label_formatter,
            theme,
        }
    }

    #[must_use]
    pub fn x_axis_props(&self, class_name: Option<&str>) -> AxisBundle {
        self.compose(AxisSide::X, class_name)
    }

    #[must_use]
    pub fn y_axis_props(&self, class_name: Option<&str>) -> AxisBundle {
        self.compose(AxisSide::Y, class_name)
    }

    fn value_side(&self) -> AxisSide {
        match self.layout {
            LayoutType::Horizontal => AxisSide::Y,
            LayoutType::Vertical => AxisSide::X,
        }
    }

    fn compose(&self, side: AxisSide, class_name: Option<&str>) -> AxisBundle {
        let (visible, tick_line, parallel_grid, overrides, base_class) = match side {
            AxisSide::X => (
                self.options.with_x_axis,
                self.options.tick_line.includes_x(),
                self.grid_axis.includes_x(),
                &self.options.x_axis_props,
                X_AXIS_CLASS_NAME,
            ),
            AxisSide::Y => (
                self.options.with_y_axis,
                self.options.tick_line.includes_y(),
                self.grid_axis.includes_y(),
                &self.options.y_axis_props,
                Y_AXIS_CLASS_NAME,
            ),
        };
        let is_value_axis = side == self.value_side();

        let mut computed = Props::new()
            .with("className", base_class)
            .with("hide", !visible)
            .with("axisLine", !parallel_grid)
            .with(
                "tickLine",
                if tick_line {
                    json!({"stroke": "currentColor"})
                } else {
                    Value::Bool(false)
                },
            );
        if is_value_axis {
            computed.insert("type", AxisType::Number.as_str());
        } else {
            computed.insert("type", self.options.axis_type.as_str());
            if let Some(data_key) = &self.options.data_key {
                computed.insert("dataKey", data_key.as_str());
            }
            computed.insert("interval", "preserveStartEnd");
            computed.insert("minTickGap", 5);
        }

        let props = merge_props(&[
            &self.theme.axis,
            &computed,
            overrides,
            &class_layer(class_name),
        ]);

        AxisBundle {
            side,
            props,
            tick_formatter: is_value_axis.then(|| self.label_formatter.clone()),
        }
    }
}
