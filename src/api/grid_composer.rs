use serde::{Deserialize, Serialize};

use crate::core::{GridAxis, default_grid_axis};
use crate::render::{ChartTheme, Props, class_layer, merge_props};

pub const GRID_CLASS_NAME: &str = "ui-line-chart__grid";
pub const DEFAULT_GRID_DASHARRAY: &str = "5 5";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    pub grid_axis: GridAxis,
    /// Dash/gap lengths, forwarded without validation.
    pub stroke_dasharray: String,
    pub grid_props: Props,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            grid_axis: default_grid_axis(),
            stroke_dasharray: DEFAULT_GRID_DASHARRAY.to_owned(),
            grid_props: Props::new(),
        }
    }
}

pub struct GridComposer<'a> {
    options: &'a GridOptions,
    theme: &'a ChartTheme,
}

impl<'a> GridComposer<'a> {
    #[must_use]
    pub fn new(options: &'a GridOptions, theme: &'a ChartTheme) -> Self {
        Self { options, theme }
    }

    /// `horizontal` lines follow the X selector, `vertical` lines the Y selector.
    #[must_use]
    pub fn grid_props(&self, class_name: Option<&str>) -> Props {
        let computed = Props::new()
            .with("className", GRID_CLASS_NAME)
            .with("strokeDasharray", self.options.stroke_dasharray.as_str())
            .with("horizontal", self.options.grid_axis.includes_x())
            .with("vertical", self.options.grid_axis.includes_y());
        merge_props(&[
            &self.theme.grid,
            &computed,
            &self.options.grid_props,
            &class_layer(class_name),
        ])
    }
}
