//! Composers mapping a chart specification onto renderer prop bundles.
//!
//! Each composer is a pure function of its option slice and the theme tokens.
//! The one exception is highlight state, which [`LineChart`] owns and shares
//! between the legend (writer) and the line composer (reader).

mod axis_composer;
mod container_composer;
mod grid_composer;
mod highlight;
mod json_contract;
mod legend_composer;
mod line_chart;
mod line_composer;
mod reference_line_composer;
mod specification;
mod tooltip_composer;

pub use axis_composer::{
    AxisBundle, AxisComposer, AxisOptions, AxisSide, X_AXIS_CLASS_NAME, Y_AXIS_CLASS_NAME,
};
pub use container_composer::{CONTAINER_CLASS_NAME, ContainerComposer};
pub use grid_composer::{DEFAULT_GRID_DASHARRAY, GRID_CLASS_NAME, GridComposer, GridOptions};
pub use highlight::{HighlightSetter, HighlightState, next_highlight, series_opacity};
pub use json_contract::{LINE_CHART_TREE_JSON_SCHEMA_V1, LineChartTreeJsonContractV1};
pub use legend_composer::{
    LEGEND_CLASS_NAME, LegendComposer, LegendContent, LegendElement, LegendItemView,
    LegendOptions, LegendPayloadItem, LegendView,
};
pub use line_chart::{LineChart, LineChartTree, ROOT_CLASS_NAME};
pub use line_composer::{
    CHART_CLASS_NAME, DEFAULT_DOT_RADIUS, DEFAULT_FILL_OPACITY, DEFAULT_STROKE_WIDTH,
    LINE_CLASS_NAME, LineBundle, LineComposer, LineOptions, line_color_var, line_opacity_var,
};
pub use reference_line_composer::{
    REFERENCE_LINE_CLASS_NAME, ReferenceLineBundle, ReferenceLineComposer, reference_line_key,
};
pub use specification::ChartSpecification;
pub use tooltip_composer::{
    TOOLTIP_CLASS_NAME, TooltipComposer, TooltipContent, TooltipElement, TooltipOptions,
    TooltipPayloadItem, TooltipRow, TooltipView,
};
