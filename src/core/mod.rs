mod format;
mod layout;
mod reference_line;
mod series;

pub use format::{LabelFormatter, ValueFormatter, raw_label};
pub use layout::{AxisSelector, AxisType, CurveType, GridAxis, LayoutType, TickLine};
pub(crate) use layout::{default_grid_axis, default_tick_line};
pub use reference_line::ReferenceLineDef;
pub use series::{DataRow, SeriesDef};
