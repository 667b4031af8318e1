//! linechart-compose: declarative line-chart prop composition.
//!
//! A chart specification (series, rows, facet options) is turned into the
//! keyword bundles an external rendering engine consumes for each primitive.
//! Layout, scaling and painting stay with that engine.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpecification, LineChart, LineChartTree};
pub use error::{ChartError, ChartResult};
