//! Renderer-facing vocabulary: keyword bags, style variables, theme tokens.
//!
//! Nothing here paints. The external engine consumes these shapes verbatim.

mod props;
mod style_vars;
mod theme;

pub use props::{CLASS_NAME_KEY, Props, class_layer, join_class_names, merge_props};
pub use style_vars::{STYLE_VAR_PREFIX, StyleVar, css_var_name, css_var_reference};
pub use theme::{ChartTheme, DEFAULT_DIMMED_OPACITY, FALLBACK_SERIES_COLOR};
