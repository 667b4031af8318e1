use serde::{Deserialize, Serialize};

/// Chart orientation.
///
/// `Horizontal` plots categories along X and values along Y; `Vertical` swaps
/// the two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Horizontal,
    Vertical,
}

impl LayoutType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Scale kind of the category-side axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    #[default]
    Category,
    Number,
}

impl AxisType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Number => "number",
        }
    }
}

/// Axis selector shared by tick-line visibility and grid-line placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSelector {
    X,
    Y,
    Xy,
    None,
}

impl AxisSelector {
    #[must_use]
    pub fn includes_x(self) -> bool {
        matches!(self, Self::X | Self::Xy)
    }

    #[must_use]
    pub fn includes_y(self) -> bool {
        matches!(self, Self::Y | Self::Xy)
    }
}

/// Which axes draw tick lines. Defaults to both.
pub type TickLine = AxisSelector;

/// Which axis the grid follows. Defaults to `X` (horizontal grid lines).
pub type GridAxis = AxisSelector;

pub(crate) fn default_tick_line() -> TickLine {
    AxisSelector::Xy
}

pub(crate) fn default_grid_axis() -> GridAxis {
    AxisSelector::X
}

/// Interpolation kind forwarded to the renderer's line primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveType {
    Basis,
    Bump,
    Linear,
    #[default]
    Monotone,
    Natural,
    Step,
    StepBefore,
    StepAfter,
}

impl CurveType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basis => "basis",
            Self::Bump => "bump",
            Self::Linear => "linear",
            Self::Monotone => "monotone",
            Self::Natural => "natural",
            Self::Step => "step",
            Self::StepBefore => "stepBefore",
            Self::StepAfter => "stepAfter",
        }
    }
}
