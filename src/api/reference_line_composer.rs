use serde::Serialize;
use serde_json::json;

use crate::core::{LayoutType, ReferenceLineDef};
use crate::render::{ChartTheme, Props, class_layer, merge_props};

pub const REFERENCE_LINE_CLASS_NAME: &str = "ui-line-chart__reference-line";

/// One composed reference line. `key` is derived from position only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLineBundle {
    pub key: String,
    pub props: Props,
}

#[must_use]
pub fn reference_line_key(index: usize) -> String {
    format!("referenceLine-{index}")
}

pub struct ReferenceLineComposer<'a> {
    lines: &'a [ReferenceLineDef],
    layout: LayoutType,
    theme: &'a ChartTheme,
}

impl<'a> ReferenceLineComposer<'a> {
    #[must_use]
    pub fn new(lines: &'a [ReferenceLineDef], layout: LayoutType, theme: &'a ChartTheme) -> Self {
        Self {
            lines,
            layout,
            theme,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bundle for the definition at `index`, `None` past the end.
    ///
    /// Two lines sharing a value still get distinct keys, and reordering the
    /// input changes which content sits under each key.
    #[must_use]
    pub fn reference_line_props(
        &self,
        index: usize,
        class_name: Option<&str>,
    ) -> Option<ReferenceLineBundle> {
        let line = self.lines.get(index)?;
        let position_key = match self.layout {
            LayoutType::Horizontal => "y",
            LayoutType::Vertical => "x",
        };

        let computed = Props::new()
            .with("className", REFERENCE_LINE_CLASS_NAME)
            .with(position_key, line.value)
            .with("ifOverflow", "extendDomain")
            .with_opt("stroke", line.color.as_deref())
            .with_opt("strokeDasharray", line.stroke_dasharray.as_deref())
            .with_opt(
                "label",
                line.label.as_ref().map(|label| {
                    json!({
                        "value": label,
                        "position": "insideBottomLeft",
                        "fill": line.color.as_deref().unwrap_or("currentColor"),
                        "fontSize": 12,
                    })
                }),
            );

        Some(ReferenceLineBundle {
            key: reference_line_key(index),
            props: merge_props(&[
                &self.theme.reference_line,
                &computed,
                &line.props,
                &class_layer(class_name),
            ]),
        })
    }

    /// All bundles in input order.
    #[must_use]
    pub fn bundles(&self, class_name: Option<&str>) -> Vec<ReferenceLineBundle> {
        (0..self.len())
            .filter_map(|index| self.reference_line_props(index, class_name))
            .collect()
    }
}
