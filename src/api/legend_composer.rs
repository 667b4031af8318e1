use serde::{Deserialize, Serialize};

use crate::render::{ChartTheme, Props, join_class_names, merge_props};

use super::HighlightSetter;

pub const LEGEND_CLASS_NAME: &str = "ui-line-chart__legend";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    pub legend_props: Props,
}

/// One legend entry as reported by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendPayloadItem {
    pub data_key: String,
    pub value: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItemView {
    pub data_key: String,
    pub label: String,
    pub color: String,
    pub highlighted: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendView {
    pub class_name: String,
    pub items: Vec<LegendItemView>,
}

/// Content callback attached to the legend primitive.
///
/// Holds the write side of the highlight state; activating an entry toggles it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendContent {
    pub class_name: String,
    #[serde(skip)]
    setter: HighlightSetter,
}

impl LegendContent {
    #[must_use]
    pub fn render(&self, payload: &[LegendPayloadItem]) -> LegendView {
        let highlighted = self.setter.highlighted_area();
        let items = payload
            .iter()
            .map(|item| {
                let is_highlighted = highlighted.as_deref() == Some(item.data_key.as_str());
                LegendItemView {
                    data_key: item.data_key.clone(),
                    label: item.value.clone(),
                    color: item.color.clone(),
                    highlighted: is_highlighted,
                    dimmed: highlighted.is_some() && !is_highlighted,
                }
            })
            .collect();
        LegendView {
            class_name: self.class_name.clone(),
            items,
        }
    }

    /// Interaction handler: same key again clears, a different key replaces.
    pub fn on_highlight(&self, data_key: &str) {
        self.setter.set_highlighted_area(Some(data_key));
    }

    /// Clears any highlight.
    pub fn on_reset(&self) {
        self.setter.set_highlighted_area(None);
    }
}

/// Legend primitive props, its content callback and the entries to list.
#[derive(Debug, Clone, Serialize)]
pub struct LegendElement {
    pub props: Props,
    pub content: LegendContent,
    pub payload: Vec<LegendPayloadItem>,
}

impl LegendElement {
    /// Renders the element's own payload.
    #[must_use]
    pub fn render(&self) -> LegendView {
        self.content.render(&self.payload)
    }
}

pub struct LegendComposer<'a> {
    options: &'a LegendOptions,
    setter: HighlightSetter,
    theme: &'a ChartTheme,
}

impl<'a> LegendComposer<'a> {
    #[must_use]
    pub fn new(options: &'a LegendOptions, setter: HighlightSetter, theme: &'a ChartTheme) -> Self {
        Self {
            options,
            setter,
            theme,
        }
    }

    #[must_use]
    pub fn legend_props(&self) -> Props {
        let computed = Props::new().with("verticalAlign", "top").with("height", 50);
        merge_props(&[&self.theme.legend, &computed, &self.options.legend_props])
    }

    #[must_use]
    pub fn content(&self, class_name: Option<&str>) -> LegendContent {
        LegendContent {
            class_name: join_class_names([Some(LEGEND_CLASS_NAME), class_name])
                .unwrap_or_default(),
            setter: self.setter.clone(),
        }
    }

    #[must_use]
    pub fn element(
        &self,
        class_name: Option<&str>,
        payload: Vec<LegendPayloadItem>,
    ) -> LegendElement {
        LegendElement {
            props: self.legend_props(),
            content: self.content(class_name),
            payload,
        }
    }
}
