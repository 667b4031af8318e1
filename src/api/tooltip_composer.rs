use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{LabelFormatter, raw_label};
use crate::render::{ChartTheme, Props, StyleVar, join_class_names, merge_props};

pub const TOOLTIP_CLASS_NAME: &str = "ui-line-chart__tooltip";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOptions {
    pub tooltip_props: Props,
    /// Transition duration in milliseconds; `0` disables animation.
    pub tooltip_animation_duration: u32,
}

/// One series value at the hovered label, as reported by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipPayloadItem {
    pub data_key: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub value: Value,
}

impl TooltipPayloadItem {
    #[must_use]
    pub fn new(data_key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            data_key: data_key.into(),
            name: None,
            color: None,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRow {
    pub data_key: String,
    pub name: String,
    pub color: Option<String>,
    pub value: String,
}

/// Rendered tooltip body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipView {
    pub class_name: String,
    pub label: String,
    pub rows: Vec<TooltipRow>,
}

/// Content callback attached to the tooltip primitive.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipContent {
    pub class_name: String,
    pub formatter: LabelFormatter,
}

impl TooltipContent {
    /// Renders the hovered label and its values. An empty payload means there
    /// is no hover target and renders nothing.
    #[must_use]
    pub fn render(
        &self,
        label: Option<&Value>,
        payload: &[TooltipPayloadItem],
    ) -> Option<TooltipView> {
        if payload.is_empty() {
            return None;
        }
        let rows = payload
            .iter()
            .map(|item| TooltipRow {
                data_key: item.data_key.clone(),
                name: item.name.clone().unwrap_or_else(|| item.data_key.clone()),
                color: item.color.clone(),
                value: self.formatter.format_value(&item.value),
            })
            .collect();
        Some(TooltipView {
            class_name: self.class_name.clone(),
            label: label.map(raw_label).unwrap_or_default(),
            rows,
        })
    }
}

/// Tooltip primitive props plus its content callback.
#[derive(Debug, Clone, Serialize)]
pub struct TooltipElement {
    pub props: Props,
    pub content: TooltipContent,
}

pub struct TooltipComposer<'a> {
    options: &'a TooltipOptions,
    label_formatter: LabelFormatter,
    theme: &'a ChartTheme,
}

impl<'a> TooltipComposer<'a> {
    #[must_use]
    pub fn new(
        options: &'a TooltipOptions,
        label_formatter: LabelFormatter,
        theme: &'a ChartTheme,
    ) -> Self {
        Self {
            options,
            label_formatter,
            theme,
        }
    }

    #[must_use]
    pub fn tooltip_props(&self) -> Props {
        let duration = self.options.tooltip_animation_duration;
        let computed = Props::new()
            .with("isAnimationActive", duration > 0)
            .with("animationDuration", duration)
            .with("filterNull", true);
        merge_props(&[&self.theme.tooltip, &computed, &self.options.tooltip_props])
    }

    #[must_use]
    pub fn content(&self, class_name: Option<&str>) -> TooltipContent {
        TooltipContent {
            class_name: join_class_names([Some(TOOLTIP_CLASS_NAME), class_name])
                .unwrap_or_default(),
            formatter: self.label_formatter.clone(),
        }
    }

    #[must_use]
    pub fn element(&self, class_name: Option<&str>) -> TooltipElement {
        TooltipElement {
            props: self.tooltip_props(),
            content: self.content(class_name),
        }
    }

    /// Variables consumed by the tooltip's transition styles.
    #[must_use]
    pub fn style_variables(&self) -> Vec<StyleVar> {
        vec![StyleVar::new(
            "tooltip-animation-duration",
            format!("{}ms", self.options.tooltip_animation_duration),
        )]
    }
}
