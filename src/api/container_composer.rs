use crate::render::{Props, class_layer, merge_props};

pub const CONTAINER_CLASS_NAME: &str = "ui-line-chart__container";

/// Sizing wrapper props; independent of every other composer.
pub struct ContainerComposer<'a> {
    container_props: &'a Props,
}

impl<'a> ContainerComposer<'a> {
    #[must_use]
    pub fn new(container_props: &'a Props) -> Self {
        Self { container_props }
    }

    #[must_use]
    pub fn container_props(&self, class_name: Option<&str>) -> Props {
        let computed = Props::new()
            .with("className", CONTAINER_CLASS_NAME)
            .with("width", "100%")
            .with("height", "100%");
        merge_props(&[&computed, self.container_props, &class_layer(class_name)])
    }
}
