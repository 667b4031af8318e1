use linechart_compose::api::{
    AxisComposer, AxisOptions, AxisSide, DEFAULT_GRID_DASHARRAY, GridComposer, GridOptions,
    X_AXIS_CLASS_NAME,
};
use linechart_compose::core::{AxisSelector, AxisType, LabelFormatter, LayoutType, ValueFormatter};
use linechart_compose::render::{ChartTheme, Props};
use serde_json::json;

fn options() -> AxisOptions {
    AxisOptions {
        data_key: Some("month".to_owned()),
        ..AxisOptions::default()
    }
}

#[test]
fn horizontal_layout_puts_categories_on_x() {
    let options = options();
    let theme = ChartTheme::default();
    let axes = AxisComposer::new(
        &options,
        LayoutType::Horizontal,
        AxisSelector::X,
        LabelFormatter::default(),
        &theme,
    );
    let x = axes.x_axis_props(None);
    let y = axes.y_axis_props(None);

    assert_eq!(x.side, AxisSide::X);
    assert_eq!(x.props.get_str("dataKey"), Some("month"));
    assert_eq!(x.props.get_str("type"), Some("category"));
    assert_eq!(x.props.class_name(), Some(X_AXIS_CLASS_NAME));
    assert!(!x.is_value_axis());

    assert!(y.is_value_axis());
    assert_eq!(y.props.get_str("type"), Some("number"));
    assert!(!y.props.contains_key("dataKey"));
}

#[test]
fn vertical_layout_swaps_axes() {
    let options = AxisOptions {
        axis_type: AxisType::Category,
        ..options()
    };
    let theme = ChartTheme::default();
    let axes = AxisComposer::new(
        &options,
        LayoutType::Vertical,
        AxisSelector::X,
        LabelFormatter::default(),
        &theme,
    );

    assert!(axes.x_axis_props(None).is_value_axis());
    assert_eq!(axes.y_axis_props(None).props.get_str("dataKey"), Some("month"));
}

#[test]
fn hidden_axes_are_still_emitted() {
    let options = AxisOptions {
        with_x_axis: false,
        ..options()
    };
    let theme = ChartTheme::default();
    let axes = AxisComposer::new(
        &options,
        LayoutType::Horizontal,
        AxisSelector::X,
        LabelFormatter::default(),
        &theme,
    );
    let x = axes.x_axis_props(None);

    assert!(x.is_hidden());
    assert_eq!(x.props.get_str("dataKey"), Some("month"));
    assert!(!axes.y_axis_props(None).is_hidden());
}

#[test]
fn tick_lines_follow_selector() {
    let options = AxisOptions {
        tick_line: AxisSelector::Y,
        ..options()
    };
    let theme = ChartTheme::default();
    let axes = AxisComposer::new(
        &options,
        LayoutType::Horizontal,
        AxisSelector::None,
        LabelFormatter::default(),
        &theme,
    );

    assert_eq!(axes.x_axis_props(None).props.get_bool("tickLine"), Some(false));
    assert_eq!(
        axes.y_axis_props(None).props.get("tickLine"),
        Some(&json!({"stroke": "currentColor"}))
    );
    assert_eq!(axes.x_axis_props(None).props.get_bool("axisLine"), Some(true));
}

#[test]
fn grid_parallel_axis_drops_its_axis_line() {
    let options = options();
    let theme = ChartTheme::default();
    let axes = AxisComposer::new(
        &options,
        LayoutType::Horizontal,
        AxisSelector::X,
        LabelFormatter::default(),
        &theme,
    );

    assert_eq!(axes.x_axis_props(None).props.get_bool("axisLine"), Some(false));
    assert_eq!(axes.y_axis_props(None).props.get_bool("axisLine"), Some(true));
}

#[test]
fn value_ticks_are_formatted_with_unit() {
    let options = options();
    let theme = ChartTheme::default();
    let formatter = LabelFormatter::new(
        Some(ValueFormatter::new(|v| format!("{:.2}", v / 1000.0))),
        Some("k".to_owned()),
    );
    let axes = AxisComposer::new(
        &options,
        LayoutType::Horizontal,
        AxisSelector::X,
        formatter,
        &theme,
    );

    assert_eq!(axes.y_axis_props(None).format_tick(&json!(1500)), "1.50k");
    assert_eq!(axes.x_axis_props(None).format_tick(&json!("Jan")), "Jan");
}

#[test]
fn raw_axis_overrides_win_over_computed() {
    let options = AxisOptions {
        x_axis_props: Props::new().with("minTickGap", 20).with("hide", true),
        ..options()
    };
    let theme = ChartTheme::default();
    let axes = AxisComposer::new(
        &options,
        LayoutType::Horizontal,
        AxisSelector::X,
        LabelFormatter::default(),
        &theme,
    );
    let x = axes.x_axis_props(Some("custom"));

    assert_eq!(x.props.get_f64("minTickGap"), Some(20.0));
    assert!(x.is_hidden());
    assert_eq!(x.props.get("tick"), theme.axis.get("tick"));
    assert_eq!(
        x.props.class_name(),
        Some(format!("{X_AXIS_CLASS_NAME} custom").as_str())
    );
}

#[test]
fn grid_defaults_draw_horizontal_dashed_lines() {
    let options = GridOptions::default();
    let theme = ChartTheme::default();
    let grid = GridComposer::new(&options, &theme).grid_props(None);

    assert_eq!(grid.get_str("strokeDasharray"), Some(DEFAULT_GRID_DASHARRAY));
    assert_eq!(grid.get_bool("horizontal"), Some(true));
    assert_eq!(grid.get_bool("vertical"), Some(false));
    assert_eq!(grid.get_str("stroke"), Some("#dee2e6"));
}

#[test]
fn grid_dasharray_is_passed_through_verbatim() {
    let options = GridOptions {
        grid_axis: AxisSelector::Xy,
        stroke_dasharray: "not a pattern".to_owned(),
        grid_props: Props::new().with("stroke", "black"),
    };
    let theme = ChartTheme::default();
    let grid = GridComposer::new(&options, &theme).grid_props(None);

    assert_eq!(grid.get_str("strokeDasharray"), Some("not a pattern"));
    assert_eq!(grid.get_bool("vertical"), Some(true));
    assert_eq!(grid.get_str("stroke"), Some("black"));
}

#[test]
fn grid_none_hides_all_lines() {
    let options = GridOptions {
        grid_axis: AxisSelector::None,
        ..GridOptions::default()
    };
    let theme = ChartTheme::default();
    let grid = GridComposer::new(&options, &theme).grid_props(None);

    assert_eq!(grid.get_bool("horizontal"), Some(false));
    assert_eq!(grid.get_bool("vertical"), Some(false));
}
