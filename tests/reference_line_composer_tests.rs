use linechart_compose::api::{REFERENCE_LINE_CLASS_NAME, ReferenceLineComposer, reference_line_key};
use linechart_compose::core::{LayoutType, ReferenceLineDef};
use linechart_compose::render::{ChartTheme, Props};
use serde_json::json;

#[test]
fn keys_are_positional_even_for_equal_values() {
    let lines = vec![ReferenceLineDef::new(50.0), ReferenceLineDef::new(50.0)];
    let theme = ChartTheme::default();
    let composer = ReferenceLineComposer::new(&lines, LayoutType::Horizontal, &theme);

    assert_eq!(composer.len(), 2);
    let keys: Vec<String> = composer.bundles(None).into_iter().map(|line| line.key).collect();
    assert_eq!(keys, vec!["referenceLine-0", "referenceLine-1"]);
}

#[test]
fn identity_survives_value_changes() {
    let theme = ChartTheme::default();
    let first = vec![ReferenceLineDef::new(1.0), ReferenceLineDef::new(2.0)];
    let second = vec![ReferenceLineDef::new(9.0), ReferenceLineDef::new(-4.0)];

    let first_keys: Vec<String> = ReferenceLineComposer::new(&first, LayoutType::Horizontal, &theme)
        .bundles(None)
        .into_iter()
        .map(|line| line.key)
        .collect();
    let second_keys: Vec<String> =
        ReferenceLineComposer::new(&second, LayoutType::Horizontal, &theme)
            .bundles(None)
            .into_iter()
            .map(|line| line.key)
            .collect();

    assert_eq!(first_keys, second_keys);
    assert_eq!(reference_line_key(1), "referenceLine-1");
}

#[test]
fn reordering_changes_content_under_a_key() {
    let theme = ChartTheme::default();
    let ordered = vec![ReferenceLineDef::new(1.0), ReferenceLineDef::new(2.0)];
    let reversed = vec![ReferenceLineDef::new(2.0), ReferenceLineDef::new(1.0)];

    let a = ReferenceLineComposer::new(&ordered, LayoutType::Horizontal, &theme)
        .reference_line_props(0, None)
        .expect("line");
    let b = ReferenceLineComposer::new(&reversed, LayoutType::Horizontal, &theme)
        .reference_line_props(0, None)
        .expect("line");

    assert_eq!(a.key, b.key);
    assert_ne!(a.props, b.props);
}

#[test]
fn value_lands_on_value_axis() {
    let lines = vec![ReferenceLineDef::new(42.0)];
    let theme = ChartTheme::default();

    let horizontal = ReferenceLineComposer::new(&lines, LayoutType::Horizontal, &theme)
        .reference_line_props(0, None)
        .expect("line");
    assert_eq!(horizontal.props.get_f64("y"), Some(42.0));
    assert!(!horizontal.props.contains_key("x"));

    let vertical = ReferenceLineComposer::new(&lines, LayoutType::Vertical, &theme)
        .reference_line_props(0, None)
        .expect("line");
    assert_eq!(vertical.props.get_f64("x"), Some(42.0));
}

#[test]
fn label_color_and_overrides() {
    let lines = vec![
        ReferenceLineDef::new(10.0)
            .with_label("Target")
            .with_color("orange")
            .with_stroke_dasharray("2 2")
            .with_props(Props::new().with("strokeWidth", 3)),
    ];
    let theme = ChartTheme::default();
    let line = ReferenceLineComposer::new(&lines, LayoutType::Horizontal, &theme)
        .reference_line_props(0, Some("goal"))
        .expect("line");

    assert_eq!(line.props.get_str("stroke"), Some("orange"));
    assert_eq!(line.props.get_str("strokeDasharray"), Some("2 2"));
    assert_eq!(line.props.get_f64("strokeWidth"), Some(3.0));
    assert_eq!(line.props.get("label").expect("label")["value"], json!("Target"));
    assert_eq!(line.props.get("label").expect("label")["fill"], json!("orange"));
    assert_eq!(
        line.props.class_name(),
        Some(format!("{REFERENCE_LINE_CLASS_NAME} goal").as_str())
    );
}

#[test]
fn theme_stroke_applies_without_explicit_color() {
    let lines = vec![ReferenceLineDef::new(0.0)];
    let theme = ChartTheme::default();
    let line = ReferenceLineComposer::new(&lines, LayoutType::Horizontal, &theme)
        .reference_line_props(0, None)
        .expect("line");

    assert_eq!(line.props.get_str("stroke"), Some("#868e96"));
    assert!(!line.props.contains_key("label"));
}

#[test]
fn out_of_range_index_yields_nothing() {
    let theme = ChartTheme::default();
    let composer = ReferenceLineComposer::new(&[], LayoutType::Horizontal, &theme);
    assert!(composer.is_empty());
    assert!(composer.reference_line_props(0, None).is_none());
}
