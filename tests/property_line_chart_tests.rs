use std::collections::HashSet;

use linechart_compose::api::{
    ChartSpecification, HighlightState, LineChart, ReferenceLineComposer, next_highlight,
    series_opacity,
};
use linechart_compose::core::{
    LabelFormatter, LayoutType, ReferenceLineDef, SeriesDef, ValueFormatter,
};
use linechart_compose::render::ChartTheme;
use proptest::prelude::*;

fn palette(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("#{i:06x}")).collect()
}

fn series(count: usize) -> Vec<SeriesDef> {
    (0..count).map(|i| SeriesDef::new(format!("s{i}"))).collect()
}

proptest! {
    #[test]
    fn series_colors_are_distinct_when_palette_is_wide_enough(
        count in 1usize..24,
        extra in 0usize..8
    ) {
        let theme = ChartTheme::default().with_palette(palette(count + extra));
        let chart = LineChart::new(ChartSpecification::new(series(count), Vec::new()), theme);
        let lines = chart.line_composer();

        let colors: HashSet<String> = (0..count)
            .map(|i| lines.series_color(i).expect("in range"))
            .collect();
        prop_assert_eq!(colors.len(), count);
    }

    #[test]
    fn palette_cycles_by_series_position(
        palette_len in 1usize..10,
        count in 1usize..40
    ) {
        let colors = palette(palette_len);
        let theme = ChartTheme::default().with_palette(colors.clone());
        let chart = LineChart::new(ChartSpecification::new(series(count), Vec::new()), theme);
        let lines = chart.line_composer();

        for index in 0..count {
            prop_assert_eq!(
                lines.series_color(index).expect("in range"),
                colors[index % palette_len].clone()
            );
        }
    }

    #[test]
    fn setting_the_same_key_twice_is_identity(
        start in proptest::option::of("[a-c]"),
        key in "[a-c]"
    ) {
        let state = HighlightState::new();
        state.set_highlighted_area(start.as_deref());
        let before = state.highlighted_area();

        state.set_highlighted_area(Some(key.as_str()));
        let expected = next_highlight(before.as_deref(), Some(key.as_str()));
        prop_assert_eq!(state.highlighted_area(), expected);
        state.set_highlighted_area(Some(key.as_str()));

        if before.as_deref() == Some(key.as_str()) {
            prop_assert_eq!(state.highlighted_area(), Some(key));
        } else {
            prop_assert_eq!(state.highlighted_area(), None);
        }
    }

    #[test]
    fn opacity_is_full_only_for_highlighted_or_idle(
        highlighted in proptest::option::of("[a-d]"),
        key in "[a-d]",
        dimmed in 0.0f64..1.0
    ) {
        let opacity = series_opacity(highlighted.as_deref(), &key, dimmed);
        match highlighted.as_deref() {
            None => prop_assert_eq!(opacity, 1.0),
            Some(active) if active == key => prop_assert_eq!(opacity, 1.0),
            Some(_) => prop_assert_eq!(opacity, dimmed),
        }
    }

    #[test]
    fn composed_lines_follow_opacity_rule(
        count in 1usize..8,
        pick in 0usize..8
    ) {
        let chart = LineChart::new(
            ChartSpecification::new(series(count), Vec::new()),
            ChartTheme::default(),
        );
        let target = format!("s{}", pick % count);
        chart.set_highlighted_area(Some(target.as_str()));
        let dimmed = chart.theme().effective_dimmed_opacity();

        for line in chart.compose().lines {
            let expected = if line.data_key == target { 1.0 } else { dimmed };
            prop_assert_eq!(line.opacity, expected);
        }
    }

    #[test]
    fn reference_line_keys_depend_only_on_position(
        first in proptest::collection::vec(-1.0e6f64..1.0e6, 0..12),
        second in proptest::collection::vec(-1.0e6f64..1.0e6, 0..12)
    ) {
        let theme = ChartTheme::default();
        let keys = |values: &[f64]| -> Vec<String> {
            let lines: Vec<ReferenceLineDef> =
                values.iter().copied().map(ReferenceLineDef::new).collect();
            ReferenceLineComposer::new(&lines, LayoutType::Horizontal, &theme)
                .bundles(None)
                .into_iter()
                .map(|line| line.key)
                .collect()
        };

        let a = keys(&first);
        let b = keys(&second);
        let shared = a.len().min(b.len());
        prop_assert_eq!(&a[..shared], &b[..shared]);
        prop_assert_eq!(a.len(), first.len());
    }

    #[test]
    fn labels_are_formatter_output_then_unit(
        value in -1.0e9f64..1.0e9,
        unit in "[a-z%]{0,3}"
    ) {
        let formatter = LabelFormatter::new(
            Some(ValueFormatter::new(|v| format!("{v:.1}"))),
            Some(unit.clone()),
        );
        prop_assert_eq!(formatter.format_number(value), format!("{value:.1}{unit}"));

        let bare = LabelFormatter::new(None, Some(unit.clone()));
        prop_assert_eq!(bare.format_number(value), format!("{value}{unit}"));
    }
}
