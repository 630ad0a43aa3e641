//! Filter Engine
//!
//! Pure functions that narrow the bar and pie datasets to a single diet
//! type. Scatter and heatmap are never filtered.

use crate::state::global::{AnalyticsPayload, CategorySeries, HeatmapMatrix, ScatterGroup};

/// Dropdown sentinel meaning "no filtering"
pub const ALL_DIET_TYPES: &str = "all";

/// Derive the effective diet type from the two filter controls
///
/// The free-text box wins when non-empty (trimmed, lowercased); otherwise
/// the dropdown value (lowercased); otherwise `"all"`.
pub fn effective_diet_type(input: &str, select: &str) -> String {
    let typed = input.trim().to_lowercase();
    if !typed.is_empty() {
        return typed;
    }

    let selected = select.to_lowercase();
    if selected.is_empty() {
        ALL_DIET_TYPES.to_string()
    } else {
        selected
    }
}

/// Keep only the (label, value) pairs whose label matches `diet`
/// case-insensitively
///
/// `"all"` passes the series through unchanged. Expects `diet` already
/// lowercased (see [`effective_diet_type`]). Zero matches yield an empty
/// series; the renderers tolerate that.
pub fn filter_series(series: &CategorySeries, diet: &str) -> CategorySeries {
    if diet == ALL_DIET_TYPES {
        return series.clone();
    }

    let (labels, values): (Vec<String>, Vec<f64>) = series
        .labels
        .iter()
        .zip(series.values.iter())
        .filter(|(label, _)| label.to_lowercase() == diet)
        .map(|(label, value)| (label.clone(), *value))
        .unzip();

    CategorySeries { labels, values }
}

/// Datasets destined for the widget slots after one refresh
///
/// `None` means the payload carried no dataset for that widget and its
/// slot must be left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardUpdate {
    pub bar: Option<CategorySeries>,
    pub pie: Option<CategorySeries>,
    pub scatter: Option<Vec<ScatterGroup>>,
    pub heatmap: Option<HeatmapMatrix>,
}

/// Build the slot updates for one refresh: bar and pie filtered by the
/// effective diet type, scatter and heatmap passed through
pub fn prepare_update(payload: &AnalyticsPayload, diet: &str) -> DashboardUpdate {
    DashboardUpdate {
        bar: payload.bar.as_ref().map(|series| filter_series(series, diet)),
        pie: payload.pie.as_ref().map(|series| filter_series(series, diet)),
        scatter: payload.scatter.clone(),
        heatmap: payload.heatmap.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, f64)]) -> CategorySeries {
        CategorySeries {
            labels: pairs.iter().map(|(label, _)| label.to_string()).collect(),
            values: pairs.iter().map(|(_, value)| *value).collect(),
        }
    }

    #[test]
    fn test_text_input_wins_over_dropdown() {
        assert_eq!(effective_diet_type("  Keto  ", "vegan"), "keto");
    }

    #[test]
    fn test_dropdown_applies_when_input_empty() {
        assert_eq!(effective_diet_type("   ", "Vegan"), "vegan");
    }

    #[test]
    fn test_defaults_to_all() {
        assert_eq!(effective_diet_type("", ""), "all");
    }

    #[test]
    fn test_filter_all_is_identity() {
        let input = series(&[("Vegan", 10.0), ("Keto", 20.0), ("Paleo", 15.0)]);
        assert_eq!(filter_series(&input, "all"), input);
    }

    #[test]
    fn test_filter_keeps_exact_matches_case_insensitively() {
        let input = series(&[("Vegan", 10.0), ("Keto", 20.0), ("veganish", 5.0)]);
        let filtered = filter_series(&input, "vegan");
        assert_eq!(filtered, series(&[("Vegan", 10.0)]));
    }

    #[test]
    fn test_filter_absent_type_yields_empty_series() {
        let input = series(&[("Vegan", 10.0)]);
        let filtered = filter_series(&input, "keto");
        assert!(filtered.labels.is_empty());
        assert!(filtered.values.is_empty());
    }

    #[test]
    fn test_keto_example_filters_bar_and_pie() {
        let payload: AnalyticsPayload = serde_json::from_str(
            r#"{
                "bar": {"labels": ["Vegan", "Keto"], "values": [10, 20]},
                "pie": {"labels": ["Vegan", "Keto"], "values": [3, 7]}
            }"#,
        )
        .unwrap();

        let update = prepare_update(&payload, "keto");
        assert_eq!(update.bar, Some(series(&[("Keto", 20.0)])));
        assert_eq!(update.pie, Some(series(&[("Keto", 7.0)])));
        assert_eq!(update.scatter, None);
        assert_eq!(update.heatmap, None);
    }

    #[test]
    fn test_scatter_and_heatmap_pass_through_unfiltered() {
        let payload: AnalyticsPayload = serde_json::from_str(
            r#"{
                "scatter": [{"label": "Keto", "points": [{"x": 12.0, "y": 30.0}]}],
                "heatmap": {"labels": ["Calories"], "values": [[1.0]]}
            }"#,
        )
        .unwrap();

        let update = prepare_update(&payload, "vegan");
        assert_eq!(update.scatter, payload.scatter);
        assert_eq!(update.heatmap, payload.heatmap);
        assert_eq!(update.bar, None);
        assert_eq!(update.pie, None);
    }
}
