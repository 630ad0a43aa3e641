//! Dashboard State
//!
//! Reactive state management using Leptos signals. Holds the frozen
//! diet-type cache, the four widget slots, and the filter controls.

use leptos::*;

use crate::state::filter::DashboardUpdate;

/// Dashboard state provided to all components
///
/// The widget slots hold the last dataset each renderer drew. A slot is
/// only ever replaced, never cleared, so a refresh that carries no dataset
/// for a widget leaves the previous rendering on screen.
#[derive(Clone)]
pub struct DashboardState {
    /// Diet types frozen from the first successful payload's bar labels
    pub diet_types: RwSignal<Vec<String>>,
    /// Bar widget slot (average macronutrients per diet type)
    pub bar: RwSignal<Option<CategorySeries>>,
    /// Pie widget slot (recipe counts per diet type)
    pub pie: RwSignal<Option<CategorySeries>>,
    /// Scatter widget slot, never filtered
    pub scatter: RwSignal<Option<Vec<ScatterGroup>>>,
    /// Heatmap widget slot, never filtered
    pub heatmap: RwSignal<Option<HeatmapMatrix>>,
    /// Free-text diet filter; takes precedence over the dropdown
    pub filter_text: RwSignal<String>,
    /// Dropdown selection; "all" means no filtering
    pub filter_select: RwSignal<String>,
    /// True while a refresh is in flight
    pub loading: RwSignal<bool>,
    /// Timestamp of the last successful refresh
    pub last_updated: RwSignal<Option<i64>>,
}

/// One labelled, index-aligned series of category values
///
/// Backs both the bar and the pie dataset. `labels[i]` pairs with
/// `values[i]`; order is meaningful and preserved by filtering.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A single (carbs, protein) measurement in grams
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// One scatter series: all recipes of a single diet type
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ScatterGroup {
    pub label: String,
    pub points: Vec<ScatterPoint>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Correlation-style matrix; `values` is row-major, sized to `labels`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct HeatmapMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// The full response from the analytics endpoint
///
/// Every dataset is optional. Presence is the only validation: a widget
/// whose dataset is missing keeps its previous rendering.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct AnalyticsPayload {
    #[serde(default)]
    pub bar: Option<CategorySeries>,
    #[serde(default)]
    pub pie: Option<CategorySeries>,
    #[serde(default)]
    pub scatter: Option<Vec<ScatterGroup>>,
    #[serde(default)]
    pub heatmap: Option<HeatmapMatrix>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        diet_types: create_rw_signal(Vec::new()),
        bar: create_rw_signal(None),
        pie: create_rw_signal(None),
        scatter: create_rw_signal(None),
        heatmap: create_rw_signal(None),
        filter_text: create_rw_signal(String::new()),
        filter_select: create_rw_signal("all".to_string()),
        loading: create_rw_signal(false),
        last_updated: create_rw_signal(None),
    };

    provide_context(state);
}

impl DashboardState {
    /// Freeze the diet-type cache from a payload's bar labels
    ///
    /// One-shot per session: once the cache is non-empty it never changes,
    /// even if a later payload carries different labels.
    pub fn freeze_diet_types(&self, payload: &AnalyticsPayload) {
        let labels = payload
            .bar
            .as_ref()
            .map(|series| series.labels.as_slice())
            .unwrap_or(&[]);

        if let Some(frozen) = next_diet_cache(&self.diet_types.get(), labels) {
            self.diet_types.set(frozen);
        }
    }

    /// Replace exactly the widget slots the update carries a dataset for
    pub fn apply_update(&self, update: DashboardUpdate) {
        if let Some(bar) = update.bar {
            self.bar.set(Some(bar));
        }
        if let Some(pie) = update.pie {
            self.pie.set(Some(pie));
        }
        if let Some(scatter) = update.scatter {
            self.scatter.set(Some(scatter));
        }
        if let Some(heatmap) = update.heatmap {
            self.heatmap.set(Some(heatmap));
        }
    }
}

/// Next value of the diet-type cache, if it should change
///
/// Populates only while the cache is empty and the incoming labels are not;
/// returns `None` when the cache must stay as it is.
fn next_diet_cache(current: &[String], incoming: &[String]) -> Option<Vec<String>> {
    if current.is_empty() && !incoming.is_empty() {
        Some(incoming.to_vec())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_cache_populates_once() {
        let first = next_diet_cache(&[], &["Vegan".to_string(), "Keto".to_string()]);
        assert_eq!(first, Some(vec!["Vegan".to_string(), "Keto".to_string()]));

        let frozen = vec!["Vegan".to_string(), "Keto".to_string()];
        let second = next_diet_cache(&frozen, &["Paleo".to_string()]);
        assert_eq!(second, None);
    }

    #[test]
    fn test_empty_labels_do_not_consume_the_one_shot() {
        assert_eq!(next_diet_cache(&[], &[]), None);

        let later = next_diet_cache(&[], &["Keto".to_string()]);
        assert_eq!(later, Some(vec!["Keto".to_string()]));
    }

    #[test]
    fn test_payload_datasets_default_to_absent() {
        let payload: AnalyticsPayload = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(payload.bar.is_none());
        assert!(payload.pie.is_none());
        assert!(payload.scatter.is_none());
        assert!(payload.heatmap.is_none());
        assert_eq!(payload.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_scatter_group_color_is_optional() {
        let group: ScatterGroup =
            serde_json::from_str(r#"{"label": "Keto", "points": [{"x": 1.0, "y": 2.0}]}"#).unwrap();
        assert_eq!(group.color, None);
        assert_eq!(group.points, vec![ScatterPoint { x: 1.0, y: 2.0 }]);
    }
}
