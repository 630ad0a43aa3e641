//! Heatmap Component
//!
//! Correlation-style matrix rendered as a shaded HTML table. Each cell's
//! value drives the opacity of its background.

use leptos::*;

use crate::state::global::{DashboardState, HeatmapMatrix};

/// Cell text, always two decimal places
fn cell_text(value: f64) -> String {
    format!("{:.2}", value)
}

/// Background alpha for a cell: the raw value clamped to [0, 1]
///
/// NaN shades as fully transparent rather than producing broken CSS.
fn cell_alpha(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Inline background style for a cell
fn cell_style(value: f64) -> String {
    format!("background-color: rgba(54, 162, 235, {})", cell_alpha(value))
}

/// Heatmap component
#[component]
pub fn Heatmap() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="overflow-x-auto">
            {move || {
                match state.heatmap.get() {
                    Some(matrix) => view! { <HeatmapTable matrix=matrix /> }.into_view(),
                    None => view! {
                        <p class="text-gray-400 text-sm">"No data yet"</p>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// The table itself: one header row of labels, then one row per label
///
/// Rows and columns are paired by index with the label list; extra rows or
/// values are dropped rather than rejected.
#[component]
fn HeatmapTable(matrix: HeatmapMatrix) -> impl IntoView {
    let header = matrix.labels.clone();
    let rows: Vec<(String, Vec<f64>)> = matrix
        .labels
        .iter()
        .cloned()
        .zip(matrix.values.iter().cloned())
        .collect();

    view! {
        <table class="w-full border border-gray-600 text-sm">
            <tr>
                <th class="border border-gray-600 px-2 py-1"></th>
                {header.into_iter()
                    .map(|label| view! {
                        <th class="border border-gray-600 px-2 py-1 text-gray-300">{label}</th>
                    })
                    .collect_view()}
            </tr>

            {rows.into_iter()
                .map(|(label, values)| view! {
                    <tr>
                        <th class="border border-gray-600 px-2 py-1 text-gray-300">{label}</th>
                        {values.into_iter()
                            .map(|value| view! {
                                <td
                                    class="border border-gray-600 px-2 py-1 text-center"
                                    style=cell_style(value)
                                >
                                    {cell_text(value)}
                                </td>
                            })
                            .collect_view()}
                    </tr>
                })
                .collect_view()}
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_always_two_decimals() {
        assert_eq!(cell_text(0.5), "0.50");
        assert_eq!(cell_text(0.123_456), "0.12");
        assert_eq!(cell_text(1.0), "1.00");
        assert_eq!(cell_text(-0.25), "-0.25");
    }

    #[test]
    fn test_cell_alpha_clamps_out_of_range_values() {
        assert_eq!(cell_alpha(0.42), 0.42);
        assert_eq!(cell_alpha(-3.0), 0.0);
        assert_eq!(cell_alpha(7.5), 1.0);
        assert_eq!(cell_alpha(f64::NAN), 0.0);
    }

    #[test]
    fn test_cell_style_embeds_clamped_alpha() {
        assert_eq!(cell_style(2.0), "background-color: rgba(54, 162, 235, 1)");
        assert_eq!(cell_style(0.5), "background-color: rgba(54, 162, 235, 0.5)");
    }
}
