//! Scatter Plot Component
//!
//! Protein vs carbs per recipe, one series per diet type, drawn on HTML5
//! Canvas. Shows every group regardless of the active diet filter.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{DashboardState, ScatterGroup};

/// Fallback point color for groups that carry none
const DEFAULT_POINT_COLOR: &str = "rgba(255, 99, 132, 0.6)";

/// Axis titles
const X_AXIS_TITLE: &str = "Carbs(g)";
const Y_AXIS_TITLE: &str = "Protein(g)";

/// Point color for a group
fn group_color(group: &ScatterGroup) -> &str {
    group.color.as_deref().unwrap_or(DEFAULT_POINT_COLOR)
}

/// Bounding box of all finite points: ((x_min, x_max), (y_min, y_max))
fn data_extent(groups: &[ScatterGroup]) -> Option<((f64, f64), (f64, f64))> {
    let mut extent: Option<((f64, f64), (f64, f64))> = None;

    for point in groups.iter().flat_map(|group| group.points.iter()) {
        if !(point.x.is_finite() && point.y.is_finite()) {
            continue;
        }

        extent = Some(match extent {
            None => ((point.x, point.x), (point.y, point.y)),
            Some(((x_min, x_max), (y_min, y_max))) => (
                (x_min.min(point.x), x_max.max(point.x)),
                (y_min.min(point.y), y_max.max(point.y)),
            ),
        });
    }

    extent
}

/// Pad a range by 10%, or by 1.0 when it is degenerate
fn padded(min: f64, max: f64) -> (f64, f64) {
    let range = max - min;
    let pad = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - pad, max + pad)
}

/// Scatter plot component
#[component]
pub fn ScatterPlot() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the slot is replaced; an untouched slot keeps the
    // previous rendering
    create_effect(move |_| {
        let groups = state.scatter.get();

        if let (Some(canvas), Some(groups)) = (canvas_ref.get(), groups) {
            draw_points(&canvas, &groups);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-80 rounded-lg"
            />

            // Legend
            <ScatterLegend />
        </div>
    }
}

/// Legend naming each diet-type series
#[component]
fn ScatterLegend() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                state.scatter.get()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|group| {
                        let color = group_color(&group).to_string();
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{group.label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Draw every group's points on canvas
fn draw_points(canvas: &HtmlCanvasElement, groups: &[ScatterGroup]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#1f2937"); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Axis titles
    ctx.set_fill_style_str("#9ca3af"); // gray-400
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(Y_AXIS_TITLE, 5.0, 14.0);
    let _ = ctx.fill_text(X_AXIS_TITLE, margin_left + chart_width / 2.0 - 25.0, height - 8.0);

    let ((x_lo, x_hi), (y_lo, y_hi)) = match data_extent(groups) {
        Some(extent) => extent,
        None => {
            ctx.set_fill_style_str("#6b7280");
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No data points", width / 2.0 - 60.0, height / 2.0);
            return;
        }
    };

    let (x_min, x_max) = padded(x_lo, x_hi);
    let (y_min, y_max) = padded(y_lo, y_hi);

    // Grid lines (5 divisions each way) with value labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let frac = i as f64 / 5.0;

        let y = margin_top + frac * chart_height;
        ctx.set_stroke_style_str("#374151"); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let x = margin_left + frac * chart_width;
        ctx.begin_path();
        ctx.move_to(x, margin_top);
        ctx.line_to(x, margin_top + chart_height);
        ctx.stroke();

        ctx.set_fill_style_str("#9ca3af");
        ctx.set_font("12px sans-serif");

        let y_value = y_max - frac * (y_max - y_min);
        let _ = ctx.fill_text(&format!("{:.0}", y_value), 5.0, y + 4.0);

        let x_value = x_min + frac * (x_max - x_min);
        let _ = ctx.fill_text(&format!("{:.0}", x_value), x - 8.0, margin_top + chart_height + 16.0);
    }

    // Points, one color per group
    for group in groups {
        ctx.set_fill_style_str(group_color(group));

        for point in &group.points {
            if !(point.x.is_finite() && point.y.is_finite()) {
                continue;
            }

            let x = margin_left + ((point.x - x_min) / (x_max - x_min)) * chart_width;
            let y = margin_top + ((y_max - point.y) / (y_max - y_min)) * chart_height;

            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::ScatterPoint;

    fn group(color: Option<&str>, points: &[(f64, f64)]) -> ScatterGroup {
        ScatterGroup {
            label: "Keto".to_string(),
            points: points.iter().map(|&(x, y)| ScatterPoint { x, y }).collect(),
            color: color.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_missing_group_color_falls_back_to_default() {
        assert_eq!(group_color(&group(None, &[])), DEFAULT_POINT_COLOR);
        assert_eq!(group_color(&group(Some("#123456"), &[])), "#123456");
    }

    #[test]
    fn test_extent_spans_all_groups() {
        let groups = vec![
            group(None, &[(1.0, 10.0), (5.0, 2.0)]),
            group(None, &[(3.0, 40.0)]),
        ];
        assert_eq!(data_extent(&groups), Some(((1.0, 5.0), (2.0, 40.0))));
    }

    #[test]
    fn test_extent_of_no_points_is_none() {
        assert_eq!(data_extent(&[]), None);
        assert_eq!(data_extent(&[group(None, &[])]), None);
    }

    #[test]
    fn test_extent_skips_non_finite_points() {
        let groups = vec![group(None, &[(1.0, 2.0), (f64::NAN, 3.0), (4.0, f64::INFINITY)])];
        assert_eq!(data_extent(&groups), Some(((1.0, 1.0), (2.0, 2.0))));
    }

    #[test]
    fn test_padded_handles_degenerate_ranges() {
        assert_eq!(padded(2.0, 2.0), (1.0, 3.0));
        assert_eq!(padded(0.0, 10.0), (-1.0, 11.0));
    }
}
