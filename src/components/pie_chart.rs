//! Pie Chart Component
//!
//! Recipe counts per diet type, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{CategorySeries, DashboardState};

/// Slice colors, reused cyclically past four slices
const SLICE_COLORS: [&str; 4] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
];

/// Palette color for slice `index`
fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Pie chart component
#[component]
pub fn PieChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the slot is replaced; an untouched slot keeps the
    // previous rendering
    create_effect(move |_| {
        let series = state.pie.get();

        if let (Some(canvas), Some(series)) = (canvas_ref.get(), series) {
            draw_pie(&canvas, &series);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="400"
                class="mx-auto h-64 md:h-80"
            />

            // Legend
            <PieLegend />
        </div>
    }
}

/// Legend naming each slice, in palette order
#[component]
fn PieLegend() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                state.pie.get()
                    .map(|series| series.labels)
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        let color = slice_color(idx);
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Draw the pie on canvas
fn draw_pie(canvas: &HtmlCanvasElement, series: &CategorySeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style_str("#1f2937"); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let count = series.labels.len().min(series.values.len());

    // Slices are proportional to positive, finite values only
    let total: f64 = series
        .values
        .iter()
        .take(count)
        .filter(|v| v.is_finite() && **v > 0.0)
        .sum();

    if total <= 0.0 {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No matching diet types", width / 2.0 - 80.0, height / 2.0);
        return;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = (width.min(height) / 2.0 - 20.0).max(10.0);

    // Slices start at 12 o'clock and run clockwise
    let mut start = -std::f64::consts::FRAC_PI_2;

    for (i, value) in series.values.iter().take(count).enumerate() {
        if !(value.is_finite() && *value > 0.0) {
            continue;
        }

        let sweep = value / total * std::f64::consts::PI * 2.0;
        let end = start + sweep;

        ctx.set_fill_style_str(slice_color(i));
        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, radius, start, end);
        ctx.close_path();
        ctx.fill();

        // Hairline between slices
        ctx.set_stroke_style_str("#1f2937");
        ctx.set_line_width(2.0);
        ctx.stroke();

        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_past_four_slices() {
        assert_eq!(slice_color(0), SLICE_COLORS[0]);
        assert_eq!(slice_color(3), SLICE_COLORS[3]);
        assert_eq!(slice_color(4), SLICE_COLORS[0]);
        assert_eq!(slice_color(9), SLICE_COLORS[1]);
    }
}
