//! Bar Chart Component
//!
//! Average macronutrients per diet type, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{CategorySeries, DashboardState};

/// Series label shown in the legend
const SERIES_LABEL: &str = "Average Macronutrients";

/// Bar fill color
const BAR_COLOR: &str = "rgba(54, 162, 235, 0.6)";

/// Bar chart component
#[component]
pub fn BarChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the slot is replaced; an untouched slot keeps the
    // previous rendering
    create_effect(move |_| {
        let series = state.bar.get();

        if let (Some(canvas), Some(series)) = (canvas_ref.get(), series) {
            draw_bars(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Draw the bar series on canvas
fn draw_bars(canvas: &HtmlCanvasElement, series: &CategorySeries) {
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
    let margin_top = 30.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#1f2937"); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Legend
    ctx.set_fill_style_str(BAR_COLOR);
    ctx.fill_rect(margin_left, 8.0, 12.0, 12.0);
    ctx.set_fill_style_str("#d1d5db"); // gray-300
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(SERIES_LABEL, margin_left + 18.0, 18.0);

    let count = series.labels.len().min(series.values.len());

    // Y-axis from zero, with headroom above the tallest bar
    let max_value = series.values.iter().take(count).fold(0.0f64, |acc, v| acc.max(*v));
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    // Horizontal grid lines (5 lines)
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style_str("#374151"); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style_str("#9ca3af"); // gray-400
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    if count == 0 {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No matching diet types", width / 2.0 - 80.0, height / 2.0);
        return;
    }

    // One slot per category, bars at 60% slot width
    let slot = chart_width / count as f64;
    let bar_width = slot * 0.6;

    for (i, (label, value)) in series.labels.iter().zip(series.values.iter()).enumerate() {
        let x = margin_left + i as f64 * slot;
        let bar_height = (value / y_max).max(0.0) * chart_height;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style_str(BAR_COLOR);
        ctx.fill_rect(x + (slot - bar_width) / 2.0, y, bar_width, bar_height);

        // Category label under the bar
        ctx.set_fill_style_str("#9ca3af");
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(label, x + slot / 2.0 - 15.0, height - 12.0);
    }
}
