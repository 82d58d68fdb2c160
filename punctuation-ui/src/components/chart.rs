//! Chart Component
//!
//! Bar chart of the punctuation distribution using HTML5 Canvas.

use leptos::*;
use std::f64::consts::FRAC_PI_4;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use punctuation_analyzer::analysis::ChartConfig;

use crate::state::global::GlobalState;

const TEXT_COLOR: &str = "#FFFFFF";
const GRID_COLOR: &str = "#374151"; // gray-700
const BACKGROUND: &str = "#1f2937"; // gray-800

/// Number of horizontal grid intervals on the count axis
const Y_TICKS: u64 = 5;

/// Distribution bar chart
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the results change
    create_effect(move |_| {
        let config = state.chart_config();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &config);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="480"
                class="w-full rounded-lg"
            />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins; the legend sits in the right margin
    let margin_left = 70.0;
    let margin_right = 170.0;
    let margin_top = 50.0;
    let margin_bottom = 130.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_font("bold 22px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&config.title, width / 2.0, 30.0);

    let Some(dataset) = config.datasets.first() else {
        return;
    };

    // Horizontal grid lines and count labels. A zero bound collapses the
    // axis to a single line at 0.
    let y_max = config.y_axis_max as f64;
    let ticks = if config.y_axis_max == 0 { 0 } else { Y_TICKS };
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    for i in 0..=ticks {
        let fraction = if ticks == 0 { 0.0 } else { i as f64 / ticks as f64 };
        let y = margin_top + chart_height - fraction * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(margin_left + chart_width, y);
        ctx.stroke();

        ctx.set_fill_style(&TEXT_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", fraction * y_max), margin_left - 8.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / dataset.data.len().max(1) as f64;
    let bar_width = slot * 0.8;
    for (idx, value) in dataset.data.iter().enumerate() {
        let bar_height = if y_max > 0.0 {
            (*value as f64 / y_max) * chart_height
        } else {
            0.0
        };
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        if let Some(color) = dataset.background_colors.get(idx) {
            ctx.set_fill_style(&color.as_str().into());
        }
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_stroke_style(&TEXT_COLOR.into());
        ctx.set_line_width(dataset.border_width as f64);
        ctx.stroke_rect(x, y, bar_width, bar_height);
    }

    // Category labels, slanted under each bar
    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("right");
    for (idx, label) in config.labels.iter().enumerate() {
        let x = margin_left + idx as f64 * slot + slot / 2.0;
        let y = margin_top + chart_height + 10.0;
        ctx.save();
        let _ = ctx.translate(x, y);
        let _ = ctx.rotate(-FRAC_PI_4);
        let _ = ctx.fill_text(label, 0.0, 0.0);
        ctx.restore();
    }

    // Axis titles
    ctx.set_font("14px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(
        &config.x_axis_title,
        margin_left + chart_width / 2.0,
        height - 10.0,
    );
    ctx.save();
    let _ = ctx.translate(18.0, margin_top + chart_height / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    let _ = ctx.fill_text(&config.y_axis_title, 0.0, 0.0);
    ctx.restore();

    // Legend
    let legend_x = margin_left + chart_width + 20.0;
    let legend_y = margin_top + 10.0;
    if let Some(color) = dataset.background_colors.first() {
        ctx.set_fill_style(&color.as_str().into());
        ctx.begin_path();
        let _ = ctx.arc(legend_x + 5.0, legend_y, 5.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("left");
    let _ = ctx.fill_text(&dataset.label, legend_x + 16.0, legend_y + 4.0);
}
