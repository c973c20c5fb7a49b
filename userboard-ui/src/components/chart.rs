//! Chart Component
//!
//! Line chart using HTML5 Canvas. One x position per user, one line per
//! dataset. Missing points break the line instead of being interpolated.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{ChartData, Dataset};

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Most x-axis labels drawn before thinning them out
const MAX_X_LABELS: usize = 15;

/// Line chart component
#[component]
pub fn Chart(
    /// Labels and series to plot
    #[prop(into)]
    data: Signal<ChartData>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the data changes
    create_effect(move |_| {
        let chart = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &chart);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="1000"
                height="420"
                class="w-full rounded-lg"
            />
            <ChartLegend data=data />
        </div>
    }
}

/// Legend showing one swatch per dataset
#[component]
fn ChartLegend(data: Signal<ChartData>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                data.get()
                    .datasets
                    .into_iter()
                    .map(|dataset| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", dataset.border_color)
                                />
                                <span class="text-sm text-gray-700">{dataset.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Min/max over all present points, padded by 10%.
/// `None` when no dataset has a point.
pub fn value_bounds(datasets: &[Dataset]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for v in datasets.iter().flat_map(|d| d.data.iter().flatten()) {
        min = min.min(*v);
        max = max.max(*v);
    }

    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    Some((min - padding, max + padding))
}

/// Horizontal pixel position of point `index` out of `count`
pub fn x_position(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        return left + width / 2.0;
    }
    left + index as f64 / (count - 1) as f64 * width
}

/// Split a series into runs of consecutive present points
pub fn segments(data: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for (i, point) in data.iter().enumerate() {
        match point {
            Some(v) => current.push((i, *v)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some((y_min, y_max)) = value_bounds(&chart.datasets) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    };

    let count = chart.labels.len();
    let y_at = |v: f64| MARGIN_TOP + (y_max - v) / (y_max - y_min) * chart_height;

    // Horizontal grid lines with y labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    for dataset in &chart.datasets {
        let color = dataset.border_color.as_str();
        ctx.set_stroke_style(&color.into());
        ctx.set_fill_style(&color.into());
        ctx.set_line_width(2.0);

        for run in segments(&dataset.data) {
            ctx.begin_path();
            for (n, (i, v)) in run.iter().enumerate() {
                let x = x_position(*i, count, MARGIN_LEFT, chart_width);
                if n == 0 {
                    ctx.move_to(x, y_at(*v));
                } else {
                    ctx.line_to(x, y_at(*v));
                }
            }
            ctx.stroke();

            for (i, v) in &run {
                let x = x_position(*i, count, MARGIN_LEFT, chart_width);
                ctx.begin_path();
                let _ = ctx.arc(x, y_at(*v), 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }

    // X-axis labels, thinned out for long lists
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");
    let step = count.div_ceil(MAX_X_LABELS).max(1);
    for (i, label) in chart.labels.iter().enumerate().step_by(step) {
        let x = x_position(i, count, MARGIN_LEFT, chart_width);
        let _ = ctx.fill_text(label, x - 15.0, height - MARGIN_BOTTOM / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(data: Vec<Option<f64>>) -> Dataset {
        Dataset {
            label: "Age".into(),
            data,
            border_color: "rgba(75,192,192,1)".into(),
            fill: false,
        }
    }

    #[test]
    fn test_value_bounds() {
        let sets = vec![dataset(vec![Some(10.0), None]), dataset(vec![Some(30.0)])];
        assert_eq!(value_bounds(&sets), Some((8.0, 32.0)));

        let flat = vec![dataset(vec![Some(5.0), Some(5.0)])];
        assert_eq!(value_bounds(&flat), Some((4.0, 6.0)));

        assert_eq!(value_bounds(&[dataset(vec![None])]), None);
        assert_eq!(value_bounds(&[]), None);
    }

    #[test]
    fn test_x_position() {
        assert_eq!(x_position(0, 3, 60.0, 100.0), 60.0);
        assert_eq!(x_position(2, 3, 60.0, 100.0), 160.0);
        assert_eq!(x_position(0, 1, 60.0, 100.0), 110.0);
    }

    #[test]
    fn test_segments_break_at_gaps() {
        let runs = segments(&[Some(1.0), Some(2.0), None, Some(4.0), None, None]);
        assert_eq!(runs, vec![vec![(0, 1.0), (1, 2.0)], vec![(3, 4.0)]]);
        assert!(segments(&[None, None]).is_empty());
    }
}
