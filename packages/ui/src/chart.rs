//! Line chart drawn as inline SVG.

use api::ChartPoint;
use dioxus::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 160.0;
const PAD: f64 = 12.0;

/// Screen coordinates of a series inside a `width` x `height` box.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub path: String,
    pub dots: Vec<(f64, f64)>,
    pub min: f64,
    pub max: f64,
}

/// Points without a value are skipped. `None` when nothing is left to draw.
pub fn line_geometry(points: &[ChartPoint], width: f64, height: f64) -> Option<ChartGeometry> {
    let values: Vec<f64> = points
        .iter()
        .filter_map(|p| p.value)
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let inner_w = width - 2.0 * PAD;
    let inner_h = height - 2.0 * PAD;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    let dots: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if values.len() > 1 {
                PAD + step * i as f64
            } else {
                width / 2.0
            };
            // flat series sit on the middle line
            let t = if max > min { (v - min) / (max - min) } else { 0.5 };
            (x, PAD + inner_h * (1.0 - t))
        })
        .collect();

    let path = dots
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    Some(ChartGeometry {
        path,
        dots,
        min,
        max,
    })
}

#[component]
pub fn LineChart(points: Vec<ChartPoint>, label: String) -> Element {
    let Some(geometry) = line_geometry(&points, WIDTH, HEIGHT) else {
        return rsx! {
            div { class: "chart-empty", "No data for {label} yet" }
        };
    };
    let first = points.first().map(|p| p.date.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.date.clone()).unwrap_or_default();
    let range = format!("{:.1} to {:.1}", geometry.min, geometry.max);

    rsx! {
        figure {
            class: "chart",
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "100%",
                role: "img",
                path {
                    d: "{geometry.path}",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
                for (i, (x, y)) in geometry.dots.iter().enumerate() {
                    circle { key: "{i}", cx: "{x}", cy: "{y}", r: "3", fill: "currentColor" }
                }
            }
            figcaption {
                class: "chart-caption",
                span { "{first}" }
                span { "{label}: {range}" }
                span { "{last}" }
            }
        }
    }
}
