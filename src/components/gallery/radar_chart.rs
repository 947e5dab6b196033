//! Personality Radar Chart
//!
//! Draws a [`RadarChart`] layout as inline SVG: grid rings, spokes, axis
//! labels, the data area and a hoverable marker per vertex. The hover label is
//! an HTML element over the SVG since dioxus has no SVG `<title>`.

use dioxus::prelude::*;
use velcross_core::radar::VIEW_SIZE;
use velcross_core::RadarChart;

use crate::theme::colors::{AMBER_400, AMBER_500, SLATE_400, SLATE_700};

fn coord(v: f64) -> String {
    format!("{:.2}", v)
}

#[component]
pub fn PersonalityRadar(chart: RadarChart) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    if chart.is_empty() {
        return rsx! {
            div { class: "radar-empty", "No personality data recorded" }
        };
    }

    let view_box = format!("0 0 {VIEW_SIZE} {VIEW_SIZE}");
    let center = coord(chart.center);
    let polygon_grid = chart.has_area();
    let rings = chart.grid_rings();
    let radii: Vec<String> = chart.ring_radii().into_iter().map(coord).collect();
    let data_points = chart.data_points();
    let tooltip = hovered().and_then(|index| chart.tooltip(index)).map(|tip| {
        (
            format!("left: {:.2}%; top: {:.2}%;", tip.left_pct, tip.top_pct),
            tip.text,
        )
    });

    rsx! {
        div { class: "radar",
            svg {
                class: "radar-svg",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "{view_box}",
                width: "100%",
                height: "100%",
                role: "img",
                "aria-label": "Personality radar chart",

                // Grid
                g { fill: "none", stroke: SLATE_700, stroke_width: "1",
                    if polygon_grid {
                        for points in rings.iter() {
                            polygon { points: "{points}" }
                        }
                    } else {
                        for r in radii.iter() {
                            circle { cx: "{center}", cy: "{center}", r: "{r}" }
                        }
                    }
                    for axis in chart.axes.iter() {
                        line {
                            x1: "{center}",
                            y1: "{center}",
                            x2: "{coord(axis.tip.x)}",
                            y2: "{coord(axis.tip.y)}",
                        }
                    }
                }

                // Axis labels
                g { fill: SLATE_400, font_size: "11",
                    for axis in chart.axes.iter() {
                        text {
                            x: "{coord(axis.label.x)}",
                            y: "{coord(axis.label.y)}",
                            text_anchor: axis.label_anchor.as_str(),
                            dominant_baseline: "middle",
                            "{axis.subject}"
                        }
                    }
                }

                // Data
                if chart.axes.len() >= 2 {
                    polygon {
                        class: "radar-area",
                        points: "{data_points}",
                        fill: AMBER_500,
                        fill_opacity: "0.4",
                        stroke: AMBER_400,
                        stroke_width: "2",
                    }
                } else {
                    line {
                        class: "radar-area",
                        x1: "{center}",
                        y1: "{center}",
                        x2: "{coord(chart.axes[0].vertex.x)}",
                        y2: "{coord(chart.axes[0].vertex.y)}",
                        stroke: AMBER_400,
                        stroke_width: "2",
                    }
                }

                // Vertex markers
                g { class: "radar-vertices",
                    for (index, axis) in chart.axes.iter().enumerate() {
                        circle {
                            key: "{index}",
                            class: "radar-vertex",
                            cx: "{coord(axis.vertex.x)}",
                            cy: "{coord(axis.vertex.y)}",
                            r: "3.5",
                            fill: AMBER_400,
                            onmouseenter: move |_| hovered.set(Some(index)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
            }

            if let Some((style, text)) = tooltip {
                div { class: "radar-tooltip", role: "tooltip", style: "{style}", "{text}" }
            }
        }
    }
}
