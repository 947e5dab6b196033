//! Radar chart geometry.
//!
//! Pure layout math for the personality chart: one spoke per stat, first
//! spoke pointing straight up, spokes proceeding clockwise. Coordinates are
//! in an SVG user space of `VIEW_SIZE × VIEW_SIZE` with y pointing down.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::types::PersonalityStat;

/// Width and height of the SVG view box.
pub const VIEW_SIZE: f64 = 300.0;

/// Outer radius as a fraction of the half-extent.
pub const OUTER_RADIUS_FRACTION: f64 = 0.7;

/// Concentric grid rings drawn behind the data polygon.
pub const GRID_RINGS: usize = 5;

/// Distance between a spoke tip and its label.
const LABEL_OFFSET: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

impl RadarPoint {
    fn polar(center: f64, radius: f64, angle: f64) -> Self {
        Self {
            x: center + radius * angle.cos(),
            y: center + radius * angle.sin(),
        }
    }
}

/// Horizontal text anchor for an axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    Start,
    Middle,
    End,
}

impl LabelAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelAnchor::Start => "start",
            LabelAnchor::Middle => "middle",
            LabelAnchor::End => "end",
        }
    }
}

/// One spoke of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub subject: String,
    pub value: f64,
    pub full_mark: f64,
    /// Radial extent in `[0, 1]`
    pub ratio: f64,
    /// Angle in radians, SVG orientation
    pub angle: f64,
    /// Tip of the spoke on the outer ring
    pub tip: RadarPoint,
    /// Data vertex on this spoke
    pub vertex: RadarPoint,
    pub label: RadarPoint,
    pub label_anchor: LabelAnchor,
}

impl RadarAxis {
    /// Hover text for the data vertex.
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.subject, self.value)
    }
}

/// Hover label for one data vertex.
///
/// Placed as percentages of the square chart box so an HTML overlay can sit
/// on top of the SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarTooltip {
    pub text: String,
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Full chart layout for one stat sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub center: f64,
    pub radius: f64,
    pub axes: Vec<RadarAxis>,
}

impl RadarChart {
    pub fn from_stats(stats: &[PersonalityStat]) -> Self {
        let center = VIEW_SIZE / 2.0;
        let radius = center * OUTER_RADIUS_FRACTION;
        let count = stats.len();

        let axes = stats
            .iter()
            .enumerate()
            .map(|(index, stat)| {
                let angle = -FRAC_PI_2 + TAU * index as f64 / count as f64;
                let ratio = stat.ratio();
                let label = RadarPoint::polar(center, radius + LABEL_OFFSET, angle);
                RadarAxis {
                    subject: stat.subject.clone(),
                    value: stat.value,
                    full_mark: stat.full_mark,
                    ratio,
                    angle,
                    tip: RadarPoint::polar(center, radius, angle),
                    vertex: RadarPoint::polar(center, radius * ratio, angle),
                    label_anchor: anchor_for(label.x, center),
                    label,
                }
            })
            .collect();

        Self {
            center,
            radius,
            axes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Whether the data can be drawn as an area rather than a lone spoke.
    pub fn has_area(&self) -> bool {
        self.axes.len() >= 3
    }

    /// Tooltip for the vertex on axis `index`, if there is such an axis.
    pub fn tooltip(&self, index: usize) -> Option<RadarTooltip> {
        self.axes.get(index).map(|axis| RadarTooltip {
            text: axis.tooltip(),
            left_pct: axis.vertex.x / VIEW_SIZE * 100.0,
            top_pct: axis.vertex.y / VIEW_SIZE * 100.0,
        })
    }

    /// SVG `points` attribute for the data polygon.
    pub fn data_points(&self) -> String {
        points_attr(self.axes.iter().map(|axis| axis.vertex))
    }

    /// SVG `points` attributes for the grid rings, innermost first.
    pub fn grid_rings(&self) -> Vec<String> {
        (1..=GRID_RINGS)
            .map(|ring| {
                let r = self.radius * ring as f64 / GRID_RINGS as f64;
                points_attr(
                    self.axes
                        .iter()
                        .map(|axis| RadarPoint::polar(self.center, r, axis.angle)),
                )
            })
            .collect()
    }

    /// Grid ring radii, innermost first. Used when there are too few axes to
    /// form polygons.
    pub fn ring_radii(&self) -> Vec<f64> {
        (1..=GRID_RINGS)
            .map(|ring| self.radius * ring as f64 / GRID_RINGS as f64)
            .collect()
    }
}

fn anchor_for(x: f64, center: f64) -> LabelAnchor {
    if (x - center).abs() < 1.0 {
        LabelAnchor::Middle
    } else if x > center {
        LabelAnchor::Start
    } else {
        LabelAnchor::End
    }
}

fn points_attr(points: impl Iterator<Item = RadarPoint>) -> String {
    points
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn single_axis_points_up_at_its_ratio() {
        let chart = RadarChart::from_stats(&[PersonalityStat::new("Wit", 8.0, 10.0)]);
        assert_eq!(chart.axes.len(), 1);

        let axis = &chart.axes[0];
        assert_eq!(axis.subject, "Wit");
        assert!(close(axis.ratio, 0.8));
        assert!(close(axis.vertex.x, chart.center));
        assert!(close(axis.vertex.y, chart.center - chart.radius * 0.8));
        assert_eq!(axis.label_anchor, LabelAnchor::Middle);
        assert!(!chart.has_area());
    }

    #[test]
    fn axes_run_clockwise_from_the_top() {
        let stats: Vec<_> = ["N", "E", "S", "W"]
            .iter()
            .map(|s| PersonalityStat::new(*s, 10.0, 10.0))
            .collect();
        let chart = RadarChart::from_stats(&stats);

        let east = &chart.axes[1];
        assert!(close(east.tip.x, chart.center + chart.radius));
        assert!(close(east.tip.y, chart.center));
        assert_eq!(east.label_anchor, LabelAnchor::Start);

        let west = &chart.axes[3];
        assert!(close(west.tip.x, chart.center - chart.radius));
        assert_eq!(west.label_anchor, LabelAnchor::End);
    }

    #[test]
    fn outer_radius_is_seventy_percent() {
        let chart = RadarChart::from_stats(&[]);
        assert!(close(chart.radius, 105.0));
        assert!(chart.is_empty());
        assert_eq!(chart.data_points(), "");
    }

    #[test]
    fn grid_has_fixed_ring_count() {
        let stats: Vec<_> = (0..6)
            .map(|i| PersonalityStat::new(format!("S{i}"), 50.0, 100.0))
            .collect();
        let chart = RadarChart::from_stats(&stats);
        let rings = chart.grid_rings();
        assert_eq!(rings.len(), GRID_RINGS);
        assert_eq!(rings[0].split(' ').count(), 6);
        assert!(close(chart.ring_radii()[GRID_RINGS - 1], chart.radius));
    }

    #[test]
    fn overflowing_stat_stays_on_the_chart() {
        let chart = RadarChart::from_stats(&[PersonalityStat::new("Wit", 30.0, 10.0)]);
        assert!(close(chart.axes[0].ratio, 1.0));
        assert!(close(chart.axes[0].vertex.y, chart.axes[0].tip.y));
    }

    #[test]
    fn tooltip_shows_subject_and_value() {
        let chart = RadarChart::from_stats(&[PersonalityStat::new("Wit", 8.0, 10.0)]);
        assert_eq!(chart.axes[0].tooltip(), "Wit: 8");
    }

    #[test]
    fn tooltip_sits_on_its_vertex() {
        let chart = RadarChart::from_stats(&[
            PersonalityStat::new("Wit", 8.0, 10.0),
            PersonalityStat::new("Grace", 10.0, 10.0),
        ]);

        let top = chart.tooltip(0).unwrap();
        assert_eq!(top.text, "Wit: 8");
        assert!(close(top.left_pct, 50.0));
        // 150 - 105 * 0.8 = 66 of 300
        assert!(close(top.top_pct, 22.0));

        let bottom = chart.tooltip(1).unwrap();
        assert_eq!(bottom.text, "Grace: 10");
        assert!(close(bottom.left_pct, 50.0));
        assert!(close(bottom.top_pct, 85.0));

        assert!(chart.tooltip(2).is_none());
    }
}
