pub mod gradient;
pub mod svg;

use gradient::Rgb8;
use std::f64::consts::PI;

pub const SCALE_MAX: f64 = 10.0;
pub const GRIDLINES: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];
pub const BAR_TICKS: std::ops::RangeInclusive<u32> = 1..=10;

const MARKER_HALF_WIDTH: f64 = 0.025;

/// Point in chart units with the y axis pointing up. Radar charts are centered
/// on the origin with radius 1.0 at `SCALE_MAX`; bars span x and y in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct RadarAxis {
    pub label: String,
    pub tip: Vertex,
}

#[derive(Debug, Clone)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<RadarAxis>,
    /// Data polygon, closed: the first vertex is repeated at the end.
    pub polygon: Vec<Vertex>,
}

impl RadarChart {
    pub fn new(title: impl Into<String>, series: &[(String, f64)]) -> Self {
        let count = series.len().max(1) as f64;
        let mut axes = Vec::with_capacity(series.len());
        let mut polygon = Vec::with_capacity(series.len() + 1);

        for (index, (label, value)) in series.iter().enumerate() {
            // 12 o'clock, clockwise.
            let angle = 2.0 * PI * index as f64 / count;
            let direction = Vertex::new(angle.sin(), angle.cos());
            let radius = value.clamp(0.0, SCALE_MAX) / SCALE_MAX;

            axes.push(RadarAxis {
                label: label.clone(),
                tip: direction,
            });
            polygon.push(Vertex::new(direction.x * radius, direction.y * radius));
        }
        if let Some(first) = polygon.first().copied() {
            polygon.push(first);
        }

        Self {
            title: title.into(),
            axes,
            polygon,
        }
    }
}

/// Closed polyline approximating a gridline circle at `value` on the 0-10 scale.
pub fn gridline_ring(value: f64, segments: usize) -> Vec<Vertex> {
    let radius = value / SCALE_MAX;
    (0..=segments)
        .map(|step| {
            let angle = 2.0 * PI * step as f64 / segments as f64;
            Vertex::new(angle.sin() * radius, angle.cos() * radius)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct ScoreBar {
    /// Bar length as a share of the 0-10 track.
    pub fill: f64,
    pub color: Rgb8,
    pub marker: [Vertex; 3],
}

impl ScoreBar {
    pub fn new(score: f64) -> Self {
        let fill = score.clamp(0.0, SCALE_MAX) / SCALE_MAX;
        Self {
            fill,
            color: gradient::red_to_green(fill),
            marker: [
                Vertex::new(fill - MARKER_HALF_WIDTH, 0.2),
                Vertex::new(fill + MARKER_HALF_WIDTH, 0.2),
                Vertex::new(fill, 0.8),
            ],
        }
    }
}
