use super::{RadarChart, ScoreBar, Vertex, BAR_TICKS, GRIDLINES, SCALE_MAX};
use crate::error::Result;
use crate::types::scoring::{EvaluationRun, ScoreCard};
use html_escape::encode_text;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const RADAR_SIZE: f64 = 700.0;
const RADAR_RADIUS: f64 = 240.0;
const RADAR_FILL: &str = "#1f3fbf";

const BAR_WIDTH: f64 = 400.0;
const BAR_HEIGHT: f64 = 64.0;
const BAR_TRACK_LEFT: f64 = 12.0;
const BAR_TRACK_WIDTH: f64 = 376.0;
const BAR_TRACK_TOP: f64 = 8.0;
const BAR_TRACK_HEIGHT: f64 = 28.0;

#[derive(Debug, Clone)]
pub struct ChartFiles {
    pub radar: PathBuf,
    /// `bars[c][k]` is the image for criterion `k` of category `c`.
    pub bars: Vec<Vec<PathBuf>>,
}

pub fn radar_file_name(stem: &str) -> String {
    format!("{stem}_radar_chart.svg")
}

/// Indices are 1-based so the names read naturally next to the report.
pub fn bar_file_name(stem: &str, category: usize, criterion: usize) -> String {
    format!("{stem}_bar_{}_{}.svg", category + 1, criterion + 1)
}

pub fn write_charts(
    run: &EvaluationRun,
    card: &ScoreCard,
    dir: &Path,
    stem: &str,
) -> Result<ChartFiles> {
    fs::create_dir_all(dir)?;

    let series = card.radar_series();
    let radar = RadarChart::new(format!("{} Scorecard", run.startup_name), &series);
    let radar_path = dir.join(radar_file_name(stem));
    fs::write(&radar_path, radar_svg(&radar))?;
    tracing::debug!(path = %radar_path.display(), "wrote radar chart");

    let mut bars = Vec::with_capacity(run.categories.len());
    for (category_index, entry) in run.categories.iter().enumerate() {
        let mut paths = Vec::with_capacity(entry.assessments.len());
        for (criterion_index, assessment) in entry.assessments.iter().enumerate() {
            let path = dir.join(bar_file_name(stem, category_index, criterion_index));
            fs::write(&path, bar_svg(&ScoreBar::new(assessment.score.value())))?;
            tracing::debug!(
                path = %path.display(),
                criterion = assessment.criterion.name,
                "wrote score bar"
            );
            paths.push(path);
        }
        bars.push(paths);
    }

    Ok(ChartFiles {
        radar: radar_path,
        bars,
    })
}

fn radar_point(vertex: Vertex) -> (f64, f64) {
    let center = RADAR_SIZE / 2.0;
    (
        center + vertex.x * RADAR_RADIUS,
        center - vertex.y * RADAR_RADIUS,
    )
}

fn points_attr(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|vertex| {
            let (x, y) = radar_point(*vertex);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn radar_svg(chart: &RadarChart) -> String {
    let center = RADAR_SIZE / 2.0;
    let mut grid = String::new();
    for value in GRIDLINES {
        let radius = value / SCALE_MAX * RADAR_RADIUS;
        let _ = writeln!(
            grid,
            r##"  <circle cx="{center:.2}" cy="{center:.2}" r="{radius:.2}" fill="none" stroke="#cccccc" stroke-width="1"/>"##
        );
        let _ = writeln!(
            grid,
            r##"  <text x="{:.2}" y="{:.2}" font-size="11" fill="#666666">{value}</text>"##,
            center + 4.0,
            center - radius - 2.0
        );
    }

    let mut spokes = String::new();
    let mut labels = String::new();
    for axis in &chart.axes {
        let (x, y) = radar_point(axis.tip);
        let _ = writeln!(
            spokes,
            r##"  <line x1="{center:.2}" y1="{center:.2}" x2="{x:.2}" y2="{y:.2}" stroke="#cccccc" stroke-width="1"/>"##
        );
        let (lx, ly) = radar_point(Vertex::new(axis.tip.x * 1.12, axis.tip.y * 1.12));
        let anchor = if axis.tip.x > 0.1 {
            "start"
        } else if axis.tip.x < -0.1 {
            "end"
        } else {
            "middle"
        };
        let _ = writeln!(
            labels,
            r##"  <text x="{lx:.2}" y="{ly:.2}" font-size="14" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"##,
            encode_text(&axis.label)
        );
    }

    let points = points_attr(&chart.polygon);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" style="background:white">
  <text x="{center:.2}" y="36" font-size="20" text-anchor="middle">{title}</text>
{grid}{spokes}  <polygon points="{points}" fill="{fill}" fill-opacity="0.25" stroke="none"/>
  <polyline points="{points}" fill="none" stroke="{fill}" stroke-width="2"/>
{labels}</svg>
"##,
        size = RADAR_SIZE,
        title = encode_text(&chart.title),
        fill = RADAR_FILL,
    )
}

pub fn bar_svg(bar: &ScoreBar) -> String {
    let fill_width = bar.fill * BAR_TRACK_WIDTH;
    let to_px = |vertex: &Vertex| {
        (
            BAR_TRACK_LEFT + vertex.x * BAR_TRACK_WIDTH,
            BAR_TRACK_TOP + (1.0 - vertex.y) * BAR_TRACK_HEIGHT,
        )
    };
    let marker = bar
        .marker
        .iter()
        .map(|vertex| {
            let (x, y) = to_px(vertex);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut ticks = String::new();
    for tick in BAR_TICKS {
        let x = BAR_TRACK_LEFT + f64::from(tick) / SCALE_MAX * BAR_TRACK_WIDTH;
        let _ = writeln!(
            ticks,
            r##"  <line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="#333333" stroke-width="1"/>
  <text x="{x:.2}" y="{:.2}" font-size="10" text-anchor="middle">{tick}</text>"##,
            BAR_TRACK_TOP + BAR_TRACK_HEIGHT,
            BAR_TRACK_TOP + BAR_TRACK_HEIGHT + 4.0,
            BAR_HEIGHT - 8.0
        );
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{BAR_WIDTH}" height="{BAR_HEIGHT}" viewBox="0 0 {BAR_WIDTH} {BAR_HEIGHT}" style="background:white">
  <rect x="{BAR_TRACK_LEFT}" y="{BAR_TRACK_TOP}" width="{BAR_TRACK_WIDTH}" height="{BAR_TRACK_HEIGHT}" fill="none" stroke="#333333" stroke-width="1"/>
  <rect x="{BAR_TRACK_LEFT}" y="{top:.2}" width="{fill_width:.2}" height="{height:.2}" fill="{color}"/>
  <polygon points="{marker}" fill="black"/>
{ticks}</svg>
"##,
        top = BAR_TRACK_TOP + BAR_TRACK_HEIGHT * 0.2,
        height = BAR_TRACK_HEIGHT * 0.6,
        color = bar.color.hex(),
    )
}
