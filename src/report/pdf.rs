use super::layout::{
    bar_track_height, radar_title_overflow, text_width, Align, Block, FontWeight, Layout, Placed,
    PAGE_HEIGHT, PAGE_WIDTH, PT_TO_MM, RADAR_TITLE_LINE, RADAR_TITLE_SIZE,
};
use crate::chart::gradient::Rgb8;
use crate::chart::{gridline_ring, RadarChart, ScoreBar, Vertex, BAR_TICKS, GRIDLINES, SCALE_MAX};
use crate::error::{Result, ScorecardError};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const LAYER_NAME: &str = "Layer 1";
const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
const GRID_GREY: Rgb8 = Rgb8::new(0xcc, 0xcc, 0xcc);
const TRACK_GREY: Rgb8 = Rgb8::new(0x33, 0x33, 0x33);
const RADAR_LINE: Rgb8 = Rgb8::new(0x1f, 0x3f, 0xbf);
// RADAR_LINE at 25% over white.
const RADAR_FILL: Rgb8 = Rgb8::new(0xc7, 0xcf, 0xef);
const RING_SEGMENTS: usize = 72;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn pdf_error(err: printpdf::Error) -> ScorecardError {
    ScorecardError::Pdf(format!("{err:?}"))
}

pub fn write_pdf(layout: &Layout, title: &str, path: &Path) -> Result<()> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };
        for placed in &page.items {
            paint(&layer, &fonts, placed);
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_error)?;
    tracing::info!(path = %path.display(), pages = layout.pages.len(), "pdf written");
    Ok(())
}

fn paint(layer: &PdfLayerReference, fonts: &Fonts, placed: &Placed) {
    match &placed.block {
        Block::Text {
            text,
            size,
            weight,
            align,
            line_height,
        } => {
            let x = match align {
                Align::Left => placed.x,
                Align::Center => {
                    placed.x + ((placed.block.width() - text_width(text, *size)) / 2.0).max(0.0)
                }
            };
            // Baseline sits a third of the glyph height below the cell's middle.
            let baseline = placed.top + line_height / 2.0 + size * PT_TO_MM / 3.0;
            draw_text(layer, fonts.get(*weight), text, *size, x, baseline);
        }
        Block::Bar { bar, width } => paint_bar(layer, fonts, bar, placed.x, placed.top, *width),
        Block::Radar {
            chart,
            width,
            title_lines,
        } => paint_radar(
            layer,
            fonts,
            chart,
            title_lines,
            placed.x,
            placed.top,
            *width,
        ),
    }
}

fn paint_bar(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    bar: &ScoreBar,
    left: f32,
    top: f32,
    width: f32,
) {
    let height = bar_track_height(width);
    let to_page = |vertex: &Vertex| {
        point(
            left + vertex.x as f32 * width,
            top + (1.0 - vertex.y as f32) * height,
        )
    };

    let track = [
        Vertex::new(0.0, 0.0),
        Vertex::new(1.0, 0.0),
        Vertex::new(1.0, 1.0),
        Vertex::new(0.0, 1.0),
    ];
    stroke(layer, track.iter().map(to_page).collect(), true, TRACK_GREY, 0.5);

    let fill = bar.fill;
    let filled = [
        Vertex::new(0.0, 0.2),
        Vertex::new(fill, 0.2),
        Vertex::new(fill, 0.8),
        Vertex::new(0.0, 0.8),
    ];
    fill_polygon(layer, filled.iter().map(to_page).collect(), bar.color);
    fill_polygon(layer, bar.marker.iter().map(to_page).collect(), BLACK);

    let label_size = 5.0;
    for tick in BAR_TICKS {
        let x = left + (f64::from(tick) / SCALE_MAX) as f32 * width;
        stroke(
            layer,
            vec![point(x, top + height), point(x, top + height + 0.8)],
            false,
            TRACK_GREY,
            0.3,
        );
        let label = tick.to_string();
        draw_text(
            layer,
            &fonts.regular,
            &label,
            label_size,
            x - text_width(&label, label_size) / 2.0,
            top + height + 2.6,
        );
    }
}

fn paint_radar(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    chart: &RadarChart,
    title_lines: &[String],
    left: f32,
    top: f32,
    width: f32,
) {
    let center_x = left + width / 2.0;
    for (index, line) in title_lines.iter().enumerate() {
        draw_text(
            layer,
            &fonts.bold,
            line,
            RADAR_TITLE_SIZE,
            center_x - text_width(line, RADAR_TITLE_SIZE) / 2.0,
            top + 6.0 + index as f32 * RADAR_TITLE_LINE,
        );
    }

    let center_y =
        top + 10.0 + radar_title_overflow(title_lines.len()) + (width - 10.0) / 2.0;
    let radius = (width - 10.0) / 2.0 * 0.68;
    let to_page = |vertex: &Vertex| {
        point(
            center_x + vertex.x as f32 * radius,
            center_y - vertex.y as f32 * radius,
        )
    };

    for value in GRIDLINES {
        let ring = gridline_ring(value, RING_SEGMENTS);
        stroke(layer, ring.iter().map(to_page).collect(), true, GRID_GREY, 0.4);
        let label = format!("{value}");
        draw_text(
            layer,
            &fonts.regular,
            &label,
            6.0,
            center_x + 1.0,
            center_y - (value / SCALE_MAX) as f32 * radius - 0.5,
        );
    }
    for axis in &chart.axes {
        stroke(
            layer,
            vec![point(center_x, center_y), to_page(&axis.tip)],
            false,
            GRID_GREY,
            0.4,
        );
    }

    if chart.polygon.len() > 1 {
        let open = &chart.polygon[..chart.polygon.len() - 1];
        fill_polygon(layer, open.iter().map(to_page).collect(), RADAR_FILL);
        stroke(layer, chart.polygon.iter().map(to_page).collect(), false, RADAR_LINE, 1.5);
    }

    let label_size = 8.0;
    for axis in &chart.axes {
        let anchor = Vertex::new(axis.tip.x * 1.15, axis.tip.y * 1.15);
        let label_width = text_width(&axis.label, label_size);
        let x = center_x + anchor.x as f32 * radius;
        let x = if axis.tip.x > 0.1 {
            x
        } else if axis.tip.x < -0.1 {
            x - label_width
        } else {
            x - label_width / 2.0
        };
        let y = center_y - anchor.y as f32 * radius + label_size * PT_TO_MM / 3.0;
        draw_text(layer, &fonts.regular, &axis.label, label_size, x, y);
    }
}

/// `x` and `top` are measured from the page's left and top edges.
fn point(x: f32, top: f32) -> Point {
    Point::new(Mm(x), Mm(PAGE_HEIGHT - top))
}

fn color(rgb: Rgb8) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn draw_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f32,
    x: f32,
    baseline: f32,
) {
    layer.set_fill_color(color(BLACK));
    layer.use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - baseline), font);
}

fn fill_polygon(layer: &PdfLayerReference, points: Vec<Point>, fill: Rgb8) {
    layer.set_fill_color(color(fill));
    layer.add_polygon(Polygon {
        rings: vec![points.into_iter().map(|p| (p, false)).collect()],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

fn stroke(
    layer: &PdfLayerReference,
    points: Vec<Point>,
    closed: bool,
    outline: Rgb8,
    thickness: f32,
) {
    layer.set_outline_color(color(outline));
    layer.set_outline_thickness(thickness);
    layer.add_line(Line {
        points: points.into_iter().map(|p| (p, false)).collect(),
        is_closed: closed,
    });
}
