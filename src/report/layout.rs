use crate::chart::{RadarChart, ScoreBar};
use crate::types::config::RenderSettings;
use crate::types::scoring::{EvaluationRun, ScoreCard};

// A4 portrait, millimetres.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 10.0;
pub const BOTTOM_MARGIN: f32 = 15.0;
pub const PT_TO_MM: f32 = 0.3528;

/// Average Helvetica glyph width as a share of the font size.
const GLYPH_WIDTH_EM: f32 = 0.5;
const BAR_LABEL_SPACE: f32 = 3.0;
pub const RADAR_TITLE_SIZE: f32 = 12.0;
/// Baseline-to-baseline distance between wrapped radar title lines.
pub const RADAR_TITLE_LINE: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone)]
pub enum Block {
    Text {
        text: String,
        size: f32,
        weight: FontWeight,
        align: Align,
        line_height: f32,
    },
    Bar {
        bar: ScoreBar,
        width: f32,
    },
    Radar {
        chart: RadarChart,
        width: f32,
        /// `chart.title` wrapped to the usable page width.
        title_lines: Vec<String>,
    },
}

impl Block {
    fn text(text: impl Into<String>, size: f32, weight: FontWeight, line_height: f32) -> Self {
        Self::Text {
            text: text.into(),
            size,
            weight,
            align: Align::Left,
            line_height,
        }
    }

    fn radar(chart: RadarChart, width: f32) -> Self {
        let title_lines = wrap_text(&chart.title, chars_per_line(RADAR_TITLE_SIZE));
        Self::Radar {
            chart,
            width,
            title_lines,
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            Self::Text { line_height, .. } => *line_height,
            Self::Bar { width, .. } => bar_track_height(*width) + BAR_LABEL_SPACE,
            Self::Radar {
                width, title_lines, ..
            } => *width + radar_title_overflow(title_lines.len()),
        }
    }

    pub fn width(&self) -> f32 {
        match self {
            Self::Text { .. } => PAGE_WIDTH - 2.0 * MARGIN,
            Self::Bar { width, .. } | Self::Radar { width, .. } => *width,
        }
    }
}

pub fn bar_track_height(width: f32) -> f32 {
    width / 10.0
}

/// Extra height a radar block needs when its title takes more than one line.
pub fn radar_title_overflow(lines: usize) -> f32 {
    lines.saturating_sub(1) as f32 * RADAR_TITLE_LINE
}

#[derive(Debug, Clone)]
pub struct Placed {
    pub block: Block,
    pub x: f32,
    /// Distance from the top edge of the page.
    pub top: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<Placed>,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub pages: Vec<Page>,
}

struct Paginator {
    pages: Vec<Page>,
    cursor: f32,
}

impl Paginator {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cursor: MARGIN,
        }
    }

    fn place(&mut self, block: Block, x: f32) {
        let height = block.height();
        let current_has_items = self
            .pages
            .last()
            .map(|page| !page.items.is_empty())
            .unwrap_or(false);
        if self.cursor + height > PAGE_HEIGHT - BOTTOM_MARGIN && current_has_items {
            self.pages.push(Page::default());
            self.cursor = MARGIN;
        }

        let top = self.cursor;
        self.cursor += height;
        if let Some(page) = self.pages.last_mut() {
            page.items.push(Placed { block, x, top });
        }
    }

    fn place_left(&mut self, block: Block) {
        self.place(block, MARGIN);
    }

    fn place_wrapped(&mut self, text: &str, size: f32, weight: FontWeight, line_height: f32) {
        self.place_wrapped_aligned(text, size, weight, Align::Left, line_height);
    }

    fn place_wrapped_aligned(
        &mut self,
        text: &str,
        size: f32,
        weight: FontWeight,
        align: Align,
        line_height: f32,
    ) {
        for line in wrap_text(text, chars_per_line(size)) {
            self.place_left(Block::Text {
                text: line,
                size,
                weight,
                align,
                line_height,
            });
        }
    }

    fn finish(self) -> Layout {
        Layout { pages: self.pages }
    }
}

pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_WIDTH_EM * PT_TO_MM
}

fn chars_per_line(size: f32) -> usize {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    ((usable / (size * GLYPH_WIDTH_EM * PT_TO_MM)).floor() as usize).max(1)
}

/// Greedy word wrap; words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head = word.chars().take(max_chars).collect::<String>();
            word = word.chars().skip(max_chars).collect();
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn build_layout(run: &EvaluationRun, card: &ScoreCard, settings: &RenderSettings) -> Layout {
    let mut pages = Paginator::new();

    pages.place_wrapped_aligned(
        &format!("Startup: {}", run.startup_name),
        14.0,
        FontWeight::Bold,
        Align::Center,
        10.0,
    );
    pages.place_left(Block::text(
        "Score Breakdown & Explanations:",
        12.0,
        FontWeight::Bold,
        10.0,
    ));

    for entry in &run.categories {
        pages.place_left(Block::text(
            format!(
                "{} (Weight: {}%)",
                entry.category.name, entry.category.weight_percent
            ),
            11.0,
            FontWeight::Bold,
            10.0,
        ));
        for assessment in &entry.assessments {
            pages.place_left(Block::text(
                format!("{}: {}/10", assessment.criterion.name, assessment.score),
                10.0,
                FontWeight::Regular,
                7.0,
            ));
            pages.place_left(Block::Bar {
                bar: ScoreBar::new(assessment.score.value()),
                width: settings.bar_width_mm,
            });
            pages.place_wrapped(assessment.explanation.text(), 10.0, FontWeight::Regular, 7.0);
        }
    }

    let series = card.radar_series();
    let radar_width = settings.radar_width_mm;
    pages.place(
        Block::radar(
            RadarChart::new(format!("{} Scorecard", run.startup_name), &series),
            radar_width,
        ),
        (PAGE_WIDTH - radar_width) / 2.0,
    );

    pages.place_left(Block::text(
        format!("Final Score: {:.2}/100", card.final_score),
        12.0,
        FontWeight::Bold,
        10.0,
    ));
    pages.place_wrapped(card.tier.recommendation(), 12.0, FontWeight::Bold, 10.0);

    let layout = pages.finish();
    tracing::debug!(pages = layout.pages.len(), "report laid out");
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score;
    use crate::types::rubric::RUBRIC;
    use crate::types::scoring::Score;

    fn uniform_run(name: &str, value: f64) -> EvaluationRun {
        let scores = RUBRIC
            .iter()
            .map(|category| {
                category
                    .criteria
                    .iter()
                    .map(|_| Score::new(value).expect("score should be in range"))
                    .collect()
            })
            .collect::<Vec<_>>();
        score::build_run(name, &scores).expect("run should build")
    }

    fn texts(layout: &Layout) -> Vec<String> {
        layout
            .pages
            .iter()
            .flat_map(|page| page.items.iter())
            .filter_map(|placed| match &placed.block {
                Block::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn full_report_flows_onto_multiple_pages_without_clipping() {
        let run = uniform_run("Acme", 8.0);
        let card = score::aggregate(&run);
        let layout = build_layout(&run, &card, &RenderSettings::default());

        assert!(layout.pages.len() >= 2);
        for page in &layout.pages {
            assert!(!page.items.is_empty());
            for placed in &page.items {
                assert!(placed.top >= MARGIN);
                assert!(placed.top + placed.block.height() <= PAGE_HEIGHT - BOTTOM_MARGIN);
                assert!(placed.x + placed.block.width() <= PAGE_WIDTH);
            }
        }
    }

    #[test]
    fn content_keeps_report_order() {
        let run = uniform_run("Acme", 8.0);
        let card = score::aggregate(&run);
        let layout = build_layout(&run, &card, &RenderSettings::default());
        let texts = texts(&layout);

        assert_eq!(texts[0], "Startup: Acme");
        assert_eq!(texts[1], "Score Breakdown & Explanations:");
        assert_eq!(texts[2], "Founder Traits (Weight: 30%)");
        assert_eq!(texts[3], "Vision Clarity: 8.0/10");
        assert_eq!(
            texts[4],
            "Strong performance. This is a key strength of the team."
        );

        let final_index = texts
            .iter()
            .position(|text| text == "Final Score: 80.00/100")
            .expect("final score should be present");
        assert!(texts[final_index + 1].starts_with("Strong Team"));
    }

    #[test]
    fn one_bar_per_criterion_and_a_single_radar() {
        let run = uniform_run("Acme", 5.0);
        let card = score::aggregate(&run);
        let layout = build_layout(&run, &card, &RenderSettings::default());
        let blocks = layout
            .pages
            .iter()
            .flat_map(|page| page.items.iter())
            .collect::<Vec<_>>();

        let bars = blocks
            .iter()
            .filter(|placed| matches!(placed.block, Block::Bar { .. }))
            .count();
        let radars = blocks
            .iter()
            .filter(|placed| matches!(placed.block, Block::Radar { .. }))
            .collect::<Vec<_>>();
        assert_eq!(bars, 11);
        assert_eq!(radars.len(), 1);
        assert_eq!(radars[0].x, (PAGE_WIDTH - 120.0) / 2.0);
    }

    #[test]
    fn long_startup_names_wrap_inside_the_page() {
        let name = "Acme Quantum Robotics and Sustainable Agritech Holdings \
                    International Research Partnership";
        let run = uniform_run(name, 7.0);
        let card = score::aggregate(&run);
        let layout = build_layout(&run, &card, &RenderSettings::default());
        let usable = PAGE_WIDTH - 2.0 * MARGIN;

        let mut title = Vec::new();
        for placed in layout.pages.iter().flat_map(|page| page.items.iter()) {
            assert!(placed.top + placed.block.height() <= PAGE_HEIGHT - BOTTOM_MARGIN);
            match &placed.block {
                Block::Text {
                    text, size, align, ..
                } => {
                    assert!(
                        text_width(text, *size) <= usable,
                        "text overflows page: {text}"
                    );
                    if *align == Align::Center {
                        title.push(text.clone());
                    }
                }
                Block::Radar { title_lines, .. } => {
                    assert!(title_lines.len() > 1);
                    for line in title_lines {
                        assert!(text_width(line, RADAR_TITLE_SIZE) <= usable);
                    }
                    assert_eq!(title_lines.join(" "), format!("{name} Scorecard"));
                    assert_eq!(
                        placed.block.height(),
                        RenderSettings::default().radar_width_mm
                            + radar_title_overflow(title_lines.len())
                    );
                }
                Block::Bar { .. } => {}
            }
        }

        assert!(title.len() > 1);
        assert_eq!(title.join(" "), format!("Startup: {name}"));
    }

    #[test]
    fn wrap_text_breaks_on_word_boundaries() {
        let lines = wrap_text("Needs significant improvement here", 12);
        assert_eq!(lines, vec!["Needs", "significant", "improvement", "here"]);
        assert_eq!(wrap_text("short line", 40), vec!["short line"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_text_splits_overlong_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }
}
