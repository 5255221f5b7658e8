pub mod json;
pub mod layout;
pub mod md;
pub mod pdf;

use crate::error::{Result, ScorecardError};
use crate::types::config::{RenderSettings, SummaryFormat};
use crate::types::scoring::{EvaluationRun, ScoreCard};
use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "startup";

/// File-safe version of the startup name; the display name is left untouched.
pub fn file_stem(startup_name: &str) -> String {
    let stem = startup_name
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect::<String>();
    let stem = stem.trim_matches('.').to_string();
    if stem.trim().is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

pub fn report_file_name(stem: &str, suffix: &str) -> String {
    format!("{stem}_{suffix}.pdf")
}

pub fn write_report(
    run: &EvaluationRun,
    card: &ScoreCard,
    settings: &RenderSettings,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    let layout = layout::build_layout(run, card, settings);
    pdf::write_pdf(&layout, &format!("{} Scorecard", run.startup_name), &path)?;
    Ok(path)
}

pub fn render_summary(
    run: &EvaluationRun,
    card: &ScoreCard,
    format: SummaryFormat,
) -> Result<Option<String>> {
    match format {
        SummaryFormat::None => Ok(None),
        SummaryFormat::Md => Ok(Some(md::to_markdown(run, card))),
        SummaryFormat::Json => json::to_json(run, card)
            .map(Some)
            .map_err(ScorecardError::Json),
    }
}
