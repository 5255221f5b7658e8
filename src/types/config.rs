use crate::error::ScorecardError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_REPORT_SUFFIX: &str = "Scorecard";
pub const DEFAULT_BAR_WIDTH_MM: f32 = 60.0;
pub const DEFAULT_RADAR_WIDTH_MM: f32 = 120.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorecardConfig {
    pub output: Option<OutputConfig>,
    pub render: Option<RenderConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    None,
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub report_suffix: Option<String>,
    pub summary: Option<SummaryFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub bar_width_mm: Option<f32>,
    pub radar_width_mm: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub bar_width_mm: f32,
    pub radar_width_mm: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bar_width_mm: DEFAULT_BAR_WIDTH_MM,
            radar_width_mm: DEFAULT_RADAR_WIDTH_MM,
        }
    }
}

impl ScorecardConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|output| output.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn report_suffix(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|output| output.report_suffix.as_deref())
            .unwrap_or(DEFAULT_REPORT_SUFFIX)
    }

    pub fn summary(&self) -> SummaryFormat {
        self.output
            .as_ref()
            .and_then(|output| output.summary)
            .unwrap_or_default()
    }

    pub fn render_settings(&self) -> RenderSettings {
        let defaults = RenderSettings::default();
        match &self.render {
            Some(render) => RenderSettings {
                bar_width_mm: render.bar_width_mm.unwrap_or(defaults.bar_width_mm),
                radar_width_mm: render.radar_width_mm.unwrap_or(defaults.radar_width_mm),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ScorecardError> {
        let suffix = self.report_suffix();
        if suffix.trim().is_empty() {
            return Err(ScorecardError::ConfigParse(
                "output.report_suffix must not be empty".to_string(),
            ));
        }
        if suffix.contains(['/', '\\']) {
            return Err(ScorecardError::ConfigParse(format!(
                "output.report_suffix must not contain path separators: {suffix}"
            )));
        }

        let render = self.render_settings();
        if !(20.0..=170.0).contains(&render.bar_width_mm) {
            return Err(ScorecardError::ConfigParse(format!(
                "render.bar_width_mm must be between 20 and 170 (found {:.1})",
                render.bar_width_mm
            )));
        }
        if !(40.0..=170.0).contains(&render.radar_width_mm) {
            return Err(ScorecardError::ConfigParse(format!(
                "render.radar_width_mm must be between 40 and 170 (found {:.1})",
                render.radar_width_mm
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ScorecardConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.output_dir(), PathBuf::from("."));
        assert_eq!(cfg.report_suffix(), "Scorecard");
        assert_eq!(cfg.summary(), SummaryFormat::None);
        assert_eq!(cfg.render_settings(), RenderSettings::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let cfg: ScorecardConfig = toml::from_str(
            r#"
[output]
dir = "reports"
report_suffix = "Review"
summary = "json"

[render]
bar_width_mm = 80.0
"#,
        )
        .expect("full config should parse");

        assert_eq!(cfg.output_dir(), PathBuf::from("reports"));
        assert_eq!(cfg.report_suffix(), "Review");
        assert_eq!(cfg.summary(), SummaryFormat::Json);
        assert_eq!(cfg.render_settings().bar_width_mm, 80.0);
        assert_eq!(cfg.render_settings().radar_width_mm, DEFAULT_RADAR_WIDTH_MM);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_suffix_with_separator() {
        let cfg: ScorecardConfig = toml::from_str(
            r#"
[output]
report_suffix = "../escape"
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScorecardError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_blank_suffix() {
        let cfg: ScorecardConfig = toml::from_str(
            r#"
[output]
report_suffix = "  "
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScorecardError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_out_of_range_widths() {
        let cfg: ScorecardConfig = toml::from_str(
            r#"
[render]
radar_width_mm = 300.0
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScorecardError::ConfigParse(_))));
    }

    #[test]
    fn unknown_summary_format_fails_to_parse() {
        let result: Result<ScorecardConfig, _> = toml::from_str(
            r#"
[output]
summary = "sarif"
"#,
        );
        assert!(result.is_err());
    }
}
