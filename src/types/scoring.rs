use crate::types::report::Tier;
use crate::types::rubric::{Category, Criterion};
use serde::Serialize;
use std::fmt;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRejection {
    NotANumber,
    OutOfRange,
}

impl ScoreRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotANumber => "Invalid input. Please enter a number.",
            Self::OutOfRange => "Invalid score. Please enter a number between 1 and 10.",
        }
    }
}

impl Score {
    pub fn new(value: f64) -> Result<Self, ScoreRejection> {
        // NaN fails both comparisons and lands here too.
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreRejection::OutOfRange)
        }
    }

    pub fn parse(input: &str) -> Result<Self, ScoreRejection> {
        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|_| ScoreRejection::NotANumber)?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Explanation {
    Low,
    Medium,
    High,
}

impl Explanation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Low => "Needs significant improvement. This area is a major concern.",
            Self::Medium => "Average performance. Some strengths, but also some weaknesses.",
            Self::High => "Strong performance. This is a key strength of the team.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assessment {
    pub criterion: &'static Criterion,
    pub score: Score,
    pub explanation: Explanation,
}

#[derive(Debug, Clone)]
pub struct CategoryAssessment {
    pub category: &'static Category,
    pub assessments: Vec<Assessment>,
}

#[derive(Debug, Clone)]
pub struct EvaluationRun {
    pub startup_name: String,
    pub categories: Vec<CategoryAssessment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub name: String,
    pub weight_percent: u32,
    pub average: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub categories: Vec<CategoryScore>,
    pub final_score: f64,
    pub tier: Tier,
}

impl ScoreCard {
    /// Unweighted category averages, labelled, in rubric order.
    pub fn radar_series(&self) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .map(|category| (category.name.clone(), category.average))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_bounds_and_fractions() {
        assert_eq!(Score::parse("1").map(Score::value), Ok(1.0));
        assert_eq!(Score::parse("10").map(Score::value), Ok(10.0));
        assert_eq!(Score::parse(" 7.5 ").map(Score::value), Ok(7.5));
    }

    #[test]
    fn parse_distinguishes_garbage_from_out_of_range() {
        assert_eq!(Score::parse("abc"), Err(ScoreRejection::NotANumber));
        assert_eq!(Score::parse(""), Err(ScoreRejection::NotANumber));
        assert_eq!(Score::parse("11"), Err(ScoreRejection::OutOfRange));
        assert_eq!(Score::parse("0"), Err(ScoreRejection::OutOfRange));
        assert_eq!(Score::parse("-5"), Err(ScoreRejection::OutOfRange));
        assert_eq!(Score::parse("0.99"), Err(ScoreRejection::OutOfRange));
    }

    #[test]
    fn non_finite_values_are_out_of_range() {
        assert_eq!(Score::parse("NaN"), Err(ScoreRejection::OutOfRange));
        assert_eq!(Score::parse("inf"), Err(ScoreRejection::OutOfRange));
    }

    #[test]
    fn explanation_labels_are_plain_words() {
        assert_eq!(Explanation::Low.label(), "low");
        assert_eq!(Explanation::Medium.label(), "medium");
        assert_eq!(Explanation::High.label(), "high");
    }

    #[test]
    fn display_keeps_one_decimal_for_whole_scores() {
        assert_eq!(Score::parse("8").map(|s| s.to_string()), Ok("8.0".to_string()));
        assert_eq!(Score::parse("6.25").map(|s| s.to_string()), Ok("6.25".to_string()));
    }
}
