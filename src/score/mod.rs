pub mod explain;
pub mod tier;

use crate::error::{Result, ScorecardError};
use crate::types::rubric::{Category, RUBRIC};
use crate::types::scoring::{
    Assessment, CategoryAssessment, CategoryScore, EvaluationRun, Score, ScoreCard, MAX_SCORE,
};

/// Pairs raw scores with the rubric, in rubric order, attaching explanations.
/// `scores[c][k]` belongs to criterion `k` of category `c`.
pub fn build_run(startup_name: &str, scores: &[Vec<Score>]) -> Result<EvaluationRun> {
    if scores.len() > RUBRIC.len() {
        return Err(ScorecardError::UnexpectedScore(format!(
            "category #{}",
            RUBRIC.len() + 1
        )));
    }

    let mut categories = Vec::with_capacity(RUBRIC.len());
    for (index, category) in RUBRIC.iter().enumerate() {
        let category_scores = scores.get(index).map(Vec::as_slice).unwrap_or(&[]);
        if category_scores.len() > category.criteria.len() {
            return Err(ScorecardError::UnexpectedScore(format!(
                "{} criterion #{}",
                category.name,
                category.criteria.len() + 1
            )));
        }

        let mut assessments = Vec::with_capacity(category.criteria.len());
        for (position, criterion) in category.criteria.iter().enumerate() {
            let score = category_scores.get(position).copied().ok_or_else(|| {
                ScorecardError::MissingScore(format!("{} / {}", category.name, criterion.name))
            })?;
            assessments.push(Assessment {
                criterion,
                score,
                explanation: explain::explain(score),
            });
        }
        categories.push(CategoryAssessment {
            category,
            assessments,
        });
    }

    Ok(EvaluationRun {
        startup_name: startup_name.to_string(),
        categories,
    })
}

pub fn category_average(assessments: &[Assessment]) -> f64 {
    if assessments.is_empty() {
        return 0.0;
    }
    let total: f64 = assessments
        .iter()
        .map(|assessment| assessment.score.value())
        .sum();
    total / assessments.len() as f64
}

/// Contribution of one category to the 0-100 final score.
pub fn weighted_contribution(average: f64, category: &Category) -> f64 {
    average * f64::from(category.weight_percent) / MAX_SCORE
}

pub fn aggregate(run: &EvaluationRun) -> ScoreCard {
    let categories = run
        .categories
        .iter()
        .map(|entry| {
            let average = category_average(&entry.assessments);
            CategoryScore {
                name: entry.category.name.to_string(),
                weight_percent: entry.category.weight_percent,
                average,
                weighted: weighted_contribution(average, entry.category),
            }
        })
        .collect::<Vec<_>>();

    let final_score: f64 = categories.iter().map(|category| category.weighted).sum();
    let tier = tier::recommend(final_score);
    tracing::info!(final_score, tier = tier.label(), "aggregated scorecard");

    ScoreCard {
        categories,
        final_score,
        tier,
    }
}
