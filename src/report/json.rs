use crate::types::report::Tier;
use crate::types::scoring::{EvaluationRun, Explanation, ScoreCard};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    startup: &'a str,
    generated_at: String,
    final_score: f64,
    tier: Tier,
    recommendation: &'static str,
    categories: Vec<CategorySummary<'a>>,
}

#[derive(Debug, Serialize)]
struct CategorySummary<'a> {
    name: &'a str,
    weight_percent: u32,
    weight: f64,
    average: f64,
    weighted: f64,
    criteria: Vec<CriterionSummary>,
}

#[derive(Debug, Serialize)]
struct CriterionSummary {
    name: &'static str,
    score: f64,
    explanation: Explanation,
    text: &'static str,
}

pub fn to_json(run: &EvaluationRun, card: &ScoreCard) -> Result<String, serde_json::Error> {
    let categories = run
        .categories
        .iter()
        .zip(&card.categories)
        .map(|(entry, score)| CategorySummary {
            name: &score.name,
            weight_percent: score.weight_percent,
            weight: entry.category.weight(),
            average: score.average,
            weighted: score.weighted,
            criteria: entry
                .assessments
                .iter()
                .map(|assessment| CriterionSummary {
                    name: assessment.criterion.name,
                    score: assessment.score.value(),
                    explanation: assessment.explanation,
                    text: assessment.explanation.text(),
                })
                .collect(),
        })
        .collect();

    let summary = Summary {
        startup: &run.startup_name,
        generated_at: Utc::now().to_rfc3339(),
        final_score: card.final_score,
        tier: card.tier,
        recommendation: card.tier.recommendation(),
        categories,
    };
    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score;
    use crate::types::rubric::RUBRIC;
    use crate::types::scoring::Score;

    #[test]
    fn json_summary_contains_final_score_and_criteria() {
        let scores = RUBRIC
            .iter()
            .map(|category| {
                category
                    .criteria
                    .iter()
                    .map(|_| Score::new(8.0).expect("score should be in range"))
                    .collect()
            })
            .collect::<Vec<_>>();
        let run = score::build_run("Acme", &scores).expect("run should build");
        let card = score::aggregate(&run);

        let rendered = to_json(&run, &card).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json should parse");

        assert_eq!(value["startup"], "Acme");
        assert_eq!(value["final_score"], 80.0);
        assert_eq!(value["tier"], "strong");
        assert_eq!(value["categories"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["categories"][0]["criteria"][0]["name"], "Vision Clarity");
        assert_eq!(value["categories"][0]["criteria"][0]["explanation"], "high");
        assert!(value["generated_at"].as_str().is_some());
    }
}
