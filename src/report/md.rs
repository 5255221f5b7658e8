use crate::types::scoring::{EvaluationRun, ScoreCard};

pub fn to_markdown(run: &EvaluationRun, card: &ScoreCard) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Scorecard: {}\n\n", run.startup_name));
    output.push_str(&format!("Final score: {:.2}/100\n\n", card.final_score));
    output.push_str(&format!(
        "Recommendation: {}\n\n",
        card.tier.recommendation()
    ));

    output.push_str("## Category Scores\n\n");
    output.push_str("| Category | Weight | Average | Contribution |\n");
    output.push_str("|----------|--------|---------|--------------|\n");
    for category in &card.categories {
        output.push_str(&format!(
            "| {} | {}% | {:.2} | {:.2} |\n",
            category.name, category.weight_percent, category.average, category.weighted
        ));
    }
    output.push('\n');

    output.push_str("## Criteria\n");
    for entry in &run.categories {
        output.push_str(&format!("\n### {}\n\n", entry.category.name));
        for assessment in &entry.assessments {
            output.push_str(&format!(
                "- {}: {}/10 ({}) {}\n",
                assessment.criterion.name,
                assessment.score,
                assessment.explanation.label(),
                assessment.explanation.text()
            ));
        }
    }

    output
}
