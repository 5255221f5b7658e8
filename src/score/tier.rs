use crate::types::report::Tier;

const TIER_THRESHOLDS: [(f64, Tier); 3] = [
    (90.0, Tier::Outstanding),
    (75.0, Tier::Strong),
    (50.0, Tier::NeedsImprovement),
];

pub fn recommend(final_score: f64) -> Tier {
    TIER_THRESHOLDS
        .iter()
        .find(|(threshold, _)| final_score >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::HighRisk)
}
