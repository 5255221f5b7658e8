use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Outstanding,
    Strong,
    NeedsImprovement,
    HighRisk,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding",
            Self::Strong => "Strong",
            Self::NeedsImprovement => "Needs Improvement",
            Self::HighRisk => "High Risk",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding Team: Highly investable!",
            Self::Strong => "Strong Team: Worth considering with minor improvements.",
            Self::NeedsImprovement => "Needs Improvement: Promising but requires significant work.",
            Self::HighRisk => "High Risk: Major concerns. Needs substantial changes.",
        }
    }
}
