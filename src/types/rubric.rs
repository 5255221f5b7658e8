#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Share of the final score in whole percent; all categories sum to 100.
    pub weight_percent: u32,
    pub criteria: &'static [Criterion],
}

impl Category {
    pub fn weight(&self) -> f64 {
        f64::from(self.weight_percent) / 100.0
    }
}

const fn criterion(name: &'static str, description: &'static str) -> Criterion {
    Criterion { name, description }
}

pub const RUBRIC: &[Category] = &[
    Category {
        name: "Founder Traits",
        weight_percent: 30,
        criteria: &[
            criterion(
                "Vision Clarity",
                "How well the founders articulate their vision, problem, and solution.",
            ),
            criterion(
                "Leadership Presence",
                "Can the founder inspire confidence and drive execution?",
            ),
            criterion(
                "Passion & Industry Knowledge",
                "Does the founder have deep knowledge of the market?",
            ),
            criterion(
                "Soft Skills & Coachability",
                "Can the founder take feedback and adapt quickly?",
            ),
        ],
    },
    Category {
        name: "Execution Ability",
        weight_percent: 30,
        criteria: &[
            criterion(
                "Hustle & Problem-Solving",
                "Has the team executed anything tangible? Can they overcome challenges?",
            ),
            criterion(
                "Team Completeness",
                "Does the team cover critical business & tech roles?",
            ),
            criterion(
                "Market Sentiment",
                "What do customers, industry peers, and experts say about the startup?",
            ),
            criterion(
                "Team Balance & Dynamics",
                "Do the co-founders work well together?",
            ),
        ],
    },
    Category {
        name: "Industry & Network Strength",
        weight_percent: 25,
        criteria: &[
            criterion(
                "Industry Experience",
                "Does the team have relevant experience in this sector?",
            ),
            criterion(
                "Network & Ability to Attract Talent",
                "Can the founders bring in top advisors, employees, or investors?",
            ),
        ],
    },
    Category {
        name: "Investor Fit",
        weight_percent: 15,
        criteria: &[criterion(
            "Investor Confidence",
            "Does the investor feel strongly about this team?",
        )],
    },
];

pub fn criteria_count() -> usize {
    RUBRIC.iter().map(|category| category.criteria.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric_has_four_categories_and_eleven_criteria() {
        assert_eq!(RUBRIC.len(), 4);
        assert_eq!(criteria_count(), 11);
    }

    #[test]
    fn weights_sum_to_exactly_one() {
        let percent: u32 = RUBRIC.iter().map(|category| category.weight_percent).sum();
        assert_eq!(percent, 100);

        let weights = RUBRIC.iter().map(Category::weight).collect::<Vec<_>>();
        assert_eq!(weights, vec![0.30, 0.30, 0.25, 0.15]);
    }

    #[test]
    fn rubric_order_is_fixed() {
        let names = RUBRIC.iter().map(|category| category.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Founder Traits",
                "Execution Ability",
                "Industry & Network Strength",
                "Investor Fit"
            ]
        );
        assert_eq!(RUBRIC[0].criteria[0].name, "Vision Clarity");
        assert_eq!(RUBRIC[3].criteria[0].name, "Investor Confidence");
    }
}
