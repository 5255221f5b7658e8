use crate::types::scoring::{Explanation, Score};

pub fn explain(score: Score) -> Explanation {
    let value = score.value();
    if value <= 3.0 {
        Explanation::Low
    } else if value <= 6.0 {
        Explanation::Medium
    } else {
        Explanation::High
    }
}
