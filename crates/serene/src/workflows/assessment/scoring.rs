use std::collections::HashSet;

use super::domain::{AxisScores, Response};

/// Sum response scores per axis.
///
/// Order does not matter. A repeated `question_id` only counts the first time it
/// appears; questions without a response contribute nothing.
pub fn score(responses: &[Response]) -> AxisScores {
    let mut seen = HashSet::with_capacity(responses.len());
    let mut scores = AxisScores::default();

    for response in responses {
        if seen.insert(response.question_id) {
            scores.add(response.dichotomy, response.score);
        }
    }

    scores
}
