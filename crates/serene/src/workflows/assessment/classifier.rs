use super::domain::{AxisScores, Dichotomy, TypeCode};

/// Map axis sums to a type code. A sum of exactly zero keeps the first-listed letter.
pub fn classify(scores: &AxisScores) -> TypeCode {
    let letters = Dichotomy::ordered().map(|dichotomy| {
        if scores.get(dichotomy) >= 0 {
            dichotomy.positive()
        } else {
            dichotomy.negative()
        }
    });

    TypeCode::from_letters(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_axes_resolve_to_first_letters() {
        assert_eq!(classify(&AxisScores::default()).as_str(), "ESTJ");
    }

    #[test]
    fn each_axis_is_decided_independently() {
        assert_eq!(classify(&AxisScores::new(-1, 0, 2, -28)).as_str(), "ISTP");
        assert_eq!(classify(&AxisScores::new(1, -1, -1, 1)).as_str(), "ENFJ");
    }

    #[test]
    fn extremes_map_to_opposite_corners() {
        assert_eq!(classify(&AxisScores::new(28, 28, 28, 28)).as_str(), "ESTJ");
        assert_eq!(classify(&AxisScores::new(-28, -28, -28, -28)).as_str(), "INFP");
    }
}
