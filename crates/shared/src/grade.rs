//! Qualitative grade tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Fail,
    Passing,
    Good,
    VeryGood,
    Excellent,
    Unrated,
}

impl Tier {
    /// Map a numeric grade to its tier.
    ///
    /// The bands are `< 60`, `60..=75`, `76..=85`, `86..=90` and `> 90`. Values
    /// between two integer bands (75.5, say) belong to the higher one, so the
    /// real line is covered without gaps. A missing grade or NaN is unrated.
    pub fn classify(grade: Option<f64>) -> Self {
        match grade {
            None => Self::Unrated,
            Some(g) if g.is_nan() => Self::Unrated,
            Some(g) if g < 60.0 => Self::Fail,
            Some(g) if g <= 75.0 => Self::Passing,
            Some(g) if g <= 85.0 => Self::Good,
            Some(g) if g <= 90.0 => Self::VeryGood,
            Some(_) => Self::Excellent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Passing => "Passing",
            Self::Good => "Good",
            Self::VeryGood => "VeryGood",
            Self::Excellent => "Excellent",
            Self::Unrated => "Unrated",
        }
    }

    /// Style token for renderers; empty for unrated grades.
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Fail => "grade-fail",
            Self::Passing => "grade-passing",
            Self::Good => "grade-good",
            Self::VeryGood => "grade-very-good",
            Self::Excellent => "grade-excellent",
            Self::Unrated => "",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_edges() {
        let cases = [
            (59.0, Tier::Fail),
            (59.99, Tier::Fail),
            (60.0, Tier::Passing),
            (75.0, Tier::Passing),
            (75.5, Tier::Good),
            (76.0, Tier::Good),
            (85.0, Tier::Good),
            (86.0, Tier::VeryGood),
            (90.0, Tier::VeryGood),
            (90.01, Tier::Excellent),
            (100.0, Tier::Excellent),
            (-5.0, Tier::Fail),
        ];
        for (grade, expected) in cases {
            assert_eq!(Tier::classify(Some(grade)), expected, "grade {grade}");
        }
    }

    #[test]
    fn missing_grade_is_unrated() {
        assert_eq!(Tier::classify(None), Tier::Unrated);
        assert_eq!(Tier::classify(Some(f64::NAN)), Tier::Unrated);
        assert_eq!(Tier::Unrated.style_class(), "");
    }

    #[test]
    fn labels_match_style_tokens() {
        assert_eq!(Tier::VeryGood.label(), "VeryGood");
        assert_eq!(Tier::VeryGood.style_class(), "grade-very-good");
        assert_eq!(Tier::Excellent.to_string(), "Excellent");
    }

    fn band_holds(grade: f64, tier: Tier) -> bool {
        match tier {
            Tier::Fail => grade < 60.0,
            Tier::Passing => (60.0..=75.0).contains(&grade),
            Tier::Good => grade > 75.0 && grade <= 85.0,
            Tier::VeryGood => grade > 85.0 && grade <= 90.0,
            Tier::Excellent => grade > 90.0,
            Tier::Unrated => false,
        }
    }

    proptest! {
        #[test]
        fn every_finite_grade_lands_in_exactly_one_band(grade in -1.0e6f64..1.0e6f64) {
            let tier = Tier::classify(Some(grade));
            prop_assert_ne!(tier, Tier::Unrated);
            prop_assert!(band_holds(grade, tier));

            let holding = [Tier::Fail, Tier::Passing, Tier::Good, Tier::VeryGood, Tier::Excellent]
                .into_iter()
                .filter(|candidate| band_holds(grade, *candidate))
                .count();
            prop_assert_eq!(holding, 1);
        }

        #[test]
        fn tiers_are_monotonic(a in 0.0f64..120.0, b in 0.0f64..120.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(Tier::classify(Some(low))) <= rank(Tier::classify(Some(high))));
        }
    }

    fn rank(tier: Tier) -> u8 {
        match tier {
            Tier::Fail => 0,
            Tier::Passing => 1,
            Tier::Good => 2,
            Tier::VeryGood => 3,
            Tier::Excellent => 4,
            Tier::Unrated => 5,
        }
    }
}
