//! Nine-box matrix: places an employee on a 3×3 grid of performance (x)
//! against potential (y).
//!
//! Boxes are numbered `potential × 3 + performance + 1` with low = 0, so
//! box 1 is low/low and box 9 is high/high.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;
const MEDIUM_FROM: f64 = 2.5;
const HIGH_FROM: f64 = 3.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Converts a 1–5 review rating: below 2.5 is low, below 3.75 medium, else high.
    pub fn from_rating(rating: f64) -> Result<Band, AppError> {
        if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
            )));
        }
        Ok(if rating < MEDIUM_FROM {
            Band::Low
        } else if rating < HIGH_FROM {
            Band::Medium
        } else {
            Band::High
        })
    }

    fn index(self) -> u8 {
        match self {
            Band::Low => 0,
            Band::Medium => 1,
            Band::High => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NineBoxCategory {
    Underperformer,
    EffectiveContributor,
    SolidPerformer,
    InconsistentPlayer,
    CorePlayer,
    HighPerformer,
    RoughDiamond,
    HighPotential,
    Star,
}

impl NineBoxCategory {
    pub fn label(self) -> &'static str {
        match self {
            NineBoxCategory::Underperformer => "Underperformer",
            NineBoxCategory::EffectiveContributor => "Effective Contributor",
            NineBoxCategory::SolidPerformer => "Solid Performer",
            NineBoxCategory::InconsistentPlayer => "Inconsistent Player",
            NineBoxCategory::CorePlayer => "Core Player",
            NineBoxCategory::HighPerformer => "High Performer",
            NineBoxCategory::RoughDiamond => "Rough Diamond",
            NineBoxCategory::HighPotential => "High Potential",
            NineBoxCategory::Star => "Star",
        }
    }

    pub fn suggested_action(self) -> &'static str {
        match self {
            NineBoxCategory::Underperformer => {
                "Agree a performance improvement plan or consider a better-suited role"
            }
            NineBoxCategory::EffectiveContributor => {
                "Set clearer goals and coach towards consistent delivery"
            }
            NineBoxCategory::SolidPerformer => "Recognise reliability and keep engaged in current role",
            NineBoxCategory::InconsistentPlayer => {
                "Identify blockers and provide targeted coaching"
            }
            NineBoxCategory::CorePlayer => "Develop skills for broader responsibility",
            NineBoxCategory::HighPerformer => "Offer stretch assignments to test potential",
            NineBoxCategory::RoughDiamond => "Pair with a mentor and clarify performance expectations",
            NineBoxCategory::HighPotential => "Accelerate development with a career recommendation",
            NineBoxCategory::Star => "Prepare for promotion and include in succession plans",
        }
    }
}

/// Grid order: index = potential × 3 + performance.
const GRID: [NineBoxCategory; 9] = [
    NineBoxCategory::Underperformer,
    NineBoxCategory::EffectiveContributor,
    NineBoxCategory::SolidPerformer,
    NineBoxCategory::InconsistentPlayer,
    NineBoxCategory::CorePlayer,
    NineBoxCategory::HighPerformer,
    NineBoxCategory::RoughDiamond,
    NineBoxCategory::HighPotential,
    NineBoxCategory::Star,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NineBoxPlacement {
    pub performance: Band,
    pub potential: Band,
    /// 1 – 9
    pub box_number: u8,
    pub category: NineBoxCategory,
    pub label: String,
    pub suggested_action: String,
}

pub fn classify(performance: Band, potential: Band) -> NineBoxPlacement {
    let index = potential.index() * 3 + performance.index();
    let category = GRID[index as usize];
    NineBoxPlacement {
        performance,
        potential,
        box_number: index + 1,
        category,
        label: category.label().to_string(),
        suggested_action: category.suggested_action().to_string(),
    }
}

/// Classifies from 1–5 review ratings.
pub fn classify_ratings(performance: f64, potential: f64) -> Result<NineBoxPlacement, AppError> {
    Ok(classify(
        Band::from_rating(performance)?,
        Band::from_rating(potential)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let star = classify(Band::High, Band::High);
        assert_eq!(star.box_number, 9);
        assert_eq!(star.category, NineBoxCategory::Star);

        let low = classify(Band::Low, Band::Low);
        assert_eq!(low.box_number, 1);
        assert_eq!(low.category, NineBoxCategory::Underperformer);
    }

    #[test]
    fn test_performance_is_x_axis() {
        assert_eq!(
            classify(Band::High, Band::Low).category,
            NineBoxCategory::SolidPerformer
        );
        assert_eq!(
            classify(Band::Low, Band::High).category,
            NineBoxCategory::RoughDiamond
        );
    }

    #[test]
    fn test_box_numbers_are_unique() {
        let bands = [Band::Low, Band::Medium, Band::High];
        let mut seen = Vec::new();
        for perf in bands {
            for pot in bands {
                seen.push(classify(perf, pot).box_number);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_rating_band_thresholds() {
        assert_eq!(Band::from_rating(1.0).unwrap(), Band::Low);
        assert_eq!(Band::from_rating(2.49).unwrap(), Band::Low);
        assert_eq!(Band::from_rating(2.5).unwrap(), Band::Medium);
        assert_eq!(Band::from_rating(3.74).unwrap(), Band::Medium);
        assert_eq!(Band::from_rating(3.75).unwrap(), Band::High);
        assert_eq!(Band::from_rating(5.0).unwrap(), Band::High);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        assert!(Band::from_rating(0.5).is_err());
        assert!(Band::from_rating(5.5).is_err());
        assert!(Band::from_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_classify_ratings() {
        let placement = classify_ratings(4.2, 3.0).unwrap();
        assert_eq!(placement.category, NineBoxCategory::HighPerformer);
        assert_eq!(placement.box_number, 6);
        assert_eq!(placement.label, "High Performer");
    }
}
