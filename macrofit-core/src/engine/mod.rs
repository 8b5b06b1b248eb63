//! The nutrition engine: a pure pipeline from a validated profile to a
//! calorie target, a macro split, and the four fixed meal allocations.
//! Each step validates the profile and takes the previous step's output
//! as an explicit argument, so callers can run any prefix of the chain.

mod calories;
mod macros;
mod meals;

pub use calories::compute_daily_calories;
pub use macros::compute_macros;
pub use meals::compute_meal_plan;

use serde::{Deserialize, Serialize};

use crate::models::{MacroBreakdown, MealAllocation, NutritionProfile, ProfileError};

/// Everything derived from one profile in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPlan {
    pub profile: NutritionProfile,
    pub calories: f64,
    pub macros: MacroBreakdown,
    pub meals: Vec<MealAllocation>,
}

/// Run the full pipeline: calories, then macros, then meal allocations.
pub fn compute_daily_plan(profile: &NutritionProfile) -> Result<DailyPlan, ProfileError> {
    let calories = compute_daily_calories(profile)?;
    let macros = compute_macros(profile, calories)?;
    let meals = compute_meal_plan(profile, &macros)?;
    Ok(DailyPlan {
        profile: profile.clone(),
        calories,
        macros,
        meals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, Sex};

    #[test]
    fn test_daily_plan_chains_the_three_operations() {
        let profile = NutritionProfile::new(
            80.0,
            180.0,
            25,
            Sex::Male,
            ActivityLevel::Active,
            Goal::Maintenance,
        )
        .unwrap();

        let plan = compute_daily_plan(&profile).unwrap();
        assert_eq!(plan.calories, 2978.25);
        assert_eq!(plan.macros.calories, plan.calories);
        assert_eq!(plan.meals.len(), 4);
        assert_eq!(plan.profile, profile);
    }

    #[test]
    fn test_daily_plan_fails_fast_on_invalid_profile() {
        let bad = NutritionProfile {
            weight_kg: 80.0,
            height_cm: -170.0,
            age: 25,
            sex: Sex::Female,
            activity_level: ActivityLevel::LowActive,
            goal: Goal::FatLoss,
        };
        assert!(matches!(
            compute_daily_plan(&bad),
            Err(ProfileError::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_daily_plan_json_roundtrip() {
        let profile = NutritionProfile::new(
            62.0,
            165.0,
            31,
            Sex::Female,
            ActivityLevel::HighActive,
            Goal::MuscleGain,
        )
        .unwrap();
        let plan = compute_daily_plan(&profile).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let parsed: DailyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, parsed);
    }
}
