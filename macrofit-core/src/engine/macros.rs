use crate::models::{
    MacroBreakdown, NutritionProfile, ProfileError, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};

/// Split a calorie target into protein, fat, and net-carb grams.
///
/// Protein is set from bodyweight (1 g per lb), fat takes one third of
/// the calories, and carbs get whatever remains. The remainder can go
/// negative when the target is too low to cover protein and fat; it is
/// propagated so the split still reproduces the target exactly.
pub fn compute_macros(
    profile: &NutritionProfile,
    calories: f64,
) -> Result<MacroBreakdown, ProfileError> {
    profile.validate()?;

    let protein_g = profile.weight_lbs();
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = calories / 3.0;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let carb_kcal = calories - protein_kcal - fat_kcal;
    let carbs_g = carb_kcal / KCAL_PER_G_CARBS;

    Ok(MacroBreakdown::new(protein_g, fat_g, carbs_g, calories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_daily_calories;
    use crate::models::{ActivityLevel, Goal, Sex};

    fn profile(weight_kg: f64) -> NutritionProfile {
        NutritionProfile::new(
            weight_kg,
            180.0,
            25,
            Sex::Male,
            ActivityLevel::Active,
            Goal::Maintenance,
        )
        .unwrap()
    }

    #[test]
    fn test_reference_split() {
        let macros = compute_macros(&profile(80.0), 2978.25).unwrap();
        assert_eq!(macros.protein_g, 176.0);
        assert_eq!(macros.fat_g, 2978.25 / 3.0 / 9.0);
        assert_eq!(macros.carbs_g, (2978.25 - 704.0 - 2978.25 / 3.0) / 4.0);
        assert_eq!(macros.calories, 2978.25);
    }

    #[test]
    fn test_consistency_law() {
        for (weight, activity, goal) in [
            (50.0, ActivityLevel::Sedentary, Goal::FatLoss),
            (68.18, ActivityLevel::LowActive, Goal::Maintenance),
            (80.0, ActivityLevel::Active, Goal::Maintenance),
            (90.91, ActivityLevel::HighActive, Goal::MuscleGain),
            (120.0, ActivityLevel::Active, Goal::MuscleGain),
        ] {
            let p =
                NutritionProfile::new(weight, 180.0, 25, Sex::Male, activity, goal).unwrap();
            let calories = compute_daily_calories(&p).unwrap();
            let macros = compute_macros(&p, calories).unwrap();
            let recomputed = macros.protein_kcal() + macros.fat_kcal() + macros.carbs_kcal();
            assert!(
                (recomputed - calories).abs() < 1e-6,
                "{} vs {} for {} kg",
                recomputed,
                calories,
                weight
            );
        }
    }

    #[test]
    fn test_negative_carbs_propagated_not_clamped() {
        // Heavy bodyweight with a tiny calorie target: protein alone
        // overshoots the calories left after fat.
        let macros = compute_macros(&profile(120.0), 1200.0).unwrap();
        assert!(macros.carbs_g < 0.0);
        let recomputed = macros.protein_kcal() + macros.fat_kcal() + macros.carbs_kcal();
        assert!((recomputed - 1200.0).abs() < 1e-6);
    }

    #[test]
    fn test_protein_tracks_bodyweight_only() {
        let at_2000 = compute_macros(&profile(80.0), 2000.0).unwrap();
        let at_3000 = compute_macros(&profile(80.0), 3000.0).unwrap();
        assert_eq!(at_2000.protein_g, at_3000.protein_g);
        assert!(at_3000.fat_g > at_2000.fat_g);
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let bad = NutritionProfile {
            weight_kg: 80.0,
            height_cm: 0.0,
            age: 25,
            sex: Sex::Male,
            activity_level: ActivityLevel::Active,
            goal: Goal::Maintenance,
        };
        assert_eq!(
            compute_macros(&bad, 2500.0).unwrap_err(),
            ProfileError::InvalidHeight(0.0)
        );
    }
}
