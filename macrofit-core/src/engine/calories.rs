use crate::models::{NutritionProfile, ProfileError};

/// Daily calorie target from the Mifflin-St Jeor equation.
///
/// The adjustments are sequential and order-sensitive: the sex offset is
/// added to the base before the activity multiplier scales it, and the
/// goal adjustment lands last, unscaled.
pub fn compute_daily_calories(profile: &NutritionProfile) -> Result<f64, ProfileError> {
    profile.validate()?;

    let mut kcals =
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    kcals += profile.sex.bmr_offset();
    kcals *= profile.activity_level.multiplier();
    kcals += profile.goal.calorie_adjustment();

    Ok(kcals)
}
