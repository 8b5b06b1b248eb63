use crate::models::{
    Ingredient, MacroBreakdown, MealAllocation, MealSlot, NutritionProfile, ProfileError,
    WeightTier,
};

// Fixed compositions behind the illustrative recipes.
const POWDER_PROTEIN_PER_SERVING: f64 = 22.0;
const ALMOND_MILK_CARBS_PER_8_OZ: f64 = 18.0;
const CHICKEN_PROTEIN_PER_10_G: f64 = 2.12;
const CHICKEN_FAT_PER_10_G: f64 = 0.26;
const RICE_CARBS_PER_100_G: f64 = 28.0;
const EGG_COUNT: f64 = 2.0;
const EGG_PROTEIN_G: f64 = 6.3;
const EGG_FAT_G: f64 = 5.3;
const TURKEY_PROTEIN_PER_10_G: f64 = 1.87;
const TURKEY_FAT_PER_10_G: f64 = 0.84;
const OIL_FAT_PER_TBSP: f64 = 13.6;
const CARROT_CARBS_PER_10_G: f64 = 0.68;

/// Split a day's macros into the four fixed meal slots, in serving order:
/// post-workout shake, post-workout meal, then two anytime meals.
///
/// The shake's protein and the anytime meals' carbs come from the
/// bodyweight tier; everything else is the remainder of the daily totals,
/// so each macro sums back to its daily figure across the four meals.
/// Per-meal calories are recomputed from each meal's own grams and are
/// allowed to drift from the daily target.
pub fn compute_meal_plan(
    profile: &NutritionProfile,
    macros: &MacroBreakdown,
) -> Result<Vec<MealAllocation>, ProfileError> {
    profile.validate()?;

    let tier = WeightTier::from_lbs(profile.weight_lbs());

    let shake_protein = tier.shake_protein_g();
    let shake_carbs = 2.0 * shake_protein;
    let shake_fat = 0.0;

    // The shake's protein comes off the top; the three solid meals split
    // the rest evenly.
    let meal_protein = (macros.protein_g - shake_protein) / 3.0;

    let anytime_carbs = tier.anytime_carbs_g();
    let postworkout_carbs = macros.carbs_g - shake_carbs - 2.0 * anytime_carbs;

    // Fat in the post-workout meal rides along with its protein source,
    // modeled on skinless chicken breast.
    let chicken_g = meal_protein * 10.0 / CHICKEN_PROTEIN_PER_10_G;
    let postworkout_fat = chicken_g * CHICKEN_FAT_PER_10_G / 10.0;

    let anytime_fat = (macros.fat_g - shake_fat - postworkout_fat) / 2.0;

    let shake = MealAllocation::new(MealSlot::PostWorkoutShake, shake_protein, shake_carbs, shake_fat)
        .with_recipe(shake_recipe(shake_protein, shake_carbs));

    let postworkout = MealAllocation::new(
        MealSlot::PostWorkoutMeal,
        meal_protein,
        postworkout_carbs,
        postworkout_fat,
    )
    .with_recipe(postworkout_recipe(chicken_g, postworkout_carbs));

    let anytime1 = MealAllocation::new(MealSlot::AnytimeMeal1, meal_protein, anytime_carbs, anytime_fat)
        .with_recipe(anytime_recipe(meal_protein, anytime_carbs, anytime_fat));

    let anytime2 = MealAllocation::new(MealSlot::AnytimeMeal2, meal_protein, anytime_carbs, anytime_fat);

    Ok(vec![shake, postworkout, anytime1, anytime2])
}

/// A negative gram amount of food is meaningless; recipes floor at zero
/// even when the macro fields they illustrate go negative.
fn amount(grams: f64) -> f64 {
    grams.max(0.0)
}

fn shake_recipe(protein_g: f64, carbs_g: f64) -> Vec<Ingredient> {
    vec![
        Ingredient::new(
            "protein powder",
            amount(protein_g / POWDER_PROTEIN_PER_SERVING),
            "servings",
        ),
        Ingredient::new(
            "chocolate almond milk",
            amount(carbs_g / ALMOND_MILK_CARBS_PER_8_OZ * 8.0),
            "fl oz",
        ),
    ]
}

fn postworkout_recipe(chicken_g: f64, carbs_g: f64) -> Vec<Ingredient> {
    vec![
        Ingredient::new("chicken breast", amount(chicken_g), "g"),
        Ingredient::new(
            "cooked white rice",
            amount(carbs_g / RICE_CARBS_PER_100_G * 100.0),
            "g",
        ),
    ]
}

/// Solve an anytime meal from fixed-composition foods: two whole eggs
/// are given, ground turkey covers the remaining protein, grapeseed oil
/// tops up the remaining fat, and baby carrots carry the carbs.
fn anytime_recipe(protein_g: f64, carbs_g: f64, fat_g: f64) -> Vec<Ingredient> {
    let egg_protein = EGG_COUNT * EGG_PROTEIN_G;
    let egg_fat = EGG_COUNT * EGG_FAT_G;

    let turkey_g = amount((protein_g - egg_protein) * 10.0 / TURKEY_PROTEIN_PER_10_G);
    let turkey_fat = turkey_g * TURKEY_FAT_PER_10_G / 10.0;

    let oil_tbsp = amount((fat_g - egg_fat - turkey_fat) / OIL_FAT_PER_TBSP);

    vec![
        Ingredient::new("grapeseed oil", oil_tbsp, "tbsp"),
        Ingredient::new("whole eggs", EGG_COUNT, ""),
        Ingredient::new(
            "93% lean ground turkey",
            turkey_g,
            "g",
        ),
        Ingredient::new(
            "baby carrots",
            amount(carbs_g * 10.0 / CARROT_CARBS_PER_10_G),
            "g",
        ),
    ]
}
