mod macros;
mod meal;
mod nutrient;
mod profile;
mod recipe;

pub use macros::{MacroBreakdown, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
pub use meal::{Ingredient, MealAllocation, MealSlot, WeightTier};
pub use nutrient::Nutrient;
pub use profile::{ActivityLevel, Goal, NutritionProfile, ProfileError, Sex, LBS_PER_KG};
pub use recipe::{total_nutrients, FoodRecord, Recipe, RecipeTotals, TRACKED_NUTRIENTS};
