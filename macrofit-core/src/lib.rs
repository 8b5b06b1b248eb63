//! Macrofit Core Library
//!
//! Shared types and the nutrition engine for Macrofit applications:
//! profile validation, the Mifflin-St Jeor calorie target, the daily
//! macro split, the fixed meal allocations, and totaling of ingredient
//! records from a nutrition lookup service.

pub mod engine;
pub mod models;

pub use engine::{
    compute_daily_calories, compute_daily_plan, compute_macros, compute_meal_plan, DailyPlan,
};
pub use models::{
    total_nutrients, ActivityLevel, FoodRecord, Goal, Ingredient, MacroBreakdown, MealAllocation,
    MealSlot, Nutrient, NutritionProfile, ProfileError, Recipe, RecipeTotals, Sex, WeightTier,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
