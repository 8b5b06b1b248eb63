use serde::{Deserialize, Serialize};
use std::fmt;

use super::macros::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// The four fixed meal slots of a daily plan, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealSlot {
    PostWorkoutShake,
    PostWorkoutMeal,
    AnytimeMeal1,
    AnytimeMeal2,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSlot::PostWorkoutShake => write!(f, "Post-workout shake"),
            MealSlot::PostWorkoutMeal => write!(f, "Post-workout meal"),
            MealSlot::AnytimeMeal1 => write!(f, "Anytime meal 1"),
            MealSlot::AnytimeMeal2 => write!(f, "Anytime meal 2"),
        }
    }
}

/// One line of an illustrative recipe: how much of what.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{:.1} {}", self.amount, self.name)
        } else {
            write!(f, "{:.1} {} {}", self.amount, self.unit, self.name)
        }
    }
}

/// Macros assigned to one meal slot.
///
/// `calories` is recomputed from this meal's own grams at 4/4/9 kcal per
/// gram, so the four meals' calories need not sum exactly to the daily
/// target the macros were split from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealAllocation {
    pub slot: MealSlot,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Vec<Ingredient>>,
}

impl MealAllocation {
    pub fn new(slot: MealSlot, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            slot,
            protein_g,
            carbs_g,
            fat_g,
            calories: protein_g * KCAL_PER_G_PROTEIN
                + carbs_g * KCAL_PER_G_CARBS
                + fat_g * KCAL_PER_G_FAT,
            recipe: None,
        }
    }

    pub fn with_recipe(mut self, recipe: Vec<Ingredient>) -> Self {
        self.recipe = Some(recipe);
        self
    }
}

impl fmt::Display for MealAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.slot)?;
        writeln!(
            f,
            "  {:.0} kcal | protein {:.1} g | net carbs {:.1} g | fat {:.1} g",
            self.calories, self.protein_g, self.carbs_g, self.fat_g
        )?;
        if let Some(recipe) = &self.recipe {
            writeln!(f, "  Example:")?;
            for ingredient in recipe {
                writeln!(f, "    - {}", ingredient)?;
            }
        }
        Ok(())
    }
}

/// Bodyweight tier driving the allocator's fixed shake-protein and
/// anytime-meal-carb quantities. Classified in pounds at 2.2 lb/kg:
/// under 150 lb, 150 up to (not including) 200 lb, and 200 lb or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightTier {
    Under150,
    From150To200,
    Over200,
}

impl WeightTier {
    pub fn from_lbs(lbs: f64) -> Self {
        if lbs < 150.0 {
            WeightTier::Under150
        } else if lbs < 200.0 {
            WeightTier::From150To200
        } else {
            WeightTier::Over200
        }
    }

    /// Protein grams in the post-workout shake for this tier.
    pub fn shake_protein_g(&self) -> f64 {
        match self {
            WeightTier::Under150 => 22.0,
            WeightTier::From150To200 => 33.0,
            WeightTier::Over200 => 44.0,
        }
    }

    /// Net carb grams in each anytime meal for this tier.
    pub fn anytime_carbs_g(&self) -> f64 {
        match self {
            WeightTier::Under150 => 30.0,
            WeightTier::From150To200 => 40.0,
            WeightTier::Over200 => 50.0,
        }
    }
}

impl fmt::Display for WeightTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightTier::Under150 => write!(f, "under 150 lb"),
            WeightTier::From150To200 => write!(f, "150-200 lb"),
            WeightTier::Over200 => write!(f, "over 200 lb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_display() {
        let ingredient = Ingredient::new("chicken breast", 224.8, "g");
        assert_eq!(format!("{}", ingredient), "224.8 g chicken breast");
    }

    #[test]
    fn test_ingredient_display_no_unit() {
        let ingredient = Ingredient::new("whole eggs", 2.0, "");
        assert_eq!(format!("{}", ingredient), "2.0 whole eggs");
    }

    #[test]
    fn test_meal_allocation_recomputes_calories() {
        let meal = MealAllocation::new(MealSlot::PostWorkoutMeal, 40.0, 100.0, 10.0);
        assert_eq!(meal.calories, 40.0 * 4.0 + 100.0 * 4.0 + 10.0 * 9.0);
        assert!(meal.recipe.is_none());
    }

    #[test]
    fn test_meal_allocation_with_recipe() {
        let meal = MealAllocation::new(MealSlot::PostWorkoutShake, 33.0, 66.0, 0.0)
            .with_recipe(vec![Ingredient::new("protein powder", 1.5, "servings")]);
        assert_eq!(meal.recipe.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_recipe_skipped_in_json_when_absent() {
        let meal = MealAllocation::new(MealSlot::AnytimeMeal2, 40.0, 40.0, 50.0);
        let json = serde_json::to_string(&meal).unwrap();
        assert!(!json.contains("recipe"));
    }

    #[test]
    fn test_weight_tier_boundaries() {
        assert_eq!(WeightTier::from_lbs(149.9), WeightTier::Under150);
        // 150 lb is the first weight of the middle tier
        assert_eq!(WeightTier::from_lbs(150.0), WeightTier::From150To200);
        assert_eq!(WeightTier::from_lbs(199.9), WeightTier::From150To200);
        // 200 lb is the first weight of the top tier
        assert_eq!(WeightTier::from_lbs(200.0), WeightTier::Over200);
    }

    #[test]
    fn test_weight_tier_constants() {
        assert_eq!(WeightTier::Under150.shake_protein_g(), 22.0);
        assert_eq!(WeightTier::From150To200.shake_protein_g(), 33.0);
        assert_eq!(WeightTier::Over200.shake_protein_g(), 44.0);

        assert_eq!(WeightTier::Under150.anytime_carbs_g(), 30.0);
        assert_eq!(WeightTier::From150To200.anytime_carbs_g(), 40.0);
        assert_eq!(WeightTier::Over200.anytime_carbs_g(), 50.0);
    }

    #[test]
    fn test_meal_slot_display() {
        assert_eq!(format!("{}", MealSlot::PostWorkoutShake), "Post-workout shake");
        assert_eq!(format!("{}", MealSlot::AnytimeMeal2), "Anytime meal 2");
    }

    #[test]
    fn test_meal_allocation_json_roundtrip() {
        let meal = MealAllocation::new(MealSlot::AnytimeMeal1, 47.7, 40.0, 52.2)
            .with_recipe(vec![Ingredient::new("baby carrots", 588.2, "g")]);
        let json = serde_json::to_string(&meal).unwrap();
        let parsed: MealAllocation = serde_json::from_str(&json).unwrap();
        assert_eq!(meal, parsed);
    }
}
