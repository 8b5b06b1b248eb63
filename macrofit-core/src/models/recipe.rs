use serde::{Deserialize, Serialize};
use std::fmt;

use super::nutrient::Nutrient;

/// Nutrient names the totaler tracks; every other name is ignored.
pub const TRACKED_NUTRIENTS: [&str; 4] = ["Calories", "Fat", "Net Carbohydrates", "Protein"];

/// One parsed ingredient line as the nutrition lookup service returns
/// it: the recognized food, the parsed quantity, and its nutrient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            nutrients: Vec::new(),
        }
    }

    pub fn with_nutrients(mut self, nutrients: Vec<Nutrient>) -> Self {
        self.nutrients = nutrients;
        self
    }

    /// Sum of this record's amounts for one nutrient name.
    pub fn nutrient_amount(&self, name: &str) -> f64 {
        self.nutrients
            .iter()
            .filter(|n| n.name == name)
            .map(|n| n.amount)
            .sum()
    }
}

impl fmt::Display for FoodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} {}", self.amount, self.name)
        } else {
            write!(f, "{} {} {}", self.amount, self.unit, self.name)
        }
    }
}

/// Totals of the four tracked nutrients across a set of ingredients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecipeTotals {
    pub calories: f64,
    pub fat_g: f64,
    pub net_carbs_g: f64,
    pub protein_g: f64,
}

impl RecipeTotals {
    /// Totals scaled down to one of `servings` portions.
    pub fn per_serving(&self, servings: u32) -> RecipeTotals {
        let n = servings.max(1) as f64;
        RecipeTotals {
            calories: self.calories / n,
            fat_g: self.fat_g / n,
            net_carbs_g: self.net_carbs_g / n,
            protein_g: self.protein_g / n,
        }
    }
}

impl fmt::Display for RecipeTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calories:          {:.0} kcal", self.calories)?;
        writeln!(f, "Fat:               {:.1} g", self.fat_g)?;
        writeln!(f, "Net Carbohydrates: {:.1} g", self.net_carbs_g)?;
        write!(f, "Protein:           {:.1} g", self.protein_g)
    }
}

/// Total the four tracked nutrients across all records, ignoring every
/// other nutrient name in their lists.
pub fn total_nutrients(records: &[FoodRecord]) -> RecipeTotals {
    let mut totals = RecipeTotals::default();
    for record in records {
        for nutrient in &record.nutrients {
            match nutrient.name.as_str() {
                "Calories" => totals.calories += nutrient.amount,
                "Fat" => totals.fat_g += nutrient.amount,
                "Net Carbohydrates" => totals.net_carbs_g += nutrient.amount,
                "Protein" => totals.protein_g += nutrient.amount,
                _ => {}
            }
        }
    }
    totals
}

/// A user-submitted recipe awaiting the caller's storage: free-text
/// metadata plus the looked-up ingredient records it was totaled from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    pub description: String,
    pub instructions: String,
    pub ingredients: Vec<FoodRecord>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        Self {
            name: name.into(),
            servings,
            description: String::new(),
            instructions: String::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<FoodRecord>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn totals(&self) -> RecipeTotals {
        total_nutrients(&self.ingredients)
    }
}
