use serde::{Deserialize, Serialize};
use std::fmt;

/// Calories per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of net carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// A day's macro targets, derived from a profile and a calorie target.
///
/// Values are derived, never set independently: `calories` is the target
/// the split was computed from, and `protein_g * 4 + fat_g * 9 +
/// carbs_g * 4` reproduces it (up to float rounding). `carbs_g` can be
/// negative when the target is too low to cover protein and fat; the
/// engine propagates that rather than clamping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub calories: f64,
}

impl MacroBreakdown {
    pub fn new(protein_g: f64, fat_g: f64, carbs_g: f64, calories: f64) -> Self {
        Self {
            protein_g,
            fat_g,
            carbs_g,
            calories,
        }
    }

    pub fn protein_kcal(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
    }

    pub fn fat_kcal(&self) -> f64 {
        self.fat_g * KCAL_PER_G_FAT
    }

    pub fn carbs_kcal(&self) -> f64 {
        self.carbs_g * KCAL_PER_G_CARBS
    }
}

impl fmt::Display for MacroBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calories:  {:.0} kcal", self.calories)?;
        writeln!(
            f,
            "Protein:   {:.1} g ({:.0} kcal)",
            self.protein_g,
            self.protein_kcal()
        )?;
        writeln!(
            f,
            "Fat:       {:.1} g ({:.0} kcal)",
            self.fat_g,
            self.fat_kcal()
        )?;
        write!(
            f,
            "Net carbs: {:.1} g ({:.0} kcal)",
            self.carbs_g,
            self.carbs_kcal()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_breakdown_new() {
        let macros = MacroBreakdown::new(176.0, 110.0, 320.0, 2978.25);
        assert_eq!(macros.protein_g, 176.0);
        assert_eq!(macros.fat_g, 110.0);
        assert_eq!(macros.carbs_g, 320.0);
        assert_eq!(macros.calories, 2978.25);
    }

    #[test]
    fn test_kcal_accessors() {
        let macros = MacroBreakdown::new(100.0, 50.0, 200.0, 2050.0);
        assert_eq!(macros.protein_kcal(), 400.0);
        assert_eq!(macros.fat_kcal(), 450.0);
        assert_eq!(macros.carbs_kcal(), 800.0);
    }

    #[test]
    fn test_macro_breakdown_display() {
        let macros = MacroBreakdown::new(176.0, 110.3, 320.4, 2978.25);
        let output = format!("{}", macros);
        assert!(output.contains("2978 kcal"));
        assert!(output.contains("Protein:   176.0 g"));
        assert!(output.contains("Net carbs: 320.4 g"));
    }

    #[test]
    fn test_macro_breakdown_json_roundtrip() {
        let macros = MacroBreakdown::new(150.0, 80.0, -12.5, 1400.0);
        let json = serde_json::to_string(&macros).unwrap();
        let parsed: MacroBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(macros, parsed);
    }
}
