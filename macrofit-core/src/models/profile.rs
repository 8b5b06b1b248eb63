use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pounds per kilogram as the engine defines it (1 g protein per lb).
pub const LBS_PER_KG: f64 = 2.2;

/// Errors from validating a nutrition profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Invalid weight: {0} kg. Weight must be a positive number.")]
    InvalidWeight(f64),

    #[error("Invalid height: {0} cm. Height must be a positive number.")]
    InvalidHeight(f64),

    #[error("Invalid age: {0}. Age must be at least 1 year.")]
    InvalidAge(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Flat kcal offset added to the Mifflin-St Jeor base.
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!(
                "Invalid sex '{}'. Valid options: male, female",
                s
            )),
        }
    }
}

/// Weekly activity category. Each variant carries its calorie multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    LowActive,
    Active,
    HighActive,
}

impl ActivityLevel {
    /// Multiplier applied to the sex-adjusted Mifflin-St Jeor base.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.1,
            ActivityLevel::LowActive => 1.375,
            ActivityLevel::Active => 1.65,
            ActivityLevel::HighActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::LowActive => write!(f, "low-active"),
            ActivityLevel::Active => write!(f, "active"),
            ActivityLevel::HighActive => write!(f, "high-active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "low-active" | "lowactive" => Ok(ActivityLevel::LowActive),
            "active" => Ok(ActivityLevel::Active),
            "high-active" | "highactive" => Ok(ActivityLevel::HighActive),
            _ => Err(format!(
                "Invalid activity level '{}'. Valid options: sedentary, low-active, active, high-active",
                s
            )),
        }
    }
}

/// Training goal. Shifts the activity-adjusted calorie target by a flat amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FatLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Flat kcal adjustment applied after the activity multiplier.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::FatLoss => -500.0,
            Goal::Maintenance => 0.0,
            Goal::MuscleGain => 500.0,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::FatLoss => write!(f, "fat-loss"),
            Goal::Maintenance => write!(f, "maintenance"),
            Goal::MuscleGain => write!(f, "muscle-gain"),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fat-loss" | "fatloss" => Ok(Goal::FatLoss),
            "maintenance" | "maintain" => Ok(Goal::Maintenance),
            "muscle-gain" | "musclegain" => Ok(Goal::MuscleGain),
            _ => Err(format!(
                "Invalid goal '{}'. Valid options: fat-loss, maintenance, muscle-gain",
                s
            )),
        }
    }
}

/// A user's biometric and lifestyle inputs for one calculation request.
///
/// The engine treats a profile as immutable: it is validated once, then
/// every derived value (calories, macros, meals) is computed from the
/// same field values. Storage of profiles and results is the caller's
/// responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl NutritionProfile {
    /// Build a validated profile. Fails fast on any out-of-range field.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        sex: Sex,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            weight_kg,
            height_cm,
            age,
            sex,
            activity_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check every numeric field is positive (and finite for floats).
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ProfileError::InvalidWeight(self.weight_kg));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(ProfileError::InvalidHeight(self.height_cm));
        }
        if self.age == 0 {
            return Err(ProfileError::InvalidAge(self.age));
        }
        Ok(())
    }

    /// Bodyweight in pounds at the fixed 2.2 lb/kg conversion.
    pub fn weight_lbs(&self) -> f64 {
        self.weight_kg * LBS_PER_KG
    }
}

impl fmt::Display for NutritionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kg, {} cm, {} y, {}, {}, {}",
            self.weight_kg, self.height_cm, self.age, self.sex, self.activity_level, self.goal
        )
    }
}
