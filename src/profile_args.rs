use clap::Args;

use crate::config::Config;
use macrofit_core::{ActivityLevel, Goal, NutritionProfile, Sex};

/// Profile flags shared by the macros and meals commands. Any flag left
/// off falls back to the config file's defaults; a field missing from
/// both places is a labeled error.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Bodyweight in kilograms
    #[arg(long, value_name = "KG")]
    pub weight_kg: Option<f64>,

    /// Height in centimeters
    #[arg(long, value_name = "CM")]
    pub height_cm: Option<f64>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Biological sex (male, female)
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Activity level (sedentary, low-active, active, high-active)
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Goal (fat-loss, maintenance, muscle-gain)
    #[arg(long)]
    pub goal: Option<Goal>,
}

impl ProfileArgs {
    /// Merge flags over config defaults into a validated profile.
    pub fn resolve(&self, config: &Config) -> Result<NutritionProfile, Box<dyn std::error::Error>> {
        let weight_kg = self
            .weight_kg
            .or(config.weight_kg.as_ref().map(|v| v.value))
            .ok_or("Missing weight: pass --weight-kg or set weight_kg in the config file")?;
        let height_cm = self
            .height_cm
            .or(config.height_cm.as_ref().map(|v| v.value))
            .ok_or("Missing height: pass --height-cm or set height_cm in the config file")?;
        let age = self
            .age
            .or(config.age.as_ref().map(|v| v.value))
            .ok_or("Missing age: pass --age or set age in the config file")?;
        let sex = self
            .sex
            .or(config.sex.as_ref().map(|v| v.value))
            .ok_or("Missing sex: pass --sex or set sex in the config file")?;
        let activity_level = self
            .activity
            .or(config.activity_level.as_ref().map(|v| v.value))
            .ok_or("Missing activity level: pass --activity or set activity_level in the config file")?;
        let goal = self.goal.unwrap_or(config.goal.value);

        Ok(NutritionProfile::new(
            weight_kg,
            height_cm,
            age,
            sex,
            activity_level,
            goal,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSource, ConfigValue};

    fn empty_config() -> Config {
        Config {
            weight_kg: None,
            height_cm: None,
            age: None,
            sex: None,
            activity_level: None,
            goal: ConfigValue::new(Goal::Maintenance, ConfigSource::Default),
            config_file: None,
        }
    }

    fn full_args() -> ProfileArgs {
        ProfileArgs {
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            age: Some(25),
            sex: Some(Sex::Male),
            activity: Some(ActivityLevel::Active),
            goal: Some(Goal::Maintenance),
        }
    }

    #[test]
    fn test_resolve_from_flags_alone() {
        let profile = full_args().resolve(&empty_config()).unwrap();
        assert_eq!(profile.weight_kg, 80.0);
        assert_eq!(profile.activity_level, ActivityLevel::Active);
    }

    #[test]
    fn test_flag_beats_config_default() {
        let mut config = empty_config();
        config.weight_kg = Some(ConfigValue::new(70.0, ConfigSource::File));

        let profile = full_args().resolve(&config).unwrap();
        assert_eq!(profile.weight_kg, 80.0);
    }

    #[test]
    fn test_config_fills_missing_flag() {
        let mut config = empty_config();
        config.weight_kg = Some(ConfigValue::new(70.0, ConfigSource::File));

        let mut args = full_args();
        args.weight_kg = None;

        let profile = args.resolve(&config).unwrap();
        assert_eq!(profile.weight_kg, 70.0);
    }

    #[test]
    fn test_goal_falls_back_to_config_default() {
        let mut args = full_args();
        args.goal = None;

        let profile = args.resolve(&empty_config()).unwrap();
        assert_eq!(profile.goal, Goal::Maintenance);
    }

    #[test]
    fn test_missing_field_is_labeled() {
        let mut args = full_args();
        args.sex = None;

        let err = args.resolve(&empty_config()).unwrap_err();
        assert!(err.to_string().contains("--sex"));
    }

    #[test]
    fn test_invalid_merged_profile_rejected() {
        let mut args = full_args();
        args.weight_kg = Some(-80.0);

        let err = args.resolve(&empty_config()).unwrap_err();
        assert!(err.to_string().contains("weight"));
    }
}
