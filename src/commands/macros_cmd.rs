use chrono::Utc;
use clap::{Args, ValueEnum};
use tracing::debug;

use crate::config::Config;
use crate::profile_args::ProfileArgs;
use macrofit_core::{compute_daily_calories, compute_macros, WeightTier};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Compute the daily calorie target and macro split for a profile.
#[derive(Args)]
pub struct MacrosCommand {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl MacrosCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let profile = self.profile.resolve(config)?;
        debug!(%profile, "computing daily calorie target and macro split");

        let calories = compute_daily_calories(&profile)?;
        let macros = compute_macros(&profile, calories)?;

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "computed_at": Utc::now().to_rfc3339(),
                    "profile": profile,
                    "calories": calories,
                    "macros": macros,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                let tier = WeightTier::from_lbs(profile.weight_lbs());
                println!("Daily targets");
                println!("=============\n");
                println!("Profile: {}", profile);
                println!("Weight tier: {}\n", tier);
                println!("{}", macros);
                if macros.carbs_g < 0.0 {
                    println!(
                        "\nNote: the calorie target is too low to cover protein and fat; \
                         net carbs came out negative."
                    );
                }
            }
        }
        Ok(())
    }
}
