use chrono::Utc;
use clap::{Args, ValueEnum};
use tracing::debug;

use crate::config::Config;
use crate::profile_args::ProfileArgs;
use macrofit_core::compute_daily_plan;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Compute the full daily meal plan with illustrative recipes.
#[derive(Args)]
pub struct MealsCommand {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl MealsCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let profile = self.profile.resolve(config)?;
        debug!(%profile, "computing daily meal plan");

        let plan = compute_daily_plan(&profile)?;

        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "computed_at": Utc::now().to_rfc3339(),
                    "plan": plan,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("Daily meal plan");
                println!("===============\n");
                println!("Profile: {}\n", plan.profile);
                println!("{}\n", plan.macros);
                for meal in &plan.meals {
                    println!("{}", meal);
                }
            }
        }
        Ok(())
    }
}
