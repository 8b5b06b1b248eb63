use clap::{Args, Subcommand, ValueEnum};
use std::fs;
use std::io::Write;

use crate::config::{Config, ConfigValue};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        print_value("weight_kg", &config.weight_kg);
                        print_value("height_cm", &config.height_cm);
                        print_value("age", &config.age);
                        print_value("sex", &config.sex);
                        print_value("activity_level", &config.activity_level);

                        println!("goal: {}", config.goal.value);
                        println!("  source: {}", config.goal.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();

                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'mfit config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let default_config = r#"# macrofit configuration
#
# Default profile values, used when the matching flag is not passed
# to 'mfit macros' or 'mfit meals'.

# weight_kg: 80
# height_cm: 180
# age: 30

# sex: male | female
# sex: male

# activity_level: sedentary | low-active | active | high-active
# activity_level: active

# goal: fat-loss | maintenance | muscle-gain
goal: maintenance
"#;

                let mut file = fs::File::create(&config_path)?;
                file.write_all(default_config.as_bytes())?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}

fn print_value<T: std::fmt::Display>(name: &str, value: &Option<ConfigValue<T>>) {
    match value {
        Some(v) => {
            println!("{}: {}", name, v.value);
            println!("  source: {}", v.source);
        }
        None => println!("{}: (not set)", name),
    }
    println!();
}
