use clap::{Args, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use macrofit_core::{total_nutrients, FoodRecord};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Total the tracked nutrients of looked-up ingredient records
    Total {
        /// JSON file of ingredient records from the nutrition lookup service
        #[arg(long, short)]
        file: PathBuf,

        /// Divide the totals across this many servings
        #[arg(long, short)]
        servings: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl RecipeCommand {
    pub fn run(&self, _config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipeSubcommand::Total {
                file,
                servings,
                format,
            } => {
                let records = load_records(file)?;
                debug!(count = records.len(), "totaling ingredient records");

                let totals = total_nutrients(&records);

                match format {
                    OutputFormat::Json => {
                        let mut output = serde_json::json!({
                            "ingredients": records,
                            "total": totals,
                        });
                        if let Some(n) = servings {
                            output["servings"] = serde_json::json!(n);
                            output["per_serving"] = serde_json::to_value(totals.per_serving(*n))?;
                        }
                        println!("{}", serde_json::to_string_pretty(&output)?);
                    }
                    OutputFormat::Text => {
                        println!("Nutrition Facts");
                        println!("===============\n");
                        for record in &records {
                            println!("  - {}", record);
                        }
                        println!("\nTotal:");
                        println!("{}", totals);
                        if let Some(n) = servings {
                            println!("\nPer serving ({} servings):", n);
                            println!("{}", totals.per_serving(*n));
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Read lookup-shaped ingredient records from a JSON file.
fn load_records(path: &Path) -> Result<Vec<FoodRecord>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let records: Vec<FoodRecord> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_records() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("ingredients.json");

        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[
                {{
                    "name": "chicken breast",
                    "amount": 200.0,
                    "unit": "g",
                    "nutrients": [
                        {{"name": "Calories", "amount": 330.0, "unit": "kcal"}},
                        {{"name": "Protein", "amount": 62.0, "unit": "g"}}
                    ]
                }}
            ]"#
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "chicken breast");

        let totals = total_nutrients(&records);
        assert_eq!(totals.calories, 330.0);
        assert_eq!(totals.protein_g, 62.0);
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("/nonexistent/ingredients.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_records_bad_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");

        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_records(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
