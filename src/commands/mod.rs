mod config_cmd;
mod macros_cmd;
mod meals;
mod recipe;

pub use config_cmd::ConfigCommand;
pub use macros_cmd::MacrosCommand;
pub use meals::MealsCommand;
pub use recipe::RecipeCommand;
