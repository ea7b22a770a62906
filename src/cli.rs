use clap::{Parser, Subcommand};

/// CalorieCounter — calorie intake, daily need, and exercise burn from a food catalog.
#[derive(Parser, Debug)]
#[command(name = "calorie_counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_data.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive calculation session.
    Calculate {
        /// Walk every catalog food instead of entering names.
        #[arg(long)]
        all: bool,
    },

    /// List the foods in the catalog.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Calculate { all: false }
    }
}
