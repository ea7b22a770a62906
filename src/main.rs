use clap::Parser;
use std::path::Path;

use calorie_counter_rs::catalog::load_catalog;
use calorie_counter_rs::cli::{Cli, Command};
use calorie_counter_rs::error::Result;
use calorie_counter_rs::interface::{
    collect_body_inputs, collect_selections, collect_selections_walk, display_food_list,
    display_results, display_selections, prompt_yes_no,
};
use calorie_counter_rs::state::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calculate { all } => cmd_calculate(&cli.file, all),
        Command::Foods => cmd_foods(&cli.file),
    }
}

/// Run an interactive calculation session.
fn cmd_calculate(file_path: &str, walk_all: bool) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog file not found: {}", file_path);
        eprintln!("Please ensure food_data.json exists in the current directory.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;

    println!("Loaded {} foods", catalog.len());

    if catalog.is_empty() {
        println!("No foods in the catalog. Nothing to select.");
        return Ok(());
    }

    println!();

    let mut session = Session::new();

    if walk_all {
        collect_selections_walk(&catalog, &mut session)?;
    } else {
        collect_selections(&catalog, &mut session)?;
    }

    collect_body_inputs(&mut session)?;

    loop {
        display_selections(session.selections(), &catalog);

        let result = session.calculate(&catalog);
        display_results(&result);

        let again = prompt_yes_no("Adjust quantities and recalculate?", false)?;
        if !again {
            break;
        }

        collect_selections(&catalog, &mut session)?;
    }

    Ok(())
}

/// List the foods in the catalog.
fn cmd_foods(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog file not found: {}", file_path);
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    display_food_list(&catalog);

    Ok(())
}
