use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{CalorieError, Result};
use crate::models::{BodyProfile, ExerciseInput, FoodEntry, Goal};
use crate::state::Session;

/// Prompt for body weight in kilograms.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .default("0".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CalorieError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for body height in centimeters.
pub fn prompt_height_cm() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .default("0".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CalorieError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for exercise duration in minutes.
pub fn prompt_exercise_minutes() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Exercise duration (minutes)")
        .default("0".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CalorieError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the weight goal.
pub fn prompt_goal() -> Result<Goal> {
    let options = [Goal::Gain.label(), Goal::Lose.label()];

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 1 { Goal::Lose } else { Goal::Gain })
}

/// Prompt for a quantity in the food's unit.
///
/// Returns the raw text; the engine decides whether to accept it.
pub fn prompt_quantity(food: &FoodEntry) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("{} quantity ({})", food.name, food.unit))
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect selections by typed food name, with fuzzy matching.
///
/// Quantity text flows untouched into the session; invalid entries are
/// dropped without comment, exactly as a quantity box that never
/// registered.
pub fn collect_selections(catalog: &Catalog, session: &mut Session) -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(name) = resolve_food_name(catalog, input)? else {
            continue;
        };

        // resolve_food_name only returns names present in the catalog
        if let Some(entry) = catalog.find_entry(&name) {
            let quantity = prompt_quantity(entry)?;
            session.record(&name, &quantity);
        }
    }

    Ok(())
}

/// Walk every catalog food, prompting a quantity for each.
///
/// Empty input skips the food; invalid quantities are dropped silently.
pub fn collect_selections_walk(catalog: &Catalog, session: &mut Session) -> Result<()> {
    for food in &catalog.foods {
        let quantity = prompt_quantity(food)?;
        if quantity.trim().is_empty() {
            continue;
        }
        session.record(&food.name, &quantity);
    }

    Ok(())
}

/// Collect goal, body measurements, and exercise duration.
pub fn collect_body_inputs(session: &mut Session) -> Result<()> {
    session.set_goal(prompt_goal()?);
    session.set_profile(BodyProfile {
        weight_kg: prompt_weight_kg()?,
        height_cm: prompt_height_cm()?,
    });
    session.set_exercise(ExerciseInput {
        duration_minutes: prompt_exercise_minutes()?,
    });

    Ok(())
}

/// Resolve typed input to a catalog food name.
///
/// Exact match first, then case-insensitive, then fuzzy suggestions with
/// confirm/select disambiguation.
fn resolve_food_name(catalog: &Catalog, input: &str) -> Result<Option<String>> {
    if let Some(entry) = catalog.find_entry(input) {
        return Ok(Some(entry.name.clone()));
    }

    if let Some(entry) = catalog
        .foods
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(input))
    {
        return Ok(Some(entry.name.clone()));
    }

    let mut candidates: Vec<(&FoodEntry, f64)> = catalog
        .foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let entry = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", entry.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| entry.name.clone()));
    }

    // Multiple matches - let the user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}
