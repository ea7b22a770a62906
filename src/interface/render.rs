use crate::catalog::Catalog;
use crate::models::{CalculationResult, SelectionSet};

/// Display the three calculation figures.
///
/// Values are printed verbatim; no derived formatting.
pub fn display_results(result: &CalculationResult) {
    println!();
    println!("=== Results ===");
    println!();
    println!(
        "Total calories consumed:  {}",
        result.total_calories_consumed
    );
    println!("Daily calories needed:    {}", result.daily_calories_needed);
    println!(
        "Exercise calories burned: {}",
        result.exercise_calories_burned
    );
    println!();
}

/// Display the current selections with their catalog units.
pub fn display_selections(selections: &SelectionSet, catalog: &Catalog) {
    if selections.is_empty() {
        println!("No foods selected.");
        return;
    }

    println!();
    println!("=== Selections ({} foods) ===", selections.len());
    println!();

    for selection in selections.iter() {
        let unit = catalog
            .find_entry(&selection.name)
            .map(|e| e.unit.as_str())
            .unwrap_or("");

        println!("  {} - {} {}", selection.name, selection.quantity, unit);
    }

    println!();
}

/// Display the catalog foods with their units and calorie values.
pub fn display_food_list(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog is empty.");
        return;
    }

    println!();
    println!("=== Foods ({} items) ===", catalog.len());
    println!();

    for food in &catalog.foods {
        println!(
            "  {} - {} cal per 100 {}",
            food.name, food.calories_per_hundred_units, food.unit
        );
    }

    println!();
}
