use crate::catalog::Catalog;
use crate::engine::constants::*;
use crate::models::{
    BodyProfile, CalculationResult, ExerciseInput, Goal, RecordOutcome, SelectionSet,
};

/// Total calories across all selections.
///
/// Each selection contributes `calories_per_hundred_units * quantity / 100`.
/// A selection naming a food absent from the catalog contributes zero and
/// leaves the rest of the sum unaffected.
pub fn compute_intake(selections: &SelectionSet, catalog: &Catalog) -> f64 {
    selections
        .iter()
        .filter_map(|s| {
            catalog
                .find_entry(&s.name)
                .map(|entry| entry.calories_for(s.quantity))
        })
        .sum()
}

/// Basal metabolic rate via Mifflin-St Jeor, fixed to male at age 30.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64) -> f64 {
    MIFFLIN_WEIGHT_COEF * weight_kg + MIFFLIN_HEIGHT_COEF * height_cm
        - MIFFLIN_AGE_COEF * FIXED_AGE_YEARS
        + MIFFLIN_MALE_OFFSET
}

/// Daily caloric need: basal rate scaled by the goal's activity factor.
///
/// No clamping to a plausible range; out-of-range body values flow straight
/// through the arithmetic.
pub fn compute_daily_need(profile: &BodyProfile, goal: Goal, catalog: &Catalog) -> f64 {
    basal_metabolic_rate(profile.weight_kg, profile.height_cm) * catalog.activity_factor(goal)
}

/// Calories burned over the exercise duration. Linear in minutes.
pub fn compute_exercise_burn(exercise: &ExerciseInput, catalog: &Catalog) -> f64 {
    exercise.duration_minutes * catalog.exercise_rate()
}

/// Record a quantity for a food, keeping at most one entry per name.
///
/// Quantity text that fails to parse, or parses to a non-positive value,
/// yields `Rejected`; the caller discards it and its set stays unchanged.
/// Nothing is surfaced for invalid input.
pub fn record_selection(
    selections: &SelectionSet,
    identifier: &str,
    quantity_text: &str,
) -> RecordOutcome {
    match quantity_text.trim().parse::<f64>() {
        Ok(quantity) if quantity > 0.0 => {
            let mut updated = selections.clone();
            updated.insert(identifier, quantity);
            RecordOutcome::Accepted(updated)
        }
        _ => RecordOutcome::Rejected,
    }
}

/// Compute all three figures for one calculation request.
pub fn calculate(
    selections: &SelectionSet,
    profile: &BodyProfile,
    goal: Goal,
    exercise: &ExerciseInput,
    catalog: &Catalog,
) -> CalculationResult {
    CalculationResult::new(
        compute_intake(selections, catalog),
        compute_daily_need(profile, goal, catalog),
        compute_exercise_burn(exercise, catalog),
    )
}
