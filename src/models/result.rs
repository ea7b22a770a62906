/// The three figures produced by one calculation request.
///
/// Computed fresh on every invocation and owned by the caller; never
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct CalculationResult {
    /// Calories consumed across all selected foods.
    pub total_calories_consumed: f64,

    /// Daily caloric need: basal rate scaled by the goal's activity factor.
    pub daily_calories_needed: f64,

    /// Calories burned over the entered exercise duration.
    pub exercise_calories_burned: f64,
}

impl CalculationResult {
    pub fn new(
        total_calories_consumed: f64,
        daily_calories_needed: f64,
        exercise_calories_burned: f64,
    ) -> Self {
        Self {
            total_calories_consumed,
            daily_calories_needed,
            exercise_calories_burned,
        }
    }
}
