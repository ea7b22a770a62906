use serde::{Deserialize, Serialize};

/// A catalog food with its calorie value.
///
/// The `caloriesPerUnit` field in the catalog document holds the calories
/// contained in 100 of the food's `unit`, so a quantity contributes
/// `calories * quantity / 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    #[serde(rename = "caloriesPerUnit")]
    pub calories_per_hundred_units: f64,

    pub unit: String,
}

impl FoodEntry {
    /// Calories contributed by `quantity` units of this food.
    #[inline]
    pub fn calories_for(&self, quantity: f64) -> f64 {
        self.calories_per_hundred_units * quantity / 100.0
    }

    /// Basic validation: non-negative calorie value.
    pub fn is_valid(&self) -> bool {
        self.calories_per_hundred_units >= 0.0
    }
}
