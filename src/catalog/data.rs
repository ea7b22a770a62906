use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, Goal};

/// Activity factors applied to the basal metabolic rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasalFactors {
    pub weight_gain_factor: f64,
    pub weight_loss_factor: f64,
}

/// Per-minute calorie rates for the declared exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRates {
    pub push_up: f64,
}

/// Immutable reference table of foods and global calorie constants.
///
/// Constructed once at startup and read-only for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub foods: Vec<FoodEntry>,
    pub basal_calories: BasalFactors,
    pub exercise_calories: ExerciseRates,
}

impl Catalog {
    /// Look up a food by identifier. Case-sensitive, exact match.
    ///
    /// A miss is not an error: the engine treats that selection as
    /// contributing zero calories.
    pub fn find_entry(&self, identifier: &str) -> Option<&FoodEntry> {
        self.foods.iter().find(|f| f.name == identifier)
    }

    /// Activity factor selected by the goal.
    pub fn activity_factor(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Gain => self.basal_calories.weight_gain_factor,
            Goal::Lose => self.basal_calories.weight_loss_factor,
        }
    }

    /// Per-minute burn rate of the single modeled exercise.
    pub fn exercise_rate(&self) -> f64 {
        self.exercise_calories.push_up
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog declares no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
