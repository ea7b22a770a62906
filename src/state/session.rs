use crate::catalog::Catalog;
use crate::engine;
use crate::models::{
    BodyProfile, CalculationResult, ExerciseInput, Goal, RecordOutcome, SelectionSet,
};

/// Transient per-session inputs, owned by the presentation layer.
///
/// The engine borrows these for each calculation request and retains
/// nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selections: SelectionSet,
    profile: BodyProfile,
    goal: Goal,
    exercise: ExerciseInput,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a quantity for a food.
    ///
    /// Invalid quantity text is dropped silently and the previous
    /// selections are kept. Returns whether the selection was accepted.
    pub fn record(&mut self, identifier: &str, quantity_text: &str) -> bool {
        match engine::record_selection(&self.selections, identifier, quantity_text) {
            RecordOutcome::Accepted(updated) => {
                self.selections = updated;
                true
            }
            RecordOutcome::Rejected => false,
        }
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    pub fn profile(&self) -> BodyProfile {
        self.profile
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn exercise(&self) -> ExerciseInput {
        self.exercise
    }

    pub fn set_profile(&mut self, profile: BodyProfile) {
        self.profile = profile;
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
    }

    pub fn set_exercise(&mut self, exercise: ExerciseInput) {
        self.exercise = exercise;
    }

    /// Compute the three output figures from the current inputs.
    pub fn calculate(&self, catalog: &Catalog) -> CalculationResult {
        engine::calculate(
            &self.selections,
            &self.profile,
            self.goal,
            &self.exercise,
            catalog,
        )
    }
}
