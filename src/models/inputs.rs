/// Body measurements fed into the metabolic-rate formula.
///
/// No range validation: zero or negative values flow through the arithmetic
/// and produce whatever result follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Whether the user wants to gain or lose weight.
///
/// Selects which activity factor from the catalog scales the basal rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    #[default]
    Gain,
    Lose,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Gain => "Gain weight",
            Goal::Lose => "Lose weight",
        }
    }
}

/// Duration of the single catalog-declared exercise, in minutes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseInput {
    pub duration_minutes: f64,
}
