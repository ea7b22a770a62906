pub mod food;
pub mod inputs;
pub mod result;
pub mod selection;

pub use food::FoodEntry;
pub use inputs::{BodyProfile, ExerciseInput, Goal};
pub use result::CalculationResult;
pub use selection::{RecordOutcome, Selection, SelectionSet};
