pub mod calculations;
pub mod constants;

pub use calculations::{
    basal_metabolic_rate, calculate, compute_daily_need, compute_exercise_burn, compute_intake,
    record_selection,
};
pub use constants::*;
