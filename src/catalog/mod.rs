mod data;
mod persistence;

pub use data::{BasalFactors, Catalog, ExerciseRates};
pub use persistence::load_catalog;
