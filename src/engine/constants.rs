/// Mifflin-St Jeor weight coefficient (kcal per kg).
pub const MIFFLIN_WEIGHT_COEF: f64 = 10.0;

/// Mifflin-St Jeor height coefficient (kcal per cm).
pub const MIFFLIN_HEIGHT_COEF: f64 = 6.25;

/// Mifflin-St Jeor age coefficient (kcal per year).
pub const MIFFLIN_AGE_COEF: f64 = 5.0;

/// Sex offset for the male form of the equation.
pub const MIFFLIN_MALE_OFFSET: f64 = 5.0;

/// Age the formula is fixed to. There is no configuration path for age or
/// sex anywhere in the engine.
pub const FIXED_AGE_YEARS: f64 = 30.0;
