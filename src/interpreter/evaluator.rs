/// Core evaluation logic.
///
/// Reduces a parsed tree to a single value with overflow-checked arithmetic.
pub mod core;
