/// Parser entry points.
///
/// Selects the grammar for an interpretation and checks that a line is
/// consumed completely.
pub mod core;

/// Binary operator parsing.
///
/// Implements the single-level fold used by the swapped interpretation and
/// the two-level sum/product grammar used by the addition-first
/// interpretation.
pub mod binary;

/// Primary expressions: literals and parenthesised groups.
pub mod primary;
