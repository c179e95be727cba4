//! Miscellaneous utilities.

/// Parsers for the ISO strings that cross the library boundary.
pub mod data_parsers;
