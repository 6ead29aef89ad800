/// Numeric conversion and formatting helpers.
///
/// This module provides the conversions between script numbers (`f64`) and
/// Rust indices, JavaScript-style relative offsets for slicing, the printed
/// form of numbers, and lenient prefix parsing for `asNumber`.
pub mod num;
