//! Utilities shared by the calculators.
//!
//! - [`constraint`]: numeric invariants checked at construction.
//! - [`input`]: parsing of text fields and unit selectors.
//! - [`units`]: display-unit tables and [`uom`] extensions.
//! - [`format`]: number formatting presets.
//! - [`recipe`]: formatted readings and worked steps.
//! - [`constants`]: physical constants.

pub mod constants;
pub mod constraint;
pub mod format;
pub mod input;
pub mod recipe;
pub mod units;
