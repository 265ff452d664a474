//! # physcalc
//!
//! Closed-form physics and geometry calculators with unit-aware input
//! handling, each exposed as a [`twine_core::Model`].
//!
//! A calculator takes a form of text fields paired with display units,
//! validates and converts them to SI quantities, solves one textbook
//! relation for the unknown, and returns the answer as formatted
//! [`Reading`](support::recipe::Reading)s alongside a
//! [`Recipe`](support::recipe::Recipe) of substituted steps.
//!
//! ```
//! use physcalc::models::electrical::ohms_law::{OhmsLaw, OhmsLawForm, OhmsLawMode};
//! use physcalc::support::{input::Field, units::{CurrentUnit, ResistanceUnit, VoltageUnit}};
//! use twine_core::Model;
//!
//! let form = OhmsLawForm {
//!     mode: OhmsLawMode::Voltage,
//!     voltage: Field::new("", VoltageUnit::Volt),
//!     current: Field::new("2", CurrentUnit::Ampere),
//!     resistance: Field::new("5", ResistanceUnit::Ohm),
//! };
//! let out = OhmsLaw::default().call(&form).unwrap();
//! assert_eq!(out.result.to_string(), "10 V");
//! ```
//!
//! ## Crate layout
//!
//! - [`models`]: Calculators grouped by domain. Each calculator module holds
//!   a thin adapter over a private `core` module of typed formulas.
//! - [`support`]: Unit tables, input parsing, constraints, number formatting
//!   and step recipes shared by every calculator.
//!
//! Only [`support`] and the calculator adapters are public. A calculator's
//! `core` stays private; the types it exposes are re-exported by its adapter.

pub mod models;
pub mod support;
