//! Calculator models.
//!
//! Calculators are the primary public interface of this crate.
//!
//! # Organization
//!
//! Calculators are grouped by subject: [`geometry`], [`mechanics`],
//! [`electrical`], [`gas`], [`waves`] and [`fluids`].
//!
//! # Model structure
//!
//! Each calculator lives in its own module and contains an internal `core`
//! submodule holding the typed formulas. The `core` module works on [`uom`]
//! quantities and [`Constrained`](crate::support::constraint::Constrained)
//! values only; it never sees text.
//!
//! The [`twine_core::Model`] implementation is a thin adapter: it parses the
//! form, delegates to `core`, then formats readings and the worked steps.

pub mod electrical;
pub mod fluids;
pub mod gas;
pub mod geometry;
pub mod mechanics;
pub mod waves;
