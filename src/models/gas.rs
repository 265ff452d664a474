//! Gas law calculators.
//!
//! All three laws work in absolute temperature. Temperatures entered in °C
//! or °F are converted to kelvin and must lie above absolute zero.

pub mod combined_gas_law;
pub mod gay_lussacs_law;
pub mod ideal_gas_law;
