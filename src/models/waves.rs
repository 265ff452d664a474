//! Wave and spectroscopy calculators.

pub mod wavenumber;
