//! Display units and extensions to [`uom`].
//!
//! Calculators hold every physical value as a [`uom`] quantity in SI. The
//! unit enums in this module are the selectors a form offers next to each
//! field: each one knows its symbol and its factor relative to the SI base
//! unit, and converts in both directions through [`UnitTable`].
//!
//! ```
//! use physcalc::support::units::{LengthUnit, UnitTable};
//! use uom::si::length::meter;
//!
//! let d = LengthUnit::Foot.to_base(10.0);
//! assert!((d.get::<meter>() - 3.048).abs() < 1e-12);
//! assert!((LengthUnit::Inch.from_base(d) - 120.0).abs() < 1e-9);
//! ```
//!
//! ## Quantities missing from `uom`
//!
//! [`Wavenumber`] (reciprocal length) has no alias in [`uom`] and is
//! declared here.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts two absolute temperatures and
//! returns a [`TemperatureInterval`](uom::si::f64::TemperatureInterval).

mod quantities;
mod table;
mod tables;
mod temperature;
mod temperature_difference;

pub use quantities::{KinematicViscosity, Wavenumber, WavenumberUnit, per_meter};
pub use table::{UnitTable, UnknownUnit};
pub use tables::{
    AccelerationUnit, AmountUnit, AngleUnit, CapacitanceUnit, ChargeUnit, CurrentUnit,
    DensityUnit, DynamicViscosityUnit, EnergyUnit, ForceUnit, FrequencyUnit,
    KinematicViscosityUnit, LengthUnit, PressureUnit, ResistanceUnit, TimeUnit, VelocityUnit,
    VoltageUnit, VolumeUnit,
};
pub use temperature::TemperatureUnit;
pub use temperature_difference::TemperatureDifference;
