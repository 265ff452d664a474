use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ElectricPotential, ElectricalResistance, Power};

use crate::support::constraint::{Constrained, NonZero, StrictlyPositive};

/// Voltage and current of opposite sign would imply a negative resistance.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("voltage and current must have the same sign")]
pub struct OppositeSigns;

/// A resistor operating point satisfying `V = IR`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub voltage: ElectricPotential,
    pub current: ElectricCurrent,
    pub resistance: ElectricalResistance,
}

impl OperatingPoint {
    /// `R = V / I`
    ///
    /// # Errors
    ///
    /// Returns [`OppositeSigns`] if `V` and `I` differ in sign.
    pub fn from_voltage_and_current(
        voltage: Constrained<ElectricPotential, NonZero>,
        current: Constrained<ElectricCurrent, NonZero>,
    ) -> Result<Self, OppositeSigns> {
        let v = voltage.into_inner();
        let i = current.into_inner();
        if (v.value > 0.0) != (i.value > 0.0) {
            return Err(OppositeSigns);
        }
        Ok(Self {
            voltage: v,
            current: i,
            resistance: v / i,
        })
    }

    /// `V = IR`
    #[must_use]
    pub fn from_current_and_resistance(
        current: Constrained<ElectricCurrent, NonZero>,
        resistance: Constrained<ElectricalResistance, StrictlyPositive>,
    ) -> Self {
        let i = current.into_inner();
        let r = resistance.into_inner();
        Self {
            voltage: i * r,
            current: i,
            resistance: r,
        }
    }

    /// `I = V / R`
    #[must_use]
    pub fn from_voltage_and_resistance(
        voltage: Constrained<ElectricPotential, NonZero>,
        resistance: Constrained<ElectricalResistance, StrictlyPositive>,
    ) -> Self {
        let v = voltage.into_inner();
        let r = resistance.into_inner();
        Self {
            voltage: v,
            current: v / r,
            resistance: r,
        }
    }

    /// Dissipated power, `P = VI`.
    #[must_use]
    pub fn power(&self) -> Power {
        self.voltage * self.current
    }
}
