use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    f64::{
        Angle, Capacitance, ElectricPotential, ElectricalResistance, Frequency, Time,
    },
    ratio::ratio,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// A series resistor-capacitor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcCircuit {
    resistance: ElectricalResistance,
    capacitance: Capacitance,
}

/// Capacitor state partway through charging from a DC supply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charging {
    pub voltage: ElectricPotential,
    /// `1 - e^(-t/τ)`, between 0 and 1.
    pub fraction: f64,
    /// Time to 63.2 % charge, one time constant.
    pub time_to_63: Time,
    /// Time to 95 % charge, three time constants.
    pub time_to_95: Time,
}

/// AC impedance of the series pair at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impedance {
    pub reactance: ElectricalResistance,
    pub magnitude: ElectricalResistance,
    /// Negative: current leads voltage.
    pub phase: Angle,
}

impl RcCircuit {
    #[must_use]
    pub fn new(
        resistance: Constrained<ElectricalResistance, StrictlyPositive>,
        capacitance: Constrained<Capacitance, StrictlyPositive>,
    ) -> Self {
        Self {
            resistance: resistance.into_inner(),
            capacitance: capacitance.into_inner(),
        }
    }

    #[must_use]
    pub fn resistance(&self) -> ElectricalResistance {
        self.resistance
    }

    #[must_use]
    pub fn capacitance(&self) -> Capacitance {
        self.capacitance
    }

    /// `τ = RC`
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.resistance * self.capacitance
    }

    /// `V(t) = V₀(1 - e^(-t/τ))`
    #[must_use]
    pub fn charge(
        &self,
        supply: Constrained<ElectricPotential, NonNegative>,
        time: Constrained<Time, NonNegative>,
    ) -> Charging {
        let tau = self.time_constant();
        let fraction = 1.0 - (-(time.into_inner() / tau).get::<ratio>()).exp();
        Charging {
            voltage: supply.into_inner() * fraction,
            fraction,
            time_to_63: tau,
            time_to_95: tau * 3.0,
        }
    }

    /// `f_c = 1 / 2πRC`
    #[must_use]
    pub fn cutoff_frequency(&self) -> Frequency {
        (self.time_constant() * (2.0 * PI)).recip()
    }

    /// `X_c = 1 / 2πfC`, `Z = √(R² + X_c²)`, `φ = atan(-X_c / R)`
    #[must_use]
    pub fn impedance(&self, frequency: Constrained<Frequency, StrictlyPositive>) -> Impedance {
        let r = self.resistance;
        let xc = (frequency.into_inner() * self.capacitance * (2.0 * PI)).recip();
        Impedance {
            reactance: xc,
            magnitude: (r * r + xc * xc).sqrt(),
            phase: Angle::new::<radian>((-(xc / r).get::<ratio>()).atan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree, capacitance::microfarad, electric_potential::volt,
        electrical_resistance::{kiloohm, ohm}, frequency::hertz, time::{millisecond, second},
    };

    fn circuit(kohm: f64, uf: f64) -> RcCircuit {
        RcCircuit::new(
            StrictlyPositive::new(ElectricalResistance::new::<kiloohm>(kohm)).unwrap(),
            StrictlyPositive::new(Capacitance::new::<microfarad>(uf)).unwrap(),
        )
    }

    #[test]
    fn time_constant() {
        assert_relative_eq!(
            circuit(10.0, 100.0).time_constant().get::<second>(),
            1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            circuit(1.0, 1.0).time_constant().get::<millisecond>(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn charging_after_one_tau() {
        let rc = circuit(10.0, 100.0);
        let state = rc.charge(
            NonNegative::new(ElectricPotential::new::<volt>(12.0)).unwrap(),
            NonNegative::new(Time::new::<second>(1.0)).unwrap(),
        );
        assert_relative_eq!(state.fraction, 0.632_120_558_828_557_7, epsilon = 1e-12);
        assert_relative_eq!(state.voltage.get::<volt>(), 12.0 * 0.632_120_558_828_557_7, epsilon = 1e-12);
        assert_relative_eq!(state.time_to_95.get::<second>(), 3.0, max_relative = 1e-12);

        let start = rc.charge(NonNegative::new(ElectricPotential::new::<volt>(12.0)).unwrap(), NonNegative::zero());
        assert_relative_eq!(start.voltage.get::<volt>(), 0.0);
    }

    #[test]
    fn impedance_at_cutoff() {
        let rc = circuit(1.0, 1.0);
        let fc = rc.cutoff_frequency();
        assert_relative_eq!(fc.get::<hertz>(), 159.154_943_091_895_35, max_relative = 1e-12);

        // At the cutoff frequency the reactance equals the resistance.
        let z = rc.impedance(StrictlyPositive::new(fc).unwrap());
        assert_relative_eq!(z.reactance.get::<ohm>(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(z.magnitude.get::<ohm>(), 1000.0 * 2f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(z.phase.get::<degree>(), -45.0, max_relative = 1e-12);
    }
}
