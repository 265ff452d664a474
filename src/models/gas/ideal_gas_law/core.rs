use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::{
    constants::MOLAR_GAS_CONSTANT,
    constraint::{Constrained, StrictlyPositive},
};

type Positive<T> = Constrained<T, StrictlyPositive>;

/// The three quantities the user gave.
///
/// Temperatures are already known to lie above absolute zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Known {
    /// Solve for pressure.
    VolumeAmountTemperature {
        volume: Positive<Volume>,
        amount: Positive<AmountOfSubstance>,
        temperature: ThermodynamicTemperature,
    },
    /// Solve for volume.
    PressureAmountTemperature {
        pressure: Positive<Pressure>,
        amount: Positive<AmountOfSubstance>,
        temperature: ThermodynamicTemperature,
    },
    /// Solve for amount of substance.
    PressureVolumeTemperature {
        pressure: Positive<Pressure>,
        volume: Positive<Volume>,
        temperature: ThermodynamicTemperature,
    },
    /// Solve for temperature.
    PressureVolumeAmount {
        pressure: Positive<Pressure>,
        volume: Positive<Volume>,
        amount: Positive<AmountOfSubstance>,
    },
}

/// A gas sample satisfying `PV = nRT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub pressure: Pressure,
    pub volume: Volume,
    pub amount: AmountOfSubstance,
    pub temperature: ThermodynamicTemperature,
}

impl Sample {
    /// `PV - nRT` in joules; zero for a consistent sample.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.pressure.get::<pascal>() * self.volume.get::<cubic_meter>()
            - self.amount.get::<mole>() * MOLAR_GAS_CONSTANT * self.temperature.get::<kelvin>()
    }
}

/// Solves `PV = nRT` for the quantity missing from `known`.
#[must_use]
pub fn solve(known: Known) -> Sample {
    let r = MOLAR_GAS_CONSTANT;
    match known {
        Known::VolumeAmountTemperature {
            volume,
            amount,
            temperature,
        } => {
            let (v, n) = (volume.into_inner(), amount.into_inner());
            let p = n.get::<mole>() * r * temperature.get::<kelvin>() / v.get::<cubic_meter>();
            Sample {
                pressure: Pressure::new::<pascal>(p),
                volume: v,
                amount: n,
                temperature,
            }
        }
        Known::PressureAmountTemperature {
            pressure,
            amount,
            temperature,
        } => {
            let (p, n) = (pressure.into_inner(), amount.into_inner());
            let v = n.get::<mole>() * r * temperature.get::<kelvin>() / p.get::<pascal>();
            Sample {
                pressure: p,
                volume: Volume::new::<cubic_meter>(v),
                amount: n,
                temperature,
            }
        }
        Known::PressureVolumeTemperature {
            pressure,
            volume,
            temperature,
        } => {
            let (p, v) = (pressure.into_inner(), volume.into_inner());
            let n = p.get::<pascal>() * v.get::<cubic_meter>() / (r * temperature.get::<kelvin>());
            Sample {
                pressure: p,
                volume: v,
                amount: AmountOfSubstance::new::<mole>(n),
                temperature,
            }
        }
        Known::PressureVolumeAmount {
            pressure,
            volume,
            amount,
        } => {
            let (p, v, n) = (pressure.into_inner(), volume.into_inner(), amount.into_inner());
            let t = p.get::<pascal>() * v.get::<cubic_meter>() / (n.get::<mole>() * r);
            Sample {
                pressure: p,
                volume: v,
                amount: n,
                temperature: ThermodynamicTemperature::new::<kelvin>(t),
            }
        }
    }
}
