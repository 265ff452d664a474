use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// A fully known state of a fixed amount of gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    pub pressure: Pressure,
    pub volume: Volume,
    pub temperature: ThermodynamicTemperature,
}

impl GasState {
    /// `T` must already be known to lie above absolute zero.
    #[must_use]
    pub fn new(
        pressure: Constrained<Pressure, StrictlyPositive>,
        volume: Constrained<Volume, StrictlyPositive>,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            pressure: pressure.into_inner(),
            volume: volume.into_inner(),
            temperature,
        }
    }

    /// `PV / T` in J/K, conserved between states of the same sample.
    #[must_use]
    pub fn invariant(&self) -> f64 {
        self.pressure.get::<pascal>() * self.volume.get::<cubic_meter>()
            / self.temperature.get::<kelvin>()
    }

    /// The state at `volume` and `temperature` sharing this state's invariant.
    #[must_use]
    pub fn pressure_at(
        &self,
        volume: Constrained<Volume, StrictlyPositive>,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        let volume = volume.into_inner();
        let p = self.invariant() * temperature.get::<kelvin>() / volume.get::<cubic_meter>();
        Self {
            pressure: Pressure::new::<pascal>(p),
            volume,
            temperature,
        }
    }

    #[must_use]
    pub fn volume_at(
        &self,
        pressure: Constrained<Pressure, StrictlyPositive>,
        temperature: ThermodynamicTemperature,
    ) -> Self {
        let pressure = pressure.into_inner();
        let v = self.invariant() * temperature.get::<kelvin>() / pressure.get::<pascal>();
        Self {
            pressure,
            volume: Volume::new::<cubic_meter>(v),
            temperature,
        }
    }

    #[must_use]
    pub fn temperature_at(
        &self,
        pressure: Constrained<Pressure, StrictlyPositive>,
        volume: Constrained<Volume, StrictlyPositive>,
    ) -> Self {
        let (pressure, volume) = (pressure.into_inner(), volume.into_inner());
        let t = pressure.get::<pascal>() * volume.get::<cubic_meter>() / self.invariant();
        Self {
            pressure,
            volume,
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
        }
    }
}
