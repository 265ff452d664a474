use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// `uom` gives `ThermodynamicTemperature - ThermodynamicTemperature` the
/// type of an absolute temperature, which misreports the result when shown
/// in °C or °F. [`minus`](Self::minus) returns a [`TemperatureInterval`]
/// instead, so a change from 20 °C to 30 °C reads as 10 °C and not 283.15 °C.
///
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature change `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::{degree_celsius as delta_celsius, degree_fahrenheit as delta_fahrenheit},
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn heating_a_gas_sample() {
        let before = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let after = ThermodynamicTemperature::new::<degree_celsius>(30.0);

        assert_relative_eq!(after.minus(before).get::<delta_celsius>(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(before.minus(after).get::<delta_kelvin>(), -10.0, epsilon = 1e-12);
        assert_relative_eq!(after.minus(before).get::<delta_fahrenheit>(), 18.0, epsilon = 1e-9);
    }

    #[test]
    fn mixed_scales() {
        let body_c = ThermodynamicTemperature::new::<degree_celsius>(37.0);
        let body_f = ThermodynamicTemperature::new::<degree_fahrenheit>(98.6);
        assert_relative_eq!(body_f.minus(body_c).get::<delta_kelvin>(), 0.0, epsilon = 1e-9);
    }
}
