use std::f64::consts::PI;

use uom::si::{
    angle::radian,
    angular_velocity::radian_per_second,
    f64::{Acceleration, Angle, AngularVelocity, Frequency, Length, Time, Velocity},
    frequency::hertz,
};

use crate::models::mechanics::standard_gravity;
use crate::support::constraint::{Constrained, StrictlyPositive};

/// An ideal simple pendulum: point mass, massless rod, small oscillations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    length: Length,
    gravity: Acceleration,
}

impl Pendulum {
    #[must_use]
    pub fn new(
        length: Constrained<Length, StrictlyPositive>,
        gravity: Constrained<Acceleration, StrictlyPositive>,
    ) -> Self {
        Self {
            length: length.into_inner(),
            gravity: gravity.into_inner(),
        }
    }

    /// `L = g / 4π²f²`
    #[must_use]
    pub fn from_frequency(
        frequency: Constrained<Frequency, StrictlyPositive>,
        gravity: Constrained<Acceleration, StrictlyPositive>,
    ) -> Self {
        let f = frequency.into_inner();
        let g = gravity.into_inner();
        Self {
            length: g / (f * f) / (4.0 * PI * PI),
            gravity: g,
        }
    }

    /// `L = g (T / 2π)²`
    #[must_use]
    pub fn from_period(
        period: Constrained<Time, StrictlyPositive>,
        gravity: Constrained<Acceleration, StrictlyPositive>,
    ) -> Self {
        let t = period.into_inner();
        let g = gravity.into_inner();
        Self {
            length: g * t * t / (4.0 * PI * PI),
            gravity: g,
        }
    }

    /// Local gravity from a measured length and period, `g = 4π²L / T²`.
    #[must_use]
    pub fn measured(
        length: Constrained<Length, StrictlyPositive>,
        period: Constrained<Time, StrictlyPositive>,
    ) -> Self {
        let l = length.into_inner();
        let t = period.into_inner();
        Self {
            length: l,
            gravity: l / (t * t) * (4.0 * PI * PI),
        }
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }

    /// `T = 2π√(L / g)`
    #[must_use]
    pub fn period(&self) -> Time {
        (self.length / self.gravity).sqrt() * (2.0 * PI)
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.period().recip()
    }

    #[must_use]
    pub fn angular_frequency(&self) -> AngularVelocity {
        AngularVelocity::new::<radian_per_second>(2.0 * PI * self.frequency().get::<hertz>())
    }

    #[must_use]
    pub fn oscillations_per_minute(&self) -> f64 {
        self.frequency().get::<hertz>() * 60.0
    }

    /// Speed at the bottom of the swing, `ωL sin A`.
    #[must_use]
    pub fn max_velocity(&self, amplitude: Angle) -> Velocity {
        self.omega() * self.length * amplitude.get::<radian>().sin()
    }

    /// Tangential acceleration at the turning points, `ω²L sin A`.
    #[must_use]
    pub fn max_acceleration(&self, amplitude: Angle) -> Acceleration {
        let omega = self.omega();
        omega * omega * self.length * amplitude.get::<radian>().sin()
    }

    /// Gravity as a fraction of standard gravity.
    #[must_use]
    pub fn gravity_ratio(&self) -> f64 {
        self.gravity.value / standard_gravity().value
    }

    /// Angular frequency as a plain rate, for products with length.
    fn omega(&self) -> Frequency {
        self.frequency() * (2.0 * PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared, angle::degree, length::meter, time::second,
        velocity::meter_per_second,
    };

    fn positive<T: PartialOrd + num_traits::Zero>(v: T) -> Constrained<T, StrictlyPositive> {
        StrictlyPositive::new(v).unwrap()
    }

    fn earth() -> Constrained<Acceleration, StrictlyPositive> {
        positive(standard_gravity())
    }

    #[test]
    fn seconds_pendulum() {
        // A pendulum with a 2 s period is just under a meter long on Earth.
        let p = Pendulum::from_period(positive(Time::new::<second>(2.0)), earth());
        assert_relative_eq!(p.length().get::<meter>(), 0.993_621_386, epsilon = 1e-9);
        assert_relative_eq!(p.period().get::<second>(), 2.0, max_relative = 1e-12);
        assert_relative_eq!(p.oscillations_per_minute(), 30.0, max_relative = 1e-12);
    }

    #[test]
    fn modes_agree() {
        let p = Pendulum::new(positive(Length::new::<meter>(1.5)), earth());
        let from_f = Pendulum::from_frequency(positive(p.frequency()), earth());
        let measured = Pendulum::measured(positive(p.length()), positive(p.period()));

        assert_relative_eq!(from_f.length().get::<meter>(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(
            measured.gravity().get::<meter_per_second_squared>(),
            9.806_65,
            max_relative = 1e-12
        );
        assert_relative_eq!(measured.gravity_ratio(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn amplitude_dependent_maxima() {
        let p = Pendulum::new(positive(Length::new::<meter>(1.0)), earth());
        let omega = p.angular_frequency().get::<radian_per_second>();
        assert_relative_eq!(omega * omega, 9.806_65, max_relative = 1e-12);

        let a = Angle::new::<degree>(30.0);
        assert_relative_eq!(
            p.max_velocity(a).get::<meter_per_second>(),
            omega * 0.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            p.max_acceleration(a).get::<meter_per_second_squared>(),
            9.806_65 * 0.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(p.max_velocity(Angle::new::<degree>(0.0)).value, 0.0);
    }
}
