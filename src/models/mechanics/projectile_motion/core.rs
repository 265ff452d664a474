use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    angle::radian,
    f64::{Acceleration, Angle, Length, Time, Velocity},
};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Launch angle outside `[0, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("launch angle must be between 0° and 180° (got {radians} rad)")]
pub struct AngleOutOfRange {
    pub radians: f64,
}

/// Slack allowed at the ends of the angle range for rounding in unit conversion.
const ANGLE_SLACK: f64 = 1e-12;

/// A launch over level ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    speed: Velocity,
    angle: Angle,
    gravity: Acceleration,
}

/// Where and when a projectile lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    pub range: Length,
    pub max_height: Length,
    pub time_of_flight: Time,
    pub horizontal_velocity: Velocity,
    pub initial_vertical_velocity: Velocity,
}

impl Launch {
    /// # Errors
    ///
    /// Returns [`AngleOutOfRange`] when the angle is below 0 or above π.
    pub fn new(
        speed: Constrained<Velocity, StrictlyPositive>,
        angle: Angle,
        gravity: Constrained<Acceleration, StrictlyPositive>,
    ) -> Result<Self, AngleOutOfRange> {
        let radians = angle.get::<radian>();
        if !(-ANGLE_SLACK..=PI + ANGLE_SLACK).contains(&radians) {
            return Err(AngleOutOfRange { radians });
        }
        Ok(Self {
            speed: speed.into_inner(),
            angle,
            gravity: gravity.into_inner(),
        })
    }

    #[must_use]
    pub fn trajectory(&self) -> Trajectory {
        let theta = self.angle.get::<radian>();
        let (sin, cos) = theta.sin_cos();
        let v0 = self.speed;
        let g = self.gravity;

        Trajectory {
            range: v0 * v0 / g * (2.0 * theta).sin(),
            max_height: v0 * v0 / (g * 2.0) * (sin * sin),
            time_of_flight: v0 / g * (2.0 * sin),
            horizontal_velocity: v0 * cos,
            initial_vertical_velocity: v0 * sin,
        }
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

    fn launch(speed: f64, degrees: f64) -> Result<Launch, AngleOutOfRange> {
        Launch::new(
            StrictlyPositive::new(Velocity::new::<meter_per_second>(speed)).unwrap(),
            Angle::new::<degree>(degrees),
            StrictlyPositive::new(Acceleration::new::<meter_per_second_squared>(9.81)).unwrap(),
        )
    }

    #[test]
    fn forty_five_degrees_maximizes_range() {
        let best = launch(20.0, 45.0).unwrap().trajectory();
        assert_relative_eq!(best.range.get::<meter>(), 400.0 / 9.81, max_relative = 1e-12);
        assert_relative_eq!(best.max_height.get::<meter>(), 100.0 / 9.81, max_relative = 1e-12);

        for degrees in [15.0, 30.0, 60.0, 75.0] {
            assert!(launch(20.0, degrees).unwrap().trajectory().range < best.range);
        }
    }

    #[test]
    fn complementary_angles_share_range() {
        let low = launch(30.0, 30.0).unwrap().trajectory();
        let high = launch(30.0, 60.0).unwrap().trajectory();
        assert_relative_eq!(low.range.get::<meter>(), high.range.get::<meter>(), max_relative = 1e-12);
        assert!(high.time_of_flight > low.time_of_flight);
    }

    #[test]
    fn vertical_launch() {
        let up = launch(9.81, 90.0).unwrap().trajectory();
        assert_relative_eq!(up.time_of_flight.get::<second>(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(up.range.get::<meter>(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(up.horizontal_velocity.get::<meter_per_second>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_range() {
        assert!(launch(10.0, 0.0).is_ok());
        assert!(launch(10.0, 180.0).is_ok());
        assert!(launch(10.0, -5.0).is_err());
        assert!(launch(10.0, 190.0).is_err());
    }
}
