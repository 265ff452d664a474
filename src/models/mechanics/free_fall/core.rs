use thiserror::Error;
use uom::si::f64::{Acceleration, Length, Time, Velocity};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// The given final velocity is below the initial velocity, which a body
/// falling from rest or moving downward cannot reach.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("final velocity ({final_velocity:?}) is slower than initial velocity ({initial_velocity:?})")]
pub struct FinalSlowerThanInitial {
    pub initial_velocity: Velocity,
    pub final_velocity: Velocity,
}

/// Which of final velocity, time and height are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Known {
    Time(Constrained<Time, StrictlyPositive>),
    Velocity(Constrained<Velocity, NonNegative>),
    Height(Constrained<Length, NonNegative>),
    TimeAndHeight(Constrained<Time, StrictlyPositive>, Constrained<Length, NonNegative>),
    VelocityAndHeight(Constrained<Velocity, NonNegative>, Constrained<Length, NonNegative>),
    VelocityAndTime(Constrained<Velocity, NonNegative>, Constrained<Time, StrictlyPositive>),
}

/// A fully determined fall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fall {
    pub final_velocity: Velocity,
    pub time: Time,
    pub height: Length,
}

/// Solves uniformly accelerated motion from rest or an initial downward speed.
///
/// # Errors
///
/// Returns [`FinalSlowerThanInitial`] when a known final velocity would
/// require a negative fall time.
pub fn solve(
    initial_velocity: Constrained<Velocity, NonNegative>,
    gravity: Constrained<Acceleration, StrictlyPositive>,
    known: Known,
) -> Result<Fall, FinalSlowerThanInitial> {
    let v0 = initial_velocity.into_inner();
    let g = gravity.into_inner();

    let velocity_from_height = |h: Length| -> Velocity { (v0 * v0 + g * h * 2.0).sqrt() };
    let distance_in = |t: Time| -> Length { v0 * t + g * t * t * 0.5 };
    let time_to_reach = |v: Velocity| -> Result<Time, FinalSlowerThanInitial> {
        if v < v0 {
            return Err(FinalSlowerThanInitial {
                initial_velocity: v0,
                final_velocity: v,
            });
        }
        Ok((v - v0) / g)
    };

    let fall = match known {
        Known::TimeAndHeight(t, h) => Fall {
            final_velocity: velocity_from_height(h.into_inner()),
            time: t.into_inner(),
            height: h.into_inner(),
        },
        Known::VelocityAndHeight(v, h) => Fall {
            final_velocity: v.into_inner(),
            time: time_to_reach(v.into_inner())?,
            height: h.into_inner(),
        },
        Known::VelocityAndTime(v, t) => Fall {
            final_velocity: v.into_inner(),
            time: t.into_inner(),
            height: distance_in(t.into_inner()),
        },
        Known::Time(t) => {
            let t = t.into_inner();
            Fall {
                final_velocity: v0 + g * t,
                time: t,
                height: distance_in(t),
            }
        }
        Known::Velocity(v) => {
            let v = v.into_inner();
            Fall {
                final_velocity: v,
                time: time_to_reach(v)?,
                height: (v * v - v0 * v0) / (g * 2.0),
            }
        }
        Known::Height(h) => {
            let h = h.into_inner();
            let v = velocity_from_height(h);
            Fall {
                final_velocity: v,
                time: (v - v0) / g,
                height: h,
            }
        }
    };

    Ok(fall)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared, length::meter, time::second,
        velocity::meter_per_second,
    };

    fn g() -> Constrained<Acceleration, StrictlyPositive> {
        StrictlyPositive::new(Acceleration::new::<meter_per_second_squared>(9.8)).unwrap()
    }

    fn v(mps: f64) -> Constrained<Velocity, NonNegative> {
        NonNegative::new(Velocity::new::<meter_per_second>(mps)).unwrap()
    }

    fn t(s: f64) -> Constrained<Time, StrictlyPositive> {
        StrictlyPositive::new(Time::new::<second>(s)).unwrap()
    }

    fn h(m: f64) -> Constrained<Length, NonNegative> {
        NonNegative::new(Length::new::<meter>(m)).unwrap()
    }

    #[test]
    fn from_rest_given_time() {
        let fall = solve(NonNegative::zero(), g(), Known::Time(t(2.0))).unwrap();
        assert_relative_eq!(fall.final_velocity.get::<meter_per_second>(), 19.6, epsilon = 1e-12);
        assert_relative_eq!(fall.height.get::<meter>(), 19.6, epsilon = 1e-12);
    }

    #[test]
    fn single_knowns_agree() {
        let from_height = solve(v(3.0), g(), Known::Height(h(45.0))).unwrap();
        let from_velocity = solve(
            v(3.0),
            g(),
            Known::Velocity(NonNegative::new(from_height.final_velocity).unwrap()),
        )
        .unwrap();
        let from_time = solve(
            v(3.0),
            g(),
            Known::Time(StrictlyPositive::new(from_height.time).unwrap()),
        )
        .unwrap();

        assert_relative_eq!(from_velocity.height.get::<meter>(), 45.0, max_relative = 1e-12);
        assert_relative_eq!(from_velocity.time.get::<second>(), from_height.time.get::<second>(), max_relative = 1e-12);
        assert_relative_eq!(from_time.height.get::<meter>(), 45.0, max_relative = 1e-12);
    }

    #[test]
    fn pairs() {
        let fall = solve(NonNegative::zero(), g(), Known::TimeAndHeight(t(1.0), h(4.9))).unwrap();
        assert_relative_eq!(fall.final_velocity.get::<meter_per_second>(), 9.8, epsilon = 1e-12);

        let fall = solve(v(2.0), g(), Known::VelocityAndHeight(v(11.8), h(7.0))).unwrap();
        assert_relative_eq!(fall.time.get::<second>(), 1.0, epsilon = 1e-12);

        let fall = solve(v(2.0), g(), Known::VelocityAndTime(v(11.8), t(1.0))).unwrap();
        assert_relative_eq!(fall.height.get::<meter>(), 6.9, epsilon = 1e-12);
    }

    #[test]
    fn final_slower_than_initial() {
        let err = solve(v(10.0), g(), Known::Velocity(v(5.0))).unwrap_err();
        assert_relative_eq!(err.final_velocity.get::<meter_per_second>(), 5.0);
        assert!(solve(v(10.0), g(), Known::VelocityAndHeight(v(5.0), h(1.0))).is_err());
    }
}
