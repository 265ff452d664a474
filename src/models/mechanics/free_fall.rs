//! Free fall under constant gravity.
//!
//! Given an optional initial downward velocity and any one or two of final
//! velocity, fall time and height, solves the rest of
//! `v = v₀ + gt`, `h = v₀t + ½gt²` and `v² = v₀² + 2gh`.

mod core;

pub use self::core::{Fall, FinalSlowerThanInitial, Known};

use thiserror::Error;
use twine_core::Model;
use uom::ConstZero;
use uom::si::f64::Velocity;

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    format::NumberFormat,
    input::{self, Field, InputError},
    recipe::{Reading, Recipe},
    units::{AccelerationUnit, LengthUnit, TimeUnit, VelocityUnit},
};

/// Free fall calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeFall {
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeFallForm {
    /// Blank means starting from rest.
    pub initial_velocity: Field<VelocityUnit>,
    pub final_velocity: Field<VelocityUnit>,
    pub time: Field<TimeUnit>,
    pub height: Field<LengthUnit>,
    /// Blank means standard gravity.
    pub gravity: Field<AccelerationUnit>,
}

/// Which quantities the calculator derived rather than read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solved {
    pub final_velocity: bool,
    pub time: bool,
    pub height: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreeFallOutput {
    pub fall: Fall,
    pub solved: Solved,
    pub final_velocity: Reading,
    pub time: Reading,
    pub height: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FreeFallError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    FinalSlowerThanInitial(#[from] FinalSlowerThanInitial),

    /// Final velocity, time and height were all given, or none was.
    #[error("leave at least one of final velocity, time and height blank, and fill in at least one")]
    NothingToSolve,
}

impl Model for FreeFall {
    type Input = FreeFallForm;
    type Output = FreeFallOutput;
    type Error = FreeFallError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let v0 = input::or_default::<_, NonNegative>(
            &input.initial_velocity,
            "initial velocity",
            Velocity::ZERO,
        )?;
        let g = super::gravity(&input.gravity)?;
        let v = input
            .final_velocity
            .constrained::<NonNegative>("final velocity")?;
        let t = input.time.constrained::<StrictlyPositive>("time")?;
        let h = input.height.constrained::<NonNegative>("height")?;

        let known = match (v, t, h) {
            (None, Some(t), Some(h)) => Known::TimeAndHeight(t, h),
            (Some(v), None, Some(h)) => Known::VelocityAndHeight(v, h),
            (Some(v), Some(t), None) => Known::VelocityAndTime(v, t),
            (None, Some(t), None) => Known::Time(t),
            (Some(v), None, None) => Known::Velocity(v),
            (None, None, Some(h)) => Known::Height(h),
            (None, None, None) | (Some(_), Some(_), Some(_)) => {
                tracing::debug!("free fall: nothing to solve");
                return Err(FreeFallError::NothingToSolve);
            }
        };
        let solved = Solved {
            final_velocity: v.is_none(),
            time: t.is_none(),
            height: h.is_none(),
        };

        let fall = self::core::solve(v0, g, known)?;

        let final_velocity = Reading::of(fall.final_velocity, input.final_velocity.unit, fmt);
        let time = Reading::of(fall.time, input.time.unit, fmt);
        let height = Reading::of(fall.height, input.height.unit, fmt);

        let v0 = Reading::of(v0.into_inner(), input.initial_velocity.unit, fmt);
        let g = Reading::of(g.into_inner(), input.gravity.unit, fmt);
        let mut steps = Recipe::new();
        steps.push(format!("v₀ = {v0}, g = {g}"));
        match known {
            Known::TimeAndHeight(..) | Known::Height(..) => {
                steps.push("v = √(v₀² + 2gh)");
                steps.push(format!("v = {final_velocity}"));
                if solved.time {
                    steps.push("t = (v - v₀) / g");
                    steps.push(format!("t = {time}"));
                }
            }
            Known::VelocityAndHeight(..) => {
                steps.push("t = (v - v₀) / g");
                steps.push(format!("t = {time}"));
            }
            Known::VelocityAndTime(..) => {
                steps.push("h = v₀t + ½gt²");
                steps.push(format!("h = {height}"));
            }
            Known::Time(..) => {
                steps.push("v = v₀ + gt");
                steps.push(format!("v = {final_velocity}"));
                steps.push("h = v₀t + ½gt²");
                steps.push(format!("h = {height}"));
            }
            Known::Velocity(..) => {
                steps.push("t = (v - v₀) / g");
                steps.push(format!("t = {time}"));
                steps.push("h = (v² - v₀²) / 2g");
                steps.push(format!("h = {height}"));
            }
        }

        tracing::debug!(
            ?solved,
            v_mps = fall.final_velocity.value,
            t_s = fall.time.value,
            h_m = fall.height.value,
            "free fall solved"
        );

        Ok(FreeFallOutput {
            fall,
            solved,
            final_velocity,
            time,
            height,
            steps,
        })
    }
}

impl Default for FreeFallForm {
    fn default() -> Self {
        Self {
            initial_velocity: Field::new("", VelocityUnit::MeterPerSecond),
            final_velocity: Field::new("", VelocityUnit::MeterPerSecond),
            time: Field::new("", TimeUnit::Second),
            height: Field::new("", LengthUnit::Meter),
            gravity: Field::new("", AccelerationUnit::MeterPerSecondSquared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, time::second};

    use crate::support::constraint::ConstraintError;

    #[test]
    fn drop_from_height_with_standard_gravity() {
        let form = FreeFallForm {
            height: Field::new("100", LengthUnit::Meter),
            ..FreeFallForm::default()
        };
        let out = FreeFall::default().call(&form).unwrap();

        assert!(out.solved.final_velocity && out.solved.time && !out.solved.height);
        assert_relative_eq!(out.fall.time.get::<second>(), 4.516_007_557, epsilon = 1e-8);
        assert_relative_eq!(out.final_velocity.value, 44.286_905_514, epsilon = 1e-8);
    }

    #[test]
    fn readings_use_field_units() {
        let form = FreeFallForm {
            time: Field::new("3", TimeUnit::Second),
            height: Field::new("", LengthUnit::Foot),
            final_velocity: Field::new("", VelocityUnit::KilometerPerHour),
            gravity: Field::new("9.8", AccelerationUnit::MeterPerSecondSquared),
            ..FreeFallForm::default()
        };
        let out = FreeFall::default().call(&form).unwrap();

        assert_relative_eq!(out.fall.height.get::<meter>(), 44.1, epsilon = 1e-9);
        assert_relative_eq!(out.height.value, 44.1 / 0.3048, max_relative = 1e-12);
        assert_eq!(out.height.unit, "ft");
        assert_relative_eq!(out.final_velocity.value, 29.4 / 0.277_778, max_relative = 1e-12);
    }

    #[test]
    fn nothing_to_solve() {
        let calc = FreeFall::default();
        assert_eq!(
            calc.call(&FreeFallForm::default()),
            Err(FreeFallError::NothingToSolve)
        );

        let all = FreeFallForm {
            final_velocity: Field::new("9.8", VelocityUnit::MeterPerSecond),
            time: Field::new("1", TimeUnit::Second),
            height: Field::new("4.9", LengthUnit::Meter),
            ..FreeFallForm::default()
        };
        assert_eq!(calc.call(&all), Err(FreeFallError::NothingToSolve));
    }

    #[test]
    fn invalid_fields() {
        let calc = FreeFall::default();

        let zero_time = FreeFallForm {
            time: Field::new("0", TimeUnit::Second),
            ..FreeFallForm::default()
        };
        assert_eq!(
            calc.call(&zero_time),
            Err(FreeFallError::Input(InputError::Constraint {
                field: "time",
                source: ConstraintError::Zero,
            }))
        );

        let slower = FreeFallForm {
            initial_velocity: Field::new("20", VelocityUnit::MeterPerSecond),
            final_velocity: Field::new("10", VelocityUnit::MeterPerSecond),
            ..FreeFallForm::default()
        };
        assert!(matches!(
            calc.call(&slower),
            Err(FreeFallError::FinalSlowerThanInitial(_))
        ));
    }
}
