//! Projectile motion over level ground, without air resistance.

mod core;

pub use self::core::{AngleOutOfRange, Launch, Trajectory};

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{self, Field, InputError},
    recipe::{Reading, Recipe},
    units::{AccelerationUnit, AngleUnit, LengthUnit, TimeUnit, VelocityUnit},
};

/// Projectile motion calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectileMotion {
    pub format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectileForm {
    pub speed: Field<VelocityUnit>,
    pub angle: Field<AngleUnit>,
    /// Blank means standard gravity.
    pub gravity: Field<AccelerationUnit>,
    /// Unit for range and maximum height.
    pub distance_unit: LengthUnit,
    /// Unit for time of flight.
    pub time_unit: TimeUnit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileOutput {
    pub trajectory: Trajectory,
    pub range: Reading,
    pub max_height: Reading,
    pub time_of_flight: Reading,
    /// In the unit of the launch speed.
    pub horizontal_velocity: Reading,
    pub initial_vertical_velocity: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectileError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    AngleOutOfRange(#[from] AngleOutOfRange),
}

impl Model for ProjectileMotion {
    type Input = ProjectileForm;
    type Output = ProjectileOutput;
    type Error = ProjectileError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;

        let speed = input.speed.required::<StrictlyPositive>("initial velocity")?;
        let angle = input::require("angle", input.angle.quantity("angle")?)?;
        let gravity = super::gravity(&input.gravity)?;

        let launch = Launch::new(speed, angle, gravity).inspect_err(|err| {
            tracing::debug!(radians = err.radians, "projectile motion: angle out of range");
        })?;
        let trajectory = launch.trajectory();

        let range = Reading::of(trajectory.range, input.distance_unit, fmt);
        let max_height = Reading::of(trajectory.max_height, input.distance_unit, fmt);
        let time_of_flight = Reading::of(trajectory.time_of_flight, input.time_unit, fmt);
        let horizontal_velocity = Reading::of(trajectory.horizontal_velocity, input.speed.unit, fmt);
        let initial_vertical_velocity =
            Reading::of(trajectory.initial_vertical_velocity, input.speed.unit, fmt);

        let mut steps = Recipe::new();
        steps.push(format!(
            "v₀ = {}, θ = {}, g = {}",
            Reading::of(speed.into_inner(), input.speed.unit, fmt),
            Reading::of(angle, input.angle.unit, fmt),
            Reading::of(gravity.into_inner(), input.gravity.unit, fmt),
        ));
        steps.push(format!("R = v₀² sin(2θ) / g = {range}"));
        steps.push(format!("H = v₀² sin²(θ) / 2g = {max_height}"));
        steps.push(format!("T = 2v₀ sin(θ) / g = {time_of_flight}"));
        steps.push(format!("vₓ = v₀ cos(θ) = {horizontal_velocity}"));
        steps.push(format!("v_y₀ = v₀ sin(θ) = {initial_vertical_velocity}"));

        tracing::debug!(
            range_m = trajectory.range.value,
            height_m = trajectory.max_height.value,
            t_s = trajectory.time_of_flight.value,
            "projectile motion solved"
        );

        Ok(ProjectileOutput {
            trajectory,
            range,
            max_height,
            time_of_flight,
            horizontal_velocity,
            initial_vertical_velocity,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn form(speed: &str, angle: &str, unit: AngleUnit) -> ProjectileForm {
        ProjectileForm {
            speed: Field::new(speed, VelocityUnit::MeterPerSecond),
            angle: Field::new(angle, unit),
            gravity: Field::new("9.81", AccelerationUnit::MeterPerSecondSquared),
            distance_unit: LengthUnit::Meter,
            time_unit: TimeUnit::Second,
        }
    }

    #[test]
    fn degrees_and_radians_agree() {
        let calc = ProjectileMotion::default();
        let deg = calc.call(&form("25", "30", AngleUnit::Degree)).unwrap();
        let rad = calc
            .call(&form("25", &(std::f64::consts::PI / 6.0).to_string(), AngleUnit::Radian))
            .unwrap();

        assert_relative_eq!(deg.range.value, rad.range.value, max_relative = 1e-12);
        assert_relative_eq!(deg.range.value, 625.0 * 3f64.sqrt() / 2.0 / 9.81, max_relative = 1e-12);
        assert_relative_eq!(deg.time_of_flight.value, 25.0 / 9.81, max_relative = 1e-12);
    }

    #[test]
    fn output_units() {
        let mut input = form("100", "45", AngleUnit::Degree);
        input.distance_unit = LengthUnit::Kilometer;
        input.time_unit = TimeUnit::Minute;
        input.gravity = Field::new("", AccelerationUnit::MeterPerSecondSquared);

        let out = ProjectileMotion::default().call(&input).unwrap();
        assert_relative_eq!(out.range.value, 10.0 / 9.806_65, max_relative = 1e-12);
        assert_eq!(out.range.unit, "km");
        assert_eq!(out.time_of_flight.unit, "min");
    }

    #[test]
    fn rejects_bad_angles_and_speeds() {
        let calc = ProjectileMotion::default();
        assert!(matches!(
            calc.call(&form("10", "200", AngleUnit::Degree)),
            Err(ProjectileError::AngleOutOfRange(_))
        ));
        assert!(matches!(
            calc.call(&form("0", "45", AngleUnit::Degree)),
            Err(ProjectileError::Input(InputError::Constraint { .. }))
        ));
        assert_eq!(
            calc.call(&form("10", " ", AngleUnit::Degree)),
            Err(ProjectileError::Input(InputError::Missing { field: "angle" }))
        );
    }
}
