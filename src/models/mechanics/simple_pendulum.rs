//! Simple pendulum: period, length, or local gravity.

mod core;

pub use self::core::Pendulum;

use thiserror::Error;
use twine_core::Model;
use uom::si::{angular_velocity::radian_per_second, f64::Angle};
use uom::ConstZero;

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{Field, InputError},
    recipe::{Reading, Recipe},
    units::{AccelerationUnit, AngleUnit, FrequencyUnit, LengthUnit, TimeUnit, VelocityUnit},
};

/// Simple pendulum calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePendulum {
    pub format: NumberFormat,
}

/// What to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendulumMode {
    /// Period from length and gravity.
    Period,
    /// Length from frequency and gravity.
    LengthFromFrequency,
    /// Length from period and gravity.
    LengthFromPeriod,
    /// Local gravity from length and period.
    Gravity,
}

/// The pendulum form; each mode reads only the fields it needs.
///
/// Field units double as the display units of the answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendulumForm {
    pub mode: PendulumMode,
    pub length: Field<LengthUnit>,
    pub period: Field<TimeUnit>,
    pub frequency: Field<FrequencyUnit>,
    /// Blank means standard gravity.
    pub gravity: Field<AccelerationUnit>,
    /// Swing amplitude for the period mode; blank means zero.
    pub amplitude: Field<AngleUnit>,
}

impl PendulumForm {
    pub fn new(mode: PendulumMode) -> Self {
        Self {
            mode,
            length: Field::new("", LengthUnit::Meter),
            period: Field::new("", TimeUnit::Second),
            frequency: Field::new("", FrequencyUnit::Hertz),
            gravity: Field::new("", AccelerationUnit::MeterPerSecondSquared),
            amplitude: Field::new("", AngleUnit::Degree),
        }
    }
}

/// How measured gravity compares with standard gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityComparison {
    pub percent_of_standard: Reading,
    pub note: &'static str,
}

/// Maxima that depend on the swing amplitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Swing {
    pub max_velocity: Reading,
    pub max_acceleration: Reading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendulumOutput {
    pub pendulum: Pendulum,
    pub length: Reading,
    pub gravity: Reading,
    pub period: Reading,
    pub frequency: Reading,
    /// rad/s
    pub angular_frequency: Reading,
    pub oscillations_per_minute: Reading,
    /// Present in [`PendulumMode::Period`].
    pub swing: Option<Swing>,
    /// Present in [`PendulumMode::Gravity`].
    pub comparison: Option<GravityComparison>,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PendulumError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for SimplePendulum {
    type Input = PendulumForm;
    type Output = PendulumOutput;
    type Error = PendulumError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let mut steps = Recipe::new();

        let pendulum = match input.mode {
            PendulumMode::Period => {
                steps.push("T = 2π√(L / g)");
                Pendulum::new(
                    input.length.required::<StrictlyPositive>("length")?,
                    super::gravity(&input.gravity)?,
                )
            }
            PendulumMode::LengthFromFrequency => {
                steps.push("L = g / (4π²f²)");
                Pendulum::from_frequency(
                    input.frequency.required::<StrictlyPositive>("frequency")?,
                    super::gravity(&input.gravity)?,
                )
            }
            PendulumMode::LengthFromPeriod => {
                steps.push("L = g × (T / 2π)²");
                Pendulum::from_period(
                    input.period.required::<StrictlyPositive>("period")?,
                    super::gravity(&input.gravity)?,
                )
            }
            PendulumMode::Gravity => {
                steps.push("g = 4π² × L / T²");
                Pendulum::measured(
                    input.length.required::<StrictlyPositive>("length")?,
                    input.period.required::<StrictlyPositive>("period")?,
                )
            }
        };

        let length = Reading::of(pendulum.length(), input.length.unit, fmt);
        let gravity = Reading::of(pendulum.gravity(), input.gravity.unit, fmt);
        let period = Reading::of(pendulum.period(), input.period.unit, fmt);
        let frequency = Reading::of(pendulum.frequency(), input.frequency.unit, fmt);
        let angular_frequency = Reading::new(
            pendulum.angular_frequency().get::<radian_per_second>(),
            "rad/s",
            fmt,
        );
        let oscillations_per_minute = Reading::new(pendulum.oscillations_per_minute(), "/min", fmt);

        steps.push(format!("L = {length}, g = {gravity}"));
        steps.push(format!("T = {period}, f = 1 / T = {frequency}"));
        steps.push(format!("ω = 2πf = {angular_frequency}"));

        let swing = match input.mode {
            PendulumMode::Period => {
                let amplitude = input
                    .amplitude
                    .quantity("amplitude")?
                    .unwrap_or(Angle::ZERO);
                let max_velocity = Reading::of(
                    pendulum.max_velocity(amplitude),
                    VelocityUnit::MeterPerSecond,
                    fmt,
                );
                let max_acceleration = Reading::of(
                    pendulum.max_acceleration(amplitude),
                    AccelerationUnit::MeterPerSecondSquared,
                    fmt,
                );
                steps.push(format!(
                    "v_max = ωL sin(A) = {max_velocity}, a_max = ω²L sin(A) = {max_acceleration}"
                ));
                Some(Swing {
                    max_velocity,
                    max_acceleration,
                })
            }
            _ => None,
        };

        let comparison = (input.mode == PendulumMode::Gravity).then(|| {
            let ratio = pendulum.gravity_ratio();
            let comparison = GravityComparison {
                percent_of_standard: Reading::new(ratio * 100.0, "%", fmt),
                note: if ratio > 1.0 {
                    "higher gravity than standard (higher latitude or denser ground)"
                } else {
                    "lower gravity than standard (equator or altitude)"
                },
            };
            steps.push(format!(
                "g / g₀ = {} of standard gravity",
                comparison.percent_of_standard
            ));
            comparison
        });

        tracing::debug!(
            mode = ?input.mode,
            length_m = pendulum.length().value,
            gravity_mps2 = pendulum.gravity().value,
            period_s = pendulum.period().value,
            "simple pendulum solved"
        );

        Ok(PendulumOutput {
            pendulum,
            length,
            gravity,
            period,
            frequency,
            angular_frequency,
            oscillations_per_minute,
            swing,
            comparison,
            steps,
        })
    }
}
