//! Internal pipe flow: Reynolds number, Darcy friction factor and
//! Darcy-Weisbach pressure drop.
//!
//! The friction factor uses `64 / Re` for laminar flow, Blasius for smooth
//! or transitional flow, and the implicit Colebrook-White equation for
//! turbulent flow over a rough wall. Colebrook-White is solved by bisection
//! on `f ∈ [1e-5, 1]`.

mod core;

pub use self::core::{
    ColebrookConfig, ColebrookError, Correlation, FrictionFactor, LAMINAR_LIMIT, PipeRun, Regime,
    TURBULENT_LIMIT, Viscosity, friction_factor, reynolds,
};

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::Pressure,
    pressure::{bar, kilopascal, pascal},
    ratio::ratio,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    format::NumberFormat,
    input::{self, Field, InputError},
    recipe::{Reading, Recipe},
    units::{DensityUnit, DynamicViscosityUnit, KinematicViscosityUnit, LengthUnit, VelocityUnit},
};

/// Pipe friction calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeFriction {
    pub format: NumberFormat,
    pub colebrook: ColebrookConfig,
}

/// How the fluid's viscosity is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViscosityFields {
    Kinematic(Field<KinematicViscosityUnit>),
    Dynamic {
        viscosity: Field<DynamicViscosityUnit>,
        density: Field<DensityUnit>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeFrictionForm {
    Reynolds {
        velocity: Field<VelocityUnit>,
        diameter: Field<LengthUnit>,
        viscosity: ViscosityFields,
    },
    /// Leave `roughness` blank for a smooth pipe. `diameter` is only read
    /// when a roughness is given.
    FrictionFactor {
        reynolds: String,
        roughness: Field<LengthUnit>,
        diameter: Field<LengthUnit>,
    },
    PressureDrop {
        friction_factor: String,
        length: Field<LengthUnit>,
        diameter: Field<LengthUnit>,
        velocity: Field<VelocityUnit>,
        density: Field<DensityUnit>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PipeDetails {
    Reynolds { number: f64, regime: Regime },
    FrictionFactor(FrictionFactor),
    PressureDrop(Pressure),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipeFrictionOutput {
    pub details: PipeDetails,
    pub result: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Error)]
pub enum PipeFrictionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Colebrook(#[from] ColebrookError),
}

impl Model for PipeFriction {
    type Input = PipeFrictionForm;
    type Output = PipeFrictionOutput;
    type Error = PipeFrictionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let mut steps = Recipe::new();

        let (details, result) = match input {
            PipeFrictionForm::Reynolds {
                velocity,
                diameter,
                viscosity,
            } => {
                let viscosity = match viscosity {
                    ViscosityFields::Kinematic(nu) => {
                        Viscosity::Kinematic(nu.required::<StrictlyPositive>("kinematic viscosity")?)
                    }
                    ViscosityFields::Dynamic { viscosity, density } => {
                        let viscosity = Viscosity::Dynamic {
                            viscosity: viscosity.required::<StrictlyPositive>("dynamic viscosity")?,
                            density: density.required::<StrictlyPositive>("density")?,
                        };
                        steps.push(format!(
                            "ν = μ / ρ = {} m²/s",
                            fmt.format(viscosity.kinematic().value)
                        ));
                        viscosity
                    }
                };
                let number = reynolds(
                    velocity.required::<StrictlyPositive>("velocity")?,
                    diameter.required::<StrictlyPositive>("diameter")?,
                    &viscosity,
                );
                let regime = Regime::of(number);
                let reading = Reading::plain(number, fmt);
                steps.push(format!("Re = V × D / ν = {reading}"));
                steps.push(format!("Flow is {}", regime.name()));
                (PipeDetails::Reynolds { number, regime }, reading)
            }
            PipeFrictionForm::FrictionFactor {
                reynolds,
                roughness,
                diameter,
            } => {
                let re = input::require(
                    "Reynolds number",
                    input::number("Reynolds number", reynolds)?,
                )?;
                let re = input::constrain::<StrictlyPositive, _>("Reynolds number", re)?;
                let relative_roughness = match roughness.constrained::<NonNegative>("roughness")? {
                    Some(epsilon) => {
                        let d = diameter.required::<StrictlyPositive>("diameter")?;
                        let relative = (epsilon.into_inner() / d.into_inner()).get::<ratio>();
                        Some(input::constrain::<NonNegative, _>("roughness", relative)?)
                    }
                    None => None,
                };

                let factor = friction_factor(re, relative_roughness, &self.colebrook)?;
                steps.push(format!("Re = {} ({})", fmt.format(re.into_inner()), factor.regime.name()));
                steps.push(match factor.correlation {
                    Correlation::Laminar => "f = 64 / Re".to_owned(),
                    Correlation::Blasius => "f = 0.316 × Re^(-0.25)".to_owned(),
                    Correlation::Colebrook => format!(
                        "1/√f = -2 log₁₀(ε/D / 3.7 + 2.51 / (Re √f)), ε/D = {}",
                        fmt.format(relative_roughness.map_or(0.0, |r| r.into_inner()))
                    ),
                });
                let reading = Reading::plain(factor.value, fmt);
                steps.push(format!("f = {reading}"));
                (PipeDetails::FrictionFactor(factor), reading)
            }
            PipeFrictionForm::PressureDrop {
                friction_factor,
                length,
                diameter,
                velocity,
                density,
            } => {
                let f = input::require(
                    "friction factor",
                    input::number("friction factor", friction_factor)?,
                )?;
                let run = PipeRun {
                    friction_factor: input::constrain::<StrictlyPositive, _>("friction factor", f)?,
                    length: length.required::<StrictlyPositive>("length")?,
                    diameter: diameter.required::<StrictlyPositive>("diameter")?,
                    velocity: velocity.required::<NonNegative>("velocity")?,
                    density: density.required::<StrictlyPositive>("density")?,
                };
                let dp = run.pressure_drop();
                let reading = Reading::new(dp.get::<pascal>(), "Pa", fmt);
                steps.push("ΔP = f × (L / D) × ρV² / 2");
                steps.push(format!(
                    "ΔP = {reading} = {} kPa = {} bar",
                    fmt.format(dp.get::<kilopascal>()),
                    fmt.format(dp.get::<bar>()),
                ));
                (PipeDetails::PressureDrop(dp), reading)
            }
        };

        tracing::debug!(result = %result, "pipe friction solved");

        Ok(PipeFrictionOutput {
            details,
            result,
            steps,
        })
    }
}
