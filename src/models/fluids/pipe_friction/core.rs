mod colebrook;

pub use colebrook::{ColebrookConfig, ColebrookError};

use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Pressure, Velocity},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::KinematicViscosity,
};

type Positive<T> = Constrained<T, StrictlyPositive>;

/// Upper bound of laminar flow.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Lower bound of fully turbulent flow.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// Flow regime by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    Laminar,
    Transitional,
    Turbulent,
}

impl Regime {
    #[must_use]
    pub fn of(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds <= TURBULENT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        }
    }
}

/// Fluid viscosity, given directly or as `μ / ρ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viscosity {
    Kinematic(Positive<KinematicViscosity>),
    Dynamic {
        viscosity: Positive<DynamicViscosity>,
        density: Positive<MassDensity>,
    },
}

impl Viscosity {
    #[must_use]
    pub fn kinematic(&self) -> KinematicViscosity {
        match self {
            Self::Kinematic(nu) => nu.into_inner(),
            Self::Dynamic { viscosity, density } => viscosity.into_inner() / density.into_inner(),
        }
    }
}

/// `Re = V D / ν`.
#[must_use]
pub fn reynolds(velocity: Positive<Velocity>, diameter: Positive<Length>, viscosity: &Viscosity) -> f64 {
    (velocity.into_inner() * diameter.into_inner() / viscosity.kinematic()).get::<ratio>()
}

/// Correlation used to produce a friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correlation {
    /// `f = 64 / Re`
    Laminar,
    /// `f = 0.316 Re^-0.25`
    Blasius,
    /// Implicit Colebrook-White equation.
    Colebrook,
}

/// A Darcy friction factor and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    pub value: f64,
    pub regime: Regime,
    pub correlation: Correlation,
}

/// Darcy friction factor for a Reynolds number and optional relative
/// roughness `ε / D`.
///
/// Colebrook-White applies only to turbulent flow over a rough wall;
/// smooth or transitional flow falls back to Blasius.
///
/// # Errors
///
/// Returns [`ColebrookError`] if the Colebrook-White solve fails.
pub fn friction_factor(
    reynolds: Positive<f64>,
    relative_roughness: Option<Constrained<f64, NonNegative>>,
    config: &ColebrookConfig,
) -> Result<FrictionFactor, ColebrookError> {
    let re = reynolds.into_inner();
    let regime = Regime::of(re);
    let roughness = relative_roughness.map_or(0.0, Constrained::into_inner);

    let (value, correlation) = match regime {
        Regime::Laminar => (64.0 / re, Correlation::Laminar),
        Regime::Turbulent if roughness > 0.0 => {
            (colebrook::solve(re, roughness, config)?, Correlation::Colebrook)
        }
        Regime::Transitional | Regime::Turbulent => (0.316 * re.powf(-0.25), Correlation::Blasius),
    };

    Ok(FrictionFactor {
        value,
        regime,
        correlation,
    })
}

/// A straight pipe run for the Darcy-Weisbach equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeRun {
    pub friction_factor: Positive<f64>,
    pub length: Positive<Length>,
    pub diameter: Positive<Length>,
    pub velocity: Constrained<Velocity, NonNegative>,
    pub density: Positive<MassDensity>,
}

impl PipeRun {
    /// `ΔP = f (L / D) ρ V² / 2`.
    #[must_use]
    pub fn pressure_drop(&self) -> Pressure {
        let slenderness = (self.length.into_inner() / self.diameter.into_inner()).get::<ratio>();
        let v = self.velocity.into_inner();
        self.density.into_inner() * v * v * (self.friction_factor.into_inner() * slenderness / 2.0)
    }
}
