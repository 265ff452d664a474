use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, Z0},
};

use super::{UnitTable, UnknownUnit};

/// Kinematic viscosity, m²/s in SI.
///
/// `uom` files this dimension under diffusion coefficient.
pub type KinematicViscosity = uom::si::f64::DiffusionCoefficient;

/// Spatial frequency (wavenumber), 1/m in SI.
pub type Wavenumber = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`Wavenumber`] from a value in reciprocal meters.
#[must_use]
pub fn per_meter(value: f64) -> Wavenumber {
    Wavenumber {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// Wavenumber display units.
///
/// `uom` has no named units for this dimension, so the table reads and
/// writes the SI value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WavenumberUnit {
    PerMeter,
    PerCentimeter,
    PerMicrometer,
    PerNanometer,
}

impl UnitTable for WavenumberUnit {
    type Quantity = Wavenumber;

    const KIND: &'static str = "wavenumber";

    const ALL: &'static [Self] = &[
        Self::PerMeter,
        Self::PerCentimeter,
        Self::PerMicrometer,
        Self::PerNanometer,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::PerMeter => "m⁻¹",
            Self::PerCentimeter => "cm⁻¹",
            Self::PerMicrometer => "μm⁻¹",
            Self::PerNanometer => "nm⁻¹",
        }
    }

    fn factor(self) -> f64 {
        match self {
            Self::PerMeter => 1.0,
            Self::PerCentimeter => 1e2,
            Self::PerMicrometer => 1e6,
            Self::PerNanometer => 1e9,
        }
    }

    fn to_base(self, value: f64) -> Wavenumber {
        per_meter(value * self.factor())
    }

    fn from_base(self, quantity: Wavenumber) -> f64 {
        quantity.value / self.factor()
    }
}

impl std::fmt::Display for WavenumberUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for WavenumberUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m⁻¹" | "1/m" | "m^-1" => Ok(Self::PerMeter),
            "cm⁻¹" | "1/cm" | "cm^-1" => Ok(Self::PerCentimeter),
            "μm⁻¹" | "1/um" | "um^-1" => Ok(Self::PerMicrometer),
            "nm⁻¹" | "1/nm" | "nm^-1" => Ok(Self::PerNanometer),
            other => Err(UnknownUnit {
                kind: Self::KIND,
                symbol: other.to_owned(),
            }),
        }
    }
}
