use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

type Positive<T> = Constrained<T, StrictlyPositive>;

/// The three quantities the user gave; the fourth is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Known {
    MissingP1 {
        t1: ThermodynamicTemperature,
        p2: Positive<Pressure>,
        t2: ThermodynamicTemperature,
    },
    MissingT1 {
        p1: Positive<Pressure>,
        p2: Positive<Pressure>,
        t2: ThermodynamicTemperature,
    },
    MissingP2 {
        p1: Positive<Pressure>,
        t1: ThermodynamicTemperature,
        t2: ThermodynamicTemperature,
    },
    MissingT2 {
        p1: Positive<Pressure>,
        t1: ThermodynamicTemperature,
        p2: Positive<Pressure>,
    },
}

/// Two states of a gas held at constant volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isochoric {
    pub p1: Pressure,
    pub t1: ThermodynamicTemperature,
    pub p2: Pressure,
    pub t2: ThermodynamicTemperature,
}

impl Isochoric {
    /// `P₂ / P₁`, equal to `T₂ / T₁`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.p2.get::<pascal>() / self.p1.get::<pascal>()
    }
}

fn pressure(p: Pressure, from: ThermodynamicTemperature, to: ThermodynamicTemperature) -> Pressure {
    p * (to.get::<kelvin>() / from.get::<kelvin>())
}

fn temperature(
    t: ThermodynamicTemperature,
    from: Pressure,
    to: Pressure,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(t.get::<kelvin>() * to.get::<pascal>() / from.get::<pascal>())
}

/// Solves `P₁/T₁ = P₂/T₂` for the missing quantity.
#[must_use]
pub fn solve(known: Known) -> Isochoric {
    match known {
        Known::MissingP1 { t1, p2, t2 } => {
            let p2 = p2.into_inner();
            Isochoric {
                p1: pressure(p2, t2, t1),
                t1,
                p2,
                t2,
            }
        }
        Known::MissingT1 { p1, p2, t2 } => {
            let (p1, p2) = (p1.into_inner(), p2.into_inner());
            Isochoric {
                p1,
                t1: temperature(t2, p2, p1),
                p2,
                t2,
            }
        }
        Known::MissingP2 { p1, t1, t2 } => {
            let p1 = p1.into_inner();
            Isochoric {
                p1,
                t1,
                p2: pressure(p1, t1, t2),
                t2,
            }
        }
        Known::MissingT2 { p1, t1, p2 } => {
            let (p1, p2) = (p1.into_inner(), p2.into_inner());
            Isochoric {
                p1,
                t1,
                p2,
                t2: temperature(t1, p1, p2),
            }
        }
    }
}
