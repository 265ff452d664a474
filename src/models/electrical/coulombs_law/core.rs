use uom::si::{
    electric_charge::coulomb,
    f64::{ElectricCharge, Force, Length},
    force::newton,
    length::meter,
};

use crate::support::{
    constants::COULOMB_CONSTANT,
    constraint::{Constrained, NonZero, StrictlyPositive},
};

/// Whether two charges pull together or push apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interaction {
    Attractive,
    #[default]
    Repulsive,
}

/// Three of force, both charges and separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Known {
    Force {
        q1: Constrained<ElectricCharge, NonZero>,
        q2: Constrained<ElectricCharge, NonZero>,
        distance: Constrained<Length, StrictlyPositive>,
    },
    /// Solve for `q1`; its sign follows from the interaction.
    Charge1 {
        force: Constrained<Force, StrictlyPositive>,
        q2: Constrained<ElectricCharge, NonZero>,
        distance: Constrained<Length, StrictlyPositive>,
        interaction: Interaction,
    },
    /// Solve for `q2`; its sign follows from the interaction.
    Charge2 {
        force: Constrained<Force, StrictlyPositive>,
        q1: Constrained<ElectricCharge, NonZero>,
        distance: Constrained<Length, StrictlyPositive>,
        interaction: Interaction,
    },
    Distance {
        force: Constrained<Force, StrictlyPositive>,
        q1: Constrained<ElectricCharge, NonZero>,
        q2: Constrained<ElectricCharge, NonZero>,
    },
}

/// Two point charges satisfying `F = k|q₁q₂| / r²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargePair {
    /// Magnitude of the force on either charge.
    pub force: Force,
    pub q1: ElectricCharge,
    pub q2: ElectricCharge,
    pub distance: Length,
}

impl ChargePair {
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        if (self.q1.value > 0.0) == (self.q2.value > 0.0) {
            Interaction::Repulsive
        } else {
            Interaction::Attractive
        }
    }
}

#[must_use]
pub fn solve(known: Known) -> ChargePair {
    match known {
        Known::Force { q1, q2, distance } => {
            let (q1, q2, r) = (q1.into_inner(), q2.into_inner(), distance.into_inner());
            let force = COULOMB_CONSTANT * (q1.get::<coulomb>() * q2.get::<coulomb>()).abs()
                / r.get::<meter>().powi(2);
            ChargePair {
                force: Force::new::<newton>(force),
                q1,
                q2,
                distance: r,
            }
        }
        Known::Charge1 {
            force,
            q2,
            distance,
            interaction,
        } => {
            let q2 = q2.into_inner();
            let q1 = other_charge(force.into_inner(), q2, distance.into_inner(), interaction);
            ChargePair {
                force: force.into_inner(),
                q1,
                q2,
                distance: distance.into_inner(),
            }
        }
        Known::Charge2 {
            force,
            q1,
            distance,
            interaction,
        } => {
            let q1 = q1.into_inner();
            let q2 = other_charge(force.into_inner(), q1, distance.into_inner(), interaction);
            ChargePair {
                force: force.into_inner(),
                q1,
                q2,
                distance: distance.into_inner(),
            }
        }
        Known::Distance { force, q1, q2 } => {
            let (f, q1, q2) = (force.into_inner(), q1.into_inner(), q2.into_inner());
            let r = (COULOMB_CONSTANT * (q1.get::<coulomb>() * q2.get::<coulomb>()).abs()
                / f.get::<newton>())
            .sqrt();
            ChargePair {
                force: f,
                q1,
                q2,
                distance: Length::new::<meter>(r),
            }
        }
    }
}

/// `|q| = F r² / (k |q_known|)`, signed by the interaction.
fn other_charge(
    force: Force,
    known: ElectricCharge,
    distance: Length,
    interaction: Interaction,
) -> ElectricCharge {
    let q_known = known.get::<coulomb>();
    let magnitude =
        force.get::<newton>() * distance.get::<meter>().powi(2) / (COULOMB_CONSTANT * q_known.abs());
    let sign = match interaction {
        Interaction::Repulsive => q_known.signum(),
        Interaction::Attractive => -q_known.signum(),
    };
    ElectricCharge::new::<coulomb>(sign * magnitude)
}
