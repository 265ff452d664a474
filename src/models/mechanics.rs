//! Kinematics and dynamics calculators.

pub mod free_fall;
pub mod friction;
pub mod projectile_motion;
pub mod simple_pendulum;

use uom::si::{acceleration::meter_per_second_squared, f64::Acceleration};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    constants::STANDARD_GRAVITY,
    input::{self, Field, InputError},
    units::AccelerationUnit,
};

/// Standard gravity as a quantity.
pub(crate) fn standard_gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY)
}

/// Reads a gravity field, using standard gravity when it is left blank.
pub(crate) fn gravity(
    field: &Field<AccelerationUnit>,
) -> Result<Constrained<Acceleration, StrictlyPositive>, InputError> {
    input::or_default::<_, StrictlyPositive>(field, "gravity", standard_gravity())
}
