//! Circuit and electrostatics calculators.

pub mod coulombs_law;
pub mod ohms_law;
pub mod rc_circuit;
