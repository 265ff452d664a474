//! Internal pipe flow calculators.

pub mod pipe_friction;
