//! Plane geometry calculators.

pub mod circle_equation;
pub mod octagon;
