use std::f64::consts::SQRT_2;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// `2(1 + √2)`, the area of a regular octagon with unit side.
pub const AREA_FACTOR: f64 = 2.0 * (1.0 + SQRT_2);

/// A regular octagon, identified by its side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularOctagon {
    side: f64,
}

impl RegularOctagon {
    #[must_use]
    pub fn from_side(side: Constrained<f64, StrictlyPositive>) -> Self {
        Self {
            side: side.into_inner(),
        }
    }

    /// `s = 2a / (1 + √2)`
    #[must_use]
    pub fn from_apothem(apothem: Constrained<f64, StrictlyPositive>) -> Self {
        Self {
            side: 2.0 * apothem.into_inner() / (1.0 + SQRT_2),
        }
    }

    /// `s = √(A / 2(1 + √2))`
    #[must_use]
    pub fn from_area(area: Constrained<f64, StrictlyPositive>) -> Self {
        Self {
            side: (area.into_inner() / AREA_FACTOR).sqrt(),
        }
    }

    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }

    #[must_use]
    pub fn apothem(&self) -> f64 {
        self.side * (1.0 + SQRT_2) / 2.0
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        8.0 * self.side
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        AREA_FACTOR * self.side * self.side
    }

    /// `d = s(1 + √2)`
    #[must_use]
    pub fn long_diagonal(&self) -> f64 {
        self.side * (1.0 + SQRT_2)
    }
}
