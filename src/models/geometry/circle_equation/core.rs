//! Circles in the plane.

use std::f64::consts::PI;

use thiserror::Error;

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Tolerance used for collinearity and special-circle checks.
///
/// Collinearity compares twice the triangle area against this fraction of
/// the longest side squared, so it holds at any coordinate scale.
pub const TOLERANCE: f64 = 1e-10;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The three points lie on one line, so no circle passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the three points are collinear")]
pub struct Collinear;

/// Coefficients of the general form `x² + y² + Dx + Ey + F = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralForm {
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// A circle with a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: Constrained<f64, StrictlyPositive>) -> Self {
        Self {
            center,
            radius: radius.into_inner(),
        }
    }

    /// The unique circle through three points.
    ///
    /// Uses the determinant of the system
    /// `x² + y² + Dx + Ey + F = 0` evaluated at each point. Vertical and
    /// horizontal point pairs need no special handling.
    ///
    /// # Errors
    ///
    /// Returns [`Collinear`] when the determinant vanishes relative to the
    /// size of the triangle, including when points coincide.
    pub fn through([p1, p2, p3]: [Point; 3]) -> Result<Self, Collinear> {
        let (u, v) = ((p2.x - p1.x, p2.y - p1.y), (p3.x - p1.x, p3.y - p1.y));
        let a = u.0 * v.1 - u.1 * v.0;
        let longest = [p1.distance_to(p2), p1.distance_to(p3), p2.distance_to(p3)]
            .into_iter()
            .fold(0.0, f64::max);
        if a.abs() <= TOLERANCE * longest * longest {
            return Err(Collinear);
        }

        let s1 = p1.x * p1.x + p1.y * p1.y;
        let s2 = p2.x * p2.x + p2.y * p2.y;
        let s3 = p3.x * p3.x + p3.y * p3.y;

        let b = s1 * (p3.y - p2.y) + s2 * (p1.y - p3.y) + s3 * (p2.y - p1.y);
        let c = s1 * (p2.x - p3.x) + s2 * (p3.x - p1.x) + s3 * (p1.x - p2.x);

        let center = Point::new(-b / (2.0 * a), -c / (2.0 * a));
        Ok(Self {
            center,
            radius: center.distance_to(p1),
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn general_form(&self) -> GeneralForm {
        let Point { x: h, y: k } = self.center;
        GeneralForm {
            d: -2.0 * h,
            e: -2.0 * k,
            f: h * h + k * k - self.radius * self.radius,
        }
    }

    #[must_use]
    pub fn is_origin_circle(&self) -> bool {
        self.center.x.abs() < TOLERANCE && self.center.y.abs() < TOLERANCE
    }

    #[must_use]
    pub fn is_unit_circle(&self) -> bool {
        self.is_origin_circle() && (self.radius - 1.0).abs() < TOLERANCE
    }
}
