//! Equation of a circle.
//!
//! Builds the standard and general forms of a circle either from its center
//! and radius or from three points on its circumference.

mod core;

pub use self::core::{Circle, Collinear, GeneralForm, Point};

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{self, InputError},
    recipe::Recipe,
};

/// Circle equation calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleEquation {
    pub format: NumberFormat,
}

/// What the user knows about the circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircleForm {
    CenterRadius { h: String, k: String, r: String },
    ThreePoints { points: [(String, String); 3] },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleEquationOutput {
    pub circle: Circle,
    pub general: GeneralForm,
    /// `(x - h)² + (y - k)² = r²`
    pub standard_form: String,
    /// `x² + y² + Dx + Ey + F = 0`
    pub general_form: String,
    pub diameter: f64,
    pub circumference: f64,
    pub area: f64,
    pub is_unit_circle: bool,
    pub is_origin_circle: bool,
    pub explanation: String,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CircleEquationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Collinear(#[from] Collinear),
}

const POINT_FIELDS: [(&str, &str); 3] = [("x1", "y1"), ("x2", "y2"), ("x3", "y3")];

impl Model for CircleEquation {
    type Input = CircleForm;
    type Output = CircleEquationOutput;
    type Error = CircleEquationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let mut steps = Recipe::new();

        let circle = match input {
            CircleForm::CenterRadius { h, k, r } => {
                let h = input::require("h", input::number("h", h)?)?;
                let k = input::require("k", input::number("k", k)?)?;
                let r = input::require("r", input::number("r", r)?)?;
                let r = input::constrain::<StrictlyPositive, _>("r", r)?;
                let circle = Circle::new(Point::new(h, k), r);

                let (h, k, r) = (fmt.format(h), fmt.format(k), fmt.format(circle.radius()));
                steps.push(format!("Given: center ({h}, {k}) and radius r = {r}"));
                steps.push("Step 1: Standard form of a circle is (x - h)² + (y - k)² = r²");
                steps.push(format!("Step 2: Substitute (h, k) = ({h}, {k}) and r = {r}"));
                circle
            }
            CircleForm::ThreePoints { points } => {
                let mut parsed = [Point::new(0.0, 0.0); 3];
                for ((slot, (x, y)), (x_name, y_name)) in
                    parsed.iter_mut().zip(points).zip(POINT_FIELDS)
                {
                    *slot = Point::new(
                        input::require(x_name, input::number(x_name, x)?)?,
                        input::require(y_name, input::number(y_name, y)?)?,
                    );
                }

                let circle = Circle::through(parsed).inspect_err(|_| {
                    tracing::debug!(?parsed, "circle equation: points are collinear");
                })?;

                let given = parsed
                    .iter()
                    .map(|p| format!("({}, {})", fmt.format(p.x), fmt.format(p.y)))
                    .collect::<Vec<_>>()
                    .join(", ");
                steps.push(format!("Given: three points {given}"));
                steps.push("Step 1: Solve x² + y² + Dx + Ey + F = 0 at each point by determinants");
                steps.push(format!(
                    "Step 2: Center (h, k) = ({}, {})",
                    fmt.format(circle.center.x),
                    fmt.format(circle.center.y)
                ));
                steps.push(format!(
                    "Step 3: r = √[(x₁ - h)² + (y₁ - k)²] = {}",
                    fmt.format(circle.radius())
                ));
                circle
            }
        };

        let general = circle.general_form();
        let standard_form = standard_form(&circle, fmt);
        let general_form = general_form(&general, fmt);
        steps.push(format!("Standard form: {standard_form}"));
        steps.push(format!(
            "Expand: D = -2h = {}, E = -2k = {}, F = h² + k² - r² = {}",
            fmt.format(general.d),
            fmt.format(general.e),
            fmt.format(general.f)
        ));
        steps.push(format!("General form: {general_form}"));

        let explanation = if circle.is_unit_circle() {
            "This is the unit circle centered at the origin with radius 1.".to_owned()
        } else if circle.is_origin_circle() {
            format!(
                "This circle is centered at the origin (0, 0) with radius {}.",
                fmt.format(circle.radius())
            )
        } else {
            format!(
                "This circle is centered at ({}, {}) with radius {}.",
                fmt.format(circle.center.x),
                fmt.format(circle.center.y),
                fmt.format(circle.radius())
            )
        };

        tracing::debug!(
            h = circle.center.x,
            k = circle.center.y,
            r = circle.radius(),
            "circle equation solved"
        );

        Ok(CircleEquationOutput {
            general,
            standard_form,
            general_form,
            diameter: circle.diameter(),
            circumference: circle.circumference(),
            area: circle.area(),
            is_unit_circle: circle.is_unit_circle(),
            is_origin_circle: circle.is_origin_circle(),
            explanation,
            steps,
            circle,
        })
    }
}

/// `(x - h)²`, `(x + h)²`, or `x²` when the offset is zero.
fn shifted(var: char, offset: f64, fmt: &NumberFormat) -> String {
    if offset == 0.0 {
        format!("{var}²")
    } else if offset > 0.0 {
        format!("({var} - {})²", fmt.format(offset))
    } else {
        format!("({var} + {})²", fmt.format(-offset))
    }
}

/// A signed term such as ` - 4x`; empty when the coefficient is zero.
fn term(coefficient: f64, var: &str, fmt: &NumberFormat) -> String {
    if coefficient == 0.0 {
        String::new()
    } else if coefficient > 0.0 {
        format!(" + {}{var}", fmt.format(coefficient))
    } else {
        format!(" - {}{var}", fmt.format(-coefficient))
    }
}

fn standard_form(circle: &Circle, fmt: &NumberFormat) -> String {
    format!(
        "{} + {} = {}",
        shifted('x', circle.center.x, fmt),
        shifted('y', circle.center.y, fmt),
        fmt.format(circle.radius() * circle.radius())
    )
}

fn general_form(g: &GeneralForm, fmt: &NumberFormat) -> String {
    format!(
        "x² + y²{}{}{} = 0",
        term(g.d, "x", fmt),
        term(g.e, "y", fmt),
        term(g.f, "", fmt)
    )
}
