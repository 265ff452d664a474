//! Regular octagon geometry.
//!
//! One known measure (side, apothem or area) fixes the whole octagon. The
//! calculator reports the requested measure plus the full set.

mod core;

pub use self::core::RegularOctagon;

use thiserror::Error;
use twine_core::Model;

use crate::support::{
    constraint::StrictlyPositive,
    format::NumberFormat,
    input::{self, InputError},
    recipe::{Reading, Recipe},
};

use self::core::AREA_FACTOR;

/// Regular octagon calculator.
#[derive(Debug, Clone, Copy)]
pub struct Octagon {
    pub format: NumberFormat,
}

impl Default for Octagon {
    fn default() -> Self {
        Self {
            format: NumberFormat::PRECISE,
        }
    }
}

/// Which measure to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OctagonMode {
    AreaFromSide,
    AreaFromApothem,
    Perimeter,
    SideFromArea,
    Apothem,
    Diagonal,
}

impl OctagonMode {
    /// Name of the single input this mode reads.
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            Self::AreaFromSide | Self::Perimeter | Self::Apothem | Self::Diagonal => "side",
            Self::AreaFromApothem => "apothem",
            Self::SideFromArea => "area",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctagonForm {
    pub mode: OctagonMode,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OctagonOutput {
    pub octagon: RegularOctagon,
    /// The requested measure, in "units" or "square units".
    pub result: Reading,
    pub steps: Recipe,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OctagonError {
    #[error(transparent)]
    Input(#[from] InputError),
}

impl Model for Octagon {
    type Input = OctagonForm;
    type Output = OctagonOutput;
    type Error = OctagonError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let fmt = &self.format;
        let name = input.mode.input_name();
        let value = input::require(name, input::number(name, &input.value)?)?;
        let value = input::constrain::<StrictlyPositive, _>(name, value)?;
        let given = fmt.format(*value.as_ref());

        let mut steps = Recipe::new();
        let (octagon, result, unit) = match input.mode {
            OctagonMode::AreaFromSide => {
                let oct = RegularOctagon::from_side(value);
                steps.push("A = 2(1 + √2)s²");
                steps.push(format!("A = {} × {given}²", fmt.format(AREA_FACTOR)));
                (oct, oct.area(), "square units")
            }
            OctagonMode::AreaFromApothem => {
                let oct = RegularOctagon::from_apothem(value);
                steps.push("s = 2a / (1 + √2)");
                steps.push(format!("s = 2 × {given} / {}", fmt.format(1.0 + std::f64::consts::SQRT_2)));
                steps.push(format!("s = {}", fmt.format(oct.side())));
                steps.push("A = 2(1 + √2)s²");
                (oct, oct.area(), "square units")
            }
            OctagonMode::Perimeter => {
                let oct = RegularOctagon::from_side(value);
                steps.push("P = 8s");
                steps.push(format!("P = 8 × {given}"));
                (oct, oct.perimeter(), "units")
            }
            OctagonMode::SideFromArea => {
                let oct = RegularOctagon::from_area(value);
                steps.push("s = √(A / 2(1 + √2))");
                steps.push(format!("s = √({given} / {})", fmt.format(AREA_FACTOR)));
                (oct, oct.side(), "units")
            }
            OctagonMode::Apothem => {
                let oct = RegularOctagon::from_side(value);
                steps.push("a = s(1 + √2) / 2");
                steps.push(format!("a = {given} × {} / 2", fmt.format(1.0 + std::f64::consts::SQRT_2)));
                (oct, oct.apothem(), "units")
            }
            OctagonMode::Diagonal => {
                let oct = RegularOctagon::from_side(value);
                steps.push("d = s(1 + √2)");
                steps.push(format!("d = {given} × {}", fmt.format(1.0 + std::f64::consts::SQRT_2)));
                (oct, oct.long_diagonal(), "units")
            }
        };

        let result = Reading::new(result, unit, fmt);
        steps.push(format!("= {result}"));
        tracing::debug!(mode = ?input.mode, value = result.value, "octagon solved");

        Ok(OctagonOutput {
            octagon,
            result,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    fn form(mode: OctagonMode, value: &str) -> OctagonForm {
        OctagonForm {
            mode,
            value: value.into(),
        }
    }

    #[test]
    fn area_from_side() {
        let out = Octagon::default().call(&form(OctagonMode::AreaFromSide, "2")).unwrap();
        assert_relative_eq!(out.result.value, 19.313_708_498_984_76, epsilon = 1e-9);
        assert_eq!(out.result.text, "19.313708");
        assert_eq!(out.result.unit, "square units");
        assert_relative_eq!(out.octagon.perimeter(), 16.0);
    }

    #[test]
    fn side_from_area_inverts() {
        let calc = Octagon::default();
        let area = calc.call(&form(OctagonMode::AreaFromSide, "3.5")).unwrap();
        let side = calc
            .call(&form(OctagonMode::SideFromArea, &area.result.value.to_string()))
            .unwrap();
        assert_relative_eq!(side.result.value, 3.5, max_relative = 1e-12);
    }

    #[test]
    fn apothem_and_diagonal() {
        let calc = Octagon::default();
        let a = calc.call(&form(OctagonMode::Apothem, "2")).unwrap();
        let d = calc.call(&form(OctagonMode::Diagonal, "2")).unwrap();
        assert_relative_eq!(2.0 * a.result.value, d.result.value, epsilon = 1e-12);

        let from_apothem = calc.call(&form(OctagonMode::AreaFromApothem, &a.result.value.to_string())).unwrap();
        assert_relative_eq!(from_apothem.octagon.side(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            Octagon::default().call(&form(OctagonMode::Perimeter, "-1")),
            Err(OctagonError::Input(InputError::Constraint {
                field: "side",
                source: ConstraintError::Negative,
            }))
        );
        assert_eq!(
            Octagon::default().call(&form(OctagonMode::SideFromArea, "")),
            Err(OctagonError::Input(InputError::Missing { field: "area" }))
        );
    }
}
