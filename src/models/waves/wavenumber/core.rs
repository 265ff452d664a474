use uom::si::{
    energy::joule,
    f64::{Energy, Frequency, Length},
    frequency::hertz,
    length::meter,
};

use crate::support::{
    constants::{PLANCK_CONSTANT, SPEED_OF_LIGHT},
    constraint::{Constrained, StrictlyPositive},
    units::{Wavenumber, per_meter},
};

/// The quantity a wavenumber is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source {
    /// `ν̃ = 1 / λ`
    Wavelength(Constrained<Length, StrictlyPositive>),
    /// `ν̃ = f / c`
    Frequency(Constrained<Frequency, StrictlyPositive>),
    /// `ν̃ = E / (hc)`
    Energy(Constrained<Energy, StrictlyPositive>),
}

/// One spectral line expressed four ways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub wavenumber: Wavenumber,
    pub wavelength: Length,
    pub frequency: Frequency,
    pub photon_energy: Energy,
}

impl Line {
    #[must_use]
    pub fn new(source: Source) -> Self {
        let per_m = match source {
            Source::Wavelength(wavelength) => wavelength.into_inner().get::<meter>().recip(),
            Source::Frequency(frequency) => frequency.into_inner().get::<hertz>() / SPEED_OF_LIGHT,
            Source::Energy(energy) => {
                energy.into_inner().get::<joule>() / (PLANCK_CONSTANT * SPEED_OF_LIGHT)
            }
        };
        Self {
            wavenumber: per_meter(per_m),
            wavelength: Length::new::<meter>(per_m.recip()),
            frequency: Frequency::new::<hertz>(SPEED_OF_LIGHT * per_m),
            photon_energy: Energy::new::<joule>(PLANCK_CONSTANT * SPEED_OF_LIGHT * per_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{energy::electronvolt, frequency::terahertz, length::nanometer};

    #[test]
    fn green_light() {
        let line = Line::new(Source::Wavelength(
            StrictlyPositive::new(Length::new::<nanometer>(500.0)).unwrap(),
        ));
        assert_relative_eq!(line.wavenumber.value, 2.0e6, max_relative = 1e-12);
        assert_relative_eq!(line.frequency.get::<terahertz>(), 599.584_916, max_relative = 1e-9);
        assert_relative_eq!(line.photon_energy.get::<electronvolt>(), 2.479_683_969, max_relative = 1e-6);
    }

    #[test]
    fn sources_agree() {
        let from_energy = Line::new(Source::Energy(
            StrictlyPositive::new(Energy::new::<electronvolt>(1.0)).unwrap(),
        ));
        let from_frequency = Line::new(Source::Frequency(
            StrictlyPositive::new(from_energy.frequency).unwrap(),
        ));
        let from_wavelength = Line::new(Source::Wavelength(
            StrictlyPositive::new(from_energy.wavelength).unwrap(),
        ));

        for line in [from_frequency, from_wavelength] {
            assert_relative_eq!(line.wavenumber.value, from_energy.wavenumber.value, max_relative = 1e-12);
        }
    }
}
