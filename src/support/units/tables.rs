use std::f64::consts::PI;

use uom::si::{
    acceleration::meter_per_second_squared,
    amount_of_substance::mole,
    angle::radian,
    capacitance::farad,
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    electric_charge::coulomb,
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    energy::joule,
    f64::{
        Acceleration, AmountOfSubstance, Angle, Capacitance, DynamicViscosity, ElectricCharge,
        ElectricCurrent, ElectricPotential, ElectricalResistance, Energy, Force, Frequency,
        Length, MassDensity, Pressure, Time, Velocity, Volume,
    },
    force::newton,
    frequency::hertz,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    time::second,
    velocity::meter_per_second,
    volume::cubic_meter,
};

use crate::support::constants::{AVOGADRO_CONSTANT, ELEMENTARY_CHARGE, STANDARD_GRAVITY};

use super::{KinematicViscosity, table::unit_table};

unit_table! {
    /// Length and distance units.
    LengthUnit: Length => meter, "length" {
        Meter = "m", 1.0;
        Kilometer = "km", 1000.0;
        Centimeter = "cm", 0.01;
        Millimeter = "mm", 0.001;
        Micrometer = "μm" | "um", 1e-6;
        Nanometer = "nm", 1e-9;
        Angstrom = "Å" | "angstrom", 1e-10;
        Foot = "ft", 0.3048;
        Inch = "in", 0.0254;
        Mile = "mi", 1609.34;
    }
}

unit_table! {
    /// Time units.
    TimeUnit: Time => second, "time" {
        Millisecond = "ms", 0.001;
        Second = "s", 1.0;
        Minute = "min", 60.0;
        Hour = "h", 3600.0;
    }
}

unit_table! {
    /// Speed units.
    VelocityUnit: Velocity => meter_per_second, "velocity" {
        MeterPerSecond = "m/s", 1.0;
        KilometerPerHour = "km/h", 0.277_778;
        MilePerHour = "mph", 0.447_04;
        FootPerSecond = "ft/s", 0.3048;
        InchPerSecond = "in/s", 0.0254;
    }
}

unit_table! {
    /// Acceleration units, including multiples of standard gravity.
    AccelerationUnit: Acceleration => meter_per_second_squared, "acceleration" {
        MeterPerSecondSquared = "m/s²" | "m/s^2" | "m/s2", 1.0;
        CentimeterPerSecondSquared = "cm/s²" | "cm/s^2" | "cm/s2", 0.01;
        FootPerSecondSquared = "ft/s²" | "ft/s^2" | "ft/s2", 0.3048;
        StandardGravity = "g", STANDARD_GRAVITY;
    }
}

unit_table! {
    /// Force units.
    ForceUnit: Force => newton, "force" {
        Newton = "N", 1.0;
        Kilonewton = "kN", 1000.0;
        Millinewton = "mN", 0.001;
        Micronewton = "μN" | "uN", 1e-6;
        PoundForce = "lb" | "lbf", 4.448_22;
        OunceForce = "oz" | "ozf", 0.278_014;
        Dyne = "dyn", 1e-5;
    }
}

unit_table! {
    /// Electric charge units, including the elementary charge.
    ChargeUnit: ElectricCharge => coulomb, "charge" {
        Coulomb = "C", 1.0;
        Millicoulomb = "mC", 1e-3;
        Microcoulomb = "μC" | "uC", 1e-6;
        Nanocoulomb = "nC", 1e-9;
        Picocoulomb = "pC", 1e-12;
        ElementaryCharge = "e", ELEMENTARY_CHARGE;
    }
}

unit_table! {
    /// Electric potential units.
    VoltageUnit: ElectricPotential => volt, "voltage" {
        Volt = "V", 1.0;
        Millivolt = "mV", 1e-3;
        Kilovolt = "kV", 1e3;
        Microvolt = "μV" | "uV", 1e-6;
    }
}

unit_table! {
    /// Electric current units.
    CurrentUnit: ElectricCurrent => ampere, "current" {
        Ampere = "A", 1.0;
        Milliampere = "mA", 1e-3;
        Microampere = "μA" | "uA", 1e-6;
        Kiloampere = "kA", 1e3;
        Nanoampere = "nA", 1e-9;
    }
}

unit_table! {
    /// Electrical resistance units.
    ResistanceUnit: ElectricalResistance => ohm, "resistance" {
        Ohm = "Ω" | "ohm", 1.0;
        Milliohm = "mΩ" | "mohm", 1e-3;
        Microohm = "μΩ" | "uohm", 1e-6;
        Kiloohm = "kΩ" | "kohm", 1e3;
        Megaohm = "MΩ" | "Mohm", 1e6;
    }
}

unit_table! {
    /// Capacitance units.
    CapacitanceUnit: Capacitance => farad, "capacitance" {
        Farad = "F", 1.0;
        Microfarad = "μF" | "uF", 1e-6;
        Nanofarad = "nF", 1e-9;
        Picofarad = "pF", 1e-12;
    }
}

unit_table! {
    /// Frequency units.
    FrequencyUnit: Frequency => hertz, "frequency" {
        Hertz = "Hz", 1.0;
        Kilohertz = "kHz", 1e3;
        Megahertz = "MHz", 1e6;
        Gigahertz = "GHz", 1e9;
        Terahertz = "THz", 1e12;
    }
}

unit_table! {
    /// Pressure units.
    PressureUnit: Pressure => pascal, "pressure" {
        Pascal = "Pa", 1.0;
        Kilopascal = "kPa", 1e3;
        Megapascal = "MPa", 1e6;
        Bar = "bar", 1e5;
        Atmosphere = "atm", 101_325.0;
        Psi = "psi", 6894.76;
        Torr = "torr", 133.322;
        MillimeterOfMercury = "mmHg", 133.322;
    }
}

unit_table! {
    /// Volume units.
    VolumeUnit: Volume => cubic_meter, "volume" {
        CubicMeter = "m³" | "m3", 1.0;
        Liter = "L", 1e-3;
        Milliliter = "mL", 1e-6;
        CubicCentimeter = "cm³" | "cm3", 1e-6;
        CubicFoot = "ft³" | "ft3", 0.028_316_8;
        CubicInch = "in³" | "in3", 1.638_71e-5;
        Gallon = "gal", 0.003_785_41;
    }
}

unit_table! {
    /// Energy units, including per-molecule molar energy.
    EnergyUnit: Energy => joule, "energy" {
        Joule = "J", 1.0;
        Electronvolt = "eV", ELEMENTARY_CHARGE;
        Millielectronvolt = "meV", ELEMENTARY_CHARGE * 1e-3;
        Kiloelectronvolt = "keV", ELEMENTARY_CHARGE * 1e3;
        /// Kilocalories per mole, expressed per molecule.
        KilocaloriePerMole = "kcal/mol", 4184.0 / AVOGADRO_CONSTANT;
    }
}

unit_table! {
    /// Plane angle units.
    AngleUnit: Angle => radian, "angle" {
        Degree = "deg" | "°", PI / 180.0;
        Radian = "rad", 1.0;
    }
}

unit_table! {
    /// Amount of substance units.
    AmountUnit: AmountOfSubstance => mole, "amount" {
        Mole = "mol", 1.0;
        Millimole = "mmol", 1e-3;
    }
}

unit_table! {
    /// Kinematic viscosity units.
    KinematicViscosityUnit: KinematicViscosity => square_meter_per_second, "kinematic viscosity" {
        SquareMeterPerSecond = "m²/s" | "m2/s", 1.0;
        Centistokes = "cSt", 1e-6;
    }
}

unit_table! {
    /// Dynamic viscosity units.
    DynamicViscosityUnit: DynamicViscosity => pascal_second, "dynamic viscosity" {
        PascalSecond = "Pa·s" | "Pa.s" | "Pa s", 1.0;
        Centipoise = "cP", 1e-3;
    }
}

unit_table! {
    /// Mass density units.
    DensityUnit: MassDensity => kilogram_per_cubic_meter, "density" {
        KilogramPerCubicMeter = "kg/m³" | "kg/m3", 1.0;
        GramPerCubicCentimeter = "g/cm³" | "g/cm3", 1000.0;
        PoundPerCubicFoot = "lb/ft³" | "lb/ft3", 16.018_46;
    }
}
