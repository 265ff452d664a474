//! Physical constants in SI base units (CODATA 2018 exact values where defined).

/// Standard acceleration of gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Coulomb constant `1 / 4πε₀`, N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Planck constant, J·s.
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

/// Elementary charge, C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Avogadro constant, 1/mol.
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_76e23;

/// Molar gas constant, J/(mol·K).
pub const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618;
