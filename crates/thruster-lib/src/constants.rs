//! Physical constants shared by the performance models.

/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Unified atomic mass unit (kg).
pub const ATOMIC_MASS_UNIT: f64 = 1.660_539_066_60e-27;

/// Permittivity of free space (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Standard gravity used to express specific impulse in seconds (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.806_65;
