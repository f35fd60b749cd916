//! Physical constants and the unit system selected at build time.
//!
//! All internal evaluation happens in the units the IAPWS releases are
//! written in (MPa, kJ/kg, K). The public API scales at its boundary using
//! the factors below, so the `strict-si` feature never touches the
//! coefficient tables or the summation order.

/// Specific gas constant of ordinary water, kJ/(kg·K).
pub(crate) const R: f64 = 0.461526;

/// Critical temperature, K.
pub(crate) const T_CRIT: f64 = 647.096;
/// Critical pressure, MPa.
pub(crate) const P_CRIT: f64 = 22.064;
/// Critical density, kg/m³.
pub(crate) const RHO_CRIT: f64 = 322.0;

/// Triple-point temperature, K.
pub(crate) const T_TRIP: f64 = 273.16;
/// Triple-point pressure, MPa.
pub(crate) const P_TRIP: f64 = 611.657e-6;

/// Lowest temperature of the IF97 envelope, K.
pub(crate) const T_MIN: f64 = 273.15;
/// Region 1/2 ceiling, K; region 5 spans up to `T_MAX5`.
pub(crate) const T_MAX2: f64 = 1073.15;
/// Upper temperature of region 5, K.
pub(crate) const T_MAX5: f64 = 2273.15;
/// Upper pressure of regions 1-3, MPa.
pub(crate) const P_MAX: f64 = 100.0;
/// Upper pressure of region 5, MPa.
pub(crate) const P_MAX5: f64 = 50.0;

/// Region 1/3 boundary temperature, K.
pub(crate) const T_13: f64 = 623.15;
/// Upper end of the B23 curve, K.
pub(crate) const T_23_MAX: f64 = 863.15;
/// Saturation pressure at `T_13`, MPa; the floor of region 3.
pub(crate) const P_SAT_623: f64 = 16.529_164_252_604_5;

/// Factor from internal MPa to the public pressure unit.
#[cfg(not(feature = "strict-si"))]
pub(crate) const PRESSURE_SCALE: f64 = 1.0;
/// Factor from internal MPa to the public pressure unit.
#[cfg(feature = "strict-si")]
pub(crate) const PRESSURE_SCALE: f64 = 1.0e6;

/// Factor from internal kJ-based specific quantities to the public unit.
#[cfg(not(feature = "strict-si"))]
pub(crate) const ENERGY_SCALE: f64 = 1.0;
/// Factor from internal kJ-based specific quantities to the public unit.
#[cfg(feature = "strict-si")]
pub(crate) const ENERGY_SCALE: f64 = 1.0e3;
