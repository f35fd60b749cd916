//! The five IF97 regions, their basic and backward equations, and the
//! auxiliary boundary curves between them.
//!
//! Everything in here works in the units of the IAPWS releases (K, MPa,
//! kJ/kg, kJ/(kg·K)); the public API layer scales at its boundary.

pub(crate) mod boundaries;
pub(crate) mod region1;
pub(crate) mod region2;
pub(crate) mod region3;
pub(crate) mod region3_v;
pub(crate) mod region4;
pub(crate) mod region5;

/// Full property set produced by a basic equation at one state point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawProps {
    /// Specific volume, m³/kg.
    pub v: f64,
    /// Specific enthalpy, kJ/kg.
    pub h: f64,
    /// Specific internal energy, kJ/kg.
    pub u: f64,
    /// Specific entropy, kJ/(kg·K).
    pub s: f64,
    /// Isobaric heat capacity, kJ/(kg·K).
    pub cp: f64,
    /// Isochoric heat capacity, kJ/(kg·K).
    pub cv: f64,
    /// Speed of sound, m/s.
    pub w: f64,
}
