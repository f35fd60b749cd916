//! Pure-Rust implementation of the IAPWS-IF97 industrial formulation for the
//! thermodynamic and transport properties of water and steam.
//!
//! The crate covers the five IF97 regions with their basic (Gibbs/Helmholtz)
//! equations, the published backward equations `T(p,h)`, `T(p,s)`, `p(h,s)`,
//! the region 3 `v(T,p)` sub-region equations of IAPWS SR5-05, the saturation
//! curve of region 4, and the transport properties (viscosity per IAPWS
//! R12-08, thermal conductivity per IAPWS R15-11, surface tension per IAPWS
//! R1-76), all in their industrial forms.
//!
//! ## Units
//!
//! By default the public API works in the units of the IAPWS verification
//! tables: MPa, kJ/kg, kJ/(kg·K), K, m³/kg, m/s. Enabling the `strict-si`
//! feature switches pressures to Pa and specific energies/entropies/heat
//! capacities to J-based units. Transport properties are always SI
//! (Pa·s, W/(m·K), N/m).
//!
//! ## Example
//!
//! ```
//! use approx::assert_relative_eq;
//! use steam97::water;
//!
//! // Region 1 verification point of IAPWS R7-97(2012), Table 5.
//! let h = water::h_tp(300.0, 3.0)?;
//! assert_relative_eq!(h, 115.331273, max_relative = 1e-8);
//! # Ok::<(), steam97::error::Error>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod io;
pub mod prelude;
pub mod region;
pub mod transport;
pub mod water;

mod regions;
mod units;

#[cfg(test)]
pub(crate) mod test;
