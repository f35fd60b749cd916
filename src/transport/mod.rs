//! Transport properties: viscosity (IAPWS R12-08), thermal conductivity
//! (IAPWS R15-11), surface tension (IAPWS R1-76), all in their industrial
//! forms.
//!
//! Transport results are always SI — Pa·s, W/(m·K), N/m — regardless of the
//! unit system selected for the thermodynamic API.

pub(crate) mod conductivity;
pub mod surface_tension;
pub mod viscosity;

pub use surface_tension::surface_tension;
pub use viscosity::viscosity;
