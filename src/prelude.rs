//! Convenient re-exports of commonly used items.

pub use crate::error::{Error, Result};
pub use crate::io::InputPair;
pub use crate::region::{region_hs, region_ph, region_ps, region_tp, Region};
pub use crate::transport::{surface_tension, viscosity};
pub use crate::water::{
    cp_tp, cv_tp, gas_constant, h_tp, p_hs, pcrit, properties, properties_ph, properties_ps,
    properties_tp, psat, ptrip, rho_tp, rhocrit, s_tp, saturated_liquid, saturated_vapor,
    speed_of_sound_tp, t_hs, t_ph, t_ps, tcrit, thermal_conductivity_tp, tsat, ttrip, u_tp,
    v_tp, viscosity_tp, x_ph, x_ps, StateProperties,
};
