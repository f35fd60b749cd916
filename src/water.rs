//! Public property functions of the IF97 core.
//!
//! Unless the `strict-si` feature is enabled, pressures are MPa and specific
//! energies/entropies/heat capacities are kJ-based; temperatures are always
//! K, densities kg/m³, speeds m/s. Transport properties are always SI.

use crate::error::{Error, Result};
use crate::io::InputPair;
use crate::region::{self, Region};
use crate::regions::{boundaries, region1, region2, region3, region3_v, region4, region5};
use crate::regions::RawProps;
use crate::transport::conductivity;
use crate::transport::viscosity::viscosity_unchecked;
use crate::units::{
    ENERGY_SCALE, P_CRIT, P_SAT_623, P_TRIP, PRESSURE_SCALE, R, RHO_CRIT, T_CRIT, T_TRIP,
};

/// Full thermodynamic state bundle returned by the `properties_*` functions.
///
/// Inside the two-phase dome `cp`, `cv` and `w` are undefined and set to
/// NaN, and `x` carries the vapor quality; everywhere else `x` is `None`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateProperties {
    /// Region the state point was resolved to.
    pub region: Region,
    /// Temperature, K.
    pub t: f64,
    /// Pressure.
    pub p: f64,
    /// Specific volume, m³/kg.
    pub v: f64,
    /// Mass density, kg/m³.
    pub rho: f64,
    /// Specific enthalpy.
    pub h: f64,
    /// Specific internal energy.
    pub u: f64,
    /// Specific entropy.
    pub s: f64,
    /// Isobaric heat capacity.
    pub cp: f64,
    /// Isochoric heat capacity.
    pub cv: f64,
    /// Speed of sound, m/s.
    pub w: f64,
    /// Vapor quality, two-phase states only.
    pub x: Option<f64>,
}

impl StateProperties {
    fn from_raw(region: Region, t: f64, p_mpa: f64, raw: RawProps) -> Self {
        Self {
            region,
            t,
            p: p_mpa * PRESSURE_SCALE,
            v: raw.v,
            rho: 1.0 / raw.v,
            h: raw.h * ENERGY_SCALE,
            u: raw.u * ENERGY_SCALE,
            s: raw.s * ENERGY_SCALE,
            cp: raw.cp * ENERGY_SCALE,
            cv: raw.cv * ENERGY_SCALE,
            w: raw.w,
            x: None,
        }
    }
}

fn p_in(p: f64) -> f64 {
    p / PRESSURE_SCALE
}

fn h_in(h: f64) -> f64 {
    h / ENERGY_SCALE
}

fn s_in(s: f64) -> f64 {
    s / ENERGY_SCALE
}

/// Region 3 specific volume from the backward equations, refined against the
/// Helmholtz equation when the `region3-iterate` feature is on.
fn v_region3(t: f64, p_mpa: f64) -> Result<f64> {
    let seed = region3_v::v_tp(t, p_mpa);
    #[cfg(feature = "region3-iterate")]
    {
        region3::refine_v(t, p_mpa, seed)
    }
    #[cfg(not(feature = "region3-iterate"))]
    {
        Ok(seed)
    }
}

fn raw_props_tp(t: f64, p_mpa: f64) -> Result<(Region, RawProps)> {
    let region = region::region_tp(t, p_mpa)?;
    let raw = match region {
        Region::R1 => region1::props(t, p_mpa),
        Region::R2 => region2::props(t, p_mpa),
        Region::R3 => {
            let v = v_region3(t, p_mpa)?;
            region3::props_t_rho(t, 1.0 / v)
        }
        Region::R5 => region5::props(t, p_mpa),
        // The forward classifier resolves saturation points to region 1.
        Region::R4 => region1::props(t, p_mpa),
    };
    Ok((region, raw))
}

/// All properties at (T, p).
///
/// # Errors
///
/// [`Error::OutOfRange`] outside the IF97 envelope;
/// [`Error::ConvergenceFailure`] if the region 3 refinement stalls.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use steam97::water;
///
/// let state = water::properties_tp(300.0, 3.0)?;
/// assert_relative_eq!(state.v, 0.00100215168, max_relative = 1e-8);
/// assert_relative_eq!(state.s, 0.392294792, max_relative = 1e-8);
/// # Ok::<(), steam97::error::Error>(())
/// ```
pub fn properties_tp(t: f64, p: f64) -> Result<StateProperties> {
    let p_mpa = p_in(p);
    let (region, raw) = raw_props_tp(t, p_mpa)?;
    Ok(StateProperties::from_raw(region, t, p_mpa, raw))
}

/// Mass density ρ(T,p), kg/m³.
///
/// # Errors
///
/// See [`properties_tp`].
pub fn rho_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.rho)
}

/// Specific volume v(T,p), m³/kg.
///
/// # Errors
///
/// See [`properties_tp`].
pub fn v_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.v)
}

/// Specific enthalpy h(T,p).
///
/// # Errors
///
/// See [`properties_tp`].
pub fn h_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.h)
}

/// Specific internal energy u(T,p).
///
/// # Errors
///
/// See [`properties_tp`].
pub fn u_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.u)
}

/// Specific entropy s(T,p).
///
/// # Errors
///
/// See [`properties_tp`].
pub fn s_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.s)
}

/// Isobaric heat capacity cp(T,p).
///
/// # Errors
///
/// See [`properties_tp`].
pub fn cp_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.cp)
}

/// Isochoric heat capacity cv(T,p).
///
/// # Errors
///
/// See [`properties_tp`].
pub fn cv_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.cv)
}

/// Speed of sound w(T,p), m/s.
///
/// # Errors
///
/// See [`properties_tp`].
pub fn speed_of_sound_tp(t: f64, p: f64) -> Result<f64> {
    Ok(properties_tp(t, p)?.w)
}

/// Backward temperature T(p,h), K.
///
/// Two-phase inputs resolve to `Tsat(p)`.
///
/// # Errors
///
/// [`Error::OutOfRange`] / [`Error::NoRegion`] per the (p,h) classifier.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use steam97::water;
///
/// assert_relative_eq!(water::t_ph(3.0, 500.0)?, 391.798509, max_relative = 1e-8);
/// # Ok::<(), steam97::error::Error>(())
/// ```
pub fn t_ph(p: f64, h: f64) -> Result<f64> {
    let (p_mpa, h_kj) = (p_in(p), h_in(h));
    Ok(match region::region_ph(p_mpa, h_kj)? {
        Region::R1 => region1::t_ph(p_mpa, h_kj),
        Region::R2 => region2::t_ph(p_mpa, h_kj),
        Region::R3 => region3::t_ph(p_mpa, h_kj),
        Region::R4 => region4::tsat(p_mpa),
        // The (p,h) classifier never yields region 5.
        Region::R5 => region4::tsat(p_mpa),
    })
}

/// Backward temperature T(p,s), K.
///
/// Two-phase inputs resolve to `Tsat(p)`.
///
/// # Errors
///
/// [`Error::OutOfRange`] / [`Error::NoRegion`] per the (p,s) classifier.
pub fn t_ps(p: f64, s: f64) -> Result<f64> {
    let (p_mpa, s_kj) = (p_in(p), s_in(s));
    Ok(match region::region_ps(p_mpa, s_kj)? {
        Region::R1 => region1::t_ps(p_mpa, s_kj),
        Region::R2 => region2::t_ps(p_mpa, s_kj),
        Region::R3 => region3::t_ps(p_mpa, s_kj),
        Region::R4 => region4::tsat(p_mpa),
        Region::R5 => region4::tsat(p_mpa),
    })
}

/// Backward pressure p(h,s).
///
/// Two-phase inputs resolve through `Tsat(h,s)`, which the supplementary
/// release only publishes for s ≥ s″(623.15 K).
///
/// # Errors
///
/// [`Error::OutOfRange`] / [`Error::NoRegion`] per the (h,s) classifier,
/// including two-phase states below the published entropy span.
pub fn p_hs(h: f64, s: f64) -> Result<f64> {
    let (h_kj, s_kj) = (h_in(h), s_in(s));
    let p_mpa = match region::region_hs(h_kj, s_kj)? {
        Region::R1 => region1::p_hs(h_kj, s_kj),
        Region::R2 => region2::p_hs(h_kj, s_kj),
        Region::R3 => region3::p_hs(h_kj, s_kj),
        Region::R4 | Region::R5 => {
            if s_kj < region4::S_SAT_623_VAP {
                return Err(Error::OutOfRange {
                    quantity: "s",
                    value: s,
                    min: region4::S_SAT_623_VAP * ENERGY_SCALE,
                    max: boundaries::S_MAX * ENERGY_SCALE,
                });
            }
            region4::psat(region4::tsat_hs(h_kj, s_kj))
        }
    };
    Ok(p_mpa * PRESSURE_SCALE)
}

/// Backward temperature T(h,s), K.
///
/// Two-phase inputs use the direct `Tsat(h,s)` equation; single-phase
/// inputs go through [`p_hs`] and the matching T(p,·) backward.
///
/// # Errors
///
/// As [`p_hs`].
pub fn t_hs(h: f64, s: f64) -> Result<f64> {
    let (h_kj, s_kj) = (h_in(h), s_in(s));
    match region::region_hs(h_kj, s_kj)? {
        Region::R4 => {
            if s_kj < region4::S_SAT_623_VAP {
                return Err(Error::OutOfRange {
                    quantity: "s",
                    value: s,
                    min: region4::S_SAT_623_VAP * ENERGY_SCALE,
                    max: boundaries::S_MAX * ENERGY_SCALE,
                });
            }
            Ok(region4::tsat_hs(h_kj, s_kj))
        }
        _ => t_ph(p_hs(h, s)?, h),
    }
}

/// Saturation pressure psat(T).
///
/// # Errors
///
/// [`Error::OutOfRange`] outside 273.15 K … T_c.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use steam97::water;
///
/// assert_relative_eq!(water::psat(500.0)?, 2.63889776, max_relative = 1e-8);
/// # Ok::<(), steam97::error::Error>(())
/// ```
pub fn psat(t: f64) -> Result<f64> {
    if !region4::in_saturation_span_t(t) {
        return Err(Error::OutOfRange { quantity: "T", value: t, min: 273.15, max: T_CRIT });
    }
    Ok(region4::psat(t) * PRESSURE_SCALE)
}

/// Saturation temperature Tsat(p), K.
///
/// # Errors
///
/// [`Error::OutOfRange`] outside the triple-point…critical pressure span.
pub fn tsat(p: f64) -> Result<f64> {
    let p_mpa = p_in(p);
    if !region4::in_saturation_span_p(p_mpa) {
        return Err(Error::OutOfRange {
            quantity: "p",
            value: p,
            min: P_TRIP * PRESSURE_SCALE,
            max: P_CRIT * PRESSURE_SCALE,
        });
    }
    Ok(region4::tsat(p_mpa))
}

fn two_phase_bundle(p_mpa: f64, x: f64) -> Result<StateProperties> {
    let ts = region4::tsat(p_mpa);
    let liq = region1::props(ts, p_mpa);
    let vap = region2::props(ts, p_mpa);
    let mix = |a: f64, b: f64| a + x * (b - a);
    Ok(StateProperties {
        region: Region::R4,
        t: ts,
        p: p_mpa * PRESSURE_SCALE,
        v: mix(liq.v, vap.v),
        rho: 1.0 / mix(liq.v, vap.v),
        h: mix(liq.h, vap.h) * ENERGY_SCALE,
        u: mix(liq.u, vap.u) * ENERGY_SCALE,
        s: mix(liq.s, vap.s) * ENERGY_SCALE,
        cp: f64::NAN,
        cv: f64::NAN,
        w: f64::NAN,
        x: Some(x),
    })
}

fn dome_quality_span(p_mpa: f64, label: &'static str, value: f64) -> Result<()> {
    if p_mpa > P_SAT_623 {
        // The mixing rules above rely on the region 1/2 equations at Tsat;
        // inside the region 3 dome those do not apply.
        return Err(Error::OutOfRange {
            quantity: label,
            value,
            min: P_TRIP * PRESSURE_SCALE,
            max: P_SAT_623 * PRESSURE_SCALE,
        });
    }
    Ok(())
}

/// All properties at (p,h), including two-phase states below 623.15 K.
///
/// # Errors
///
/// As the (p,h) classifier; additionally, two-phase states inside the
/// region 3 dome (p > psat(623.15 K)) have no closed-form property set and
/// return [`Error::OutOfRange`].
pub fn properties_ph(p: f64, h: f64) -> Result<StateProperties> {
    let (p_mpa, h_kj) = (p_in(p), h_in(h));
    match region::region_ph(p_mpa, h_kj)? {
        Region::R4 => {
            dome_quality_span(p_mpa, "p", p)?;
            let ts = region4::tsat(p_mpa);
            let hl = region1::props(ts, p_mpa).h;
            let hv = region2::props(ts, p_mpa).h;
            two_phase_bundle(p_mpa, (h_kj - hl) / (hv - hl))
        }
        Region::R3 => {
            let t = region3::t_ph(p_mpa, h_kj);
            let v = v_region3(t, p_mpa)?;
            Ok(StateProperties::from_raw(Region::R3, t, p_mpa, region3::props_t_rho(t, 1.0 / v)))
        }
        region => {
            let t = match region {
                Region::R1 => region1::t_ph(p_mpa, h_kj),
                _ => region2::t_ph(p_mpa, h_kj),
            };
            let raw = match region {
                Region::R1 => region1::props(t, p_mpa),
                _ => region2::props(t, p_mpa),
            };
            Ok(StateProperties::from_raw(region, t, p_mpa, raw))
        }
    }
}

/// All properties at (p,s), including two-phase states below 623.15 K.
///
/// # Errors
///
/// As [`properties_ph`], in the entropy coordinate.
pub fn properties_ps(p: f64, s: f64) -> Result<StateProperties> {
    let (p_mpa, s_kj) = (p_in(p), s_in(s));
    match region::region_ps(p_mpa, s_kj)? {
        Region::R4 => {
            dome_quality_span(p_mpa, "p", p)?;
            let ts = region4::tsat(p_mpa);
            let sl = region1::props(ts, p_mpa).s;
            let sv = region2::props(ts, p_mpa).s;
            two_phase_bundle(p_mpa, (s_kj - sl) / (sv - sl))
        }
        Region::R3 => {
            let t = region3::t_ps(p_mpa, s_kj);
            let v = v_region3(t, p_mpa)?;
            Ok(StateProperties::from_raw(Region::R3, t, p_mpa, region3::props_t_rho(t, 1.0 / v)))
        }
        region => {
            let t = match region {
                Region::R1 => region1::t_ps(p_mpa, s_kj),
                _ => region2::t_ps(p_mpa, s_kj),
            };
            let raw = match region {
                Region::R1 => region1::props(t, p_mpa),
                _ => region2::props(t, p_mpa),
            };
            Ok(StateProperties::from_raw(region, t, p_mpa, raw))
        }
    }
}

/// Vapor quality x(p,h): 0 for subcooled liquid, 1 for superheated steam.
///
/// # Errors
///
/// As [`properties_ph`]; supercritical/region 3 states have no quality.
pub fn x_ph(p: f64, h: f64) -> Result<f64> {
    let (p_mpa, h_kj) = (p_in(p), h_in(h));
    match region::region_ph(p_mpa, h_kj)? {
        Region::R1 => Ok(0.0),
        Region::R2 | Region::R5 => Ok(1.0),
        Region::R4 => {
            dome_quality_span(p_mpa, "p", p)?;
            let ts = region4::tsat(p_mpa);
            let hl = region1::props(ts, p_mpa).h;
            let hv = region2::props(ts, p_mpa).h;
            Ok(((h_kj - hl) / (hv - hl)).clamp(0.0, 1.0))
        }
        Region::R3 => Err(Error::OutOfRange {
            quantity: "p",
            value: p,
            min: P_TRIP * PRESSURE_SCALE,
            max: P_SAT_623 * PRESSURE_SCALE,
        }),
    }
}

/// Vapor quality x(p,s).
///
/// # Errors
///
/// As [`x_ph`].
pub fn x_ps(p: f64, s: f64) -> Result<f64> {
    let (p_mpa, s_kj) = (p_in(p), s_in(s));
    match region::region_ps(p_mpa, s_kj)? {
        Region::R1 => Ok(0.0),
        Region::R2 | Region::R5 => Ok(1.0),
        Region::R4 => {
            dome_quality_span(p_mpa, "p", p)?;
            let ts = region4::tsat(p_mpa);
            let sl = region1::props(ts, p_mpa).s;
            let sv = region2::props(ts, p_mpa).s;
            Ok(((s_kj - sl) / (sv - sl)).clamp(0.0, 1.0))
        }
        Region::R3 => Err(Error::OutOfRange {
            quantity: "p",
            value: p,
            min: P_TRIP * PRESSURE_SCALE,
            max: P_SAT_623 * PRESSURE_SCALE,
        }),
    }
}

/// Saturated-liquid state bundle at pressure `p` (x = 0).
///
/// # Errors
///
/// [`Error::OutOfRange`] above psat(623.15 K), where the region 1 equation
/// stops covering the liquid line.
pub fn saturated_liquid(p: f64) -> Result<StateProperties> {
    let p_mpa = p_in(p);
    if !(P_TRIP..=P_SAT_623).contains(&p_mpa) {
        return Err(Error::OutOfRange {
            quantity: "p",
            value: p,
            min: P_TRIP * PRESSURE_SCALE,
            max: P_SAT_623 * PRESSURE_SCALE,
        });
    }
    let ts = region4::tsat(p_mpa);
    let mut state = StateProperties::from_raw(Region::R4, ts, p_mpa, region1::props(ts, p_mpa));
    state.x = Some(0.0);
    Ok(state)
}

/// Saturated-vapor state bundle at pressure `p` (x = 1).
///
/// # Errors
///
/// As [`saturated_liquid`].
pub fn saturated_vapor(p: f64) -> Result<StateProperties> {
    let p_mpa = p_in(p);
    if !(P_TRIP..=P_SAT_623).contains(&p_mpa) {
        return Err(Error::OutOfRange {
            quantity: "p",
            value: p,
            min: P_TRIP * PRESSURE_SCALE,
            max: P_SAT_623 * PRESSURE_SCALE,
        });
    }
    let ts = region4::tsat(p_mpa);
    let mut state = StateProperties::from_raw(Region::R4, ts, p_mpa, region2::props(ts, p_mpa));
    state.x = Some(1.0);
    Ok(state)
}

/// Dynamic viscosity μ(T,p), Pa·s, with density from the IF97 core.
///
/// # Errors
///
/// As [`properties_tp`] plus the viscosity formulation's own span check.
pub fn viscosity_tp(t: f64, p: f64) -> Result<f64> {
    let rho = properties_tp(t, p)?.rho;
    crate::transport::viscosity(t, rho)
}

/// Thermal conductivity λ(T,p), W/(m·K), with the state derivatives taken
/// from the IF97 core and the industrial critical enhancement.
///
/// # Errors
///
/// As [`properties_tp`].
pub fn thermal_conductivity_tp(t: f64, p: f64) -> Result<f64> {
    let p_mpa = p_in(p);
    let (region, raw) = raw_props_tp(t, p_mpa)?;
    let rho = 1.0 / raw.v;
    let drho_dp = match region {
        Region::R3 => 1.0 / region3::dp_drho_t(t, rho),
        _ => {
            // Central difference on the region's own equation; the
            // simplified industrial enhancement does not need more.
            let v_at = |pp: f64| match region {
                // The forward classifier resolves saturation points to
                // region 1.
                Region::R1 | Region::R4 => region1::props(t, pp).v,
                Region::R2 => region2::props(t, pp).v,
                _ => region5::props(t, pp).v,
            };
            let dp = 1e-4 * p_mpa;
            (1.0 / v_at(p_mpa + dp) - 1.0 / v_at(p_mpa - dp)) / (2.0 * dp)
        }
    };
    let mu = viscosity_unchecked(t, rho);
    Ok(conductivity::lambda(t, rho, raw.cp, raw.cv, drho_dp, mu))
}

/// Generic dispatcher over the supported independent-variable pairs.
///
/// # Errors
///
/// [`Error::UnsupportedPair`] for pairs with no direct formulation; the
/// per-pair errors otherwise.
///
/// # Examples
///
/// ```
/// use steam97::io::InputPair;
/// use steam97::water;
///
/// let state = water::properties(InputPair::PH, 3.0, 500.0)?;
/// assert_eq!(state.region.as_ref(), "region_1");
/// assert!(water::properties(InputPair::TV, 300.0, 0.001).is_err());
/// # Ok::<(), steam97::error::Error>(())
/// ```
pub fn properties(pair: InputPair, a: f64, b: f64) -> Result<StateProperties> {
    match pair {
        InputPair::TP => properties_tp(a, b),
        InputPair::PH => properties_ph(a, b),
        InputPair::PS => properties_ps(a, b),
        InputPair::HS => {
            let (h_kj, s_kj) = (h_in(a), s_in(b));
            match region::region_hs(h_kj, s_kj)? {
                Region::R4 => {
                    let t = t_hs(a, b)?;
                    let p_mpa = region4::psat(t);
                    let hl = region1::props(t, p_mpa).h;
                    let hv = region2::props(t, p_mpa).h;
                    two_phase_bundle(p_mpa, (h_kj - hl) / (hv - hl))
                }
                _ => properties_ph(p_hs(a, b)?, a),
            }
        }
        other => Err(Error::UnsupportedPair(other)),
    }
}

/// Critical temperature, K.
pub fn tcrit() -> f64 {
    T_CRIT
}

/// Critical pressure.
pub fn pcrit() -> f64 {
    P_CRIT * PRESSURE_SCALE
}

/// Critical density, kg/m³.
pub fn rhocrit() -> f64 {
    RHO_CRIT
}

/// Triple-point temperature, K.
pub fn ttrip() -> f64 {
    T_TRIP
}

/// Triple-point pressure.
pub fn ptrip() -> f64 {
    P_TRIP * PRESSURE_SCALE
}

/// Specific gas constant of ordinary water.
pub fn gas_constant() -> f64 {
    R * ENERGY_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // One verification row per basic region (IAPWS R7-97 tables 5, 15, 33
    // and 42), exercised through the dispatcher.
    #[rstest]
    #[case(300.0, 3.0, 0.100_215_168e-2, 0.115_331_273e3)]
    #[case(700.0, 0.0035, 0.923_015_898e2, 0.333_568_375e4)]
    #[case(650.0, 25.583_701_8, 0.200_000_000e-2, 0.186_343_019e4)]
    #[case(2000.0, 30.0, 0.311_385_219e-1, 0.657_122_604e4)]
    fn dispatches_to_every_region(#[case] t: f64, #[case] p: f64, #[case] v: f64, #[case] h: f64) {
        let state = properties_tp(t, p).unwrap();
        assert_if97_eq!(state.v, v, 1e-7);
        assert_if97_eq!(state.h, h, 1e-7);
    }

    #[test]
    fn enthalpy_internal_energy_volume_identity_holds() {
        for &(t, p) in &[(300.0, 3.0), (500.0, 3.0), (700.0, 30.0), (1500.0, 30.0)] {
            let st = properties_tp(t, p).unwrap();
            // h − u = p·v with p in kPa when energies are kJ-based.
            assert_if97_eq!(st.h - st.u, p * 1000.0 * st.v, 1e-9);
        }
    }

    #[test]
    fn two_phase_bundle_interpolates_between_the_lines() {
        let liq = saturated_liquid(1.0).unwrap();
        let vap = saturated_vapor(1.0).unwrap();
        let mid = properties_ph(1.0, (liq.h + vap.h) / 2.0).unwrap();
        assert_eq!(mid.region, Region::R4);
        assert_if97_eq!(mid.x.unwrap(), 0.5, 1e-9);
        assert!(mid.cp.is_nan());
    }

    #[test]
    fn quality_is_clamped_and_ordered() {
        assert_eq!(x_ph(3.0, 500.0).unwrap(), 0.0);
        assert_eq!(x_ph(0.0035, 3335.68375).unwrap(), 1.0);
        let x = x_ps(1.0, 4.0).unwrap();
        assert!((0.0..=1.0).contains(&x));
    }

    #[test]
    fn unsupported_pairs_are_typed_errors() {
        for pair in [InputPair::TV, InputPair::TH, InputPair::TS] {
            assert!(matches!(
                properties(pair, 300.0, 1.0),
                Err(Error::UnsupportedPair(p)) if p == pair
            ));
        }
    }

    // Forward/backward consistency at one representative point per
    // backward sub-region; tolerances are the published consistency bounds
    // of the backward equations.
    crate::test::roundtrip_t!(r1, 450.0, 40.0, 0.03);
    crate::test::roundtrip_t!(r2a, 450.0, 0.5, 0.02);
    crate::test::roundtrip_t!(r2b, 700.0, 20.0, 0.03);
    crate::test::roundtrip_t!(r2c, 700.0, 60.0, 0.03);

    #[test]
    fn constants_match_the_standard() {
        assert_eq!(tcrit(), 647.096);
        assert_eq!(rhocrit(), 322.0);
        #[cfg(not(feature = "strict-si"))]
        {
            assert_eq!(pcrit(), 22.064);
            assert_eq!(gas_constant(), 0.461526);
        }
    }
}
