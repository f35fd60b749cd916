//! IF97 region identification for every supported input pair.

use crate::error::{Error, Result};
use crate::regions::{boundaries, region1, region2, region4};
use crate::units::{
    P_CRIT, P_MAX, P_MAX5, P_SAT_623, P_TRIP, T_13, T_23_MAX, T_MAX2, T_MAX5, T_MIN,
};
use strum_macros::AsRefStr;

/// One of the five IF97 regions.
///
/// Region 4 is the saturation curve; the forward `(T,p)` classifier never
/// returns it (a point at exactly `psat(T)` is resolved to the liquid side),
/// but the `(p,h)`, `(p,s)` and `(h,s)` classifiers do, for states inside
/// the two-phase dome.
#[derive(AsRefStr, Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Compressed liquid.
    #[strum(to_string = "region_1")]
    R1,
    /// Superheated vapor.
    #[strum(to_string = "region_2")]
    R2,
    /// Near-critical fluid.
    #[strum(to_string = "region_3")]
    R3,
    /// Two-phase (saturation).
    #[strum(to_string = "region_4")]
    R4,
    /// High-temperature gas.
    #[strum(to_string = "region_5")]
    R5,
}

/// Classifies a (T,p) state point.
///
/// # Errors
///
/// [`Error::OutOfRange`] outside the IF97 envelope (273.15 K ≤ T ≤ 2273.15 K,
/// p ≤ 100 MPa, and p ≤ 50 MPa above 1073.15 K).
pub fn region_tp(t: f64, p: f64) -> Result<Region> {
    if !t.is_finite() || !(T_MIN..=T_MAX5).contains(&t) {
        return Err(Error::OutOfRange { quantity: "T", value: t, min: T_MIN, max: T_MAX5 });
    }
    if !p.is_finite() || p <= 0.0 || p > P_MAX {
        return Err(Error::OutOfRange { quantity: "p", value: p, min: 0.0, max: P_MAX });
    }
    if t > T_MAX2 {
        if p > P_MAX5 {
            return Err(Error::OutOfRange { quantity: "p", value: p, min: 0.0, max: P_MAX5 });
        }
        return Ok(Region::R5);
    }
    if t <= T_13 {
        if p >= region4::psat(t) {
            Ok(Region::R1)
        } else {
            Ok(Region::R2)
        }
    } else if t <= T_23_MAX && p >= boundaries::b23_p(t) {
        Ok(Region::R3)
    } else {
        Ok(Region::R2)
    }
}

/// Classifies a (p,h) state point for the backward equations.
///
/// # Errors
///
/// [`Error::OutOfRange`] outside the pressure envelope or below the 273.15 K
/// isotherm; [`Error::NoRegion`] above the 1073.15 K isotherm, where no
/// backward formulation exists.
pub fn region_ph(p: f64, h: f64) -> Result<Region> {
    if !p.is_finite() || !(P_TRIP..=P_MAX).contains(&p) {
        return Err(Error::OutOfRange { quantity: "p", value: p, min: P_TRIP, max: P_MAX });
    }
    let no_region = Err(Error::NoRegion { label1: "p", value1: p, label2: "h", value2: h });
    if !h.is_finite() {
        return no_region;
    }
    if h < region1::h(T_MIN, p) {
        return Err(Error::OutOfRange {
            quantity: "h",
            value: h,
            min: region1::h(T_MIN, p),
            max: region2::h(T_MAX2, p),
        });
    }
    if h > region2::h(T_MAX2, p) {
        return no_region;
    }
    if p <= P_SAT_623 {
        let ts = region4::tsat(p);
        if h <= region1::h(ts, p) {
            Ok(Region::R1)
        } else if h >= region2::h(ts, p) {
            Ok(Region::R2)
        } else {
            Ok(Region::R4)
        }
    } else if h <= region1::h(T_13, p) {
        Ok(Region::R1)
    } else if h >= region2::h(boundaries::b23_t(p), p) {
        Ok(Region::R2)
    } else if p < P_CRIT
        && (region4::H_SAT_623_LIQ..=region4::H_SAT_623_VAP).contains(&h)
        && p < region4::psat_h(h)
    {
        Ok(Region::R4)
    } else {
        Ok(Region::R3)
    }
}

/// Classifies a (p,s) state point for the backward equations.
///
/// # Errors
///
/// Mirrors [`region_ph`] in the entropy coordinate.
pub fn region_ps(p: f64, s: f64) -> Result<Region> {
    if !p.is_finite() || !(P_TRIP..=P_MAX).contains(&p) {
        return Err(Error::OutOfRange { quantity: "p", value: p, min: P_TRIP, max: P_MAX });
    }
    let no_region = Err(Error::NoRegion { label1: "p", value1: p, label2: "s", value2: s });
    if !s.is_finite() {
        return no_region;
    }
    if s < region1::s(T_MIN, p) {
        return Err(Error::OutOfRange {
            quantity: "s",
            value: s,
            min: region1::s(T_MIN, p),
            max: region2::s(T_MAX2, p),
        });
    }
    if s > region2::s(T_MAX2, p) {
        return no_region;
    }
    if p <= P_SAT_623 {
        let ts = region4::tsat(p);
        if s <= region1::s(ts, p) {
            Ok(Region::R1)
        } else if s >= region2::s(ts, p) {
            Ok(Region::R2)
        } else {
            Ok(Region::R4)
        }
    } else if s <= region1::s(T_13, p) {
        Ok(Region::R1)
    } else if s >= region2::s(boundaries::b23_t(p), p) {
        Ok(Region::R2)
    } else if p < P_CRIT
        && (region4::S_SAT_623_LIQ..=region4::S_SAT_623_VAP).contains(&s)
        && p < region4::psat_s(s)
    {
        Ok(Region::R4)
    } else {
        Ok(Region::R3)
    }
}

/// Classifies an (h,s) state point, IAPWS SR4-04 boundary scheme.
///
/// # Errors
///
/// [`Error::OutOfRange`] outside the entropy envelope;
/// [`Error::NoRegion`] where the point falls outside every published
/// backward formulation (e.g. above the 1073.15 K isotherm).
pub fn region_hs(h: f64, s: f64) -> Result<Region> {
    let no_region = Err(Error::NoRegion { label1: "h", value1: h, label2: "s", value2: s });
    if !h.is_finite() || !s.is_finite() {
        return no_region;
    }
    if !(boundaries::S_MIN..=boundaries::S_MAX).contains(&s) {
        return Err(Error::OutOfRange {
            quantity: "s",
            value: s,
            min: boundaries::S_MIN,
            max: boundaries::S_MAX,
        });
    }
    if s <= boundaries::S_SAT_623_LIQ {
        if h < boundaries::h1_sat(s) {
            return Ok(Region::R4);
        }
        if s < boundaries::S_B13_MIN || h <= boundaries::hb13(s) {
            return Ok(Region::R1);
        }
        return Ok(Region::R3);
    }
    if s <= boundaries::S_CRIT {
        if h < boundaries::h3a_sat(s) {
            return Ok(Region::R4);
        }
        return Ok(Region::R3);
    }
    if s <= boundaries::S_2BC {
        if h < boundaries::h2c3b_sat(s) {
            return Ok(Region::R4);
        }
        if s <= boundaries::S_B23_MIN {
            return Ok(Region::R3);
        }
        if s <= boundaries::S_B23_MAX {
            // Narrow window along the B23 curve: settle 2 vs 3 through the
            // backward pressure and the curve itself.
            let t = boundaries::tb23_hs(h, s);
            let p = crate::regions::region2::p_hs(h, s);
            if p > boundaries::b23_p(t) {
                return Ok(Region::R3);
            }
        }
        return Ok(Region::R2);
    }
    if h < boundaries::h2ab_sat(s) {
        return Ok(Region::R4);
    }
    Ok(Region::R2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(300.0, 3.0, Region::R1)]
    #[case(300.0, 0.0035, Region::R2)]
    #[case(700.0, 30.0, Region::R2)]
    #[case(650.0, 25.5837018, Region::R3)]
    #[case(2000.0, 30.0, Region::R5)]
    #[case(750.0, 78.3095639, Region::R3)]
    fn classifies_reference_points(#[case] t: f64, #[case] p: f64, #[case] region: Region) {
        assert_eq!(region_tp(t, p).unwrap(), region);
    }

    #[test]
    fn rejects_points_outside_the_envelope() {
        assert!(matches!(region_tp(100.0, 1.0), Err(Error::OutOfRange { .. })));
        assert!(matches!(region_tp(300.0, 200.0), Err(Error::OutOfRange { .. })));
        assert!(matches!(region_tp(1500.0, 80.0), Err(Error::OutOfRange { .. })));
    }

    #[rstest]
    #[case(3.0, 500.0, Region::R1)]
    #[case(5.0, 3500.0, Region::R2)]
    #[case(20.0, 1700.0, Region::R3)]
    #[case(1.0, 2000.0, Region::R4)]
    fn classifies_ph_points(#[case] p: f64, #[case] h: f64, #[case] region: Region) {
        assert_eq!(region_ph(p, h).unwrap(), region);
    }

    #[rstest]
    #[case(3.0, 0.5, Region::R1)]
    #[case(0.1, 7.5, Region::R2)]
    #[case(20.0, 3.8, Region::R3)]
    #[case(1.0, 4.0, Region::R4)]
    fn classifies_ps_points(#[case] p: f64, #[case] s: f64, #[case] region: Region) {
        assert_eq!(region_ps(p, s).unwrap(), region);
    }

    #[rstest]
    #[case(90.0, 0.0, Region::R1)]
    #[case(2800.0, 6.5, Region::R2)]
    #[case(1700.0, 3.8, Region::R3)]
    #[case(1800.0, 5.3, Region::R4)]
    #[case(2400.0, 6.0, Region::R4)]
    fn classifies_hs_points(#[case] h: f64, #[case] s: f64, #[case] region: Region) {
        assert_eq!(region_hs(h, s).unwrap(), region);
    }

    #[test]
    fn region_strings_are_stable() {
        assert_eq!(Region::R1.as_ref(), "region_1");
        assert_eq!(Region::R4.as_ref(), "region_4");
    }
}
