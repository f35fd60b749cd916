//! Consistency invariants: forward/backward round trips, thermodynamic
//! identities, Maxwell-relation symmetry, and saturation-line behavior.

use approx::assert_relative_eq;
use rstest::rstest;
use steam97::region::{region_tp, Region};
use steam97::water;

// The published consistency of the backward T equations is a few tens of
// millikelvin; the saturation quartic round-trips to round-off.
const DT_BACKWARD: f64 = 0.03; // K

#[rstest]
#[case(280.0, 1.0)]
#[case(320.0, 10.0)]
#[case(400.0, 25.0)]
#[case(500.0, 60.0)]
#[case(600.0, 90.0)]
fn region1_temperature_round_trips(#[case] t: f64, #[case] p: f64) {
    assert_eq!(region_tp(t, p).unwrap(), Region::R1);
    let h = water::h_tp(t, p).unwrap();
    let s = water::s_tp(t, p).unwrap();
    assert!((water::t_ph(p, h).unwrap() - t).abs() < DT_BACKWARD);
    assert!((water::t_ps(p, s).unwrap() - t).abs() < DT_BACKWARD);
}

#[rstest]
#[case(300.0, 0.001)]
#[case(450.0, 0.5)]
#[case(600.0, 3.0)]
#[case(700.0, 10.0)]
#[case(900.0, 40.0)]
#[case(1050.0, 90.0)]
fn region2_temperature_round_trips(#[case] t: f64, #[case] p: f64) {
    assert_eq!(region_tp(t, p).unwrap(), Region::R2);
    let h = water::h_tp(t, p).unwrap();
    let s = water::s_tp(t, p).unwrap();
    assert!((water::t_ph(p, h).unwrap() - t).abs() < DT_BACKWARD);
    assert!((water::t_ps(p, s).unwrap() - t).abs() < DT_BACKWARD);
}

#[rstest]
#[case(630.0, 30.0)]
#[case(650.0, 40.0)]
#[case(700.0, 60.0)]
#[case(750.0, 90.0)]
fn region3_temperature_round_trips(#[case] t: f64, #[case] p: f64) {
    assert_eq!(region_tp(t, p).unwrap(), Region::R3);
    let h = water::h_tp(t, p).unwrap();
    let s = water::s_tp(t, p).unwrap();
    assert!((water::t_ph(p, h).unwrap() - t).abs() < 0.05);
    assert!((water::t_ps(p, s).unwrap() - t).abs() < 0.05);
}

#[rstest]
#[case(300.0, 3.0)]
#[case(450.0, 0.5)]
#[case(650.0, 40.0)]
#[case(1500.0, 30.0)]
fn enthalpy_identity_holds_across_regions(#[case] t: f64, #[case] p: f64) {
    let st = water::properties_tp(t, p).unwrap();
    // h = u + p·v, with p in kPa against kJ-based energies.
    assert_relative_eq!(st.h, st.u + p * 1000.0 * st.v, max_relative = 1e-9);
}

#[rstest]
#[case(300.0, 3.0)]
#[case(500.0, 10.0)]
#[case(700.0, 10.0)]
fn maxwell_relation_holds_numerically(#[case] t: f64, #[case] p: f64) {
    // (∂v/∂T)_p = −(∂s/∂p)_T, both by central difference.
    let dt = 1e-3;
    let dp = 1e-4 * p;
    let dv_dt =
        (water::v_tp(t + dt, p).unwrap() - water::v_tp(t - dt, p).unwrap()) / (2.0 * dt);
    let ds_dp =
        (water::s_tp(t, p + dp).unwrap() - water::s_tp(t, p - dp).unwrap()) / (2.0 * dp) / 1000.0;
    assert_relative_eq!(dv_dt, -ds_dp, max_relative = 1e-5);
}

#[test]
fn saturation_round_trips_to_round_off() {
    let mut t = 273.16;
    while t < 647.0 {
        let p = water::psat(t).unwrap();
        assert_relative_eq!(water::tsat(p).unwrap(), t, max_relative = 1e-9);
        t += 10.0;
    }
}

#[test]
fn latent_heat_follows_clapeyron() {
    for &p in &[0.1, 1.0, 5.0, 10.0] {
        let liq = water::saturated_liquid(p).unwrap();
        let vap = water::saturated_vapor(p).unwrap();
        let t = liq.t;
        let dt = 1e-3;
        let dpsat_dt =
            (water::psat(t + dt).unwrap() - water::psat(t - dt).unwrap()) / (2.0 * dt);
        // Clapeyron: h'' − h' = T·(v'' − v')·dp/dT, p-slope in kPa.
        let latent = vap.h - liq.h;
        let clapeyron = t * (vap.v - liq.v) * dpsat_dt * 1000.0;
        assert_relative_eq!(latent, clapeyron, max_relative = 1e-4);
    }
}

#[test]
fn p_hs_round_trips_through_the_forward_equations() {
    for &(t, p) in &[(300.0, 3.0), (450.0, 1.0), (700.0, 10.0), (900.0, 40.0)] {
        let h = water::h_tp(t, p).unwrap();
        let s = water::s_tp(t, p).unwrap();
        assert_relative_eq!(water::p_hs(h, s).unwrap(), p, max_relative = 1e-4);
    }
}

#[test]
fn two_phase_backward_temperature_is_the_saturation_temperature() {
    let p = 1.0;
    let liq = water::saturated_liquid(p).unwrap();
    let vap = water::saturated_vapor(p).unwrap();
    let h_mid = 0.5 * (liq.h + vap.h);
    assert_relative_eq!(
        water::t_ph(p, h_mid).unwrap(),
        water::tsat(p).unwrap(),
        max_relative = 1e-12
    );
}
