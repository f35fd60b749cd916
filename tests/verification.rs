//! Verification against the published IAPWS computer-program check values:
//! tables 5, 15, 33, 42, 35, 36, 7, 24 of R7-97(2012), table 5/12 of
//! SR3-03(2014), tables 3, 9 of SR2-01(2014), tables 5, 29 of SR4-04(2014),
//! table 4 of R12-08 and tables 7-9 of R15-11.

use approx::assert_relative_eq;
use rstest::rstest;
use steam97::water;

// R7-97 tables 5, 15, 33, 42: three points per basic region.
#[rstest]
// region 1
#[case(300.0, 3.0, 0.100215168e-2, 115.331273, 112.324818, 0.392294792, 4.17301218, 1507.73921)]
#[case(300.0, 80.0, 0.971180894e-3, 184.142828, 106.448356, 0.368563852, 4.01008987, 1634.69054)]
#[case(500.0, 3.0, 0.120241800e-2, 975.542239, 971.934985, 2.58041912, 4.65580682, 1240.71337)]
// region 2
#[case(300.0, 0.0035, 39.4913866, 2549.91145, 2411.6916, 8.52238967, 1.91300162, 427.920172)]
#[case(700.0, 0.0035, 92.3015898, 3335.68375, 3012.62819, 10.1749996, 2.08141274, 644.289068)]
#[case(700.0, 30.0, 0.542946619e-2, 2631.49474, 2468.61076, 5.17540298, 10.3505092, 480.386523)]
// region 5
#[case(1500.0, 0.5, 1.3845509, 5219.76855, 4527.4931, 9.65408875, 2.61609445, 917.06869)]
#[case(1500.0, 30.0, 0.0230761299, 5167.23514, 4474.95124, 7.72970133, 2.72724317, 928.548002)]
#[case(2000.0, 30.0, 0.0311385219, 6571.22604, 5637.07038, 8.53640523, 2.88569882, 1067.36948)]
fn forward_properties_match_r7_97(
    #[case] t: f64,
    #[case] p: f64,
    #[case] v: f64,
    #[case] h: f64,
    #[case] u: f64,
    #[case] s: f64,
    #[case] cp: f64,
    #[case] w: f64,
) {
    let state = water::properties_tp(t, p).unwrap();
    assert_relative_eq!(state.v, v, max_relative = 1e-8);
    assert_relative_eq!(state.h, h, max_relative = 1e-8);
    assert_relative_eq!(state.u, u, max_relative = 1e-8);
    assert_relative_eq!(state.s, s, max_relative = 1e-8);
    assert_relative_eq!(state.cp, cp, max_relative = 1e-8);
    assert_relative_eq!(state.w, w, max_relative = 1e-8);
}

// R7-97 table 33: region 3 points given as (T, p) with v the exact value
// the refined solution must hit.
#[rstest]
#[case(650.0, 25.5837018, 0.002, 1863.43019, 4.05427273, 13.8935717, 502.005554)]
#[case(650.0, 22.2930643, 0.005, 2375.12401, 4.85438792, 44.6579342, 383.444594)]
#[case(750.0, 78.3095639, 0.002, 2258.68845, 4.46971906, 6.34165359, 760.696041)]
fn region3_forward_properties_match_table_33(
    #[case] t: f64,
    #[case] p: f64,
    #[case] v: f64,
    #[case] h: f64,
    #[case] s: f64,
    #[case] cp: f64,
    #[case] w: f64,
) {
    let state = water::properties_tp(t, p).unwrap();
    assert_relative_eq!(state.v, v, max_relative = 1e-7);
    assert_relative_eq!(state.h, h, max_relative = 1e-7);
    assert_relative_eq!(state.s, s, max_relative = 1e-7);
    assert_relative_eq!(state.cp, cp, max_relative = 1e-7);
    assert_relative_eq!(state.w, w, max_relative = 1e-7);
}

// R7-97 tables 35, 36.
#[rstest]
#[case(300.0, 0.353658941e-2)]
#[case(500.0, 0.263889776e1)]
#[case(600.0, 0.123443146e2)]
fn saturation_pressure_matches_table_35(#[case] t: f64, #[case] p: f64) {
    assert_relative_eq!(water::psat(t).unwrap(), p, max_relative = 1e-8);
}

#[rstest]
#[case(0.1, 372.755919)]
#[case(1.0, 453.035632)]
#[case(10.0, 584.149488)]
fn saturation_temperature_matches_table_36(#[case] p: f64, #[case] t: f64) {
    assert_relative_eq!(water::tsat(p).unwrap(), t, max_relative = 1e-8);
}

// R7-97 table 7 + table 24, SR3-03 table 5: T(p,h) across the regions.
#[rstest]
#[case(3.0, 500.0, 391.798509)]
#[case(80.0, 500.0, 378.108626)]
#[case(80.0, 1500.0, 611.041229)]
#[case(0.001, 3000.0, 534.433241)]
#[case(3.0, 3000.0, 575.373370)]
#[case(3.0, 4000.0, 1010.77577)]
#[case(5.0, 3500.0, 801.299102)]
#[case(5.0, 4000.0, 1015.31583)]
#[case(25.0, 3500.0, 875.279054)]
#[case(40.0, 2700.0, 743.056411)]
#[case(60.0, 2700.0, 791.137067)]
#[case(60.0, 3200.0, 882.756860)]
#[case(20.0, 1700.0, 629.3083892)]
#[case(50.0, 2000.0, 690.5718338)]
#[case(100.0, 2100.0, 733.6163014)]
#[case(20.0, 2500.0, 641.8418053)]
#[case(50.0, 2400.0, 735.1848618)]
#[case(100.0, 2700.0, 842.0460876)]
fn backward_t_ph_matches_published_tables(#[case] p: f64, #[case] h: f64, #[case] t: f64) {
    assert_relative_eq!(water::t_ph(p, h).unwrap(), t, max_relative = 1e-8);
}

// R7-97 table 9 + table 29, SR3-03 table 12: T(p,s) across the regions.
#[rstest]
#[case(3.0, 0.5, 307.842258)]
#[case(80.0, 0.5, 309.979785)]
#[case(80.0, 3.0, 565.899909)]
#[case(0.1, 7.5, 399.517097)]
#[case(0.1, 8.0, 514.127081)]
#[case(2.5, 8.0, 1039.84917)]
#[case(8.0, 6.0, 600.48404)]
#[case(8.0, 7.5, 1064.95556)]
#[case(90.0, 6.0, 1038.01126)]
#[case(20.0, 5.75, 697.992849)]
#[case(80.0, 5.25, 854.011484)]
#[case(80.0, 5.75, 949.017998)]
#[case(20.0, 3.8, 628.2959869)]
#[case(50.0, 3.6, 629.7158726)]
#[case(100.0, 4.0, 705.6880237)]
#[case(20.0, 5.0, 640.1176443)]
#[case(50.0, 4.5, 716.3687517)]
#[case(100.0, 5.0, 847.4332825)]
fn backward_t_ps_matches_published_tables(#[case] p: f64, #[case] s: f64, #[case] t: f64) {
    assert_relative_eq!(water::t_ps(p, s).unwrap(), t, max_relative = 1e-8);
}

// SR2-01 tables 3, 9 and SR4-04 table 5: p(h,s) across the regions.
#[rstest]
#[case(0.001, 0.0, 9.800980614e-4)]
#[case(90.0, 0.0, 91.92954727)]
#[case(1500.0, 3.4, 58.68294423)]
#[case(2800.0, 6.5, 1.371012767)]
#[case(2800.0, 9.5, 1.879743844e-3)]
#[case(4100.0, 9.5, 0.1024788997)]
#[case(2800.0, 6.0, 4.793911442)]
#[case(3600.0, 6.0, 83.95519209)]
#[case(3600.0, 7.0, 7.527161441)]
#[case(2800.0, 5.1, 94.3920206)]
#[case(2800.0, 5.8, 8.414574124)]
#[case(3400.0, 5.8, 83.76903879)]
#[case(1700.0, 3.8, 25.55703246)]
#[case(2000.0, 4.2, 45.40873468)]
#[case(2100.0, 4.3, 60.7812334)]
#[case(2600.0, 5.1, 34.34999263)]
#[case(2400.0, 4.7, 63.63924887)]
#[case(2700.0, 5.0, 88.39043281)]
fn backward_p_hs_matches_published_tables(#[case] h: f64, #[case] s: f64, #[case] p: f64) {
    assert_relative_eq!(water::p_hs(h, s).unwrap(), p, max_relative = 1e-8);
}

// SR4-04 table 29: saturation T(h,s).
#[rstest]
#[case(1800.0, 5.3, 346.8475498)]
#[case(2400.0, 6.0, 425.1373305)]
#[case(2500.0, 5.5, 522.5579013)]
fn backward_t_hs_matches_table_29(#[case] h: f64, #[case] s: f64, #[case] t: f64) {
    assert_relative_eq!(water::t_hs(h, s).unwrap(), t, max_relative = 1e-8);
}

// SR5-05 tables 5 and 13: v(T,p) in region 3. With iteration enabled the
// computed volume lands within the backward equations' own 1e-6 band of the
// tabulated values; very near the critical point the direct values deviate
// further by design.
#[rstest]
#[case(670.0, 80.0, 1.503831359e-3)]
#[case(710.0, 50.0, 2.204728587e-3)]
#[case(750.0, 80.0, 1.97369294e-3)]
#[case(630.0, 20.0, 1.761696406e-3)]
#[case(650.0, 30.0, 1.819560617e-3)]
#[case(656.0, 26.0, 2.24558772e-3)]
#[case(670.0, 30.0, 2.506897702e-3)]
#[case(661.0, 26.0, 2.970225962e-3)]
#[case(675.0, 30.0, 3.004627086e-3)]
#[case(671.0, 26.0, 5.019029401e-3)]
#[case(690.0, 30.0, 4.656470142e-3)]
#[case(649.0, 23.6, 2.163198378e-3)]
#[case(650.0, 24.0, 2.166044161e-3)]
#[case(652.0, 23.6, 2.651081407e-3)]
#[case(654.0, 24.0, 2.967802335e-3)]
#[case(660.0, 24.0, 5.100267704e-3)]
#[case(670.0, 24.0, 6.427325645e-3)]
#[case(635.0, 19.1, 1.932829079e-3)]
#[case(638.0, 20.0, 1.985387227e-3)]
#[case(626.0, 17.0, 8.483262001e-3)]
#[case(640.0, 20.0, 6.227528101e-3)]
fn region3_backward_volume_matches_sr5_05(#[case] t: f64, #[case] p: f64, #[case] v: f64) {
    assert_relative_eq!(water::v_tp(t, p).unwrap(), v, max_relative = 1e-5);
}

#[rstest]
#[case(646.84, 22.0, 2.698354719e-3)]
#[case(647.05, 22.064, 2.717655648e-3)]
#[case(646.89, 22.0, 3.798732962e-3)]
fn region3_near_critical_volume_stays_in_band(#[case] t: f64, #[case] p: f64, #[case] v: f64) {
    assert_relative_eq!(water::v_tp(t, p).unwrap(), v, max_relative = 2e-2);
}

// R15-11 tables 7-9 through the (T,p) entry point, away from the critical
// point.
#[rstest]
#[case(620.0, 20.0, 0.481485195)]
#[case(620.0, 50.0, 0.54503894)]
#[case(650.0, 0.3, 0.0522311024)]
#[case(800.0, 50.0, 0.177709914)]
fn thermal_conductivity_matches_r15_11(#[case] t: f64, #[case] p: f64, #[case] lambda: f64) {
    assert_relative_eq!(
        water::thermal_conductivity_tp(t, p).unwrap(),
        lambda,
        max_relative = 1e-6
    );
}

// Near-critical conductivity with the simplified industrial enhancement:
// stay within the documented ~14 % band of the scientific values.
#[rstest]
#[case(647.35, 21.98406271345, 0.36687941)]
#[case(647.35, 22.1321600249828, 1.24182415)]
fn thermal_conductivity_near_critical_stays_in_band(
    #[case] t: f64,
    #[case] p: f64,
    #[case] lambda: f64,
) {
    let out = water::thermal_conductivity_tp(t, p).unwrap();
    assert!((out - lambda).abs() / lambda < 0.15, "λ({t},{p}) = {out}");
}
