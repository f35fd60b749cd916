//! Region 4: the saturation curve.
//!
//! `psat(T)` and `Tsat(p)` are the closed-form quartic solutions of the
//! IAPWS R7-97(2012) saturation-pressure equation (eq. 29-31, table 34).
//! The region 3 dome closures `psat(h)` and `psat(s)` come from IAPWS
//! SR3-03(2014), and the backward `Tsat(h,s)` from IAPWS SR4-04(2014).

use crate::units::{P_CRIT, P_TRIP, T_CRIT, T_MIN};

#[rustfmt::skip]
const N: [f64; 10] = [
     0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
     0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
     0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
     0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
     0.650_175_348_447_98e3,
];

/// Saturation pressure, MPa, for 273.15 K ≤ t ≤ T_CRIT.
pub(crate) fn psat(t: f64) -> f64 {
    let theta = t + N[8] / (t - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    let frac = 2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt());
    frac.powi(4)
}

/// Saturation temperature, K, for `P_TRIP ≤ p ≤ P_CRIT`.
pub(crate) fn tsat(p: f64) -> f64 {
    let beta = p.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    let half = N[9] + d;
    (half - (half * half - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}

// Saturated enthalpy span of the region 3 dome, kJ/kg: h'(623.15 K) and
// h''(623.15 K).
pub(crate) const H_SAT_623_LIQ: f64 = 1.670_858_218e3;
pub(crate) const H_SAT_623_VAP: f64 = 2.563_592_004e3;
// Saturated entropy span of the region 3 dome, kJ/(kg·K).
pub(crate) const S_SAT_623_LIQ: f64 = 3.778_281_340;
pub(crate) const S_SAT_623_VAP: f64 = 5.210_887_825;

#[rustfmt::skip]
const I_PSAT_H: [i32; 14] = [0, 1, 1, 1, 1, 5, 7, 8, 14, 20, 22, 24, 28, 36];
#[rustfmt::skip]
const J_PSAT_H: [i32; 14] = [0, 1, 3, 4, 36, 3, 0, 24, 16, 16, 3, 18, 8, 24];
#[rustfmt::skip]
const N_PSAT_H: [f64; 14] = [
     0.600_073_641_753_024,
    -0.936_203_654_849_857e1,
     0.246_590_798_594_147e2,
    -0.107_014_222_858_224e3,
    -0.915_821_315_805_768e14,
    -0.862_332_011_700_662e4,
    -0.235_837_344_740_032e2,
     0.252_304_969_384_128e18,
    -0.389_718_771_997_719e19,
    -0.333_775_713_645_296e23,
     0.356_499_469_636_328e11,
    -0.148_547_544_720_641e27,
     0.330_611_514_838_798e19,
     0.813_641_294_467_829e38,
];

/// Saturation pressure on the region 3 dome as a function of enthalpy,
/// MPa (IAPWS SR3-03 eq. 10). Valid for
/// [`H_SAT_623_LIQ`] ≤ h ≤ [`H_SAT_623_VAP`].
pub(crate) fn psat_h(h: f64) -> f64 {
    let eta = h / 2600.0;
    let x = eta - 1.02;
    let y = eta - 0.608;
    let mut pi = 0.0;
    for k in 0..N_PSAT_H.len() {
        pi += N_PSAT_H[k] * x.powi(I_PSAT_H[k]) * y.powi(J_PSAT_H[k]);
    }
    22.0 * pi
}

#[rustfmt::skip]
const I_PSAT_S: [i32; 10] = [0, 1, 1, 4, 12, 12, 16, 24, 28, 32];
#[rustfmt::skip]
const J_PSAT_S: [i32; 10] = [0, 1, 32, 7, 4, 14, 36, 10, 0, 18];
#[rustfmt::skip]
const N_PSAT_S: [f64; 10] = [
     0.639_767_553_612_785,
    -0.129_727_445_396_014e2,
    -0.224_595_125_848_403e16,
     0.177_466_741_801_846e7,
     0.717_079_349_571_538e10,
    -0.378_829_107_169_011e18,
    -0.955_586_736_431_328e35,
     0.187_269_814_676_188e24,
     0.119_254_746_466_473e12,
     0.110_649_277_244_882e37,
];

/// Saturation pressure on the region 3 dome as a function of entropy,
/// MPa (IAPWS SR3-03 eq. 11). Valid for
/// [`S_SAT_623_LIQ`] ≤ s ≤ [`S_SAT_623_VAP`].
pub(crate) fn psat_s(s: f64) -> f64 {
    let sigma = s / 5.2;
    let x = sigma - 1.03;
    let y = sigma - 0.699;
    let mut pi = 0.0;
    for k in 0..N_PSAT_S.len() {
        pi += N_PSAT_S[k] * x.powi(I_PSAT_S[k]) * y.powi(J_PSAT_S[k]);
    }
    22.0 * pi
}

#[rustfmt::skip]
const I_TSAT_HS: [i32; 36] = [
    0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5, 5, 5, 6, 6, 6, 8,
    10, 10, 12, 14, 14, 16, 16, 18, 18, 18, 20, 28,
];
#[rustfmt::skip]
const J_TSAT_HS: [i32; 36] = [
    0, 3, 12, 0, 1, 2, 5, 0, 5, 8, 0, 2, 3, 4, 0, 1, 1, 2, 4, 16, 6, 8, 22,
    1, 20, 36, 24, 1, 28, 12, 32, 14, 22, 36, 24, 36,
];
#[rustfmt::skip]
const N_TSAT_HS: [f64; 36] = [
     0.179_882_673_606_601,
    -0.267_507_455_199_603,
     0.116_276_722_612_600e1,
     0.147_545_428_713_616,
    -0.512_871_635_973_248,
     0.421_333_567_697_984,
     0.563_749_522_189_870,
     0.429_274_443_819_153,
    -0.335_704_552_142_140e1,
     0.108_890_916_499_278e2,
    -0.248_483_390_456_012,
     0.304_153_221_906_390,
    -0.494_819_763_939_905,
     0.107_551_674_933_261e1,
     0.733_888_415_457_688e-1,
     0.140_170_545_411_085e-1,
    -0.106_110_975_998_808,
     0.168_324_361_811_875e-1,
     0.125_028_363_714_877e1,
     0.101_316_840_309_509e4,
    -0.151_791_558_000_712e1,
     0.524_277_865_990_866e2,
     0.230_495_545_563_912e5,
     0.249_459_806_365_456e-1,
     0.210_796_467_412_137e7,
     0.366_836_848_613_065e9,
    -0.144_814_105_365_163e9,
    -0.179_276_373_003_590e-2,
     0.489_955_602_100_459e10,
     0.471_262_212_070_518e3,
    -0.829_294_390_198_652e11,
    -0.171_545_662_263_191e4,
     0.355_777_682_973_575e7,
     0.586_062_760_258_436e12,
    -0.129_887_635_078_195e8,
     0.317_247_449_371_057e11,
];

/// Backward saturation temperature `Tsat(h,s)`, K (IAPWS SR4-04 eq. 9).
/// Valid in the two-phase region with s ≥ [`S_SAT_623_VAP`].
pub(crate) fn tsat_hs(h: f64, s: f64) -> f64 {
    let x = h / 2800.0 - 0.119;
    let y = s / 9.2 - 1.07;
    let mut theta = 0.0;
    for k in 0..N_TSAT_HS.len() {
        theta += N_TSAT_HS[k] * x.powi(I_TSAT_HS[k]) * y.powi(J_TSAT_HS[k]);
    }
    550.0 * theta
}

/// Saturation-curve sanity bounds used by the classifiers.
pub(crate) fn in_saturation_span_t(t: f64) -> bool {
    (T_MIN..=T_CRIT).contains(&t)
}

/// True when `p` lies on the valid span of `tsat`.
pub(crate) fn in_saturation_span_p(p: f64) -> bool {
    (P_TRIP..=P_CRIT).contains(&p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R7-97(2012), table 35.
    #[rstest]
    #[case(300.0, 0.353_658_941e-2)]
    #[case(500.0, 0.263_889_776e1)]
    #[case(600.0, 0.123_443_146e2)]
    fn psat_matches_table_35(#[case] t: f64, #[case] p: f64) {
        assert_if97_eq!(psat(t), p);
    }

    // IAPWS R7-97(2012), table 36.
    #[rstest]
    #[case(0.1, 0.372_755_919e3)]
    #[case(1.0, 0.453_035_632e3)]
    #[case(10.0, 0.584_149_488e3)]
    fn tsat_matches_table_36(#[case] p: f64, #[case] t: f64) {
        assert_if97_eq!(tsat(p), t);
    }

    #[rstest]
    #[case(300.0)]
    #[case(450.0)]
    #[case(640.0)]
    fn saturation_curve_round_trips(#[case] t: f64) {
        assert_if97_eq!(tsat(psat(t)), t, 1e-9);
    }

    // IAPWS SR3-03(2014), table 18.
    #[rstest]
    #[case(1700.0, 0.172_417_571_8e2)]
    #[case(2000.0, 0.219_344_295_7e2)]
    #[case(2400.0, 0.201_809_083_9e2)]
    fn psat_h_matches_table_18(#[case] h: f64, #[case] p: f64) {
        assert_if97_eq!(psat_h(h), p);
    }

    // IAPWS SR3-03(2014), table 20.
    #[rstest]
    #[case(3.8, 0.168_775_505_7e2)]
    #[case(4.2, 0.216_445_178_9e2)]
    #[case(5.2, 0.166_896_848_2e2)]
    fn psat_s_matches_table_20(#[case] s: f64, #[case] p: f64) {
        assert_if97_eq!(psat_s(s), p);
    }

    // IAPWS SR4-04(2014), table 29.
    #[rstest]
    #[case(1800.0, 5.3, 0.346_847_549_8e3)]
    #[case(2400.0, 6.0, 0.425_137_330_5e3)]
    #[case(2500.0, 5.5, 0.522_557_901_3e3)]
    fn tsat_hs_matches_table_29(#[case] h: f64, #[case] s: f64, #[case] t: f64) {
        assert_if97_eq!(tsat_hs(h, s), t);
    }
}
