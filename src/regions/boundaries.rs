//! Auxiliary boundary curves between regions.
//!
//! The B23 curve separates regions 2 and 3 (IAPWS R7-97 eq. 5/6). The
//! remaining curves describe the saturation line and the region seams in the
//! (h,s) plane; they come from IAPWS SR4-04(2014) and feed the `(h,s)`
//! classifier.

// B23, IAPWS R7-97 table 1.
const N_B23: [f64; 5] = [
    0.348_051_856_289_69e3,
    -0.116_718_598_799_75e1,
    0.101_929_700_393_26e-2,
    0.572_544_598_627_46e3,
    0.139_188_397_788_70e2,
];

/// Pressure on the B23 curve at temperature `t`, MPa.
pub(crate) fn b23_p(t: f64) -> f64 {
    N_B23[0] + N_B23[1] * t + N_B23[2] * t * t
}

/// Temperature on the B23 curve at pressure `p`, K.
pub(crate) fn b23_t(p: f64) -> f64 {
    N_B23[3] + ((p - N_B23[4]) / N_B23[2]).sqrt()
}

// Entropy landmarks in the (h,s) plane, kJ/(kg·K). The s'(623.15 K) dome
// landmark lives with the saturation code in region 4.
pub(crate) use super::region4::S_SAT_623_LIQ;

/// s(273.15 K, saturated liquid); lower bound of the (h,s) envelope.
pub(crate) const S_MIN: f64 = -1.545_495_919e-4;
/// s(623.15 K, 100 MPa); below this the liquid side is entirely region 1.
pub(crate) const S_B13_MIN: f64 = 3.397_782_955;
/// Critical entropy.
pub(crate) const S_CRIT: f64 = 4.412_021_482_234_76;
/// Lower end of the B23 window in s.
pub(crate) const S_B23_MIN: f64 = 5.048_096_828;
/// Upper end of the B23 window in s.
pub(crate) const S_B23_MAX: f64 = 5.260_578_707;
/// 2b/2c split isentrope.
pub(crate) const S_2BC: f64 = 5.85;
/// s''(273.15 K); upper bound of the (h,s) envelope.
pub(crate) const S_MAX: f64 = 9.155_759_395;

#[rustfmt::skip]
const I_H1: [i32; 27] = [
    0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 4, 5, 5, 7, 8, 12, 12, 14, 14, 16, 20, 20,
    22, 24, 28, 32, 32,
];
#[rustfmt::skip]
const J_H1: [i32; 27] = [
    14, 36, 3, 16, 0, 5, 4, 36, 4, 16, 24, 18, 24, 1, 4, 2, 4, 1, 22, 10,
    12, 28, 8, 3, 0, 6, 8,
];
#[rustfmt::skip]
const N_H1: [f64; 27] = [
     0.332_171_191_705_237,
     0.611_217_706_323_496e-3,
    -0.882_092_478_906_822e1,
    -0.455_628_192_543_250,
    -0.263_483_840_850_452e-4,
    -0.223_949_661_148_062e2,
    -0.428_398_660_164_013e1,
    -0.616_679_338_856_916,
    -0.146_823_031_104_040e2,
     0.284_523_138_727_299e3,
    -0.113_398_503_195_444e3,
     0.115_671_380_760_859e4,
     0.395_551_267_359_325e3,
    -0.154_891_257_229_285e1,
     0.194_486_637_751_291e2,
    -0.357_915_139_457_043e1,
    -0.335_369_414_148_819e1,
    -0.664_426_796_332_460,
     0.323_321_885_383_934e5,
     0.331_766_744_667_084e4,
    -0.223_501_257_931_087e5,
     0.573_953_875_852_936e7,
     0.173_226_193_407_919e3,
    -0.363_968_822_121_321e-1,
     0.834_596_332_878_346e-6,
     0.503_611_916_682_674e1,
     0.655_444_787_064_505e2,
];

/// Saturated-liquid enthalpy h'(s) on the region 1 side, kJ/kg
/// (IAPWS SR4-04 eq. 3). Valid for [`S_MIN`] ≤ s ≤ [`S_SAT_623_LIQ`].
pub(crate) fn h1_sat(s: f64) -> f64 {
    let sigma = s / 3.8;
    let x = sigma - 1.09;
    let y = sigma + 0.366e-4;
    let mut eta = 0.0;
    for k in 0..N_H1.len() {
        eta += N_H1[k] * x.powi(I_H1[k]) * y.powi(J_H1[k]);
    }
    1700.0 * eta
}

#[rustfmt::skip]
const I_H3A: [i32; 19] = [0, 0, 0, 0, 2, 3, 4, 4, 5, 5, 6, 7, 7, 7, 10, 10, 10, 32, 32];
#[rustfmt::skip]
const J_H3A: [i32; 19] = [1, 4, 10, 16, 1, 36, 3, 16, 20, 36, 4, 2, 28, 32, 14, 32, 36, 0, 6];
#[rustfmt::skip]
const N_H3A: [f64; 19] = [
     0.822_673_364_673_336,
     0.181_977_213_534_479,
    -0.112_000_260_313_624e-1,
    -0.746_778_287_048_033e-3,
    -0.179_046_263_257_381,
     0.424_220_110_836_657e-1,
    -0.341_355_823_438_768,
    -0.209_881_740_853_565e1,
    -0.822_477_343_323_596e1,
    -0.499_684_082_076_008e1,
     0.191_413_958_471_069,
     0.581_062_241_093_136e-1,
    -0.165_505_498_701_029e4,
     0.158_870_443_421_201e4,
    -0.850_623_535_172_818e2,
    -0.317_714_386_511_207e5,
    -0.945_890_406_632_871e5,
    -0.139_273_847_088_690e-5,
     0.631_052_532_240_980,
];

/// Saturated-liquid enthalpy h'(s) on the region 3 side, kJ/kg
/// (IAPWS SR4-04 eq. 4). Valid for [`S_SAT_623_LIQ`] ≤ s ≤ [`S_CRIT`].
pub(crate) fn h3a_sat(s: f64) -> f64 {
    let sigma = s / 3.8;
    let x = sigma - 1.09;
    let y = sigma + 0.366e-4;
    let mut eta = 0.0;
    for k in 0..N_H3A.len() {
        eta += N_H3A[k] * x.powi(I_H3A[k]) * y.powi(J_H3A[k]);
    }
    1700.0 * eta
}

#[rustfmt::skip]
const I_H2AB: [i32; 30] = [
    1, 1, 2, 2, 4, 4, 7, 8, 8, 10, 12, 12, 18, 20, 24, 28, 28, 28, 28, 28,
    32, 32, 32, 32, 32, 36, 36, 36, 36, 36,
];
#[rustfmt::skip]
const J_H2AB: [i32; 30] = [
    8, 24, 4, 32, 1, 2, 7, 5, 12, 1, 0, 7, 10, 12, 32, 8, 12, 20, 22, 24,
    2, 7, 12, 14, 24, 10, 12, 20, 22, 28,
];
#[rustfmt::skip]
const N_H2AB: [f64; 30] = [
    -0.524_581_170_928_788e3,
    -0.926_947_218_142_218e7,
    -0.237_385_107_491_666e3,
     0.210_770_155_812_776e11,
    -0.239_494_562_010_986e2,
     0.221_802_480_294_197e3,
    -0.510_472_533_393_438e7,
     0.124_981_396_109_147e7,
     0.200_008_436_996_201e10,
    -0.815_158_509_791_035e3,
    -0.157_612_685_637_523e3,
    -0.114_200_422_332_791e11,
     0.662_364_680_776_872e16,
    -0.227_622_818_296_144e19,
    -0.171_048_081_348_406e32,
     0.660_788_766_938_091e16,
     0.166_320_055_886_021e23,
    -0.218_003_784_381_501e30,
    -0.787_276_140_295_618e30,
     0.151_062_329_700_346e32,
     0.795_732_170_300_541e7,
     0.131_957_647_355_347e16,
    -0.325_097_068_299_140e24,
    -0.418_600_611_419_248e26,
     0.297_478_906_557_467e35,
    -0.953_588_761_745_473e20,
     0.166_957_699_620_939e25,
    -0.175_407_764_869_978e33,
     0.347_581_490_626_396e35,
    -0.710_971_318_427_851e39,
];

/// Saturated-vapor enthalpy h''(s) for s ≥ 5.85, kJ/kg
/// (IAPWS SR4-04 eq. 5). Valid up to [`S_MAX`].
pub(crate) fn h2ab_sat(s: f64) -> f64 {
    let sigma1 = s / 5.21;
    let sigma2 = s / 9.2;
    let x = 1.0 / sigma1 - 0.513;
    let y = sigma2 - 0.524;
    let mut sum = 0.0;
    for k in 0..N_H2AB.len() {
        sum += N_H2AB[k] * x.powi(I_H2AB[k]) * y.powi(J_H2AB[k]);
    }
    2800.0 * sum.exp()
}

#[rustfmt::skip]
const I_H2C3B: [i32; 16] = [0, 0, 0, 1, 1, 5, 6, 7, 8, 8, 12, 16, 22, 22, 24, 36];
#[rustfmt::skip]
const J_H2C3B: [i32; 16] = [0, 3, 4, 0, 12, 36, 12, 16, 2, 20, 32, 36, 2, 32, 7, 20];
#[rustfmt::skip]
const N_H2C3B: [f64; 16] = [
     0.104_351_280_732_769e1,
    -0.227_807_912_708_513e1,
     0.180_535_256_723_202e1,
     0.420_440_834_792_042,
    -0.105_721_244_834_660e6,
     0.436_911_607_493_884e25,
    -0.328_032_702_839_753e12,
    -0.678_686_760_804_270e16,
     0.743_957_464_645_363e4,
    -0.356_896_445_355_761e20,
     0.167_590_585_186_801e32,
    -0.355_028_625_419_105e38,
     0.396_611_982_166_538e12,
    -0.414_716_268_484_468e41,
     0.359_080_103_867_382e19,
    -0.116_994_334_851_995e41,
];

/// Saturated-vapor enthalpy h''(s) for [`S_CRIT`] ≤ s ≤ 5.85, kJ/kg
/// (IAPWS SR4-04 eq. 6).
pub(crate) fn h2c3b_sat(s: f64) -> f64 {
    let sigma = s / 5.9;
    let x = sigma - 1.02;
    let y = sigma - 0.726;
    let mut sum = 0.0;
    for k in 0..N_H2C3B.len() {
        sum += N_H2C3B[k] * x.powi(I_H2C3B[k]) * y.powi(J_H2C3B[k]);
    }
    2800.0 * sum.powi(4)
}

#[rustfmt::skip]
const I_HB13: [i32; 6] = [0, 1, 1, 3, 5, 6];
#[rustfmt::skip]
const J_HB13: [i32; 6] = [0, -2, 2, -12, -4, -3];
#[rustfmt::skip]
const N_HB13: [f64; 6] = [
     0.913_965_547_600_543,
    -0.430_944_856_041_991e-4,
     0.603_235_694_765_419e2,
     0.117_518_273_082_168e-17,
     0.220_000_904_781_292,
    -0.690_815_545_851_641e2,
];

/// Region 1/3 boundary enthalpy h(s) along T = 623.15 K, kJ/kg
/// (IAPWS SR4-04 eq. 7). Valid for [`S_B13_MIN`] ≤ s ≤ [`S_SAT_623_LIQ`].
pub(crate) fn hb13(s: f64) -> f64 {
    let sigma = s / 3.8;
    let x = sigma - 0.884;
    let y = sigma - 0.864;
    let mut eta = 0.0;
    for k in 0..N_HB13.len() {
        eta += N_HB13[k] * x.powi(I_HB13[k]) * y.powi(J_HB13[k]);
    }
    1700.0 * eta
}

#[rustfmt::skip]
const I_TB23: [i32; 25] = [
    -12, -10, -8, -4, -3, -2, -2, -2, -2, 0, 1, 1, 1, 3, 3, 5, 6, 6, 8, 8,
    8, 12, 12, 14, 14,
];
#[rustfmt::skip]
const J_TB23: [i32; 25] = [
    10, 8, 3, 4, 3, -6, 2, 3, 4, 0, -3, -2, 10, -2, -1, -5, -6, -3, -8, -2,
    -1, -12, -1, -12, 1,
];
#[rustfmt::skip]
const N_TB23: [f64; 25] = [
     0.629_096_260_829_810e-3,
    -0.823_453_502_583_165e-3,
     0.515_446_951_519_474e-7,
    -0.117_565_945_784_945e1,
     0.348_519_684_726_192e1,
    -0.507_837_382_408_313e-11,
    -0.284_637_670_005_479e1,
    -0.236_092_263_939_673e1,
     0.601_492_324_973_779e1,
     0.148_039_650_824_546e1,
     0.360_075_182_221_907e-3,
    -0.126_700_045_009_952e-1,
    -0.122_184_332_521_413e7,
     0.149_276_502_463_272,
     0.698_733_471_798_484,
    -0.252_207_040_114_321e-1,
     0.147_151_930_985_213e-1,
    -0.108_618_917_681_849e1,
    -0.936_875_039_816_322e-3,
     0.819_877_897_570_217e2,
    -0.182_041_861_521_835e3,
     0.261_907_376_402_688e-5,
    -0.291_626_417_025_961e5,
     0.140_660_774_926_165e-4,
     0.783_237_062_349_385e7,
];

/// Temperature on the B23 boundary as a function of (h,s), K
/// (IAPWS SR4-04 eq. 8). Valid for [`S_B23_MIN`] ≤ s ≤ [`S_B23_MAX`].
pub(crate) fn tb23_hs(h: f64, s: f64) -> f64 {
    let x = h / 3000.0 - 0.727;
    let y = s / 5.3 - 0.864;
    let mut theta = 0.0;
    for k in 0..N_TB23.len() {
        theta += N_TB23[k] * x.powi(I_TB23[k]) * y.powi(J_TB23[k]);
    }
    900.0 * theta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R7-97(2012), section 4: the B23 reference point.
    #[test]
    fn b23_reproduces_reference_point() {
        assert_if97_eq!(b23_p(0.623_150_000e3), 0.165_291_643e2);
        assert_if97_eq!(b23_t(0.165_291_643e2), 0.623_150_000e3);
    }

    // IAPWS SR4-04(2014), tables 3, 6, 9, 18.
    #[rstest]
    #[case(1.0, 0.308_550_964_7e3)]
    #[case(2.0, 0.700_630_447_2e3)]
    #[case(3.0, 0.119_835_975_4e4)]
    fn h1_sat_matches_table_3(#[case] s: f64, #[case] h: f64) {
        assert_if97_eq!(h1_sat(s), h);
    }

    #[rstest]
    #[case(3.8, 0.168_502_556_5e4)]
    #[case(4.0, 0.181_689_147_6e4)]
    #[case(4.2, 0.194_935_256_3e4)]
    fn h3a_sat_matches_table_6(#[case] s: f64, #[case] h: f64) {
        assert_if97_eq!(h3a_sat(s), h);
    }

    #[rstest]
    #[case(7.0, 0.272_372_998_5e4)]
    #[case(8.0, 0.259_904_721_0e4)]
    #[case(9.0, 0.251_186_147_7e4)]
    fn h2ab_sat_matches_table_9(#[case] s: f64, #[case] h: f64) {
        assert_if97_eq!(h2ab_sat(s), h);
    }

    #[rstest]
    #[case(5.5, 0.268_769_385_0e4)]
    #[case(5.0, 0.245_162_360_9e4)]
    #[case(4.5, 0.214_436_044_8e4)]
    fn h2c3b_sat_matches_table_9(#[case] s: f64, #[case] h: f64) {
        assert_if97_eq!(h2c3b_sat(s), h);
    }

    #[rstest]
    #[case(3.7, 0.163_252_504_7e4)]
    #[case(3.6, 0.159_302_721_4e4)]
    #[case(3.5, 0.156_610_461_1e4)]
    fn hb13_matches_table_18(#[case] s: f64, #[case] h: f64) {
        assert_if97_eq!(hb13(s), h);
    }

    // IAPWS SR4-04(2014), table 26.
    #[rstest]
    #[case(2600.0, 5.1, 0.713_525_936_4e3)]
    #[case(2700.0, 5.15, 0.768_534_553_2e3)]
    #[case(2800.0, 5.2, 0.817_620_212_0e3)]
    fn tb23_hs_matches_table_26(#[case] h: f64, #[case] s: f64, #[case] t: f64) {
        assert_if97_eq!(tb23_hs(h, s), t);
    }
}
