//! Region 1: compressed liquid, 273.15 K ≤ T ≤ 623.15 K, psat(T) ≤ p ≤ 100 MPa.
//!
//! Basic equation: dimensionless Gibbs energy γ(π,τ) of IAPWS R7-97(2012),
//! eq. 7 with the 34 coefficients of table 2. Backward equations `T(p,h)`,
//! `T(p,s)` from the same release; `p(h,s)` from IAPWS SR2-01(2014).

use super::RawProps;
use crate::units::R;

const P_STAR: f64 = 16.53; // MPa
const T_STAR: f64 = 1386.0; // K

#[rustfmt::skip]
const I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4,
    4, 5, 8, 8, 21, 23, 29, 30, 31, 32,
];
#[rustfmt::skip]
const J: [i32; 34] = [
    -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0,
    6, -5, -2, 10, -8, -11, -6, -29, -31, -38, -39, -40, -41,
];
#[rustfmt::skip]
const N: [f64; 34] = [
     0.146_329_712_131_67,
    -0.845_481_871_691_14,
    -0.375_636_036_720_40e1,
     0.338_551_691_683_85e1,
    -0.957_919_633_878_72,
     0.157_720_385_132_28,
    -0.166_164_171_995_01e-1,
     0.812_146_299_835_68e-3,
     0.283_190_801_238_04e-3,
    -0.607_063_015_658_74e-3,
    -0.189_900_682_184_19e-1,
    -0.325_297_487_705_05e-1,
    -0.218_417_171_754_14e-1,
    -0.528_383_579_699_30e-4,
    -0.471_843_210_732_67e-3,
    -0.300_017_807_930_26e-3,
     0.476_613_939_069_87e-4,
    -0.441_418_453_308_46e-5,
    -0.726_949_962_975_94e-15,
    -0.316_796_448_450_54e-4,
    -0.282_707_979_853_12e-5,
    -0.852_051_281_201_03e-9,
    -0.224_252_819_080_00e-5,
    -0.651_712_228_956_01e-6,
    -0.143_417_299_379_24e-12,
    -0.405_169_968_601_17e-6,
    -0.127_343_017_416_41e-8,
    -0.174_248_712_306_34e-9,
    -0.687_621_312_955_31e-18,
     0.144_783_078_285_21e-19,
     0.263_357_816_627_95e-22,
    -0.119_476_226_400_71e-22,
     0.182_280_945_814_04e-23,
    -0.935_370_872_924_58e-25,
];

struct Gibbs {
    g: f64,
    gp: f64,
    gt: f64,
    gpp: f64,
    gtt: f64,
    gpt: f64,
}

/// γ and its partials at (π, τ). Sums run in published table order.
fn gibbs(pi: f64, tau: f64) -> Gibbs {
    let x = 7.1 - pi;
    let y = tau - 1.222;
    let mut out = Gibbs { g: 0.0, gp: 0.0, gt: 0.0, gpp: 0.0, gtt: 0.0, gpt: 0.0 };
    for k in 0..N.len() {
        let (i, j, n) = (I[k], J[k], N[k]);
        let xi = x.powi(i);
        let yj = y.powi(j);
        out.g += n * xi * yj;
        out.gp -= n * f64::from(i) * x.powi(i - 1) * yj;
        out.gpp += n * f64::from(i) * f64::from(i - 1) * x.powi(i - 2) * yj;
        out.gt += n * xi * f64::from(j) * y.powi(j - 1);
        out.gtt += n * xi * f64::from(j) * f64::from(j - 1) * y.powi(j - 2);
        out.gpt -= n * f64::from(i) * x.powi(i - 1) * f64::from(j) * y.powi(j - 1);
    }
    out
}

/// Full property set at (T, p); inputs must already satisfy the region 1
/// envelope.
pub(crate) fn props(t: f64, p: f64) -> RawProps {
    let pi = p / P_STAR;
    let tau = T_STAR / t;
    let g = gibbs(pi, tau);
    let rt = R * t;
    let v = pi * g.gp * rt / (p * 1000.0);
    let h = rt * tau * g.gt;
    let u = rt * (tau * g.gt - pi * g.gp);
    let s = R * (tau * g.gt - g.g);
    let cp = -R * tau * tau * g.gtt;
    let a = g.gp - tau * g.gpt;
    let cv = R * (-tau * tau * g.gtt + a * a / g.gpp);
    let w2 = 1000.0 * rt * g.gp * g.gp / (a * a / (tau * tau * g.gtt) - g.gpp);
    RawProps { v, h, u, s, cp, cv, w: w2.sqrt() }
}

/// Specific enthalpy only, kJ/kg. Cheaper than [`props`] for boundary tests.
pub(crate) fn h(t: f64, p: f64) -> f64 {
    let pi = p / P_STAR;
    let tau = T_STAR / t;
    let y = tau - 1.222;
    let x = 7.1 - pi;
    let mut gt = 0.0;
    for k in 0..N.len() {
        gt += N[k] * x.powi(I[k]) * f64::from(J[k]) * y.powi(J[k] - 1);
    }
    R * t * tau * gt
}

/// Specific entropy only, kJ/(kg·K).
pub(crate) fn s(t: f64, p: f64) -> f64 {
    let pi = p / P_STAR;
    let tau = T_STAR / t;
    let y = tau - 1.222;
    let x = 7.1 - pi;
    let (mut g, mut gt) = (0.0, 0.0);
    for k in 0..N.len() {
        let base = N[k] * x.powi(I[k]);
        g += base * y.powi(J[k]);
        gt += base * f64::from(J[k]) * y.powi(J[k] - 1);
    }
    R * (tau * gt - g)
}

#[rustfmt::skip]
const I_TPH: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6];
#[rustfmt::skip]
const J_TPH: [i32; 20] = [0, 1, 2, 6, 22, 32, 0, 1, 2, 3, 4, 10, 32, 10, 32, 10, 32, 32, 32, 32];
#[rustfmt::skip]
const N_TPH: [f64; 20] = [
    -0.238_724_899_245_21e3,
     0.404_211_886_379_45e3,
     0.113_497_468_817_18e3,
    -0.584_576_160_480_39e1,
    -0.152_854_824_131_40e-3,
    -0.108_667_076_953_77e-5,
    -0.133_917_448_726_02e2,
     0.432_110_391_835_59e2,
    -0.540_100_671_705_06e2,
     0.305_358_922_039_16e2,
    -0.659_647_494_236_38e1,
     0.939_654_008_783_63e-2,
     0.115_736_475_053_40e-6,
    -0.258_586_412_820_73e-4,
    -0.406_443_630_847_99e-8,
     0.664_561_861_916_35e-7,
     0.806_707_341_030_27e-10,
    -0.934_777_712_139_47e-12,
     0.582_654_420_206_01e-14,
    -0.150_201_859_535_03e-16,
];

/// Backward `T(p,h)`, K. IAPWS R7-97 eq. 11 (table 6).
pub(crate) fn t_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2500.0 + 1.0;
    let mut t = 0.0;
    for k in 0..N_TPH.len() {
        t += N_TPH[k] * p.powi(I_TPH[k]) * eta.powi(J_TPH[k]);
    }
    t
}

#[rustfmt::skip]
const I_TPS: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4];
#[rustfmt::skip]
const J_TPS: [i32; 20] = [0, 1, 2, 3, 11, 31, 0, 1, 2, 3, 12, 31, 0, 1, 2, 9, 31, 10, 32, 32];
#[rustfmt::skip]
const N_TPS: [f64; 20] = [
     0.174_782_680_583_07e3,
     0.348_069_308_928_73e2,
     0.652_925_849_784_55e1,
     0.330_399_817_754_89,
    -0.192_813_829_231_96e-6,
    -0.249_091_972_445_73e-22,
    -0.261_076_364_893_32,
     0.225_929_659_815_86,
    -0.642_564_633_952_26e-1,
     0.788_762_892_705_26e-2,
     0.356_721_106_073_66e-9,
     0.173_324_969_948_95e-23,
     0.566_089_006_548_37e-3,
    -0.326_354_831_397_17e-3,
     0.447_782_866_906_32e-4,
    -0.513_221_569_085_07e-9,
    -0.425_226_570_422_07e-25,
     0.264_004_413_606_89e-12,
     0.781_246_004_597_23e-28,
    -0.307_321_999_036_68e-30,
];

/// Backward `T(p,s)`, K. IAPWS R7-97 eq. 13 (table 8).
pub(crate) fn t_ps(p: f64, s: f64) -> f64 {
    let sigma = s + 2.0;
    let mut t = 0.0;
    for k in 0..N_TPS.len() {
        t += N_TPS[k] * p.powi(I_TPS[k]) * sigma.powi(J_TPS[k]);
    }
    t
}

#[rustfmt::skip]
const I_PHS: [i32; 19] = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 4, 4, 5];
#[rustfmt::skip]
const J_PHS: [i32; 19] = [0, 1, 2, 4, 5, 6, 8, 14, 0, 1, 4, 6, 0, 1, 10, 4, 1, 4, 0];
#[rustfmt::skip]
const N_PHS: [f64; 19] = [
    -0.691_997_014_660_582,
    -0.183_612_548_787_560e2,
    -0.928_332_409_297_335e1,
     0.659_639_569_909_906e2,
    -0.162_060_388_912_024e2,
     0.450_620_017_338_667e3,
     0.854_680_678_224_170e3,
     0.607_523_214_001_162e4,
     0.326_487_682_621_856e2,
    -0.269_408_844_582_931e2,
    -0.319_947_848_334_300e3,
    -0.928_354_307_043_320e3,
     0.303_634_537_455_249e2,
    -0.650_540_422_444_146e2,
    -0.430_991_316_516_130e4,
    -0.747_512_324_096_068e3,
     0.730_000_345_529_245e3,
     0.114_284_032_569_021e4,
    -0.436_407_041_874_559e3,
];

/// Backward `p(h,s)`, MPa. IAPWS SR2-01 eq. 1 (table 2).
pub(crate) fn p_hs(h: f64, s: f64) -> f64 {
    let eta = h / 3400.0 + 0.05;
    let sigma = s / 7.6 + 0.05;
    let mut pi = 0.0;
    for k in 0..N_PHS.len() {
        pi += N_PHS[k] * eta.powi(I_PHS[k]) * sigma.powi(J_PHS[k]);
    }
    100.0 * pi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R7-97(2012), table 5.
    #[rstest]
    #[case(300.0, 3.0, 0.100_215_168e-2, 0.115_331_273e3, 0.392_294_792, 0.150_773_921e4)]
    #[case(300.0, 80.0, 0.971_180_894e-3, 0.184_142_828e3, 0.368_563_852, 0.163_469_054e4)]
    #[case(500.0, 3.0, 0.120_241_800e-2, 0.975_542_239e3, 0.258_041_912e1, 0.124_071_337e4)]
    fn basic_equation_matches_table_5(
        #[case] t: f64,
        #[case] p: f64,
        #[case] v: f64,
        #[case] h: f64,
        #[case] s: f64,
        #[case] w: f64,
    ) {
        let out = props(t, p);
        assert_if97_eq!(out.v, v);
        assert_if97_eq!(out.h, h);
        assert_if97_eq!(out.s, s);
        assert_if97_eq!(out.w, w);
    }

    // IAPWS R7-97(2012), table 7.
    #[rstest]
    #[case(3.0, 500.0, 0.391_798_509e3)]
    #[case(80.0, 500.0, 0.378_108_626e3)]
    #[case(80.0, 1500.0, 0.611_041_229e3)]
    fn backward_t_ph_matches_table_7(#[case] p: f64, #[case] h: f64, #[case] t: f64) {
        assert_if97_eq!(t_ph(p, h), t);
    }

    // IAPWS R7-97(2012), table 9.
    #[rstest]
    #[case(3.0, 0.5, 0.307_842_258e3)]
    #[case(80.0, 0.5, 0.309_979_785e3)]
    #[case(80.0, 3.0, 0.565_899_909e3)]
    fn backward_t_ps_matches_table_9(#[case] p: f64, #[case] s: f64, #[case] t: f64) {
        assert_if97_eq!(t_ps(p, s), t);
    }

    // IAPWS SR2-01(2014), table 3.
    #[rstest]
    #[case(0.001, 0.0, 0.980_098_061_4e-3)]
    #[case(90.0, 0.0, 0.919_295_472_7e2)]
    #[case(1500.0, 3.4, 0.586_829_442_3e2)]
    fn backward_p_hs_matches_table_3(#[case] h: f64, #[case] s: f64, #[case] p: f64) {
        assert_if97_eq!(p_hs(h, s), p);
    }
}
