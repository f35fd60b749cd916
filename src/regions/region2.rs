//! Region 2: superheated vapor up to 1073.15 K and 100 MPa.
//!
//! Basic equation: γ(π,τ) = γ°(π,τ) + γʳ(π,τ) of IAPWS R7-97(2012), eq. 15
//! and 16. The backward equations split the region into 2a (p ≤ 4 MPa), 2b
//! and 2c along the B2bc curve (in h) and the s = 5.85 kJ/(kg·K) isentrope
//! (in s). `p(h,s)` comes from IAPWS SR2-01(2014) with the h2ab(s) split
//! curve for the 4 MPa isobar.

use super::RawProps;
use crate::units::R;

const T_STAR: f64 = 540.0; // K; p* = 1 MPa

#[rustfmt::skip]
const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];
#[rustfmt::skip]
const N0: [f64; 9] = [
    -0.969_276_865_002_17e1,
     0.100_866_559_680_18e2,
    -0.560_879_112_830_20e-2,
     0.714_527_380_814_55e-1,
    -0.407_104_982_239_28,
     0.142_408_191_714_44e1,
    -0.438_395_113_194_50e1,
    -0.284_086_324_607_72,
     0.212_684_637_533_07e-1,
];

#[rustfmt::skip]
const IR: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7,
    7, 8, 8, 9, 10, 10, 10, 16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];
#[rustfmt::skip]
const JR: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0,
    11, 25, 8, 36, 13, 4, 10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];
#[rustfmt::skip]
const NR: [f64; 43] = [
    -0.177_317_424_732_13e-2,
    -0.178_348_622_923_58e-1,
    -0.459_960_136_963_65e-1,
    -0.575_812_590_834_32e-1,
    -0.503_252_787_279_30e-1,
    -0.330_326_416_702_03e-4,
    -0.189_489_875_163_15e-3,
    -0.393_927_772_433_55e-2,
    -0.437_972_956_505_73e-1,
    -0.266_745_479_140_87e-4,
     0.204_817_376_923_09e-7,
     0.438_706_672_844_35e-6,
    -0.322_776_772_385_70e-4,
    -0.150_339_245_421_48e-2,
    -0.406_682_535_626_49e-1,
    -0.788_473_095_593_67e-9,
     0.127_907_178_522_85e-7,
     0.482_253_727_185_07e-6,
     0.229_220_763_376_61e-5,
    -0.167_147_664_510_61e-10,
    -0.211_714_723_213_55e-2,
    -0.238_957_419_341_04e2,
    -0.590_595_643_242_70e-17,
    -0.126_218_088_991_01e-5,
    -0.389_468_424_357_39e-1,
     0.112_562_113_604_59e-10,
    -0.823_113_408_979_98e1,
     0.198_097_128_020_88e-7,
     0.104_069_652_101_74e-18,
    -0.102_347_470_959_29e-12,
    -0.100_181_793_795_11e-8,
    -0.808_829_086_469_85e-10,
     0.106_930_318_794_09,
    -0.336_622_505_741_71,
     0.891_858_453_554_21e-24,
     0.306_293_168_762_32e-12,
    -0.420_024_676_982_08e-5,
    -0.590_560_296_856_39e-25,
     0.378_269_476_134_57e-5,
    -0.127_686_089_346_81e-14,
     0.730_876_105_950_61e-28,
     0.554_147_153_507_78e-16,
    -0.943_697_072_412_10e-6,
];

struct Gibbs {
    g: f64,
    gp: f64,
    gt: f64,
    gtt: f64,
    // Residual-only partials, needed separately for cv and w.
    grp: f64,
    grpp: f64,
    grpt: f64,
}

fn gibbs(pi: f64, tau: f64) -> Gibbs {
    // Ideal part: ln π + Σ n τ^J.
    let (mut g0, mut g0t, mut g0tt) = (pi.ln(), 0.0, 0.0);
    for k in 0..N0.len() {
        let (j, n) = (J0[k], N0[k]);
        g0 += n * tau.powi(j);
        g0t += n * f64::from(j) * tau.powi(j - 1);
        g0tt += n * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }
    // Residual part in (τ − 0.5).
    let y = tau - 0.5;
    let (mut gr, mut grp, mut grpp, mut grt, mut grtt, mut grpt) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for k in 0..NR.len() {
        let (i, j, n) = (IR[k], JR[k], NR[k]);
        let pi_i = pi.powi(i);
        let yj = y.powi(j);
        gr += n * pi_i * yj;
        grp += n * f64::from(i) * pi.powi(i - 1) * yj;
        grpp += n * f64::from(i) * f64::from(i - 1) * pi.powi(i - 2) * yj;
        grt += n * pi_i * f64::from(j) * y.powi(j - 1);
        grtt += n * pi_i * f64::from(j) * f64::from(j - 1) * y.powi(j - 2);
        grpt += n * f64::from(i) * pi.powi(i - 1) * f64::from(j) * y.powi(j - 1);
    }
    Gibbs { g: g0 + gr, gp: 1.0 / pi + grp, gt: g0t + grt, gtt: g0tt + grtt, grp, grpp, grpt }
}

/// Full property set at (T, p); inputs must already satisfy the region 2
/// envelope.
pub(crate) fn props(t: f64, p: f64) -> RawProps {
    let pi = p;
    let tau = T_STAR / t;
    let g = gibbs(pi, tau);
    let rt = R * t;
    let v = pi * g.gp * rt / (p * 1000.0);
    let h = rt * tau * g.gt;
    let u = rt * (tau * g.gt - pi * g.gp);
    let s = R * (tau * g.gt - g.g);
    let cp = -R * tau * tau * g.gtt;
    let a = 1.0 + pi * g.grp - tau * pi * g.grpt;
    let cv = cp - R * a * a / (1.0 - pi * pi * g.grpp);
    let num = 1.0 + 2.0 * pi * g.grp + pi * pi * g.grp * g.grp;
    let den = 1.0 - pi * pi * g.grpp + a * a / (tau * tau * g.gtt);
    let w2 = 1000.0 * rt * num / den;
    RawProps { v, h, u, s, cp, cv, w: w2.sqrt() }
}

/// Specific enthalpy only, kJ/kg.
pub(crate) fn h(t: f64, p: f64) -> f64 {
    let tau = T_STAR / t;
    let y = tau - 0.5;
    let mut gt = 0.0;
    for k in 0..N0.len() {
        gt += N0[k] * f64::from(J0[k]) * tau.powi(J0[k] - 1);
    }
    for k in 0..NR.len() {
        gt += NR[k] * p.powi(IR[k]) * f64::from(JR[k]) * y.powi(JR[k] - 1);
    }
    R * t * tau * gt
}

/// Specific entropy only, kJ/(kg·K).
pub(crate) fn s(t: f64, p: f64) -> f64 {
    let out = props(t, p);
    out.s
}

// B2bc curve, IAPWS R7-97 eq. 20/21. Quadratic in h with closed-form inverse.
const N_B2BC: [f64; 5] = [
    0.905_842_785_147_23e3,
    -0.679_557_863_992_41,
    0.128_090_027_301_36e-3,
    0.265_265_719_084_28e4,
    0.452_575_789_059_48e1,
];

/// Enthalpy on the 2b/2c boundary at pressure `p`, kJ/kg.
pub(crate) fn h_b2bc(p: f64) -> f64 {
    N_B2BC[3] + ((p - N_B2BC[4]) / N_B2BC[2]).sqrt()
}

#[rustfmt::skip]
const I_TPH_A: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3,
    3, 4, 4, 4, 5, 5, 5, 6, 6, 7,
];
#[rustfmt::skip]
const J_TPH_A: [i32; 34] = [
    0, 1, 2, 3, 7, 20, 0, 1, 2, 3, 7, 9, 11, 18, 44, 0, 2, 7, 36, 38, 40,
    42, 44, 24, 44, 12, 32, 44, 32, 36, 42, 34, 44, 28,
];
#[rustfmt::skip]
const N_TPH_A: [f64; 34] = [
     0.108_989_523_182_88e4,
     0.849_516_544_955_35e3,
    -0.107_817_480_918_26e3,
     0.331_536_548_012_63e2,
    -0.742_320_167_902_48e1,
     0.117_650_487_243_56e2,
     0.184_457_493_557_90e1,
    -0.417_927_005_496_24e1,
     0.624_781_969_358_12e1,
    -0.173_445_631_081_14e2,
    -0.200_581_768_620_96e3,
     0.271_960_654_737_96e3,
    -0.455_113_182_858_18e3,
     0.309_196_886_047_55e4,
     0.252_266_403_578_72e6,
    -0.617_074_228_683_39e-2,
    -0.310_780_466_295_83,
     0.116_708_730_771_07e2,
     0.128_127_984_040_46e9,
    -0.985_549_096_232_76e9,
     0.282_245_469_730_02e10,
    -0.359_489_714_107_03e10,
     0.172_273_499_131_97e10,
    -0.135_513_342_407_75e5,
     0.128_487_346_646_50e8,
     0.138_657_242_832_26e1,
     0.235_988_325_565_14e6,
    -0.131_052_365_450_54e8,
     0.739_998_354_747_66e4,
    -0.551_966_970_300_60e6,
     0.371_540_859_962_33e7,
     0.191_277_292_396_60e5,
    -0.415_351_648_356_34e6,
    -0.624_598_551_925_07e2,
];

#[rustfmt::skip]
const I_TPH_B: [i32; 38] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3,
    4, 4, 4, 4, 4, 4, 5, 5, 5, 6, 7, 7, 9, 9,
];
#[rustfmt::skip]
const J_TPH_B: [i32; 38] = [
    0, 1, 2, 12, 18, 24, 28, 40, 0, 2, 6, 12, 18, 24, 28, 40, 2, 8, 18, 40,
    1, 2, 12, 24, 2, 12, 18, 24, 28, 40, 18, 24, 40, 28, 2, 28, 1, 40,
];
#[rustfmt::skip]
const N_TPH_B: [f64; 38] = [
     0.148_950_410_795_16e4,
     0.743_077_983_140_34e3,
    -0.977_083_187_978_37e2,
     0.247_424_647_056_74e1,
    -0.632_813_200_160_26,
     0.113_859_521_296_58e1,
    -0.478_118_636_486_25,
     0.852_081_234_315_44e-2,
     0.937_471_473_779_32,
     0.335_931_186_049_16e1,
     0.338_093_556_014_54e1,
     0.168_445_396_719_04,
     0.738_757_452_366_95,
    -0.471_287_374_361_86,
     0.150_202_731_397_07,
    -0.217_641_142_197_50e-2,
    -0.218_107_553_247_61e-1,
    -0.108_297_844_036_77,
    -0.463_333_246_358_12e-1,
     0.712_803_519_595_51e-4,
     0.110_328_317_899_99e-3,
     0.189_552_483_879_02e-3,
     0.308_915_411_605_37e-2,
     0.135_555_045_549_49e-2,
     0.286_402_374_774_56e-6,
    -0.107_798_573_575_12e-4,
    -0.764_627_124_548_14e-4,
     0.140_523_928_183_16e-4,
    -0.310_838_143_314_34e-4,
    -0.103_027_382_121_03e-5,
     0.282_172_816_350_40e-6,
     0.127_049_022_719_45e-5,
     0.738_033_534_682_92e-7,
    -0.110_301_392_389_09e-7,
    -0.814_563_652_078_33e-13,
    -0.251_805_456_829_62e-10,
    -0.175_652_339_694_07e-17,
     0.869_341_563_441_63e-14,
];

#[rustfmt::skip]
const I_TPH_C: [i32; 23] = [
    -7, -7, -6, -6, -5, -5, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 6, 6, 6, 6,
    6, 6,
];
#[rustfmt::skip]
const J_TPH_C: [i32; 23] = [
    0, 4, 0, 2, 0, 2, 0, 1, 0, 2, 0, 1, 4, 8, 4, 0, 1, 4, 10, 12, 16, 20, 22,
];
#[rustfmt::skip]
const N_TPH_C: [f64; 23] = [
    -0.323_683_985_552_42e13,
     0.732_633_509_021_81e13,
     0.358_250_899_454_47e12,
    -0.583_401_318_515_90e12,
    -0.107_830_682_174_70e11,
     0.208_255_445_631_71e11,
     0.610_747_551_373_40e6,
     0.859_777_225_355_80e6,
    -0.257_457_236_041_70e5,
     0.310_810_884_227_14e5,
     0.120_823_158_659_36e4,
     0.482_197_551_092_55e3,
     0.379_660_012_724_86e1,
    -0.108_429_848_800_77e2,
    -0.453_641_726_766_60e-1,
     0.145_591_156_586_98e-12,
     0.112_615_974_072_30e-11,
    -0.178_049_822_406_86e-10,
     0.123_245_796_908_32e-6,
    -0.116_069_211_309_84e-5,
     0.278_463_670_885_54e-4,
    -0.592_700_384_741_76e-3,
     0.129_185_829_918_78e-2,
];

/// Backward `T(p,h)`, K, with 2a/2b/2c sub-region dispatch.
pub(crate) fn t_ph(p: f64, h: f64) -> f64 {
    if p <= 4.0 {
        let eta = h / 2000.0 - 2.1;
        let mut t = 0.0;
        for k in 0..N_TPH_A.len() {
            t += N_TPH_A[k] * p.powi(I_TPH_A[k]) * eta.powi(J_TPH_A[k]);
        }
        t
    } else if h >= h_b2bc(p) {
        let x = p - 2.0;
        let eta = h / 2000.0 - 2.6;
        let mut t = 0.0;
        for k in 0..N_TPH_B.len() {
            t += N_TPH_B[k] * x.powi(I_TPH_B[k]) * eta.powi(J_TPH_B[k]);
        }
        t
    } else {
        let x = p + 25.0;
        let eta = h / 2000.0 - 1.8;
        let mut t = 0.0;
        for k in 0..N_TPH_C.len() {
            t += N_TPH_C[k] * x.powi(I_TPH_C[k]) * eta.powi(J_TPH_C[k]);
        }
        t
    }
}

// T(p,s) for 2a carries fractional pressure exponents.
#[rustfmt::skip]
const I_TPS_A: [f64; 46] = [
    -1.5, -1.5, -1.5, -1.5, -1.5, -1.5, -1.25, -1.25, -1.25, -1.0, -1.0,
    -1.0, -1.0, -1.0, -1.0, -0.75, -0.75, -0.5, -0.5, -0.5, -0.5, -0.25,
    -0.25, -0.25, -0.25, 0.25, 0.25, 0.25, 0.25, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.5, 0.5, 0.75, 0.75, 0.75, 0.75, 1.0, 1.0, 1.25, 1.25, 1.5, 1.5,
];
#[rustfmt::skip]
const J_TPS_A: [i32; 46] = [
    -24, -23, -19, -13, -11, -10, -19, -15, -6, -26, -21, -17, -16, -9, -8,
    -15, -14, -26, -13, -9, -7, -27, -25, -11, -6, 1, 4, 8, 11, 0, 1, 5, 6,
    10, 14, 16, 0, 4, 9, 17, 7, 18, 3, 15, 5, 18,
];
#[rustfmt::skip]
const N_TPS_A: [f64; 46] = [
    -0.392_359_838_619_84e6,
     0.515_265_738_272_70e6,
     0.404_824_431_610_48e5,
    -0.321_937_909_239_02e3,
     0.969_614_242_186_94e2,
    -0.228_678_463_717_73e2,
    -0.449_429_141_243_57e6,
    -0.501_183_360_201_66e4,
     0.356_844_635_600_15,
     0.442_353_358_481_90e5,
    -0.136_733_888_117_08e5,
     0.421_632_602_078_64e6,
     0.225_169_258_374_75e5,
     0.474_421_448_656_46e3,
    -0.149_311_307_976_47e3,
    -0.197_811_263_204_52e6,
    -0.235_543_994_707_60e5,
    -0.190_706_163_020_76e5,
     0.553_756_698_831_64e5,
     0.382_936_914_373_63e4,
    -0.603_918_605_805_67e3,
     0.193_631_026_203_31e4,
     0.426_606_436_986_10e4,
    -0.597_806_388_727_18e4,
    -0.704_014_639_268_62e3,
     0.338_367_841_075_53e3,
     0.208_627_866_351_87e2,
     0.338_341_726_561_96e-1,
    -0.431_244_284_148_93e-4,
     0.166_537_913_564_12e3,
    -0.139_862_920_558_98e3,
    -0.788_495_479_998_72,
     0.721_324_117_538_72e-1,
    -0.597_548_393_982_83e-2,
    -0.121_413_589_539_04e-4,
     0.232_270_967_338_71e-6,
    -0.105_384_635_661_94e2,
     0.207_189_254_965_02e1,
    -0.721_931_552_604_27e-1,
     0.207_498_870_811_20e-6,
    -0.183_406_579_113_79e-1,
     0.290_362_723_486_96e-6,
     0.210_375_278_936_19,
     0.256_812_397_299_99e-3,
    -0.127_990_029_337_81e-1,
    -0.821_981_026_520_18e-5,
];

#[rustfmt::skip]
const I_TPS_B: [i32; 44] = [
    -6, -6, -5, -5, -4, -4, -4, -3, -3, -3, -3, -2, -2, -2, -2, -1, -1, -1,
    -1, -1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4,
    5, 5, 5,
];
#[rustfmt::skip]
const J_TPS_B: [i32; 44] = [
    0, 11, 0, 11, 0, 1, 11, 0, 1, 11, 12, 0, 1, 6, 10, 0, 1, 5, 8, 9, 0, 1,
    2, 4, 5, 6, 9, 0, 1, 2, 3, 7, 8, 0, 1, 5, 0, 1, 3, 0, 1, 0, 1, 2,
];
#[rustfmt::skip]
const N_TPS_B: [f64; 44] = [
     0.316_876_650_834_97e6,
     0.208_641_758_818_58e2,
    -0.398_593_998_035_99e6,
    -0.218_160_585_188_77e2,
     0.223_697_851_942_42e6,
    -0.278_417_034_458_17e4,
     0.992_074_360_714_80e1,
    -0.751_975_122_991_57e5,
     0.297_086_059_511_58e4,
    -0.344_068_785_485_26e1,
     0.388_155_642_491_15,
     0.175_112_950_857_50e5,
    -0.142_371_128_544_49e4,
     0.109_438_033_641_67e1,
     0.899_716_193_084_95,
    -0.337_597_400_989_58e4,
     0.471_628_858_183_55e3,
    -0.191_882_419_936_79e1,
     0.410_785_804_921_96,
    -0.334_653_781_720_97,
     0.138_700_347_775_05e4,
    -0.406_633_261_958_38e3,
     0.417_273_471_596_10e2,
     0.219_325_494_345_32e1,
    -0.103_200_500_090_77e1,
     0.358_829_435_167_03,
     0.525_114_537_260_66e-2,
     0.128_389_164_507_05e2,
    -0.286_424_372_193_81e1,
     0.569_126_836_648_55,
    -0.999_629_545_849_31e-1,
    -0.326_320_377_784_59e-2,
     0.233_209_225_767_23e-3,
    -0.153_348_098_574_50,
     0.290_722_882_399_02e-1,
     0.375_347_027_411_67e-3,
     0.172_966_917_024_11e-2,
    -0.385_560_508_445_04e-3,
    -0.350_177_122_926_08e-4,
    -0.145_663_936_314_92e-4,
     0.564_208_572_672_69e-5,
     0.412_861_500_746_05e-7,
    -0.206_846_711_188_24e-7,
     0.164_093_936_747_25e-8,
];

#[rustfmt::skip]
const I_TPS_C: [i32; 30] = [
    -2, -2, -1, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 7, 7, 7, 7, 7,
];
#[rustfmt::skip]
const J_TPS_C: [i32; 30] = [
    0, 1, 0, 0, 1, 2, 3, 0, 1, 3, 4, 0, 1, 2, 0, 1, 5, 0, 1, 4, 0, 1, 2, 0,
    1, 0, 1, 3, 4, 5,
];
#[rustfmt::skip]
const N_TPS_C: [f64; 30] = [
     0.909_685_010_053_65e3,
     0.240_456_670_884_20e4,
    -0.591_623_263_871_30e3,
     0.541_454_041_280_74e3,
    -0.270_983_084_111_92e3,
     0.979_765_250_979_26e3,
    -0.469_667_729_594_35e3,
     0.143_992_746_047_23e2,
    -0.191_042_042_304_29e2,
     0.532_991_671_119_71e1,
    -0.212_529_753_759_34e2,
    -0.311_473_344_137_60,
     0.603_348_408_946_23,
    -0.427_648_397_025_09e-1,
     0.581_855_972_552_59e-2,
    -0.145_970_082_847_53e-1,
     0.566_311_756_310_27e-2,
    -0.761_558_645_845_77e-4,
     0.224_403_429_193_32e-3,
    -0.125_610_950_134_13e-4,
     0.633_231_326_609_34e-6,
    -0.205_419_896_753_75e-5,
     0.364_053_703_900_82e-7,
    -0.297_598_977_892_15e-8,
     0.101_366_185_297_63e-7,
     0.599_257_196_923_51e-11,
    -0.206_778_701_051_64e-10,
    -0.208_742_781_818_86e-10,
     0.101_621_668_250_89e-9,
    -0.164_298_282_813_47e-9,
];

/// Backward `T(p,s)`, K, with 2a/2b/2c sub-region dispatch.
pub(crate) fn t_ps(p: f64, s: f64) -> f64 {
    if p <= 4.0 {
        let sigma = s / 2.0 - 2.0;
        let mut t = 0.0;
        for k in 0..N_TPS_A.len() {
            t += N_TPS_A[k] * p.powf(I_TPS_A[k]) * sigma.powi(J_TPS_A[k]);
        }
        t
    } else if s >= 5.85 {
        let sigma = 10.0 - s / 0.7853;
        let mut t = 0.0;
        for k in 0..N_TPS_B.len() {
            t += N_TPS_B[k] * p.powi(I_TPS_B[k]) * sigma.powi(J_TPS_B[k]);
        }
        t
    } else {
        let sigma = 2.0 - s / 2.9251;
        let mut t = 0.0;
        for k in 0..N_TPS_C.len() {
            t += N_TPS_C[k] * p.powi(I_TPS_C[k]) * sigma.powi(J_TPS_C[k]);
        }
        t
    }
}

// h2ab(s): enthalpy on the 4 MPa isobar in the (h,s) plane, SR2-01 eq. 2.
const N_H2AB: [f64; 4] = [
    -0.349_898_083_432_139e4,
    0.257_560_716_905_876e4,
    -0.421_073_558_227_969e3,
    0.276_349_063_799_944e2,
];

/// 2a/2b split curve of the (h,s) backward equation, kJ/kg.
pub(crate) fn h2ab(s: f64) -> f64 {
    N_H2AB[0] + s * (N_H2AB[1] + s * (N_H2AB[2] + s * N_H2AB[3]))
}

#[rustfmt::skip]
const I_PHS_A: [i32; 29] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3,
    4, 5, 5, 6, 7,
];
#[rustfmt::skip]
const J_PHS_A: [i32; 29] = [
    1, 3, 6, 16, 20, 22, 0, 1, 2, 3, 5, 6, 10, 16, 20, 22, 3, 16, 20, 0, 2,
    3, 6, 16, 16, 3, 16, 3, 1,
];
#[rustfmt::skip]
const N_PHS_A: [f64; 29] = [
    -0.182_575_361_923_032e-1,
    -0.125_229_548_799_536,
     0.592_290_437_320_145,
     0.604_769_706_185_122e1,
     0.238_624_965_444_474e3,
    -0.298_639_090_222_922e3,
     0.512_250_813_040_750e-1,
    -0.437_266_515_606_486,
     0.413_336_902_999_504,
    -0.516_468_254_574_773e1,
    -0.557_014_838_445_711e1,
     0.128_555_037_824_478e2,
     0.114_144_108_953_290e2,
    -0.119_504_225_652_714e3,
    -0.284_777_985_961_560e4,
     0.431_757_846_408_006e4,
     0.112_894_040_802_650e1,
     0.197_409_186_206_319e4,
     0.151_612_444_706_087e4,
     0.141_324_451_421_235e-1,
     0.585_501_282_219_601,
    -0.297_258_075_863_012e1,
     0.594_567_314_847_319e1,
    -0.623_656_565_798_905e4,
     0.965_986_235_133_332e4,
     0.681_500_934_948_134e1,
    -0.633_207_286_824_489e4,
    -0.558_919_224_465_760e1,
     0.400_645_798_472_063e-1,
];

#[rustfmt::skip]
const I_PHS_B: [i32; 33] = [
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5, 6, 6,
    6, 7, 7, 8, 8, 8, 8, 12, 14,
];
#[rustfmt::skip]
const J_PHS_B: [i32; 33] = [
    0, 1, 2, 4, 8, 0, 1, 2, 3, 5, 12, 1, 6, 18, 0, 1, 7, 12, 1, 16, 1, 12,
    1, 8, 18, 1, 16, 1, 3, 14, 18, 10, 16,
];
#[rustfmt::skip]
const N_PHS_B: [f64; 33] = [
     0.801_496_989_929_495e-1,
    -0.543_862_807_146_111,
     0.337_455_597_421_283,
     0.890_555_451_157_450e1,
     0.313_840_736_431_485e3,
     0.797_367_065_977_789,
    -0.121_616_973_556_240e1,
     0.872_803_386_937_477e1,
    -0.169_769_781_757_602e2,
    -0.186_552_827_328_416e3,
     0.951_159_274_344_237e5,
    -0.189_168_510_120_494e2,
    -0.433_407_037_194_840e4,
     0.543_212_633_012_715e9,
     0.144_793_408_386_013,
     0.128_024_559_637_516e3,
    -0.672_309_534_071_268e5,
     0.336_972_380_095_287e8,
    -0.586_634_196_762_720e3,
    -0.221_403_224_769_889e11,
     0.171_606_668_708_389e4,
    -0.570_817_595_806_302e9,
    -0.312_109_693_178_482e4,
    -0.207_841_384_633_010e7,
     0.305_605_946_157_786e13,
     0.322_157_004_314_333e4,
     0.326_810_259_797_295e12,
    -0.144_104_158_934_487e4,
     0.410_694_867_802_691e3,
     0.109_077_066_873_024e12,
    -0.247_964_654_258_893e14,
     0.188_801_906_865_134e10,
    -0.123_651_009_018_773e15,
];

#[rustfmt::skip]
const I_PHS_C: [i32; 31] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 5, 5,
    5, 5, 6, 6, 10, 12, 16,
];
#[rustfmt::skip]
const J_PHS_C: [i32; 31] = [
    0, 1, 2, 3, 4, 8, 0, 2, 5, 8, 14, 2, 3, 7, 10, 18, 0, 5, 8, 16, 18, 18,
    1, 4, 6, 14, 8, 18, 7, 7, 10,
];
#[rustfmt::skip]
const N_PHS_C: [f64; 31] = [
     0.112_225_607_199_012,
    -0.339_005_953_606_712e1,
    -0.320_503_911_730_094e2,
    -0.197_597_305_104_900e3,
    -0.407_693_861_553_446e3,
     0.132_943_775_222_331e5,
     0.170_846_839_774_007e1,
     0.373_694_198_142_245e2,
     0.358_144_365_815_434e4,
     0.423_014_446_424_664e6,
    -0.751_071_025_760_063e9,
     0.523_446_127_607_898e2,
    -0.228_351_290_812_417e3,
    -0.960_652_417_056_937e6,
    -0.807_059_292_526_074e8,
     0.162_698_017_225_669e13,
     0.772_465_073_604_171,
     0.463_929_973_837_746e5,
    -0.137_317_885_134_128e8,
     0.170_470_392_630_512e13,
    -0.251_104_628_187_308e14,
     0.317_748_830_835_520e14,
     0.538_685_623_675_312e2,
    -0.553_089_094_625_169e5,
    -0.102_861_522_421_405e7,
     0.204_249_418_756_234e13,
     0.273_918_446_626_977e9,
    -0.263_963_146_312_685e16,
    -0.107_890_854_108_088e10,
    -0.296_492_620_980_124e11,
    -0.111_754_907_323_424e16,
];

/// Backward `p(h,s)`, MPa, with 2a/2b/2c sub-region dispatch
/// (IAPWS SR2-01 eq. 3-5).
pub(crate) fn p_hs(h: f64, s: f64) -> f64 {
    if s < 5.85 {
        let eta = h / 3500.0 - 0.7;
        let sigma = s / 5.9 - 1.1;
        let mut sum = 0.0;
        for k in 0..N_PHS_C.len() {
            sum += N_PHS_C[k] * eta.powi(I_PHS_C[k]) * sigma.powi(J_PHS_C[k]);
        }
        100.0 * sum.powi(4)
    } else if h <= h2ab(s) {
        let eta = h / 4200.0 - 0.5;
        let sigma = s / 12.0 - 1.2;
        let mut sum = 0.0;
        for k in 0..N_PHS_A.len() {
            sum += N_PHS_A[k] * eta.powi(I_PHS_A[k]) * sigma.powi(J_PHS_A[k]);
        }
        4.0 * sum.powi(4)
    } else {
        let eta = h / 4100.0 - 0.6;
        let sigma = s / 7.9 - 1.01;
        let mut sum = 0.0;
        for k in 0..N_PHS_B.len() {
            sum += N_PHS_B[k] * eta.powi(I_PHS_B[k]) * sigma.powi(J_PHS_B[k]);
        }
        100.0 * sum.powi(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R7-97(2012), table 15.
    #[rstest]
    #[case(300.0, 0.0035, 0.394_913_866e2, 0.254_991_145e4, 0.852_238_967e1, 0.427_920_172e3)]
    #[case(700.0, 0.0035, 0.923_015_898e2, 0.333_568_375e4, 0.101_749_996e2, 0.644_289_068e3)]
    #[case(700.0, 30.0, 0.542_946_619e-2, 0.263_149_474e4, 0.517_540_298e1, 0.480_386_523e3)]
    fn basic_equation_matches_table_15(
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

    // IAPWS R7-97(2012), table 24.
    #[rstest]
    #[case(0.001, 3000.0, 0.534_433_241e3)]
    #[case(3.0, 3000.0, 0.575_373_370e3)]
    #[case(3.0, 4000.0, 0.101_077_577e4)]
    #[case(5.0, 3500.0, 0.801_299_102e3)]
    #[case(5.0, 4000.0, 0.101_531_583e4)]
    #[case(25.0, 3500.0, 0.875_279_054e3)]
    #[case(40.0, 2700.0, 0.743_056_411e3)]
    #[case(60.0, 2700.0, 0.791_137_067e3)]
    #[case(60.0, 3200.0, 0.882_756_860e3)]
    fn backward_t_ph_matches_table_24(#[case] p: f64, #[case] h: f64, #[case] t: f64) {
        assert_if97_eq!(t_ph(p, h), t);
    }

    // IAPWS R7-97(2012), table 29.
    #[rstest]
    #[case(0.1, 7.5, 0.399_517_097e3)]
    #[case(0.1, 8.0, 0.514_127_081e3)]
    #[case(2.5, 8.0, 0.103_984_917e4)]
    #[case(8.0, 6.0, 0.600_484_040e3)]
    #[case(8.0, 7.5, 0.106_495_556e4)]
    #[case(90.0, 6.0, 0.103_801_126e4)]
    #[case(20.0, 5.75, 0.697_992_849e3)]
    #[case(80.0, 5.25, 0.854_011_484e3)]
    #[case(80.0, 5.75, 0.949_017_998e3)]
    fn backward_t_ps_matches_table_29(#[case] p: f64, #[case] s: f64, #[case] t: f64) {
        assert_if97_eq!(t_ps(p, s), t);
    }

    // IAPWS SR2-01(2014), table 9.
    #[rstest]
    #[case(2800.0, 6.5, 0.137_101_276_7e1)]
    #[case(2800.0, 9.5, 0.187_974_384_4e-2)]
    #[case(4100.0, 9.5, 0.102_478_899_7)]
    #[case(2800.0, 6.0, 0.479_391_144_2e1)]
    #[case(3600.0, 6.0, 0.839_551_920_9e2)]
    #[case(3600.0, 7.0, 0.752_716_144_1e1)]
    #[case(2800.0, 5.1, 0.943_920_206_0e2)]
    #[case(2800.0, 5.8, 0.841_457_412_4e1)]
    #[case(3400.0, 5.8, 0.837_690_387_9e2)]
    fn backward_p_hs_matches_table_9(#[case] h: f64, #[case] s: f64, #[case] p: f64) {
        assert_if97_eq!(p_hs(h, s), p);
    }
}
