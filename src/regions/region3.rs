//! Region 3: the near-critical region, 623.15 K ≤ T, p ≥ p_B23(T), p ≤ 100 MPa.
//!
//! Basic equation: dimensionless Helmholtz energy φ(δ,τ) of IAPWS
//! R7-97(2012), eq. 28 with the 40 coefficients of table 30. The region is
//! the only one whose basic equation takes density, so `v(T,p)` needs either
//! the SR5-05 backward equations (see [`super::region3_v`]) or iteration;
//! [`refine_v`] does the latter, seeded by the former.
//!
//! Backward equations `T(p,h)`, `T(p,s)` from IAPWS SR3-03(2014), `p(h,s)`
//! from IAPWS SR4-04(2014), each split into 3a/3b.

use super::boundaries::S_CRIT;
use super::RawProps;
use crate::error::Error;
use crate::units::{R, RHO_CRIT, T_CRIT};

#[rustfmt::skip]
const I: [i32; 39] = [
    0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4,
    4, 4, 5, 5, 5, 6, 6, 6, 7, 8, 9, 9, 10, 10, 11,
];
#[rustfmt::skip]
const J: [i32; 39] = [
    0, 1, 2, 7, 10, 12, 23, 2, 6, 15, 17, 0, 2, 6, 7, 22, 26, 0, 2, 4, 16,
    26, 0, 2, 4, 26, 1, 3, 26, 0, 2, 26, 2, 26, 2, 26, 0, 1, 26,
];
#[rustfmt::skip]
const N: [f64; 39] = [
    -0.157_328_452_902_39e2,
     0.209_443_969_743_07e2,
    -0.768_677_078_787_16e1,
     0.261_859_477_879_54e1,
    -0.280_807_811_486_20e1,
     0.120_533_696_965_17e1,
    -0.845_668_128_125_02e-2,
    -0.126_543_154_777_14e1,
    -0.115_244_078_066_81e1,
     0.885_210_439_843_18,
    -0.642_077_651_816_07,
     0.384_934_601_866_71,
    -0.852_147_088_242_06,
     0.489_722_815_418_77e1,
    -0.305_026_172_569_65e1,
     0.394_205_368_791_54e-1,
     0.125_584_084_243_08,
    -0.279_993_296_987_10,
     0.138_997_995_694_60e1,
    -0.201_899_150_235_70e1,
    -0.821_476_371_739_63e-2,
    -0.475_960_357_349_23,
     0.439_840_744_735_00e-1,
    -0.444_764_354_287_39,
     0.905_720_707_197_33,
     0.705_224_500_879_67,
     0.107_705_126_263_32,
    -0.329_136_232_589_54,
    -0.508_710_620_411_58,
    -0.221_754_008_730_96e-1,
     0.942_607_516_650_92e-1,
     0.164_362_784_479_61,
    -0.135_033_722_413_48e-1,
    -0.148_343_453_524_72e-1,
     0.579_229_536_280_84e-3,
     0.323_089_047_037_11e-2,
     0.809_648_029_962_15e-4,
    -0.165_576_797_950_37e-3,
    -0.449_238_990_618_15e-4,
];

/// Coefficient of the ln δ term.
const N1: f64 = 0.106_580_700_285_13e1;

struct Helmholtz {
    f: f64,
    fd: f64,
    ft: f64,
    fdd: f64,
    ftt: f64,
    fdt: f64,
}

fn helmholtz(delta: f64, tau: f64) -> Helmholtz {
    let mut out = Helmholtz {
        f: N1 * delta.ln(),
        fd: N1 / delta,
        ft: 0.0,
        fdd: -N1 / (delta * delta),
        ftt: 0.0,
        fdt: 0.0,
    };
    for k in 0..N.len() {
        let (i, j, n) = (I[k], J[k], N[k]);
        let di = delta.powi(i);
        let tj = tau.powi(j);
        out.f += n * di * tj;
        out.fd += n * f64::from(i) * delta.powi(i - 1) * tj;
        out.fdd += n * f64::from(i) * f64::from(i - 1) * delta.powi(i - 2) * tj;
        out.ft += n * di * f64::from(j) * tau.powi(j - 1);
        out.ftt += n * di * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
        out.fdt += n * f64::from(i) * delta.powi(i - 1) * f64::from(j) * tau.powi(j - 1);
    }
    out
}

/// Pressure at (T, ρ), MPa.
pub(crate) fn p_t_rho(t: f64, rho: f64) -> f64 {
    let delta = rho / RHO_CRIT;
    let tau = T_CRIT / t;
    let f = helmholtz(delta, tau);
    rho * R * t * delta * f.fd / 1000.0
}

/// ∂p/∂ρ at constant T, MPa/(kg/m³).
pub(crate) fn dp_drho_t(t: f64, rho: f64) -> f64 {
    let delta = rho / RHO_CRIT;
    let tau = T_CRIT / t;
    let f = helmholtz(delta, tau);
    R * t * (2.0 * delta * f.fd + delta * delta * f.fdd) / 1000.0
}

/// Full property set at (T, ρ); the caller supplies a density consistent
/// with the region 3 envelope.
pub(crate) fn props_t_rho(t: f64, rho: f64) -> RawProps {
    let delta = rho / RHO_CRIT;
    let tau = T_CRIT / t;
    let f = helmholtz(delta, tau);
    let rt = R * t;
    let v = 1.0 / rho;
    let u = rt * tau * f.ft;
    let h = rt * (tau * f.ft + delta * f.fd);
    let s = R * (tau * f.ft - f.f);
    let cv = -R * tau * tau * f.ftt;
    let a = delta * f.fd - delta * tau * f.fdt;
    let b = 2.0 * delta * f.fd + delta * delta * f.fdd;
    let cp = R * (-tau * tau * f.ftt + a * a / b);
    let w2 = 1000.0 * rt * (b - a * a / (tau * tau * f.ftt));
    RawProps { v, h, u, s, cp, cv, w: w2.sqrt() }
}

/// Newton refinement of `v(T,p)` against the forward Helmholtz equation.
///
/// The SR5-05 backward value is accurate to ~1e-6 relative; a few Newton
/// steps on the residual `p(T,v) − p` bring it to the forward equation's own
/// precision. The update is clamped to a bracket around the seed, with a
/// bisection fallback wherever ∂p/∂v loses its physical (negative) sign
/// near the sub-region seams.
pub(crate) fn refine_v(t: f64, p: f64, v_seed: f64) -> Result<f64, Error> {
    match newton_v(t, p, v_seed) {
        Ok(v) => Ok(v),
        // One retry with a perturbed seed before giving up.
        Err(_) => newton_v(t, p, v_seed * (1.0 + 1e-4)),
    }
}

fn newton_v(t: f64, p: f64, v_seed: f64) -> Result<f64, Error> {
    const MAX_ITER: u32 = 10;
    let mut lo = v_seed * 0.98;
    let mut hi = v_seed * 1.02;
    let mut v = v_seed;
    let mut residual = f64::INFINITY;
    for _ in 0..MAX_ITER {
        let rho = 1.0 / v;
        residual = p_t_rho(t, rho) - p;
        // p decreases with v on the physical branch: residual > 0 means v is
        // still too small.
        if residual > 0.0 {
            lo = lo.max(v);
        } else {
            hi = hi.min(v);
        }
        let dp_dv = -rho * rho * dp_drho_t(t, rho);
        let step = if dp_dv < 0.0 { -residual / dp_dv } else { f64::NAN };
        let mut next = v + step;
        if !next.is_finite() || next <= lo || next >= hi {
            next = 0.5 * (lo + hi);
        }
        if ((next - v) / v).abs() < 1e-12 || residual == 0.0 {
            return Ok(next);
        }
        v = next;
    }
    if (residual / p).abs() < 1e-10 {
        return Ok(v);
    }
    Err(Error::ConvergenceFailure {
        operation: "region 3 v(T,p) refinement",
        residual,
        iterations: MAX_ITER,
    })
}

// h3ab(p): the 3a/3b split enthalpy for T(p,h), IAPWS SR3-03 eq. 1.
const N_H3AB: [f64; 4] = [
    0.201_464_004_206_875e4,
    0.374_696_550_136_983e1,
    -0.219_921_901_054_187e-1,
    0.875_131_686_009_950e-4,
];

/// Enthalpy on the 3a/3b split at pressure `p`, kJ/kg.
pub(crate) fn h3ab(p: f64) -> f64 {
    N_H3AB[0] + p * (N_H3AB[1] + p * (N_H3AB[2] + p * N_H3AB[3]))
}

#[rustfmt::skip]
const I_TPH_A: [i32; 31] = [
    -12, -12, -12, -12, -12, -12, -12, -12, -10, -10, -10, -8, -8, -8, -8,
    -5, -3, -2, -2, -2, -1, -1, 0, 0, 1, 3, 3, 4, 4, 10, 12,
];
#[rustfmt::skip]
const J_TPH_A: [i32; 31] = [
    0, 1, 2, 6, 14, 16, 20, 22, 1, 5, 12, 0, 2, 4, 10, 2, 0, 1, 3, 4, 0, 2,
    0, 1, 1, 0, 1, 0, 3, 4, 5,
];
#[rustfmt::skip]
const N_TPH_A: [f64; 31] = [
    -0.133_645_667_811_215e-6,
     0.455_912_656_802_978e-5,
    -0.146_294_640_700_979e-4,
     0.639_341_312_970_080e-2,
     0.372_783_927_268_847e3,
    -0.718_654_377_460_447e4,
     0.573_494_752_103_400e6,
    -0.267_569_329_111_439e7,
    -0.334_066_283_302_614e-4,
    -0.245_479_214_069_597e-1,
     0.478_087_847_764_996e2,
     0.764_664_131_818_904e-5,
     0.128_350_627_676_972e-2,
     0.171_219_081_377_331e-1,
    -0.851_007_304_583_213e1,
    -0.136_513_461_629_781e-1,
    -0.384_460_997_596_657e-5,
     0.337_423_807_911_655e-2,
    -0.551_624_873_066_791,
     0.729_202_277_107_470,
    -0.992_522_757_376_041e-2,
    -0.119_308_831_407_288,
     0.793_929_190_615_421,
     0.454_270_731_799_386,
     0.209_998_591_259_910,
    -0.642_109_823_904_738e-2,
    -0.235_155_868_604_540e-1,
     0.252_233_108_341_612e-2,
    -0.764_885_133_368_119e-2,
     0.136_176_427_574_291e-1,
    -0.133_027_883_575_669e-1,
];

#[rustfmt::skip]
const I_TPH_B: [i32; 33] = [
    -12, -12, -10, -10, -10, -10, -10, -8, -8, -8, -8, -8, -6, -6, -6, -4,
    -4, -3, -2, -2, -1, -1, -1, -1, -1, -1, 0, 0, 1, 3, 5, 6, 8,
];
#[rustfmt::skip]
const J_TPH_B: [i32; 33] = [
    0, 1, 0, 1, 5, 10, 12, 0, 1, 2, 4, 10, 0, 1, 2, 0, 1, 5, 0, 4, 2, 4, 6,
    10, 14, 16, 0, 2, 1, 1, 1, 1, 1,
];
#[rustfmt::skip]
const N_TPH_B: [f64; 33] = [
     0.323_254_573_644_920e-4,
    -0.127_575_556_587_181e-3,
    -0.475_851_877_356_068e-3,
     0.156_183_014_181_602e-2,
     0.105_724_860_113_781,
    -0.858_514_221_132_534e2,
     0.724_140_095_480_911e3,
     0.296_475_810_273_257e-2,
    -0.592_721_983_365_988e-2,
    -0.126_305_422_818_666e-1,
    -0.115_716_196_364_853,
     0.849_000_969_739_595e2,
    -0.108_602_260_086_615e-1,
     0.154_304_475_328_851e-1,
     0.750_455_441_524_466e-1,
     0.252_520_973_612_982e-1,
    -0.602_507_901_232_996e-1,
    -0.307_622_221_350_501e1,
    -0.574_011_959_864_879e-1,
     0.503_471_360_939_849e1,
    -0.925_081_888_584_834,
     0.391_733_882_917_546e1,
    -0.773_146_007_130_190e2,
     0.949_308_762_098_587e4,
    -0.141_043_719_679_409e7,
     0.849_166_230_819_026e7,
     0.861_095_729_446_704,
     0.323_346_442_811_720,
     0.873_281_936_020_439,
    -0.436_653_048_526_683,
     0.286_596_714_529_479,
    -0.131_778_331_276_228,
     0.676_682_064_330_275e-2,
];

/// Backward `T(p,h)`, K, split into 3a/3b along [`h3ab`]
/// (IAPWS SR3-03 eq. 2/3).
pub(crate) fn t_ph(p: f64, h: f64) -> f64 {
    if h <= h3ab(p) {
        let x = p / 100.0 + 0.240;
        let y = h / 2300.0 - 0.615;
        let mut theta = 0.0;
        for k in 0..N_TPH_A.len() {
            theta += N_TPH_A[k] * x.powi(I_TPH_A[k]) * y.powi(J_TPH_A[k]);
        }
        760.0 * theta
    } else {
        let x = p / 100.0 + 0.298;
        let y = h / 2800.0 - 0.720;
        let mut theta = 0.0;
        for k in 0..N_TPH_B.len() {
            theta += N_TPH_B[k] * x.powi(I_TPH_B[k]) * y.powi(J_TPH_B[k]);
        }
        860.0 * theta
    }
}

#[rustfmt::skip]
const I_TPS_A: [i32; 33] = [
    -12, -12, -10, -10, -10, -10, -8, -8, -8, -8, -6, -6, -6, -5, -5, -5,
    -4, -4, -4, -2, -2, -1, -1, 0, 0, 0, 1, 2, 2, 3, 8, 8, 10,
];
#[rustfmt::skip]
const J_TPS_A: [i32; 33] = [
    28, 32, 4, 10, 12, 14, 5, 7, 8, 28, 2, 6, 32, 0, 14, 32, 6, 10, 36, 1,
    4, 1, 6, 0, 1, 4, 0, 0, 3, 2, 0, 1, 2,
];
#[rustfmt::skip]
const N_TPS_A: [f64; 33] = [
     0.150_042_008_263_875e10,
    -0.159_397_258_480_424e12,
     0.502_181_140_217_975e-3,
    -0.672_057_767_855_466e2,
     0.145_058_545_404_456e4,
    -0.823_889_534_888_890e4,
    -0.154_852_214_233_853,
     0.112_305_046_746_695e2,
    -0.297_000_213_482_822e2,
     0.438_565_132_635_495e11,
     0.137_837_838_635_464e-2,
    -0.297_478_527_157_462e1,
     0.971_777_947_349_413e13,
    -0.571_527_767_052_398e-4,
     0.288_307_949_778_420e5,
    -0.744_428_289_262_703e14,
     0.128_017_324_848_921e2,
    -0.368_275_545_889_071e3,
     0.664_768_904_779_177e16,
     0.449_359_251_958_880e-1,
    -0.422_897_836_099_655e1,
    -0.240_614_376_434_179,
    -0.474_341_365_254_924e1,
     0.724_093_999_126_110,
     0.923_874_349_695_897,
     0.399_043_655_281_015e1,
     0.384_066_651_868_009e-1,
    -0.359_344_365_571_848e-2,
    -0.735_196_448_821_653,
     0.188_367_048_396_131,
     0.141_064_266_818_704e-3,
    -0.257_418_501_496_337e-2,
     0.123_220_024_851_555e-2,
];

#[rustfmt::skip]
const I_TPS_B: [i32; 28] = [
    -12, -12, -12, -12, -8, -8, -8, -6, -6, -6, -5, -5, -5, -5, -5, -4, -3,
    -3, -2, 0, 2, 3, 4, 5, 6, 8, 12, 14,
];
#[rustfmt::skip]
const J_TPS_B: [i32; 28] = [
    1, 3, 4, 7, 0, 1, 3, 0, 2, 4, 0, 1, 2, 4, 6, 12, 1, 6, 2, 0, 1, 1, 0,
    24, 0, 3, 1, 2,
];
#[rustfmt::skip]
const N_TPS_B: [f64; 28] = [
     0.527_111_701_601_660,
    -0.401_317_830_052_742e2,
     0.153_020_073_134_484e3,
    -0.224_799_398_218_827e4,
    -0.193_993_484_669_048,
    -0.140_467_557_893_768e1,
     0.426_799_878_114_024e2,
     0.752_810_643_416_743,
     0.226_657_238_616_417e2,
    -0.622_873_556_909_932e3,
    -0.660_823_667_935_396,
     0.841_267_087_271_658,
    -0.253_717_501_764_397e2,
     0.485_708_963_532_948e3,
     0.880_531_517_490_555e3,
     0.265_015_592_794_626e7,
    -0.359_287_150_025_783,
    -0.656_991_567_673_753e3,
     0.241_768_149_185_367e1,
     0.856_873_461_222_588,
     0.655_143_675_313_458,
    -0.213_535_213_206_406,
     0.562_974_957_606_348e-2,
    -0.316_955_725_450_471e15,
    -0.699_997_000_152_457e-3,
     0.119_845_803_210_767e-1,
     0.193_848_122_022_095e-4,
    -0.215_095_749_182_309e-4,
];

/// Backward `T(p,s)`, K, split into 3a/3b at the critical isentrope
/// (IAPWS SR3-03 eq. 6/7).
pub(crate) fn t_ps(p: f64, s: f64) -> f64 {
    if s <= S_CRIT {
        let x = p / 100.0 + 0.240;
        let y = s / 4.4 - 0.703;
        let mut theta = 0.0;
        for k in 0..N_TPS_A.len() {
            theta += N_TPS_A[k] * x.powi(I_TPS_A[k]) * y.powi(J_TPS_A[k]);
        }
        760.0 * theta
    } else {
        let x = p / 100.0 + 0.760;
        let y = s / 5.3 - 0.818;
        let mut theta = 0.0;
        for k in 0..N_TPS_B.len() {
            theta += N_TPS_B[k] * x.powi(I_TPS_B[k]) * y.powi(J_TPS_B[k]);
        }
        860.0 * theta
    }
}

#[rustfmt::skip]
const I_PHS_A: [i32; 33] = [
    0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 6, 7, 8, 10, 10,
    14, 18, 20, 22, 22, 24, 28, 28, 32, 32,
];
#[rustfmt::skip]
const J_PHS_A: [i32; 33] = [
    0, 1, 5, 0, 3, 4, 8, 14, 6, 16, 0, 2, 3, 0, 1, 4, 5, 28, 28, 24, 1, 32,
    36, 22, 28, 36, 16, 28, 36, 16, 36, 10, 36,
];
#[rustfmt::skip]
const N_PHS_A: [f64; 33] = [
     0.770_889_828_326_934e1,
    -0.260_835_009_128_688e2,
     0.267_416_218_930_389e3,
     0.172_221_089_496_844e2,
    -0.293_542_332_145_970e3,
     0.614_135_601_882_478e3,
    -0.610_562_757_725_674e5,
    -0.651_272_251_118_219e8,
     0.735_919_313_521_937e5,
    -0.116_646_505_914_191e11,
     0.355_267_086_434_461e2,
    -0.596_144_543_825_955e3,
    -0.475_842_430_145_708e3,
     0.696_781_965_359_503e2,
     0.335_674_250_377_312e3,
     0.250_526_809_130_882e5,
     0.146_997_380_630_766e6,
     0.538_069_315_091_534e20,
     0.143_619_827_291_346e22,
     0.364_985_866_165_994e20,
    -0.254_741_561_156_775e4,
     0.240_120_197_096_563e28,
    -0.393_847_464_679_496e30,
     0.147_073_407_024_852e25,
    -0.426_391_250_432_059e32,
     0.194_509_340_621_077e39,
     0.666_212_132_114_896e24,
     0.706_777_016_552_858e34,
     0.175_563_621_975_576e42,
     0.108_408_607_429_124e29,
     0.730_872_705_175_151e44,
     0.159_145_847_398_870e25,
     0.377_121_605_943_324e41,
];

#[rustfmt::skip]
const I_PHS_B: [i32; 35] = [
    -12, -12, -12, -12, -12, -10, -10, -10, -10, -8, -8, -6, -6, -6, -6, -5,
    -4, -4, -4, -3, -3, -3, -3, -2, -2, -1, 0, 2, 2, 5, 6, 8, 10, 14, 14,
];
#[rustfmt::skip]
const J_PHS_B: [i32; 35] = [
    2, 10, 12, 14, 20, 2, 10, 14, 18, 2, 8, 2, 6, 7, 8, 10, 4, 5, 8, 1, 3,
    5, 6, 0, 1, 0, 3, 0, 1, 0, 1, 1, 1, 3, 7,
];
#[rustfmt::skip]
const N_PHS_B: [f64; 35] = [
     0.125_244_360_717_979e-12,
    -0.126_599_322_553_713e-1,
     0.506_878_030_140_626e1,
     0.317_847_171_154_202e2,
    -0.391_041_161_399_932e6,
    -0.975_733_406_392_044e-10,
    -0.186_312_419_488_279e2,
     0.510_973_543_414_101e3,
     0.373_847_005_822_362e6,
     0.299_804_024_666_572e-7,
     0.200_544_393_820_342e2,
    -0.498_030_487_662_829e-5,
    -0.102_301_806_360_030e2,
     0.552_819_126_990_325e2,
    -0.206_211_367_510_878e3,
    -0.794_012_232_324_823e4,
     0.782_248_472_028_153e1,
    -0.586_544_326_902_468e2,
     0.355_073_647_696_177e4,
    -0.115_303_107_290_162e-3,
     0.175_092_403_171_802e1,
    -0.257_981_687_748_160e3,
     0.727_048_374_179_467e3,
     0.121_644_822_609_198e-3,
     0.393_137_871_762_692e-1,
     0.704_181_005_909_296e-2,
    -0.829_108_200_698_110e2,
    -0.265_178_818_131_250,
     0.137_531_682_453_991e2,
    -0.522_394_090_753_046e2,
     0.240_556_298_941_048e4,
    -0.227_361_631_268_929e5,
     0.890_746_343_932_567e5,
    -0.239_234_565_822_486e8,
     0.568_795_808_129_714e10,
];

/// Backward `p(h,s)`, MPa, split at the critical isentrope
/// (IAPWS SR4-04 eq. 1/2: direct sum for 3a, reciprocal for 3b).
pub(crate) fn p_hs(h: f64, s: f64) -> f64 {
    if s <= S_CRIT {
        let x = h / 2300.0 - 1.01;
        let y = s / 4.4 - 0.750;
        let mut pi = 0.0;
        for k in 0..N_PHS_A.len() {
            pi += N_PHS_A[k] * x.powi(I_PHS_A[k]) * y.powi(J_PHS_A[k]);
        }
        99.0 * pi
    } else {
        let x = h / 2800.0 - 0.681;
        let y = s / 5.3 - 0.792;
        let mut pi = 0.0;
        for k in 0..N_PHS_B.len() {
            pi += N_PHS_B[k] * x.powi(I_PHS_B[k]) * y.powi(J_PHS_B[k]);
        }
        16.6 / pi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R7-97(2012), table 33: φ(δ,τ) checked through p, h, cp, w at
    // (T, ρ) states.
    #[rstest]
    #[case(650.0, 500.0, 0.255_837_018e2, 0.186_343_019e4, 0.138_935_717e2, 0.502_005_554e3)]
    #[case(650.0, 200.0, 0.222_930_643e2, 0.237_512_401e4, 0.446_579_342e2, 0.383_444_594e3)]
    #[case(750.0, 500.0, 0.783_095_639e2, 0.225_868_845e4, 0.634_165_359e1, 0.760_696_041e3)]
    fn basic_equation_matches_table_33(
        #[case] t: f64,
        #[case] rho: f64,
        #[case] p: f64,
        #[case] h: f64,
        #[case] cp: f64,
        #[case] w: f64,
    ) {
        let out = props_t_rho(t, rho);
        assert_if97_eq!(p_t_rho(t, rho), p);
        assert_if97_eq!(out.h, h);
        assert_if97_eq!(out.cp, cp);
        assert_if97_eq!(out.w, w);
    }

    // IAPWS SR3-03(2014), table 5.
    #[rstest]
    #[case(20.0, 1700.0, 0.629_308_389_2e3)]
    #[case(50.0, 2000.0, 0.690_571_833_8e3)]
    #[case(100.0, 2100.0, 0.733_616_301_4e3)]
    #[case(20.0, 2500.0, 0.641_841_805_3e3)]
    #[case(50.0, 2400.0, 0.735_184_861_8e3)]
    #[case(100.0, 2700.0, 0.842_046_087_6e3)]
    fn backward_t_ph_matches_table_5(#[case] p: f64, #[case] h: f64, #[case] t: f64) {
        assert_if97_eq!(t_ph(p, h), t);
    }

    // IAPWS SR3-03(2014), table 12.
    #[rstest]
    #[case(20.0, 3.8, 0.628_295_986_9e3)]
    #[case(50.0, 3.6, 0.629_715_872_6e3)]
    #[case(100.0, 4.0, 0.705_688_023_7e3)]
    #[case(20.0, 5.0, 0.640_117_644_3e3)]
    #[case(50.0, 4.5, 0.716_368_751_7e3)]
    #[case(100.0, 5.0, 0.847_433_282_5e3)]
    fn backward_t_ps_matches_table_12(#[case] p: f64, #[case] s: f64, #[case] t: f64) {
        assert_if97_eq!(t_ps(p, s), t);
    }

    // IAPWS SR4-04(2014), table 5.
    #[rstest]
    #[case(1700.0, 3.8, 0.255_570_324_6e2)]
    #[case(2000.0, 4.2, 0.454_087_346_8e2)]
    #[case(2100.0, 4.3, 0.607_812_334_0e2)]
    #[case(2600.0, 5.1, 0.343_499_926_3e2)]
    #[case(2400.0, 4.7, 0.636_392_488_7e2)]
    #[case(2700.0, 5.0, 0.883_904_328_1e2)]
    fn backward_p_hs_matches_table_5(#[case] h: f64, #[case] s: f64, #[case] p: f64) {
        assert_if97_eq!(p_hs(h, s), p);
    }

    #[test]
    fn refine_v_converges_from_perturbed_seed() {
        // Table 33 state: T = 650 K, rho = 500 kg/m³ → p = 25.5837018 MPa.
        let t = 650.0;
        let p = p_t_rho(t, 500.0);
        let v = refine_v(t, p, 0.002 * (1.0 + 5e-7)).unwrap();
        assert_if97_eq!(v, 0.002, 1e-9);
    }
}
