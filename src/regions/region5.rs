//! Region 5: high-temperature steam, 1073.15 K ≤ T ≤ 2273.15 K, p ≤ 50 MPa.
//!
//! Basic equation: γ(π,τ) = γ°(π,τ) + γʳ(π,τ) of IAPWS R7-97(2012), eq. 32
//! with tables 37 and 38. No backward equations are published for this
//! region.

use super::RawProps;
use crate::units::R;

const T_STAR: f64 = 1000.0; // K; p* = 1 MPa

#[rustfmt::skip]
const J0: [i32; 6] = [0, 1, -3, -2, -1, 2];
#[rustfmt::skip]
const N0: [f64; 6] = [
    -0.131_799_836_742_01e2,
     0.685_408_416_344_34e1,
    -0.248_051_489_334_66e-1,
     0.369_015_349_803_33,
    -0.311_613_182_139_25e1,
    -0.329_616_265_389_17,
];

#[rustfmt::skip]
const IR: [i32; 6] = [1, 1, 1, 2, 2, 3];
#[rustfmt::skip]
const JR: [i32; 6] = [1, 2, 3, 3, 9, 7];
#[rustfmt::skip]
const NR: [f64; 6] = [
     0.157_364_048_552_59e-2,
     0.901_537_616_739_44e-3,
    -0.502_700_776_776_48e-2,
     0.224_400_374_094_85e-5,
    -0.411_632_754_534_71e-5,
     0.379_194_548_229_55e-7,
];

/// Full property set at (T, p); inputs must already satisfy the region 5
/// envelope.
pub(crate) fn props(t: f64, p: f64) -> RawProps {
    let pi = p;
    let tau = T_STAR / t;

    let (mut g0, mut g0t, mut g0tt) = (pi.ln(), 0.0, 0.0);
    for k in 0..N0.len() {
        let (j, n) = (J0[k], N0[k]);
        g0 += n * tau.powi(j);
        g0t += n * f64::from(j) * tau.powi(j - 1);
        g0tt += n * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }

    let (mut gr, mut grp, mut grpp, mut grt, mut grtt, mut grpt) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for k in 0..NR.len() {
        let (i, j, n) = (IR[k], JR[k], NR[k]);
        let pi_i = pi.powi(i);
        let tj = tau.powi(j);
        gr += n * pi_i * tj;
        grp += n * f64::from(i) * pi.powi(i - 1) * tj;
        grpp += n * f64::from(i) * f64::from(i - 1) * pi.powi(i - 2) * tj;
        grt += n * pi_i * f64::from(j) * tau.powi(j - 1);
        grtt += n * pi_i * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
        grpt += n * f64::from(i) * pi.powi(i - 1) * f64::from(j) * tau.powi(j - 1);
    }

    let rt = R * t;
    let gp = 1.0 / pi + grp;
    let gt = g0t + grt;
    let gtt = g0tt + grtt;
    let g = g0 + gr;

    let v = pi * gp * rt / (p * 1000.0);
    let h = rt * tau * gt;
    let u = rt * (tau * gt - pi * gp);
    let s = R * (tau * gt - g);
    let cp = -R * tau * tau * gtt;
    let a = 1.0 + pi * grp - tau * pi * grpt;
    let cv = cp - R * a * a / (1.0 - pi * pi * grpp);
    let num = 1.0 + 2.0 * pi * grp + pi * pi * grp * grp;
    let den = 1.0 - pi * pi * grpp + a * a / (tau * tau * gtt);
    let w2 = 1000.0 * rt * num / den;
    RawProps { v, h, u, s, cp, cv, w: w2.sqrt() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R7-97(2012), table 42.
    #[rstest]
    #[case(1500.0, 0.5, 0.138_455_090e1, 0.521_976_855e4, 0.965_408_875e1, 0.917_068_690e3)]
    #[case(1500.0, 30.0, 0.230_761_299e-1, 0.516_723_514e4, 0.772_970_133e1, 0.928_548_002e3)]
    #[case(2000.0, 30.0, 0.311_385_219e-1, 0.657_122_604e4, 0.853_640_523e1, 0.106_736_948e4)]
    fn basic_equation_matches_table_42(
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
}
