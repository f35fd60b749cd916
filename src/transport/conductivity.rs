//! Thermal conductivity of water, IAPWS R15-11, industrial formulation.
//!
//! λ = λ₀(T̄)·λ₁(T̄,ρ̄) + λ₂, with the critical enhancement λ₂ evaluated
//! using the simplified isothermal-compressibility correlation of the
//! release (its table 6) instead of the full equation-of-state value.
//!
//! The state derivatives λ₂ needs (cp, cv, ∂ρ/∂p) come from the IF97 core;
//! the public `(T,p)` entry point lives in [`crate::water`].

use crate::units::{P_CRIT, RHO_CRIT, T_CRIT};

// Gas constant fixed by R15-11 for the dimensionless heat capacity; it
// differs in the last digits from the IF97 value on purpose.
const R_COND: f64 = 0.46151805; // kJ/(kg·K)

const L0: [f64; 5] = [2.443221e-3, 1.323095e-2, 6.770357e-3, -3.454586e-3, 4.096266e-4];

#[rustfmt::skip]
const L1: [[f64; 6]; 5] = [
    [ 1.60397357, -0.646013523,  0.111443906,  0.102997357, -0.0504123634,  0.00609859258],
    [ 2.33771842, -2.78843778,   1.53616167,  -0.463045512,  0.0832827019, -0.00719201245],
    [ 2.19650529, -4.54580785,   3.55777244,  -1.40944978,   0.275418278,  -0.0205938816],
    [-1.21051378,  1.60812989,  -0.621178141,  0.0716373224, 0.0,           0.0],
    [-2.72033700,  4.57586331,  -3.18369245,   1.11683480,  -0.192683050,   0.0129138420],
];

// Simplified ζ(T_R, ρ̄) correlation of R15-11 table 6: one reciprocal
// polynomial per density band.
#[rustfmt::skip]
const A: [[f64; 6]; 5] = [
    [ 6.53786807199516, -5.61149954923348,  3.39624167361325, -2.27492629730878, 10.2631854662709,  1.97815050331519],
    [ 6.52717759281799, -6.30816983387575,  8.08379285492595, -9.82240510197603, 12.1358413791395, -5.54349664571295],
    [ 5.35500529896124, -3.96415689925446,  8.91990208918795, -12.0338729505790,  9.19494865194302, -2.16866274479712],
    [ 1.55225959906681,  0.464621290821181, 8.93237374861479, -11.0321960061126,  6.16780999933360, -0.965458722086812],
    [ 1.11999926419994,  0.595748562571649, 9.88952565078920, -10.3255051147040,  4.66861294457414, -0.503243546373828],
];

const A_BANDS: [f64; 4] = [0.310559006, 0.776397516, 1.242236025, 1.863354037];

const LAMBDA: f64 = 177.8514;
const Q_D: f64 = 1.0 / 0.40; // 1/nm
const NU: f64 = 0.630;
const GAMMA: f64 = 1.239;
const XI_0: f64 = 0.13; // nm
const GAMMA_0: f64 = 0.06;
const T_R: f64 = 1.5;

fn zeta_tr(rho_bar: f64) -> f64 {
    let band = A_BANDS.iter().position(|&edge| rho_bar <= edge).unwrap_or(A.len() - 1);
    let mut den = 0.0;
    let mut rk = 1.0;
    for &a in &A[band] {
        den += a * rk;
        rk *= rho_bar;
    }
    1.0 / den
}

/// λ(T, ρ) with the state derivatives supplied by the caller, W/(m·K).
///
/// `cp`/`cv` in kJ/(kg·K), `drho_dp` = (∂ρ/∂p)|T in kg/(m³·MPa), `mu` in
/// Pa·s.
pub(crate) fn lambda(t: f64, rho: f64, cp: f64, cv: f64, drho_dp: f64, mu: f64) -> f64 {
    let t_bar = t / T_CRIT;
    let rho_bar = rho / RHO_CRIT;

    // λ0: dilute-gas term.
    let mut den = 0.0;
    let mut tk = 1.0;
    for &l in &L0 {
        den += l / tk;
        tk *= t_bar;
    }
    let lambda0 = t_bar.sqrt() / den;

    // λ1: finite-density term.
    let x = 1.0 / t_bar - 1.0;
    let y = rho_bar - 1.0;
    let mut sum = 0.0;
    for (i, row) in L1.iter().enumerate() {
        let xi = x.powi(i as i32);
        let mut inner = 0.0;
        for (j, &l) in row.iter().enumerate() {
            inner += l * y.powi(j as i32);
        }
        sum += xi * inner;
    }
    let lambda1 = (rho_bar * sum).exp();

    // λ2: industrial critical enhancement.
    let mut cp_bar = cp / R_COND;
    if !(0.0..=1.0e13).contains(&cp_bar) {
        cp_bar = 1.0e13;
    }
    let kappa = (cp / cv).max(1.0);
    let zeta = drho_dp * P_CRIT / RHO_CRIT;
    let delta_chi = (rho_bar * (zeta - zeta_tr(rho_bar) * T_R / t_bar)).max(0.0);
    let xi = XI_0 * (delta_chi / GAMMA_0).powf(NU / GAMMA);
    let y_q = Q_D * xi;
    let z = if y_q < 1.2e-7 {
        0.0
    } else {
        2.0 / (std::f64::consts::PI * y_q)
            * (((1.0 - 1.0 / kappa) * y_q.atan() + y_q / kappa)
                - (1.0 - (-1.0 / (1.0 / y_q + y_q * y_q / (3.0 * rho_bar * rho_bar))).exp()))
    };
    let mu_bar = mu / 1.0e-6;
    let lambda2 = LAMBDA * rho_bar * cp_bar * t_bar / mu_bar * z;

    (lambda0 * lambda1 + lambda2) * 1.0e-3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeta_correlation_is_continuous_enough_across_bands() {
        for &edge in &A_BANDS {
            let below = zeta_tr(edge - 1e-9);
            let above = zeta_tr(edge + 1e-9);
            assert!((below - above).abs() / below < 1e-2);
        }
    }

    #[test]
    fn enhancement_vanishes_far_from_critical() {
        // Liquid water at ambient conditions: λ2 must be negligible.
        let with = lambda(298.15, 997.0, 4.181, 4.13, 0.45, 890e-6);
        let without = {
            let t_bar: f64 = 298.15 / T_CRIT;
            let rho_bar = 997.0 / RHO_CRIT;
            let mut den = 0.0;
            let mut tk = 1.0;
            for &l in &L0 {
                den += l / tk;
                tk *= t_bar;
            }
            let lambda0 = t_bar.sqrt() / den;
            let x = 1.0 / t_bar - 1.0;
            let y = rho_bar - 1.0;
            let mut sum = 0.0;
            for (i, row) in L1.iter().enumerate() {
                let xi = x.powi(i as i32);
                let mut inner = 0.0;
                for (j, &l) in row.iter().enumerate() {
                    inner += l * y.powi(j as i32);
                }
                sum += xi * inner;
            }
            lambda0 * (rho_bar * sum).exp() * 1e-3
        };
        assert!((with - without).abs() / without < 1e-3);
    }
}
