//! Shear viscosity of water, IAPWS R12-08, industrial formulation.
//!
//! μ = μ₀(T̄)·μ₁(T̄,ρ̄)·μ₂ with the critical enhancement μ₂ fixed to 1 per
//! the IAPWS guidance for industrial use.

use crate::error::{Error, Result};
use crate::units::{RHO_CRIT, T_CRIT};

const H0: [f64; 4] = [1.67752, 2.20462, 0.6366564, -0.241605];

// The 21 non-zero H(i,j) of the residual contribution, stored as
// (i, j, value) with i indexing (1/T̄ − 1) and j indexing (ρ̄ − 1).
#[rustfmt::skip]
const H1: [(i32, i32, f64); 21] = [
    (0, 0,  5.20094e-1),
    (1, 0,  8.50895e-2),
    (2, 0, -1.08374),
    (3, 0, -2.89555e-1),
    (0, 1,  2.22531e-1),
    (1, 1,  9.99115e-1),
    (2, 1,  1.88797),
    (3, 1,  1.26613),
    (5, 1,  1.20573e-1),
    (0, 2, -2.81378e-1),
    (1, 2, -9.06851e-1),
    (2, 2, -7.72479e-1),
    (3, 2, -4.89837e-1),
    (4, 2, -2.57040e-1),
    (0, 3,  1.61913e-1),
    (1, 3,  2.57399e-1),
    (0, 4, -3.25372e-2),
    (3, 4,  6.98452e-2),
    (4, 5,  8.72102e-3),
    (3, 6, -4.35673e-3),
    (5, 6, -5.93264e-4),
];

/// Viscosity μ(T,ρ) in Pa·s for `t` in K and `rho` in kg/m³.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for non-finite or non-positive inputs, or a
/// temperature outside the formulation's 253.15 K … 1173.15 K span.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use steam97::transport::viscosity;
///
/// // IAPWS R12-08, table 4.
/// let mu = viscosity(298.15, 998.0)?;
/// assert_relative_eq!(mu * 1e6, 889.735100, max_relative = 1e-8);
/// # Ok::<(), steam97::error::Error>(())
/// ```
pub fn viscosity(t: f64, rho: f64) -> Result<f64> {
    if !t.is_finite() || !(253.15..=1173.15).contains(&t) {
        return Err(Error::OutOfRange { quantity: "T", value: t, min: 253.15, max: 1173.15 });
    }
    if !rho.is_finite() || rho <= 0.0 {
        return Err(Error::OutOfRange { quantity: "rho", value: rho, min: 0.0, max: 1250.0 });
    }
    Ok(viscosity_unchecked(t, rho))
}

/// The bare formulation, used internally where (T,ρ) already came from the
/// thermodynamic core.
pub(crate) fn viscosity_unchecked(t: f64, rho: f64) -> f64 {
    let t_bar = t / T_CRIT;
    let rho_bar = rho / RHO_CRIT;

    let mut den = 0.0;
    let mut tk = 1.0;
    for &h in &H0 {
        den += h / tk;
        tk *= t_bar;
    }
    let mu0 = 100.0 * t_bar.sqrt() / den;

    let x = 1.0 / t_bar - 1.0;
    let y = rho_bar - 1.0;
    let mut sum = 0.0;
    for &(i, j, h) in &H1 {
        sum += h * x.powi(i) * y.powi(j);
    }
    let mu1 = (rho_bar * sum).exp();

    // mu2 = 1 (industrial).
    mu0 * mu1 * 1.0e-6
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    // IAPWS R12-08, table 4 (away from the critical point).
    #[rstest]
    #[case(298.15, 998.0, 889.735100)]
    #[case(298.15, 1200.0, 1437.649467)]
    #[case(373.15, 1000.0, 307.883622)]
    #[case(433.15, 1.0, 14.538324)]
    #[case(433.15, 1000.0, 217.685358)]
    #[case(873.15, 1.0, 32.619287)]
    #[case(873.15, 100.0, 35.802262)]
    #[case(873.15, 600.0, 77.430195)]
    #[case(1173.15, 1.0, 44.217245)]
    #[case(1173.15, 100.0, 47.640433)]
    #[case(1173.15, 400.0, 64.154608)]
    fn matches_reference_table(#[case] t: f64, #[case] rho: f64, #[case] mu_upas: f64) {
        assert_if97_eq!(viscosity(t, rho).unwrap() * 1e6, mu_upas);
    }

    // Near-critical states with mu2 = 1; deviations from the scientific
    // formulation stay below ~9e-2 there.
    #[rstest]
    #[case(647.35, 122.0, 25.520677)]
    #[case(647.35, 322.0, 42.961579)]
    #[case(647.35, 422.0, 49.436256)]
    fn near_critical_stays_within_industrial_band(
        #[case] t: f64,
        #[case] rho: f64,
        #[case] mu_upas: f64,
    ) {
        let mu = viscosity(t, rho).unwrap() * 1e6;
        assert!((mu - mu_upas).abs() / mu_upas < 0.1);
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert!(viscosity(100.0, 1000.0).is_err());
        assert!(viscosity(300.0, -1.0).is_err());
        assert!(viscosity(f64::NAN, 1000.0).is_err());
    }
}
