//! The core is pure functions over const tables; concurrent callers must
//! get bit-identical results to a serial sweep.

use rayon::prelude::*;
use steam97::water;

fn grid() -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for i in 0..40 {
        let t = 280.0 + 40.0 * i as f64;
        for j in 0..20 {
            let p = 0.05 + 5.0 * j as f64;
            if water::properties_tp(t, p).is_ok() {
                points.push((t, p));
            }
        }
    }
    points
}

#[test]
fn parallel_results_are_bit_identical_to_serial() {
    let points = grid();
    let serial: Vec<f64> = points
        .iter()
        .map(|&(t, p)| water::h_tp(t, p).unwrap())
        .collect();
    let parallel: Vec<f64> = points
        .par_iter()
        .map(|&(t, p)| water::h_tp(t, p).unwrap())
        .collect();
    assert_eq!(serial.len(), parallel.len());
    for (a, b) in serial.iter().zip(&parallel) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn saturation_curve_is_reentrant() {
    let temps: Vec<f64> = (0..500).map(|i| 273.16 + 0.74 * i as f64).collect();
    let serial: Vec<f64> = temps.iter().map(|&t| water::psat(t).unwrap()).collect();
    let parallel: Vec<f64> = temps.par_iter().map(|&t| water::psat(t).unwrap()).collect();
    for (a, b) in serial.iter().zip(&parallel) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
