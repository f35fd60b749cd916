macro_rules! assert_if97_eq {
    ($lhs:expr, $rhs:expr) => {
        approx::assert_relative_eq!($lhs, $rhs, max_relative = 1e-8);
    };
    ($lhs:expr, $rhs:expr, $tol:expr) => {
        approx::assert_relative_eq!($lhs, $rhs, max_relative = $tol);
    };
}

pub(crate) use assert_if97_eq;

/// Generates a forward/backward temperature round-trip test at a fixed
/// state point. The absolute tolerance reflects the published consistency
/// of the backward equations (tens of millikelvin).
macro_rules! roundtrip_t {
    ($name:ident, $t:expr, $p:expr, $tol_k:expr) => {
        paste::paste! {
            #[test]
            fn [<roundtrip_t_ $name>]() {
                let h = crate::water::h_tp($t, $p).unwrap();
                let s = crate::water::s_tp($t, $p).unwrap();
                assert!((crate::water::t_ph($p, h).unwrap() - $t).abs() < $tol_k);
                assert!((crate::water::t_ps($p, s).unwrap() - $t).abs() < $tol_k);
            }
        }
    };
}

pub(crate) use roundtrip_t;
