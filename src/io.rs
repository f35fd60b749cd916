//! Input identifiers for the generic dispatcher.

use strum_macros::{AsRefStr, EnumString};

/// Pairs of independent state variables accepted by
/// [`water::properties`](crate::water::properties).
///
/// Only the pairs with a published IF97 formulation are supported; the
/// remaining combinations are listed so callers get a typed
/// [`UnsupportedPair`](crate::error::Error::UnsupportedPair) instead of a
/// silent misuse.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use steam97::io::InputPair;
///
/// assert_eq!(InputPair::TP.as_ref(), "tp");
/// assert_eq!(InputPair::from_str("ph"), Ok(InputPair::PH));
/// ```
#[derive(AsRefStr, EnumString, Debug, Copy, Clone, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputPair {
    /// Temperature and pressure.
    #[strum(to_string = "tp")]
    TP,
    /// Pressure and specific enthalpy.
    #[strum(to_string = "ph")]
    PH,
    /// Pressure and specific entropy.
    #[strum(to_string = "ps")]
    PS,
    /// Specific enthalpy and specific entropy.
    #[strum(to_string = "hs")]
    HS,
    /// Temperature and specific volume (no direct formulation).
    #[strum(to_string = "tv")]
    TV,
    /// Temperature and specific enthalpy (no direct formulation).
    #[strum(to_string = "th")]
    TH,
    /// Temperature and specific entropy (no direct formulation).
    #[strum(to_string = "ts")]
    TS,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn input_pair_round_trips_through_str() {
        for pair in [
            InputPair::TP,
            InputPair::PH,
            InputPair::PS,
            InputPair::HS,
            InputPair::TV,
            InputPair::TH,
            InputPair::TS,
        ] {
            assert_eq!(InputPair::from_str(pair.as_ref()), Ok(pair));
        }
    }
}
