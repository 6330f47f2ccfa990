// SPDX-License-Identifier: MIT

//! Tonal scale generation: one seed color in, eleven stops out.
//!
//! The seed is converted to OKLCH once. Hue is held constant; every stop
//! except 500 gets a fixed lightness target and a fraction of the seed's
//! chroma, so ramps built from different seeds line up visually.
//!
//! ```text
//!  stop   L     chroma ×
//!   50   0.97   0.30
//!  100   0.93   0.50
//!  200   0.87   0.70
//!  300   0.78   0.88
//!  400   0.68   0.96
//!  500   seed   1.00   ← the input, untouched
//!  600   0.48   0.96
//!  700   0.39   0.88
//!  800   0.30   0.80
//!  900   0.22   0.65
//!  950   0.15   0.40
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{Oklch, hex_to_oklch};
use crate::error::ColorError;

/// The stop that carries the seed color.
pub const BASE_STOP: u16 = 500;

/// (stop, lightness, chroma multiplier), ascending by stop.
const STOP_TABLE: [(u16, f64, f64); 11] = [
    (50, 0.97, 0.30),
    (100, 0.93, 0.50),
    (200, 0.87, 0.70),
    (300, 0.78, 0.88),
    (400, 0.68, 0.96),
    (BASE_STOP, 0.57, 1.00),
    (600, 0.48, 0.96),
    (700, 0.39, 0.88),
    (800, 0.30, 0.80),
    (900, 0.22, 0.65),
    (950, 0.15, 0.40),
];

/// One step of a tonal scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TonalStop {
    pub stop: u16,
    pub hex: String,
}

/// A named 11-stop ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TonalScale {
    pub name: String,
    pub stops: Vec<TonalStop>,
}

impl TonalScale {
    /// Look up a stop by number.
    #[must_use]
    pub fn stop(&self, stop: u16) -> Option<&TonalStop> {
        self.stops.iter().find(|s| s.stop == stop)
    }

    /// The 500 stop, which is always the seed.
    #[must_use]
    pub fn base(&self) -> Option<&TonalStop> {
        self.stop(BASE_STOP)
    }
}

/// Generate the 11-stop scale for `hex`.
///
/// Stop 500 is `hex` returned byte-for-byte, so a seed never drifts through
/// the conversion round trip.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is malformed.
pub fn generate_tonal_scale(hex: &str, name: &str) -> Result<TonalScale, ColorError> {
    let seed = hex_to_oklch(hex)?;

    let stops = STOP_TABLE
        .iter()
        .map(|&(stop, lightness, chroma_mul)| TonalStop {
            stop,
            hex: if stop == BASE_STOP {
                hex.to_owned()
            } else {
                Oklch::new(lightness, seed.c * chroma_mul, seed.h).to_hex()
            },
        })
        .collect();

    Ok(TonalScale { name: name.to_owned(), stops })
}
