// SPDX-License-Identifier: MIT

//! Per-channel sRGB blends for state and scale modifiers.
//!
//! Unlike the tonal scale generator these work directly on 8-bit sRGB
//! channels: lighten blends toward white, darken scales toward black. They
//! are not perceptually uniform and are not meant to be.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Blend each channel toward white: `c + (255 - c) * pct / 100`.
#[must_use]
pub fn lighten(color: Rgb, pct: f64) -> Rgb {
    let amount = pct / 100.0;
    let channel = |c: u8| {
        let c = f64::from(c);
        round_channel((255.0 - c).mul_add(amount, c))
    };
    Rgb::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Scale each channel toward black: `c * (1 - pct / 100)`.
#[must_use]
pub fn darken(color: Rgb, pct: f64) -> Rgb {
    let amount = 1.0 - pct / 100.0;
    let channel = |c: u8| round_channel(f64::from(c) * amount);
    Rgb::new(channel(color.r), channel(color.g), channel(color.b))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// The color operation a state or scale modifier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTransform {
    /// Identity.
    #[default]
    None,
    Lighten,
    Darken,
    /// Applied exactly like [`ColorTransform::Lighten`]: the output is an
    /// opaque tint, never a translucent color.
    Opacity,
}

impl ColorTransform {
    /// Apply this transform with `amount` in percent.
    #[must_use]
    pub fn apply(self, color: Rgb, amount: f64) -> Rgb {
        match self {
            Self::None => color,
            Self::Lighten | Self::Opacity => lighten(color, amount),
            Self::Darken => darken(color, amount),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lighten => "lighten",
            Self::Darken => "darken",
            Self::Opacity => "opacity",
        }
    }
}
