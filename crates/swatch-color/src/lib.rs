// SPDX-License-Identifier: MIT
//
// swatch-color: the color math underneath the swatch token engine.
//
// Two deliberately different color paths live here:
//
//   color.rs + tonal.rs  → OKLCH, perceptually uniform, used to build the
//                           11-stop primitive ramps from a single seed
//   transform.rs         → naive per-channel sRGB lerp, used for the
//                           interactive state and scale modifiers
//
// contrast.rs scores any pair of colors against WCAG 2.0.
//
// Everything is pure and synchronous. The only fallible entry point is
// hex parsing.

// Mathematical code uses small integer-to-float casts (stops, channels).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Oklab constants are published with ten significant digits.
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

pub mod color;
pub mod contrast;
pub mod error;
pub mod tonal;
pub mod transform;

pub use color::{Oklch, Rgb, hex_to_oklch, is_strict_hex, oklch_to_hex};
pub use contrast::{
    AA_LARGE, AA_NORMAL, AAA_LARGE, AAA_NORMAL, AccessibilityLevel, accessibility_level, best_text_color, contrast_ratio,
    relative_luminance,
};
pub use error::ColorError;
pub use tonal::{TonalScale, TonalStop, generate_tonal_scale};
pub use transform::{ColorTransform, darken, lighten};
