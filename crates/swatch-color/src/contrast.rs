// SPDX-License-Identifier: MIT

//! WCAG 2.0 contrast scoring for text-on-background pairs.
//!
//! - Relative luminance linearizes each channel with the WCAG 2.0 threshold
//!   (0.03928), not the 0.04045 used by the OKLCH pipeline
//! - Contrast ratio is `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21]
//! - Accessibility levels are four independent threshold checks

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// WCAG 2.0 linear-segment threshold on the encoded side.
const WCAG_LINEAR_THRESHOLD: f64 = 0.039_28;

/// Minimum ratio for normal-size text at AA. Generation warns below this.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal-size text at AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for large text at AAA.
pub const AAA_LARGE: f64 = 4.5;

#[inline]
fn wcag_linearize(c: f64) -> f64 {
    if c <= WCAG_LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.0.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = wcag_linearize(r);
    let g_lin = wcag_linearize(g);
    let b_lin = wcag_linearize(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// The result is always >= 1.0 and does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pure white or pure black, whichever reads better on `bg`.
///
/// White only wins when its ratio is strictly greater; ties go to black.
#[must_use]
pub fn best_text_color(bg: Rgb) -> Rgb {
    let white = contrast_ratio(bg, Rgb::WHITE);
    let black = contrast_ratio(bg, Rgb::BLACK);
    if white > black { Rgb::WHITE } else { Rgb::BLACK }
}

/// WCAG pass/fail flags for a contrast ratio.
///
/// The flags are independent comparisons, not tiers, though AAA always
/// implies AA because the thresholds nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct AccessibilityLevel {
    pub normal_aa: bool,
    pub normal_aaa: bool,
    pub large_aa: bool,
    pub large_aaa: bool,
}

impl AccessibilityLevel {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            normal_aa: ratio >= AA_NORMAL,
            normal_aaa: ratio >= AAA_NORMAL,
            large_aa: ratio >= AA_LARGE,
            large_aaa: ratio >= AAA_LARGE,
        }
    }

    /// Whether any of the four checks passes.
    #[must_use]
    pub const fn passes_any(self) -> bool {
        self.normal_aa || self.normal_aaa || self.large_aa || self.large_aaa
    }

    /// Short badge text: the best level normal text reaches, else large text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.normal_aaa {
            "AAA"
        } else if self.normal_aa {
            "AA"
        } else if self.large_aa {
            "AA Large"
        } else {
            "Fail"
        }
    }
}

/// Classify a contrast ratio against the WCAG thresholds.
#[must_use]
pub fn accessibility_level(ratio: f64) -> AccessibilityLevel {
    AccessibilityLevel::from_ratio(ratio)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
