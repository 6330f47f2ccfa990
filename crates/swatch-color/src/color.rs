// SPDX-License-Identifier: MIT
//
// swatch color system: 8-bit sRGB on the wire, OKLCH for scale math.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Every color that enters or leaves the engine is an `Rgb`, written as a
// 6-digit uppercase `#RRGGBB` string. OKLCH values exist only inside the
// tonal scale generator and never cross the crate boundary as tokens.
//
// Conversion pipeline:
//
//   hex ↔ sRGB ↔ Linear sRGB ↔ LMS ↔ LMS′ (cube root) ↔ Oklab ↔ OKLCH
//
// Out-of-range OKLCH inputs are clipped to the sRGB cube on the way back
// to hex. There is no chroma reduction or other gamut mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color, the only color format tokens carry.
///
/// Serializes as `"#RRGGBB"` (uppercase) and deserializes from any hex form
/// [`Rgb::hex`] accepts.
///
/// # Examples
///
/// ```
/// use swatch_color::Rgb;
///
/// let green = Rgb::hex("#198754").unwrap();
/// assert_eq!(green.to_hex(), "#198754");
///
/// let short = Rgb::hex("f80").unwrap();
/// assert_eq!(short, Rgb::new(0xFF, 0x88, 0x00));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color: `#RGB`, `RGB`, `#RRGGBB` or `RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when the digit count is not
    /// 3 or 6, or a digit is not hexadecimal.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidColorFormat(s.to_owned()))
    }

    /// Format as `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as sRGB floats in [0, 1].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from sRGB floats, clipping each channel to [0, 1] first.
    #[must_use]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to OKLCH.
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (r, g, b) = self.to_srgb();
        let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
        let lms = mul3(&LINEAR_SRGB_TO_LMS, linear);
        let lms_prime = [signed_cbrt(lms[0]), signed_cbrt(lms[1]), signed_cbrt(lms[2])];
        let [l, a, b_ok] = mul3(&LMS_PRIME_TO_OKLAB, lms_prime);
        let (c, h) = oklab_ab_to_oklch(a, b_ok);
        Oklch { l, c, h }
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A color in OKLCH, the cylindrical form of Björn Ottosson's Oklab.
///
/// - `l`: lightness, 0.0 (black) to 1.0 (white)
/// - `c`: chroma, 0.0 (gray) to roughly 0.37 inside sRGB
/// - `h`: hue angle in degrees, [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert back to 8-bit sRGB, clipping out-of-gamut channels.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h_rad = self.h.to_radians();
        let lab = [self.l, self.c * h_rad.cos(), self.c * h_rad.sin()];
        let lms_prime = mul3(&OKLAB_TO_LMS_PRIME, lab);

        // Undo the cube root.
        let lms = [lms_prime[0].powi(3), lms_prime[1].powi(3), lms_prime[2].powi(3)];

        let [r, g, b] = mul3(&LMS_TO_LINEAR_SRGB, lms);
        Rgb::from_srgb(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    /// Convert to a `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

// ─── Public conversion API ───────────────────────────────────────────────────

/// Convert a hex color to OKLCH.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed hex.
pub fn hex_to_oklch(hex: &str) -> Result<Oklch, ColorError> {
    Ok(Rgb::hex(hex)?.to_oklch())
}

/// Convert OKLCH components to an uppercase `#RRGGBB` string.
///
/// Inputs outside the sRGB gamut are clipped, never rejected.
#[must_use]
pub fn oklch_to_hex(l: f64, c: f64, h: f64) -> String {
    Oklch::new(l, c, h).to_hex()
}

/// The strict pre-validation pattern: `#` followed by exactly six hex digits.
///
/// Callers check user input with this before handing it to the converter,
/// which fails on malformed values instead of recovering.
#[must_use]
pub fn is_strict_hex(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

// ─── Oklab matrices ──────────────────────────────────────────────────────────
//
// From Björn Ottosson's Oklab post: https://bottosson.github.io/posts/oklab/
// Linear sRGB goes straight to LMS, no XYZ intermediate.

const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9],
    [0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6],
    [0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5],
];

const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
];

const LMS_PRIME_TO_OKLAB: [[f64; 3]; 3] = [
    [0.210_454_255_3, 0.793_617_785_0, -0.004_072_046_8],
    [1.977_998_495_1, -2.428_592_205_0, 0.450_593_709_9],
    [0.025_904_037_1, 0.782_771_766_2, -0.808_675_766_0],
];

const OKLAB_TO_LMS_PRIME: [[f64; 3]; 3] = [
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
];

#[inline]
fn mul3(m: &[[f64; 3]; 3], [a, b, c]: [f64; 3]) -> [f64; 3] {
    [
        m[0][2].mul_add(c, m[0][0].mul_add(a, m[0][1] * b)),
        m[1][2].mul_add(c, m[1][0].mul_add(a, m[1][1] * b)),
        m[2][2].mul_add(c, m[2][0].mul_add(a, m[2][1] * b)),
    ]
}

/// Cube root that keeps the sign: `-|x|^(1/3)` for negative `x`.
#[inline]
#[must_use]
pub fn signed_cbrt(x: f64) -> f64 {
    if x >= 0.0 {
        x.powf(1.0 / 3.0)
    } else {
        -(-x).powf(1.0 / 3.0)
    }
}

/// Oklab a, b → OKLCH chroma and hue (hue normalized into [0, 360)).
#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = b.atan2(a).to_degrees();
    (c, if h < 0.0 { h + 360.0 } else { h })
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// sRGB linear-segment threshold on the encoded side.
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.040_45;
/// Slope of the linear segment.
pub const SRGB_LINEAR_SCALE: f64 = 12.92;
/// Exponent of the power segment.
pub const SRGB_GAMMA: f64 = 2.4;

/// Remove sRGB gamma from one channel in [0, 1].
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_THRESHOLD {
        c / SRGB_LINEAR_SCALE
    } else {
        ((c + 0.055) / 1.055).powf(SRGB_GAMMA)
    }
}

/// Apply sRGB gamma to one linear channel.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        SRGB_LINEAR_SCALE * c
    } else {
        1.055f64.mul_add(c.powf(1.0 / SRGB_GAMMA), -0.055)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Clip to [0, 1] and quantize to 0–255, rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // NaN clamps to NaN and casts to 0.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb::hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hex_parsing_short_form_expands() {
        assert_eq!(Rgb::hex("#f80").unwrap(), Rgb::new(0xFF, 0x88, 0x00));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Rgb::hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn hex_parsing_wrong_length_fails() {
        for bad in ["", "#12345", "#1234567", "#ff000080", "xy"] {
            assert_eq!(
                Rgb::hex(bad),
                Err(ColorError::InvalidColorFormat(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_parsing_bad_digit_fails() {
        assert!(Rgb::hex("#GG0000").is_err());
        assert!(hex_to_oklch("#12z").is_err());
    }

    #[test]
    fn hex_output_is_uppercase() {
        assert_eq!(Rgb::hex("#c86432").unwrap().to_hex(), "#C86432");
        assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn strict_hex_pattern() {
        assert!(is_strict_hex("#198754"));
        assert!(is_strict_hex("#FFf3cD"));
        assert!(!is_strict_hex("198754"));
        assert!(!is_strict_hex("#fff"));
        assert!(!is_strict_hex("#19875G"));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(0x19, 0x87, 0x54)).unwrap();
        assert_eq!(json, "\"#198754\"");
        let back: Rgb = serde_json::from_str("\"#fff\"").unwrap();
        assert_eq!(back, Rgb::WHITE);
        assert!(serde_json::from_str::<Rgb>("\"#12\"").is_err());
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn white_is_full_lightness_no_chroma() {
        let white = hex_to_oklch("#FFFFFF").unwrap();
        assert!(approx_eq(white.l, 1.0, 1e-4), "L = {}", white.l);
        assert!(white.c < 1e-4, "C = {}", white.c);
    }

    #[test]
    fn black_is_zero_lightness() {
        let black = hex_to_oklch("#000000").unwrap();
        assert!(approx_eq(black.l, 0.0, 1e-9));
        assert!(approx_eq(black.c, 0.0, 1e-9));
    }

    #[test]
    fn pure_red_reference_values() {
        // Reference: oklch(0.628 0.2577 29.23)
        let red = hex_to_oklch("#FF0000").unwrap();
        assert!(approx_eq(red.l, 0.628, 0.001), "L = {}", red.l);
        assert!(approx_eq(red.c, 0.2577, 0.001), "C = {}", red.c);
        assert!(approx_eq(red.h, 29.23, 0.1), "H = {}", red.h);
    }

    #[test]
    fn hue_is_normalized_positive() {
        // Blue sits at a negative atan2 angle before normalization.
        let blue = hex_to_oklch("#0000FF").unwrap();
        assert!((0.0..360.0).contains(&blue.h), "H = {}", blue.h);
        assert!(approx_eq(blue.h, 264.05, 0.2), "H = {}", blue.h);
    }

    #[test]
    fn signed_cbrt_handles_negatives() {
        assert!(approx_eq(signed_cbrt(-8.0), -2.0, 1e-12));
        assert!(approx_eq(signed_cbrt(27.0), 3.0, 1e-12));
        assert!(!signed_cbrt(-0.001).is_nan());
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn hex_oklch_roundtrip_within_one_step() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(51) {
                for b in (0..=255u8).step_by(17) {
                    let original = Rgb::new(r, g, b);
                    let oklch = hex_to_oklch(&original.to_hex()).unwrap();
                    let back = Rgb::hex(&oklch_to_hex(oklch.l, oklch.c, oklch.h)).unwrap();
                    assert_rgb_close(back, original);
                }
            }
        }
    }

    #[test]
    fn roundtrip_brand_colors_exact() {
        for hex in ["#198754", "#0D6EFD", "#DC3545", "#FFC107", "#6F42C1"] {
            let oklch = hex_to_oklch(hex).unwrap();
            assert_eq!(oklch.to_hex(), hex);
        }
    }

    #[test]
    fn out_of_gamut_is_clipped_not_rejected() {
        let hex = oklch_to_hex(0.7, 0.5, 145.0);
        assert!(is_strict_hex(&hex), "{hex}");
        assert_eq!(oklch_to_hex(2.0, 0.0, 0.0), "#FFFFFF");
        assert_eq!(oklch_to_hex(-1.0, 0.0, 0.0), "#000000");
    }

    // ── Gamma ────────────────────────────────────────────────────────────

    #[test]
    fn gamma_roundtrip() {
        for i in 0..=20 {
            let v = f64::from(i) / 20.0;
            assert!(approx_eq(linear_to_srgb(srgb_to_linear(v)), v, 1e-9), "v = {v}");
        }
    }

    #[test]
    fn gamma_linear_segment() {
        assert!(approx_eq(srgb_to_linear(0.04), 0.04 / 12.92, 1e-12));
        assert!(approx_eq(srgb_to_linear(1.0), 1.0, 1e-12));
    }
}
