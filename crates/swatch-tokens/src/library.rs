// SPDX-License-Identifier: MIT

//! Built-in sample collections.
//!
//! Six stock palettes with hand-picked 100–900 ramps, selectable by name
//! instead of declaring shades inline. They live under the `sample` library
//! id, so a project that selects `Indigo` maps variants to `sample:Indigo`.

#![allow(clippy::unreadable_literal)]

use swatch_color::Rgb;

use crate::model::{PrimitivePalette, Shade};

/// Library id of the built-in collections.
pub const SAMPLE_LIBRARY: &str = "sample";

/// Shade stops every sample collection carries, lightest first.
pub const SAMPLE_STOPS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A stock collection: display name, shade name prefix, base, ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCollection {
    pub name: &'static str,
    pub shade_prefix: &'static str,
    pub base: Rgb,
    pub ramp: [Rgb; 9],
}

#[allow(clippy::cast_possible_truncation)]
const fn hex(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

pub const SAMPLE_COLLECTIONS: [SampleCollection; 6] = [
    SampleCollection {
        name: "Cerulean",
        shade_prefix: "cerulean",
        base: hex(0x4183CA),
        ramp: [
            hex(0xECF3FA),
            hex(0xC6DAEF),
            hex(0xA0C1E4),
            hex(0x85A7DA),
            hex(0x588DCF),
            hex(0x3B72AF),
            hex(0x356194),
            hex(0x2E4E75),
            hex(0x0D1A28),
        ],
    },
    SampleCollection {
        name: "Indigo",
        shade_prefix: "indigo",
        base: hex(0x6610F2),
        ramp: [
            hex(0xE0CFFC),
            hex(0xC29FFA),
            hex(0xA370F7),
            hex(0x8540F5),
            hex(0x6610F2),
            hex(0x520DC2),
            hex(0x3D0A91),
            hex(0x290661),
            hex(0x140330),
        ],
    },
    SampleCollection {
        name: "Purple",
        shade_prefix: "purple",
        base: hex(0x6F42C1),
        ramp: [
            hex(0xE2D9F3),
            hex(0xC5B3E6),
            hex(0xA98EDA),
            hex(0x8C68CD),
            hex(0x6F42C1),
            hex(0x59359A),
            hex(0x432874),
            hex(0x2C1A4D),
            hex(0x160D27),
        ],
    },
    SampleCollection {
        name: "Success",
        shade_prefix: "green",
        base: hex(0x198754),
        ramp: [
            hex(0xD1E7DD),
            hex(0xA3CFBB),
            hex(0x75B798),
            hex(0x479F76),
            hex(0x198754),
            hex(0x146C43),
            hex(0x0F5132),
            hex(0x0A3622),
            hex(0x051B11),
        ],
    },
    SampleCollection {
        name: "Danger",
        shade_prefix: "red",
        base: hex(0xDC3545),
        ramp: [
            hex(0xF8D7DA),
            hex(0xF1AEB5),
            hex(0xEA868F),
            hex(0xE35D6A),
            hex(0xDC3545),
            hex(0xB02A37),
            hex(0x842029),
            hex(0x58151C),
            hex(0x2C0B0E),
        ],
    },
    SampleCollection {
        name: "Warning",
        shade_prefix: "yellow",
        base: hex(0xFFC107),
        ramp: [
            hex(0xFFF3CD),
            hex(0xFFE69C),
            hex(0xFFDA6A),
            hex(0xFFCD39),
            hex(0xFFC107),
            hex(0xCC9A06),
            hex(0x997404),
            hex(0x664D03),
            hex(0x332701),
        ],
    },
];

impl SampleCollection {
    /// The collection as a palette under [`SAMPLE_LIBRARY`], shades named
    /// `<prefix>-<stop>`.
    #[must_use]
    pub fn palette(&self) -> PrimitivePalette {
        let shades = SAMPLE_STOPS
            .iter()
            .zip(self.ramp)
            .map(|(stop, value)| Shade { name: format!("{}-{stop}", self.shade_prefix), value })
            .collect();
        PrimitivePalette {
            library_id: SAMPLE_LIBRARY.to_owned(),
            collection_name: self.name.to_owned(),
            base_value: self.base,
            shades,
        }
    }
}

/// Look a collection up by name, ignoring ASCII case.
#[must_use]
pub fn sample_collection(name: &str) -> Option<&'static SampleCollection> {
    SAMPLE_COLLECTIONS.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

/// The named collection as a palette.
#[must_use]
pub fn sample_palette(name: &str) -> Option<PrimitivePalette> {
    sample_collection(name).map(SampleCollection::palette)
}

/// Every collection as a palette, in library order.
#[must_use]
pub fn sample_palettes() -> Vec<PrimitivePalette> {
    SAMPLE_COLLECTIONS.iter().map(SampleCollection::palette).collect()
}
