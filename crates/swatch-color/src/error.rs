// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failures raised by the color converter.
///
/// Everything else in the crate is total over valid colors; only parsing
/// user-supplied hex can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not a 3- or 6-digit hex color.
    #[error("invalid color format: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidColorFormat(String),
}
