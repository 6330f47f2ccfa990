// SPDX-License-Identifier: MIT

//! Foundation scales: the non-color tokens shipped next to the color system.
//!
//! Five fixed categories (spacing, typography, radius, shadow, motion). A
//! project picks which ones to include and the CSS, SCSS, JSON and DTCG
//! exporters append them after the color tokens. Values are plain CSS
//! strings; nothing here is computed.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoundationCategory {
    Spacing,
    Typography,
    Radius,
    Shadow,
    Motion,
}

/// One foundation value with its DTCG `$type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationToken {
    pub name: &'static str,
    pub value: &'static str,
    pub dtcg_type: &'static str,
    pub description: Option<&'static str>,
}

const fn token(name: &'static str, value: &'static str, dtcg_type: &'static str) -> FoundationToken {
    FoundationToken { name, value, dtcg_type, description: None }
}

const fn with_description(
    name: &'static str,
    value: &'static str,
    dtcg_type: &'static str,
    description: &'static str,
) -> FoundationToken {
    FoundationToken { name, value, dtcg_type, description: Some(description) }
}

const SPACING: &[FoundationToken] = &[
    token("spacing-0", "0px", "dimension"),
    token("spacing-px", "1px", "dimension"),
    token("spacing-0.5", "2px", "dimension"),
    token("spacing-1", "4px", "dimension"),
    token("spacing-1.5", "6px", "dimension"),
    token("spacing-2", "8px", "dimension"),
    token("spacing-2.5", "10px", "dimension"),
    token("spacing-3", "12px", "dimension"),
    token("spacing-4", "16px", "dimension"),
    token("spacing-5", "20px", "dimension"),
    token("spacing-6", "24px", "dimension"),
    token("spacing-8", "32px", "dimension"),
    token("spacing-10", "40px", "dimension"),
    token("spacing-12", "48px", "dimension"),
    token("spacing-16", "64px", "dimension"),
    token("spacing-20", "80px", "dimension"),
    token("spacing-24", "96px", "dimension"),
];

const TYPOGRAPHY: &[FoundationToken] = &[
    with_description("font-size-xs", "0.75rem", "dimension", "12px - Extra small text"),
    with_description("font-size-sm", "0.875rem", "dimension", "14px - Small text"),
    with_description("font-size-base", "1rem", "dimension", "16px - Base/body text"),
    with_description("font-size-lg", "1.125rem", "dimension", "18px - Large text"),
    with_description("font-size-xl", "1.25rem", "dimension", "20px - Extra large text"),
    with_description("font-size-2xl", "1.5rem", "dimension", "24px - 2X large heading"),
    with_description("font-size-3xl", "1.875rem", "dimension", "30px - 3X large heading"),
    with_description("font-size-4xl", "2.25rem", "dimension", "36px - 4X large heading"),
    with_description("font-size-5xl", "3rem", "dimension", "48px - 5X large heading"),
    token("font-weight-light", "300", "fontWeight"),
    token("font-weight-regular", "400", "fontWeight"),
    token("font-weight-medium", "500", "fontWeight"),
    token("font-weight-semibold", "600", "fontWeight"),
    token("font-weight-bold", "700", "fontWeight"),
    token("line-height-tight", "1.25", "number"),
    token("line-height-snug", "1.375", "number"),
    token("line-height-normal", "1.5", "number"),
    token("line-height-relaxed", "1.625", "number"),
    token("line-height-loose", "2", "number"),
    token("letter-spacing-tighter", "-0.05em", "dimension"),
    token("letter-spacing-tight", "-0.025em", "dimension"),
    token("letter-spacing-normal", "0em", "dimension"),
    token("letter-spacing-wide", "0.025em", "dimension"),
    token("letter-spacing-wider", "0.05em", "dimension"),
];

const RADIUS: &[FoundationToken] = &[
    token("radius-none", "0px", "dimension"),
    token("radius-sm", "2px", "dimension"),
    token("radius-md", "4px", "dimension"),
    token("radius-lg", "8px", "dimension"),
    token("radius-xl", "12px", "dimension"),
    token("radius-2xl", "16px", "dimension"),
    token("radius-3xl", "24px", "dimension"),
    token("radius-full", "9999px", "dimension"),
];

const SHADOW: &[FoundationToken] = &[
    token("shadow-none", "none", "shadow"),
    token("shadow-xs", "0 1px 2px 0 rgba(0,0,0,0.05)", "shadow"),
    token("shadow-sm", "0 1px 3px 0 rgba(0,0,0,0.1), 0 1px 2px -1px rgba(0,0,0,0.1)", "shadow"),
    token("shadow-md", "0 4px 6px -1px rgba(0,0,0,0.1), 0 2px 4px -2px rgba(0,0,0,0.1)", "shadow"),
    token("shadow-lg", "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -4px rgba(0,0,0,0.1)", "shadow"),
    token("shadow-xl", "0 20px 25px -5px rgba(0,0,0,0.1), 0 8px 10px -6px rgba(0,0,0,0.1)", "shadow"),
    token("shadow-2xl", "0 25px 50px -12px rgba(0,0,0,0.25)", "shadow"),
    token("shadow-inner", "inset 0 2px 4px 0 rgba(0,0,0,0.05)", "shadow"),
];

const MOTION: &[FoundationToken] = &[
    token("duration-instant", "0ms", "duration"),
    token("duration-fast", "100ms", "duration"),
    token("duration-normal", "200ms", "duration"),
    token("duration-slow", "300ms", "duration"),
    token("duration-slower", "500ms", "duration"),
    token("duration-slowest", "1000ms", "duration"),
    token("easing-linear", "cubic-bezier(0, 0, 1, 1)", "cubicBezier"),
    token("easing-ease-in", "cubic-bezier(0.4, 0, 1, 1)", "cubicBezier"),
    token("easing-ease-out", "cubic-bezier(0, 0, 0.2, 1)", "cubicBezier"),
    token("easing-ease-in-out", "cubic-bezier(0.4, 0, 0.2, 1)", "cubicBezier"),
    token("easing-spring", "cubic-bezier(0.175, 0.885, 0.32, 1.275)", "cubicBezier"),
];

impl FoundationCategory {
    pub const ALL: [Self; 5] = [Self::Spacing, Self::Typography, Self::Radius, Self::Shadow, Self::Motion];

    /// Key used in project files and as the top-level export key.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
            Self::Motion => "motion",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spacing => "Spacing",
            Self::Typography => "Typography",
            Self::Radius => "Border Radius",
            Self::Shadow => "Shadow & Elevation",
            Self::Motion => "Motion",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Spacing => "Consistent spacing scale for margins, padding, and gaps",
            Self::Typography => "Type scale, weights, and line heights",
            Self::Radius => "Corner rounding scale from sharp to circular",
            Self::Shadow => "Layered shadow scale for depth and elevation",
            Self::Motion => "Duration and easing tokens for animations and transitions",
        }
    }

    #[must_use]
    pub const fn tokens(self) -> &'static [FoundationToken] {
        match self {
            Self::Spacing => SPACING,
            Self::Typography => TYPOGRAPHY,
            Self::Radius => RADIUS,
            Self::Shadow => SHADOW,
            Self::Motion => MOTION,
        }
    }
}

impl fmt::Display for FoundationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Spacing and radius: useful in nearly every system.
#[must_use]
pub fn default_foundations() -> Vec<FoundationCategory> {
    vec![FoundationCategory::Spacing, FoundationCategory::Radius]
}

/// Total token count across `categories`.
#[must_use]
pub fn foundation_token_count(categories: &[FoundationCategory]) -> usize {
    categories.iter().map(|c| c.tokens().len()).sum()
}
