// SPDX-License-Identifier: MIT

//! The inputs of a token system: primitive palettes, semantic groups, and
//! the state / scale modifiers layered on top of them.

use serde::{Deserialize, Serialize};
use swatch_color::{ColorError, ColorTransform, Rgb, TonalScale};

/// Color a variant resolves to when its palette reference names no palette.
pub const UNRESOLVED_COLOR: Rgb = Rgb::new(0x88, 0x88, 0x88);

/// Library id given to palettes built from a hand-entered seed.
pub const CUSTOM_LIBRARY: &str = "custom";

/// The name that is left out of generated token names for states and scales.
pub const DEFAULT_MODIFIER: &str = "default";

// ---------------------------------------------------------------------------
// Primitive palettes
// ---------------------------------------------------------------------------

/// One named color in a palette's ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    pub name: String,
    pub value: Rgb,
}

/// A base color plus its ordered shade ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitivePalette {
    pub library_id: String,
    pub collection_name: String,
    pub base_value: Rgb,
    #[serde(default)]
    pub shades: Vec<Shade>,
}

impl PrimitivePalette {
    /// Build a palette from a tonal scale: stop 500 becomes the base and
    /// each stop is named `<scale name>-<stop>`.
    ///
    /// # Errors
    ///
    /// Fails if a stop carries a malformed hex string (only possible for the
    /// seed, which is passed through untouched).
    pub fn from_tonal_scale(scale: &TonalScale, library_id: &str) -> Result<Self, ColorError> {
        let shades = scale
            .stops
            .iter()
            .map(|s| {
                Ok(Shade {
                    name: format!("{}-{}", scale.name, s.stop),
                    value: Rgb::hex(&s.hex)?,
                })
            })
            .collect::<Result<Vec<_>, ColorError>>()?;

        let base_value = match scale.base() {
            Some(stop) => Rgb::hex(&stop.hex)?,
            None => Rgb::BLACK,
        };

        Ok(Self {
            library_id: library_id.to_owned(),
            collection_name: scale.name.clone(),
            base_value,
            shades,
        })
    }

    /// The `library_id:collection_name` string variants use to point here.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{}:{}", self.library_id, self.collection_name)
    }

    /// Whether `reference` points at this palette.
    #[must_use]
    pub fn matches(&self, reference: &str) -> bool {
        reference
            .split_once(':')
            .is_some_and(|(lib, name)| lib == self.library_id && name == self.collection_name)
    }

    /// Index of the shade equal to the base value, if any.
    #[must_use]
    pub fn base_shade_index(&self) -> Option<usize> {
        self.shades.iter().position(|s| s.value == self.base_value)
    }

    /// The shade a variant uses: the indexed shade when `shade_index` is set
    /// and in range, otherwise the base.
    #[must_use]
    pub fn resolve_shade(&self, shade_index: Option<usize>) -> (Rgb, Option<&Shade>) {
        match shade_index.and_then(|i| self.shades.get(i)) {
            Some(shade) => (shade.value, Some(shade)),
            None => {
                let base = self.base_shade_index().and_then(|i| self.shades.get(i));
                (self.base_value, base)
            }
        }
    }

    /// Color for a variant with the given shade override.
    #[must_use]
    pub fn resolve(&self, shade_index: Option<usize>) -> Rgb {
        self.resolve_shade(shade_index).0
    }
}

/// Find the palette a reference points at.
#[must_use]
pub fn find_palette<'a>(palettes: &'a [PrimitivePalette], reference: &str) -> Option<&'a PrimitivePalette> {
    palettes.iter().find(|p| p.matches(reference))
}

// ---------------------------------------------------------------------------
// Semantic groups
// ---------------------------------------------------------------------------

/// Whether a group is a cross-cutting concept or a UI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// A concept such as `feedback` or `action`.
    #[default]
    Group,
    /// A UI part such as `button`.
    Component,
}

/// How a variant picks its foreground text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// Black or white, whichever contrasts more with the background.
    #[default]
    Auto,
    /// Pure white.
    Light,
    /// Near-black.
    Dark,
    /// The background lightened 90%, the same offset for every base color.
    Tint,
}

/// One colored part of a variant: background, text, border, icon, shadow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticElement {
    pub id: String,
    pub name: String,
    #[serde(default = "default_property")]
    pub property: String,
}

fn default_property() -> String {
    "color".to_owned()
}

impl SemanticElement {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), property: default_property() }
    }
}

/// A named role inside a group, mapped to at most one palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticVariant {
    pub id: String,
    pub name: String,
    /// `library_id:collection_name`, or `None` while unmapped.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub palette_ref: Option<String>,
    #[serde(default = "default_elements")]
    pub elements: Vec<SemanticElement>,
    #[serde(default)]
    pub shade_index: Option<usize>,
    #[serde(default)]
    pub text_mode: TextMode,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl SemanticVariant {
    /// An unmapped variant with the default elements.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            palette_ref: None,
            elements: default_elements(),
            shade_index: None,
            text_mode: TextMode::Auto,
        }
    }

    /// Point this variant at a palette.
    #[must_use]
    pub fn mapped_to(mut self, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        self.palette_ref = (!reference.is_empty()).then_some(reference);
        self
    }

    #[must_use]
    pub fn has_element(&self, name: &str) -> bool {
        self.elements.iter().any(|e| e.name == name)
    }
}

/// A named collection of variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticGroup {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: GroupKind,
    pub name: String,
    #[serde(default)]
    pub variants: Vec<SemanticVariant>,
}

impl SemanticGroup {
    #[must_use]
    pub fn new(kind: GroupKind, name: &str, variants: Vec<SemanticVariant>) -> Self {
        Self { id: name.to_owned(), kind, name: name.to_owned(), variants }
    }

    /// Whether at least one variant has a palette.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.variants.iter().any(|v| v.palette_ref.is_some())
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// An interactive state (hover, active, ...) or an intensity scale.
///
/// States and scales share a shape; they differ only in where they sit in
/// the color pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, rename = "color_transform")]
    pub transform: ColorTransform,
    #[serde(default)]
    pub amount: f64,
}

const fn enabled_by_default() -> bool {
    true
}

impl Modifier {
    #[must_use]
    pub fn new(name: &str, transform: ColorTransform, amount: f64) -> Self {
        Self { id: name.to_owned(), name: name.to_owned(), enabled: true, transform, amount }
    }

    #[must_use]
    pub fn apply(&self, color: Rgb) -> Rgb {
        self.transform.apply(color, self.amount)
    }

    /// The name as it appears in tokens: `None` for the `default` modifier.
    #[must_use]
    pub fn token_name(&self) -> Option<&str> {
        (self.name != DEFAULT_MODIFIER).then_some(self.name.as_str())
    }
}

pub type StateConfig = Modifier;
pub type ScaleConfig = Modifier;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// default / hover / active / focus / disabled.
#[must_use]
pub fn default_states() -> Vec<StateConfig> {
    vec![
        Modifier::new("default", ColorTransform::None, 0.0),
        Modifier::new("hover", ColorTransform::Darken, 8.0),
        Modifier::new("active", ColorTransform::Darken, 16.0),
        Modifier::new("focus", ColorTransform::Lighten, 20.0),
        Modifier::new("disabled", ColorTransform::Opacity, 40.0),
    ]
}

/// subtle / default / strong.
#[must_use]
pub fn default_scales() -> Vec<ScaleConfig> {
    vec![
        Modifier::new("subtle", ColorTransform::Lighten, 80.0),
        Modifier::new("default", ColorTransform::None, 0.0),
        Modifier::new("strong", ColorTransform::Darken, 20.0),
    ]
}

/// background / text / border / icon, all styling `color`.
#[must_use]
pub fn default_elements() -> Vec<SemanticElement> {
    vec![
        SemanticElement::new("bg", "background"),
        SemanticElement::new("text", "text"),
        SemanticElement::new("border", "border"),
        SemanticElement::new("icon", "icon"),
    ]
}

/// The stock groups, all variants unmapped.
#[must_use]
pub fn preset_groups() -> Vec<SemanticGroup> {
    let group = |name: &str, variants: &[&str]| {
        let variants = variants
            .iter()
            .map(|v| SemanticVariant::new(&format!("{name}-{v}"), v))
            .collect();
        SemanticGroup::new(GroupKind::Group, name, variants)
    };

    vec![
        group("action", &["primary", "secondary", "danger"]),
        group("feedback", &["success", "warning", "error", "info"]),
        group("surface", &["default", "raised", "overlay"]),
        group("control", &["default", "checked"]),
    ]
}
