// SPDX-License-Identifier: MIT

//! Token naming: the slot grammar that turns parts into a token name.
//!
//! A [`NamingConfig`] holds an ordered list of [`Slot`]s. The list order is
//! the segment order of every generated name; the [`SlotGroup`] a slot
//! belongs to only matters for display.
//!
//! ```text
//! slot values  { component: "feedback", role: "success", element: "background" }
//!      │
//!      ▼  walk config.slots in order, skip disabled / missing
//! segments     ["feedback", "success", "background"]
//!      │
//!      ▼  abbreviate (element table, drop property=color), case each segment
//! cased        ["feedback", "success", "bg"]
//!      │
//!      ▼  join with separator, then prepend prefix + separator
//! name         "ds-feedback-success-bg"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Slot ids the generator fills in.
pub mod slot_id {
    pub const SYSTEM: &str = "system";
    pub const TIER: &str = "tier";
    pub const COMPONENT: &str = "component";
    pub const FOUNDATION: &str = "foundation";
    pub const PROPERTY: &str = "property";
    pub const ELEMENT: &str = "element";
    pub const ROLE: &str = "role";
    pub const VARIANT: &str = "variant";
    pub const STATE: &str = "state";
    pub const SCALE: &str = "scale";
    pub const MODIFIER: &str = "modifier";
    pub const MODE: &str = "mode";
}

/// Values keyed by slot id. Absent keys contribute nothing to a name.
pub type SlotValues = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Separator / Casing
// ---------------------------------------------------------------------------

/// The character placed between name segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "_")]
    Underscore,
}

impl Separator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::Dash => "-",
            Self::Slash => "/",
            Self::Underscore => "_",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-segment casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    Kebab,
    Camel,
    Snake,
    /// Lowercase with hyphenated words; renders like `Kebab`.
    None,
}

static WORD_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("word-break pattern is valid"));

/// Case a single name segment.
///
/// The segment is lowercased and every run of whitespace, `_` or `-` becomes
/// one word break before the casing joins the words back together.
#[must_use]
pub fn apply_casing(segment: &str, casing: Casing) -> String {
    let lower = segment.to_lowercase();
    let spaced = WORD_BREAKS.replace_all(&lower, " ");

    match casing {
        Casing::Kebab | Casing::None => spaced.replace(' ', "-"),
        Casing::Snake => spaced.replace(' ', "_"),
        Casing::Camel => {
            let mut words = spaced.split(' ');
            let mut out = words.next().unwrap_or_default().to_owned();
            for word in words {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
            }
            out
        }
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// Display grouping for slots. Has no effect on segment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotGroup {
    /// Context: system, theme, domain or level.
    Namespace,
    /// Where: the component, element or group.
    Object,
    /// What: the visual design attribute.
    Category,
    /// Which / how / when: variant, state, scale, mode.
    Modifiers,
}

impl SlotGroup {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Namespace => "Namespace",
            Self::Object => "Object",
            Self::Category => "Category",
            Self::Modifiers => "Modifiers",
        }
    }
}

/// One named position in a token name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub group: SlotGroup,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    #[serde(default)]
    pub presets: Vec<String>,
    /// Only used for previews.
    #[serde(default)]
    pub selected_example: String,
}

fn slot(
    id: &str,
    group: SlotGroup,
    label: &str,
    description: &str,
    enabled: bool,
    presets: &str,
    example: &str,
) -> Slot {
    Slot {
        id: id.to_owned(),
        group,
        label: label.to_owned(),
        description: description.to_owned(),
        enabled,
        presets: presets.split_whitespace().map(str::to_owned).collect(),
        selected_example: example.to_owned(),
    }
}

/// The stock slot list. Its order is the default name order.
#[must_use]
pub fn default_slots() -> Vec<Slot> {
    use SlotGroup::{Category, Modifiers, Namespace, Object};

    vec![
        slot(
            slot_id::SYSTEM,
            Namespace,
            "System",
            "Identifies the global system",
            false,
            "das ds ui app acme mad",
            "das",
        ),
        slot(
            slot_id::TIER,
            Namespace,
            "Tier",
            "Level within the system (core, sys, comp)",
            false,
            "core sys comp ref semantic theme",
            "sys",
        ),
        slot(
            slot_id::COMPONENT,
            Object,
            "Component",
            "Associated component or semantic group",
            true,
            "action control feedback surface \
             accordion alert autocomplete avatar badge breadcrumbs button buttonGroup \
             calendar card carousel checkbox chips colorPicker datePicker divider \
             dropdown emptyState fileUpload footer form header input list loader logo \
             media menu modal navigation overlay pagination progressIndicator \
             progressTracker radio rating richTextEditor scrollbar search select \
             slider snackbar statistics stepper switch table tabs tag textArea \
             textFields timePicker tooltips typography",
            "button",
        ),
        slot(
            slot_id::FOUNDATION,
            Object,
            "Foundation",
            "Foundation styles or attributes",
            false,
            "border color elevation font palette spacing",
            "color",
        ),
        slot(
            slot_id::ROLE,
            Modifiers,
            "Role",
            "Role or semantic function",
            true,
            "primary secondary danger success info warning neutral brand link \
             accent-aqua accent-mint accent-pink aqua blue green light-blue mint \
             orange pink purple red yellow new update",
            "primary",
        ),
        slot(
            slot_id::VARIANT,
            Modifiers,
            "Variant",
            "Alternative use case of the component",
            false,
            "default subtle subtlest bold solid inverse gradient dashed main medium regular \
             50 100 200 300 400 500 600 700 800 900 1000",
            "default",
        ),
        slot(
            slot_id::ELEMENT,
            Category,
            "Element",
            "Specific part of the component where it applies",
            true,
            "bg body chart description desktop heading icon input label leading \
             message mobile outline overlay skeleton tablet text trailing",
            "bg",
        ),
        slot(
            slot_id::PROPERTY,
            Category,
            "Property",
            "Visual property being styled",
            false,
            "color radius width family size weight inline inset insetSquish insetStretch \
             letterSpacing lineHeight opacity shadow stack surface textDecoration",
            "color",
        ),
        slot(
            slot_id::STATE,
            Modifiers,
            "State",
            "Interactive state",
            true,
            "active checked collapsed disabled enabled expanded focused hovered \
             loading pressed raised selected unchecked visited",
            "hovered",
        ),
        slot(
            slot_id::SCALE,
            Modifiers,
            "Scale",
            "Scale, size or ordinal range",
            true,
            "xxs xs sm md lg xl 2xl 3xl 4xl level0 level1 level2 level3 level4 \
             default compact subtle strong",
            "md",
        ),
        slot(
            slot_id::MODIFIER,
            Modifiers,
            "Additional Modifier",
            "Relevant additional detail",
            false,
            "label caption1 caption2 medium underlined regular soft dark",
            "label",
        ),
        slot(
            slot_id::MODE,
            Modifiers,
            "Mode",
            "Visual mode (light/dark)",
            false,
            "dark light high-contrast",
            "dark",
        ),
    ]
}

// ---------------------------------------------------------------------------
// NamingConfig
// ---------------------------------------------------------------------------

/// Session-wide naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub separator: Separator,
    pub prefix: String,
    pub casing: Casing,
    pub abbreviate: bool,
    pub slots: Vec<Slot>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: Separator::Dot,
            prefix: String::new(),
            casing: Casing::Kebab,
            abbreviate: false,
            slots: default_slots(),
        }
    }
}

impl NamingConfig {
    #[must_use]
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Enable or disable a slot. Returns `false` if no slot has that id.
    pub fn set_slot_enabled(&mut self, id: &str, enabled: bool) -> bool {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| s.enabled = enabled)
            .is_some()
    }

    /// Move the slot at `from` to position `to`, shifting the rest.
    /// Out-of-range indices leave the order unchanged.
    pub fn move_slot(&mut self, from: usize, to: usize) {
        if from < self.slots.len() && to < self.slots.len() && from != to {
            let slot = self.slots.remove(from);
            self.slots.insert(to, slot);
        }
    }

    /// Name built from each enabled slot's example value.
    #[must_use]
    pub fn preview(&self) -> String {
        let values: SlotValues = self
            .slots
            .iter()
            .filter(|s| s.enabled && !s.selected_example.is_empty())
            .map(|s| (s.id.clone(), s.selected_example.clone()))
            .collect();
        build_name_from_slots(&values, self)
    }
}

/// Short forms used for the element slot when abbreviating.
fn abbreviate_element(element: &str) -> &str {
    match element {
        "background" => "bg",
        other => other,
    }
}

/// Case, join and prefix already-ordered name parts. Empty parts are dropped.
#[must_use]
pub fn build_name<S: AsRef<str>>(parts: &[S], config: &NamingConfig) -> String {
    let sep = config.separator.as_str();
    let name = parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .map(|p| apply_casing(p, config.casing))
        .collect::<Vec<_>>()
        .join(sep);

    if config.prefix.is_empty() {
        name
    } else {
        format!("{}{sep}{name}", config.prefix)
    }
}

/// Assemble a token name from slot values, in the config's slot order.
///
/// Disabled slots and slots without a (non-empty) value are skipped. With
/// `abbreviate` on, the element slot goes through the abbreviation table and
/// a property slot equal to `color` is dropped.
#[must_use]
pub fn build_name_from_slots(values: &SlotValues, config: &NamingConfig) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(config.slots.len());

    for slot in config.slots.iter().filter(|s| s.enabled) {
        let Some(value) = values.get(&slot.id).map(String::as_str) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        if config.abbreviate {
            match slot.id.as_str() {
                slot_id::PROPERTY if value == "color" => continue,
                slot_id::ELEMENT => {
                    parts.push(abbreviate_element(value));
                    continue;
                }
                _ => {}
            }
        }

        parts.push(value);
    }

    build_name(&parts, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
