// SPDX-License-Identifier: MIT

//! Wizard session state and its reducer.
//!
//! A front end holds one [`WizardState`] and replaces it with
//! `reduce(state, action)` on every user action. The reducer is pure: no
//! I/O, no shared state, same input same output.
//!
//! Two rules hold across every action:
//!
//! - Any edit to an input (palettes, naming, groups, modifiers) drops the
//!   previously generated tokens and warnings, since they no longer match.
//! - Tokens and warnings are only ever replaced together, by the `Next`
//!   that leaves the modifiers step.
//!
//! Foundation toggles don't touch the color tokens; exporters read the
//! enabled categories straight from the state.

use swatch_color::{AA_NORMAL, Rgb, contrast_ratio};

use crate::foundation::{FoundationCategory, default_foundations};
use crate::generate::{BACKGROUND, ContrastWarning, GeneratedToken, TEXT, generate_tokens, text_color};
use crate::model::{
    PrimitivePalette, ScaleConfig, SemanticGroup, SemanticVariant, StateConfig, TextMode, default_scales,
    default_states, find_palette,
};
use crate::naming::NamingConfig;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    Palette,
    Naming,
    Semantic,
    Modifiers,
    Foundations,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 6] =
        [Self::Palette, Self::Naming, Self::Semantic, Self::Modifiers, Self::Foundations, Self::Review];

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Palette => Some(Self::Naming),
            Self::Naming => Some(Self::Semantic),
            Self::Semantic => Some(Self::Modifiers),
            Self::Modifiers => Some(Self::Foundations),
            Self::Foundations => Some(Self::Review),
            Self::Review => None,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Palette => None,
            Self::Naming => Some(Self::Palette),
            Self::Semantic => Some(Self::Naming),
            Self::Modifiers => Some(Self::Semantic),
            Self::Foundations => Some(Self::Modifiers),
            Self::Review => Some(Self::Foundations),
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Palette => "Base Palette",
            Self::Naming => "Naming Convention",
            Self::Semantic => "Semantic Tokens",
            Self::Modifiers => "States & Scales",
            Self::Foundations => "Foundation Tokens",
            Self::Review => "Review & Export",
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub palettes: Vec<PrimitivePalette>,
    pub naming: NamingConfig,
    pub groups: Vec<SemanticGroup>,
    pub states: Vec<StateConfig>,
    pub scales: Vec<ScaleConfig>,
    pub foundations: Vec<FoundationCategory>,
    pub tokens: Vec<GeneratedToken>,
    pub warnings: Vec<ContrastWarning>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Palette,
            palettes: Vec::new(),
            naming: NamingConfig::default(),
            groups: Vec::new(),
            states: default_states(),
            scales: default_scales(),
            foundations: default_foundations(),
            tokens: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// A background/text pair that already fails AA before any modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingIssue {
    pub group_name: String,
    pub variant_name: String,
    pub background: Rgb,
    pub text: Rgb,
    pub ratio: f64,
}

impl WizardState {
    /// Whether the current step's requirements are met.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Palette => !self.palettes.is_empty(),
            WizardStep::Naming => true,
            WizardStep::Semantic => self.groups.iter().any(SemanticGroup::is_mapped),
            WizardStep::Modifiers => {
                self.states.iter().any(|s| s.enabled) && self.scales.iter().any(|s| s.enabled)
            }
            WizardStep::Foundations => true,
            WizardStep::Review => false,
        }
    }

    /// Mapped variants whose raw background and text colors fall under AA.
    #[must_use]
    pub fn mapping_issues(&self) -> Vec<MappingIssue> {
        let mut issues = Vec::new();
        for group in &self.groups {
            for variant in &group.variants {
                let Some(reference) = variant.palette_ref.as_deref() else {
                    continue;
                };
                let Some(palette) = find_palette(&self.palettes, reference) else {
                    continue;
                };
                if !variant.has_element(BACKGROUND) || !variant.has_element(TEXT) {
                    continue;
                }

                let background = palette.resolve(variant.shade_index);
                let text = text_color(background, variant.text_mode);
                let ratio = contrast_ratio(background, text);
                if ratio < AA_NORMAL {
                    issues.push(MappingIssue {
                        group_name: group.name.clone(),
                        variant_name: variant.name.clone(),
                        background,
                        text,
                        ratio,
                    });
                }
            }
        }
        issues
    }

    fn invalidate(&mut self) {
        self.tokens.clear();
        self.warnings.clear();
    }

    fn regenerate(&mut self) {
        let generation = generate_tokens(&self.palettes, &self.naming, &self.groups, &self.states, &self.scales);
        self.tokens = generation.tokens;
        self.warnings = generation.warnings;
    }

    fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let Some(next) = self.step.next() else {
            return false;
        };
        if self.step == WizardStep::Modifiers {
            self.regenerate();
        }
        self.step = next;
        true
    }

    fn variant_mut(&mut self, group_id: &str, variant_id: &str) -> Option<&mut SemanticVariant> {
        self.groups
            .iter_mut()
            .find(|g| g.id == group_id)?
            .variants
            .iter_mut()
            .find(|v| v.id == variant_id)
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The part of a shade an edit changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeField {
    Name(String),
    Value(Rgb),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// Add a palette, replacing one with the same reference.
    AddPalette(PrimitivePalette),
    /// Remove a palette and unmap every variant pointing at it.
    RemovePalette { reference: String },
    EditShade { reference: String, index: usize, field: ShadeField },
    SetNaming(NamingConfig),
    ToggleSlot { id: String },
    MoveSlot { from: usize, to: usize },
    /// Add a group, replacing one with the same id.
    AddGroup(SemanticGroup),
    RemoveGroup { id: String },
    MapVariant { group_id: String, variant_id: String, reference: Option<String> },
    SetShadeIndex { group_id: String, variant_id: String, shade_index: Option<usize> },
    SetTextMode { group_id: String, variant_id: String, mode: TextMode },
    ToggleState { id: String },
    ToggleScale { id: String },
    /// Include or drop a foundation category. Enabled categories keep
    /// `FoundationCategory::ALL` order.
    ToggleFoundation(FoundationCategory),
    Next,
    Back,
    /// Jump to a step. Backward jumps always land; forward jumps stop at the
    /// first step whose requirements are unmet.
    GoTo(WizardStep),
}

/// Apply one action.
#[must_use]
pub fn reduce(mut state: WizardState, action: WizardAction) -> WizardState {
    match action {
        WizardAction::AddPalette(palette) => {
            let reference = palette.reference();
            match state.palettes.iter_mut().find(|p| p.reference() == reference) {
                Some(existing) => *existing = palette,
                None => state.palettes.push(palette),
            }
            state.invalidate();
        }
        WizardAction::RemovePalette { reference } => {
            state.palettes.retain(|p| p.reference() != reference);
            for variant in state.groups.iter_mut().flat_map(|g| g.variants.iter_mut()) {
                if variant.palette_ref.as_deref() == Some(reference.as_str()) {
                    variant.palette_ref = None;
                    variant.shade_index = None;
                }
            }
            state.invalidate();
        }
        WizardAction::EditShade { reference, index, field } => {
            let Some(palette) = state.palettes.iter_mut().find(|p| p.matches(&reference)) else {
                return state;
            };
            let is_base = palette.base_shade_index() == Some(index);
            let Some(shade) = palette.shades.get_mut(index) else {
                return state;
            };
            match field {
                ShadeField::Name(name) => shade.name = name,
                ShadeField::Value(value) => {
                    shade.value = value;
                    if is_base {
                        palette.base_value = value;
                    }
                }
            }
            state.invalidate();
        }
        WizardAction::SetNaming(naming) => {
            state.naming = naming;
            state.invalidate();
        }
        WizardAction::ToggleSlot { id } => {
            let enabled = state.naming.slot(&id).is_some_and(|s| !s.enabled);
            if state.naming.set_slot_enabled(&id, enabled) {
                state.invalidate();
            }
        }
        WizardAction::MoveSlot { from, to } => {
            state.naming.move_slot(from, to);
            state.invalidate();
        }
        WizardAction::AddGroup(group) => {
            match state.groups.iter_mut().find(|g| g.id == group.id) {
                Some(existing) => *existing = group,
                None => state.groups.push(group),
            }
            state.invalidate();
        }
        WizardAction::RemoveGroup { id } => {
            state.groups.retain(|g| g.id != id);
            state.invalidate();
        }
        WizardAction::MapVariant { group_id, variant_id, reference } => {
            if let Some(variant) = state.variant_mut(&group_id, &variant_id) {
                variant.palette_ref = reference.filter(|r| !r.is_empty());
                variant.shade_index = None;
                state.invalidate();
            }
        }
        WizardAction::SetShadeIndex { group_id, variant_id, shade_index } => {
            if let Some(variant) = state.variant_mut(&group_id, &variant_id) {
                variant.shade_index = shade_index;
                state.invalidate();
            }
        }
        WizardAction::SetTextMode { group_id, variant_id, mode } => {
            if let Some(variant) = state.variant_mut(&group_id, &variant_id) {
                variant.text_mode = mode;
                state.invalidate();
            }
        }
        WizardAction::ToggleState { id } => {
            if let Some(s) = state.states.iter_mut().find(|s| s.id == id) {
                s.enabled = !s.enabled;
                state.invalidate();
            }
        }
        WizardAction::ToggleScale { id } => {
            if let Some(s) = state.scales.iter_mut().find(|s| s.id == id) {
                s.enabled = !s.enabled;
                state.invalidate();
            }
        }
        WizardAction::ToggleFoundation(category) => {
            if let Some(i) = state.foundations.iter().position(|&c| c == category) {
                state.foundations.remove(i);
            } else {
                state.foundations.push(category);
                state.foundations.sort_unstable();
            }
        }
        WizardAction::Next => {
            state.advance();
        }
        WizardAction::Back => {
            if let Some(prev) = state.step.prev() {
                state.step = prev;
            }
        }
        WizardAction::GoTo(target) => {
            if target <= state.step {
                state.step = target;
            } else {
                while state.step < target && state.advance() {}
            }
        }
    }
    state
}
