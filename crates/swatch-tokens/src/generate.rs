// SPDX-License-Identifier: MIT

//! Token generation: expand semantic definitions into a flat token list.
//!
//! ```text
//! for group → variant (mapped only) → element → enabled scale × enabled state
//!     base      = palette shade for the variant
//!     color     = state( element_offset( scale(base) ) )
//!     name      = build_name_from_slots({component, role, element, property, scale?, state?})
//! ```
//!
//! Every token is also filed under a `group:variant:scale:state` context.
//! Once all tokens exist, each context holding both a `background` and a
//! `text` token is scored for contrast; anything under 4.5:1 becomes a
//! [`ContrastWarning`].
//!
//! The pass is pure and deterministic: identical inputs give an identical
//! token list in identical order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use swatch_color::{AA_NORMAL, Rgb, best_text_color, contrast_ratio, darken, lighten};
use tracing::{debug, warn};

use crate::model::{
    GroupKind, Modifier, PrimitivePalette, ScaleConfig, SemanticGroup, StateConfig, TextMode,
    UNRESOLVED_COLOR, find_palette,
};
use crate::naming::{NamingConfig, SlotValues, build_name, build_name_from_slots, slot_id};

/// Foreground used by [`TextMode::Dark`].
pub const DARK_TEXT: Rgb = Rgb::new(0x09, 0x09, 0x0B);

/// Lighten percentage behind [`TextMode::Tint`].
pub const TINT_TEXT_AMOUNT: f64 = 90.0;

pub const BACKGROUND: &str = "background";
pub const TEXT: &str = "text";

/// The semantic coordinates a token was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenParts {
    /// Set when the source group is a [`GroupKind::Group`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Set when the source group is a [`GroupKind::Component`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub variant: String,
    pub element: String,
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl TokenParts {
    /// Group or component name, whichever is set.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.group.as_deref().or(self.component.as_deref())
    }
}

/// One generated semantic token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedToken {
    pub full_name: String,
    pub parts: TokenParts,
    pub slot_values: SlotValues,
    pub value: Rgb,
    /// Name of the primitive this token derives from, e.g. `green.500`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primitive_ref: Option<String>,
    /// Collection name of the mapped palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// A background/text pair under the AA threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastWarning {
    pub group_name: String,
    pub variant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub bg_token: String,
    pub bg_color: Rgb,
    pub text_token: String,
    pub text_color: Rgb,
    pub contrast_ratio: f64,
}

/// Result of one generation pass. Tokens and warnings always travel together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Generation {
    pub tokens: Vec<GeneratedToken>,
    pub warnings: Vec<ContrastWarning>,
}

impl Generation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Foreground for `background` under a variant's text mode.
#[must_use]
pub fn text_color(background: Rgb, mode: TextMode) -> Rgb {
    match mode {
        TextMode::Auto => best_text_color(background),
        TextMode::Light => Rgb::WHITE,
        TextMode::Dark => DARK_TEXT,
        TextMode::Tint => lighten(background, TINT_TEXT_AMOUNT),
    }
}

/// Derive an element's color from the variant's (scaled) base color.
///
/// Elements share one base, so each one other than the background is
/// synthesized from it.
#[must_use]
pub fn element_color(element: &str, base: Rgb, mode: TextMode) -> Rgb {
    match element {
        BACKGROUND => base,
        TEXT => text_color(base, mode),
        "border" => darken(base, 10.0),
        "icon" => lighten(base, 85.0),
        _ => base,
    }
}

/// `<clean collection name><sep><shade number>`, named with the session's
/// convention.
fn primitive_ref(palette: &PrimitivePalette, shade_index: Option<usize>, naming: &NamingConfig) -> String {
    let clean = palette
        .collection_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    let (_, shade) = palette.resolve_shade(shade_index);
    let shade_name = shade.map_or(palette.collection_name.as_str(), |s| s.name.as_str());
    let digits = &shade_name[shade_name.trim_end_matches(|c: char| c.is_ascii_digit()).len()..];

    build_name(&[clean.as_str(), digits], naming)
}

/// Contexts in first-seen order, each holding the latest token per element.
#[derive(Default)]
struct Contexts<'a> {
    index: HashMap<String, usize>,
    entries: Vec<Context<'a>>,
}

struct Context<'a> {
    group: &'a str,
    variant: &'a str,
    scale: &'a Modifier,
    state: &'a Modifier,
    elements: Vec<(&'a str, usize)>,
}

impl<'a> Contexts<'a> {
    fn record(
        &mut self,
        (group, variant): (&'a str, &'a str),
        scale: &'a Modifier,
        state: &'a Modifier,
        element: &'a str,
        token: usize,
    ) {
        let key = format!("{group}:{variant}:{}:{}", scale.name, state.name);
        let slot = *self.index.entry(key).or_insert_with(|| {
            self.entries.push(Context { group, variant, scale, state, elements: Vec::new() });
            self.entries.len() - 1
        });

        let elements = &mut self.entries[slot].elements;
        match elements.iter_mut().find(|(name, _)| *name == element) {
            Some(entry) => entry.1 = token,
            None => elements.push((element, token)),
        }
    }

    fn warnings(&self, tokens: &[GeneratedToken]) -> Vec<ContrastWarning> {
        let lookup = |ctx: &Context<'_>, name: &str| {
            ctx.elements.iter().find(|(e, _)| *e == name).map(|&(_, i)| &tokens[i])
        };

        self.entries
            .iter()
            .filter_map(|ctx| {
                let bg = lookup(ctx, BACKGROUND)?;
                let text = lookup(ctx, TEXT)?;
                let ratio = contrast_ratio(bg.value, text.value);
                (ratio < AA_NORMAL).then(|| ContrastWarning {
                    group_name: ctx.group.to_owned(),
                    variant_name: ctx.variant.to_owned(),
                    scale: ctx.scale.token_name().map(str::to_owned),
                    state: ctx.state.token_name().map(str::to_owned),
                    bg_token: bg.full_name.clone(),
                    bg_color: bg.value,
                    text_token: text.full_name.clone(),
                    text_color: text.value,
                    contrast_ratio: ratio,
                })
            })
            .collect()
    }
}

/// Expand every mapped variant into tokens and score background/text pairs.
///
/// Unmapped variants produce nothing. A reference that names no known
/// palette resolves to [`UNRESOLVED_COLOR`] and is logged.
#[must_use]
pub fn generate_tokens(
    palettes: &[PrimitivePalette],
    naming: &NamingConfig,
    groups: &[SemanticGroup],
    states: &[StateConfig],
    scales: &[ScaleConfig],
) -> Generation {
    let enabled_scales: Vec<&ScaleConfig> = scales.iter().filter(|s| s.enabled).collect();
    let enabled_states: Vec<&StateConfig> = states.iter().filter(|s| s.enabled).collect();

    let mut tokens = Vec::new();
    let mut contexts = Contexts::default();

    for group in groups {
        for variant in &group.variants {
            let Some(reference) = variant.palette_ref.as_deref() else {
                continue;
            };

            let palette = find_palette(palettes, reference);
            if palette.is_none() {
                warn!(group = %group.name, variant = %variant.name, reference, "palette reference not found");
            }
            let base = palette.map_or(UNRESOLVED_COLOR, |p| p.resolve(variant.shade_index));
            let primitive = palette.map(|p| primitive_ref(p, variant.shade_index, naming));
            let collection = reference.split_once(':').map(|(_, name)| name.to_owned());

            for element in &variant.elements {
                for &scale in &enabled_scales {
                    for &state in &enabled_states {
                        let color = scale.apply(base);
                        let color = element_color(&element.name, color, variant.text_mode);
                        let color = state.apply(color);

                        let mut slot_values = SlotValues::new();
                        slot_values.insert(slot_id::COMPONENT.to_owned(), group.name.clone());
                        slot_values.insert(slot_id::ROLE.to_owned(), variant.name.clone());
                        slot_values.insert(slot_id::ELEMENT.to_owned(), element.name.clone());
                        slot_values.insert(slot_id::PROPERTY.to_owned(), element.property.clone());
                        if let Some(name) = scale.token_name() {
                            slot_values.insert(slot_id::SCALE.to_owned(), name.to_owned());
                        }
                        if let Some(name) = state.token_name() {
                            slot_values.insert(slot_id::STATE.to_owned(), name.to_owned());
                        }
                        slot_values.retain(|_, v| !v.is_empty());

                        let (group_part, component_part) = match group.kind {
                            GroupKind::Group => (Some(group.name.clone()), None),
                            GroupKind::Component => (None, Some(group.name.clone())),
                        };

                        tokens.push(GeneratedToken {
                            full_name: build_name_from_slots(&slot_values, naming),
                            parts: TokenParts {
                                group: group_part,
                                component: component_part,
                                variant: variant.name.clone(),
                                element: element.name.clone(),
                                property: element.property.clone(),
                                scale: scale.token_name().map(str::to_owned),
                                state: state.token_name().map(str::to_owned),
                            },
                            slot_values,
                            value: color,
                            primitive_ref: primitive.clone().filter(|p| !p.is_empty()),
                            reference: collection.clone(),
                        });

                        contexts.record(
                            (&group.name, &variant.name),
                            scale,
                            state,
                            &element.name,
                            tokens.len() - 1,
                        );
                    }
                }
            }
        }
    }

    let warnings = contexts.warnings(&tokens);
    debug!(tokens = tokens.len(), warnings = warnings.len(), "generated token set");

    Generation { tokens, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SemanticElement, SemanticVariant, Shade, default_scales, default_states};
    use crate::naming::Separator;
    use pretty_assertions::assert_eq;
    use swatch_color::ColorTransform;

    fn rgb(hex: &str) -> Rgb {
        Rgb::hex(hex).unwrap()
    }

    fn palette(name: &str, base: &str) -> PrimitivePalette {
        PrimitivePalette {
            library_id: "lib".to_owned(),
            collection_name: name.to_owned(),
            base_value: rgb(base),
            shades: vec![
                Shade { name: format!("{}-100", name.to_lowercase()), value: rgb("#F0F0F0") },
                Shade { name: format!("{}-500", name.to_lowercase()), value: rgb(base) },
                Shade { name: format!("{}-900", name.to_lowercase()), value: rgb("#101010") },
            ],
        }
    }

    fn variant(name: &str, reference: &str, elements: &[&str]) -> SemanticVariant {
        let mut v = SemanticVariant::new(name, name).mapped_to(reference);
        v.elements = elements.iter().map(|e| SemanticElement::new(e, e)).collect();
        v
    }

    fn only_default() -> (Vec<StateConfig>, Vec<ScaleConfig>) {
        (
            vec![Modifier::new("default", ColorTransform::None, 0.0)],
            vec![Modifier::new("default", ColorTransform::None, 0.0)],
        )
    }

    fn dash_naming(abbreviate: bool) -> NamingConfig {
        NamingConfig { separator: Separator::Dash, abbreviate, ..NamingConfig::default() }
    }

    fn names(generation: &Generation) -> Vec<&str> {
        generation.tokens.iter().map(|t| t.full_name.as_str()).collect()
    }

    // ── End-to-end ──────────────────────────────────────────────────

    fn success_scenario(abbreviate: bool) -> Generation {
        let palettes = vec![palette("Green", "#198754")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "feedback",
            vec![variant("success", "lib:Green", &["background", "text"])],
        )];
        let (states, scales) = only_default();
        generate_tokens(&palettes, &dash_naming(abbreviate), &groups, &states, &scales)
    }

    #[test]
    fn success_green_abbreviated() {
        let generation = success_scenario(true);
        assert_eq!(names(&generation), vec!["feedback-success-bg", "feedback-success-text"]);
        assert_eq!(generation.tokens[0].value, rgb("#198754"));
        assert_eq!(generation.tokens[1].value, Rgb::BLACK);
        assert!(generation.warnings.is_empty(), "{:?}", generation.warnings);
    }

    #[test]
    fn success_green_unabbreviated() {
        let generation = success_scenario(false);
        assert_eq!(names(&generation), vec!["feedback-success-background", "feedback-success-text"]);
        assert!(generation.warnings.is_empty());
    }

    #[test]
    fn token_metadata() {
        let generation = success_scenario(true);
        let bg = &generation.tokens[0];
        assert_eq!(bg.parts.group.as_deref(), Some("feedback"));
        assert_eq!(bg.parts.component, None);
        assert_eq!(bg.parts.scale, None);
        assert_eq!(bg.parts.state, None);
        assert_eq!(bg.reference.as_deref(), Some("Green"));
        assert_eq!(bg.primitive_ref.as_deref(), Some("green-500"));
        assert_eq!(bg.slot_values.get("role").map(String::as_str), Some("success"));
        assert!(!bg.slot_values.contains_key("scale"));
        assert!(!bg.slot_values.contains_key("state"));
    }

    // ── Default omission / expansion ────────────────────────────────

    #[test]
    fn default_modifiers_never_named() {
        let palettes = vec![palette("Blue", "#0D6EFD")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "action",
            vec![variant("primary", "lib:Blue", &["background", "text", "border", "icon"])],
        )];
        let generation =
            generate_tokens(&palettes, &NamingConfig::default(), &groups, &default_states(), &default_scales());

        assert_eq!(generation.tokens.len(), 4 * 3 * 5);
        assert!(generation.tokens.iter().all(|t| !t.full_name.contains("default")));
        assert_eq!(generation.tokens[0].full_name, "action.primary.background.subtle");
        assert_eq!(generation.tokens[1].full_name, "action.primary.background.hover.subtle");
        assert_eq!(generation.tokens[5].full_name, "action.primary.background");
    }

    #[test]
    fn iteration_order_is_element_then_scale_then_state() {
        let palettes = vec![palette("Blue", "#0D6EFD")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "action",
            vec![variant("primary", "lib:Blue", &["background", "text"])],
        )];
        let states = vec![
            Modifier::new("default", ColorTransform::None, 0.0),
            Modifier::new("hover", ColorTransform::Darken, 8.0),
        ];
        let scales = vec![
            Modifier::new("default", ColorTransform::None, 0.0),
            Modifier::new("strong", ColorTransform::Darken, 20.0),
        ];
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &scales);
        assert_eq!(
            names(&generation),
            vec![
                "action-primary-bg",
                "action-primary-bg-hover",
                "action-primary-bg-strong",
                "action-primary-bg-hover-strong",
                "action-primary-text",
                "action-primary-text-hover",
                "action-primary-text-strong",
                "action-primary-text-hover-strong",
            ]
        );
    }

    #[test]
    fn color_pipeline_is_scale_then_element_then_state() {
        let palettes = vec![palette("Blue", "#0D6EFD")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "action",
            vec![variant("primary", "lib:Blue", &["border"])],
        )];
        let states = vec![Modifier::new("hover", ColorTransform::Darken, 8.0)];
        let scales = vec![Modifier::new("subtle", ColorTransform::Lighten, 80.0)];
        let generation = generate_tokens(&palettes, &dash_naming(false), &groups, &states, &scales);

        let expected = darken(darken(lighten(rgb("#0D6EFD"), 80.0), 10.0), 8.0);
        assert_eq!(generation.tokens[0].value, expected);
    }

    #[test]
    fn disabled_modifiers_are_skipped() {
        let palettes = vec![palette("Blue", "#0D6EFD")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "action",
            vec![variant("primary", "lib:Blue", &["background"])],
        )];
        let mut states = default_states();
        for s in &mut states[1..] {
            s.enabled = false;
        }
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &default_scales());
        assert_eq!(
            names(&generation),
            vec!["action-primary-bg-subtle", "action-primary-bg", "action-primary-bg-strong"]
        );
    }

    // ── Mapping edge cases ──────────────────────────────────────────

    #[test]
    fn unmapped_variant_yields_nothing() {
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "action",
            vec![SemanticVariant::new("primary", "primary")],
        )];
        let (states, scales) = only_default();
        let generation = generate_tokens(&[], &NamingConfig::default(), &groups, &states, &scales);
        assert!(generation.is_empty());
        assert!(generation.warnings.is_empty());
    }

    #[test]
    fn dangling_reference_uses_neutral_fallback() {
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "action",
            vec![variant("primary", "lib:Missing", &["background"])],
        )];
        let (states, scales) = only_default();
        let generation = generate_tokens(&[], &NamingConfig::default(), &groups, &states, &scales);
        assert_eq!(generation.tokens.len(), 1);
        assert_eq!(generation.tokens[0].value, UNRESOLVED_COLOR);
        assert_eq!(generation.tokens[0].primitive_ref, None);
        assert_eq!(generation.tokens[0].reference.as_deref(), Some("Missing"));
    }

    #[test]
    fn shade_index_drives_color_and_primitive_ref() {
        let palettes = vec![palette("Deep Blue", "#0D6EFD")];
        let mut v = variant("primary", "lib:Deep Blue", &["background"]);
        v.shade_index = Some(2);
        let groups = vec![SemanticGroup::new(GroupKind::Component, "button", vec![v])];
        let (states, scales) = only_default();
        let generation = generate_tokens(&palettes, &NamingConfig::default(), &groups, &states, &scales);

        let token = &generation.tokens[0];
        assert_eq!(token.value, rgb("#101010"));
        assert_eq!(token.primitive_ref.as_deref(), Some("deep-blue.900"));
        assert_eq!(token.parts.component.as_deref(), Some("button"));
        assert_eq!(token.parts.group, None);
    }

    // ── Contrast warnings ───────────────────────────────────────────

    #[test]
    fn pastel_with_light_text_warns() {
        let palettes = vec![palette("Amber", "#FFF3CD")];
        let mut v = variant("warning", "lib:Amber", &["background", "text"]);
        v.text_mode = TextMode::Light;
        let groups = vec![SemanticGroup::new(GroupKind::Group, "feedback", vec![v])];
        let (states, scales) = only_default();
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &scales);

        assert_eq!(generation.warnings.len(), 1);
        let w = &generation.warnings[0];
        assert_eq!(w.bg_token, "feedback-warning-bg");
        assert_eq!(w.text_token, "feedback-warning-text");
        assert_eq!(w.bg_color, rgb("#FFF3CD"));
        assert_eq!(w.text_color, Rgb::WHITE);
        assert_eq!(w.contrast_ratio, contrast_ratio(w.bg_color, w.text_color));
        assert!(w.contrast_ratio < AA_NORMAL);
        assert_eq!(w.scale, None);
        assert_eq!(w.state, None);
    }

    #[test]
    fn pastel_with_auto_text_passes() {
        let palettes = vec![palette("Amber", "#FFF3CD")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "feedback",
            vec![variant("warning", "lib:Amber", &["background", "text"])],
        )];
        let (states, scales) = only_default();
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &scales);
        assert_eq!(generation.tokens[1].value, Rgb::BLACK);
        assert!(generation.warnings.is_empty());
    }

    #[test]
    fn warning_carries_modifier_context() {
        let palettes = vec![palette("Amber", "#FFF3CD")];
        let mut v = variant("warning", "lib:Amber", &["background", "text"]);
        v.text_mode = TextMode::Light;
        let groups = vec![SemanticGroup::new(GroupKind::Group, "feedback", vec![v])];
        let states = vec![Modifier::new("hover", ColorTransform::Darken, 8.0)];
        let scales = vec![Modifier::new("strong", ColorTransform::Darken, 20.0)];
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &scales);

        let w = &generation.warnings[0];
        assert_eq!(w.scale.as_deref(), Some("strong"));
        assert_eq!(w.state.as_deref(), Some("hover"));
        assert_eq!(w.bg_token, "feedback-warning-bg-hover-strong");
    }

    #[test]
    fn border_and_icon_are_never_checked() {
        let palettes = vec![palette("Amber", "#FFF3CD")];
        let groups = vec![SemanticGroup::new(
            GroupKind::Group,
            "feedback",
            vec![variant("warning", "lib:Amber", &["background", "border", "icon"])],
        )];
        let (states, scales) = only_default();
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &scales);
        assert_eq!(generation.tokens.len(), 3);
        assert!(generation.warnings.is_empty());
    }

    #[test]
    fn dark_text_mode_uses_near_black() {
        assert_eq!(text_color(rgb("#FFFFFF"), TextMode::Dark), DARK_TEXT);
        assert_eq!(text_color(rgb("#1A1A2E"), TextMode::Auto), Rgb::WHITE);
    }

    #[test]
    fn light_text_mode_is_pure_white() {
        for hex in ["#198754", "#FFF3CD", "#0D1A28"] {
            assert_eq!(text_color(rgb(hex), TextMode::Light), Rgb::WHITE);
        }
    }

    #[test]
    fn tint_text_mode_lightens_background() {
        assert_eq!(text_color(rgb("#198754"), TextMode::Tint), rgb("#E8F3EE"));
        assert_eq!(element_color(TEXT, rgb("#198754"), TextMode::Tint), rgb("#E8F3EE"));
    }

    #[test]
    fn green_with_light_text_passes_but_tint_warns() {
        let palettes = vec![palette("Green", "#198754")];
        let mut light = variant("success", "lib:Green", &["background", "text"]);
        light.text_mode = TextMode::Light;
        let mut tint = variant("info", "lib:Green", &["background", "text"]);
        tint.text_mode = TextMode::Tint;
        let groups = vec![SemanticGroup::new(GroupKind::Group, "feedback", vec![light, tint])];
        let (states, scales) = only_default();
        let generation = generate_tokens(&palettes, &dash_naming(true), &groups, &states, &scales);

        assert_eq!(generation.tokens[1].value, Rgb::WHITE);
        assert_eq!(generation.warnings.len(), 1);
        assert_eq!(generation.warnings[0].variant_name, "info");
        assert!((generation.warnings[0].contrast_ratio - 3.99).abs() < 0.01);
    }

    // ── Determinism ─────────────────────────────────────────────────

    #[test]
    fn identical_inputs_identical_output() {
        let palettes = vec![palette("Blue", "#0D6EFD"), palette("Amber", "#FFF3CD")];
        let mut groups = crate::model::preset_groups();
        groups[0].variants[0].palette_ref = Some("lib:Blue".to_owned());
        groups[1].variants[1].palette_ref = Some("lib:Amber".to_owned());
        groups[1].variants[1].text_mode = TextMode::Light;

        let run = || {
            generate_tokens(&palettes, &NamingConfig::default(), &groups, &default_states(), &default_scales())
        };
        let first = run();
        assert_eq!(first, run());
        assert!(!first.warnings.is_empty());
        assert_eq!(first.tokens.len(), 2 * 4 * 3 * 5);
    }
}
