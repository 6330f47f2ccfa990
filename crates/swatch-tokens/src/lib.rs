// SPDX-License-Identifier: MIT
//
// swatch-tokens: from palettes and semantic roles to named color tokens.
//
// Data flows one way:
//
//   model.rs       primitive palettes, semantic groups, state/scale modifiers
//   library.rs     built-in sample collections
//   naming.rs      the slot grammar every token name is assembled with
//   generate.rs    group × variant × element × scale × state expansion plus
//                  the background/text contrast pass
//   foundation.rs  spacing, typography, radius, shadow and motion scales
//   export.rs      CSS, SCSS, JSON, DTCG, Tailwind and JS writers
//
// wizard.rs wraps the inputs in a session record with a pure reducer, and
// config.rs loads the same inputs from a TOML or JSON project file.

// Reducer arms and serializers read better inline than split apart.
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod export;
pub mod foundation;
pub mod generate;
pub mod library;
pub mod model;
pub mod naming;
pub mod wizard;

pub use config::{ConfigError, CustomColor, ProjectConfig};
pub use export::{ExportFormat, export};
pub use foundation::{FoundationCategory, FoundationToken, default_foundations, foundation_token_count};
pub use generate::{ContrastWarning, GeneratedToken, Generation, TokenParts, generate_tokens};
pub use library::{
    SAMPLE_COLLECTIONS, SAMPLE_LIBRARY, SampleCollection, sample_collection, sample_palette, sample_palettes,
};
pub use model::{
    GroupKind, Modifier, PrimitivePalette, ScaleConfig, SemanticElement, SemanticGroup, SemanticVariant, Shade,
    StateConfig, TextMode, default_elements, default_scales, default_states, preset_groups,
};
pub use naming::{
    Casing, NamingConfig, Separator, Slot, SlotGroup, SlotValues, apply_casing, build_name, build_name_from_slots,
    default_slots,
};
pub use wizard::{MappingIssue, ShadeField, WizardAction, WizardState, WizardStep, reduce};
