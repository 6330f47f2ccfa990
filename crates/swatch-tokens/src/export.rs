// SPDX-License-Identifier: MIT
//
// Export serializers.
//
// Pure functions that write a generated token list to any `impl Write`. No
// decisions about what the tokens are, that's the generator's job. This
// module only knows the textual shape of each target format.
//
// Token names use the configured separator. CSS and SCSS identifiers can't
// hold `.` or `/`, so those become `-`. JSON and DTCG split names on the
// separator instead and nest one object per segment.
//
// Foundation scales ride along in CSS, SCSS, JSON and DTCG: a second `:root`
// block, a trailing SCSS section, a top-level `foundation` key, and one
// top-level DTCG group per category. Tailwind and JS stay color-only.
//
// All functions return `io::Result` propagated from the underlying writer.
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::foundation::FoundationCategory;
use crate::generate::GeneratedToken;
use crate::naming::NamingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Dtcg,
    Css,
    Scss,
    Json,
    Tailwind,
    Js,
}

impl ExportFormat {
    pub const ALL: [Self; 6] = [Self::Dtcg, Self::Css, Self::Scss, Self::Json, Self::Tailwind, Self::Js];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dtcg => "dtcg",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind => "tailwind",
            Self::Js => "js",
        }
    }

    /// Suggested file name suffix.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Dtcg => "tokens.json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind => "tailwind.config.js",
            Self::Js => "js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown export format '{s}'"))
    }
}

/// Write `tokens` in `format`, followed by the `foundations` scales where the
/// format carries them.
pub fn export(
    w: &mut impl Write,
    format: ExportFormat,
    tokens: &[GeneratedToken],
    naming: &NamingConfig,
    foundations: &[FoundationCategory],
) -> io::Result<()> {
    match format {
        ExportFormat::Dtcg => write_dtcg(w, tokens, naming, foundations),
        ExportFormat::Css => {
            write_css(w, tokens)?;
            if foundations.is_empty() {
                return Ok(());
            }
            writeln!(w)?;
            write_css_foundations(w, foundations)
        }
        ExportFormat::Scss => {
            write_scss(w, tokens)?;
            write_scss_foundations(w, foundations)
        }
        ExportFormat::Json => write_json(w, tokens, naming, foundations),
        ExportFormat::Tailwind => write_tailwind(w, tokens),
        ExportFormat::Js => write_js(w, tokens),
    }
}

/// `.` and `/` are not valid in CSS or SCSS identifiers.
fn css_ident(name: &str) -> String {
    name.replace(['.', '/'], "-")
}

/// Foundation names keep their fractional steps (`spacing-0.5`), escaped.
fn foundation_ident(name: &str) -> String {
    name.replace('.', "\\.")
}

fn owner(token: &GeneratedToken) -> &str {
    token.parts.owner().unwrap_or_default()
}

/// `variant`, `element`, then scale and state when present.
fn flat_key(token: &GeneratedToken, joiner: &str) -> String {
    let p = &token.parts;
    [Some(p.variant.as_str()), Some(p.element.as_str()), p.scale.as_deref(), p.state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Tokens bucketed by group/component in first-seen order.
fn by_owner(tokens: &[GeneratedToken]) -> Vec<(&str, Vec<&GeneratedToken>)> {
    let mut buckets: Vec<(&str, Vec<&GeneratedToken>)> = Vec::new();
    for token in tokens {
        let name = token.parts.owner().unwrap_or("tokens");
        match buckets.iter_mut().find(|(n, _)| *n == name) {
            Some((_, list)) => list.push(token),
            None => buckets.push((name, vec![token])),
        }
    }
    buckets
}

// ─── CSS ─────────────────────────────────────────────────────────────────────

/// Custom properties on `:root`, one comment header per group/variant run.
pub fn write_css(w: &mut impl Write, tokens: &[GeneratedToken]) -> io::Result<()> {
    writeln!(w, ":root {{")?;
    let mut last_group = "";
    for token in tokens {
        let group = owner(token);
        if group != last_group {
            if !last_group.is_empty() {
                writeln!(w)?;
            }
            writeln!(w, "  /* {group} / {} */", token.parts.variant)?;
            last_group = group;
        }
        write!(w, "  --{}: {};", css_ident(&token.full_name), token.value)?;
        if let Some(primitive) = &token.primitive_ref {
            write!(w, " /* ref: {primitive} */")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "}}")
}

// ─── SCSS ────────────────────────────────────────────────────────────────────

const SCSS_RULE: &str = "// ==========================================";

/// `$name: value;` variables under a list of the primitives they came from.
pub fn write_scss(w: &mut impl Write, tokens: &[GeneratedToken]) -> io::Result<()> {
    writeln!(w, "// Design Token System\n// Auto-generated\n")?;

    let mut primitives: Vec<&str> = Vec::new();
    for primitive in tokens.iter().filter_map(|t| t.primitive_ref.as_deref()) {
        if !primitives.contains(&primitive) {
            primitives.push(primitive);
        }
    }
    if !primitives.is_empty() {
        writeln!(w, "{SCSS_RULE}\n// PRIMITIVE REFERENCES (from selected palettes)\n{SCSS_RULE}")?;
        for primitive in &primitives {
            writeln!(w, "// ${}", css_ident(primitive))?;
        }
        writeln!(w)?;
    }

    writeln!(w, "{SCSS_RULE}\n// SEMANTIC TOKENS\n{SCSS_RULE}\n")?;

    let mut last_group = "";
    for token in tokens {
        let group = owner(token);
        if group != last_group {
            if !last_group.is_empty() {
                writeln!(w)?;
            }
            writeln!(w, "// {}: {}", group.to_uppercase(), token.parts.variant)?;
            last_group = group;
        }
        write!(w, "${}: {};", css_ident(&token.full_name), token.value)?;
        if let Some(primitive) = &token.primitive_ref {
            write!(w, " // ref: ${}", css_ident(primitive))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// A second `:root` block, one comment header per category.
pub fn write_css_foundations(w: &mut impl Write, foundations: &[FoundationCategory]) -> io::Result<()> {
    writeln!(w, ":root {{")?;
    for category in foundations {
        writeln!(w, "\n  /* {} */", category.label())?;
        for token in category.tokens() {
            writeln!(w, "  --{}: {};", foundation_ident(token.name), token.value)?;
        }
    }
    writeln!(w, "\n}}")
}

/// `$name: value;` lines under a foundation banner. Nothing for no categories.
pub fn write_scss_foundations(w: &mut impl Write, foundations: &[FoundationCategory]) -> io::Result<()> {
    if foundations.is_empty() {
        return Ok(());
    }
    writeln!(w, "\n{SCSS_RULE}\n// FOUNDATION TOKENS\n{SCSS_RULE}")?;
    for category in foundations {
        writeln!(w, "\n// {}", category.label())?;
        for token in category.tokens() {
            writeln!(w, "${}: {};", foundation_ident(token.name), token.value)?;
        }
    }
    Ok(())
}

// ─── JSON / DTCG ─────────────────────────────────────────────────────────────

/// Nest each token under its name segments and merge `entry` into the last one.
///
/// A name that is a prefix of another (`a.bg` and `a.bg.hover`) ends up as an
/// object holding both its own `$value` and the longer name's child.
fn token_tree(
    tokens: &[GeneratedToken],
    naming: &NamingConfig,
    entry: impl Fn(&GeneratedToken) -> Map<String, Value>,
) -> Map<String, Value> {
    let mut root = Map::new();
    let sep = naming.separator.as_str();
    for token in tokens {
        let path: Vec<&str> = token.full_name.split(sep).collect();
        insert_path(&mut root, &path, entry(token));
    }
    root
}

fn insert_path(node: &mut Map<String, Value>, path: &[&str], entry: Map<String, Value>) {
    let Some((head, rest)) = path.split_first() else {
        node.extend(entry);
        return;
    };
    let child = node.entry(*head).or_insert_with(|| Value::Object(Map::new()));
    if !child.is_object() {
        *child = Value::Object(Map::new());
    }
    if let Value::Object(map) = child {
        insert_path(map, rest, entry);
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// `{ category: { name: value } }` for the `foundation` key of the JSON export.
fn foundation_json(foundations: &[FoundationCategory]) -> Value {
    let categories = foundations
        .iter()
        .map(|category| {
            let values = category.tokens().iter().map(|t| (t.name.to_owned(), json!(t.value))).collect();
            (category.id().to_owned(), Value::Object(values))
        })
        .collect();
    Value::Object(categories)
}

/// One DTCG group per category, each token with `$value` and `$type`.
fn foundation_dtcg(category: FoundationCategory) -> Value {
    let mut group = Map::new();
    group.insert("$description".to_owned(), json!(category.description()));
    for token in category.tokens() {
        let mut entry = into_map(json!({ "$value": token.value, "$type": token.dtcg_type }));
        if let Some(description) = token.description {
            entry.insert("$description".to_owned(), json!(description));
        }
        group.insert(token.name.to_owned(), Value::Object(entry));
    }
    Value::Object(group)
}

/// Nested tree with `$value`, `$type` and `$primitiveRef`, plus a `foundation`
/// key when any foundation is enabled.
pub fn write_json(
    w: &mut impl Write,
    tokens: &[GeneratedToken],
    naming: &NamingConfig,
    foundations: &[FoundationCategory],
) -> io::Result<()> {
    let mut tree = token_tree(tokens, naming, |t| {
        let mut entry = into_map(json!({ "$value": t.value, "$type": "color" }));
        if let Some(primitive) = &t.primitive_ref {
            entry.insert("$primitiveRef".to_owned(), json!(primitive));
        }
        entry
    });
    if !foundations.is_empty() {
        tree.insert("foundation".to_owned(), foundation_json(foundations));
    }
    serde_json::to_writer_pretty(&mut *w, &tree)?;
    writeln!(w)
}

/// Nested tree in the W3C design tokens shape, provenance in `$description`.
/// Enabled foundation categories become top-level groups beside the colors.
pub fn write_dtcg(
    w: &mut impl Write,
    tokens: &[GeneratedToken],
    naming: &NamingConfig,
    foundations: &[FoundationCategory],
) -> io::Result<()> {
    let mut tree = token_tree(tokens, naming, |t| {
        let mut entry = into_map(json!({ "$value": t.value, "$type": "color" }));
        let description = match (&t.primitive_ref, &t.reference) {
            (Some(primitive), _) => Some(format!("Primitive: {primitive}")),
            (None, Some(reference)) => Some(format!("Reference: {reference}")),
            (None, None) => None,
        };
        if let Some(description) = description {
            entry.insert("$description".to_owned(), json!(description));
        }
        entry
    });
    for &category in foundations {
        tree.insert(category.id().to_owned(), foundation_dtcg(category));
    }
    serde_json::to_writer_pretty(&mut *w, &tree)?;
    writeln!(w)
}

// ─── Tailwind / JS ───────────────────────────────────────────────────────────

/// A `theme.extend.colors` block keyed `variant-element[-scale][-state]`.
pub fn write_tailwind(w: &mut impl Write, tokens: &[GeneratedToken]) -> io::Result<()> {
    writeln!(w, "/** @type {{import('tailwindcss').Config}} */")?;
    writeln!(w, "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{")?;
    for (group, list) in by_owner(tokens) {
        // Later tokens win on a repeated key.
        let mut entries: Vec<(String, &GeneratedToken)> = Vec::new();
        for token in list {
            let key = flat_key(token, "-");
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = token,
                None => entries.push((key, token)),
            }
        }

        writeln!(w, "        '{group}': {{")?;
        for (key, token) in entries {
            writeln!(w, "          '{key}': '{}',", token.value)?;
        }
        writeln!(w, "        }},")?;
    }
    writeln!(w, "      }},\n    }},\n  }},\n}};")
}

/// `export const tokens` keyed `variant_element[_scale][_state]`.
pub fn write_js(w: &mut impl Write, tokens: &[GeneratedToken]) -> io::Result<()> {
    writeln!(w, "// Design Token System\n// Auto-generated\n\nexport const tokens = {{")?;
    for (group, list) in by_owner(tokens) {
        writeln!(w, "  {group}: {{")?;
        for token in list {
            writeln!(w, "    '{}': '{}',", flat_key(token, "_"), token.value)?;
        }
        writeln!(w, "  }},")?;
    }
    writeln!(w, "}};")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_tokens;
    use crate::model::{GroupKind, Modifier, PrimitivePalette, SemanticElement, SemanticGroup, SemanticVariant, Shade};
    use crate::naming::Separator;
    use pretty_assertions::assert_eq;
    use swatch_color::{ColorTransform, Rgb};

    fn tokens(naming: &NamingConfig) -> Vec<GeneratedToken> {
        let green = Rgb::hex("#198754").unwrap();
        let palettes = vec![PrimitivePalette {
            library_id: "lib".to_owned(),
            collection_name: "Green".to_owned(),
            base_value: green,
            shades: vec![Shade { name: "green-500".to_owned(), value: green }],
        }];
        let mut variant = SemanticVariant::new("success", "success").mapped_to("lib:Green");
        variant.elements = vec![SemanticElement::new("bg", "background"), SemanticElement::new("text", "text")];
        let groups = vec![SemanticGroup::new(GroupKind::Group, "feedback", vec![variant])];
        let states = vec![
            Modifier::new("default", ColorTransform::None, 0.0),
            Modifier::new("hover", ColorTransform::Darken, 10.0),
        ];
        let scales = vec![Modifier::new("default", ColorTransform::None, 0.0)];
        generate_tokens(&palettes, naming, &groups, &states, &scales).tokens
    }

    fn render(format: ExportFormat, naming: &NamingConfig) -> String {
        render_with(format, naming, &[])
    }

    fn render_with(format: ExportFormat, naming: &NamingConfig, foundations: &[FoundationCategory]) -> String {
        let mut out = Vec::new();
        export(&mut out, format, &tokens(naming), naming, foundations).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn dotted() -> NamingConfig {
        NamingConfig { abbreviate: true, ..NamingConfig::default() }
    }

    // ── Formats ─────────────────────────────────────────────────────

    #[test]
    fn format_names_roundtrip() {
        for format in ExportFormat::ALL {
            assert_eq!(format.as_str().parse::<ExportFormat>(), Ok(format));
        }
        assert!("figma".parse::<ExportFormat>().is_err());
    }

    // ── CSS / SCSS ──────────────────────────────────────────────────

    #[test]
    fn css_replaces_dots() {
        let css = render(ExportFormat::Css, &dotted());
        let expected = "\
:root {
  /* feedback / success */
  --feedback-success-bg: #198754; /* ref: green.500 */
  --feedback-success-bg-hover: #177A4C; /* ref: green.500 */
  --feedback-success-text: #000000; /* ref: green.500 */
  --feedback-success-text-hover: #000000; /* ref: green.500 */
}
";
        assert_eq!(css, expected);
    }

    #[test]
    fn scss_lists_primitives_once() {
        let scss = render(ExportFormat::Scss, &dotted());
        assert_eq!(scss.matches("// $green-500\n").count(), 1);
        assert!(scss.contains("// FEEDBACK: success\n"));
        assert!(scss.contains("$feedback-success-bg: #198754; // ref: $green-500\n"));
    }

    // ── JSON / DTCG ─────────────────────────────────────────────────

    #[test]
    fn json_nests_on_separator() {
        let json: Value = serde_json::from_str(&render(ExportFormat::Json, &dotted())).unwrap();
        let bg = &json["feedback"]["success"]["bg"];
        assert_eq!(bg["$value"], "#198754");
        assert_eq!(bg["$type"], "color");
        assert_eq!(bg["$primitiveRef"], "green.500");
        assert_eq!(bg["hover"]["$value"], "#177A4C");
    }

    #[test]
    fn json_uses_configured_separator() {
        let naming = NamingConfig { separator: Separator::Slash, ..dotted() };
        let json: Value = serde_json::from_str(&render(ExportFormat::Json, &naming)).unwrap();
        assert_eq!(json["feedback"]["success"]["text"]["$value"], "#000000");
    }

    #[test]
    fn dtcg_describes_provenance() {
        let json: Value = serde_json::from_str(&render(ExportFormat::Dtcg, &dotted())).unwrap();
        let text = &json["feedback"]["success"]["text"];
        assert_eq!(text["$description"], "Primitive: green.500");
        assert!(text.get("$primitiveRef").is_none());
    }

    #[test]
    fn dtcg_falls_back_to_reference() {
        let mut list = tokens(&dotted());
        list.truncate(1);
        list[0].primitive_ref = None;
        let mut out = Vec::new();
        write_dtcg(&mut out, &list, &dotted(), &[]).unwrap();
        let json: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["feedback"]["success"]["bg"]["$description"], "Reference: Green");
    }

    // ── Tailwind / JS ───────────────────────────────────────────────

    #[test]
    fn tailwind_keys() {
        let tw = render(ExportFormat::Tailwind, &dotted());
        assert!(tw.starts_with("/** @type {import('tailwindcss').Config} */\nmodule.exports = {"));
        assert!(tw.contains("        'feedback': {\n          'success-background': '#198754',\n"));
        assert!(tw.contains("          'success-text-hover': '#000000',\n"));
        assert!(tw.ends_with("      },\n    },\n  },\n};\n"));
    }

    #[test]
    fn js_keys() {
        let js = render(ExportFormat::Js, &dotted());
        assert!(js.contains("export const tokens = {\n  feedback: {\n    'success_background': '#198754',\n"));
        assert!(js.contains("    'success_background_hover': '#177A4C',\n"));
        assert!(js.ends_with("  },\n};\n"));
    }

    // ── Foundations ─────────────────────────────────────────────────

    #[test]
    fn css_appends_foundation_block() {
        let plain = render(ExportFormat::Css, &dotted());
        let css = render_with(ExportFormat::Css, &dotted(), &[FoundationCategory::Radius]);
        assert!(css.starts_with(&plain));
        assert!(css.contains("}\n\n:root {\n\n  /* Border Radius */\n  --radius-none: 0px;\n"));
        assert!(css.ends_with("  --radius-full: 9999px;\n\n}\n"));
    }

    #[test]
    fn fractional_steps_are_escaped() {
        let css = render_with(ExportFormat::Css, &dotted(), &[FoundationCategory::Spacing]);
        assert!(css.contains("  --spacing-0\\.5: 2px;\n"));
        let scss = render_with(ExportFormat::Scss, &dotted(), &[FoundationCategory::Spacing]);
        assert!(scss.contains("\n// Spacing\n$spacing-0: 0px;\n$spacing-px: 1px;\n$spacing-0\\.5: 2px;\n"));
    }

    #[test]
    fn scss_without_foundations_is_unchanged() {
        let scss = render(ExportFormat::Scss, &dotted());
        assert!(!scss.contains("FOUNDATION"));
        let with = render_with(ExportFormat::Scss, &dotted(), &[FoundationCategory::Motion]);
        assert!(with.starts_with(&scss));
        assert!(with.contains("// FOUNDATION TOKENS\n"));
        assert!(with.ends_with("$easing-spring: cubic-bezier(0.175, 0.885, 0.32, 1.275);\n"));
    }

    #[test]
    fn json_adds_foundation_key() {
        let foundations = [FoundationCategory::Spacing, FoundationCategory::Radius];
        let json: Value = serde_json::from_str(&render_with(ExportFormat::Json, &dotted(), &foundations)).unwrap();
        assert_eq!(json["foundation"]["spacing"]["spacing-4"], "16px");
        assert_eq!(json["foundation"]["radius"]["radius-full"], "9999px");
        assert!(json["foundation"].get("motion").is_none());
        assert_eq!(json["feedback"]["success"]["bg"]["$value"], "#198754");

        let bare: Value = serde_json::from_str(&render(ExportFormat::Json, &dotted())).unwrap();
        assert!(bare.get("foundation").is_none());
    }

    #[test]
    fn dtcg_adds_category_groups() {
        let foundations = [FoundationCategory::Typography];
        let json: Value = serde_json::from_str(&render_with(ExportFormat::Dtcg, &dotted(), &foundations)).unwrap();
        let typography = &json["typography"];
        assert_eq!(typography["$description"], "Type scale, weights, and line heights");
        assert_eq!(typography["font-size-base"]["$value"], "1rem");
        assert_eq!(typography["font-size-base"]["$type"], "dimension");
        assert_eq!(typography["font-size-base"]["$description"], "16px - Base/body text");
        assert_eq!(typography["font-weight-bold"]["$type"], "fontWeight");
        assert!(typography["font-weight-bold"].get("$description").is_none());
    }

    #[test]
    fn tailwind_and_js_ignore_foundations() {
        let all = FoundationCategory::ALL;
        for format in [ExportFormat::Tailwind, ExportFormat::Js] {
            assert_eq!(render_with(format, &dotted(), &all), render(format, &dotted()));
        }
    }
}
