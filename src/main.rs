// SPDX-License-Identifier: MIT
//
// swatch: a color design-token generator.
//
// This is the command-line front end that wires the two library crates:
//
//   swatch-color  → OKLCH conversion, tonal scales, WCAG contrast
//   swatch-tokens → project files, slot naming, generation, export
//
// Subcommands:
//
//   generate <project>   load a TOML/JSON project, generate, export
//   scale <hex> <name>   print the 11-stop tonal scale for a seed
//   contrast <a> <b>     print the WCAG ratio and pass/fail levels
//   slots                print the default naming slot order
//   library              list the built-in sample collections
//
// Exported tokens go to stdout (or --out). Contrast warnings and logs go to
// stderr so they never end up inside an export.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use swatch_color::{Rgb, TonalScale, accessibility_level, contrast_ratio, generate_tonal_scale};
use swatch_tokens::{
    ContrastWarning, ExportFormat, FoundationCategory, GeneratedToken, NamingConfig, ProjectConfig, SAMPLE_COLLECTIONS,
    SampleCollection, export,
};

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "swatch", about = "Build and export color design tokens", version)]
struct Cli {
    /// Log debug output to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate tokens from a project file and export them.
    Generate {
        /// Project file (`.toml`, or `.json`).
        project: PathBuf,
        /// Output format.
        #[arg(long, short, value_enum, default_value_t = Format::Dtcg)]
        format: Format,
        /// Write to this file instead of stdout.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the tonal scale for a seed color.
    Scale {
        /// Seed color, `#RRGGBB` or `#RGB`.
        hex: String,
        /// Palette name.
        #[arg(default_value = "custom")]
        name: String,
    },
    /// Print the contrast ratio between two colors.
    Contrast { a: String, b: String },
    /// Print the default naming slots in order.
    Slots,
    /// List the built-in sample collections a project can select.
    Library,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Dtcg,
    Css,
    Scss,
    Json,
    Tailwind,
    Js,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Dtcg => Self::Dtcg,
            Format::Css => Self::Css,
            Format::Scss => Self::Scss,
            Format::Json => Self::Json,
            Format::Tailwind => Self::Tailwind,
            Format::Js => Self::Js,
        }
    }
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn generate(project: &Path, format: ExportFormat, out: Option<&Path>) -> Result<()> {
    let config =
        ProjectConfig::load(project).with_context(|| format!("loading project {}", project.display()))?;
    info!(project = %project.display(), groups = config.groups.len(), "loaded project");

    let generation = config.generate()?;
    for warning in &generation.warnings {
        eprintln!("{}", describe_warning(warning));
    }

    write_export(format, &generation.tokens, &config.naming, &config.foundations, out)?;
    debug!(tokens = generation.tokens.len(), foundations = config.foundations.len(), %format, "export written");
    Ok(())
}

fn write_export(
    format: ExportFormat,
    tokens: &[GeneratedToken],
    naming: &NamingConfig,
    foundations: &[FoundationCategory],
    out: Option<&Path>,
) -> Result<()> {
    match out {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut w = BufWriter::new(file);
            export(&mut w, format, tokens, naming, foundations)?;
            w.flush()?;
        }
        None => {
            let mut w = io::stdout().lock();
            export(&mut w, format, tokens, naming, foundations)?;
            w.flush()?;
        }
    }
    Ok(())
}

fn describe_warning(w: &ContrastWarning) -> String {
    let mut context = format!("{}/{}", w.group_name, w.variant_name);
    for modifier in [&w.scale, &w.state].into_iter().flatten() {
        let _ = write!(context, "/{modifier}");
    }
    format!(
        "warning: {context}: {} on {} is {:.2}:1, below 4.5:1 ({} on {})",
        w.text_token, w.bg_token, w.contrast_ratio, w.text_color, w.bg_color
    )
}

fn format_scale(scale: &TonalScale) -> String {
    let mut out = String::new();
    for stop in &scale.stops {
        let _ = writeln!(out, "{}-{:<4} {}", scale.name, stop.stop, stop.hex);
    }
    out
}

fn format_contrast(a: Rgb, b: Rgb) -> String {
    let ratio = contrast_ratio(a, b);
    let level = accessibility_level(ratio);
    let mark = |pass: bool| if pass { "pass" } else { "fail" };
    format!(
        "{a} / {b}: {ratio:.2}:1 {}\n  normal AA  {}\n  normal AAA {}\n  large AA   {}\n  large AAA  {}\n",
        level.label(),
        mark(level.normal_aa),
        mark(level.normal_aaa),
        mark(level.large_aa),
        mark(level.large_aaa),
    )
}

fn format_slots(naming: &NamingConfig) -> String {
    let mut out = String::new();
    for (i, slot) in naming.slots.iter().enumerate() {
        let on = if slot.enabled { "on " } else { "off" };
        let _ = writeln!(out, "{i:>2} {on} {:<10} {:<10} {}", slot.id, slot.group.label(), slot.description);
    }
    out
}

fn format_library(collections: &[SampleCollection]) -> String {
    let mut out = String::new();
    for collection in collections {
        let palette = collection.palette();
        let _ = writeln!(out, "{:<24} {} {} shades", palette.reference(), collection.base, palette.shades.len());
    }
    out
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { project, format, out } => generate(&project, format.into(), out.as_deref()),
        Command::Scale { hex, name } => {
            let scale = generate_tonal_scale(&hex, &name)?;
            print!("{}", format_scale(&scale));
            Ok(())
        }
        Command::Contrast { a, b } => {
            let a = Rgb::hex(&a).with_context(|| format!("first color '{a}'"))?;
            let b = Rgb::hex(&b).with_context(|| format!("second color '{b}'"))?;
            print!("{}", format_contrast(a, b));
            Ok(())
        }
        Command::Slots => {
            print!("{}", format_slots(&NamingConfig::default()));
            Ok(())
        }
        Command::Library => {
            print!("{}", format_library(&SAMPLE_COLLECTIONS));
            Ok(())
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("swatch: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
