//! hyper-gen: writes the remapping daemon's rule file.
//!
//! # Usage
//!
//! ```text
//! hyper-gen [OPTIONS]
//!
//! Options:
//!   -c, --config <PATH>        Config file [default: platform config dir]
//!   -o, --output <PATH>        Output file, repeatable [default: from config]
//!       --stdout               Print the document instead of writing files
//!       --check                Build and validate only
//!       --relacon-map <PATH>   Also write the trackball button map
//!   -v, --verbose              Debug logging
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                | Description                  |
//! |-------------------------|------------------------------|
//! | `HYPER_GEN_CONFIG`      | Config file path             |
//! | `HYPER_GEN_RELACON_MAP` | Trackball map output path    |
//! | `RUST_LOG`              | Overrides the log level      |
//!
//! Logs go to stderr so `--stdout` output can be piped.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hyper_core::{render, validate};
use hyper_gen::application::{build_document, write_outputs, ConfigSink};
use hyper_gen::infrastructure::sink::FsSink;
use hyper_gen::infrastructure::storage::config::{expand_home, load_config, GenConfig};
use hyper_gen::rules::relacon::render_relacon_map;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Generates the remapping daemon's `complex_modifications` rule file.
#[derive(Debug, Parser)]
#[command(
    name = "hyper-gen",
    about = "Generates Hyper-key, mouse and trackball remapping rules",
    version
)]
struct Cli {
    /// Config file to read instead of the platform default.
    ///
    /// An explicitly named file must exist.
    #[arg(short, long, value_name = "PATH", env = "HYPER_GEN_CONFIG")]
    config: Option<PathBuf>,

    /// Output file.  May be given more than once; replaces the config's
    /// `[output] paths` when present.
    #[arg(short, long = "output", value_name = "PATH")]
    outputs: Vec<PathBuf>,

    /// Print the rendered document to stdout instead of writing files.
    #[arg(long, conflicts_with = "check")]
    stdout: bool,

    /// Build and validate the document without writing anything.
    #[arg(long)]
    check: bool,

    /// Also write the trackball button map to this path.
    #[arg(long, value_name = "PATH", env = "HYPER_GEN_RELACON_MAP")]
    relacon_map: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Output paths: the command line wins over the config file.
    fn output_paths(&self, config: &GenConfig) -> Vec<PathBuf> {
        if self.outputs.is_empty() {
            config.output_paths()
        } else {
            self.outputs.iter().map(|p| expand_home(p)).collect()
        }
    }

    fn relacon_map_path(&self, config: &GenConfig) -> Option<PathBuf> {
        self.relacon_map
            .as_ref()
            .or(config.relacon_map.as_ref())
            .map(|p| expand_home(p))
    }

    fn log_level<'a>(&self, config: &'a GenConfig) -> &'a str {
        if self.verbose {
            "debug"
        } else {
            &config.log_level
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the config's level, or debug with --verbose.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level(&config))),
        )
        .init();

    // ── Build and validate ────────────────────────────────────────────────────
    let options = config.rule_set_options();
    if options.mouse.is_none() {
        warn!("mouse disabled in config; mouse rules left out");
    }
    if options.relacon.is_none() {
        warn!("trackball disabled in config; trackball rules left out");
    }

    let document = build_document(&options).context("failed to build rules")?;
    validate(&document).context("generated document failed validation")?;
    let rendered = render(&document).context("failed to render document")?;

    if cli.check {
        info!(
            manipulators = document.manipulator_count(),
            "document is valid; nothing written"
        );
        return Ok(());
    }

    // ── Output ────────────────────────────────────────────────────────────────
    let sink = FsSink;
    if cli.stdout {
        println!("{rendered}");
    } else {
        let paths = cli.output_paths(&config);
        let written = write_outputs(&sink, &paths, &rendered).context("failed to write output")?;
        info!(files = written, "done");
    }

    if let Some(path) = cli.relacon_map_path(&config) {
        let map = render_relacon_map().context("failed to render trackball map")?;
        sink.write(&path, &map)
            .with_context(|| format!("failed to write trackball map to {}", path.display()))?;
        info!(path = %path.display(), "wrote trackball map");
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
