pub mod completions;
pub mod groups;
pub mod init;
pub mod percentiles;
pub mod scan;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::analysis::{build_distribution_with, Quantization};
use crate::discovery::{load_config, load_image, Config};
use crate::error::Result;
use crate::output::{display_path, plural, stdout_color, Printer};
use crate::types::HueFrequencyMap;

/// hues - Measure and rank the hues of an image
#[derive(Parser, Debug)]
#[command(name = "hues")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of ./hues.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colour in report output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show hue groups of fixed width with proportional colour bars
    Groups(groups::GroupsArgs),

    /// Show average hues over percentile slices of the distribution
    Percentiles(percentiles::PercentilesArgs),

    /// Summarize every image under a directory
    Scan(scan::ScanArgs),

    /// Write a default hues.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Report output format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub printer: Printer,
    /// Whether reports on stdout carry ANSI colour.
    pub colour: bool,
}

impl Context {
    /// Resolve config and terminal settings from the global flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            config: load_config(cli.config.as_deref())?,
            printer: Printer::new(),
            colour: stdout_color(cli.no_color),
        })
    }

    /// A context with the given config, no colour anywhere.
    pub fn plain(config: Config) -> Self {
        Self {
            config,
            printer: Printer::plain(),
            colour: false,
        }
    }
}

/// Decode an image and count its pixels by HSV.
pub(crate) fn load_distribution(
    path: &Path,
    hue_step: Option<f32>,
    printer: &Printer,
) -> Result<HueFrequencyMap> {
    let quantization = Quantization::from_step(hue_step)?;

    printer.status("Loading", &display_path(path));
    let image = load_image(path)?;
    let map = build_distribution_with(&image, quantization)?;

    printer.info(
        "Analyzed",
        &format!(
            "{}x{} ({})",
            image.width(),
            image.height(),
            plural(map.len(), "distinct colour", "distinct colours")
        ),
    );

    Ok(map)
}

/// Print report lines to stdout.
pub(crate) fn emit(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
