//! Scan command implementation.
//!
//! Analyzes every image under a directory and prints one summary line per
//! image. Images that fail to load are reported and skipped.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::analysis::{average_hue, group_by_hue_buckets, to_ordered_sequence, HueGroup};
use crate::discovery::scan_images;
use crate::error::{HueError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::colour_bar;
use crate::types::SortKey;

use super::{emit, load_distribution, Context};

/// Summarize every image under a directory
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory (or single image) to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Width of each hue group in degrees, used to find the dominant group
    #[arg(long, short, allow_negative_numbers = true)]
    pub size: Option<i32>,

    /// Round hues to multiples of this many degrees before counting
    #[arg(long)]
    pub hue_step: Option<f32>,
}

/// Headline result for one scanned image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSummary {
    pub path: PathBuf,
    pub pixels: u64,
    pub distinct: usize,
    pub average_hue: f32,
    pub dominant: HueGroup,
}

pub fn run(args: ScanArgs, ctx: &Context) -> Result<()> {
    let summaries = scan(&args, ctx)?;
    let lines: Vec<String> = summaries.iter().map(|s| summary_line(s, ctx.colour)).collect();
    emit(&lines);
    Ok(())
}

/// Analyze every image found under `args.path`.
///
/// Fails only when images were found but none of them could be analyzed.
pub fn scan(args: &ScanArgs, ctx: &Context) -> Result<Vec<ImageSummary>> {
    let config = &ctx.config;
    let group_size = args.size.unwrap_or(config.group_size);
    let hue_step = args.hue_step.or(config.hue_step);
    let printer = &ctx.printer;

    printer.status("Scanning", &display_path(&args.path));
    let paths = scan_images(&args.path, config);
    if paths.is_empty() {
        printer.warning("Warning", "no images found");
        return Ok(vec![]);
    }

    let mut summaries = Vec::new();
    let mut failed = 0;
    for path in &paths {
        match summarize(path, group_size, hue_step, printer) {
            Ok(summary) => summaries.push(summary),
            // A bad group size fails every image the same way
            Err(e @ HueError::InvalidRange { .. }) => return Err(e),
            Err(e) => {
                failed += 1;
                printer.warning("Skipping", &e.to_string());
            }
        }
    }

    if summaries.is_empty() {
        return Err(HueError::InvalidImage {
            message: format!(
                "None of the {} could be analyzed",
                plural(paths.len(), "image", "images")
            ),
            help: Some("Check that the files are readable images".to_string()),
        });
    }

    let finished = plural(summaries.len(), "image", "images");
    if failed > 0 {
        printer.info("Finished", &format!("{} ({} skipped)", finished, failed));
    } else {
        printer.info("Finished", &finished);
    }

    Ok(summaries)
}

fn summarize(
    path: &Path,
    group_size: i32,
    hue_step: Option<f32>,
    printer: &Printer,
) -> Result<ImageSummary> {
    let map = load_distribution(path, hue_step, printer)?;
    let by_hue = to_ordered_sequence(&map, SortKey::Hue, 0);

    let (average, pixels) = average_hue(&by_hue)?;
    let groups = group_by_hue_buckets(&by_hue, group_size)?;
    // First largest group wins ties
    let dominant = groups
        .iter()
        .rev()
        .max_by_key(|g| g.count)
        .cloned()
        .ok_or(HueError::EmptyInput { operation: "dominant group" })?;

    Ok(ImageSummary {
        path: path.to_path_buf(),
        pixels,
        distinct: map.len(),
        average_hue: average.hue,
        dominant,
    })
}

fn summary_line(summary: &ImageSummary, colour: bool) -> String {
    let dominant = &summary.dominant;
    let reset = if colour { crate::render::ANSI_RESET } else { "" };
    format!(
        "{}  {} px  {:>6.1}° avg  dominant {}-{}° ({:.0}%)  {}{}",
        display_path(&summary.path),
        summary.pixels,
        summary.average_hue,
        dominant.lower,
        dominant.upper,
        dominant.count as f64 * 100.0 / summary.pixels as f64,
        colour_bar(dominant.average.hue, 6, dominant.average_value, colour),
        reset
    )
}
