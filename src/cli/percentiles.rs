//! Percentiles command implementation.
//!
//! Slices the ordered distribution into equal percent steps and prints the
//! average hue and summed count of each slice.

use std::path::PathBuf;

use clap::Args;

use crate::analysis::{percentile_slices, to_ordered_sequence};
use crate::error::Result;
use crate::output::display_path;
use crate::render::{percentile_lines, to_json, PercentilesReport, Summary};
use crate::types::SortKey;

use super::{emit, load_distribution, Context, Format};

/// Show average hues over percentile slices of the distribution
#[derive(Args, Debug)]
pub struct PercentilesArgs {
    /// Image file to analyze
    #[arg(required = true)]
    pub image: PathBuf,

    /// Width of each slice in percent (1-100)
    #[arg(long, short)]
    pub increment: Option<u32>,

    /// Order to slice in (default: both, count first)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Drop hues seen this often or less from the count ordering
    #[arg(long)]
    pub min_count: Option<u64>,

    /// Width of each colour bar
    #[arg(long)]
    pub bar_width: Option<usize>,

    /// Round hues to multiples of this many degrees before counting
    #[arg(long)]
    pub hue_step: Option<f32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn run(args: PercentilesArgs, ctx: &Context) -> Result<()> {
    emit(&report(&args, ctx)?);
    Ok(())
}

/// Build the report lines (text) or a single JSON array of reports.
pub fn report(args: &PercentilesArgs, ctx: &Context) -> Result<Vec<String>> {
    let config = &ctx.config;
    let increment = args.increment.unwrap_or(config.increment);
    let min_count = args.min_count.unwrap_or(config.min_count);
    let bar_width = args.bar_width.unwrap_or(config.bar_width);
    let keys = match args.sort {
        Some(key) => vec![key],
        None => vec![SortKey::Count, SortKey::Hue],
    };

    let map = load_distribution(&args.image, args.hue_step.or(config.hue_step), &ctx.printer)?;
    let by_count = to_ordered_sequence(&map, SortKey::Count, min_count);
    let summary = Summary::new(&map, &by_count, min_count);

    let mut sections = Vec::new();
    for key in keys {
        let seq = match key {
            SortKey::Count => by_count.clone(),
            SortKey::Hue => to_ordered_sequence(&map, SortKey::Hue, min_count),
        };
        // An explicit --sort count still fails on an empty filter
        if seq.is_empty() && args.sort.is_none() {
            ctx.printer.warning(
                "Skipping",
                &format!("count ordering, no hue seen more than {} times", min_count),
            );
            continue;
        }
        sections.push((key, percentile_slices(&seq, increment)?));
    }

    match args.format {
        Format::Text => {
            let mut lines = summary.lines();
            for (key, slices) in &sections {
                let sorted_by = match key {
                    SortKey::Count => "count",
                    SortKey::Hue => "hue",
                };
                lines.push(String::new());
                lines.extend(percentile_lines(slices, sorted_by, bar_width, ctx.colour));
            }
            Ok(lines)
        }
        Format::Json => {
            let image = display_path(&args.image);
            let reports: Vec<PercentilesReport> = sections
                .iter()
                .map(|(key, slices)| PercentilesReport {
                    image: image.clone(),
                    summary: &summary,
                    sorted_by: *key,
                    increment,
                    slices,
                })
                .collect();
            Ok(vec![to_json(&reports)?])
        }
    }
}
