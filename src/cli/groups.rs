//! Groups command implementation.
//!
//! Loads an image, counts its hues and prints them grouped into fixed-width
//! hue ranges with proportional colour bars.

use std::path::PathBuf;

use clap::Args;

use crate::analysis::{group_by_hue_buckets, to_ordered_sequence};
use crate::error::Result;
use crate::output::display_path;
use crate::render::{group_lines, to_json, GroupsReport, Summary};
use crate::types::SortKey;

use super::{emit, load_distribution, Context, Format};

/// Show hue groups of fixed width with proportional colour bars
#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Image file to analyze
    #[arg(required = true)]
    pub image: PathBuf,

    /// Width of each group in degrees (1-360)
    #[arg(long, short, allow_negative_numbers = true)]
    pub size: Option<i32>,

    /// Maximum width of a colour bar
    #[arg(long)]
    pub bar_width: Option<usize>,

    /// Only count hues seen more often than this in the summary
    #[arg(long)]
    pub min_count: Option<u64>,

    /// Round hues to multiples of this many degrees before counting
    #[arg(long)]
    pub hue_step: Option<f32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn run(args: GroupsArgs, ctx: &Context) -> Result<()> {
    emit(&report(&args, ctx)?);
    Ok(())
}

/// Build the report lines (text) or a single JSON document.
pub fn report(args: &GroupsArgs, ctx: &Context) -> Result<Vec<String>> {
    let config = &ctx.config;
    let group_size = args.size.unwrap_or(config.group_size);
    let bar_width = args.bar_width.unwrap_or(config.bar_width);
    let min_count = args.min_count.unwrap_or(config.min_count);

    let map = load_distribution(&args.image, args.hue_step.or(config.hue_step), &ctx.printer)?;

    let by_count = to_ordered_sequence(&map, SortKey::Count, min_count);
    let by_hue = to_ordered_sequence(&map, SortKey::Hue, min_count);
    let summary = Summary::new(&map, &by_count, min_count);

    let groups = group_by_hue_buckets(&by_hue, group_size)?;
    let shown_size = group_size.min(360);
    if shown_size != group_size {
        ctx.printer
            .warning("Clamped", &format!("group size {}° to {}°", group_size, shown_size));
    }

    match args.format {
        Format::Text => {
            let mut lines = summary.lines();
            lines.push(String::new());
            lines.extend(group_lines(&groups, shown_size, bar_width, ctx.colour));
            Ok(lines)
        }
        Format::Json => {
            let json = to_json(&GroupsReport {
                image: display_path(&args.image),
                summary: &summary,
                group_size: shown_size,
                groups: &groups,
            })?;
            Ok(vec![json])
        }
    }
}
