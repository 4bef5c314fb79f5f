//! Init command implementation.
//!
//! Writes a `hues.yaml` holding the default analysis settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Config, CONFIG_FILENAME};
use crate::error::{HueError, Result};
use crate::output::{display_path, Printer};

/// Write a default hues.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing hues.yaml
    #[arg(long)]
    pub force: bool,
}

const HEADER: &str = "\
# hues configuration
#
# group_size: width of each hue group in degrees (1-360)
# bar_width:  maximum colour bar width in characters
# min_count:  hues seen this often or less are left out of count orderings
# increment:  percent step for `hues percentiles`
# hue_step:   round hues to this many degrees before counting (null = exact)
";

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(HueError::Io {
            path: config_path,
            message: format!("{} already exists", CONFIG_FILENAME),
        });
    }

    let body = serde_yaml::to_string(&Config::default()).map_err(|e| HueError::Parse {
        message: format!("Failed to serialize config: {}", e),
        help: None,
    })?;

    fs::write(&config_path, format!("{}\n{}", HEADER, body)).map_err(|e| HueError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
