//! Finding, loading and configuring the images to analyze.
//!
//! # Example
//!
//! ```ignore
//! use hues::discovery::{load_config, scan_images};
//!
//! let config = load_config(None)?;
//! for path in scan_images("./photos".as_ref(), &config) {
//!     let image = hues::discovery::load_image(&path)?;
//! }
//! ```

mod config;
mod loader;
mod scanner;

use std::path::Path;

use crate::error::Result;

pub use config::Config;
pub use loader::load_image;
pub use scanner::scan_images;

/// The name of the config file.
pub const CONFIG_FILENAME: &str = "hues.yaml";

/// Load the config file.
///
/// An explicit path must exist. Without one, `hues.yaml` in the current
/// directory is used if present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default(Path::new(CONFIG_FILENAME)),
    }
}
