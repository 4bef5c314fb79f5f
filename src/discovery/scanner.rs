//! File system scanner for batch analysis.
//!
//! Recursively walks a directory and collects every file whose extension is
//! one of the configured image types.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::Config;

/// Find image files under `root`, sorted by path.
///
/// A `root` that is itself an image file yields just that file. Missing
/// paths yield nothing.
pub fn scan_images(root: &Path, config: &Config) -> Vec<PathBuf> {
    if root.is_file() {
        return if config.is_image(root) {
            vec![root.to_path_buf()]
        } else {
            vec![]
        };
    }

    let mut images: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| config.is_image(p) && !config.is_excluded(p))
        .collect();

    images.sort();
    images
}
