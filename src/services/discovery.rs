//! Image discovery: recursive directory walk filtered to raster images.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Filenames the advisor and the progressive preparer handle.
pub fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\.jpeg)|(\.jpg)|(\.png)$").expect("image pattern is a valid regex")
    })
}

/// Recursively collect files under `root` whose path matches `filter`.
///
/// Directory entries are visited in name order. A missing or unreadable root
/// is not an error: it is logged and yields an empty list.
pub fn find_files(root: &Path, filter: &Regex) -> Vec<PathBuf> {
    let mut results = Vec::new();

    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %root.display(), error = %e, "folder not found");
            return results;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!(path = %root.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .collect();
    paths.sort();

    for path in paths {
        // Symlinks are not followed
        let is_dir = std::fs::symlink_metadata(&path)
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        if is_dir {
            results.extend(find_files(&path, filter));
        } else if filter.is_match(&path.to_string_lossy()) {
            results.push(path);
        }
    }

    results
}

/// Recursively collect `jpg`/`jpeg`/`png` files under `root`.
pub fn find_images(root: &Path) -> Vec<PathBuf> {
    let images = find_files(root, image_pattern());
    tracing::debug!(root = %root.display(), count = images.len(), "Discovered images");
    images
}

/// Drop generated progressive placeholders from a list of images.
pub fn exclude_progressive(paths: Vec<PathBuf>, marker: &str) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| !path.to_string_lossy().contains(marker))
        .collect()
}
