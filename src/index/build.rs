//! Index building
//!
//! The build phase runs traversal, suffix generation, the parallel sort and
//! compression in one pass and hands back an immutable [`Index`]. Only the
//! sort is concurrent; everything else is a single sequential scan.

use super::compress::compress;
use super::sort::parallel_sort;
use super::suffix::suffixes_of;
use super::types::{Index, IndexConfig, PathId, SuffixEntry};
use crate::utils::filename_bytes;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Collect every non-directory path under `root`, breadth-first.
///
/// Encounter order is the path's identity: position `i` in the returned
/// list is [`PathId`] `i` for the lifetime of the index. Paths are
/// canonicalized so the index holds absolute names that stay resolvable
/// from any working directory at query time.
pub fn traverse_directory(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut directories = VecDeque::new();
    directories.push_back(root.to_path_buf());

    while let Some(dir) = directories.pop_front() {
        let reader = fs::read_dir(&dir)
            .with_context(|| format!("failed to read directory \"{}\"", dir.display()))?;
        for entry in reader {
            let entry =
                entry.with_context(|| format!("failed to read entry in \"{}\"", dir.display()))?;
            let path = entry.path();
            let canonical = path
                .canonicalize()
                .with_context(|| format!("failed to resolve \"{}\"", path.display()))?;
            if path.is_dir() {
                directories.push_back(canonical);
            } else {
                paths.push(canonical);
            }
        }
    }

    Ok(paths)
}

/// Build a complete index for the tree rooted at `root`.
pub fn build_index(root: &Path, config: &IndexConfig, silent: bool) -> Result<Index> {
    let spinner = if silent { None } else { Some(build_spinner()) };

    if let Some(s) = &spinner {
        s.set_message("Discovering files...");
    }
    let paths = traverse_directory(root)?;

    if let Some(s) = &spinner {
        s.set_message(format!("Sorting suffixes of {} filenames...", paths.len()));
    }
    let index = build_from_paths(paths, config);

    if let Some(s) = &spinner {
        s.finish_and_clear();
    }
    Ok(index)
}

/// Build the suffix index over an already-collected path table.
///
/// The table's order is preserved verbatim; owner ids in the resulting
/// entries are positions into it.
pub fn build_from_paths(paths: Vec<PathBuf>, config: &IndexConfig) -> Index {
    let mut entries: Vec<SuffixEntry> = Vec::new();
    for (id, path) in paths.iter().enumerate() {
        let name = filename_bytes(path);
        entries.extend(suffixes_of(&name, id as PathId));
    }

    parallel_sort(&mut entries, config.sort_cutoff);
    let entries = compress(entries);

    Index { paths, entries }
}

fn build_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
