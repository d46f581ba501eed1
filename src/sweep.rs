//! The check-then-delete-then-count engine.
//!
//! One pass over a filename list: join each name onto the target
//! directory, delete the file if it exists, and tally the outcome. A
//! missing file is not an error. A failed deletion is reported and
//! counted, and the pass continues with the next file.

use crate::output;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Whether a sweep actually deletes files or only reports what it would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    /// Delete files on disk.
    Delete,
    /// Report without touching the filesystem.
    DryRun,
}

/// Outcome counters for one sweep pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Files that existed and were deleted (or would be, in a dry run).
    pub deleted: usize,
    /// Listed files that were not present.
    pub not_found: usize,
    /// Deletions that failed with an I/O or permission error.
    pub failed: usize,
}

impl SweepReport {
    /// Folds another report's counters into this one.
    pub fn absorb(&mut self, other: Self) {
        self.deleted += other.deleted;
        self.not_found += other.not_found;
        self.failed += other.failed;
    }
}

/// Sweeps one directory: for each listed filename, delete the file if it
/// exists and count the outcome.
///
/// Per-file failures never abort the pass; they are printed as warnings
/// and counted in [`SweepReport::failed`]. Files in `dir` that are not
/// named in `files` are left untouched.
#[must_use]
pub fn sweep_files(dir: &Path, files: &[&str], mode: SweepMode) -> SweepReport {
    let mut report = SweepReport::default();

    for filename in files {
        let path = dir.join(filename);

        if !path.exists() {
            debug!(file = %path.display(), "not found");
            output::verbose(&format!("  not found: {filename}"));
            report.not_found += 1;
            continue;
        }

        if mode == SweepMode::DryRun {
            println!("  {} {}", "would remove:".yellow(), filename);
            report.deleted += 1;
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(file = %path.display(), "removed");
                println!("  {} {}", "removed:".red(), filename);
                report.deleted += 1;
            }
            Err(e) => {
                output::warning(&format!("Failed to remove {}: {e}", path.display()));
                report.failed += 1;
            }
        }
    }

    report
}
