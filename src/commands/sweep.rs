//! The sweep command: delete every manifest file that exists on disk.

use crate::SweepContext;
use crate::sweep::{SweepMode, SweepReport, sweep_files};
use anyhow::Result;
use colored::Colorize;

/// Executes the sweep: one pass per target, then a run summary.
///
/// Per-file deletion failures are warnings, not errors; a completed run
/// returns `Ok` even when some deletions failed.
///
/// # Errors
///
/// This command has no failure mode of its own once the context is built;
/// the `Result` mirrors the other command entry points.
pub fn execute(ctx: &SweepContext, dry_run: bool) -> Result<()> {
    if dry_run {
        super::print_info("Dry run mode - no files will be removed");
    }

    let mode = if dry_run {
        SweepMode::DryRun
    } else {
        SweepMode::Delete
    };

    let mut total = SweepReport::default();

    for target in ctx.targets() {
        println!(
            "{} {} in: {}",
            "Processing".dimmed().bold(),
            target.label,
            target.dir.display()
        );

        let report = sweep_files(&target.dir, target.files, mode);
        super::print_info(&format!(
            "{}: {} deleted, {} not found",
            target.label, report.deleted, report.not_found
        ));

        total.absorb(report);
    }

    println!();
    if dry_run {
        super::print_info(&format!(
            "{} file(s) would be deleted (dry run)",
            total.deleted
        ));
    } else {
        super::print_success(&format!(
            "Sweep complete: {} file(s) deleted",
            total.deleted
        ));
    }

    if total.failed > 0 {
        super::print_warning(&format!("Failed to remove {} file(s)", total.failed));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ICONS_SUBDIR, IMAGES_SUBDIR, UNUSED_ICONS, UNUSED_IMAGES};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn setup_frontend(root: &std::path::Path) -> Result<(PathBuf, PathBuf)> {
        let images = root.join(IMAGES_SUBDIR);
        let icons = root.join(ICONS_SUBDIR);
        fs::create_dir_all(&images)?;
        fs::create_dir_all(&icons)?;
        Ok((images, icons))
    }

    fn test_context(root: &std::path::Path) -> Result<SweepContext> {
        SweepContext::new_with_config_path(
            Some(root.to_path_buf()),
            root.join("config.toml"),
        )
    }

    #[test]
    fn test_execute_deletes_listed_and_keeps_rest() -> Result<()> {
        let temp = tempdir()?;
        let (images, icons) = setup_frontend(temp.path())?;

        fs::write(images.join(UNUSED_IMAGES[0]), b"x")?;
        fs::write(icons.join(UNUSED_ICONS[0]), b"x")?;
        fs::write(images.join("in-use.png"), b"x")?;

        let ctx = test_context(temp.path())?;
        execute(&ctx, false)?;

        assert!(!images.join(UNUSED_IMAGES[0]).exists());
        assert!(!icons.join(UNUSED_ICONS[0]).exists());
        assert!(images.join("in-use.png").exists());

        Ok(())
    }

    #[test]
    fn test_execute_dry_run_deletes_nothing() -> Result<()> {
        let temp = tempdir()?;
        let (images, _icons) = setup_frontend(temp.path())?;

        fs::write(images.join(UNUSED_IMAGES[0]), b"x")?;

        let ctx = test_context(temp.path())?;
        execute(&ctx, true)?;

        assert!(images.join(UNUSED_IMAGES[0]).exists());

        Ok(())
    }

    #[test]
    fn test_execute_on_empty_tree_is_ok() -> Result<()> {
        let temp = tempdir()?;

        // No assets/ directories at all; every file counts as not found.
        let ctx = test_context(temp.path())?;
        execute(&ctx, false)?;

        Ok(())
    }
}
