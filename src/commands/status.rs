//! The status command: report which manifest files are still on disk.

use crate::SweepContext;
use anyhow::Result;
use colored::Colorize;

/// Reports, per target, which listed files are present (and would be
/// deleted by `sweep`) and how many are already gone. Never modifies the
/// filesystem.
///
/// # Errors
///
/// This command has no failure mode of its own once the context is built;
/// the `Result` mirrors the other command entry points.
pub fn execute(ctx: &SweepContext) -> Result<()> {
    let mut total_present = 0;

    for target in ctx.targets() {
        println!(
            "{} {} in: {}",
            "Checking".dimmed().bold(),
            target.label,
            target.dir.display()
        );

        let mut present = 0;
        for filename in target.files {
            if target.dir.join(filename).exists() {
                println!("  {} {}", "present:".green(), filename);
                present += 1;
            }
        }

        super::print_info(&format!(
            "{}: {} present, {} already gone",
            target.label,
            present,
            target.files.len() - present
        ));
        total_present += present;
    }

    println!();
    super::print_info(&format!(
        "{total_present} file(s) would be deleted by 'sweep'"
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{IMAGES_SUBDIR, UNUSED_IMAGES};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_status_never_deletes() -> Result<()> {
        let temp = tempdir()?;
        let images = temp.path().join(IMAGES_SUBDIR);
        fs::create_dir_all(&images)?;
        fs::write(images.join(UNUSED_IMAGES[0]), b"x")?;

        let ctx = SweepContext::new_with_config_path(
            Some(temp.path().to_path_buf()),
            temp.path().join("config.toml"),
        )?;
        execute(&ctx)?;

        assert!(images.join(UNUSED_IMAGES[0]).exists());

        Ok(())
    }

    #[test]
    fn test_status_on_missing_tree_is_ok() -> Result<()> {
        let temp = tempdir()?;

        let ctx = SweepContext::new_with_config_path(
            Some(temp.path().join("nowhere")),
            temp.path().join("config.toml"),
        )?;
        execute(&ctx)?;

        Ok(())
    }
}
