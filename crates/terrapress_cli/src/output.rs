//! Output sink: destination directory handling and file writes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use terrapress_render::DocumentSet;

/// Whether the destination directory is ready to receive files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Ready,
    Declined,
}

/// Create the destination directory, asking before destroying an
/// existing one. Declining leaves the directory untouched.
pub fn prepare_directory(dir: &Path) -> Result<DirectoryStatus> {
    if dir.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Directory '{}' already exists. Overwrite?",
                dir.display()
            ))
            .default(false)
            .interact()
            .context("Failed to read overwrite confirmation")?;

        if !overwrite {
            return Ok(DirectoryStatus::Declined);
        }

        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove directory '{}'", dir.display()))?;
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    Ok(DirectoryStatus::Ready)
}

/// Write every document of the set into the directory.
pub fn write_documents(documents: &DocumentSet, dir: &Path) -> Result<()> {
    for (name, content) in documents.iter() {
        let path = dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        println!("Created: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use terrapress_config::ConfigSet;
    use terrapress_render::DocumentAssembler;

    #[test]
    fn test_write_documents_creates_all_three_files() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("terraform-out");
        fs::create_dir(&target).unwrap();

        let mut config = ConfigSet::defaults();
        config.apply_derivations();
        let deployment = DocumentAssembler::new()
            .assemble("cost-efficient", &config)
            .unwrap();

        write_documents(&deployment.documents, &target).unwrap();

        for name in ["main.tf", "variables.tf", "terraform.tfvars"] {
            let path = target.join(name);
            assert!(path.exists(), "{} missing", name);
            assert!(!fs::read_to_string(path).unwrap().is_empty());
        }
    }

    #[test]
    fn test_prepare_directory_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("fresh");
        assert_eq!(
            prepare_directory(&target).unwrap(),
            DirectoryStatus::Ready
        );
        assert!(target.is_dir());
    }
}
