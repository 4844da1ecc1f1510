use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shared::domain::Matrix;
use tempfile::NamedTempFile;

/// File-backed store for the single global pricing document.
///
/// The matrix is kept as one JSON file at `data_path` and mirrored to
/// `public_path` so the mirror can be served as a static asset. Both writes go
/// through a temp-file-then-rename step, so readers never observe a partially
/// written document and concurrent saves resolve as whole-file
/// last-writer-wins.
#[derive(Debug, Clone)]
pub struct PricingStore {
    data_path: PathBuf,
    public_path: PathBuf,
}

impl PricingStore {
    pub fn new(data_path: impl Into<PathBuf>, public_path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            data_path: data_path.into(),
            public_path: public_path.into(),
        };
        ensure_parent_dir_exists(&store.data_path)?;
        ensure_parent_dir_exists(&store.public_path)?;
        Ok(store)
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn public_path(&self) -> &Path {
        &self.public_path
    }

    /// Loads the last saved matrix, or `None` when nothing has been saved yet.
    pub async fn load(&self) -> Result<Option<Matrix>> {
        let bytes = match tokio::fs::read(&self.data_path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read pricing file '{}'", self.data_path.display())
                })
            }
        };
        let matrix = serde_json::from_slice(&bytes).with_context(|| {
            format!(
                "pricing file '{}' holds invalid JSON",
                self.data_path.display()
            )
        })?;
        Ok(Some(matrix))
    }

    /// Replaces the stored matrix with `matrix`, overwriting any prior content.
    /// No merge, no backup of the previous value.
    pub async fn save(&self, matrix: &Matrix) -> Result<()> {
        let bytes = serde_json::to_vec(matrix).context("failed to serialize pricing matrix")?;
        write_atomic(self.data_path.clone(), bytes.clone()).await?;
        write_atomic(self.public_path.clone(), bytes).await?;
        Ok(())
    }
}

fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for pricing file '{}'",
            parent.display(),
            path.display()
        )
    })
}

/// Writes `bytes` to a unique temp file next to `path`, then renames it into
/// place. Rename within one directory is atomic, so a crash mid-write leaves
/// the previous document untouched.
async fn write_atomic(path: PathBuf, bytes: Vec<u8>) -> Result<()> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(parent).with_context(|| {
            format!("failed to create temp file in '{}'", parent.display())
        })?;
        tmp.write_all(&bytes)
            .context("failed to write pricing document")?;
        tmp.as_file()
            .sync_all()
            .context("failed to flush pricing document")?;
        tmp.persist(&path)
            .with_context(|| format!("failed to replace '{}'", path.display()))?;
        Ok(())
    })
    .await
    .context("pricing write task panicked")?
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
