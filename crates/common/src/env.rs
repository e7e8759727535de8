//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Ensure the parent directories of the given data files exist.
/// Missing files are only reported; the store surfaces them per request.
pub async fn ensure_data_dirs<P: AsRef<Path>>(files: &[P]) -> anyhow::Result<()> {
    for file in files {
        let file = file.as_ref();
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
        if tokio::fs::metadata(file).await.is_err() {
            warn!(file = %file.display(), "data file not found; requests touching it will fail until it exists");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parent_dirs() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("ensure_dirs_{}", uuid::Uuid::new_v4()));
        let file = root.join("nested").join("users.json");
        ensure_data_dirs(&[&file]).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_is_fine() -> anyhow::Result<()> {
        ensure_data_dirs(&["users-that-do-not-exist.json"]).await?;
        Ok(())
    }
}
