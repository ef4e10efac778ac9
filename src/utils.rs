//! Utility functions

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the base cache directory for zephyr
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zephyr")
}

/// Get the icons cache directory
pub fn icons_cache_dir() -> PathBuf {
    cache_dir().join("icons")
}

/// Cache file name for an icon code. Only ASCII alphanumerics survive so a
/// hostile code from the API cannot escape the cache directory.
pub fn icon_file_name(icon_code: &str) -> String {
    let stem: String = icon_code
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if stem.is_empty() {
        "icon_unknown.png".to_string()
    } else {
        format!("icon_{}.png", stem)
    }
}

/// Write icon bytes into `dir`, replacing any previous file for the same code
pub async fn save_icon(dir: &Path, icon_code: &str, bytes: &[u8]) -> Result<PathBuf> {
    if bytes.is_empty() {
        anyhow::bail!("Empty icon response");
    }

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(icon_file_name(icon_code));
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Saved icon to {}", path.display());
    Ok(path)
}

/// Read the logo image configured in the display settings
pub async fn load_logo(path: &Path) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if bytes.is_empty() {
        anyhow::bail!("{} is empty", path.display());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_file_name() {
        assert_eq!(icon_file_name("10d"), "icon_10d.png");
        assert_eq!(icon_file_name("../../etc"), "icon_etc.png");
        assert_eq!(icon_file_name("/"), "icon_unknown.png");
    }

    #[tokio::test]
    async fn test_save_icon_creates_dir_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("icons");

        let first = save_icon(&dir, "01d", b"first").await.unwrap();
        assert_eq!(first, dir.join("icon_01d.png"));
        assert_eq!(std::fs::read(&first).unwrap(), b"first");

        let second = save_icon(&dir, "01d", b"second").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_save_icon_rejects_empty_body() {
        let root = tempfile::tempdir().unwrap();
        assert!(save_icon(root.path(), "01d", &[]).await.is_err());
    }

    #[tokio::test]
    async fn test_load_logo() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("logo.png");

        let missing = load_logo(&path).await.unwrap_err();
        assert!(missing.to_string().contains("logo.png"));

        std::fs::write(&path, b"").unwrap();
        assert!(load_logo(&path).await.is_err());

        std::fs::write(&path, b"\x89PNG").unwrap();
        assert_eq!(load_logo(&path).await.unwrap(), b"\x89PNG");
    }
}
