//! Document I/O operations

use crate::types::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Write a finished document to `path`.
///
/// The bytes go to a sibling `.part` file first and are renamed into place,
/// so `path` never holds a half-written document.
pub async fn write_document(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let partial = partial_path(path);

    if let Err(e) = tokio::fs::write(&partial, bytes).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    if let Err(e) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".part");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("/tmp/out/photos.pdf")),
            PathBuf::from("/tmp/out/photos.pdf.part")
        );
    }

    #[tokio::test]
    async fn test_write_document_leaves_no_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.pdf");

        write_document(b"%PDF-1.7", &path).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
        assert!(!partial_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("photos.pdf");

        let result = write_document(b"%PDF-1.7", &path).await;
        assert!(matches!(result, Err(GridError::Io(_))));
        assert!(!path.exists());
    }
}
