//! Argument validators shared by the resource clients.
//!
//! Validation failures carry the exact message a caller can show to the
//! user, and no request is dispatched when one fires.

use std::path::Path;

use crate::error::PixeldrainError;

/// Reject a blank required argument with the given message.
pub(crate) fn require(value: &str, message: &str) -> Result<(), PixeldrainError> {
    if value.trim().is_empty() {
        return Err(PixeldrainError::Validation(message.to_string()));
    }
    Ok(())
}

/// Reject a destination that is not an existing directory.
pub(crate) async fn require_dir(dir: &Path) -> Result<(), PixeldrainError> {
    let is_dir = tokio::fs::metadata(dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(PixeldrainError::Validation("Folder not found.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_accepts_value() {
        assert!(require("abc123", "Please insert a file Id.").is_ok());
    }

    #[test]
    fn test_require_rejects_blank() {
        for value in ["", "   ", "\t\n"] {
            let err = require(value, "Please insert a file Id.").unwrap_err();
            assert_eq!(err.to_string(), "Please insert a file Id.");
            assert!(matches!(err, PixeldrainError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_require_dir_accepts_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(require_dir(dir.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_require_dir_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = require_dir(&missing).await.unwrap_err();
        assert_eq!(err.to_string(), "Folder not found.");
    }

    #[tokio::test]
    async fn test_require_dir_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("plain.txt");
        std::fs::write(&file_path, b"not a directory").unwrap();
        let err = require_dir(&file_path).await.unwrap_err();
        assert_eq!(err.to_string(), "Folder not found.");
    }
}
