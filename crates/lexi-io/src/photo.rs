use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Profile image currently shown by the UI. `Default` is the bundled
/// placeholder asset; `Custom` is a previously captured photo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfilePhoto {
    #[default]
    Default,
    Custom(Vec<u8>),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{operation} failed: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("image payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Reads and writes the profile photo at its fixed path. Load failures
/// degrade to the default photo with a warning; they never reach the user.
pub struct PhotoStore {
    path: PathBuf,
}

impl PhotoStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Startup read of the stored photo, if there is one.
    pub async fn load(&self) -> ProfilePhoto {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => match tokio::fs::read(&self.path).await {
                Ok(bytes) => ProfilePhoto::Custom(bytes),
                Err(err) => {
                    tracing::warn!("unable to read profile photo: {err}");
                    ProfilePhoto::Default
                }
            },
            Ok(false) => ProfilePhoto::Default,
            Err(err) => {
                tracing::warn!("unable to access profile photo path: {err}");
                ProfilePhoto::Default
            }
        }
    }

    /// Persist a captured image. The camera hands over a
    /// `data:image/...;base64,` URL; the prefix is stripped and the body
    /// decoded to raw bytes before writing. Returns the written bytes so
    /// the caller can update its in-memory photo without a re-read.
    pub async fn save_data_url(&self, data_url: &str) -> Result<Vec<u8>, StorageError> {
        let bytes = BASE64.decode(strip_data_url_prefix(data_url).trim())?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::Io {
                    operation: "create photo directory",
                    source,
                })?;
        }

        tokio::fs::write(&self.path, &bytes)
            .await
            .map_err(|source| StorageError::Io {
                operation: "write profile photo",
                source,
            })?;

        Ok(bytes)
    }
}

/// Strip a `data:image/<type>;base64,` prefix, leaving bare base64 intact.
fn strip_data_url_prefix(data: &str) -> &str {
    match data.split_once("base64,") {
        Some((head, body)) if head.starts_with("data:image/") => body,
        _ => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn data_url(bytes: &[u8]) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(bytes))
    }

    #[tokio::test]
    async fn load_without_stored_photo_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path().join("profilePic.png"));
        assert_eq!(store.load().await, ProfilePhoto::Default);
    }

    #[tokio::test]
    async fn unreadable_path_degrades_to_default() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the photo file should be: exists, but read fails
        let path = dir.path().join("profilePic.png");
        tokio::fs::create_dir(&path).await.unwrap();

        let store = PhotoStore::new(path);
        assert_eq!(store.load().await, ProfilePhoto::Default);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path().join("profilePic.png"));

        let written = store.save_data_url(&data_url(PNG_BYTES)).await.unwrap();
        assert_eq!(written, PNG_BYTES);

        assert_eq!(store.load().await, ProfilePhoto::Custom(PNG_BYTES.to_vec()));
    }

    #[tokio::test]
    async fn bare_base64_without_prefix_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path().join("profilePic.png"));

        let written = store.save_data_url(&BASE64.encode(PNG_BYTES)).await.unwrap();
        assert_eq!(written, PNG_BYTES);
    }

    #[tokio::test]
    async fn malformed_payload_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path().join("profilePic.png"));

        let err = store
            .save_data_url("data:image/png;base64,not-base64!!")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Decode(_)));

        // nothing was written
        assert_eq!(store.load().await, ProfilePhoto::Default);
    }

    #[tokio::test]
    async fn save_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path().join("nested").join("profilePic.png"));

        store.save_data_url(&data_url(PNG_BYTES)).await.unwrap();
        assert!(store.path().exists());
    }
}
