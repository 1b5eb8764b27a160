use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the profile photo lives on disk. The file is an opaque image blob
/// at a fixed path; it is read once at startup and overwritten on capture.
#[derive(Serialize, Deserialize, Clone)]
pub struct PhotoConfig {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl PhotoConfig {
    pub fn new() -> Self {
        let data_dir = env::var("LEXI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            data_dir,
            file_name: "profilePic.png".to_string(),
        }
    }

    pub fn photo_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self::new()
    }
}
