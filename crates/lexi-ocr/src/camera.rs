use async_trait::async_trait;
use lexi_types::{CameraSettings, CapturedImage, TextBlock};

/// How a camera session ended.
#[derive(Debug, Clone)]
pub enum CameraEvent {
    /// Shutter fired; `text` carries the OCR pass when it was enabled
    Captured {
        image: CapturedImage,
        text: Option<TextBlock>,
    },
    /// User dismissed the overlay without capturing
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("capture failed: {0}")]
    CaptureFailed(String),
}

/// Native camera capability. The overlay is modal: one `open` call is one
/// session, and it resolves exactly once with the session's outcome.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn open(&self, settings: CameraSettings) -> Result<CameraEvent, CameraError>;
}

/// Fallback device for hosts without a camera; every session closes
/// immediately, as if the user cancelled.
pub struct NullCamera;

#[async_trait]
impl CameraDevice for NullCamera {
    async fn open(&self, settings: CameraSettings) -> Result<CameraEvent, CameraError> {
        tracing::warn!(
            facing = ?settings.facing,
            "no camera device on this host, closing capture session"
        );
        Ok(CameraEvent::Closed)
    }
}
