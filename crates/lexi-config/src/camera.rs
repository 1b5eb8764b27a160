use lexi_types::{CameraIntent, CameraSettings, Facing, Flash, WhiteBalance};
use serde::{Deserialize, Serialize};

fn default_quality() -> f32 {
    0.5
}

fn default_target_width() -> u32 {
    800
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CameraConfig {
    #[serde(default = "default_quality")]
    pub quality: f32,
    #[serde(default = "default_target_width")]
    pub target_width: u32,
}

impl CameraConfig {
    /// Session settings for the given capture intent. Profile shots use the
    /// front camera in 1:1 without OCR; search shots use the back camera in
    /// 4:3 with OCR on.
    pub fn settings_for(&self, intent: CameraIntent) -> CameraSettings {
        let (facing, aspect_ratio, ocr_enabled) = match intent {
            CameraIntent::Profile => (Facing::Front, "1:1", false),
            CameraIntent::SearchOcr => (Facing::Back, "4:3", true),
        };

        CameraSettings {
            facing,
            flash: Flash::Off,
            auto_focus: true,
            white_balance: WhiteBalance::Auto,
            aspect_ratio: aspect_ratio.to_string(),
            quality: self.quality,
            target_width: self.target_width,
            ocr_enabled,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            target_width: default_target_width(),
        }
    }
}
