use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User submitted a word for lookup (search button or stdin line)
    SearchRequested(String),
    OpenCamera(CameraIntent),
    CameraCaptured {
        intent: CameraIntent,
        image: CapturedImage,
        text: Option<TextBlock>,
    },
    CameraClosed(CameraIntent),
    /// User picked a word from the OCR candidate list
    WordSelected(String),
    SearchStatus {
        loading: bool,
    },
    ShowDefinition(Definition),
    SearchFailed(String),
    ShowCandidates(Vec<String>),
    ProfilePhotoUpdated,
}

/// What the camera session is for. Profile captures feed the photo store,
/// search captures run OCR and feed the candidate picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraIntent {
    Profile,
    SearchOcr,
}

/// Definition entry exactly as the dictionary service returned it.
/// Passed through to rendering, never interpreted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition(pub serde_json::Value);

/// Image emitted by the camera as a base64 data URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedImage {
    pub data_url: String,
}

/// Text region(s) recognized by the camera OCR pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub words: Vec<RecognizedWord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedWord {
    pub text: String,
    pub confidence: Option<f32>,
}

/// Session parameters handed to the camera capability.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    pub facing: Facing,
    pub flash: Flash,
    pub auto_focus: bool,
    pub white_balance: WhiteBalance,
    pub aspect_ratio: String,
    pub quality: f32,
    pub target_width: u32,
    pub ocr_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    On,
    Off,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiteBalance {
    Auto,
    Sunny,
    Cloudy,
    Fluorescent,
    Incandescent,
}
