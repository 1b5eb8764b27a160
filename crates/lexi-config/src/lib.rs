use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::camera::CameraConfig;
use self::photo::PhotoConfig;

pub mod api;
pub mod camera;
pub mod photo;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub camera: CameraConfig,
    pub photo: PhotoConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            camera: CameraConfig::default(),
            photo: PhotoConfig::new(),
        }
    }
}
