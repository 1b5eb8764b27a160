use std::sync::Arc;

use lexi_config::Config;
use lexi_core::machine::SearchScreen;
use lexi_io::ProfilePhoto;
use tokio::sync::{Mutex, RwLock};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub screen: Mutex<SearchScreen>,
    pub photo: RwLock<ProfilePhoto>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            screen: Mutex::new(SearchScreen::default()),
            photo: RwLock::new(ProfilePhoto::Default),
        }
    }
}
