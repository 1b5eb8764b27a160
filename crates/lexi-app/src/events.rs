use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_api::Dictionary;
use lexi_core::machine::ScreenEvent;
use lexi_core::resolver::Resolver;
use lexi_io::PhotoStore;
use lexi_ocr::CameraDevice;
use lexi_types::{AppEvent, CameraIntent};

use crate::state::AppState;

pub mod capture;
pub mod save_photo;
pub mod search;
pub mod select_word;

use capture::{handle_camera_open, handle_capture_finished};
use save_photo::handle_photo_capture;
use search::handle_search;
use select_word::handle_word_selected;

/// Shared dependencies for event handlers, bundled to keep the handler
/// signatures flat.
#[derive(Clone)]
pub struct EventContext {
    pub state: Arc<AppState>,
    pub resolver: Arc<Resolver>,
    pub store: Arc<PhotoStore>,
    pub camera: Arc<dyn CameraDevice>,
    /// Feeds back into the event loop's own queue
    pub events_tx: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    dict: Arc<dyn Dictionary>,
    camera: Arc<dyn CameraDevice>,
) -> anyhow::Result<()> {
    let store = {
        let config = state.config.read().await;
        PhotoStore::new(config.photo.photo_path())
    };

    // Stored profile photo, if any; every failure keeps the default
    {
        let photo = store.load().await;
        *state.photo.write().await = photo;
    }

    let ctx = EventContext {
        state,
        resolver: Arc::new(Resolver::new(dict)),
        store: Arc::new(store),
        camera,
        events_tx,
        app_to_ui_tx,
    };

    tracing::info!("[EVENT_LOOP] starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] event received: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(&ctx, event).await?;
    }
}

async fn handle_events(ctx: &EventContext, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::SearchRequested(word) => {
            handle_search(ctx, word).await?;
        }
        AppEvent::OpenCamera(intent) => {
            handle_camera_open(ctx, intent).await?;
        }
        AppEvent::CameraCaptured {
            intent,
            image,
            text,
        } => match intent {
            CameraIntent::Profile => handle_photo_capture(ctx, image).await?,
            CameraIntent::SearchOcr => handle_capture_finished(ctx, text).await?,
        },
        AppEvent::CameraClosed(intent) => {
            if intent == CameraIntent::SearchOcr {
                ctx.state
                    .screen
                    .lock()
                    .await
                    .apply(ScreenEvent::CameraClosed);
            }
        }
        AppEvent::WordSelected(word) => {
            handle_word_selected(ctx, word).await?;
        }
        // render-side events drain through the ui loop
        AppEvent::SearchStatus { .. }
        | AppEvent::ShowDefinition(_)
        | AppEvent::SearchFailed(_)
        | AppEvent::ShowCandidates(_)
        | AppEvent::ProfilePhotoUpdated => {}
    }

    Ok(())
}
