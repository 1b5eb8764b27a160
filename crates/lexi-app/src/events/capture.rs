use lexi_core::machine::{ScreenEvent, ScreenMode};
use lexi_ocr::CameraEvent;
use lexi_types::{AppEvent, CameraIntent, TextBlock};

use crate::events::EventContext;

pub async fn handle_camera_open(ctx: &EventContext, intent: CameraIntent) -> anyhow::Result<()> {
    // only the search capture participates in the screen state machine;
    // the profile camera is its own modal overlay
    if intent == CameraIntent::SearchOcr {
        let mut screen = ctx.state.screen.lock().await;
        if screen.mode != ScreenMode::Idle {
            tracing::warn!("camera request ignored in {:?}", screen.mode);
            return Ok(());
        }
        screen.apply(ScreenEvent::CameraOpened);
    }

    let settings = {
        let config = ctx.state.config.read().await;
        config.camera.settings_for(intent)
    };

    // the session runs in its own task; its outcome re-enters the loop as
    // an event
    let camera = ctx.camera.clone();
    let tx = ctx.events_tx.clone();
    tokio::spawn(async move {
        let event = match camera.open(settings).await {
            Ok(CameraEvent::Captured { image, text }) => AppEvent::CameraCaptured {
                intent,
                image,
                text,
            },
            Ok(CameraEvent::Closed) => AppEvent::CameraClosed(intent),
            Err(err) => {
                tracing::error!("camera session failed: {err}");
                AppEvent::CameraClosed(intent)
            }
        };
        if let Err(e) = tx.send(event).await {
            tracing::error!("failed to send camera outcome: {e}");
        }
    });

    Ok(())
}

pub async fn handle_capture_finished(
    ctx: &EventContext,
    text: Option<TextBlock>,
) -> anyhow::Result<()> {
    // keep the block only when it yields something selectable
    let block = text.filter(|b| !lexi_ocr::candidate_words(b).is_empty());
    let candidates = block.as_ref().map(lexi_ocr::candidate_words);

    let picker_open = {
        let mut screen = ctx.state.screen.lock().await;
        screen.apply(ScreenEvent::CaptureFinished(block));
        screen.mode == ScreenMode::CandidatePicker
    };

    match candidates {
        Some(words) if picker_open => {
            let _ = ctx
                .app_to_ui_tx
                .send(AppEvent::ShowCandidates(words))
                .await;
        }
        _ => tracing::info!("no selectable text recognized"),
    }

    Ok(())
}
