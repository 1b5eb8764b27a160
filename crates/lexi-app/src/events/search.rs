use lexi_core::machine::{Effect, ScreenEvent};
use lexi_types::AppEvent;

use crate::events::EventContext;

pub async fn handle_search(ctx: &EventContext, word: String) -> anyhow::Result<()> {
    let effect = {
        let mut screen = ctx.state.screen.lock().await;
        screen.apply(ScreenEvent::QueryChanged(word));
        screen.apply(ScreenEvent::SearchStarted)
    };

    // single-flight: the screen only enters Loading from Idle
    let Some(Effect::Resolve { word }) = effect else {
        tracing::warn!("search ignored, another lookup is in flight");
        return Ok(());
    };

    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::SearchStatus { loading: true })
        .await;

    tracing::info!("looking up '{word}'");
    let outcome = ctx.resolver.resolve(&word).await;

    {
        let mut screen = ctx.state.screen.lock().await;
        match &outcome {
            Ok(definition) => {
                screen.apply(ScreenEvent::SearchFinished(Ok(definition.clone())));
            }
            Err(err) => {
                screen.apply(ScreenEvent::SearchFinished(Err(err.to_string())));
            }
        }
    }

    match outcome {
        Ok(definition) => {
            let _ = ctx
                .app_to_ui_tx
                .send(AppEvent::ShowDefinition(definition))
                .await;
        }
        Err(err) => {
            let message = err.to_string();
            tracing::warn!("lookup failed: {message}");
            let _ = ctx.app_to_ui_tx.send(AppEvent::SearchFailed(message)).await;
        }
    }

    let _ = ctx
        .app_to_ui_tx
        .send(AppEvent::SearchStatus { loading: false })
        .await;

    Ok(())
}
