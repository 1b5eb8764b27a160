use lexi_core::machine::{Effect, ScreenEvent};
use lexi_types::AppEvent;

use crate::events::EventContext;

pub async fn handle_word_selected(ctx: &EventContext, word: String) -> anyhow::Result<()> {
    let effect = ctx
        .state
        .screen
        .lock()
        .await
        .apply(ScreenEvent::CandidateChosen(word));

    // fire the search after the settle delay, off the event loop
    if let Some(Effect::ScheduleSearch { word, delay }) = effect {
        let tx = ctx.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = tx.send(AppEvent::SearchRequested(word)).await {
                tracing::error!("failed to send scheduled search: {e}");
            }
        });
    }

    Ok(())
}
