use lexi_io::ProfilePhoto;
use lexi_types::{AppEvent, CapturedImage};

use crate::events::EventContext;

pub async fn handle_photo_capture(ctx: &EventContext, image: CapturedImage) -> anyhow::Result<()> {
    match ctx.store.save_data_url(&image.data_url).await {
        Ok(bytes) => {
            *ctx.state.photo.write().await = ProfilePhoto::Custom(bytes);
            let _ = ctx.app_to_ui_tx.send(AppEvent::ProfilePhotoUpdated).await;
        }
        Err(err) => {
            // keep the previous photo; storage trouble never reaches the user
            tracing::warn!("unable to save profile photo: {err}");
        }
    }

    Ok(())
}
