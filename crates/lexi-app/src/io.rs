use kanal::AsyncSender;
use lexi_types::{AppEvent, CameraIntent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Stdin watcher: each line is a search, `:camera` and `:photo` open the
/// matching capture session.
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("stdin watcher stopping");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }

                let event = match text {
                    ":camera" => AppEvent::OpenCamera(CameraIntent::SearchOcr),
                    ":photo" => AppEvent::OpenCamera(CameraIntent::Profile),
                    _ => AppEvent::SearchRequested(text.to_string()),
                };

                event_tx.send(event).await?;
            }
        }
    }

    Ok(())
}
