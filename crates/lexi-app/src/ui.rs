use kanal::AsyncReceiver;
use lexi_core::path::{self, Step};
use lexi_types::{AppEvent, Definition};
use serde_json::Value;

/// Terminal render sink for app-to-ui events.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;

        match event {
            AppEvent::SearchStatus { loading: true } => println!("Looking up..."),
            AppEvent::SearchStatus { loading: false } => {}
            AppEvent::ShowDefinition(definition) => render_definition(&definition),
            AppEvent::SearchFailed(message) => println!("{message}"),
            AppEvent::ShowCandidates(words) => {
                println!("Recognized words:");
                for (i, word) in words.iter().enumerate() {
                    println!("  {}. {}", i + 1, word);
                }
            }
            AppEvent::ProfilePhotoUpdated => println!("Profile photo updated."),
            _ => {}
        }
    }
}

fn array<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
        .iter()
}

/// Best-effort rendering of an Oxford-style entry payload; unknown shapes
/// fall back to raw JSON.
fn render_definition(definition: &Definition) {
    let payload = &definition.0;

    let word = path::get_str(
        payload,
        &[Step::Key("results"), Step::Index(0), Step::Key("word")],
        "",
    );
    if !word.is_empty() {
        println!("== {word} ==");
    }

    let mut printed = 0;
    for result in array(payload, "results") {
        for lexical in array(result, "lexicalEntries") {
            let category = path::get_str(
                lexical,
                &[Step::Key("lexicalCategory"), Step::Key("text")],
                "",
            );
            if !category.is_empty() {
                println!("[{category}]");
            }
            for entry in array(lexical, "entries") {
                for sense in array(entry, "senses") {
                    for text in array(sense, "definitions").filter_map(Value::as_str) {
                        printed += 1;
                        println!("  {printed}. {text}");
                    }
                }
            }
        }
    }

    if printed == 0 {
        match serde_json::to_string_pretty(payload) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{payload}"),
        }
    }
}
