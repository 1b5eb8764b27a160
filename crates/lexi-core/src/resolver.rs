use std::fmt;
use std::sync::Arc;

use lexi_api::{ApiError, Dictionary};
use lexi_types::Definition;

use crate::path::{self, Step};
use crate::preprocess;

/// Which remote call a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lemma,
    Definition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lemma => write!(f, "lemma"),
            Stage::Definition => write!(f, "definition"),
        }
    }
}

/// Terminal outcome of one `resolve` call. The Display form is the
/// user-facing message; no failure is retried.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Please specify the word to lookup.")]
    EmptyInput,

    #[error("{stage} lookup failed: {detail}")]
    Transport { stage: Stage, detail: String },

    #[error("Unable to get result from the dictionary service: {detail}")]
    Service { stage: Stage, detail: String },

    #[error("Invalid word. Please specify a valid word.")]
    WordNotFound,
}

impl LookupError {
    fn transport(stage: Stage, err: ApiError) -> Self {
        Self::Transport {
            stage,
            detail: err.to_string(),
        }
    }

    fn service(stage: Stage, response: &lexi_api::ApiResponse) -> Self {
        Self::Service {
            stage,
            detail: response.message().to_string(),
        }
    }
}

/// Fixed navigation path from the lemma envelope payload to the canonical
/// headword: first result, first lexical entry, first "inflection of", id.
const HEADWORD_PATH: &[Step<'static>] = &[
    Step::Key("results"),
    Step::Index(0),
    Step::Key("lexicalEntries"),
    Step::Index(0),
    Step::Key("inflectionOf"),
    Step::Index(0),
    Step::Key("id"),
];

/// Turns free-form user text into a definition entry: canonicalize the
/// surface form through the lemma endpoint, then fetch the entry for the
/// headword. The definition call's input is derived from the lemma call's
/// output, so the two always run in that order.
pub struct Resolver {
    dict: Arc<dyn Dictionary>,
}

impl Resolver {
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self { dict }
    }

    pub async fn resolve(&self, raw: &str) -> Result<Definition, LookupError> {
        let word = preprocess::clean_query(raw);
        if word.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let lemmas = self
            .dict
            .lemmas(&word)
            .await
            .map_err(|e| LookupError::transport(Stage::Lemma, e))?;
        if !lemmas.success {
            return Err(LookupError::service(Stage::Lemma, &lemmas));
        }

        let headword = path::get_str(&lemmas.payload, HEADWORD_PATH, "");
        if headword.is_empty() {
            // recognized envelope, unrecognized word; distinct from a
            // transport failure
            return Err(LookupError::WordNotFound);
        }

        let entry = self
            .dict
            .definition(&headword)
            .await
            .map_err(|e| LookupError::transport(Stage::Definition, e))?;
        if !entry.success {
            return Err(LookupError::service(Stage::Definition, &entry));
        }

        Ok(Definition(entry.payload))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use lexi_api::ApiResponse;
    use serde_json::{Value, json};

    use super::*;

    /// Scripted dictionary: canned envelopes plus call counters.
    #[derive(Default)]
    struct ScriptedDict {
        lemma_response: Option<ApiResponse>,
        definition_response: Option<ApiResponse>,
        lemma_calls: AtomicUsize,
        definition_calls: AtomicUsize,
        last_headword: Mutex<Option<String>>,
    }

    #[async_trait::async_trait]
    impl Dictionary for ScriptedDict {
        async fn lemmas(&self, _word: &str) -> Result<ApiResponse, ApiError> {
            self.lemma_calls.fetch_add(1, Ordering::SeqCst);
            match &self.lemma_response {
                Some(response) => Ok(response.clone()),
                None => Err(ApiError::Decode("no lemma response scripted".into())),
            }
        }

        async fn definition(&self, headword: &str) -> Result<ApiResponse, ApiError> {
            self.definition_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_headword.lock().unwrap() = Some(headword.to_string());
            match &self.definition_response {
                Some(response) => Ok(response.clone()),
                None => Err(ApiError::Decode("no definition response scripted".into())),
            }
        }
    }

    fn ok_envelope(payload: Value) -> ApiResponse {
        ApiResponse {
            success: true,
            message: None,
            payload,
        }
    }

    fn err_envelope(message: &str) -> ApiResponse {
        ApiResponse {
            success: false,
            message: Some(message.to_string()),
            payload: Value::Null,
        }
    }

    fn lemma_payload(headword: &str) -> Value {
        json!({
            "results": [{
                "lexicalEntries": [{
                    "inflectionOf": [{"id": headword}]
                }]
            }]
        })
    }

    fn resolver(dict: ScriptedDict) -> (Resolver, Arc<ScriptedDict>) {
        let dict = Arc::new(dict);
        (Resolver::new(dict.clone()), dict)
    }

    #[tokio::test]
    async fn empty_input_issues_no_network_call() {
        for raw in ["", "   ", "\t\n"] {
            let (resolver, dict) = resolver(ScriptedDict::default());
            let err = resolver.resolve(raw).await.unwrap_err();
            assert!(matches!(err, LookupError::EmptyInput), "input {raw:?}");
            assert_eq!(dict.lemma_calls.load(Ordering::SeqCst), 0);
            assert_eq!(dict.definition_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn lemma_service_failure_skips_definition_call() {
        let (resolver, dict) = resolver(ScriptedDict {
            lemma_response: Some(err_envelope("quota exceeded")),
            ..Default::default()
        });

        let err = resolver.resolve("running").await.unwrap_err();
        match err {
            LookupError::Service { stage, detail } => {
                assert_eq!(stage, Stage::Lemma);
                assert_eq!(detail, "quota exceeded");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
        assert_eq!(dict.definition_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn absent_headword_is_word_not_found() {
        let payloads = [
            json!({}),
            json!({"results": []}),
            json!({"results": [{"lexicalEntries": []}]}),
            json!({"results": [{"lexicalEntries": [{"inflectionOf": [{}]}]}]}),
        ];

        for payload in payloads {
            let (resolver, dict) = resolver(ScriptedDict {
                lemma_response: Some(ok_envelope(payload.clone())),
                ..Default::default()
            });

            let err = resolver.resolve("blargh").await.unwrap_err();
            assert!(
                matches!(err, LookupError::WordNotFound),
                "payload {payload}"
            );
            assert_eq!(dict.definition_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn definition_service_failure_surfaces_message() {
        let (resolver, _dict) = resolver(ScriptedDict {
            lemma_response: Some(ok_envelope(lemma_payload("run"))),
            definition_response: Some(err_envelope("entry unavailable")),
            ..Default::default()
        });

        let err = resolver.resolve("running").await.unwrap_err();
        match err {
            LookupError::Service { stage, detail } => {
                assert_eq!(stage, Stage::Definition);
                assert_eq!(detail, "entry unavailable");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_names_the_stage() {
        {
            let (resolver, _dict) = resolver(ScriptedDict::default());

            let err = resolver.resolve("running").await.unwrap_err();
            match err {
                LookupError::Transport { stage, .. } => assert_eq!(stage, Stage::Lemma),
                other => panic!("expected Transport error, got {other:?}"),
            }
        }

        let (resolver, _dict) = resolver(ScriptedDict {
            lemma_response: Some(ok_envelope(lemma_payload("run"))),
            ..Default::default()
        });

        let err = resolver.resolve("running").await.unwrap_err();
        assert!(err.to_string().starts_with("definition lookup failed:"));
    }

    #[tokio::test]
    async fn inflected_form_resolves_through_headword() {
        let (resolver, dict) = resolver(ScriptedDict {
            lemma_response: Some(ok_envelope(lemma_payload("run"))),
            definition_response: Some(ok_envelope(json!("to move fast"))),
            ..Default::default()
        });

        let definition = resolver.resolve("running").await.unwrap();
        assert_eq!(definition, Definition(json!("to move fast")));
        assert_eq!(dict.last_headword.lock().unwrap().as_deref(), Some("run"));
        assert_eq!(dict.lemma_calls.load(Ordering::SeqCst), 1);
        assert_eq!(dict.definition_calls.load(Ordering::SeqCst), 1);
    }
}
