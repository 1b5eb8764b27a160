use std::time::Duration;

use lexi_types::{Definition, TextBlock};

/// Pause between picking a candidate word and firing the automatic search,
/// so the picker teardown settles before the loading state appears.
pub const SELECT_SEARCH_DELAY: Duration = Duration::from_millis(500);

/// Exactly one mode is active at a time. The camera overlay and the
/// candidate picker never overlap, and a lookup only starts from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    Idle,
    CameraActive,
    CandidatePicker,
    Loading,
}

/// Search screen model, independent of any rendering runtime. All
/// transitions go through [`SearchScreen::apply`].
#[derive(Debug, Default)]
pub struct SearchScreen {
    pub mode: ScreenMode,
    pub query: String,
    pub definition: Option<Definition>,
    pub error: Option<String>,
    pub candidates: Option<TextBlock>,
}

#[derive(Debug)]
pub enum ScreenEvent {
    /// User edited the search field; replaces the query wholesale
    QueryChanged(String),
    CameraOpened,
    CameraClosed,
    /// Capture ended; `None` when nothing selectable was recognized
    CaptureFinished(Option<TextBlock>),
    /// User picked a word from the candidate list (may be empty)
    CandidateChosen(String),
    SearchStarted,
    SearchFinished(Result<Definition, String>),
}

/// Follow-up work a transition asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The screen entered `Loading`; run the lookup for this word now
    Resolve { word: String },
    /// Fire a search for this word after the delay
    ScheduleSearch { word: String, delay: Duration },
}

impl SearchScreen {
    pub fn apply(&mut self, event: ScreenEvent) -> Option<Effect> {
        match event {
            ScreenEvent::QueryChanged(text) => {
                self.query = text;
                None
            }
            ScreenEvent::CameraOpened => {
                if self.mode == ScreenMode::Idle {
                    self.mode = ScreenMode::CameraActive;
                }
                None
            }
            ScreenEvent::CameraClosed => {
                if self.mode == ScreenMode::CameraActive {
                    self.mode = ScreenMode::Idle;
                }
                None
            }
            ScreenEvent::CaptureFinished(text) => {
                if self.mode != ScreenMode::CameraActive {
                    return None;
                }
                match text {
                    Some(block) => {
                        self.mode = ScreenMode::CandidatePicker;
                        self.candidates = Some(block);
                    }
                    None => self.mode = ScreenMode::Idle,
                }
                None
            }
            ScreenEvent::CandidateChosen(word) => {
                if self.mode != ScreenMode::CandidatePicker {
                    return None;
                }
                self.mode = ScreenMode::Idle;
                self.candidates = None;
                self.query = word.clone();
                if word.is_empty() {
                    None
                } else {
                    Some(Effect::ScheduleSearch {
                        word,
                        delay: SELECT_SEARCH_DELAY,
                    })
                }
            }
            ScreenEvent::SearchStarted => {
                // single-flight: re-entrant searches are dropped
                if self.mode != ScreenMode::Idle {
                    return None;
                }
                self.mode = ScreenMode::Loading;
                self.error = None;
                Some(Effect::Resolve {
                    word: self.query.clone(),
                })
            }
            ScreenEvent::SearchFinished(outcome) => {
                if self.mode == ScreenMode::Loading {
                    self.mode = ScreenMode::Idle;
                }
                match outcome {
                    Ok(definition) => {
                        self.definition = Some(definition);
                        self.error = None;
                    }
                    Err(message) => {
                        self.definition = None;
                        self.error = Some(message);
                    }
                }
                None
            }
        }
    }
}
