//! Form state and the reducer that drives it.
//!
//! `update` is the only place state changes. It never performs I/O; work that
//! leaves the view (network, clipboard, timers) is returned as an [`Effect`] for
//! the controller to run.

use std::time::Duration;

use crate::models::exam::ExamResult;
use crate::view::clipboard::ClipboardError;
use crate::view::export::build_export_text;
use crate::view::validation::{validate_request, GenerationRequest};

pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);
pub const NOTHING_TO_COPY: &str = "Nothing to copy yet. Generate the exam first.";
pub const COPY_FAILED: &str = "Copy failed. Select and copy manually (Ctrl/Cmd + C).";
pub const GENERATION_FALLBACK: &str = "Failed to generate exam. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamViewState {
    pub topic: String,
    pub count: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: ExamResult,
    pub show_answers: bool,
    pub copied: bool,
    pub dark_mode: bool,
}

impl Default for ExamViewState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            count: String::new(),
            loading: false,
            error: None,
            result: ExamResult::Empty,
            show_answers: false,
            copied: false,
            dark_mode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetTopic(String),
    SetCount(String),
    SetShowAnswers(bool),
    ToggleTheme,
    GenerateRequested,
    GenerateSucceeded(ExamResult),
    GenerateFailed(String),
    CopyRequested,
    CopySucceeded,
    CopyFailed(ClipboardError),
    CopyFeedbackExpired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Generate(GenerationRequest),
    Copy(String),
    ExpireCopyFeedback(Duration),
}

pub fn update(state: &mut ExamViewState, action: Action) -> Effect {
    match action {
        Action::SetTopic(topic) => state.topic = topic,
        Action::SetCount(count) => state.count = count,
        Action::SetShowAnswers(show) => state.show_answers = show,
        Action::ToggleTheme => state.dark_mode = !state.dark_mode,

        Action::GenerateRequested => {
            // The trigger is disabled while a request is in flight.
            if state.loading {
                return Effect::None;
            }
            state.error = None;
            state.result = ExamResult::Empty;
            state.copied = false;

            match validate_request(&state.topic, &state.count) {
                Ok(request) => {
                    state.loading = true;
                    return Effect::Generate(request);
                }
                Err(err) => state.error = Some(err.to_string()),
            }
        }
        Action::GenerateSucceeded(result) => {
            state.loading = false;
            state.result = result;
        }
        Action::GenerateFailed(message) => {
            state.loading = false;
            state.error = Some(if message.is_empty() {
                GENERATION_FALLBACK.to_string()
            } else {
                message
            });
        }

        Action::CopyRequested => {
            let text = build_export_text(&state.result, state.show_answers);
            if text.trim().is_empty() {
                state.error = Some(NOTHING_TO_COPY.to_string());
                return Effect::None;
            }
            return Effect::Copy(text);
        }
        Action::CopySucceeded => {
            state.copied = true;
            return Effect::ExpireCopyFeedback(COPY_FEEDBACK);
        }
        Action::CopyFailed(err) => {
            tracing::warn!(error = %err, "Clipboard write failed");
            state.error = Some(COPY_FAILED.to_string());
        }
        Action::CopyFeedbackExpired => state.copied = false,
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exam::ExamItem;

    fn filled(topic: &str, count: &str) -> ExamViewState {
        ExamViewState {
            topic: topic.into(),
            count: count.into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_starts_generation() {
        let mut state = filled("  Fractions ", "5");
        let effect = update(&mut state, Action::GenerateRequested);
        assert_eq!(
            effect,
            Effect::Generate(GenerationRequest {
                topic: "Fractions".into(),
                count: 5
            })
        );
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn invalid_form_sets_error_without_dispatch() {
        let mut state = filled("Fractions", "51");
        assert_eq!(update(&mut state, Action::GenerateRequested), Effect::None);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Please request 50 questions or fewer."));
    }

    #[test]
    fn generate_clears_previous_outcome() {
        let mut state = filled("Fractions", "2");
        state.result = ExamResult::from(vec![ExamItem::new("Q1", "A1")]);
        state.error = Some("old".into());
        state.copied = true;

        update(&mut state, Action::GenerateRequested);
        assert!(state.result.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.copied);
    }

    #[test]
    fn requests_while_loading_are_ignored() {
        let mut state = filled("Fractions", "2");
        update(&mut state, Action::GenerateRequested);
        assert_eq!(update(&mut state, Action::GenerateRequested), Effect::None);
        assert!(state.loading);
    }

    #[test]
    fn completion_replaces_result_and_stops_loading() {
        let mut state = filled("Fractions", "1");
        update(&mut state, Action::GenerateRequested);
        let result = ExamResult::from(vec![ExamItem::new("Q1", "A1")]);
        update(&mut state, Action::GenerateSucceeded(result.clone()));
        assert!(!state.loading);
        assert_eq!(state.result, result);
    }

    #[test]
    fn failure_message_is_shown_verbatim() {
        let mut state = filled("Fractions", "1");
        update(&mut state, Action::GenerateRequested);
        update(&mut state, Action::GenerateFailed("Failed to generate exam".into()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to generate exam"));

        update(&mut state, Action::GenerateFailed(String::new()));
        assert_eq!(state.error.as_deref(), Some(GENERATION_FALLBACK));
    }

    #[test]
    fn copy_uses_answer_visibility() {
        let mut state = ExamViewState {
            result: ExamResult::from(vec![ExamItem::new("Q1", "A1")]),
            ..Default::default()
        };
        assert_eq!(update(&mut state, Action::CopyRequested), Effect::Copy("1. Q1".into()));

        update(&mut state, Action::SetShowAnswers(true));
        assert_eq!(
            update(&mut state, Action::CopyRequested),
            Effect::Copy("1. Q1\nAnswer: A1".into())
        );
    }

    #[test]
    fn copy_without_result_is_an_error() {
        let mut state = ExamViewState::default();
        assert_eq!(update(&mut state, Action::CopyRequested), Effect::None);
        assert_eq!(state.error.as_deref(), Some(NOTHING_TO_COPY));
    }

    #[test]
    fn copy_feedback_cycle() {
        let mut state = ExamViewState::default();
        assert_eq!(
            update(&mut state, Action::CopySucceeded),
            Effect::ExpireCopyFeedback(COPY_FEEDBACK)
        );
        assert!(state.copied);
        update(&mut state, Action::CopyFeedbackExpired);
        assert!(!state.copied);
    }

    #[test]
    fn copy_failure_suggests_manual_copy() {
        let mut state = ExamViewState::default();
        update(
            &mut state,
            Action::CopyFailed(ClipboardError::PermissionDenied),
        );
        assert_eq!(state.error.as_deref(), Some(COPY_FAILED));
    }

    #[test]
    fn theme_starts_dark_and_toggles() {
        let mut state = ExamViewState::default();
        assert!(state.dark_mode);
        update(&mut state, Action::ToggleTheme);
        assert!(!state.dark_mode);
    }
}
