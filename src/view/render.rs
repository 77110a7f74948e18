use crate::models::exam::{ExamEntry, ExamResult};
use crate::view::state::ExamViewState;

const QUESTION_PLACEHOLDER: &str = "Question";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub question: String,
    pub answer: Option<String>,
}

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Nothing,
    Preformatted(String),
    OrderedList(Vec<ListEntry>),
}

pub fn render_result(result: &ExamResult, show_answers: bool) -> ResultView {
    match result {
        ExamResult::Empty => ResultView::Nothing,
        ExamResult::Text(text) if text.is_empty() => ResultView::Nothing,
        ExamResult::Text(text) => ResultView::Preformatted(text.clone()),
        ExamResult::Items(entries) => ResultView::OrderedList(
            entries
                .iter()
                .map(|entry| match entry {
                    ExamEntry::Prompt(text) => ListEntry {
                        question: text.clone(),
                        answer: None,
                    },
                    ExamEntry::Item(item) => ListEntry {
                        question: if item.question.is_empty() {
                            QUESTION_PLACEHOLDER.to_string()
                        } else {
                            item.question.clone()
                        },
                        answer: item
                            .visible_answer()
                            .filter(|_| show_answers)
                            .map(str::to_string),
                    },
                })
                .collect(),
        ),
    }
}

/// Control labels derived from state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub generate_button: &'static str,
    pub generate_enabled: bool,
    pub copy_button: &'static str,
    pub copy_tooltip: &'static str,
    pub theme_button: &'static str,
    pub show_controls: bool,
}

pub fn labels(state: &ExamViewState) -> Labels {
    Labels {
        generate_button: if state.loading {
            "Generating..."
        } else {
            "Generate Exam"
        },
        generate_enabled: !state.loading,
        copy_button: if state.copied {
            "Copied!"
        } else {
            "Copy to Clipboard"
        },
        copy_tooltip: if state.show_answers {
            "Copy exam + answers"
        } else {
            "Copy questions only"
        },
        theme_button: if state.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        },
        show_controls: match &state.result {
            ExamResult::Empty => false,
            ExamResult::Text(text) => !text.is_empty(),
            ExamResult::Items(_) => true,
        },
    }
}
