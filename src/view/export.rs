//! Plain-text rendering of an exam for the clipboard.

use crate::models::exam::{ExamEntry, ExamResult};

const ANSWER_PREFIX: &str = "Answer: ";

/// Builds the text copied to the clipboard: numbered questions separated by a blank
/// line, each followed by its answer when `include_answers` is set.
pub fn build_export_text(result: &ExamResult, include_answers: bool) -> String {
    match result {
        ExamResult::Empty => String::new(),
        ExamResult::Text(text) => text.clone(),
        ExamResult::Items(entries) => entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| export_entry(idx + 1, entry, include_answers))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn export_entry(number: usize, entry: &ExamEntry, include_answers: bool) -> String {
    match entry {
        ExamEntry::Prompt(text) => format!("{}. {}", number, text),
        ExamEntry::Item(item) => {
            let base = format!("{}. {}", number, item.question);
            match item.visible_answer() {
                Some(answer) if include_answers => {
                    format!("{}\n{}{}", base, ANSWER_PREFIX, answer)
                }
                _ => base,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedQuestion {
    pub number: usize,
    pub question: String,
    pub answer: Option<String>,
}

/// Reads exported text back into numbered questions, in the order they appear.
///
/// A blank-line separated block opens a new question only when it starts with the
/// next expected number (`1. `, then `2. `, ...). Any other block belongs to the
/// question before it, so multi-paragraph questions and embedded numbered lists
/// survive. Text before `1. ` is skipped.
pub fn parse_export_text(text: &str) -> Vec<ExportedQuestion> {
    let mut chunks: Vec<(usize, String)> = Vec::new();

    for block in text.split("\n\n") {
        let expected = chunks.len() + 1;
        match block.strip_prefix(&format!("{}. ", expected)) {
            Some(rest) => chunks.push((expected, rest.to_string())),
            None => {
                if let Some((_, body)) = chunks.last_mut() {
                    body.push_str("\n\n");
                    body.push_str(block);
                }
            }
        }
    }

    chunks
        .into_iter()
        .map(|(number, body)| split_answer(number, &body))
        .collect()
}

fn split_answer(number: usize, body: &str) -> ExportedQuestion {
    let (question, answer) = match body.rsplit_once(&format!("\n{}", ANSWER_PREFIX)) {
        Some((q, a)) => (q, Some(a.to_string())),
        None => (body, None),
    };

    ExportedQuestion {
        number,
        question: question.to_string(),
        answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exam::ExamItem;

    fn sample() -> ExamResult {
        ExamResult::from(vec![
            ExamItem::new("What is the capital of France?", "Paris"),
            ExamItem::new("Name the largest planet.", "Jupiter"),
            ExamItem {
                question: "Explain osmosis.".into(),
                answer: None,
            },
        ])
    }

    #[test]
    fn single_item_hidden_and_shown() {
        let result = ExamResult::from(vec![ExamItem::new("Q1", "A1")]);
        assert_eq!(build_export_text(&result, false), "1. Q1");
        assert_eq!(build_export_text(&result, true), "1. Q1\nAnswer: A1");
    }

    #[test]
    fn items_are_separated_by_blank_lines() {
        assert_eq!(
            build_export_text(&sample(), true),
            "1. What is the capital of France?\nAnswer: Paris\n\n\
             2. Name the largest planet.\nAnswer: Jupiter\n\n\
             3. Explain osmosis."
        );
    }

    #[test]
    fn empty_answers_are_not_printed() {
        let result = ExamResult::from(vec![ExamItem::new("Q1", "")]);
        assert_eq!(build_export_text(&result, true), "1. Q1");
    }

    #[test]
    fn prompts_and_text_results() {
        let result = ExamResult::Items(vec![
            ExamEntry::Prompt("Define inertia".into()),
            ExamItem::new("Q2", "A2").into(),
        ]);
        assert_eq!(build_export_text(&result, false), "1. Define inertia\n\n2. Q2");

        let text = ExamResult::Text("Raw exam text".into());
        assert_eq!(build_export_text(&text, true), "Raw exam text");
        assert_eq!(build_export_text(&ExamResult::Empty, true), "");
    }

    #[test]
    fn parsing_export_recovers_order() {
        let exported = parse_export_text(&build_export_text(&sample(), true));
        let numbers: Vec<usize> = exported.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let questions: Vec<&str> = exported.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(
            questions,
            vec![
                "What is the capital of France?",
                "Name the largest planet.",
                "Explain osmosis."
            ]
        );
        assert_eq!(exported[0].answer.as_deref(), Some("Paris"));
        assert_eq!(exported[2].answer, None);
    }

    #[test]
    fn parsing_questions_only_export() {
        let exported = parse_export_text(&build_export_text(&sample(), false));
        assert_eq!(exported.len(), 3);
        assert!(exported.iter().all(|q| q.answer.is_none()));
    }

    #[test]
    fn numbered_lists_inside_questions_stay_with_their_item() {
        let question = "Consider the list:\n\n1. apples\n2. pears\n\nWhich is a fruit?";
        let result = ExamResult::from(vec![
            ExamItem::new(question, "apples"),
            ExamItem::new("Q2", "A2"),
        ]);

        for include_answers in [false, true] {
            let exported = parse_export_text(&build_export_text(&result, include_answers));
            let numbers: Vec<usize> = exported.iter().map(|q| q.number).collect();
            assert_eq!(numbers, vec![1, 2]);
            assert_eq!(exported[0].question, question);
            assert_eq!(exported[1].question, "Q2");
        }

        let exported = parse_export_text(&build_export_text(&result, true));
        assert_eq!(exported[0].answer.as_deref(), Some("apples"));
        assert_eq!(exported[1].answer.as_deref(), Some("A2"));
    }

    #[test]
    fn text_before_the_first_question_is_ignored() {
        let exported = parse_export_text("My exam\n\n1. Q1\n\n3. not a new item\n\n2. Q2");
        let numbers: Vec<usize> = exported.iter().map(|q| q.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(exported[0].question, "Q1\n\n3. not a new item");
    }
}
