use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// One generated question with its optional answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ExamItem {
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl ExamItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Some(answer.into()),
        }
    }

    /// The answer, if present and not blank.
    pub fn visible_answer(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.is_empty())
    }
}

/// An element of a generated exam. Models sometimes emit bare strings instead of
/// objects; those are kept as `Prompt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExamEntry {
    Prompt(String),
    Item(ExamItem),
}

impl ExamEntry {
    /// Lifts an arbitrary JSON element without rejecting it.
    pub fn from_value(value: JsonValue) -> Self {
        match value {
            JsonValue::String(text) => ExamEntry::Prompt(text),
            JsonValue::Object(mut fields) => ExamEntry::Item(ExamItem {
                question: fields
                    .remove("question")
                    .and_then(field_text)
                    .unwrap_or_default(),
                answer: fields.remove("answer").and_then(field_text),
            }),
            other => ExamEntry::Prompt(other.to_string()),
        }
    }
}

fn field_text(value: JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl From<ExamItem> for ExamEntry {
    fn from(item: ExamItem) -> Self {
        ExamEntry::Item(item)
    }
}

/// The outcome of a generation as seen by the caller: nothing yet, an unstructured
/// text blob, or an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExamResult {
    #[default]
    Empty,
    Text(String),
    Items(Vec<ExamEntry>),
}

impl ExamResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, ExamResult::Empty)
    }

    pub fn items(&self) -> &[ExamEntry] {
        match self {
            ExamResult::Items(entries) => entries,
            _ => &[],
        }
    }
}

impl From<Vec<ExamItem>> for ExamResult {
    fn from(items: Vec<ExamItem>) -> Self {
        ExamResult::Items(items.into_iter().map(ExamEntry::Item).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_without_answer_keep_question() {
        let entry = ExamEntry::from_value(json!({ "question": "What is 2+2?" }));
        assert_eq!(
            entry,
            ExamEntry::Item(ExamItem {
                question: "What is 2+2?".into(),
                answer: None,
            })
        );
    }

    #[test]
    fn non_string_fields_are_rendered_as_text() {
        let entry = ExamEntry::from_value(json!({ "question": "6 * 7", "answer": 42 }));
        assert_eq!(entry, ExamEntry::Item(ExamItem::new("6 * 7", "42")));
    }

    #[test]
    fn scalars_become_prompts() {
        assert_eq!(
            ExamEntry::from_value(json!("Define entropy")),
            ExamEntry::Prompt("Define entropy".into())
        );
        assert_eq!(ExamEntry::from_value(json!(7)), ExamEntry::Prompt("7".into()));
    }

    #[test]
    fn result_wire_shapes() {
        assert_eq!(serde_json::to_value(ExamResult::Empty).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(ExamResult::Text("raw".into())).unwrap(),
            json!("raw")
        );
        let items = ExamResult::from(vec![ExamItem::new("Q1", "A1")]);
        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            json!([{ "question": "Q1", "answer": "A1" }])
        );

        let parsed: ExamResult =
            serde_json::from_value(json!(["plain", { "question": "Q2" }])).unwrap();
        assert_eq!(
            parsed,
            ExamResult::Items(vec![
                ExamEntry::Prompt("plain".into()),
                ExamEntry::Item(ExamItem {
                    question: "Q2".into(),
                    answer: None
                }),
            ])
        );
        let parsed: ExamResult = serde_json::from_value(json!(null)).unwrap();
        assert!(parsed.is_empty());
    }
}
