use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value as JsonValue;

use crate::models::exam::{ExamEntry, ExamResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    #[error("No JSON array found in model response")]
    NoArrayFound,

    #[error("Malformed JSON in model response: {0}")]
    MalformedJson(String),
}

fn code_fence() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"```(?:[A-Za-z0-9_+-]*[ \t]*(?:\r?\n|$))?")
            .expect("code fence pattern is valid")
    })
}

/// Removes markdown code fences and trims.
///
/// A language tag is only dropped together with an opening fence that ends its
/// line, so text such as `` ```python `` inside a JSON string keeps the word.
pub fn strip_code_fences(raw: &str) -> String {
    code_fence().replace_all(raw, "").trim().to_string()
}

/// The span from the first `[` to the last `]`, if they appear in that order.
pub fn outer_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

/// Turns a free-form model reply into exam entries.
///
/// Only the outermost bracketed region is parsed, so a reply with two separate
/// arrays, or bracketed prose after the array, fails as `MalformedJson`.
pub fn normalize(raw: &str) -> Result<ExamResult, NormalizationError> {
    let cleaned = strip_code_fences(raw);
    let array = outer_array(&cleaned).ok_or(NormalizationError::NoArrayFound)?;

    let parsed: JsonValue = serde_json::from_str(array)
        .map_err(|e| NormalizationError::MalformedJson(e.to_string()))?;

    match parsed {
        JsonValue::Array(values) => Ok(ExamResult::Items(
            values.into_iter().map(ExamEntry::from_value).collect(),
        )),
        // A `[...]` slice that parses is always an array.
        other => Err(NormalizationError::MalformedJson(format!(
            "expected an array, found {}",
            other
        ))),
    }
}
