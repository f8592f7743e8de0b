// Feedback extraction from raw model output
//
// Dragons are instructed to answer with bare JSON, but the model often
// wraps it in prose or a code fence. The span from the first `{` to the
// last `}` is taken greedily and parsed as-is. Not a balanced-brace scan:
// a response containing two separate JSON-ish spans yields one corrupt
// span and therefore a parse failure.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::EvalError;

static JSON_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON span pattern is valid"));

/// One dragon's structured verdict on a pitch.
///
/// The three feedback fields are passed through exactly as the model sent
/// them: no type or range checks, missing fields become `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub dragon_id: String,

    /// 1-10 in practice, but whatever the model supplied
    #[serde(default)]
    pub rating: Value,

    #[serde(default)]
    pub critique: Value,

    #[serde(default)]
    pub question: Value,
}

/// Locate and parse the JSON object embedded in `text`.
pub fn extract_feedback(dragon_id: &str, text: &str) -> Result<FeedbackRecord, EvalError> {
    let span = JSON_SPAN
        .find(text)
        .ok_or_else(|| EvalError::ExtractionFailure {
            dragon_id: dragon_id.to_string(),
            source: None,
        })?;

    let parsed: Value =
        serde_json::from_str(span.as_str()).map_err(|e| EvalError::ExtractionFailure {
            dragon_id: dragon_id.to_string(),
            source: Some(e),
        })?;

    let field = |name: &str| parsed.get(name).cloned().unwrap_or(Value::Null);

    Ok(FeedbackRecord {
        dragon_id: dragon_id.to_string(),
        rating: field("rating"),
        critique: field("critique"),
        question: field("question"),
    })
}
