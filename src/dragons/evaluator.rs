// Pitch evaluation orchestration
//
// Fans one pitch out to the selected dragons as concurrent upstream calls,
// extracts each JSON verdict, and synthesizes an improved pitch from the
// aggregated feedback on request. All-or-nothing: one failed dragon fails
// the whole batch.

use futures::future;
use serde_json::Value;

use crate::claude::{ClaudeClient, MessageRequest};
use crate::config::constants::{EVALUATION_MAX_TOKENS, IMPROVEMENT_MAX_TOKENS};

use super::error::EvalError;
use super::feedback::{extract_feedback, FeedbackRecord};
use super::registry::DragonRegistry;

/// System prompt for the improved-pitch synthesis call.
const IMPROVEMENT_SYSTEM_PROMPT: &str = "\
You are a business pitch consultant helping students improve their ideas. You receive an original pitch and feedback from multiple evaluators. Your job is to create an improved version of the pitch that addresses the key concerns raised while maintaining the core idea.

Guidelines:
- Keep the same basic business concept
- Address the specific critiques and questions raised
- Make it more concrete and compelling
- Add missing elements (numbers, customer insights, execution details, etc.)
- Keep it concise (2-3 paragraphs)
- Write in first person as if you're the entrepreneur";

pub struct PitchEvaluator {
    client: ClaudeClient,
    registry: DragonRegistry,
    class_password: String,
    model: String,
}

impl PitchEvaluator {
    pub fn new(
        client: ClaudeClient,
        registry: DragonRegistry,
        class_password: String,
        model: String,
    ) -> Self {
        Self {
            client,
            registry,
            class_password,
            model,
        }
    }

    /// Check a caller-supplied password against the shared class secret.
    pub fn check_password(&self, password: &str) -> bool {
        password == self.class_password
    }

    /// Evaluate `pitch` with every dragon in `dragon_ids`, concurrently.
    ///
    /// Records come back in the same order as `dragon_ids`. The batch waits
    /// for every call to settle; the first failure in request order fails
    /// the whole operation and partial results are discarded.
    pub async fn evaluate(
        &self,
        pitch: &str,
        dragon_ids: &[String],
        password: &str,
    ) -> Result<Vec<FeedbackRecord>, EvalError> {
        if !self.check_password(password) {
            return Err(EvalError::Unauthorized);
        }
        if pitch.trim().is_empty() {
            return Err(EvalError::InvalidRequest("pitch must not be empty"));
        }
        if dragon_ids.is_empty() {
            return Err(EvalError::InvalidRequest("no dragons selected"));
        }

        tracing::info!(dragons = ?dragon_ids, "Evaluating pitch");

        let calls = dragon_ids.iter().map(|id| self.dragon_feedback(id, pitch));
        let results = future::join_all(calls).await;

        results.into_iter().collect()
    }

    async fn dragon_feedback(
        &self,
        dragon_id: &str,
        pitch: &str,
    ) -> Result<FeedbackRecord, EvalError> {
        let dragon = self.registry.lookup(dragon_id)?;

        let request = MessageRequest::new(format!("Business Pitch:\n\n{pitch}"))
            .with_model(&self.model)
            .with_max_tokens(EVALUATION_MAX_TOKENS)
            .with_system(&dragon.system_prompt);

        let response = self.client.send_message(&request).await?;
        let text = response.text();
        tracing::debug!(dragon = dragon_id, response = %text, "Dragon responded");

        extract_feedback(dragon_id, &text)
    }

    /// Synthesize an improved pitch from the aggregated feedback.
    ///
    /// One upstream call; the model's text comes back unmodified. This
    /// path has no JSON contract.
    pub async fn improve(
        &self,
        original_pitch: &str,
        feedback: &[FeedbackRecord],
        password: &str,
    ) -> Result<String, EvalError> {
        if !self.check_password(password) {
            return Err(EvalError::Unauthorized);
        }
        if original_pitch.trim().is_empty() {
            return Err(EvalError::InvalidRequest("originalPitch must not be empty"));
        }
        if feedback.is_empty() {
            return Err(EvalError::InvalidRequest("feedback must not be empty"));
        }

        tracing::info!(entries = feedback.len(), "Improving pitch from dragon feedback");

        let summary = render_feedback_summary(feedback);
        let request = MessageRequest::new(format!(
            "Original Pitch:\n{original_pitch}\n\nDragon Feedback:\n{summary}\n\n\
             Please write an improved version of this pitch that addresses the dragons' \
             concerns and answers their key questions. Make it stronger, more specific, \
             and more compelling."
        ))
        .with_model(&self.model)
        .with_max_tokens(IMPROVEMENT_MAX_TOKENS)
        .with_system(IMPROVEMENT_SYSTEM_PROMPT);

        let response = self.client.send_message(&request).await?;

        Ok(response.text())
    }
}

/// Render feedback records as the consolidated block the synthesis call sees:
/// one `Name (rating/10): critique` + `Key Question:` paragraph per dragon,
/// in batch order, joined by blank lines.
fn render_feedback_summary(feedback: &[FeedbackRecord]) -> String {
    feedback
        .iter()
        .map(|f| {
            format!(
                "{} ({}/10): {}\nKey Question: {}",
                display_name(&f.dragon_id),
                render_value(&f.rating),
                render_value(&f.critique),
                render_value(&f.question),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Dragon id with its first character upper-cased. Multi-word ids get no
/// special handling.
fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Feedback values are untyped pass-throughs; strings render bare,
/// everything else renders as JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(dragon_id: &str, rating: Value, critique: &str, question: &str) -> FeedbackRecord {
        FeedbackRecord {
            dragon_id: dragon_id.to_string(),
            rating,
            critique: json!(critique),
            question: json!(question),
        }
    }

    #[test]
    fn test_display_name_capitalizes_first_char() {
        assert_eq!(display_name("skylar"), "Skylar");
        assert_eq!(display_name("z"), "Z");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_summary_renders_one_block_per_dragon_in_order() {
        let feedback = vec![
            record("skylar", json!(6), "Cute but derivative.", "What's your moat?"),
            record("alex", json!(4), "No unit economics shown.", "What's CAC vs LTV?"),
        ];

        let summary = render_feedback_summary(&feedback);
        assert_eq!(
            summary,
            "Skylar (6/10): Cute but derivative.\nKey Question: What's your moat?\n\n\
             Alex (4/10): No unit economics shown.\nKey Question: What's CAC vs LTV?"
        );
    }

    #[test]
    fn test_summary_passes_non_string_values_through() {
        let feedback = vec![FeedbackRecord {
            dragon_id: "terra".to_string(),
            rating: json!("7"),
            critique: Value::Null,
            question: json!(["a"]),
        }];

        let summary = render_feedback_summary(&feedback);
        assert_eq!(summary, "Terra (7/10): null\nKey Question: [\"a\"]");
    }
}
