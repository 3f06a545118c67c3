//! Answering one explain request: input resolution, cache, subject
//! classification, generation, parsing.

use crate::error::ExplainError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES};
use crate::models::{ExplainRequest, ExplanationResult, ModelExplanation};
use crate::prompts::{
    CLASSIFIER_SYSTEM_PROMPT, FALLBACK_SUBJECT, TUTOR_SYSTEM_PROMPT, explanation_prompt,
    is_known_subject, subject_detection_prompt,
};
use crate::state::AppState;

pub async fn explain(
    state: &AppState,
    req: ExplainRequest,
) -> Result<ExplanationResult, ExplainError> {
    let text = resolve_text(state, req.text, req.image_base64).await?;

    // a hit wins over any subject the caller sent
    if let Some(cached) = state.cache.lookup(&text) {
        CACHE_HITS.inc();
        tracing::info!(subject = %cached.subject_detected, "cache hit");
        return Ok(cached);
    }
    CACHE_MISSES.inc();

    let subject = match req.subject {
        Some(subject) => subject,
        None => detect_subject(state, &text).await?,
    };
    tracing::info!(subject = %subject, "cache miss, generating explanation");

    let raw = state
        .completion
        .complete(TUTOR_SYSTEM_PROMPT, &explanation_prompt(&text, &subject))
        .await?;
    let result = parse_explanation(&raw)?.into_result(subject);

    state.cache.store(&text, result.clone());
    Ok(result)
}

async fn resolve_text(
    state: &AppState,
    text: Option<String>,
    image_base64: Option<String>,
) -> Result<String, ExplainError> {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        return Ok(text);
    }

    let Some(image) = image_base64.filter(|i| !i.is_empty()) else {
        return Err(ExplainError::NoInput);
    };

    let extraction = state.extractor.extract(&image).await;
    if !extraction.success {
        return Err(ExplainError::ExtractionFailed(
            extraction.error.unwrap_or_else(|| "unknown OCR error".to_string()),
        ));
    }
    if extraction.text.is_empty() {
        return Err(ExplainError::NoInput);
    }
    Ok(extraction.text)
}

async fn detect_subject(state: &AppState, text: &str) -> Result<String, ExplainError> {
    let raw = state
        .completion
        .complete(CLASSIFIER_SYSTEM_PROMPT, &subject_detection_prompt(text))
        .await?;

    let subject = first_token(&raw).ok_or_else(|| {
        ExplainError::MalformedOutput("empty subject classification".to_string())
    })?;

    if is_known_subject(&subject) {
        return Ok(subject);
    }
    if state.strict_subjects {
        tracing::warn!(subject = %subject, "unknown subject, using fallback");
        return Ok(FALLBACK_SUBJECT.to_string());
    }
    tracing::debug!(subject = %subject, "classifier returned an unlisted subject");
    Ok(subject)
}

// First whitespace-delimited token, lower-cased
pub fn first_token(raw: &str) -> Option<String> {
    raw.split_whitespace().next().map(str::to_lowercase)
}

/// Parses the tutor reply. Anything other than a JSON object with
/// correctly typed fields is malformed; missing fields are fine.
pub fn parse_explanation(raw: &str) -> Result<ModelExplanation, ExplainError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ExplainError::MalformedOutput(e.to_string()))?;
    if !value.is_object() {
        return Err(ExplainError::MalformedOutput("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ExplainError::MalformedOutput(e.to_string()))
}
