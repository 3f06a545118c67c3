#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tutor_gateway::cache::ExplanationCache;
use tutor_gateway::error::LlmError;
use tutor_gateway::llm::CompletionClient;
use tutor_gateway::models::Extraction;
use tutor_gateway::ocr::TextExtractor;
use tutor_gateway::state::AppState;

/// Completion client that replays canned replies and records prompts.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedCompletion {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::Transport("no scripted reply left".into())))
    }
}

/// Extractor returning a fixed outcome.
pub struct FixedExtractor {
    outcome: Extraction,
    calls: Mutex<Vec<String>>,
}

impl FixedExtractor {
    pub fn new(outcome: Extraction) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextExtractor for FixedExtractor {
    async fn extract(&self, image_base64: &str) -> Extraction {
        self.calls.lock().unwrap().push(image_base64.to_string());
        self.outcome.clone()
    }
}

pub fn state(completion: Arc<ScriptedCompletion>, extractor: Arc<FixedExtractor>) -> AppState {
    AppState::new(
        ExplanationCache::new(chrono::Duration::hours(6)),
        completion,
        extractor,
    )
}

pub const FULL_REPLY: &str = r#"{
    "english": "Add the numbers.",
    "kiswahili": "Ongeza nambari.",
    "sheng": "Buda, si ni simple...",
    "key_points": ["add", "check"],
    "common_mistakes": "Forgetting to carry."
}"#;
