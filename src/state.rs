use std::sync::Arc;
use crate::cache::ExplanationCache;
use crate::llm::CompletionClient;
use crate::ocr::TextExtractor;
// app's shared state

pub struct AppState {
    pub cache: ExplanationCache,                // question text -> explanation
    pub completion: Arc<dyn CompletionClient>,
    pub extractor: Arc<dyn TextExtractor>,
    pub strict_subjects: bool, // map unknown classifier answers to "other"
}

impl AppState {
    pub fn new(
        cache: ExplanationCache,
        completion: Arc<dyn CompletionClient>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            cache,
            completion,
            extractor,
            strict_subjects: false,
        }
    }

    pub fn with_strict_subjects(mut self, strict: bool) -> Self {
        self.strict_subjects = strict;
        self
    }
}
