use serde::{Deserialize, Serialize};

// Inbound request for /api/explain
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ExplainRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

// Response body, also what the cache holds
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplanationResult {
    pub english: String,
    pub kiswahili: String,
    pub sheng: String,
    pub key_points: Vec<String>,
    pub common_mistakes: String,
    pub subject_detected: String,
}

/// The JSON object the tutor prompt asks the model for.
///
/// Every field is optional on the wire; absent fields become empty.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ModelExplanation {
    pub english: String,
    pub kiswahili: String,
    pub sheng: String,
    pub key_points: Vec<String>,
    pub common_mistakes: String,
}

impl ModelExplanation {
    pub fn into_result(self, subject: String) -> ExplanationResult {
        ExplanationResult {
            english: self.english,
            kiswahili: self.kiswahili,
            sheng: self.sheng,
            key_points: self.key_points,
            common_mistakes: self.common_mistakes,
            subject_detected: subject,
        }
    }
}

// OpenAI chat completions request format
#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize, Debug)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

// OpenAI chat completions response format (only what we read)
#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

// Result of one OCR attempt; failures are carried as data
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Extraction {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}
