use clap::Parser;
use std::time::Duration;

// largest TTL chrono::Duration can hold, in seconds
pub const MAX_CACHE_TTL_SECS: u64 = i64::MAX as u64 / 1000;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "tutor-gateway")]
#[command(about = "Caching tutoring-explanation service in English, Kiswahili and Sheng")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    // Completion API credential
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    // Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_URL", default_value = "https://api.openai.com/v1")]
    pub openai_url: String,

    // Model used for classification and explanations
    #[arg(short, long, env = "OPENAI_MODEL", default_value = "gpt-4.1-mini")]
    pub model: String,

    // Cache TTL in seconds (6 hours)
    #[arg(
        short,
        long,
        default_value_t = 21_600,
        value_parser = clap::value_parser!(u64).range(1..=MAX_CACHE_TTL_SECS)
    )]
    pub cache_ttl: u64,

    // Timeout for each collaborator call, in seconds
    #[arg(long, default_value_t = 25)]
    pub llm_timeout: u64,

    // OCR binary
    #[arg(long, env = "TESSERACT_CMD", default_value = "tesseract")]
    pub tesseract_cmd: String,

    // Replace classifier answers outside the known subjects with "other"
    #[arg(long, default_value_t = false)]
    pub strict_subjects: bool,
}

impl Args {
    pub fn cache_ttl(&self) -> chrono::Duration {
        // range-checked by clap, so this fits in an i64
        chrono::Duration::seconds(self.cache_ttl as i64)
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout)
    }
}
