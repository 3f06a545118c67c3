use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use crate::metrics::OCR_FAILURES;
use crate::models::Extraction;

/// Turns a base64 image into text. Failures are reported in the
/// returned [`Extraction`], never as an error.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, image_base64: &str) -> Extraction;
}

// Accepts raw base64 or a data URL ("data:image/png;base64,....")
pub fn decode_image(image_base64: &str) -> Result<Vec<u8>, String> {
    let payload = match image_base64.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => image_base64,
    };
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| format!("invalid base64 image: {}", e))?;
    if bytes.is_empty() {
        return Err("image is empty".to_string());
    }
    Ok(bytes)
}

// Runs the tesseract CLI, image on stdin and text on stdout
pub struct TesseractExtractor {
    command: String,
    timeout: Duration,
}

impl TesseractExtractor {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    async fn run(&self, image: Vec<u8>) -> Result<String, String> {
        let mut child = Command::new(&self.command)
            .args(["stdin", "stdout"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("failed to start {}: {}", self.command, e))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| "tesseract stdin unavailable".to_string())?;
        stdin
            .write_all(&image)
            .await
            .map_err(|e| format!("failed to send image: {}", e))?;
        drop(stdin); // EOF

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| format!("tesseract failed: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("tesseract exited with {}: {}", output.status, stderr.trim()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    async fn extract(&self, image_base64: &str) -> Extraction {
        let image = match decode_image(image_base64) {
            Ok(bytes) => bytes,
            Err(e) => {
                OCR_FAILURES.inc();
                return Extraction::failed(e);
            }
        };

        let outcome = match tokio::time::timeout(self.timeout, self.run(image)).await {
            Ok(result) => result,
            Err(_) => Err(format!("tesseract timed out after {:?}", self.timeout)),
        };

        match outcome {
            Ok(text) => {
                tracing::debug!(chars = text.len(), "extracted text from image");
                Extraction::ok(text)
            }
            Err(e) => {
                OCR_FAILURES.inc();
                Extraction::failed(e)
            }
        }
    }
}
