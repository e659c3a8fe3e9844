// ============================================================================
// Cloudflare Workers AI Types
// ============================================================================

use serde::{Deserialize, Serialize};

/// Request body for POST /accounts/{id}/ai/run/{model}
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

/// Envelope returned by the Cloudflare REST API
#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub result: Option<RunResult>,
}

/// Text-generation payload inside the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub response: Option<String>,
}

impl RunResult {
    /// The generated text, if the model produced any
    pub fn into_text(self) -> Option<String> {
        self.response.filter(|text| !text.is_empty())
    }
}
