/// Cloudflare Workers AI text-generation provider
///
/// Runs a prompt against an instruction-tuned model through the Cloudflare REST
/// API: `POST <api_url>/accounts/<account_id>/ai/run/<model>` with a bearer
/// token. Credentials come from `Config` at construction time.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{RunRequest, RunResponse},
    services::providers::TextGenerator,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct WorkersAiProvider {
    http_client: HttpClient,
    api_url: String,
    account_id: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl WorkersAiProvider {
    pub fn new(
        http_client: HttpClient,
        api_url: String,
        account_id: String,
        api_key: String,
        model: String,
        max_tokens: u32,
    ) -> Self {
        Self {
            http_client,
            api_url,
            account_id,
            api_key,
            model,
            max_tokens,
        }
    }

    pub fn from_config(http_client: HttpClient, config: &Config) -> Self {
        Self::new(
            http_client,
            config.cloudflare_api_url.clone(),
            config.cloudflare_account_id.clone(),
            config.cloudflare_api_key.clone(),
            config.ai_model.clone(),
            config.ai_max_tokens,
        )
    }

    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.api_url.trim_end_matches('/'),
            self.account_id,
            self.model
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for WorkersAiProvider {
    async fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        let request = RunRequest {
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
        };

        let response = self
            .http_client
            .post(self.run_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let body: RunResponse = response.json().await?;
        let result = body
            .result
            .ok_or_else(|| AppError::ExternalApi("API response missing result".to_string()))?;
        let text = result.into_text();

        tracing::info!(
            model = %self.model,
            generated = text.is_some(),
            provider = self.name(),
            "Text generation completed"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "workers_ai"
    }
}
