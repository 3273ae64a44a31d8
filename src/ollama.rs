use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Local models can take minutes on long prompts.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);

const TRUNCATION_MARKER: &str = "... [truncated]";

/// Client for the Ollama generate endpoint. One prompt in, one completion
/// out; prompts beyond the character budget are cut with a visible marker.
pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    max_prompt_chars: usize,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(endpoint: &str, model: &str, max_prompt_chars: usize) -> Self {
        let http = reqwest::Client::builder()
            .timeout(GENERATE_TIMEOUT)
            .build()
            .expect("failed to build http client");

        Self {
            http,
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            max_prompt_chars,
        }
    }

    pub async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let prompt = truncate(prompt, self.max_prompt_chars);
        debug!(model = %self.model, chars = prompt.chars().count(), "Sending generate request");

        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };

        let res = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("ollama request failed, is the server running?")?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            bail!("ollama returned {status}: {body}");
        }

        let parsed: GenerateResponse = res.json().await.context("decoding ollama response")?;
        Ok(parsed.response)
    }
}

/// Cap `prompt` at `max_chars` characters, appending a marker when anything
/// was cut. Cuts on character boundaries.
fn truncate(prompt: &str, max_chars: usize) -> String {
    match prompt.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &prompt[..cut], TRUNCATION_MARKER),
        None => prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_prompts_pass_through() {
        assert_eq!(truncate("analyze this", 2100), "analyze this");
    }

    #[test]
    fn prompt_at_budget_is_untouched() {
        let prompt = "a".repeat(2100);
        assert_eq!(truncate(&prompt, 2100), prompt);
    }

    #[test]
    fn long_prompts_end_with_marker() {
        let prompt = "a".repeat(3000);
        let cut = truncate(&prompt, 2100);
        assert!(cut.ends_with(TRUNCATION_MARKER));
        assert_eq!(cut.chars().count(), 2100 + TRUNCATION_MARKER.chars().count());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let prompt = "ñ".repeat(50);
        let cut = truncate(&prompt, 10);
        assert!(cut.starts_with(&"ñ".repeat(10)));
        assert!(cut.ends_with(TRUNCATION_MARKER));
    }
}
