use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str =
    "https://www.portalinmobiliario.com/venta/casa/propiedades-usadas/las-condes-metropolitana";

/// Runtime settings. Every variable is optional; the defaults reproduce a
/// short polite run against the Las Condes search section.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub max_pages: u32,
    pub max_records: usize,
    pub delay_ms: u64,
    pub ollama_endpoint: String,
    pub ollama_model: String,
    pub max_prompt_chars: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            base_url: env::var("PORTAL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            max_pages: var_or("MAX_PAGES", 3)?,
            max_records: var_or("MAX_RECORDS", 20)?,
            delay_ms: var_or("DELAY_MS", 1000)?,
            ollama_endpoint: env::var("OLLAMA_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:11434/api/generate".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "deepseek-r1:1.5b".to_string()),
            max_prompt_chars: var_or("MAX_PROMPT_CHARS", 2100)?,
        })
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn var_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => Ok(raw.parse()?),
        Err(_) => Ok(default),
    }
}
