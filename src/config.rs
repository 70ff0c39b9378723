use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // In-process cache
    pub cache_ttl_seconds: u64,

    // Hosted generation API
    pub genai_base_url: String,
    pub genai_api_key: String,
    pub genai_text_model: String,
    pub genai_image_model: String,
    pub genai_timeout_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Cache
        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600); // 1 hour default

        // Hosted generation API
        let genai_base_url = env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.generative.example".to_string());
        let genai_api_key = env::var("GENAI_API_KEY").context("GENAI_API_KEY must be set")?;
        let genai_text_model =
            env::var("GENAI_TEXT_MODEL").unwrap_or_else(|_| "sahab-pro".to_string());
        let genai_image_model =
            env::var("GENAI_IMAGE_MODEL").unwrap_or_else(|_| "sahab-image".to_string());
        let genai_timeout_seconds = env::var("GENAI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(120); // 2 minutes default for LLM calls

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            cache_ttl_seconds,
            genai_base_url,
            genai_api_key,
            genai_text_model,
            genai_image_model,
            genai_timeout_seconds,
        })
    }
}
