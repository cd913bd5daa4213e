use std::env;

const DEFAULT_INFERENCE_URL: &str = "http://127.0.0.1:11434";
const DEFAULT_MODEL: &str = "llama2";
const DEFAULT_TTS_URL: &str = "https://translate.google.com/translate_tts";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the local OpenAI-compatible inference server.
    pub inference_url: String,
    /// Model name passed through to the inference server.
    pub model: String,
    /// Speech-synthesis endpoint returning MP3 bytes.
    pub tts_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to local-first
    /// defaults for every value.
    pub fn from_env() -> Self {
        Self {
            inference_url: env_or("BLOGSMITH_INFERENCE_URL", DEFAULT_INFERENCE_URL),
            model: env_or("BLOGSMITH_MODEL", DEFAULT_MODEL),
            tts_url: env_or("BLOGSMITH_TTS_URL", DEFAULT_TTS_URL),
            bind_addr: env_or("BLOGSMITH_BIND_ADDR", DEFAULT_BIND_ADDR),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_local_first() {
        let config = AppConfig {
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            tts_url: DEFAULT_TTS_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        };
        assert!(config.inference_url.starts_with("http://127.0.0.1"));
        assert!(config.bind_addr.starts_with("127.0.0.1"));
    }
}
