use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub provider: TranscriptionProvider,
    /// Model file path for the local engine, or model name for the remote one.
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    Local,
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

impl Settings {
    /// Builds settings from `SONOSCRIBE_*` environment variables, falling
    /// back to the local engine with a conventional model path.
    pub fn from_env() -> Self {
        let provider = match std::env::var("SONOSCRIBE_ENGINE_PROVIDER")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase()
            .as_str()
        {
            "openai" => TranscriptionProvider::OpenAi,
            "mock" => TranscriptionProvider::Mock,
            _ => TranscriptionProvider::Local,
        };

        Self {
            engine: EngineSettings {
                provider,
                model: std::env::var("SONOSCRIBE_MODEL")
                    .unwrap_or_else(|_| "models/ggml-base.en.bin".to_string()),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: std::env::var("SONOSCRIBE_BASE_URL").ok(),
            },
            logging: LoggingSettings {
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}
