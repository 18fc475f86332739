mod settings;

pub use settings::{EngineSettings, LoggingSettings, Settings, TranscriptionProvider};
