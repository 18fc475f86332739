use std::path::PathBuf;
use std::sync::Arc;

use sonoscribe::application::services::TranscriptionService;
use sonoscribe::infrastructure::audio::{TranscriptionEngineFactory, WavPcmDecoder};
use sonoscribe::infrastructure::observability::{TracingConfig, TracingObserver, init_tracing};
use sonoscribe::presentation::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig {
        json_format: settings.logging.json_format,
        ..TracingConfig::default()
    });

    let audio_path: PathBuf = std::env::args()
        .nth(1)
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("usage: sonoscribe <audio.wav>"))?;

    let engine = TranscriptionEngineFactory::create(
        settings.engine.provider,
        &settings.engine.model,
        settings.engine.api_key.clone(),
        settings.engine.base_url.clone(),
    )?;
    let decoder = Arc::new(WavPcmDecoder::with_observer(Arc::new(TracingObserver)));
    let service = TranscriptionService::new(decoder, engine);

    let transcript = service.transcribe_file(&audio_path).await?;
    println!("{}", transcript.text);

    Ok(())
}
