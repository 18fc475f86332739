mod init_tracing;
mod tracing_config;
mod tracing_observer;

pub use init_tracing::init_tracing;
pub use tracing_config::TracingConfig;
pub use tracing_observer::TracingObserver;
