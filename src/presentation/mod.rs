pub mod config;
pub mod ffi;

pub use config::{Settings, TranscriptionProvider};
pub use ffi::RecognizerHandle;
