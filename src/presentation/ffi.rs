//! C ABI surface for host applications embedding the transcriber.
//!
//! Ownership across the boundary: every pointer returned by this module has
//! exactly one corresponding release function, and failure branches return
//! null without allocating. Errors are logged through tracing rather than
//! surfaced as text, matching the null-on-failure contract.

use std::ffi::{CStr, CString, c_char};
use std::path::Path;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::application::ports::TranscriptionError;
use crate::application::services::TranscriptionService;
use crate::infrastructure::audio::{TranscriptionEngineFactory, WavPcmDecoder};
use crate::infrastructure::observability::TracingObserver;
use crate::presentation::config::Settings;

/// Opaque recognizer session handed across the C boundary.
pub struct RecognizerHandle {
    runtime: Runtime,
    service: TranscriptionService<WavPcmDecoder>,
}

fn build_handle(model_path: &str) -> Result<RecognizerHandle, TranscriptionError> {
    let settings = Settings::from_env();

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| TranscriptionError::ModelLoadFailed(format!("runtime: {}", e)))?;

    let engine = TranscriptionEngineFactory::create(
        settings.engine.provider,
        model_path,
        settings.engine.api_key,
        settings.engine.base_url,
    )?;
    let decoder = Arc::new(WavPcmDecoder::with_observer(Arc::new(TracingObserver)));

    Ok(RecognizerHandle {
        runtime,
        service: TranscriptionService::new(decoder, engine),
    })
}

/// Creates a recognizer session for the model at `model_path`.
///
/// Returns null when the path is null or invalid UTF-8, or when the engine
/// fails to load. The handle must be released with [`sonoscribe_free`].
///
/// # Safety
///
/// `model_path` must be null or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn sonoscribe_init(model_path: *const c_char) -> *mut RecognizerHandle {
    if model_path.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(model_path) = unsafe { CStr::from_ptr(model_path) }.to_str() else {
        return std::ptr::null_mut();
    };

    match build_handle(model_path) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            tracing::error!(error = %e, "Recognizer initialization failed");
            std::ptr::null_mut()
        }
    }
}

/// Transcribes the WAV file at `audio_path` using an initialized session.
///
/// Returns a NUL-terminated UTF-8 string that must be released with
/// [`sonoscribe_free_string`], or null on any failure.
///
/// # Safety
///
/// `handle` must be null or a pointer returned by [`sonoscribe_init`] that
/// has not been freed. `audio_path` must be null or a valid NUL-terminated
/// C string.
#[no_mangle]
pub unsafe extern "C" fn sonoscribe_transcribe(
    handle: *mut RecognizerHandle,
    audio_path: *const c_char,
) -> *mut c_char {
    if handle.is_null() || audio_path.is_null() {
        return std::ptr::null_mut();
    }
    let handle = unsafe { &*handle };
    let Ok(audio_path) = unsafe { CStr::from_ptr(audio_path) }.to_str() else {
        return std::ptr::null_mut();
    };

    let outcome = handle
        .runtime
        .block_on(handle.service.transcribe_file(Path::new(audio_path)));

    match outcome {
        Ok(transcript) => match CString::new(transcript.text) {
            Ok(text) => text.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            tracing::error!(error = %e, path = audio_path, "Transcription failed");
            std::ptr::null_mut()
        }
    }
}

/// Releases a session created by [`sonoscribe_init`]. Null is a no-op.
///
/// # Safety
///
/// `handle` must be null or a pointer returned by [`sonoscribe_init`] that
/// has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn sonoscribe_free(handle: *mut RecognizerHandle) {
    if handle.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(handle) });
}

/// Releases a string returned by [`sonoscribe_transcribe`]. Null is a no-op.
///
/// # Safety
///
/// `text` must be null or a pointer returned by [`sonoscribe_transcribe`]
/// that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn sonoscribe_free_string(text: *mut c_char) {
    if text.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(text) });
}
