use sonoscribe::presentation::ffi::{
    sonoscribe_free, sonoscribe_free_string, sonoscribe_init, sonoscribe_transcribe,
};

#[test]
fn given_null_model_path_when_initializing_then_null_handle() {
    let handle = unsafe { sonoscribe_init(std::ptr::null()) };

    assert!(handle.is_null());
}

#[test]
fn given_null_handle_when_transcribing_then_null_string() {
    let text = unsafe { sonoscribe_transcribe(std::ptr::null_mut(), std::ptr::null()) };

    assert!(text.is_null());
}

#[test]
fn given_null_pointers_when_releasing_then_no_crash() {
    unsafe {
        sonoscribe_free(std::ptr::null_mut());
        sonoscribe_free_string(std::ptr::null_mut());
    }
}
