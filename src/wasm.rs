use crate::error::BitboardError;

/// Error type of fallible exports: a thrown `Error` on wasm, the plain error elsewhere
#[cfg(target_arch = "wasm32")]
pub type HostError = wasm_bindgen::JsError;

#[cfg(not(target_arch = "wasm32"))]
pub type HostError = BitboardError;

/// Logs an error message to the console
#[cfg(target_arch = "wasm32")]
pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Logs a message to the console
#[cfg(target_arch = "wasm32")]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(message: &str) {
    eprintln!("{message}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(message: &str) {
    print!("{message}");
}

/// Reports `err` on the console and converts it for the caller
pub fn throw(context: &str, err: BitboardError) -> HostError {
    console_error(&format!("{context}: {err}"));
    err.into()
}
