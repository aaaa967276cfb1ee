mod bitset;
mod error;
mod masks;
mod square;
mod wasm;

pub use error::BitboardError;

use bitset::BinaryRows;
use js_sys::Array;
use masks::StartingMask;
use wasm::{console_log, throw, HostError};
use wasm_bindgen::prelude::*;

/// Installs a panic hook forwarding Rust panics to the console, a no-op without
/// the `console_error_panic_hook` feature
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Prints the bitboard in binary, one line per rank, most significant bit first
#[wasm_bindgen]
pub fn visualize(bitboard: i64) {
    console_log(&BinaryRows(bitboard as u64).to_string());
}

/// Gets the bitboard with only the given square (e.g. "e4") set
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = getBitboardPosition))]
pub fn get_bitboard_position(position: &str) -> Result<i64, HostError> {
    let bitboard = square::bitboard_position(position)
        .map_err(|e| throw("Error resolving square", e))?;
    Ok(bitboard as i64)
}

/// Gets the bit index of a square, 0 for "h1" up to 63 for "a8"
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = squareIndex))]
pub fn square_index(position: &str) -> Result<u32, HostError> {
    square::square_index(position).map_err(|e| throw("Error resolving square", e))
}

/// Gets the name of the square at a bit index, 0 being "h1" and 63 "a8"
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = squareName))]
pub fn square_name(index: u32) -> Result<String, HostError> {
    square::square_name(index).map_err(|e| throw("Error naming square", e))
}

/// Lists the squares set in the bitboard, lowest bit first
#[wasm_bindgen(js_name = activeSquares)]
pub fn active_squares(bitboard: i64) -> Array {
    square::active_squares(bitboard as u64)
        .map(|name| JsValue::from_str(&name))
        .collect()
}

/// Gets the starting-position mask for a piece letter (K, Q, B, N, R, P) or a side (white, black)
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = startingMask))]
pub fn starting_mask(symbol: &str) -> Result<i64, HostError> {
    let mask = StartingMask::from_symbol(symbol)
        .map_err(|e| throw("Error resolving starting mask", e))?;
    Ok(mask.bits() as i64)
}
