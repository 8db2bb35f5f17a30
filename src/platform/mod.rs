//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input mapping (keys, swipes)
//! - Storage (LocalStorage on web, files natively)
//! - The wasm-bindgen host API

pub mod input;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputCommand, SwipeTracker, command_for_key};
