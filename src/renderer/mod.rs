//! Snapshot consumers
//!
//! Real drawing happens in the host (canvas on the web). These renderers
//! cover the JSON hand-off to that host and a plain text view for terminals.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
