//! JSON frames for a JavaScript renderer

use crate::driver::Renderer;
use crate::sim::Snapshot;

/// Serializes each snapshot, keeping the latest frame
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    frame: String,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame, empty before the first render
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, frame: &Snapshot<'_>) {
        match serde_json::to_string(frame) {
            Ok(json) => self.frame = json,
            Err(e) => log::warn!("Could not serialize frame: {}", e),
        }
    }
}
