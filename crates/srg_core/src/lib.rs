//! SRG Core - Backend logic for Source Recognition GUI
//!
//! This crate contains all business logic with zero UI dependencies:
//! the audio file model, the prediction HTTP client, and logging setup.
//! It can be used by the GUI application or a CLI tool.

pub mod client;
pub mod logging;
pub mod media;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
