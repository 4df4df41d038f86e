//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use crate::generate::{ArtGenerator, ArtRequest, GeneratorError, StreamChunk};

/// A no-op generator for tests that don't need real content.
pub struct NoopGenerator;

#[async_trait]
impl ArtGenerator for NoopGenerator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn stream_art(
        &self,
        _request: ArtRequest<'_>,
        _sender: Sender<StreamChunk>,
    ) -> Result<(), GeneratorError> {
        Ok(())
    }
}

/// Creates a test App with a NoopGenerator.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopGenerator), "rust".to_string())
}
