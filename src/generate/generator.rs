use std::fmt;

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use super::types::StreamChunk;

/// Errors that can occur during generator operations.
#[derive(Debug)]
pub enum GeneratorError {
    /// The mpsc channel was closed (TUI dropped the receiver). Not retryable.
    ChannelClosed,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::ChannelClosed => write!(f, "channel closed"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Everything a generator needs to fulfill a request.
pub struct ArtRequest<'a> {
    pub topic: &'a str,
}

#[async_trait]
pub trait ArtGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Streams a piece for the given request, sending chunks to the
    /// provided channel: one `Art`, any number of `Description` fragments,
    /// then `Completed`.
    async fn stream_art(
        &self,
        request: ArtRequest<'_>,
        sender: Sender<StreamChunk>,
    ) -> Result<(), GeneratorError>;
}
