//! # Art Generation
//!
//! The boundary to the content-generation collaborator. The UI treats a
//! generator as a black box that, given a topic, streams back a finished
//! [`ArtPiece`] followed by chunks of prose description.
//!
//! The shipped generators are offline (a built-in gallery), so the binary
//! runs without any network access. A real AI-backed generator would slot
//! in behind the same [`ArtGenerator`] trait.

pub mod gallery;
mod generator;
mod types;

pub use gallery::GalleryGenerator;
pub use generator::{ArtGenerator, ArtRequest, GeneratorError};
pub use types::{ArtPiece, StreamChunk};
