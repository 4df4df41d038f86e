//! # Application State
//!
//! Core business state for Etch. This module contains domain logic only -
//! no TUI-specific types. Presentation state (reveal cursors, scroll
//! offsets, word hover) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── generator: Arc<dyn ArtGenerator>   // art source (black box)
//! ├── topic: String                      // what is being sketched
//! ├── art: Option<ArtPiece>              // latest finished piece
//! ├── art_revision: u64                  // bumped whenever `art` changes
//! ├── description: String                // prose, grows while streaming
//! ├── is_loading: bool                   // generation in flight
//! ├── status_message: String             // status bar text
//! └── history: Vec<String>               // previously explored topics
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::generate::{ArtGenerator, ArtPiece};
use std::sync::Arc;

pub struct App {
    pub generator: Arc<dyn ArtGenerator>,
    pub topic: String,
    pub art: Option<ArtPiece>,
    /// Bumped every time `art` is set or cleared. The TUI compares this
    /// against the revision it last fed to the reveal animation, so a
    /// superseded piece always restarts the reveal from scratch.
    pub art_revision: u64,
    pub description: String,
    pub is_loading: bool,
    pub status_message: String,
    pub history: Vec<String>,
}

impl App {
    pub fn new(generator: Arc<dyn ArtGenerator>, topic: String) -> Self {
        Self {
            generator,
            topic,
            art: None,
            art_revision: 0,
            description: String::new(),
            is_loading: false,
            status_message: String::from("Press Enter to sketch a topic"),
            history: Vec::new(),
        }
    }

    pub fn from_config(generator: Arc<dyn ArtGenerator>, config: &ResolvedConfig) -> Self {
        Self::new(generator, config.topic.clone())
    }
}
