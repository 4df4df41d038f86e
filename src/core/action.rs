//! # Actions
//!
//! Everything that can happen in Etch becomes an `Action`.
//! User submits a topic? That's `Action::Explore(topic)`.
//! The generator finishes a piece? That's `Action::ArtReady(piece)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns an `Effect` describing what the
//! caller should do next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.
//! And debuggable: log every action, replay the exact session.

use log::{info, warn};

use crate::core::state::App;
use crate::generate::ArtPiece;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User asked for a new topic (typed or via word click).
    Explore(String),
    /// A clickable word in the description was activated.
    /// The payload is the punctuation-stripped token.
    WordActivated(String),
    /// Go back to the previously explored topic.
    Back,
    /// The generator produced the finished art piece for the current topic.
    ArtReady(ArtPiece),
    /// A chunk of the streamed description arrived.
    DescriptionChunk(String),
    /// The generator finished streaming for the current topic.
    GenerationDone,
    /// The generator failed. Degrades to a status message, never a fault.
    GenerationFailed(String),
    /// User cancelled the in-flight generation.
    CancelGeneration,
    Quit,
}

/// What the caller (the TUI event loop) should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Abort any in-flight generation tasks and spawn a new one for
    /// `app.topic`.
    SpawnGeneration,
    Quit,
}

/// The reducer: applies an action to the state.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Explore(topic) => start_exploring(app, topic),
        Action::WordActivated(word) => {
            info!("Word activated: {word}");
            start_exploring(app, word)
        }
        Action::Back => match app.history.pop() {
            Some(previous) => {
                info!("Going back to: {previous}");
                app.topic = previous;
                clear_piece(app);
                app.is_loading = true;
                app.status_message = format!("Sketching {}...", app.topic);
                Effect::SpawnGeneration
            }
            None => {
                app.status_message = String::from("Nothing to go back to");
                Effect::None
            }
        },
        Action::ArtReady(piece) => {
            app.art = Some(piece);
            app.art_revision += 1;
            Effect::None
        }
        Action::DescriptionChunk(text) => {
            app.description.push_str(&text);
            Effect::None
        }
        Action::GenerationDone => {
            app.is_loading = false;
            app.status_message = String::from("Click a word to explore it");
            Effect::None
        }
        Action::GenerationFailed(message) => {
            warn!("Generation failed: {message}");
            app.is_loading = false;
            app.status_message = format!("Generation failed: {message}");
            Effect::None
        }
        Action::CancelGeneration => {
            app.is_loading = false;
            app.status_message = String::from("Generation cancelled");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Shared by `Explore` and `WordActivated`: switch to a new topic and
/// request a fresh piece. The old piece is cleared immediately so no
/// characters from it can leak into the new reveal.
fn start_exploring(app: &mut App, topic: String) -> Effect {
    let topic = topic.trim().to_string();
    if topic.is_empty() {
        return Effect::None;
    }
    if !app.topic.is_empty() && app.topic != topic {
        app.history.push(std::mem::take(&mut app.topic));
    }
    app.topic = topic;
    clear_piece(app);
    app.is_loading = true;
    app.status_message = format!("Sketching {}...", app.topic);
    Effect::SpawnGeneration
}

fn clear_piece(app: &mut App) {
    app.art = None;
    app.art_revision += 1;
    app.description.clear();
}
