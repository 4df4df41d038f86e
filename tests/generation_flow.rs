//! End-to-end flow: gallery generator → stream chunks → reducer → reveal.
//!
//! Drives the offline generator exactly the way the TUI's forwarding task
//! does, without a terminal.

use std::sync::Arc;
use std::time::{Duration, Instant};

use etch::core::action::{Action, Effect, update};
use etch::core::state::App;
use etch::generate::{ArtGenerator, ArtRequest, GalleryGenerator, StreamChunk};
use etch::tui::components::RevealState;
use etch::tui::components::content_display::tokenize;

/// Run one full generation for the app's current topic, applying every
/// chunk through the reducer.
async fn run_generation(app: &mut App) {
    let generator = app.generator.clone();
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);
    generator
        .stream_art(ArtRequest { topic: &app.topic }, tx)
        .await
        .expect("gallery generation should not fail");

    while let Some(chunk) = rx.recv().await {
        let action = match chunk {
            StreamChunk::Art(piece) => Action::ArtReady(piece),
            StreamChunk::Description(text) => Action::DescriptionChunk(text),
            StreamChunk::Completed => Action::GenerationDone,
        };
        update(app, action);
    }
}

fn test_app() -> App {
    App::new(Arc::new(GalleryGenerator::instant()), String::new())
}

#[tokio::test]
async fn generation_flows_through_the_reducer() {
    let mut app = test_app();
    assert_eq!(
        update(&mut app, Action::Explore("fox".to_string())),
        Effect::SpawnGeneration
    );
    assert!(app.is_loading);

    run_generation(&mut app).await;

    assert!(!app.is_loading);
    let piece = app.art.as_ref().expect("art should have arrived");
    assert!(piece.art.contains('/'));
    assert_eq!(piece.caption(), "Ears first, questions later.");
    assert!(app.description.contains("moon"));
    assert_eq!(app.status_message, "Click a word to explore it");
}

#[tokio::test]
async fn revealed_art_matches_the_generated_piece_exactly() {
    let mut app = test_app();
    update(&mut app, Action::Explore("moon".to_string()));
    run_generation(&mut app).await;

    let piece = app.art.as_ref().unwrap();
    let mut reveal = RevealState::new(
        Duration::from_millis(5),
        Duration::from_millis(15),
        '*',
    );
    let t0 = Instant::now();
    reveal.set_piece(Some(piece), t0);
    reveal.advance(t0 + Duration::from_secs(3600));

    assert_eq!(reveal.visible_art(), piece.art);
    assert_eq!(reveal.visible_caption(), piece.caption());
    assert!(!reveal.is_streaming_art());
    assert!(!reveal.is_streaming_caption());
}

#[tokio::test]
async fn clicking_a_description_word_explores_it() {
    let mut app = test_app();
    update(&mut app, Action::Explore("fox".to_string()));
    run_generation(&mut app).await;

    // Find the clean token for "moon." the way the click path does
    let clean = tokenize(&app.description)
        .into_iter()
        .find(|t| t.clean == "moon")
        .map(|t| t.clean)
        .expect("fox description mentions the moon");

    let effect = update(&mut app, Action::WordActivated(clean));
    assert_eq!(effect, Effect::SpawnGeneration);
    assert_eq!(app.topic, "moon");
    assert!(app.history.contains(&"fox".to_string()));
    assert!(app.art.is_none());
    assert!(app.description.is_empty());

    run_generation(&mut app).await;
    assert!(app.description.contains("tides"));
}

#[tokio::test]
async fn superseding_a_topic_restarts_the_reveal() {
    let mut app = test_app();
    update(&mut app, Action::Explore("rust".to_string()));
    run_generation(&mut app).await;
    let first_revision = app.art_revision;

    let mut reveal = RevealState::new(
        Duration::from_millis(5),
        Duration::from_millis(15),
        '*',
    );
    let t0 = Instant::now();
    reveal.set_piece(app.art.as_ref(), t0);
    reveal.advance(t0 + Duration::from_millis(15));
    let partial = reveal.visible_art().to_string();
    assert!(!partial.is_empty());

    // New topic mid-reveal: revision moves, reveal resets from scratch
    update(&mut app, Action::Explore("dust".to_string()));
    assert!(app.art_revision > first_revision);
    reveal.set_piece(app.art.as_ref(), t0 + Duration::from_millis(15));
    assert_eq!(reveal.visible_art(), "*"); // cleared piece → placeholder

    run_generation(&mut app).await;
    let piece = app.art.as_ref().unwrap();
    let t1 = Instant::now();
    reveal.set_piece(Some(piece), t1);
    reveal.advance(t1 + Duration::from_secs(3600));
    // The finished reveal is exactly the new piece, with no leftover prefix
    assert_eq!(reveal.visible_art(), piece.art);
    assert_eq!(reveal.visible_caption(), piece.caption());
}

#[tokio::test]
async fn unknown_topic_degrades_to_fallback_not_failure() {
    let mut app = test_app();
    update(&mut app, Action::Explore("zeppelin".to_string()));
    run_generation(&mut app).await;

    assert!(!app.is_loading);
    assert!(app.art.is_some());
    assert!(app.description.contains("zeppelin"));
}
