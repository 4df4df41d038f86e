//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (reveal in progress, description streaming): polls with
//!   a short timeout and advances the reveal every iteration.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Reveal ticking
//!
//! The typewriter reveal holds no timers. Each loop iteration while
//! animating calls `RevealState::advance(Instant::now())`, which appends
//! every character that has become due. When `app.art_revision` moves past
//! the revision last fed to the reveal, the piece changed (set, superseded,
//! or cleared) and the reveal is reset before anything else happens — that
//! reset is the cancellation path the animation relies on.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::generate::{ArtGenerator, ArtRequest, GalleryGenerator, StreamChunk};
use crate::tui::component::EventHandler;
use crate::tui::components::{ContentState, InputEvent, RevealState, TopicInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub reveal: RevealState,
    pub content: ContentState,
    pub topic_input: TopicInput,
    pub scroll_state: ScrollViewState,
    // Display config
    pub cursor_glyph: char,
    // The `App::art_revision` last fed into the reveal animation
    pub seen_art_revision: u64,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            reveal: RevealState::new(
                Duration::from_millis(config.art_tick_ms),
                Duration::from_millis(config.caption_tick_ms),
                config.placeholder_glyph,
            ),
            content: ContentState::default(),
            topic_input: TopicInput::new(),
            scroll_state: ScrollViewState::default(),
            cursor_glyph: config.cursor_glyph,
            seen_art_revision: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Hide // No text cursor; the reveal draws its own glyph
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Show);
    }
}

/// Build a generator from a resolved config's generator name.
pub fn build_generator(config: &ResolvedConfig) -> Arc<dyn ArtGenerator> {
    match config.generator.as_str() {
        "instant" => Arc::new(GalleryGenerator::instant()),
        _ => {
            // Default to the streaming gallery
            Arc::new(GalleryGenerator::new(config.stream_delay_ms))
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let generator = build_generator(&config);
    let mut app = App::from_config(generator, &config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background generation tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the current generation (Escape-to-cancel and
    // topic supersession both go through these)
    let mut active_abort_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    // Kick off the starting topic
    let initial_topic = app.topic.clone();
    if update(&mut app, Action::Explore(initial_topic)) == Effect::SpawnGeneration {
        active_abort_handles = spawn_generation(&app, tx.clone());
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        // A new piece (or a cleared one) supersedes the running reveal
        if tui.seen_art_revision != app.art_revision {
            tui.seen_art_revision = app.art_revision;
            tui.reveal.set_piece(app.art.as_ref(), Instant::now());
            tui.content.hovered = None;
            tui.scroll_state
                .set_offset(ratatui::layout::Position { x: 0, y: 0 });
            needs_redraw = true;
        }

        let animating = tui.reveal.is_animating() || app.is_loading;
        if animating {
            tui.reveal.advance(Instant::now());
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                // Esc cancels an in-flight generation, otherwise quits
                TuiEvent::Escape => {
                    if app.is_loading {
                        for handle in active_abort_handles.drain(..) {
                            handle.abort();
                        }
                        update(&mut app, Action::CancelGeneration);
                    } else if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                TuiEvent::Back => {
                    should_quit |= dispatch(
                        &mut app,
                        Action::Back,
                        &tx,
                        &mut active_abort_handles,
                    );
                }

                // Mouse hover over description words
                TuiEvent::MouseMove(x, y) => {
                    let frame_area = terminal.get_frame().area();
                    let offset_y = tui.scroll_state.offset().y;
                    tui.content.hovered =
                        ui::hit_test_word(x, y, frame_area, offset_y, &tui.content);
                }

                // Mouse click activates a word: its clean token becomes
                // the next topic
                TuiEvent::MouseClick(x, y) => {
                    let frame_area = terminal.get_frame().area();
                    let offset_y = tui.scroll_state.offset().y;
                    if let Some(index) =
                        ui::hit_test_word(x, y, frame_area, offset_y, &tui.content)
                    {
                        let clean = tui.content.hits[index].clean.clone();
                        should_quit |= dispatch(
                            &mut app,
                            Action::WordActivated(clean),
                            &tx,
                            &mut active_abort_handles,
                        );
                    }
                }

                TuiEvent::ScrollUp => tui.scroll_state.scroll_up(),
                TuiEvent::ScrollDown => tui.scroll_state.scroll_down(),

                // Everything else goes to the topic input
                other => {
                    if let Some(InputEvent::Submit(topic)) = tui.topic_input.handle_event(&other)
                    {
                        should_quit |= dispatch(
                            &mut app,
                            Action::Explore(topic),
                            &tx,
                            &mut active_abort_handles,
                        );
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (streamed generation chunks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, action, &tx, &mut active_abort_handles);
        }
        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Apply an action and carry out its effect. Returns true when the app
/// should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    active_abort_handles: &mut Vec<tokio::task::AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::SpawnGeneration => {
            // Supersede: a missed abort here would leak chunks from the
            // old topic into the new view
            for handle in active_abort_handles.drain(..) {
                handle.abort();
            }
            *active_abort_handles = spawn_generation(app, tx.clone());
            false
        }
        Effect::None => false,
    }
}

fn spawn_generation(app: &App, tx: mpsc::Sender<Action>) -> Vec<tokio::task::AbortHandle> {
    info!("Spawning generation for topic: {}", app.topic);

    // Clone what we need for the async task
    let generator = app.generator.clone();
    let topic = app.topic.clone();

    // Async channel for streamed chunks
    let (chunk_tx, mut chunk_rx) = tokio::sync::mpsc::channel::<StreamChunk>(100);

    // Clone tx for the streaming task
    let tx_stream = tx.clone();

    // Spawn the generator task
    let stream_handle = tokio::spawn(async move {
        let request = ArtRequest { topic: &topic };
        if let Err(e) = generator.stream_art(request, chunk_tx).await {
            info!("Generation error: {e}");
            if tx_stream.send(Action::GenerationFailed(e.to_string())).is_err() {
                warn!("Failed to send generation error action: receiver dropped");
            }
        }
    });

    // Spawn a task to forward chunks to the Action channel
    let forward_handle = tokio::spawn(async move {
        let mut forwarded_count = 0usize;
        while let Some(chunk) = chunk_rx.recv().await {
            forwarded_count += 1;
            let action = match chunk {
                StreamChunk::Art(piece) => Action::ArtReady(piece),
                StreamChunk::Description(text) => Action::DescriptionChunk(text),
                StreamChunk::Completed => {
                    info!("Generation complete: {forwarded_count} chunks");
                    if tx.send(Action::GenerationDone).is_err() {
                        warn!("Failed to send GenerationDone: receiver dropped");
                    }
                    return;
                }
            };
            if tx.send(action).is_err() {
                warn!("Failed to forward generation chunk: receiver dropped");
                return;
            }
        }

        // Fallback: channel closed without a Completed event
        info!("Generation channel closed: {forwarded_count} chunks");
        if tx.send(Action::GenerationDone).is_err() {
            warn!("Failed to send GenerationDone: receiver dropped");
        }
    });

    vec![stream_handle.abort_handle(), forward_handle.abort_handle()]
}
