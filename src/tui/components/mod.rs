//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing generator name and status
//! - `ArtDisplay`: Transient view over the reveal animation state
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TopicInput`: Single-line topic entry field
//! - `RevealState` / `ContentState`: Persistent animation and hit-test
//!   state owned by `TuiState`, rendered through transient widgets
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props", not by reaching into
//! global state; this keeps dependencies explicit and components testable
//! in isolation. Each component file contains everything related to that
//! component: state types, event types, rendering logic, and tests.

pub mod art_display;
pub mod content_display;
pub mod title_bar;
pub mod topic_input;

pub use art_display::{ArtDisplay, RevealState};
pub use content_display::{ContentLayout, ContentState, layout_content};
pub use title_bar::TitleBar;
pub use topic_input::{InputEvent, TopicInput};
