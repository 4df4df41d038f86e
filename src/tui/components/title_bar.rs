//! # TitleBar Component
//!
//! Top status bar showing application state.
//!
//! TitleBar is purely presentational — it receives all data as props and
//! has no internal state. Props are stored as struct fields rather than
//! passed to `render()` because the `Component` trait requires a fixed
//! render signature.
//!
//! The title text changes based on state:
//!
//! 1. **Loading**: `"Etch (gallery) | Sketching fox... | ✦ generating"`
//! 2. **Status message**: `"Etch (gallery) | Click a word to explore it"`
//! 3. **Default**: `"Etch (gallery)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `generator_name`: Which art generator is active (e.g. "gallery")
/// - `status_message`: Transient status (e.g. "Sketching fox...")
/// - `is_loading`: Whether a generation is in flight
pub struct TitleBar {
    pub generator_name: String,
    pub status_message: String,
    pub is_loading: bool,
}

impl TitleBar {
    pub fn new(generator_name: String, status_message: String, is_loading: bool) -> Self {
        Self {
            generator_name,
            status_message,
            is_loading,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.is_loading {
            format!(
                "Etch ({}) | {} | ✦ generating",
                self.generator_name, self.status_message
            )
        } else if self.status_message.is_empty() {
            format!("Etch ({})", self.generator_name)
        } else {
            format!("Etch ({}) | {}", self.generator_name, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
