//! # TopicInput Component
//!
//! Single-line text input for entering the next topic to sketch.
//!
//! The buffer is internal state; everything else arrives as events. Emits
//! [`InputEvent::Submit`] with the trimmed buffer when Enter is pressed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the TopicInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted a topic (Enter pressed with non-blank content)
    Submit(String),
}

/// Single-line topic input.
pub struct TopicInput {
    /// Text buffer (internal state)
    pub buffer: String,
}

impl TopicInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }
}

impl Default for TopicInput {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for TopicInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) if *c != '\n' => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(data) => {
                // Newlines make no sense in a topic; flatten them to spaces.
                self.buffer
                    .extend(data.chars().map(|c| if c == '\n' { ' ' } else { c }));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                let topic = self.buffer.trim().to_string();
                if topic.is_empty() {
                    return None;
                }
                self.buffer.clear();
                Some(InputEvent::Submit(topic))
            }
            _ => None,
        }
    }
}

impl Component for TopicInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" topic ");

        let input = Paragraph::new(self.buffer.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(input, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_to_buffer() {
        let mut input = TopicInput::new();
        assert_eq!(input.handle_event(&TuiEvent::InputChar('f')), None);
        assert_eq!(input.handle_event(&TuiEvent::InputChar('o')), None);
        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(input.buffer, "fox");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut input = TopicInput::new();
        input.handle_event(&TuiEvent::InputChar('a'));
        input.handle_event(&TuiEvent::InputChar('b'));
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "a");

        // Backspace on an empty buffer is a no-op
        input.handle_event(&TuiEvent::Backspace);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "");
    }

    #[test]
    fn submit_trims_and_clears() {
        let mut input = TopicInput::new();
        for c in "  moon ".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        let event = input.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(InputEvent::Submit("moon".to_string())));
        assert_eq!(input.buffer, "");
    }

    #[test]
    fn submit_blank_emits_nothing() {
        let mut input = TopicInput::new();
        input.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut input = TopicInput::new();
        input.handle_event(&TuiEvent::Paste("red\nfox".to_string()));
        assert_eq!(input.buffer, "red fox");
    }
}
