//! # ArtDisplay Component
//!
//! Typewriter reveal for a generated [`ArtPiece`]: the art body is revealed
//! character by character, and once it finishes, the caption follows at a
//! slower pace. The animation state machine lives in [`RevealState`]; the
//! [`ArtDisplay`] widget is a transient view over it, created fresh each
//! frame (the same split as `MessageList` state vs. `Message` widget).
//!
//! ## Stages
//!
//! ```text
//! Idle → Art → (Caption | Idle) → Idle
//! ```
//!
//! Transitions are driven by piece changes (external) and tick exhaustion
//! (internal). There is no user input into this state machine and no error
//! state: empty strings complete immediately.
//!
//! ## Ticking
//!
//! There are no timers here. The event loop calls
//! [`RevealState::advance`] with the current instant on every iteration
//! while animating; `advance` appends every character that has become due
//! since the last step. This keeps the reveal cadence independent of the
//! redraw cadence, and makes the whole animation testable with synthetic
//! instants.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::generate::ArtPiece;

/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Total horizontal space consumed by borders (1 left + 1 right).
const HORIZONTAL_OVERHEAD: u16 = 2;

/// Which reveal stage is currently advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Art,
    Caption,
}

/// The two-stage reveal state machine.
///
/// Invariants:
/// - `visible_art` is always a prefix of the current piece's art.
/// - `visible_caption` is always a prefix of the current piece's caption.
/// - The caption stage only starts after the art stage has finished;
///   at most one stage advances at any instant.
pub struct RevealState {
    art_chars: Vec<char>,
    caption_chars: Vec<char>,
    stage: Stage,
    visible_art: String,
    visible_caption: String,
    art_cursor: usize,
    caption_cursor: usize,
    art_tick: Duration,
    caption_tick: Duration,
    placeholder: char,
    last_step: Instant,
}

impl RevealState {
    pub fn new(art_tick: Duration, caption_tick: Duration, placeholder: char) -> Self {
        let mut state = Self {
            art_chars: Vec::new(),
            caption_chars: Vec::new(),
            stage: Stage::Idle,
            visible_art: String::new(),
            visible_caption: String::new(),
            art_cursor: 0,
            caption_cursor: 0,
            art_tick,
            caption_tick,
            placeholder,
            last_step: Instant::now(),
        };
        state.reset_idle();
        state
    }

    /// Supply a new piece (or none), superseding whatever was revealing.
    ///
    /// This is the only cancellation path and it is idempotent: any
    /// in-flight reveal is discarded unconditionally, so characters from a
    /// superseded piece can never leak into the new one. `None` resets to
    /// the placeholder idle display.
    pub fn set_piece(&mut self, piece: Option<&ArtPiece>, now: Instant) {
        match piece {
            Some(piece) => {
                self.art_chars = piece.art.chars().collect();
                self.caption_chars = piece.caption().chars().collect();
                self.visible_art = String::new();
                self.visible_caption = String::new();
                self.art_cursor = 0;
                self.caption_cursor = 0;
                self.stage = Stage::Art;
                self.last_step = now;
            }
            None => self.reset_idle(),
        }
    }

    fn reset_idle(&mut self) {
        self.art_chars = Vec::new();
        self.caption_chars = Vec::new();
        self.visible_art = self.placeholder.to_string();
        self.visible_caption = String::new();
        self.art_cursor = 0;
        self.caption_cursor = 0;
        self.stage = Stage::Idle;
    }

    /// Append every character that has become due by `now`.
    ///
    /// Steps are paced from the previous step, not from `now`, so a coarse
    /// redraw cadence catches up instead of slowing the reveal down.
    pub fn advance(&mut self, now: Instant) {
        loop {
            match self.stage {
                Stage::Idle => return,
                Stage::Art => {
                    if self.art_cursor >= self.art_chars.len() {
                        // Stage A complete. Stage B only runs when there is
                        // a caption to reveal.
                        self.stage = if self.caption_chars.is_empty() {
                            Stage::Idle
                        } else {
                            Stage::Caption
                        };
                        continue;
                    }
                    if now.saturating_duration_since(self.last_step) < self.art_tick {
                        return;
                    }
                    self.last_step += self.art_tick;
                    self.visible_art.push(self.art_chars[self.art_cursor]);
                    self.art_cursor += 1;
                }
                Stage::Caption => {
                    if self.caption_cursor >= self.caption_chars.len() {
                        self.stage = Stage::Idle;
                        continue;
                    }
                    if now.saturating_duration_since(self.last_step) < self.caption_tick {
                        return;
                    }
                    self.last_step += self.caption_tick;
                    self.visible_caption
                        .push(self.caption_chars[self.caption_cursor]);
                    self.caption_cursor += 1;
                }
            }
        }
    }

    /// The revealed prefix of the art (or the placeholder when idle with
    /// no piece).
    pub fn visible_art(&self) -> &str {
        &self.visible_art
    }

    /// The revealed prefix of the caption.
    pub fn visible_caption(&self) -> &str {
        &self.visible_caption
    }

    pub fn is_streaming_art(&self) -> bool {
        self.stage == Stage::Art
    }

    pub fn is_streaming_caption(&self) -> bool {
        self.stage == Stage::Caption
    }

    /// True while either stage still has work to do.
    pub fn is_animating(&self) -> bool {
        self.stage != Stage::Idle
    }

    /// Whether the caption block should occupy space in the layout:
    /// only when it has content or is currently animating.
    fn caption_visible(&self) -> bool {
        !self.visible_caption.is_empty() || self.is_streaming_caption()
    }
}

/// Transient widget rendering the current reveal state.
///
/// # Props
///
/// - `reveal`: The persistent animation state (held in `TuiState`)
/// - `topic`: Used only for the block title, not behavior
/// - `cursor_glyph`: Trailing glyph shown on whichever stage is streaming
#[derive(Clone, Copy)]
pub struct ArtDisplay<'a> {
    reveal: &'a RevealState,
    topic: &'a str,
    cursor_glyph: char,
}

impl<'a> ArtDisplay<'a> {
    pub fn new(reveal: &'a RevealState, topic: &'a str, cursor_glyph: char) -> Self {
        Self {
            reveal,
            topic,
            cursor_glyph,
        }
    }

    /// Number of art body lines currently visible (at least 1).
    fn art_line_count(reveal: &RevealState) -> u16 {
        (reveal.visible_art().lines().count() as u16).max(1)
    }

    /// Caption line count after wrapping, matching the `Paragraph` below.
    fn caption_line_count(reveal: &RevealState, content_width: u16) -> u16 {
        if !reveal.caption_visible() {
            return 0;
        }
        if content_width == 0 {
            return 1;
        }
        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        // +1 column for the trailing cursor glyph while streaming
        let mut text = reveal.visible_caption().to_string();
        if reveal.is_streaming_caption() {
            text.push('_');
        }
        (textwrap::wrap(&text, options).len() as u16).max(1)
    }

    /// Calculate the height required for the current reveal state at the
    /// given width. Must stay in lockstep with `render` so the parent can
    /// size the scroll area without rendering first.
    pub fn calculate_height(reveal: &RevealState, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        let art_lines = Self::art_line_count(reveal);
        let caption_lines = Self::caption_line_count(reveal, content_width);
        // Caption gets a blank spacer line between it and the art.
        let caption_block = if caption_lines > 0 {
            caption_lines + 1
        } else {
            0
        };
        art_lines + caption_block + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for ArtDisplay<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let streaming = self.reveal.is_animating();
        let border_style = if streaming {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .title(format!(" {} ", self.topic));

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor_span = || {
            Span::styled(
                self.cursor_glyph.to_string(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::SLOW_BLINK),
            )
        };

        // Art body: no wrapping, art is spatial.
        let mut art_lines: Vec<Line> = self
            .reveal
            .visible_art()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if self.reveal.is_streaming_art() {
            match art_lines.last_mut() {
                Some(line) => line.push_span(cursor_span()),
                None => art_lines.push(Line::from(cursor_span())),
            }
        }
        let art_height = (art_lines.len() as u16).max(1);
        let art_area = Rect {
            height: art_height.min(inner.height),
            ..inner
        };
        Paragraph::new(art_lines).render(art_area, buf);

        // Caption: present only when it has content or is animating.
        if self.reveal.caption_visible() {
            let mut caption_line = Line::from(Span::styled(
                self.reveal.visible_caption().to_string(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ));
            if self.reveal.is_streaming_caption() {
                caption_line.push_span(cursor_span());
            }
            let caption_y = inner.y + art_height + 1;
            if caption_y < inner.y + inner.height {
                let caption_area = Rect {
                    y: caption_y,
                    height: inner.height - (art_height + 1),
                    ..inner
                };
                Paragraph::new(caption_line)
                    .wrap(Wrap { trim: false })
                    .render(caption_area, buf);
            }
        }
    }
}
