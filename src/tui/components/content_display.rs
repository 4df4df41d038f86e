//! # ContentDisplay Component
//!
//! Renders the prose description in one of two modes:
//!
//! - **Streaming** (`is_loading`): the text verbatim as one wrapped block
//!   with a trailing cursor glyph. No tokenization — the content is still
//!   in flux.
//! - **Interactive**: the finalized text split into whitespace-preserving
//!   tokens; every word whose punctuation-stripped form is non-empty
//!   becomes an activatable span, hit-testable by mouse position.
//!   Punctuation-only runs render as inert text.
//!
//! Tokenization and layout are pure functions of the inputs, recomputed on
//! every draw; nothing persists across frames except the hover index and
//! the hit boxes cached for mouse handling (see [`ContentState`]).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// The fixed punctuation set stripped from a word to form its clean token.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '"', '\''];

/// One run of a tokenized text: either whitespace or a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    /// The run exactly as it appears in the source text.
    pub literal: String,
    /// False for whitespace runs.
    pub is_word: bool,
    /// The literal with [`PUNCTUATION`] stripped. Empty for whitespace runs
    /// and for punctuation-only words.
    pub clean: String,
}

/// Strip the fixed punctuation set (every occurrence, not just edges).
pub fn clean_word(word: &str) -> String {
    word.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Split `content` into alternating whitespace and word runs.
///
/// Total: concatenating the literals reproduces `content` exactly.
pub fn tokenize(content: &str) -> Vec<WordToken> {
    let mut tokens: Vec<WordToken> = Vec::new();
    for ch in content.chars() {
        let is_word = !ch.is_whitespace();
        match tokens.last_mut() {
            Some(token) if token.is_word == is_word => token.literal.push(ch),
            _ => tokens.push(WordToken {
                literal: ch.to_string(),
                is_word,
                clean: String::new(),
            }),
        }
    }
    for token in &mut tokens {
        if token.is_word {
            token.clean = clean_word(&token.literal);
        }
    }
    tokens
}

/// Screen-space hit box of one activatable word, relative to the content
/// area's origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordHit {
    pub line: u16,
    pub col: u16,
    pub width: u16,
    /// The callback payload: the punctuation-stripped token.
    pub clean: String,
}

/// A laid-out frame of the content area: styled lines plus the hit boxes
/// of every activatable word. Rebuilt from scratch on every draw.
pub struct ContentLayout {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<WordHit>,
}

impl ContentLayout {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// The activatable word at a content-relative position, if any.
    pub fn word_at(&self, x: u16, y: u16) -> Option<(usize, &WordHit)> {
        self.hits
            .iter()
            .enumerate()
            .find(|(_, hit)| hit.line == y && x >= hit.col && x < hit.col + hit.width)
    }
}

/// Persistent presentation state for the content area: the hover index and
/// the previous frame's hit boxes (used to resolve mouse events that
/// arrive between draws).
#[derive(Default)]
pub struct ContentState {
    pub hovered: Option<usize>,
    pub hits: Vec<WordHit>,
    /// Y offset of the content area inside the scrollable canvas.
    pub origin_y: u16,
}

fn word_style(hovered: bool) -> Style {
    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);
    if hovered { style.bg(Color::DarkGray) } else { style }
}

fn cursor_span(cursor_glyph: char) -> Span<'static> {
    Span::styled(
        cursor_glyph.to_string(),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::SLOW_BLINK),
    )
}

/// Lay out `content` for the given width.
///
/// Streaming mode ignores token structure entirely; interactive mode
/// word-wraps tokens and records a hit box per activatable word. Empty
/// content while not loading yields an empty layout (renders nothing).
pub fn layout_content(
    content: &str,
    width: u16,
    is_loading: bool,
    cursor_glyph: char,
    hovered: Option<usize>,
) -> ContentLayout {
    if is_loading {
        return layout_streaming(content, width, cursor_glyph);
    }
    if content.is_empty() {
        return ContentLayout {
            lines: Vec::new(),
            hits: Vec::new(),
        };
    }
    layout_interactive(content, width, hovered)
}

fn layout_streaming(content: &str, width: u16, cursor_glyph: char) -> ContentLayout {
    let options = textwrap::Options::new((width as usize).max(1))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let mut lines: Vec<Line<'static>> = textwrap::wrap(content, options)
        .into_iter()
        .map(|l| Line::from(l.into_owned()))
        .collect();
    match lines.last_mut() {
        Some(line) => line.push_span(cursor_span(cursor_glyph)),
        None => lines.push(Line::from(cursor_span(cursor_glyph))),
    }
    ContentLayout {
        lines,
        hits: Vec::new(),
    }
}

fn layout_interactive(content: &str, width: u16, hovered: Option<usize>) -> ContentLayout {
    let tokens = tokenize(content);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut col: u16 = 0;
    let mut pending_ws = String::new();
    let mut hits: Vec<WordHit> = Vec::new();

    let flush =
        |lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>, col: &mut u16| {
            lines.push(Line::from(std::mem::take(current)));
            *col = 0;
        };

    for token in tokens {
        if !token.is_word {
            // Explicit newlines force line breaks; the whitespace after the
            // last newline is carried to the next word. Trailing spaces at a
            // break are dropped from the layout (never from the tokens).
            let mut parts = token.literal.split('\n');
            pending_ws.push_str(parts.next().unwrap_or(""));
            for part in parts {
                flush(&mut lines, &mut current, &mut col);
                pending_ws = part.to_string();
            }
            continue;
        }

        let word_width = token.literal.width() as u16;
        let ws_width = pending_ws.width() as u16;
        if col > 0 && col + ws_width + word_width > width {
            flush(&mut lines, &mut current, &mut col);
            pending_ws.clear();
        }
        if !pending_ws.is_empty() {
            current.push(Span::raw(std::mem::take(&mut pending_ws)));
            col += ws_width;
        }

        if token.clean.is_empty() {
            // Punctuation-only run: inert literal text.
            current.push(Span::raw(token.literal));
        } else {
            let index = hits.len();
            current.push(Span::styled(
                token.literal,
                word_style(hovered == Some(index)),
            ));
            hits.push(WordHit {
                line: lines.len() as u16,
                col,
                width: word_width.min(width.saturating_sub(col)).max(1),
                clean: token.clean,
            });
        }
        col += word_width;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    ContentLayout { lines, hits }
}
