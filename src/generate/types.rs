//! Data types crossing the generator boundary.

/// A finished piece of ASCII art with an optional one-line caption.
///
/// Produced entirely by a generator; the UI never mutates it. The caption
/// (`text`) is revealed after the art body, at a slower pace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtPiece {
    pub art: String,
    pub text: Option<String>,
}

impl ArtPiece {
    pub fn new(art: impl Into<String>, text: Option<&str>) -> Self {
        Self {
            art: art.into(),
            text: text.map(str::to_string),
        }
    }

    /// The caption, treating `None` and `Some("")` the same way.
    pub fn caption(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// One event in a generation stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamChunk {
    /// The finished art piece. Sent once, before any description chunks.
    Art(ArtPiece),
    /// A fragment of the prose description.
    Description(String),
    /// The stream is complete; no further chunks will arrive.
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_treats_none_as_empty() {
        let piece = ArtPiece::new("*", None);
        assert_eq!(piece.caption(), "");

        let piece = ArtPiece::new("*", Some("a star"));
        assert_eq!(piece.caption(), "a star");
    }
}
