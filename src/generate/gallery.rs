//! Built-in offline generator.
//!
//! Serves a small gallery of canned pieces keyed by topic, with a
//! deterministic fallback for anything it doesn't know. The description is
//! streamed word by word (with a configurable delay) so the streaming
//! rendering path behaves exactly as it would against a real generator.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::mpsc::Sender;

use super::generator::{ArtGenerator, ArtRequest, GeneratorError};
use super::types::{ArtPiece, StreamChunk};

struct GalleryEntry {
    topic: &'static str,
    art: &'static str,
    caption: &'static str,
    description: &'static str,
}

const GALLERY: &[GalleryEntry] = &[
    GalleryEntry {
        topic: "rust",
        art: r"
       _~^~^~_
   \) /  o o  \ (/
     '_   u   _'
     \ '-----' /
",
        caption: "Ferris, drawn from memory.",
        description: "Rust is a systems language named, depending on who you \
ask, after a fungus or after oxidized iron. Its mascot is a crab called \
Ferris, which is why half the ecosystem's tools have claw puns in their \
names. People come for the speed and stay for the compiler errors.",
    },
    GalleryEntry {
        topic: "crab",
        art: r"
    ,~~_
   |/\ =_ _ ~
    _( )_( )\~~
    \,\  _|\ \~~~
       \`   \
       `~~~~~`
",
        caption: "Sideways is also forwards.",
        description: "A crab wears its skeleton on the outside and walks \
sideways to wherever it is going. Some of them climb trees, some punch \
with the force of a bullet, and at least one of them is the mascot of \
rust. Evolution keeps reinventing the crab, so it must be onto something.",
    },
    GalleryEntry {
        topic: "fox",
        art: r"
     /\   /\
    //\\_//\\
    \_     _/
     / * * \
     \_\O/_/
      /   \
     /     \
",
        caption: "Ears first, questions later.",
        description: "The fox is a small wild canid that behaves like a cat \
wearing a dog costume. It hunts by ear, pouncing through snow at sounds it \
cannot see, and is said to do its best work under the moon. Folklore gives \
it nine tails and a talent for mischief.",
    },
    GalleryEntry {
        topic: "moon",
        art: r"
        _..._
      .:::::::.
     :::::::::::
     :::::::::::
     `:::::::::'
       `':::''
",
        caption: "Our only natural satellite.",
        description: "The moon is slowly drifting away from us at about the \
speed fingernails grow. It raises the tides, steadies the seasons, and \
gives the fox something to howl at by proxy. Twelve people have walked on \
it; all of them came back talking about the dust.",
    },
    GalleryEntry {
        topic: "dust",
        art: r"
   .  *  .   . *
  *   . ~ .  .
    . * . ~ *  .
  ~  .   *  .
",
        caption: "Mostly stardust, technically.",
        description: "Dust is what everything else becomes eventually. On \
the moon it is sharp and smells of gunpowder; in your house it is mostly \
fibers and visitors from outside. Interstellar dust is where new stars \
are born, which is a generous career change.",
    },
];

/// Fallback art for topics the gallery doesn't know.
const FALLBACK_ART: &str = r"
      _____
     /     \
    |  ??   |
     \_____/
";

/// Offline gallery generator.
///
/// `delay` controls the pacing of streamed description chunks; `None`
/// streams everything immediately (the `instant` generator).
pub struct GalleryGenerator {
    delay: Option<Duration>,
}

impl GalleryGenerator {
    pub fn new(stream_delay_ms: u64) -> Self {
        Self {
            delay: Some(Duration::from_millis(stream_delay_ms)),
        }
    }

    /// A generator that streams without delays.
    pub fn instant() -> Self {
        Self { delay: None }
    }

    fn lookup(topic: &str) -> Option<&'static GalleryEntry> {
        let wanted = topic.trim().to_lowercase();
        GALLERY.iter().find(|entry| entry.topic == wanted)
    }

    fn piece_for(topic: &str) -> (ArtPiece, String) {
        match Self::lookup(topic) {
            Some(entry) => (
                ArtPiece::new(entry.art.trim_matches('\n'), Some(entry.caption)),
                entry.description.to_string(),
            ),
            None => (
                ArtPiece::new(
                    FALLBACK_ART.trim_matches('\n'),
                    Some("Nothing on file for this one."),
                ),
                format!(
                    "The gallery has no sketch of {topic} yet. It does know \
about rust, a crab, a fox, the moon, and some dust; any of those words \
will take you somewhere."
                ),
            ),
        }
    }
}

#[async_trait]
impl ArtGenerator for GalleryGenerator {
    fn name(&self) -> &str {
        match self.delay {
            Some(_) => "gallery",
            None => "instant",
        }
    }

    async fn stream_art(
        &self,
        request: ArtRequest<'_>,
        sender: Sender<StreamChunk>,
    ) -> Result<(), GeneratorError> {
        info!("Gallery request for topic: {}", request.topic);
        let (piece, description) = Self::piece_for(request.topic);

        sender
            .send(StreamChunk::Art(piece))
            .await
            .map_err(|_| GeneratorError::ChannelClosed)?;

        // Word-ish chunks: each fragment keeps its trailing whitespace so
        // the concatenation reproduces the description exactly.
        for fragment in description.split_inclusive(char::is_whitespace) {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            debug!("Streaming description fragment (len={})", fragment.len());
            sender
                .send(StreamChunk::Description(fragment.to_string()))
                .await
                .map_err(|_| GeneratorError::ChannelClosed)?;
        }

        sender
            .send(StreamChunk::Completed)
            .await
            .map_err(|_| GeneratorError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect_chunks(topic: &str) -> Vec<StreamChunk> {
        let generator = GalleryGenerator::instant();
        let (tx, mut rx) = tokio::sync::mpsc::channel(100);
        generator
            .stream_art(ArtRequest { topic }, tx)
            .await
            .unwrap();
        let mut chunks = Vec::new();
        while let Some(chunk) = rx.recv().await {
            chunks.push(chunk);
        }
        chunks
    }

    #[test]
    fn art_first_then_description_then_completed() {
        let chunks = tokio_test::block_on(collect_chunks("rust"));
        assert!(matches!(chunks.first(), Some(StreamChunk::Art(_))));
        assert!(matches!(chunks.last(), Some(StreamChunk::Completed)));
        assert!(
            chunks[1..chunks.len() - 1]
                .iter()
                .all(|c| matches!(c, StreamChunk::Description(_)))
        );
    }

    #[test]
    fn description_fragments_reassemble_exactly() {
        let chunks = tokio_test::block_on(collect_chunks("fox"));
        let streamed: String = chunks
            .iter()
            .filter_map(|c| match c {
                StreamChunk::Description(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        let expected = GalleryGenerator::piece_for("fox").1;
        assert_eq!(streamed, expected);
    }

    #[test]
    fn known_topic_is_case_insensitive() {
        let (piece, _) = GalleryGenerator::piece_for("  MoOn ");
        assert_eq!(piece.caption(), "Our only natural satellite.");
    }

    #[test]
    fn unknown_topic_gets_fallback() {
        let (piece, description) = GalleryGenerator::piece_for("zeppelin");
        assert!(piece.art.contains("??"));
        assert!(description.contains("zeppelin"));
    }

    #[test]
    fn every_entry_has_art_and_caption() {
        for entry in GALLERY {
            assert!(!entry.art.trim().is_empty(), "{} has no art", entry.topic);
            assert!(!entry.caption.is_empty(), "{} has no caption", entry.topic);
            assert!(
                !entry.description.is_empty(),
                "{} has no description",
                entry.topic
            );
        }
    }

    #[test]
    fn closed_channel_is_an_error() {
        let generator = GalleryGenerator::instant();
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        drop(rx);
        let result =
            tokio_test::block_on(generator.stream_art(ArtRequest { topic: "rust" }, tx));
        assert!(matches!(result, Err(GeneratorError::ChannelClosed)));
    }
}
