//! Etch library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod generate;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Generator {
    /// Built-in gallery with word-by-word description streaming
    #[default]
    Gallery,
    /// Gallery without streaming delays (useful for tests and screenshots)
    Instant,
}

impl Generator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generator::Gallery => "gallery",
            Generator::Instant => "instant",
        }
    }
}
