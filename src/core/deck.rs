//! # Deck
//!
//! The content bundle both widgets index into: gallery slides and ticker
//! quotes, loaded once at startup from a TOML file. The navigators only ever
//! see the collection lengths — content stays immutable for the lifetime of
//! the view, which is what keeps `slide_count` fixed.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

/// One gallery entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// One ticker entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Parse(e) => write!(f, "deck parse error: {e}"),
        }
    }
}

impl std::error::Error for DeckError {}

impl Deck {
    /// Load a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Deck, DeckError> {
        let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
        let deck: Deck = toml::from_str(&contents).map_err(DeckError::Parse)?;
        info!(
            "Loaded deck from {} ({} slides, {} quotes)",
            path.display(),
            deck.slides.len(),
            deck.quotes.len()
        );
        Ok(deck)
    }

    /// The built-in deck shown when no path is given, so a bare `zoetrope`
    /// invocation always has something to display.
    pub fn demo() -> Deck {
        Deck {
            title: Some("Zoetrope Demo".to_string()),
            slides: vec![
                Slide {
                    title: "Welcome".to_string(),
                    body: "Use the arrow keys to flip through slides, or drag \
                           horizontally with the mouse to swipe. Press a digit \
                           to jump straight to that slide."
                        .to_string(),
                },
                Slide {
                    title: "Decks".to_string(),
                    body: "Point zoetrope at a TOML file with [[slides]] and \
                           [[quotes]] tables to show your own content."
                        .to_string(),
                },
                Slide {
                    title: "The Ticker".to_string(),
                    body: "The lower panel rotates on its own. Interacting with \
                           it pauses the rotation for a while; Space toggles it \
                           outright."
                        .to_string(),
                },
                Slide {
                    title: "Quitting".to_string(),
                    body: "Press q or Esc to leave.".to_string(),
                },
            ],
            quotes: vec![
                Quote {
                    text: "A zoetrope produces the illusion of motion from a \
                           rapid succession of static pictures."
                        .to_string(),
                    attribution: Some("somebody's encyclopedia".to_string()),
                },
                Quote {
                    text: "The wheel turns, the slides change, nothing is lost."
                        .to_string(),
                    attribution: None,
                },
                Quote {
                    text: "Terminals deserve nice things too.".to_string(),
                    attribution: Some("a ratatui enthusiast".to_string()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_deck_parses() {
        let toml_str = r#"
title = "My Deck"

[[slides]]
title = "One"
body = "First slide body"

[[slides]]
title = "Two"

[[quotes]]
text = "Something quotable"
attribution = "Someone"

[[quotes]]
text = "Anonymous wisdom"
"#;
        let deck: Deck = toml::from_str(toml_str).unwrap();
        assert_eq!(deck.title.as_deref(), Some("My Deck"));
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].body, "First slide body");
        assert_eq!(deck.slides[1].body, "");
        assert_eq!(deck.quotes.len(), 2);
        assert_eq!(deck.quotes[0].attribution.as_deref(), Some("Someone"));
        assert_eq!(deck.quotes[1].attribution, None);
    }

    #[test]
    fn test_sparse_deck_parses() {
        // A deck with only quotes is fine - the gallery is simply inert.
        let toml_str = r#"
[[quotes]]
text = "Only quotes here"
"#;
        let deck: Deck = toml::from_str(toml_str).unwrap();
        assert!(deck.title.is_none());
        assert!(deck.slides.is_empty());
        assert_eq!(deck.quotes.len(), 1);
    }

    #[test]
    fn test_empty_deck_parses() {
        let deck: Deck = toml::from_str("").unwrap();
        assert!(deck.slides.is_empty());
        assert!(deck.quotes.is_empty());
    }

    #[test]
    fn test_missing_deck_is_io_error() {
        let err = Deck::load(Path::new("/nonexistent/deck.toml")).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn test_malformed_deck_is_parse_error() {
        let err = toml::from_str::<Deck>("slides = 3").unwrap_err();
        let msg = DeckError::Parse(err).to_string();
        assert!(msg.contains("deck parse error"));
    }

    #[test]
    fn test_demo_deck_is_nonempty() {
        let deck = Deck::demo();
        assert!(!deck.slides.is_empty());
        assert!(!deck.quotes.is_empty());
    }
}
