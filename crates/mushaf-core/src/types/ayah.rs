//! Ayah type representing a single verse.

use serde::{Deserialize, Serialize};

use super::{AudioSet, Reciter};

/// A single verse of a chapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ayah {
    /// Verse number within its chapter, starting at 1.
    pub number: u32,
    /// Arabic text.
    pub arabic: String,
    /// Latin transliteration.
    pub latin: String,
    /// Indonesian translation.
    pub translation: String,
    /// Recitation clips for this verse.
    pub audio: AudioSet,
}

impl Ayah {
    pub fn new(number: u32, arabic: impl Into<String>) -> Self {
        Self {
            number,
            arabic: arabic.into(),
            latin: String::new(),
            translation: String::new(),
            audio: AudioSet::default(),
        }
    }

    /// Get the clip URL for a reciter, falling back to any recorded reciter.
    pub fn audio_url(&self, reciter: Reciter) -> Option<&str> {
        self.audio.get_or_any(reciter)
    }
}
