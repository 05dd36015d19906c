//! Surah types for the chapter list and chapter detail.

use serde::{Deserialize, Serialize};

use super::{AudioSet, Ayah, Revelation};

/// A chapter as it appears in the chapter list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurahSummary {
    /// Chapter number (1-114).
    pub number: u32,
    /// Arabic name.
    pub name: String,
    /// Latin transliteration of the name.
    pub latin_name: String,
    /// Meaning of the name in Indonesian.
    pub meaning: String,
    /// Number of verses.
    pub verse_count: u32,
    /// Place of revelation.
    pub revelation: Revelation,
    /// Description (may contain inline HTML from the API).
    pub description: String,
    /// Full-chapter recitations.
    pub full_audio: AudioSet,
}

impl SurahSummary {
    pub fn new(number: u32, latin_name: impl Into<String>) -> Self {
        Self {
            number,
            name: String::new(),
            latin_name: latin_name.into(),
            meaning: String::new(),
            verse_count: 0,
            revelation: Revelation::Mecca,
            description: String::new(),
            full_audio: AudioSet::default(),
        }
    }

    /// Case-insensitive substring match on the Latin name.
    ///
    /// Blank queries match every chapter.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.latin_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Reference to a neighbouring chapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurahRef {
    pub number: u32,
    pub name: String,
    pub latin_name: String,
    pub verse_count: u32,
}

/// A chapter with all of its verses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurahDetail {
    pub summary: SurahSummary,
    /// Verses in reading order.
    pub ayahs: Vec<Ayah>,
    /// Following chapter, absent for the last one.
    pub next: Option<SurahRef>,
    /// Preceding chapter, absent for the first one.
    pub previous: Option<SurahRef>,
}

impl SurahDetail {
    pub const fn number(&self) -> u32 {
        self.summary.number
    }

    /// Get a verse by its number.
    pub fn ayah(&self, number: u32) -> Option<&Ayah> {
        self.ayahs.iter().find(|a| a.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive() {
        let surah = SurahSummary::new(1, "Al-Fatihah");
        assert!(surah.matches("fatihah"));
        assert!(surah.matches("AL-FAT"));
        assert!(!surah.matches("baqarah"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let surah = SurahSummary::new(2, "Al-Baqarah");
        assert!(surah.matches(""));
        assert!(surah.matches("   "));
    }

    #[test]
    fn test_detail_ayah_lookup() {
        let detail = SurahDetail {
            summary: SurahSummary::new(112, "Al-Ikhlas"),
            ayahs: vec![Ayah::new(1, "قُلْ"), Ayah::new(2, "اللّٰهُ")],
            next: None,
            previous: None,
        };
        assert_eq!(detail.number(), 112);
        assert_eq!(detail.ayah(2).map(|a| a.number), Some(2));
        assert!(detail.ayah(5).is_none());
    }
}
