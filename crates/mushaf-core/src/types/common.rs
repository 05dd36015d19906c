//! Common types shared across the application.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of chapters in the Qur'an.
pub const SURAH_COUNT: u32 = 114;

/// Check that a chapter number is within `1..=114`.
pub fn validate_surah_number(number: u32) -> Result<u32> {
    if (1..=SURAH_COUNT).contains(&number) {
        Ok(number)
    } else {
        Err(Error::InvalidArgument(format!(
            "surah number must be between 1 and {SURAH_COUNT}, got {number}"
        )))
    }
}

/// Reciter whose recordings the API serves, keyed the way the API keys them.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Reciter {
    #[serde(rename = "01")]
    AbdullahAlJuhany,
    #[serde(rename = "02")]
    AbdulMuhsinAlQasim,
    #[serde(rename = "03")]
    AbdurrahmanAsSudais,
    #[serde(rename = "04")]
    IbrahimAlDossari,
    #[default]
    #[serde(rename = "05")]
    MisyariRasyidAlAfasi,
}

impl Reciter {
    /// Get all reciters in key order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::AbdullahAlJuhany,
            Self::AbdulMuhsinAlQasim,
            Self::AbdurrahmanAsSudais,
            Self::IbrahimAlDossari,
            Self::MisyariRasyidAlAfasi,
        ]
    }

    /// The two-digit key used in API audio maps.
    pub const fn key(self) -> &'static str {
        match self {
            Self::AbdullahAlJuhany => "01",
            Self::AbdulMuhsinAlQasim => "02",
            Self::AbdurrahmanAsSudais => "03",
            Self::IbrahimAlDossari => "04",
            Self::MisyariRasyidAlAfasi => "05",
        }
    }

    /// Get display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AbdullahAlJuhany => "Abdullah Al-Juhany",
            Self::AbdulMuhsinAlQasim => "Abdul Muhsin Al-Qasim",
            Self::AbdurrahmanAsSudais => "Abdurrahman as-Sudais",
            Self::IbrahimAlDossari => "Ibrahim Al-Dossari",
            Self::MisyariRasyidAlAfasi => "Misyari Rasyid Al-Afasi",
        }
    }

    /// Look up a reciter by its API key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.key() == key)
    }
}

impl FromStr for Reciter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s.trim())
            .ok_or_else(|| Error::InvalidArgument(format!("unknown reciter key: {s}")))
    }
}

/// Audio URLs for one clip, one per reciter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioSet(pub BTreeMap<Reciter, String>);

impl AudioSet {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the clip URL for a reciter.
    pub fn get(&self, reciter: Reciter) -> Option<&str> {
        self.0.get(&reciter).map(String::as_str)
    }

    /// Get the clip URL for `preferred`, falling back to any available reciter.
    pub fn get_or_any(&self, preferred: Reciter) -> Option<&str> {
        self.get(preferred)
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    pub fn insert(&mut self, reciter: Reciter, url: impl Into<String>) {
        self.0.insert(reciter, url.into());
    }
}

/// Where a chapter was revealed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Revelation {
    Mecca,
    Medina,
}

impl Revelation {
    /// Indonesian label, as the API spells it.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mecca => "Mekah",
            Self::Medina => "Madinah",
        }
    }
}

impl fmt::Display for Revelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Revelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mekah" | "makkah" | "mecca" => Ok(Self::Mecca),
            "madinah" | "medina" => Ok(Self::Medina),
            other => Err(Error::Parse(format!("unknown place of revelation: {other}"))),
        }
    }
}
