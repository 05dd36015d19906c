//! Core domain types for Mushaf.

pub mod ayah;
pub mod common;
pub mod surah;

pub use ayah::Ayah;
pub use common::*;
pub use surah::{SurahDetail, SurahRef, SurahSummary};
