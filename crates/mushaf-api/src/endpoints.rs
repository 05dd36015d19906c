//! API endpoint implementations.

pub mod surah;
