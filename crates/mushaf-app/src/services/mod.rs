//! Backend services integration.
//!
//! This module connects the UI to the backend services:
//! - equran.id content for surah lists and verses
//! - Per-verse audio elements driven by a playback session

pub mod content;
pub mod playback;

pub use content::ContentService;
pub use playback::{use_playback_session, ReaderSession, WebAudioTransport};
