//! A single verse's playable clip.

use std::fmt;

use mushaf_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::transport::{MediaEvent, Transport};

/// Stable identity of a unit within one session: the verse number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitKey(pub u32);

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for UnitKey {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// Playback state as last reported by the media primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitState {
    #[default]
    Idle,
    Playing,
}

/// Absolute http(s) URL of a clip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource(Url);

impl MediaSource {
    pub fn parse(source: &str) -> Result<Self> {
        let url = Url::parse(source)
            .map_err(|e| Error::InvalidArgument(format!("invalid media source {source}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidArgument(format!(
                "unsupported media source scheme: {}",
                url.scheme()
            )));
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state change caused by a media event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: UnitState,
    pub to: UnitState,
}

/// One verse's clip and its media handle.
#[derive(Debug)]
pub struct AudioUnit<T> {
    key: UnitKey,
    source: MediaSource,
    state: UnitState,
    transport: T,
}

impl<T: Transport> AudioUnit<T> {
    pub const fn new(key: UnitKey, source: MediaSource, transport: T) -> Self {
        Self {
            key,
            source,
            state: UnitState::Idle,
            transport,
        }
    }

    pub const fn key(&self) -> UnitKey {
        self.key
    }

    pub const fn source(&self) -> &MediaSource {
        &self.source
    }

    /// State from the last event received, not the last request made.
    pub const fn state(&self) -> UnitState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == UnitState::Playing
    }

    /// Request playback. The unit only becomes `Playing` once `Started` arrives.
    pub fn play(&mut self) {
        debug!("Unit {} play requested", self.key);
        self.transport.play(&self.source);
    }

    /// Request a stop. The unit only becomes `Idle` once `Stopped` arrives.
    pub fn pause(&mut self) {
        debug!("Unit {} pause requested", self.key);
        self.transport.pause();
    }

    /// Record a media event, returning the transition it caused, if any.
    pub fn apply(&mut self, event: &MediaEvent) -> Option<Transition> {
        let next = match event {
            MediaEvent::Started => UnitState::Playing,
            MediaEvent::Stopped => UnitState::Idle,
            MediaEvent::Failed(reason) => {
                warn!("Unit {} failed to play {}: {reason}", self.key, self.source);
                UnitState::Idle
            }
        };

        if next == self.state {
            return None;
        }

        let transition = Transition {
            from: self.state,
            to: next,
        };
        debug!("Unit {} {:?} -> {:?}", self.key, transition.from, transition.to);
        self.state = next;
        Some(transition)
    }
}
