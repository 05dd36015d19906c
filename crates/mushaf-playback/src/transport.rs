//! Boundary to the platform media primitive.

use crossbeam_channel::Sender;
use tracing::trace;

use crate::unit::{MediaSource, UnitKey};

/// Transitions reported by a media primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback actually began (after any buffering).
    Started,
    /// Playback stopped: explicit pause, end of clip, or abort.
    Stopped,
    /// The media resource could not be loaded or played.
    Failed(String),
}

impl MediaEvent {
    /// Whether this event leaves the unit idle.
    pub const fn is_stop(&self) -> bool {
        matches!(self, Self::Stopped | Self::Failed(_))
    }
}

/// A media event tagged with the unit that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub key: UnitKey,
    pub event: MediaEvent,
}

/// Control surface of one platform media handle.
///
/// Both calls are requests: they must not block, and the resulting
/// transition is reported later through the unit's [`EventSink`]. `pause`
/// must always be answered with a `Stopped` event, even when the primitive
/// was not playing yet.
pub trait Transport {
    /// Begin (or restart) playback of `source`.
    fn play(&mut self, source: &MediaSource);

    /// Stop playback. Resetting the position to the start is allowed.
    fn pause(&mut self);
}

/// Posts media events for one unit back to its session.
#[derive(Debug, Clone)]
pub struct EventSink {
    key: UnitKey,
    tx: Sender<Notification>,
}

impl EventSink {
    pub(crate) const fn new(key: UnitKey, tx: Sender<Notification>) -> Self {
        Self { key, tx }
    }

    pub const fn key(&self) -> UnitKey {
        self.key
    }

    /// Post an event. Events posted after the session is gone are dropped.
    pub fn post(&self, event: MediaEvent) {
        trace!("Unit {} posted {:?}", self.key, event);
        let _ = self.tx.send(Notification {
            key: self.key,
            event,
        });
    }

    pub fn started(&self) {
        self.post(MediaEvent::Started);
    }

    pub fn stopped(&self) {
        self.post(MediaEvent::Stopped);
    }

    pub fn failed(&self, reason: impl Into<String>) {
        self.post(MediaEvent::Failed(reason.into()));
    }
}
