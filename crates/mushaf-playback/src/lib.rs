//! # mushaf-playback
//!
//! Keeps at most one verse clip playing at a time.
//!
//! Each rendered verse owns an [`AudioUnit`] wrapping a platform media
//! primitive behind the [`Transport`] trait. A [`PlaybackSession`] holds the
//! units mounted for one chapter view and routes messages between them and
//! the [`PlaybackCoordinator`]:
//! - units report [`MediaEvent`]s (started, stopped, failed)
//! - the coordinator answers with [`UnitCommand`]s (play, pause)
//!
//! The coordinator only ever remembers the key of the active unit, never a
//! collection of units.

pub mod coordinator;
pub mod session;
pub mod transport;
pub mod unit;

#[cfg(test)]
mod testing;

pub use coordinator::{HandoffPolicy, PlaybackCoordinator, UnitAction, UnitCommand};
pub use session::PlaybackSession;
pub use transport::{EventSink, MediaEvent, Notification, Transport};
pub use unit::{AudioUnit, MediaSource, Transition, UnitKey, UnitState};
