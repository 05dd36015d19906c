//! Single-active playback arbitration.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::unit::UnitKey;

/// How a new unit is started while another one is being stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffPolicy {
    /// Pause the previous unit and immediately play the new one.
    #[default]
    Optimistic,
    /// Pause the previous unit and play the new one once its stop is confirmed.
    AwaitStopped,
}

/// What the coordinator asks a unit to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitAction {
    Play,
    Pause,
}

/// A command addressed to one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCommand {
    pub key: UnitKey,
    pub action: UnitAction,
}

/// Tracks the one unit allowed to play and stops the others.
///
/// The coordinator never holds units, only the key of the active one, and
/// talks to units exclusively through the command channel returned by
/// [`PlaybackCoordinator::new`].
#[derive(Debug)]
pub struct PlaybackCoordinator {
    policy: HandoffPolicy,
    /// Unit that is, or should be, playing.
    active: Option<UnitKey>,
    /// `Play` for `active` is held back until `awaiting_stop` reports.
    start_deferred: bool,
    /// Previous unit whose stop has been requested but not confirmed.
    awaiting_stop: Option<UnitKey>,
    commands: Sender<UnitCommand>,
}

impl PlaybackCoordinator {
    /// Create a coordinator and the receiving end of its command channel.
    pub fn new(policy: HandoffPolicy) -> (Self, Receiver<UnitCommand>) {
        let (commands, command_rx) = unbounded();
        let coordinator = Self {
            policy,
            active: None,
            start_deferred: false,
            awaiting_stop: None,
            commands,
        };
        (coordinator, command_rx)
    }

    /// Key of the unit that is, or is about to be, playing.
    pub const fn active(&self) -> Option<UnitKey> {
        self.active
    }

    /// Whether `key` is active but still waiting for the previous unit to stop.
    pub fn is_deferred(&self, key: UnitKey) -> bool {
        self.start_deferred && self.active == Some(key)
    }

    pub const fn awaiting_stop(&self) -> Option<UnitKey> {
        self.awaiting_stop
    }

    /// A user asked `key` to play.
    ///
    /// Any other active unit is sent `Pause` before `key` is sent `Play`.
    /// Asking again for the active unit does nothing.
    pub fn request_play(&mut self, key: UnitKey) {
        if self.active == Some(key) {
            debug!("Unit {key} is already active");
            return;
        }

        if let Some(previous) = self.active.take() {
            if self.start_deferred {
                // Never told to play; nothing to stop.
                debug!("Dropping deferred start of {previous} in favour of {key}");
            } else {
                debug!("Handing playback from {previous} to {key}");
                self.send(previous, UnitAction::Pause);
                if self.policy == HandoffPolicy::AwaitStopped {
                    self.awaiting_stop = Some(previous);
                }
            }
        }

        self.active = Some(key);
        if self.awaiting_stop.is_some() {
            self.start_deferred = true;
        } else {
            self.start_deferred = false;
            self.send(key, UnitAction::Play);
        }
    }

    /// `key` stopped on its own, failed, or was destroyed.
    pub fn notify_stopped(&mut self, key: UnitKey) {
        if self.awaiting_stop == Some(key) {
            self.awaiting_stop = None;
            if self.start_deferred {
                if let Some(next) = self.active {
                    debug!("Unit {key} confirmed stop, starting {next}");
                    self.start_deferred = false;
                    self.send(next, UnitAction::Play);
                }
            }
            return;
        }

        if self.active == Some(key) {
            if self.start_deferred {
                debug!("Deferred start of {key} cancelled");
            } else {
                debug!("Active unit {key} stopped");
            }
            self.active = None;
            self.start_deferred = false;
            return;
        }

        debug!("Ignoring stale stop from {key}");
    }

    /// `key` reported that playback began.
    ///
    /// With nothing active the unit is adopted. A unit that starts while a
    /// different one is active is sent `Pause`.
    pub fn notify_started(&mut self, key: UnitKey) {
        match self.active {
            Some(active) if active == key => {
                if self.start_deferred {
                    debug!("Unit {key} started before its handoff completed");
                    self.start_deferred = false;
                }
            }
            Some(active) => {
                debug!("Unit {key} started while {active} is active, pausing it");
                self.send(key, UnitAction::Pause);
            }
            None => {
                debug!("Adopting unit {key} that started on its own");
                self.active = Some(key);
                self.start_deferred = false;
            }
        }
    }

    /// Forget all playback state, returning the unit that was active.
    pub fn reset(&mut self) -> Option<UnitKey> {
        let previous = self.active.take();
        self.start_deferred = false;
        self.awaiting_stop = None;
        if let Some(key) = previous {
            info!("Playback coordinator reset, released {key}");
        }
        previous
    }

    fn send(&self, key: UnitKey, action: UnitAction) {
        let _ = self.commands.send(UnitCommand { key, action });
    }
}
