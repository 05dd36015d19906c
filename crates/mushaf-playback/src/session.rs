//! Registry of the units mounted for one chapter view.

use std::collections::HashMap;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info, warn};

use crate::coordinator::{HandoffPolicy, PlaybackCoordinator, UnitAction, UnitCommand};
use crate::transport::{EventSink, MediaEvent, Notification, Transport};
use crate::unit::{AudioUnit, MediaSource, UnitKey, UnitState};

/// Units of one chapter view plus the coordinator arbitrating them.
///
/// All methods run on the UI thread. Media events may be posted from
/// anywhere through an [`EventSink`] and are applied by [`Self::pump`].
pub struct PlaybackSession<T: Transport> {
    units: HashMap<UnitKey, AudioUnit<T>>,
    coordinator: PlaybackCoordinator,
    commands: Receiver<UnitCommand>,
    event_tx: Sender<Notification>,
    event_rx: Receiver<Notification>,
}

impl<T: Transport> PlaybackSession<T> {
    pub fn new(policy: HandoffPolicy) -> Self {
        let (coordinator, commands) = PlaybackCoordinator::new(policy);
        let (event_tx, event_rx) = unbounded();
        Self {
            units: HashMap::new(),
            coordinator,
            commands,
            event_tx,
            event_rx,
        }
    }

    /// Sink through which the media primitive of `key` reports events.
    pub fn sink(&self, key: UnitKey) -> EventSink {
        EventSink::new(key, self.event_tx.clone())
    }

    /// Register the unit for a verse row that just mounted.
    pub fn mount(&mut self, key: UnitKey, source: MediaSource, transport: T) {
        if self.units.contains_key(&key) {
            debug!("Remounting unit {key}");
            self.unmount(key);
        }
        debug!("Mounted unit {key} ({source})");
        self.units.insert(key, AudioUnit::new(key, source, transport));
    }

    /// Drop the unit for a verse row that unmounted.
    ///
    /// A destroyed unit counts as stopped.
    pub fn unmount(&mut self, key: UnitKey) -> bool {
        let Some(mut unit) = self.units.remove(&key) else {
            return false;
        };
        if unit.is_playing() {
            unit.pause();
        }
        drop(unit);

        if self.coordinator.active() == Some(key) || self.coordinator.awaiting_stop() == Some(key) {
            self.coordinator.notify_stopped(key);
        }
        debug!("Unmounted unit {key}");
        self.pump();
        true
    }

    /// The user asked `key` to play.
    pub fn request_play(&mut self, key: UnitKey) {
        if !self.units.contains_key(&key) {
            warn!("Play requested for unmounted unit {key}");
            return;
        }
        self.coordinator.request_play(key);
        self.pump();
    }

    /// The user paused `key` directly; the coordinator learns from its `Stopped`.
    pub fn request_pause(&mut self, key: UnitKey) {
        let Some(unit) = self.units.get_mut(&key) else {
            warn!("Pause requested for unmounted unit {key}");
            return;
        };
        unit.pause();
        self.pump();
    }

    /// Pause if playing or about to play, otherwise play.
    pub fn toggle(&mut self, key: UnitKey) {
        if self.state(key) == Some(UnitState::Playing) || self.is_pending(key) {
            self.request_pause(key);
        } else {
            self.request_play(key);
        }
    }

    /// Apply a media event reported for `key` and settle.
    pub fn deliver(&mut self, key: UnitKey, event: MediaEvent) {
        self.handle_event(key, &event);
        self.pump();
    }

    /// Dispatch queued commands and events until none are left.
    ///
    /// Returns the number of messages handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let mut progressed = false;

            while let Ok(command) = self.commands.try_recv() {
                self.dispatch(command);
                handled += 1;
                progressed = true;
            }

            while let Ok(notification) = self.event_rx.try_recv() {
                self.handle_event(notification.key, &notification.event);
                handled += 1;
                progressed = true;
            }

            if !progressed {
                return handled;
            }
        }
    }

    /// Stop everything and forget all units, as when leaving the chapter view.
    pub fn teardown(&mut self) {
        if self.units.is_empty() && self.coordinator.active().is_none() {
            return;
        }

        if let Some(key) = self.coordinator.active() {
            if let Some(unit) = self.units.get_mut(&key) {
                unit.pause();
            }
        }
        let count = self.units.len();
        self.units.clear();
        self.coordinator.reset();

        // Nothing left to receive these.
        self.commands.try_iter().for_each(drop);
        self.event_rx.try_iter().for_each(drop);

        info!("Playback session torn down ({count} units)");
    }

    pub fn state(&self, key: UnitKey) -> Option<UnitState> {
        self.units.get(&key).map(AudioUnit::state)
    }

    /// Whether `key` is active but has not reported `Started` yet.
    pub fn is_pending(&self, key: UnitKey) -> bool {
        self.coordinator.active() == Some(key) && self.state(key) == Some(UnitState::Idle)
    }

    pub const fn active(&self) -> Option<UnitKey> {
        self.coordinator.active()
    }

    /// Keys of the units currently reporting `Playing`, in order.
    pub fn playing(&self) -> Vec<UnitKey> {
        let mut keys: Vec<UnitKey> = self
            .units
            .values()
            .filter(|u| u.is_playing())
            .map(AudioUnit::key)
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn contains(&self, key: UnitKey) -> bool {
        self.units.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub const fn coordinator(&self) -> &PlaybackCoordinator {
        &self.coordinator
    }

    fn dispatch(&mut self, command: UnitCommand) {
        let Some(unit) = self.units.get_mut(&command.key) else {
            debug!("Dropping {:?} for unmounted unit {}", command.action, command.key);
            if command.action == UnitAction::Play {
                self.coordinator.notify_stopped(command.key);
            }
            return;
        };
        match command.action {
            UnitAction::Play => unit.play(),
            UnitAction::Pause => unit.pause(),
        }
    }

    fn handle_event(&mut self, key: UnitKey, event: &MediaEvent) {
        let Some(unit) = self.units.get_mut(&key) else {
            debug!("Ignoring {event:?} from unmounted unit {key}");
            return;
        };
        unit.apply(event);

        if event.is_stop() {
            self.coordinator.notify_stopped(key);
        } else {
            self.coordinator.notify_started(key);
        }
    }
}

impl<T: Transport> Drop for PlaybackSession<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T: Transport> std::fmt::Debug for PlaybackSession<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("units", &self.units.len())
            .field("active", &self.coordinator.active())
            .field("playing", &self.playing())
            .finish()
    }
}
