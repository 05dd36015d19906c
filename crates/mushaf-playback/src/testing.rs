//! Scripted media primitive for tests.
//!
//! Behaves like a browser media element: `play` on a deferred primitive
//! starts loading and only reports `Started` once the test finishes the
//! load; `pause` always reports `Stopped`; dropping the transport destroys
//! the element.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::coordinator::{UnitAction, UnitCommand};
use crate::transport::{EventSink, Transport};
use crate::unit::{MediaSource, UnitKey};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
struct Script {
    immediate: bool,
    log: Vec<UnitCommand>,
    loading: HashSet<UnitKey>,
    playing: HashSet<UnitKey>,
    /// Live element per key: (transport id, sink).
    sinks: HashMap<UnitKey, (u64, EventSink)>,
}

impl Script {
    fn post(&self, key: UnitKey, f: impl FnOnce(&EventSink)) {
        if let Some((_, sink)) = self.sinks.get(&key) {
            f(sink);
        }
    }
}

#[derive(Clone, Default)]
pub struct ScriptedMedia {
    inner: Arc<Mutex<Script>>,
}

impl ScriptedMedia {
    /// Playback starts as soon as it is requested.
    pub fn immediate() -> Self {
        let media = Self::default();
        media.inner.lock().immediate = true;
        media
    }

    /// Playback starts only when [`Self::finish_loading`] is called.
    pub fn deferred() -> Self {
        Self::default()
    }

    /// A transport that reports events through `sink`.
    pub fn transport(&self, sink: EventSink) -> ScriptedTransport {
        let key = sink.key();
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().sinks.insert(key, (id, sink));
        ScriptedTransport {
            key,
            id,
            media: self.clone(),
        }
    }

    /// A transport whose events go nowhere.
    pub fn detached(&self, key: UnitKey) -> ScriptedTransport {
        ScriptedTransport {
            key,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            media: self.clone(),
        }
    }

    pub fn log(&self) -> Vec<UnitCommand> {
        self.inner.lock().log.clone()
    }

    pub fn commands_for(&self, key: UnitKey) -> Vec<UnitAction> {
        self.inner
            .lock()
            .log
            .iter()
            .filter(|c| c.key == key)
            .map(|c| c.action)
            .collect()
    }

    pub fn clear_log(&self) {
        self.inner.lock().log.clear();
    }

    /// Keys the primitive itself is playing.
    pub fn playing(&self) -> HashSet<UnitKey> {
        self.inner.lock().playing.clone()
    }

    pub fn is_loading(&self, key: UnitKey) -> bool {
        self.inner.lock().loading.contains(&key)
    }

    /// Complete a pending load, reporting `Started`.
    pub fn finish_loading(&self, key: UnitKey) -> bool {
        let mut script = self.inner.lock();
        if !script.loading.remove(&key) {
            return false;
        }
        script.playing.insert(key);
        script.post(key, EventSink::started);
        true
    }

    /// Fail a pending load, reporting `Failed`.
    pub fn fail_loading(&self, key: UnitKey) -> bool {
        let mut script = self.inner.lock();
        if !script.loading.remove(&key) {
            return false;
        }
        script.post(key, |sink| sink.failed("network error"));
        true
    }

    /// The clip played to its end, reporting `Stopped`.
    pub fn reach_end(&self, key: UnitKey) -> bool {
        let mut script = self.inner.lock();
        if !script.playing.remove(&key) {
            return false;
        }
        script.post(key, EventSink::stopped);
        true
    }

    /// Playback began without a request (e.g. OS media keys).
    pub fn start_externally(&self, key: UnitKey) {
        let mut script = self.inner.lock();
        if !script.sinks.contains_key(&key) {
            return;
        }
        script.loading.remove(&key);
        script.playing.insert(key);
        script.post(key, EventSink::started);
    }
}

pub struct ScriptedTransport {
    key: UnitKey,
    id: u64,
    media: ScriptedMedia,
}

impl Transport for ScriptedTransport {
    fn play(&mut self, _source: &MediaSource) {
        let mut script = self.media.inner.lock();
        script.log.push(UnitCommand {
            key: self.key,
            action: UnitAction::Play,
        });
        if script.playing.contains(&self.key) {
            return;
        }
        if script.immediate {
            script.playing.insert(self.key);
            script.post(self.key, EventSink::started);
        } else {
            script.loading.insert(self.key);
        }
    }

    fn pause(&mut self) {
        let mut script = self.media.inner.lock();
        script.log.push(UnitCommand {
            key: self.key,
            action: UnitAction::Pause,
        });
        script.loading.remove(&self.key);
        script.playing.remove(&self.key);
        script.post(self.key, EventSink::stopped);
    }
}

impl Drop for ScriptedTransport {
    fn drop(&mut self) {
        let mut script = self.media.inner.lock();
        let live = script
            .sinks
            .get(&self.key)
            .is_some_and(|(id, _)| *id == self.id);
        if live {
            script.sinks.remove(&self.key);
            script.loading.remove(&self.key);
            script.playing.remove(&self.key);
        }
    }
}
