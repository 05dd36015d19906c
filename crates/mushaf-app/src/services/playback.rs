//! Verse audio backed by `<audio>` elements in the webview.
//!
//! Each verse card renders one hidden `<audio>` element. Commands reach the
//! element through `document::eval`, and its DOM media events are fed back
//! into the session by the card's event handlers.

use dioxus::prelude::*;
use mushaf_playback::{HandoffPolicy, MediaSource, PlaybackSession, Transport, UnitKey};
use tracing::{debug, info};

pub type ReaderSession = PlaybackSession<WebAudioTransport>;

/// Handle to one verse's `<audio>` element.
#[derive(Debug)]
pub struct WebAudioTransport {
    element_id: String,
}

impl WebAudioTransport {
    pub fn new(key: UnitKey) -> Self {
        Self {
            element_id: Self::element_id(key),
        }
    }

    /// DOM id of the element for `key`.
    pub fn element_id(key: UnitKey) -> String {
        format!("ayah-audio-{}", key.0)
    }
}

impl Transport for WebAudioTransport {
    fn play(&mut self, source: &MediaSource) {
        debug!("Playing {} from {source}", self.element_id);
        run_script(&play_script(&self.element_id));
    }

    fn pause(&mut self) {
        run_script(&pause_script(&self.element_id));
    }
}

fn run_script(script: &str) {
    // Results are reported through DOM events, not the eval channel.
    let _ = document::eval(script);
}

/// A rejected `play()` fires no media event of its own (autoplay policy,
/// unsupported source), so one `error` is dispatched. `AbortError` means a
/// later `pause()` interrupted the load and is already reported as `pause`.
fn play_script(element_id: &str) -> String {
    format!(
        r#"const el = document.getElementById("{element_id}");
if (el) {{
  el.play().catch((e) => {{
    if (e.name !== "AbortError") {{ el.dispatchEvent(new Event("error")); }}
  }});
}}"#
    )
}

/// Stop and rewind. An element that was already paused fires no `pause`
/// event of its own, so one is dispatched to keep every stop confirmed.
fn pause_script(element_id: &str) -> String {
    format!(
        r#"const el = document.getElementById("{element_id}");
if (el) {{
  const wasPaused = el.paused;
  el.pause();
  el.currentTime = 0;
  if (wasPaused) {{ el.dispatchEvent(new Event("pause")); }}
}}"#
    )
}

/// Hook creating a playback session owned by the calling component.
///
/// The session is torn down when the component unmounts, stopping whatever
/// verse is playing.
pub fn use_playback_session(policy: HandoffPolicy) -> Signal<ReaderSession> {
    let mut session = use_signal(|| ReaderSession::new(policy));

    use_drop(move || {
        if let Ok(mut session) = session.try_write() {
            info!("Leaving surah, releasing {} verses", session.len());
            session.teardown();
        }
    });

    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id() {
        assert_eq!(WebAudioTransport::element_id(UnitKey(7)), "ayah-audio-7");
        assert_eq!(WebAudioTransport::new(UnitKey(286)).element_id, "ayah-audio-286");
    }

    #[test]
    fn test_scripts_target_element() {
        let play = play_script("ayah-audio-1");
        assert!(play.contains(r#"getElementById("ayah-audio-1")"#));
        assert!(play.contains(".catch("));
        assert!(play.contains(r#"e.name !== "AbortError""#));
        assert!(play.contains(r#"new Event("error")"#));

        let pause = pause_script("ayah-audio-1");
        assert!(pause.contains("el.pause()"));
        assert!(pause.contains("currentTime = 0"));
        assert!(pause.contains(r#"new Event("pause")"#));
    }
}
