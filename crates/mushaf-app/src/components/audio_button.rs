//! Play/pause control for one verse.
//!
//! Mounts the verse as a unit of the surrounding playback session and
//! renders the `<audio>` element that backs it. The element's media events
//! are the only source of the button's state.

use dioxus::prelude::*;
use mushaf_playback::{MediaEvent, MediaSource, UnitKey, UnitState};

use crate::services::{ReaderSession, WebAudioTransport};

#[component]
pub fn AudioButton(verse: u32, source: MediaSource) -> Element {
    let mut session = use_context::<Signal<ReaderSession>>();
    let key = UnitKey(verse);
    let element_id = WebAudioTransport::element_id(key);

    // Reads no signals, so it runs once after the element exists.
    let mount_source = source.clone();
    use_effect(move || {
        session
            .write()
            .mount(key, mount_source.clone(), WebAudioTransport::new(key));
    });

    use_drop(move || {
        if let Ok(mut session) = session.try_write() {
            session.unmount(key);
        }
    });

    let (playing, pending) = {
        let session = session.read();
        (
            session.state(key) == Some(UnitState::Playing),
            session.is_pending(key),
        )
    };

    let label = if playing {
        "⏸ Pause"
    } else if pending {
        "… Memuat"
    } else {
        "▶ Dengar"
    };

    rsx! {
        div { class: "audio-button",
            audio {
                id: "{element_id}",
                src: "{source}",
                preload: "none",
                onplaying: move |_| session.write().deliver(key, MediaEvent::Started),
                onpause: move |_| session.write().deliver(key, MediaEvent::Stopped),
                onended: move |_| session.write().deliver(key, MediaEvent::Stopped),
                onerror: move |_| {
                    session
                        .write()
                        .deliver(key, MediaEvent::Failed("media element error".to_string()));
                },
            }
            button {
                class: if playing { "button button--primary" } else { "button button--outline" },
                onclick: move |_| session.write().toggle(key),
                "{label}"
            }
            if playing {
                span { class: "audio-button__indicator", "🔊" }
            }
        }
    }
}
