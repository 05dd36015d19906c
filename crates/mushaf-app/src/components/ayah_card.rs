//! One verse: Arabic text, transliteration, translation and audio.

use dioxus::prelude::*;
use mushaf_core::Ayah;
use mushaf_playback::MediaSource;
use tracing::warn;

use super::AudioButton;
use crate::config::ReaderConfig;

#[component]
pub fn AyahCard(ayah: Ayah, index: usize) -> Element {
    let config = use_context::<ReaderConfig>();

    let source = ayah.audio_url(config.reciter).and_then(|url| {
        MediaSource::parse(url)
            .inspect_err(|e| warn!("Verse {} has no playable audio: {e}", ayah.number))
            .ok()
    });
    let delay = index * 50;

    rsx! {
        article {
            class: "ayah-card",
            style: "animation-delay: {delay}ms",
            div { class: "ayah-card__header",
                div { class: "ayah-card__number", "{ayah.number}" }
                if let Some(source) = source {
                    AudioButton { verse: ayah.number, source }
                }
            }
            p { class: "ayah-card__arabic arabic", "{ayah.arabic}" }
            div { class: "ayah-card__divider" }
            p { class: "ayah-card__latin", "{ayah.latin}" }
            p { class: "ayah-card__translation", "{ayah.translation}" }
        }
    }
}
