//! Reading view for one chapter.
//!
//! Owns the chapter's playback session and provides it to the verse cards.

use dioxus::prelude::*;
use mushaf_core::{Error, SurahDetail, SurahRef};

use super::{AyahCard, LoadingSpinner};
use crate::config::ReaderConfig;
use crate::services::{use_playback_session, ContentService};
use crate::state::ReaderState;

#[component]
pub fn SurahView(number: u32) -> Element {
    let content = use_context::<ContentService>();
    let config = use_context::<ReaderConfig>();
    let mut reader = use_context::<ReaderState>();

    let session = use_playback_session(config.handoff);
    use_context_provider(|| session);

    let detail = use_resource(move || {
        let content = content.clone();
        async move { content.surah(number).await }
    });

    let body = match &*detail.read_unchecked() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(Error::NotFound(_) | Error::InvalidArgument(_))) => rsx! {
            div { class: "status",
                h2 { "Halaman Tidak Ditemukan" }
                p { "Maaf, surah yang Anda cari tidak ada. Mari kembali membaca Al-Qur'an." }
            }
        },
        Some(Err(_)) => rsx! {
            div { class: "status status--error",
                "Gagal memuat detail surah. Silakan coba lagi."
            }
        },
        Some(Ok(surah)) => rsx! { SurahContent { surah: surah.clone() } },
    };

    rsx! {
        section { class: "surah",
            button {
                class: "button button--ghost",
                onclick: move |_| reader.go_home(),
                "← Kembali ke Daftar Surah"
            }
            {body}
        }
    }
}

#[component]
fn SurahContent(surah: SurahDetail) -> Element {
    let summary = &surah.summary;

    rsx! {
        div { class: "surah__content",
            header { class: "surah__header",
                span { class: "surah__arabic arabic", "{summary.name}" }
                h1 { "{summary.latin_name}" }
                p { class: "surah__meaning", "{summary.meaning}" }
                div { class: "surah__meta",
                    span { "{summary.verse_count} Ayat" }
                    span { "•" }
                    span { "{summary.revelation}" }
                }
            }
            div { class: "ayah-list",
                for (index, ayah) in surah.ayahs.iter().enumerate() {
                    AyahCard { key: "{ayah.number}", ayah: ayah.clone(), index }
                }
            }
            nav { class: "surah__neighbours",
                if let Some(previous) = &surah.previous {
                    NeighbourLink { surah: previous.clone(), label: "← Sebelumnya" }
                }
                if let Some(next) = &surah.next {
                    NeighbourLink { surah: next.clone(), label: "Selanjutnya →" }
                }
            }
        }
    }
}

#[component]
fn NeighbourLink(surah: SurahRef, label: &'static str) -> Element {
    let mut reader = use_context::<ReaderState>();
    let number = surah.number;

    rsx! {
        button {
            class: "button button--outline surah__neighbour",
            onclick: move |_| reader.open_surah(number),
            span { class: "surah__neighbour-label", "{label}" }
            span { "{surah.latin_name}" }
        }
    }
}
