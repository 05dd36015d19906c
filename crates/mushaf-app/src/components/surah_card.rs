//! Chapter tile in the home grid.

use dioxus::prelude::*;
use mushaf_core::SurahSummary;

use crate::state::ReaderState;

#[component]
pub fn SurahCard(surah: SurahSummary) -> Element {
    let mut reader = use_context::<ReaderState>();
    let number = surah.number;

    rsx! {
        button {
            class: "surah-card",
            onclick: move |_| reader.open_surah(number),
            div { class: "surah-card__number", "{surah.number}" }
            div { class: "surah-card__body",
                div { class: "surah-card__heading",
                    div {
                        h3 { class: "surah-card__title", "{surah.latin_name}" }
                        p { class: "surah-card__meaning", "{surah.meaning}" }
                    }
                    span { class: "surah-card__arabic arabic", "{surah.name}" }
                }
                div { class: "surah-card__meta",
                    span { "{surah.verse_count} Ayat" }
                    span { class: "badge", "{surah.revelation}" }
                }
            }
        }
    }
}
