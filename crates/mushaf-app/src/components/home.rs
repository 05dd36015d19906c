//! Chapter list with search.

use dioxus::prelude::*;
use mushaf_core::filter_surahs;

use super::{LoadingSpinner, SearchBar, SurahCard};
use crate::services::ContentService;

#[component]
pub fn HomeView() -> Element {
    let content = use_context::<ContentService>();
    let mut query = use_signal(String::new);

    let surahs = use_resource(move || {
        let content = content.clone();
        async move { content.list_surahs().await }
    });

    let body = match &*surahs.read_unchecked() {
        None => rsx! { LoadingSpinner {} },
        Some(Err(_)) => rsx! {
            div { class: "status status--error",
                "Gagal memuat data. Silakan coba lagi."
            }
        },
        Some(Ok(list)) => {
            let query = query.read();
            let matches = filter_surahs(list, &query);
            rsx! {
                if matches.is_empty() {
                    div { class: "status", "Surah tidak ditemukan" }
                } else {
                    div { class: "surah-grid",
                        for surah in matches {
                            SurahCard { key: "{surah.number}", surah: surah.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "home",
            div { class: "home__hero",
                h1 { "Al-Qur'an Digital" }
                p { "Baca, dengarkan, dan pahami Al-Qur'an dengan terjemahan bahasa Indonesia" }
            }
            SearchBar {
                value: query(),
                oninput: move |value| query.set(value),
            }
            {body}
        }
    }
}
