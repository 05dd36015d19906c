//! Welcome modal listing the authors.
//!
//! Shown on first launch and whenever the navbar asks for it. Closing it
//! records that the welcome has been seen.

use dioxus::prelude::*;
use tracing::error;

use crate::state::preferences::PreferenceStore;
use crate::state::ReaderState;

const MEMBERS: &[&str] = &[
    "Cahaya Maulida Putri",
    "Elzha Mismaea",
    "Gebby Aprilliani Prayindra",
    "Harrits Firmansyah",
    "Muhamad Faisal Mardani",
    "Nadia Aprilani",
    "Nova Indriyani",
    "Putri Pujiati",
    "Seyla Alnivia Cahya Islami",
    "Zahra Nurul Jannah",
];

#[component]
pub fn WelcomeModal() -> Element {
    let mut reader = use_context::<ReaderState>();
    let preferences = use_context::<PreferenceStore>();

    let close = use_callback(move |()| {
        if let Err(e) = preferences.mark_welcome_seen() {
            error!("Failed to save preferences: {e}");
        }
        reader.close_welcome();
    });

    if !*reader.welcome_open.read() {
        return rsx! {};
    }

    rsx! {
        div { class: "modal",
            div { class: "modal__dialog",
                div { class: "modal__header",
                    div {
                        h2 { "Selamat Datang" }
                        p { class: "muted", "Kelompok Pembuat Website Al-Qur'an Digital" }
                    }
                    button {
                        class: "button button--icon",
                        onclick: move |_| close.call(()),
                        "✕"
                    }
                }
                div { class: "modal__members",
                    h3 { "Anggota Kelompok:" }
                    ul {
                        for member in MEMBERS {
                            li { key: "{member}", "{member}" }
                        }
                    }
                }
                p { class: "modal__quote",
                    "\"Bacalah dengan menyebut nama Tuhanmu yang Menciptakan\" - Al-Alaq: 1"
                }
                button {
                    class: "button button--primary button--wide",
                    onclick: move |_| close.call(()),
                    "Mulai Membaca Al-Qur'an"
                }
            }
        }
    }
}
