//! Top navigation bar.

use dioxus::prelude::*;

use crate::state::ReaderState;

#[component]
pub fn Navbar() -> Element {
    let mut reader = use_context::<ReaderState>();

    rsx! {
        nav { class: "navbar",
            button {
                class: "navbar__brand",
                onclick: move |_| reader.go_home(),
                span { class: "navbar__logo", "📖" }
                span { "Al-Qur'an Digital" }
            }
            div { class: "navbar__actions",
                button {
                    class: "navbar__link",
                    onclick: move |_| reader.go_home(),
                    "Beranda"
                }
                button {
                    class: "navbar__link",
                    onclick: move |_| reader.open_welcome(),
                    "Kelompok"
                }
            }
        }
    }
}
