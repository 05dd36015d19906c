use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "spinner",
            div { class: "spinner__ring" }
            p { class: "spinner__label", "Memuat data..." }
        }
    }
}
