//! Chapter search input.

use dioxus::prelude::*;

#[component]
pub fn SearchBar(value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "search-bar",
            span { class: "search-bar__icon", "🔍" }
            input {
                class: "search-bar__input",
                r#type: "text",
                placeholder: "Cari nama surah...",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}
