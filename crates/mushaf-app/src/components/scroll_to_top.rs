//! Floating button returning to the top of the page.

use dioxus::prelude::*;

const SCROLL_TO_TOP: &str = r#"window.scrollTo({ top: 0, behavior: "smooth" });"#;

#[component]
pub fn ScrollToTop() -> Element {
    rsx! {
        button {
            class: "scroll-to-top",
            title: "Kembali ke atas",
            onclick: move |_| {
                let _ = document::eval(SCROLL_TO_TOP);
            },
            "↑"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_window_to_top() {
        assert!(SCROLL_TO_TOP.starts_with("window.scrollTo("));
        assert!(SCROLL_TO_TOP.contains("top: 0"));
    }
}
