//! # Mushaf
//!
//! A desktop Qur'an reader built with Rust and Dioxus: browse the 114
//! surahs, read each verse with its transliteration and translation, and
//! listen to one verse at a time.

// RSX macros generate code that triggers these warnings incorrectly
#![allow(unused_qualifications)]
#![allow(clippy::use_self)]

mod components;
mod config;
mod services;
mod state;

use anyhow::Result;
use components::{HomeView, Navbar, ScrollToTop, SurahView, WelcomeModal};
use config::ReaderConfig;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use services::ContentService;
use state::preferences::PreferenceStore;
use state::{ReaderState, ReaderView};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WINDOW_WIDTH: f64 = 1100.0;
const WINDOW_HEIGHT: f64 = 800.0;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "mushaf=info,mushaf_app=debug,mushaf_playback=debug,mushaf_api=info".into()
        }))
        .init();

    info!("Starting Mushaf v{}", env!("CARGO_PKG_VERSION"));

    let config = ReaderConfig::load()?;
    info!(
        "Using {} with reciter {} ({:?} handoff)",
        config.api_base_url,
        config.reciter.name(),
        config.handoff
    );

    let content = ContentService::new(&config)?;
    let preferences = PreferenceStore::open_default();

    let window_builder = WindowBuilder::new()
        .with_title("Mushaf")
        .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_min_inner_size(dioxus::desktop::LogicalSize::new(420.0, 600.0));

    let desktop = Config::new()
        .with_window(window_builder)
        .with_disable_context_menu(true)
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(config)
        .with_context(content)
        .with_context(preferences)
        .launch(App);

    Ok(())
}

/// Root component: welcome modal, navbar and the current view.
#[component]
fn App() -> Element {
    let preferences = use_context::<PreferenceStore>();
    let reader = use_context_provider(|| ReaderState::new(!preferences.load().has_seen_welcome));

    let view = *reader.view.read();

    rsx! {
        // Inject CSS
        style { {include_str!("../assets/styles.css")} }

        div { class: "app",
            WelcomeModal {}
            Navbar {}
            main { class: "app__main",
                match view {
                    ReaderView::Home => rsx! { HomeView {} },
                    // Keyed so every chapter gets its own playback session
                    ReaderView::Surah(number) => rsx! { SurahView { key: "{number}", number } },
                }
            }
            ScrollToTop {}
            footer { class: "app__footer",
                "Data dan audio dari equran.id"
            }
        }
    }
}
