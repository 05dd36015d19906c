//! Application state management.

pub mod preferences;

use dioxus::prelude::*;
use tracing::debug;

/// Which page the reader is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReaderView {
    #[default]
    Home,
    /// Reading view for a surah number.
    Surah(u32),
}

/// Global reader state.
#[derive(Clone, Copy)]
pub struct ReaderState {
    pub view: Signal<ReaderView>,
    /// Whether the welcome modal is showing.
    pub welcome_open: Signal<bool>,
}

impl ReaderState {
    pub fn new(show_welcome: bool) -> Self {
        Self {
            view: Signal::new(ReaderView::Home),
            welcome_open: Signal::new(show_welcome),
        }
    }

    pub fn open_surah(&mut self, number: u32) {
        debug!("Opening surah {number}");
        self.view.set(ReaderView::Surah(number));
    }

    pub fn go_home(&mut self) {
        self.view.set(ReaderView::Home);
    }

    pub fn open_welcome(&mut self) {
        self.welcome_open.set(true);
    }

    pub fn close_welcome(&mut self) {
        self.welcome_open.set(false);
    }
}
