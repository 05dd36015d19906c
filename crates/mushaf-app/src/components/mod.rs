//! Reader UI components.

mod audio_button;
mod ayah_card;
mod home;
mod navbar;
mod scroll_to_top;
mod search_bar;
mod spinner;
mod surah_card;
mod surah_view;
mod welcome_modal;

pub use audio_button::AudioButton;
pub use ayah_card::AyahCard;
pub use home::HomeView;
pub use navbar::Navbar;
pub use scroll_to_top::ScrollToTop;
pub use search_bar::SearchBar;
pub use spinner::LoadingSpinner;
pub use surah_card::SurahCard;
pub use surah_view::SurahView;
pub use welcome_modal::WelcomeModal;
