//! # mushaf-core
//!
//! Core types, search, and error handling for the Mushaf Qur'an reader.

pub mod error;
pub mod search;
pub mod types;

pub use error::{Error, HttpError, Result};
pub use search::filter_surahs;
pub use types::*;
