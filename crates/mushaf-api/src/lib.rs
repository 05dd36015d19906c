//! # mushaf-api
//!
//! Client for the equran.id v2 REST API.
//!
//! The API serves the chapter list and per-chapter verse data (Arabic
//! text, transliteration, Indonesian translation, and per-reciter audio
//! URLs) wrapped in a `{ code, message, data }` envelope.

pub mod client;
pub mod endpoints;
pub mod parser;
pub mod types;

pub use client::EquranClient;
