//! # Marketlens Provider
//!
//! Hosted text generation for market reports, backed by the Cohere
//! generate API.

pub mod cohere;
pub mod config;

pub use cohere::CohereClient;
pub use config::GenerationConfig;
