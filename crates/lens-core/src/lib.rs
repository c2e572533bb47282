//! Marketlens Core Library
//!
//! Report model, prompt construction, JSON extraction from model output and
//! derived-metric enrichment for the market analysis service.

pub mod analysis;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod generation;
pub mod prompt;
pub mod report;

pub use analysis::{generate_report, normalize_category, DEFAULT_CATEGORY};
pub use error::{ExtractionError, LensError, LensResult, ProviderError};
pub use generation::TextGenerator;
pub use report::model::{MarketReport, Region};
