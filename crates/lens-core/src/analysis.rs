//! End-to-end report generation: prompt, completion, extraction, enrichment.

use tracing::{debug, info};

use crate::enrich;
use crate::error::LensResult;
use crate::extract;
use crate::generation::TextGenerator;
use crate::prompt;
use crate::report::model::MarketReport;

/// Category used when the caller gives none.
pub const DEFAULT_CATEGORY: &str = "generic";

/// Trim the requested category, falling back to [`DEFAULT_CATEGORY`].
pub fn normalize_category(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(category) if !category.is_empty() => category,
        _ => DEFAULT_CATEGORY,
    }
}

/// Generate an enriched market report for `category`.
///
/// Makes exactly one call to `generator`.
pub async fn generate_report(
    generator: &dyn TextGenerator,
    category: &str,
) -> LensResult<MarketReport> {
    let prompt = prompt::build_prompt(category);
    debug!(category, prompt_len = prompt.len(), "Requesting completion");

    let raw = generator.generate(&prompt).await?;
    debug!(category, completion_len = raw.len(), "Received completion");

    let mut report = extract::extract(&raw)?;
    enrich::enrich(&mut report);

    info!(
        category,
        competitors = report.competitors().len(),
        trend_growth = ?report.trend_growth_percent(),
        confidence = ?report.confidence_score(),
        "Market report generated"
    );

    Ok(report)
}
