//! Derived metrics computed from a parsed report.
//!
//! Enrichment never fails. When inputs are missing or not numeric the
//! corresponding derived field is left out. Parsed fields are never touched;
//! only [`TREND_GROWTH_PERCENT`] and [`CONFIDENCE_SCORE`] are written.

use serde_json::Value;
use tracing::debug;

use crate::report::lenient_number;
use crate::report::model::{MarketReport, CONFIDENCE_SCORE, TREND_GROWTH_PERCENT};

const OPPORTUNITY_WEIGHT: f64 = 0.7;
const GROWTH_WEIGHT: f64 = 0.3;

/// Growth between the first and last trend value.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendGrowth {
    /// Percentage change, rounded to two decimals.
    Percent(f64),
    /// Baseline was zero.
    Undefined,
}

/// Add derived fields to `report` in place.
pub fn enrich(report: &mut MarketReport) {
    let Some(growth) = trend_growth(report) else {
        debug!("Trend data missing or unusable, skipping enrichment");
        return;
    };

    let rate = match growth {
        TrendGrowth::Percent(rate) => {
            report.set_derived(TREND_GROWTH_PERCENT, Value::String(format!("{rate:.2}")));
            Some(rate)
        }
        TrendGrowth::Undefined => {
            debug!("Trend baseline is zero, growth undefined");
            report.set_derived(TREND_GROWTH_PERCENT, Value::Null);
            None
        }
    };

    if let (Some(score), Some(rate)) = (report.opportunity_score(), rate) {
        let confidence = js_round(score * OPPORTUNITY_WEIGHT + rate * GROWTH_WEIGHT);
        report.set_derived(CONFIDENCE_SCORE, Value::from(confidence));
    }
}

/// By-value form of [`enrich`].
pub fn enriched(mut report: MarketReport) -> MarketReport {
    enrich(&mut report);
    report
}

/// Growth from `trendData.values`, or `None` when there is nothing to compute.
///
/// Needs at least two values with numeric first and last entries.
pub fn trend_growth(report: &MarketReport) -> Option<TrendGrowth> {
    let values = report.trend_values()?;
    if values.len() < 2 {
        return None;
    }

    let first = lenient_number(values.first()?)?;
    let last = lenient_number(values.last()?)?;

    let rate = (last - first) / first * 100.0;
    if first == 0.0 || !rate.is_finite() {
        return Some(TrendGrowth::Undefined);
    }

    Some(TrendGrowth::Percent(round_to_cents(rate)))
}

/// Round to two decimals via the text form written to the report. The
/// confidence blend must see the same figure the caller sees.
fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Round half toward positive infinity.
fn js_round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
