//! Market report domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient_number;

/// Key of the derived trend growth field.
pub const TREND_GROWTH_PERCENT: &str = "trendGrowthPercent";

/// Key of the derived confidence field.
pub const CONFIDENCE_SCORE: &str = "confidenceScore";

/// A market analysis report as produced by the model.
///
/// Serializes as the underlying JSON object, so keys the model adds beyond
/// the known fields survive the round trip to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketReport(Map<String, Value>);

/// A competitor's share of the market.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorShare {
    pub name: String,
    pub share: f64,
}

impl MarketReport {
    /// Wrap a parsed JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Raw access to any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub(crate) fn set_derived(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Competitor brand names, in the order the model ranked them.
    pub fn competitors(&self) -> Vec<&str> {
        self.array("competitors")
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Average retail price in USD.
    pub fn avg_price(&self) -> Option<f64> {
        self.number("avgPrice")
    }

    /// Estimated annual unit sales per region. Unknown keys are skipped.
    pub fn sales_by_region(&self) -> Vec<(Region, f64)> {
        let Some(sales) = self.0.get("salesByCountry").and_then(Value::as_object) else {
            return Vec::new();
        };

        Region::ALL
            .iter()
            .filter_map(|region| {
                sales
                    .get(region.as_str())
                    .and_then(lenient_number)
                    .map(|units| (*region, units))
            })
            .collect()
    }

    pub fn opportunity_score(&self) -> Option<f64> {
        self.number("opportunityScore")
    }

    pub fn opportunity_explanation(&self) -> Option<&str> {
        self.0.get("opportunityExplanation").and_then(Value::as_str)
    }

    /// Annual repair or failure rate, in percent.
    pub fn repair_rate(&self) -> Option<f64> {
        self.number("repairRate")
    }

    /// Market shares; entries without a name or numeric share are dropped.
    pub fn competitor_shares(&self) -> Vec<CompetitorShare> {
        self.array("competitorShares")
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        let name = item.get("name")?.as_str()?;
                        let share = lenient_number(item.get("share")?)?;
                        Some(CompetitorShare {
                            name: name.to_string(),
                            share,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.0.get("recommendation").and_then(Value::as_str)
    }

    pub fn trend_labels(&self) -> Vec<&str> {
        self.trend_field("labels")
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Raw `trendData.values` entries, unparsed.
    pub fn trend_values(&self) -> Option<&Vec<Value>> {
        self.trend_field("values")
    }

    /// Derived growth, `None` when absent or recorded as undefined.
    pub fn trend_growth_percent(&self) -> Option<f64> {
        self.number(TREND_GROWTH_PERCENT)
    }

    pub fn confidence_score(&self) -> Option<i64> {
        self.0.get(CONFIDENCE_SCORE).and_then(Value::as_i64)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(lenient_number)
    }

    fn array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    fn trend_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.0
            .get("trendData")
            .and_then(|trend| trend.get(key))
            .and_then(Value::as_array)
    }
}

/// Sales region used in `salesByCountry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Canada,
    Mexico,
    Europe,
    SouthAmerica,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Us,
        Region::Canada,
        Region::Mexico,
        Region::Europe,
        Region::SouthAmerica,
    ];

    /// Key as it appears in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Canada => "Canada",
            Self::Mexico => "Mexico",
            Self::Europe => "Europe",
            Self::SouthAmerica => "South America",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
