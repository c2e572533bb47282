//! Prompt construction for market reports.

use chrono::{NaiveDate, Utc};

use crate::report::model::Region;

/// Build the report prompt for `category`, dated today.
pub fn build_prompt(category: &str) -> String {
    build_prompt_for_date(category, Utc::now().date_naive())
}

/// Build the report prompt for `category` as of `date`.
pub fn build_prompt_for_date(category: &str, date: NaiveDate) -> String {
    let regions = Region::ALL
        .iter()
        .map(Region::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"For the product category "{category}", return a JSON object with the following structure:

- competitors: an array of 5 real-world brand or company names currently selling this type of product
- avgPrice: realistic average retail price in USD
- salesByCountry: object mapping these regions to estimated annual unit sales: {regions}
- opportunityScore: integer from 0 (low) to 100 (high)
- opportunityExplanation: one short sentence explaining the opportunity score
- repairRate: realistic annual failure or repair percentage (1-10%)
- competitorShares: array of {{ name, share }} where shares sum to ~100%
- recommendation: a short go-to-market recommendation (1-2 sentences)
- trendData: object with 'labels' (the last 24 months) and 'values' (numeric values representing relative search interest between 0 and 100), both arrays of equal length

Only return raw JSON.

Metadata:
Date of today: {date}"#,
        date = date.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_prompt_mentions_category_and_fields() {
        let prompt = build_prompt_for_date("espresso machines", fixed_date());

        assert!(prompt.starts_with("For the product category \"espresso machines\""));
        for field in [
            "competitors",
            "avgPrice",
            "salesByCountry",
            "opportunityScore",
            "opportunityExplanation",
            "repairRate",
            "competitorShares",
            "recommendation",
            "trendData",
        ] {
            assert!(prompt.contains(&format!("- {field}:")), "missing {field}");
        }
        assert!(prompt.contains("US, Canada, Mexico, Europe, South America"));
        assert!(prompt.contains("{ name, share }"));
        assert!(prompt.contains("Only return raw JSON."));
    }

    #[test]
    fn test_prompt_is_dated() {
        let prompt = build_prompt_for_date("drones", fixed_date());
        assert!(prompt.ends_with("Date of today: 2026-03-14"));
    }
}
