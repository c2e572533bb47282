//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use lens_core::report::lenient_number;
use lens_core::report::model::TREND_GROWTH_PERCENT;
use lens_core::MarketReport;

/// Print a report as a human-readable summary.
pub fn print_report(category: &str, report: &MarketReport) {
    println!("{}", render_report(category, report));
}

/// Build the summary printed by [`print_report`].
pub fn render_report(category: &str, report: &MarketReport) -> String {
    let mut lines = vec![
        format!("{} {}", "Market report".cyan().bold(), format!("({})", category).dimmed()),
        String::new(),
        format!("{}: {}", "Opportunity".bold(), score_colored(report.opportunity_score())),
    ];

    if let Some(explanation) = report.opportunity_explanation() {
        lines.push(format!("  {}", explanation.dimmed()));
    }

    lines.push(format!("{}: {}", "Confidence".bold(), or_na(report.confidence_score())));
    lines.push(format!("{}: {}", "Trend growth".bold(), growth_text(report)));
    lines.push(format!(
        "{}: {}",
        "Average price".bold(),
        report.avg_price().map(|p| format!("${:.2}", p)).unwrap_or_else(|| "n/a".into())
    ));
    lines.push(format!(
        "{}: {}",
        "Repair rate".bold(),
        report.repair_rate().map(|r| format!("{}%", r)).unwrap_or_else(|| "n/a".into())
    ));

    let competitors = report.competitors();
    if !competitors.is_empty() {
        lines.push(String::new());
        lines.push(format!("{}", "Competitors".bold()));
        for (i, name) in competitors.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, name));
        }
    }

    let shares = report.competitor_shares();
    if !shares.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<30} {:>8}", "Share", "%"));
        lines.push("─".repeat(39));
        for share in &shares {
            lines.push(format!("{:<30} {:>8}", truncate(&share.name, 28), share.share));
        }
    }

    let sales = report.sales_by_region();
    if !sales.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<30} {:>12}", "Region", "Units/year"));
        lines.push("─".repeat(43));
        for (region, units) in &sales {
            lines.push(format!("{:<30} {:>12}", region.to_string(), units.round()));
        }
    }

    let labels = report.trend_labels();
    if let Some(values) = report.trend_values().filter(|v| !v.is_empty()) {
        lines.push(String::new());
        lines.push(format!("{}", "Search interest".bold()));
        for (i, value) in values.iter().enumerate() {
            let label = labels.get(i).copied().unwrap_or("?");
            let shown = lenient_number(value)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "n/a".into());
            lines.push(format!("  {:<12} {}", label, shown));
        }
    }

    if let Some(recommendation) = report.recommendation() {
        lines.push(String::new());
        lines.push(format!("{}", "Recommendation".bold()));
        lines.push(format!("  {}", recommendation));
    }

    lines.join("\n")
}

fn score_colored(score: Option<f64>) -> ColoredString {
    match score {
        Some(s) if s >= 70.0 => s.to_string().green(),
        Some(s) if s >= 40.0 => s.to_string().yellow(),
        Some(s) => s.to_string().red(),
        None => "n/a".dimmed(),
    }
}

fn growth_text(report: &MarketReport) -> String {
    match report.trend_growth_percent() {
        Some(g) => format!("{:.2}%", g),
        None if report.contains_key(TREND_GROWTH_PERCENT) => "undefined (zero baseline)".into(),
        None => "n/a".into(),
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".into())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
