// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for reports.

use fl_core::{HealthLevel, Metric, MetricResult, TelemetryResult, TrackingStrategy};
use fl_core::{MetricValidity, ProjectKind, Validity};

use crate::colors;

/// Language subtags that write decimals with a comma.
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "cs", "da", "de", "es", "fi", "fr", "it", "nb", "nl", "pl", "pt", "ru", "sv", "tr",
];

/// Width of the metric name column.
const NAME_WIDTH: usize = 20;

/// Decimal separator for a locale tag such as `de-DE` or `fr_FR`.
pub fn decimal_separator(locale: &str) -> char {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str()) {
        ','
    } else {
        '.'
    }
}

/// Formats `value` with one decimal, dropping `.0` for whole numbers.
pub fn format_number(value: f64, locale: &str) -> String {
    let text = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    };
    match decimal_separator(locale) {
        '.' => text,
        sep => text.replace('.', &sep.to_string()),
    }
}

fn unit(metric: Metric) -> &'static str {
    match metric {
        Metric::IterationHealth
        | Metric::IterationProgress
        | Metric::ScopeCreep
        | Metric::Wip
        | Metric::FlowEfficiency
        | Metric::Completion
        | Metric::AssigneeLoad => "%",
        Metric::CycleTime | Metric::LeadTime => "h",
        Metric::Throughput => "/wk",
        Metric::Velocity
        | Metric::WipConsistency
        | Metric::StalledItems
        | Metric::HealthStatus => "",
    }
}

/// Renders one metric value without color, or `-` when it is absent.
pub fn format_value(metric: Metric, result: &MetricResult, locale: &str) -> String {
    let Some(value) = result.value else {
        return "-".to_string();
    };
    if metric == Metric::HealthStatus {
        if let Some(level) = HealthLevel::from_ordinal(value) {
            return level.as_str().to_string();
        }
    }
    format!("{}{}", format_number(value, locale), unit(metric))
}

/// Formats one metric row: name, value and explanation.
pub fn format_metric_line(metric: Metric, result: &MetricResult, locale: &str) -> String {
    let value = format!("{:<10}", format_value(metric, result, locale));
    let value = match result.value.and_then(HealthLevel::from_ordinal) {
        Some(level) if metric == Metric::HealthStatus => {
            colors::paint(colors::health_code(level), &value)
        }
        _ => value,
    };
    format!(
        "  {:<width$} {} {}",
        metric.as_str(),
        value,
        colors::context(&format!("{} [{}]", result.explanation_code, result.source_window)),
        width = NAME_WIDTH,
    )
}

/// Full text report.
pub fn format_report(result: &TelemetryResult, locale: &str, with_items: bool) -> String {
    let ctx = &result.context;
    let mut lines = vec![
        format!(
            "{} {}  {}",
            colors::header("Project"),
            result.project_key,
            colors::health(result.health)
        ),
        format!(
            "  {} {}, {} {}, {} {}",
            colors::context("tracking:"),
            ctx.tracking_strategy,
            colors::context("kind:"),
            ctx.project_kind,
            colors::context("estimation:"),
            ctx.estimation_mode,
        ),
    ];
    if let Some(field) = &ctx.size_field {
        lines.push(format!("  {} {}", colors::context("size field:"), field));
    }
    if !ctx.degraded.is_empty() {
        let names: Vec<String> = ctx.degraded.iter().map(|d| d.to_string()).collect();
        lines.push(format!(
            "  {} {}",
            colors::paint(colors::codes::WARN, "degraded:"),
            names.join(", ")
        ));
    }
    if result.data_unavailable {
        lines.push(colors::paint(
            colors::codes::BAD,
            "  board data unavailable; metrics are empty",
        ));
    }

    lines.push(String::new());
    lines.push(colors::header("Metrics:"));
    for metric in Metric::ALL {
        if let Some(r) = result.metric(metric) {
            lines.push(format_metric_line(metric, r, locale));
        }
    }

    lines.push(String::new());
    lines.push(colors::header("Flow distribution:"));
    let dist: Vec<String> = result
        .flow_distribution
        .iter()
        .map(|(category, count)| format!("{category} {count}"))
        .collect();
    lines.push(format!("  {}", dist.join("  ")));

    if with_items {
        lines.push(String::new());
        lines.push(colors::header("Items:"));
        if result.items.is_empty() {
            lines.push(colors::context("  (none)"));
        }
        for item in &result.items {
            let active = item
                .active_hours
                .map(|h| format!("{}h", format_number(h, locale)))
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!(
                "  {} {} {} ({}) {} {}",
                colors::literal(&item.key),
                item.flow_category,
                colors::category(item.category),
                item.status_name,
                active,
                colors::context(item.method.as_str()),
            ));
        }
    }
    lines.join("\n")
}

/// Text form of a validity matrix.
pub fn format_validity(
    tracking: TrackingStrategy,
    kind: ProjectKind,
    matrix: &MetricValidity,
) -> String {
    let mut lines = vec![format!(
        "{} {} / {}",
        colors::header("Structure"),
        tracking,
        kind
    )];
    for (metric, validity) in matrix.iter() {
        let mark = match validity {
            Validity::Valid => colors::paint(colors::codes::GOOD, "valid"),
            Validity::Hidden => colors::paint(colors::codes::BAD, "hidden"),
        };
        lines.push(format!("  {:<width$} {mark}", metric.as_str(), width = NAME_WIDTH));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
