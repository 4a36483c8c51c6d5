//! Business dashboard: fixed chart configurations and KPI literals.

pub mod chart;
pub mod data;
pub mod kpi;

use chart::{
    Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Colors, Dataset, Plugins, Scales, Title,
};
use data::{CATEGORIES, CATEGORY_COLORS, CATEGORY_TOTALS, TREND_COLOR, TREND_VALUES, YEARS};

/// Canvas ids of the three progress rings, paired with their values.
pub const PROGRESS_RINGS: [(&str, u8); 3] = [("circleZiel1", 80), ("circleZiel2", 55), ("circleZiel3", 65)];

pub const COMBO_CANVAS: &str = "comboChart";
pub const CATEGORY_CANVAS: &str = "categoryChart";
pub const TREND_CANVAS: &str = "trendChart";

const RING_TRACK_COLOR: &str = "#e5e7eb";

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn trend_dataset() -> Dataset {
    Dataset {
        label: "Baseline".to_string(),
        data: TREND_VALUES.to_vec(),
        background_color: Colors::One(TREND_COLOR.to_string()),
        border_color: Some(TREND_COLOR.to_string()),
        border_width: Some(2),
        tension: Some(0.3),
        fill: Some(false),
        ..Dataset::default()
    }
}

/// Per-category bars per year with the baseline trend drawn over them.
/// Both series share the `y` axis.
pub fn combo_chart() -> ChartConfig {
    let mut datasets: Vec<Dataset> = CATEGORIES
        .iter()
        .zip(CATEGORY_COLORS)
        .map(|((name, per_year), color)| Dataset {
            kind: Some(ChartKind::Bar),
            label: name.to_string(),
            data: per_year.to_vec(),
            background_color: Colors::One(color.to_string()),
            y_axis_id: Some("y".to_string()),
            order: Some(2),
            ..Dataset::default()
        })
        .collect();
    datasets.push(Dataset {
        kind: Some(ChartKind::Line),
        y_axis_id: Some("y".to_string()),
        order: Some(1),
        ..trend_dataset()
    });

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(&YEARS),
            datasets,
        },
        options: ChartOptions {
            scales: Some(Scales {
                y: Axis { begin_at_zero: true },
            }),
            ..ChartOptions::default()
        },
    }
}

pub fn category_bar_chart() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: CATEGORIES.iter().map(|(name, _)| name.to_string()).collect(),
            datasets: vec![Dataset {
                label: "Total".to_string(),
                data: CATEGORY_TOTALS.to_vec(),
                background_color: Colors::Many(labels(&CATEGORY_COLORS)),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            plugins: Plugins::hidden_legend(),
            scales: Some(Scales {
                y: Axis { begin_at_zero: true },
            }),
            ..ChartOptions::default()
        },
    }
}

pub fn trend_line_chart() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&YEARS),
            datasets: vec![trend_dataset()],
        },
        options: ChartOptions {
            scales: Some(Scales {
                y: Axis { begin_at_zero: true },
            }),
            ..ChartOptions::default()
        },
    }
}

/// Doughnut showing `value` against the remainder to 100.
pub fn progress_ring(value: u8, accent: &str) -> ChartConfig {
    let value = value.min(100);
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: labels(&["Erreicht", "Offen"]),
            datasets: vec![Dataset {
                label: format!("{}%", value),
                data: vec![f64::from(value), f64::from(100 - value)],
                background_color: Colors::Many(vec![accent.to_string(), RING_TRACK_COLOR.to_string()]),
                border_width: Some(0),
                ..Dataset::default()
            }],
        },
        options: ChartOptions {
            cutout: Some("75%".to_string()),
            plugins: Plugins {
                title: Some(Title {
                    display: true,
                    text: format!("{}%", value),
                }),
                ..Plugins::hidden_legend()
            }
            .without_tooltip(),
            ..ChartOptions::default()
        },
    }
}

/// Accent color from the page style variable, or `fallback` when unset.
pub fn resolve_accent(raw: Option<String>, fallback: &str) -> String {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
