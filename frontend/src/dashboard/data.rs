//! Hard-coded dashboard figures.

pub const YEARS: [&str; 3] = ["2022", "2023", "2024"];

/// Appointments per category and year, indexed like [`YEARS`].
pub const CATEGORIES: [(&str, [f64; 3]); 3] = [
    ("Beratung", [18.0, 24.0, 29.0]),
    ("Workshops", [12.0, 17.0, 22.0]),
    ("Coaching", [8.0, 11.0, 15.0]),
];

pub const CATEGORY_TOTALS: [f64; 3] = [71.0, 51.0, 34.0];

/// Yearly baseline, the sum over all categories.
pub const TREND_VALUES: [f64; 3] = [38.0, 52.0, 66.0];

pub const CATEGORY_COLORS: [&str; 3] = ["#2563eb", "#10b981", "#f59e0b"];
pub const TREND_COLOR: &str = "#1f2937";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_agree_with_breakdown() {
        for ((_, per_year), total) in CATEGORIES.iter().zip(CATEGORY_TOTALS) {
            assert_eq!(per_year.iter().sum::<f64>(), total);
        }
        for (year, baseline) in TREND_VALUES.iter().enumerate() {
            let sum: f64 = CATEGORIES.iter().map(|(_, values)| values[year]).sum();
            assert_eq!(sum, *baseline);
        }
    }
}
