/// A static KPI display element and the literal it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub element_id: &'static str,
    pub label: &'static str,
    pub text: String,
}

/// Groups digits in threes with a space, e.g. `90000` -> `"90 000"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn kpis() -> [Kpi; 3] {
    [
        Kpi {
            element_id: "kpiTermine",
            label: "Termine",
            text: group_thousands(12_000),
        },
        Kpi {
            element_id: "kpiLeads",
            label: "Leads",
            text: group_thousands(90_000),
        },
        Kpi {
            element_id: "kpiBudget",
            label: "Budget",
            text: format!("CHF {}", group_thousands(20_000)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1 000");
        assert_eq!(group_thousands(1_234_567), "1 234 567");
    }

    #[test]
    fn kpi_literals() {
        let texts: Vec<_> = kpis().iter().map(|k| (k.element_id, k.text.clone())).collect();
        assert_eq!(
            texts,
            vec![
                ("kpiTermine", "12 000".to_string()),
                ("kpiLeads", "90 000".to_string()),
                ("kpiBudget", "CHF 20 000".to_string()),
            ]
        );
    }
}
