use std::collections::HashSet;

use super::{
    dataset::{FilteredDataset, SeriesPoint},
    technology::Technology,
};
use crate::config::Config;

/// Formats a generation figure: thousands as one-decimal "K", otherwise whole units.
pub fn format_value(value: f64) -> String {
    format_with_unit(value, Config::UNIT_LABEL)
}

pub fn format_with_unit(value: f64, unit: &str) -> String {
    if value >= 1000.0 {
        format!("{:.1}K {unit}", value / 1000.0)
    } else {
        format!("{} {unit}", value.round())
    }
}

/// Sum of the visible technologies at one point.
pub fn visible_total(
    point: &SeriesPoint,
    technologies: &[Technology],
    hidden: &HashSet<String>,
) -> f64 {
    technologies
        .iter()
        .filter(|t| !hidden.contains(t.key))
        .map(|t| point.value(t.key))
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub value: f64,
    pub formatted: String,
    /// Same technology in the comparison dataset, when it has this year
    pub comparison: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonFigures {
    pub total: f64,
    pub formatted_total: String,
    /// Primary total minus comparison total, signed
    pub formatted_delta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: i32,
    pub total: f64,
    pub formatted_total: String,
    pub rows: Vec<TooltipRow>,
    pub comparison: Option<ComparisonFigures>,
}

/// Builds the tooltip for bar `index` of `primary`.
///
/// Hidden and zero-valued technologies are left out and rows are sorted by
/// descending value. The comparison point is matched on the x value, not the
/// index, because the two datasets may cover different years.
pub fn build_tooltip(
    primary: &FilteredDataset,
    index: usize,
    technologies: &[Technology],
    hidden: &HashSet<String>,
    comparison: Option<&FilteredDataset>,
) -> Option<Tooltip> {
    let point = primary.data.get(index)?;
    let compared = comparison.and_then(|c| c.point_at_x(point.x));

    let mut rows: Vec<TooltipRow> = technologies
        .iter()
        .filter(|t| !hidden.contains(t.key))
        .filter_map(|t| {
            let value = point.value(t.key);
            (value > 0.0).then(|| TooltipRow {
                key: t.key,
                label: t.label,
                color: t.color,
                value,
                formatted: format_value(value),
                comparison: compared.map(|c| format_value(c.value(t.key))),
            })
        })
        .collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));

    let total = visible_total(point, technologies, hidden);
    let comparison = compared.map(|c| {
        let compared_total = visible_total(c, technologies, hidden);
        let delta = total - compared_total;
        let sign = if delta < 0.0 { "-" } else { "+" };
        ComparisonFigures {
            total: compared_total,
            formatted_total: format_value(compared_total),
            formatted_delta: format!("{sign}{}", format_value(delta.abs())),
        }
    });

    Some(Tooltip {
        x: point.x,
        total,
        formatted_total: format_value(total),
        rows,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TECHS: &[Technology] = &[
        Technology {
            key: "gas",
            label: "Gas",
            color: "#f97316",
        },
        Technology {
            key: "coal",
            label: "Coal",
            color: "#4b5563",
        },
        Technology {
            key: "hidden",
            label: "Hidden",
            color: "#000000",
        },
        Technology {
            key: "solar",
            label: "Solar",
            color: "#facc15",
        },
    ];

    fn dataset(points: Vec<SeriesPoint>) -> FilteredDataset {
        FilteredDataset {
            data: points,
            metadata: None,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1234.0), "1.2K MW");
        assert_eq!(format_value(999.0), "999 MW");
        assert_eq!(format_value(49.6), "50 MW");
        assert_eq!(format_value(0.0), "0 MW");
        assert_eq!(format_with_unit(2500.0, "GWh"), "2.5K GWh");
    }

    #[test]
    fn test_rows_sorted_and_filtered() {
        let primary = dataset(vec![SeriesPoint::new(
            2025,
            [("coal", 100.0), ("gas", 50.0), ("hidden", 0.0)],
        )]);
        let mut hidden = HashSet::new();
        hidden.insert("hidden".to_string());

        let tooltip = build_tooltip(&primary, 0, TECHS, &hidden, None).unwrap();
        let rows: Vec<_> = tooltip
            .rows
            .iter()
            .map(|r| (r.key, r.formatted.as_str()))
            .collect();

        assert_eq!(rows, vec![("coal", "100 MW"), ("gas", "50 MW")]);
        assert_eq!(tooltip.formatted_total, "150 MW");
        assert!(tooltip.comparison.is_none());
    }

    #[test]
    fn test_hidden_values_leave_total() {
        let primary = dataset(vec![SeriesPoint::new(
            2025,
            [("coal", 800.0), ("gas", 400.0)],
        )]);
        let mut hidden = HashSet::new();
        hidden.insert("coal".to_string());

        let tooltip = build_tooltip(&primary, 0, TECHS, &hidden, None).unwrap();
        assert_eq!(tooltip.total, 400.0);
        assert_eq!(tooltip.rows.len(), 1);
    }

    #[test]
    fn test_comparison_matched_by_x_value() {
        let primary = dataset(vec![
            SeriesPoint::new(2023, [("coal", 100.0)]),
            SeriesPoint::new(2024, [("coal", 900.0), ("solar", 300.0)]),
        ]);
        let comparison = dataset(vec![SeriesPoint::new(2024, [("coal", 1000.0)])]);
        let hidden = HashSet::new();

        let first = build_tooltip(&primary, 0, TECHS, &hidden, Some(&comparison)).unwrap();
        assert!(first.comparison.is_none());
        assert!(first.rows.iter().all(|r| r.comparison.is_none()));

        let second = build_tooltip(&primary, 1, TECHS, &hidden, Some(&comparison)).unwrap();
        let figures = second.comparison.unwrap();
        assert_eq!(figures.formatted_total, "1.0K MW");
        assert_eq!(figures.formatted_delta, "+200 MW");
        assert_eq!(second.rows[0].comparison.as_deref(), Some("1.0K MW"));
        assert_eq!(second.rows[1].comparison.as_deref(), Some("0 MW"));
    }

    #[test]
    fn test_out_of_range_index() {
        let primary = dataset(vec![SeriesPoint::new(2023, [("coal", 1.0)])]);
        assert!(build_tooltip(&primary, 3, TECHS, &HashSet::new(), None).is_none());
    }
}
