use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A dataset the API can serve, identified by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetDescriptor {
    pub id: &'static str,
    pub name: &'static str,
}

/// Inclusive year range plus an optional technology filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct YearFilter {
    pub start_year: i32,
    pub end_year: i32,
    pub energy_types: Vec<String>,
}

impl YearFilter {
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year: start_year.min(end_year),
            end_year: end_year.max(start_year),
            energy_types: Vec::new(),
        }
    }

    pub fn with_energy_types(mut self, energy_types: Vec<String>) -> Self {
        self.energy_types = energy_types;
        self
    }

    /// Moves the start year, never past the current end year.
    pub fn with_start(&self, year: i32) -> Self {
        Self {
            start_year: year.min(self.end_year),
            ..self.clone()
        }
    }

    /// Moves the end year, never before the current start year.
    pub fn with_end(&self, year: i32) -> Self {
        Self {
            end_year: year.max(self.start_year),
            ..self.clone()
        }
    }

    /// Query string for the `/filter` endpoint, without the leading `?`.
    pub fn query_string(&self) -> String {
        let mut params = vec![
            format!("startYear={}", self.start_year),
            format!("endYear={}", self.end_year),
        ];
        if !self.energy_types.is_empty() {
            params.push(format!("energyTypes={}", self.energy_types.join(",")));
        }
        params.join("&")
    }
}

impl Default for YearFilter {
    fn default() -> Self {
        Self::new(Config::DEFAULT_START_YEAR, Config::DEFAULT_END_YEAR)
    }
}

/// Years selectable as the start of a range: `[min, max]` capped at `end`.
pub fn start_options(min_year: i32, max_year: i32, end_year: i32) -> Vec<i32> {
    (min_year..=max_year).filter(|y| *y <= end_year).collect()
}

/// Years selectable as the end of a range: `[min, max]` from `start` on.
pub fn end_options(min_year: i32, max_year: i32, start_year: i32) -> Vec<i32> {
    (min_year..=max_year).filter(|y| *y >= start_year).collect()
}

/// One x-axis tick: a year and the amount per technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: i32,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl SeriesPoint {
    pub fn new(x: i32, values: impl IntoIterator<Item = (&'static str, f64)>) -> Self {
        Self {
            x,
            values: values
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }

    /// Value for a technology; missing keys count as zero.
    pub fn value(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub years: [i32; 2],
}

impl DatasetMetadata {
    pub fn first_year(&self) -> i32 {
        self.years[0]
    }

    pub fn last_year(&self) -> i32 {
        self.years[1]
    }
}

/// Body of `GET /datasets/{id}/filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredDataset {
    pub data: Vec<SeriesPoint>,
    #[serde(default)]
    pub metadata: Option<DatasetMetadata>,
}

impl FilteredDataset {
    pub fn point_at_x(&self, x: i32) -> Option<&SeriesPoint> {
        self.data.iter().find(|p| p.x == x)
    }

    /// Category labels for the x axis.
    pub fn x_labels(&self) -> Vec<String> {
        self.data.iter().map(|p| p.x.to_string()).collect()
    }
}

/// Body of `GET /datasets/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Vec<SeriesPoint>,
    #[serde(default)]
    pub metadata: Option<DatasetMetadata>,
}

/// Body of `GET /datasets/{id}/summary`, kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetSummary(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_without_energy_types() {
        let filter = YearFilter::new(2023, 2025);
        assert_eq!(filter.query_string(), "startYear=2023&endYear=2025");
    }

    #[test]
    fn test_query_string_joins_energy_types() {
        let filter = YearFilter::new(2030, 2040)
            .with_energy_types(vec!["coal".to_string(), "solar".to_string()]);
        assert_eq!(
            filter.query_string(),
            "startYear=2030&endYear=2040&energyTypes=coal,solar"
        );
    }

    #[test]
    fn test_filter_clamps_start_and_end() {
        let filter = YearFilter::new(2025, 2030);
        assert_eq!(filter.with_start(2035).start_year, 2030);
        assert_eq!(filter.with_end(2020).end_year, 2025);

        let swapped = YearFilter::new(2040, 2030);
        assert!(swapped.start_year <= swapped.end_year);
    }

    #[test]
    fn test_picker_options_are_bounded() {
        let starts = start_options(2023, 2050, 2030);
        assert_eq!(starts.first(), Some(&2023));
        assert_eq!(starts.last(), Some(&2030));

        let ends = end_options(2023, 2050, 2030);
        assert_eq!(ends.first(), Some(&2030));
        assert_eq!(ends.last(), Some(&2050));
    }

    #[test]
    fn test_series_point_parsing() {
        let json = r#"{
            "data": [
                {"x": 2023, "coal": 120.5, "gas": 40},
                {"x": 2024, "coal": 110, "solar": 15}
            ],
            "metadata": {"years": [2023, 2024]}
        }"#;

        let dataset: FilteredDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.data.len(), 2);
        assert_eq!(dataset.data[0].value("coal"), 120.5);
        assert_eq!(dataset.data[1].value("gas"), 0.0);
        assert_eq!(dataset.metadata.unwrap().years, [2023, 2024]);
        assert_eq!(dataset.x_labels(), vec!["2023", "2024"]);
    }

    #[test]
    fn test_metadata_is_optional() {
        let json = r#"{"data": []}"#;
        let dataset: FilteredDataset = serde_json::from_str(json).unwrap();
        assert!(dataset.metadata.is_none());
    }

    #[test]
    fn test_full_dataset_parsing() {
        let json = r#"{
            "id": "indonesia-generation-medium-resolution",
            "data": [{"x": 2023, "hydro": 30}]
        }"#;

        let response: DatasetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "indonesia-generation-medium-resolution");
        assert!(response.name.is_none());
        assert_eq!(response.data[0].value("hydro"), 30.0);
        assert!(response.metadata.is_none());
    }

    #[test]
    fn test_summary_is_opaque() {
        let json = r#"{"totalGeneration": 12345, "technologies": ["coal"]}"#;
        let summary: DatasetSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.0["totalGeneration"], 12345);
    }
}
