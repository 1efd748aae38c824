use super::{dataset::DatasetDescriptor, error::AppError};

/// Datasets offered by the API, in display order. The first is the default.
pub const DATASETS: &[DatasetDescriptor] = &[
    DatasetDescriptor {
        id: "indonesia-generation-medium-resolution",
        name: "Indonesia Generation - Medium Resolution",
    },
    DatasetDescriptor {
        id: "indonesia-generation-high-resolution",
        name: "Indonesia Generation - High Resolution",
    },
];

/// Lookup over a fixed list of dataset descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetRegistry {
    datasets: &'static [DatasetDescriptor],
}

impl DatasetRegistry {
    pub const fn new(datasets: &'static [DatasetDescriptor]) -> Self {
        Self { datasets }
    }

    pub fn all(&self) -> &'static [DatasetDescriptor] {
        self.datasets
    }

    /// Returns the first registered dataset.
    pub fn default_dataset(&self) -> Result<&'static DatasetDescriptor, AppError> {
        self.datasets
            .first()
            .ok_or_else(|| AppError::Config("No datasets registered".to_string()))
    }

    pub fn dataset_by_id(&self, id: &str) -> Option<&'static DatasetDescriptor> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Every dataset except `current_id`, in registration order.
    pub fn available_comparisons(&self, current_id: &str) -> Vec<&'static DatasetDescriptor> {
        self.datasets.iter().filter(|d| d.id != current_id).collect()
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new(DATASETS)
    }
}
