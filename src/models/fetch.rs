use std::rc::Rc;

use super::dataset::{DatasetMetadata, FilteredDataset, SeriesPoint};

/// Lifecycle of one dataset request.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState {
    /// No dataset requested for this slot.
    Idle,
    Loading,
    Loaded(Rc<FilteredDataset>),
    Error(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FetchStatus {
    Loading,
    Error,
    Success,
}

impl FetchState {
    /// Returns true while the request has not settled
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchState::Error(_))
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<FilteredDataset>> {
        match self {
            FetchState::Loaded(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// A dataset id together with the state of its request.
#[derive(Clone, PartialEq, Debug)]
pub struct DatasetResult {
    pub id: String,
    pub state: FetchState,
}

impl DatasetResult {
    pub fn new(id: impl Into<String>, state: FetchState) -> Self {
        Self {
            id: id.into(),
            state,
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self.state {
            FetchState::Loaded(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
            FetchState::Idle | FetchState::Loading => FetchStatus::Loading,
        }
    }

    pub fn data(&self) -> &[SeriesPoint] {
        self.state
            .data()
            .map(|d| d.data.as_slice())
            .unwrap_or_default()
    }

    pub fn metadata(&self) -> Option<DatasetMetadata> {
        self.state.data().and_then(|d| d.metadata)
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}

/// Combined view over the primary slot and the optional comparison slot.
#[derive(Clone, PartialEq, Debug)]
pub struct MultiDatasetState {
    pub results: Vec<DatasetResult>,
    pub is_loading: bool,
    pub is_error: bool,
    pub error: Option<String>,
}

impl MultiDatasetState {
    /// Folds both slots into one status. A slot without an id is inert and
    /// contributes nothing; the primary slot's error wins over the comparison's.
    pub fn aggregate(slots: [(Option<&str>, FetchState); 2]) -> Self {
        let results: Vec<DatasetResult> = slots
            .into_iter()
            .filter_map(|(id, state)| id.map(|id| DatasetResult::new(id, state)))
            .collect();

        let is_loading = results.iter().any(|r| r.state.is_loading());
        let is_error = results.iter().any(|r| r.state.is_error());
        let error = results.iter().find_map(|r| r.error().map(str::to_string));

        Self {
            results,
            is_loading,
            is_error,
            error,
        }
    }

    pub fn result(&self, id: &str) -> Option<&DatasetResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// All present slots have data.
    pub fn is_ready(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.state.data().is_some())
    }
}
