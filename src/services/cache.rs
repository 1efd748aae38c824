use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::models::{
    dataset::{FilteredDataset, YearFilter},
    error::AppError,
    fetch::FetchState,
};
use crate::services::api::DatasetClient;

/// Identity of a filtered dataset request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub dataset_id: String,
    pub filter: YearFilter,
}

impl QueryKey {
    pub fn new(dataset_id: impl Into<String>, filter: YearFilter) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            filter,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}-{}]",
            self.dataset_id, self.filter.start_year, self.filter.end_year
        )
    }
}

/// Receives the settled state of a request.
pub type Waiter = Box<dyn FnOnce(FetchState)>;

enum CacheEntry {
    Pending(Vec<Waiter>),
    Ready(Rc<FilteredDataset>),
}

/// What the caller of [`QueryCache::request`] has to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Already cached; the waiter was dropped.
    Hit(FetchState),
    /// A request for this key is in flight; the waiter was queued.
    Joined,
    /// Nothing known about this key; the caller must fetch and then `settle`.
    Issue,
}

/// Filtered-dataset results keyed by `(dataset id, filter)`.
///
/// Successful results stay cached. Errors are handed to the waiters and then
/// evicted, so the next request for the key goes back to the network.
#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, key: &QueryKey, waiter: Waiter) -> RequestOutcome {
        match self.entries.get_mut(key) {
            Some(CacheEntry::Ready(dataset)) => {
                RequestOutcome::Hit(FetchState::Loaded(dataset.clone()))
            }
            Some(CacheEntry::Pending(waiters)) => {
                waiters.push(waiter);
                RequestOutcome::Joined
            }
            None => {
                self.entries
                    .insert(key.clone(), CacheEntry::Pending(vec![waiter]));
                RequestOutcome::Issue
            }
        }
    }

    /// Records the outcome of a request and returns the waiters to notify
    /// together with the state to hand them.
    #[must_use]
    pub fn settle(
        &mut self,
        key: &QueryKey,
        result: Result<FilteredDataset, AppError>,
    ) -> (Vec<Waiter>, FetchState) {
        let waiters = match self.entries.remove(key) {
            Some(CacheEntry::Pending(waiters)) => waiters,
            _ => Vec::new(),
        };

        let state = match result {
            Ok(dataset) => {
                let dataset = Rc::new(dataset);
                self.entries
                    .insert(key.clone(), CacheEntry::Ready(dataset.clone()));
                FetchState::Loaded(dataset)
            }
            Err(e) => FetchState::Error(e.to_string()),
        };

        (waiters, state)
    }

    pub fn is_pending(&self, key: &QueryKey) -> bool {
        matches!(self.entries.get(key), Some(CacheEntry::Pending(_)))
    }

    pub fn cached(&self, key: &QueryKey) -> Option<Rc<FilteredDataset>> {
        match self.entries.get(key) {
            Some(CacheEntry::Ready(dataset)) => Some(dataset.clone()),
            _ => None,
        }
    }
}

/// Tracks the key a consumer currently wants. Results for any other key are stale.
#[derive(Clone, Default)]
pub struct KeyGuard {
    current: Rc<RefCell<Option<QueryKey>>>,
}

impl KeyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self, key: Option<QueryKey>) {
        *self.current.borrow_mut() = key;
    }

    pub fn is_current(&self, key: &QueryKey) -> bool {
        self.current.borrow().as_ref() == Some(key)
    }

    /// Wraps `apply` so it only runs while `key` is still the wanted one.
    pub fn guard<F>(&self, key: QueryKey, apply: F) -> Waiter
    where
        F: FnOnce(FetchState) + 'static,
    {
        let guard = self.clone();
        Box::new(move |state: FetchState| {
            if guard.is_current(&key) {
                apply(state);
            }
        })
    }
}

/// Shared cache plus HTTP client, provided to the component tree as context.
#[derive(Clone)]
pub struct QueryClient {
    cache: Rc<RefCell<QueryCache>>,
    http: Rc<DatasetClient>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

impl QueryClient {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self::with_client(DatasetClient::new()?))
    }

    pub fn with_client(http: DatasetClient) -> Self {
        Self {
            cache: Rc::new(RefCell::new(QueryCache::new())),
            http: Rc::new(http),
        }
    }

    /// Returns the cached state immediately, or `None` when `waiter` will be
    /// called once the in-flight or newly issued request settles.
    pub fn fetch_filtered(&self, key: &QueryKey, waiter: Waiter) -> Option<FetchState> {
        let outcome = self.cache.borrow_mut().request(key, waiter);
        match outcome {
            RequestOutcome::Hit(state) => {
                gloo::console::log!(format!("Cache hit for {key}"));
                Some(state)
            }
            RequestOutcome::Joined => None,
            RequestOutcome::Issue => {
                gloo::console::log!(format!("Fetching {key}"));
                let cache = self.cache.clone();
                let http = self.http.clone();
                let key = key.clone();
                spawn_local(async move {
                    let result = http.fetch_filtered(&key.dataset_id, &key.filter).await;
                    if let Err(e) = &result {
                        gloo::console::warn!(format!("Request for {key} failed: {e}"));
                    }
                    let (waiters, state) = cache.borrow_mut().settle(&key, result);
                    for waiter in waiters {
                        waiter(state.clone());
                    }
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::SeriesPoint;
    use std::cell::Cell;

    fn key(id: &str) -> QueryKey {
        QueryKey::new(id, YearFilter::new(2023, 2025))
    }

    fn dataset() -> FilteredDataset {
        FilteredDataset {
            data: vec![SeriesPoint::new(2023, [("coal", 5.0)])],
            metadata: None,
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<FetchState>>>, impl Fn() -> Waiter) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let make = move || {
            let sink = sink.clone();
            Box::new(move |state: FetchState| sink.borrow_mut().push(state)) as Waiter
        };
        (seen, make)
    }

    #[test]
    fn test_first_request_issues_second_joins() {
        let mut cache = QueryCache::new();
        let (seen, waiter) = recorder();

        assert_eq!(cache.request(&key("a"), waiter()), RequestOutcome::Issue);
        assert_eq!(cache.request(&key("a"), waiter()), RequestOutcome::Joined);
        assert!(cache.is_pending(&key("a")));

        let (waiters, state) = cache.settle(&key("a"), Ok(dataset()));
        for w in waiters {
            w(state.clone());
        }
        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow().iter().all(|s| s.data().is_some()));
    }

    #[test]
    fn test_settled_success_is_a_hit() {
        let mut cache = QueryCache::new();
        let (_, waiter) = recorder();

        cache.request(&key("a"), waiter());
        let _ = cache.settle(&key("a"), Ok(dataset()));

        match cache.request(&key("a"), waiter()) {
            RequestOutcome::Hit(FetchState::Loaded(d)) => assert_eq!(*d, dataset()),
            other => panic!("expected hit, got {other:?}"),
        }
        assert!(cache.cached(&key("a")).is_some());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache = QueryCache::new();
        let (seen, waiter) = recorder();

        cache.request(&key("a"), waiter());
        let (waiters, state) =
            cache.settle(&key("a"), Err(AppError::Network("Bad Gateway".to_string())));
        for w in waiters {
            w(state.clone());
        }

        assert_eq!(
            seen.borrow()[0],
            FetchState::Error("Network error: Bad Gateway".to_string())
        );
        assert_eq!(cache.request(&key("a"), waiter()), RequestOutcome::Issue);
    }

    #[test]
    fn test_filters_are_part_of_the_key() {
        let mut cache = QueryCache::new();
        let (_, waiter) = recorder();
        let wide = QueryKey::new("a", YearFilter::new(2023, 2050));

        cache.request(&key("a"), waiter());
        assert_eq!(cache.request(&wide, waiter()), RequestOutcome::Issue);
        assert_eq!(cache.request(&key("b"), waiter()), RequestOutcome::Issue);
    }

    #[test]
    fn test_guard_discards_stale_results() {
        let guard = KeyGuard::new();
        let applied = Rc::new(Cell::new(0));

        guard.track(Some(key("a")));
        let counter = applied.clone();
        let stale = guard.guard(key("a"), move |_| counter.set(counter.get() + 1));

        guard.track(Some(key("b")));
        stale(FetchState::Loading);
        assert_eq!(applied.get(), 0);

        let counter = applied.clone();
        let fresh = guard.guard(key("b"), move |_| counter.set(counter.get() + 1));
        fresh(FetchState::Loading);
        assert_eq!(applied.get(), 1);

        guard.track(None);
        assert!(!guard.is_current(&key("b")));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(key("idn").to_string(), "idn [2023-2025]");
    }
}
