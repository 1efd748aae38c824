use yew::prelude::*;

use crate::models::{dataset::YearFilter, fetch::FetchState};
use crate::services::cache::{KeyGuard, QueryClient, QueryKey};

/// A fetch state remembered together with the key it was produced for.
#[derive(Clone, PartialEq, Debug)]
struct KeyedState {
    key: Option<QueryKey>,
    state: FetchState,
}

impl KeyedState {
    /// State right after asking the cache for `key`. Anything but a cache hit
    /// is loading until the waiter fires, even if `key` failed before.
    fn requested(key: QueryKey, immediate: Option<FetchState>) -> Self {
        Self {
            key: Some(key),
            state: immediate.unwrap_or(FetchState::Loading),
        }
    }

    /// State to expose for `wanted`; anything recorded for another key reads as loading.
    fn resolve(&self, wanted: Option<&QueryKey>) -> FetchState {
        match wanted {
            None => FetchState::Idle,
            Some(key) if self.key.as_ref() == Some(key) => self.state.clone(),
            Some(_) => FetchState::Loading,
        }
    }
}

/// Fetches one dataset for a year range through the shared `QueryClient`.
///
/// Passing `None` keeps the hook inert (`FetchState::Idle`) without skipping
/// the hook call.
#[hook]
pub fn use_filtered_dataset(dataset_id: Option<AttrValue>, filter: YearFilter) -> FetchState {
    let client = use_context::<QueryClient>();
    let guard = use_memo((), |_| KeyGuard::new());
    let state = use_state(|| KeyedState {
        key: None,
        state: FetchState::Idle,
    });

    let key = dataset_id.map(|id| QueryKey::new(id.as_str(), filter));

    {
        let state = state.clone();
        let guard = (*guard).clone();

        use_effect_with(key.clone(), move |key| {
            guard.track(key.clone());

            if let Some(key) = key.clone() {
                match client {
                    Some(client) => {
                        let setter = state.setter();
                        let tag = key.clone();
                        let waiter = guard.guard(key.clone(), move |result| {
                            setter.set(KeyedState {
                                key: Some(tag),
                                state: result,
                            });
                        });

                        let immediate = client.fetch_filtered(&key, waiter);
                        state.set(KeyedState::requested(key, immediate));
                    }
                    None => {
                        gloo::console::error!("use_filtered_dataset called outside a QueryClient provider");
                        state.set(KeyedState {
                            key: Some(key),
                            state: FetchState::Error("Query client unavailable".to_string()),
                        });
                    }
                }
            }

            move || guard.track(None)
        });
    }

    state.resolve(key.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{dataset::FilteredDataset, error::AppError};
    use crate::services::cache::{QueryCache, RequestOutcome};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(id: &str, start: i32) -> QueryKey {
        QueryKey::new(id, YearFilter::new(start, 2030))
    }

    #[test]
    fn test_inert_without_key() {
        let stored = KeyedState {
            key: Some(key("a", 2023)),
            state: FetchState::Error("old".to_string()),
        };
        assert_eq!(stored.resolve(None), FetchState::Idle);
    }

    #[test]
    fn test_result_for_other_key_reads_as_loading() {
        let stored = KeyedState {
            key: Some(key("a", 2023)),
            state: FetchState::Loaded(Rc::new(FilteredDataset {
                data: vec![],
                metadata: None,
            })),
        };

        assert!(stored.resolve(Some(&key("a", 2023))).data().is_some());
        assert_eq!(stored.resolve(Some(&key("a", 2025))), FetchState::Loading);
        assert_eq!(stored.resolve(Some(&key("b", 2023))), FetchState::Loading);
    }

    /// Drives one slot the way the effect does: track the key, ask the cache,
    /// record the immediate state, and let the guarded waiter write the result.
    struct Slot {
        cache: QueryCache,
        guard: KeyGuard,
        stored: Rc<RefCell<KeyedState>>,
    }

    impl Slot {
        fn new() -> Self {
            Self {
                cache: QueryCache::new(),
                guard: KeyGuard::new(),
                stored: Rc::new(RefCell::new(KeyedState {
                    key: None,
                    state: FetchState::Idle,
                })),
            }
        }

        fn select(&mut self, key: &QueryKey) -> RequestOutcome {
            self.guard.track(Some(key.clone()));
            let sink = self.stored.clone();
            let tag = key.clone();
            let waiter = self.guard.guard(key.clone(), move |state: FetchState| {
                *sink.borrow_mut() = KeyedState {
                    key: Some(tag),
                    state,
                };
            });

            let outcome = self.cache.request(key, waiter);
            let immediate = match &outcome {
                RequestOutcome::Hit(state) => Some(state.clone()),
                _ => None,
            };
            *self.stored.borrow_mut() = KeyedState::requested(key.clone(), immediate);
            outcome
        }

        fn clear(&self) {
            self.guard.track(None);
        }

        fn settle(&mut self, key: &QueryKey, result: Result<FilteredDataset, AppError>) {
            let (waiters, state) = self.cache.settle(key, result);
            for waiter in waiters {
                waiter(state.clone());
            }
        }

        fn observed(&self, wanted: Option<&QueryKey>) -> FetchState {
            self.stored.borrow().resolve(wanted)
        }
    }

    fn empty() -> FilteredDataset {
        FilteredDataset {
            data: vec![],
            metadata: None,
        }
    }

    #[test]
    fn test_cache_hit_is_applied_immediately() {
        let loaded = FetchState::Loaded(Rc::new(empty()));
        let stored = KeyedState::requested(key("a", 2023), Some(loaded.clone()));
        assert_eq!(stored.resolve(Some(&key("a", 2023))), loaded);

        let stored = KeyedState::requested(key("a", 2023), None);
        assert_eq!(stored.resolve(Some(&key("a", 2023))), FetchState::Loading);
    }

    #[test]
    fn test_reselecting_failed_key_shows_loading_until_retry_settles() {
        let mut slot = Slot::new();
        let a = key("a", 2023);

        assert_eq!(slot.select(&a), RequestOutcome::Issue);
        assert_eq!(slot.observed(Some(&a)), FetchState::Loading);
        slot.settle(&a, Err(AppError::Network("Bad Gateway".to_string())));
        assert!(slot.observed(Some(&a)).is_error());

        // Comparison cleared, then picked again
        slot.clear();
        assert_eq!(slot.observed(None), FetchState::Idle);
        assert_eq!(slot.select(&a), RequestOutcome::Issue);
        assert_eq!(slot.observed(Some(&a)), FetchState::Loading);

        slot.settle(&a, Ok(empty()));
        assert!(slot.observed(Some(&a)).data().is_some());
    }

    #[test]
    fn test_returning_to_failed_filter_while_other_is_in_flight() {
        let mut slot = Slot::new();
        let first = key("a", 2023);
        let second = key("a", 2025);

        slot.select(&first);
        slot.settle(&first, Err(AppError::Network("Bad Gateway".to_string())));
        assert!(slot.observed(Some(&first)).is_error());

        slot.select(&second);
        assert_eq!(slot.observed(Some(&second)), FetchState::Loading);

        // Back to the failed range before the other one answers
        assert_eq!(slot.select(&first), RequestOutcome::Issue);
        assert_eq!(slot.observed(Some(&first)), FetchState::Loading);

        // The abandoned range settles but is no longer wanted
        slot.settle(&second, Ok(empty()));
        assert_eq!(slot.observed(Some(&first)), FetchState::Loading);

        slot.settle(&first, Ok(empty()));
        assert!(slot.observed(Some(&first)).data().is_some());
    }
}
