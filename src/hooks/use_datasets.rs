use yew::prelude::*;

use super::use_dataset::use_filtered_dataset;
use crate::models::{dataset::YearFilter, fetch::MultiDatasetState};

/// Fetches the primary dataset and, when selected, the comparison dataset.
///
/// Both slots are always occupied by a hook call; an absent comparison id
/// leaves its slot inert and out of the aggregate.
#[hook]
pub fn use_datasets(
    primary_id: AttrValue,
    comparison_id: Option<AttrValue>,
    filter: YearFilter,
) -> MultiDatasetState {
    let primary = use_filtered_dataset(Some(primary_id.clone()), filter.clone());
    let comparison = use_filtered_dataset(comparison_id.clone(), filter);

    MultiDatasetState::aggregate([
        (Some(primary_id.as_str()), primary),
        (comparison_id.as_deref(), comparison),
    ])
}
