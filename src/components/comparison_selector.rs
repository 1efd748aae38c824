use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::registry::DatasetRegistry;

#[derive(Properties, PartialEq)]
pub struct ComparisonSelectorProps {
    pub registry: DatasetRegistry,
    pub primary_id: AttrValue,
    pub selected: Option<AttrValue>,
    pub on_change: Callback<Option<AttrValue>>,
}

/// Comparison dataset dropdown; the empty option clears the comparison.
#[function_component(ComparisonSelector)]
pub fn comparison_selector(props: &ComparisonSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        let registry = props.registry;
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            let selection = registry
                .dataset_by_id(&value)
                .map(|d| AttrValue::from(d.id));
            callback.emit(selection);
        })
    };

    html! {
        <select
            class="comparison-selector"
            onchange={on_change}
            aria-label="Select comparison dataset"
            title="Select comparison dataset"
        >
            <option value="" selected={props.selected.is_none()}>{"No comparison"}</option>
            {
                props.registry.available_comparisons(&props.primary_id).into_iter().map(|d| {
                    let selected = props.selected.as_deref() == Some(d.id);
                    html! {
                        <option value={d.id} {selected}>{d.name}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
