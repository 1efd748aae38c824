use crate::models::fetch::MultiDatasetState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: MultiDatasetState,
}

/// Loading or failure panel for the datasets on screen. Renders nothing once all are loaded.
///
/// Any failed slot replaces the whole view; a successful sibling is not shown on its own.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let state = &props.state;

    if state.is_error {
        let message = state
            .error
            .clone()
            .unwrap_or_else(|| "Unknown error occurred".to_string());
        html! {
            <div class="status error">
                <p class="status-title">{"Error loading data"}</p>
                <p class="status-message">{message}</p>
                <p class="status-hint">{"Something went wrong. Please try again later."}</p>
            </div>
        }
    } else if state.is_loading {
        html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading generation data..."}</p>
            </div>
        }
    } else {
        html! {}
    }
}
