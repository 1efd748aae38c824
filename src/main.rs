use yew::prelude::*;

use generation_explorer::components::{
    ComparisonSelector, DatasetCard, SharedLegend, StackedBarChart, Status, YearRangePicker,
};
use generation_explorer::hooks::{use_chart_sync::use_chart_sync, use_datasets::use_datasets};
use generation_explorer::models::{
    dataset::{DatasetDescriptor, YearFilter},
    registry::DatasetRegistry,
};
use generation_explorer::services::cache::QueryClient;

#[function_component(App)]
fn app() -> Html {
    let client = use_memo((), |_| QueryClient::new());
    let registry = DatasetRegistry::default();

    let setup = match (&*client, registry.default_dataset()) {
        (Ok(client), Ok(primary)) => Ok((client.clone(), *primary)),
        (Err(e), _) => Err(e.to_string()),
        (_, Err(e)) => Err(e.to_string()),
    };

    let content = match setup {
        Ok((client, primary)) => html! {
            <ContextProvider<QueryClient> context={client}>
                <Dashboard {registry} {primary} />
            </ContextProvider<QueryClient>>
        },
        Err(message) => {
            gloo::console::error!(format!("Startup failed: {message}"));
            html! {
                <div class="status error">
                    <p class="status-title">{"Error loading data"}</p>
                    <p class="status-message">{message}</p>
                </div>
            }
        }
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Electricity Generation Explorer"}</h1>
            </header>

            <main class="app-main">
                {content}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    registry: DatasetRegistry,
    primary: DatasetDescriptor,
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let comparison = use_state(|| None::<AttrValue>);
    let filter = use_state(YearFilter::default);
    let sync = use_chart_sync();

    let primary_id = AttrValue::from(props.primary.id);
    let datasets = use_datasets(primary_id.clone(), (*comparison).clone(), (*filter).clone());

    let on_comparison_change = {
        let comparison = comparison.clone();
        Callback::from(move |selection: Option<AttrValue>| comparison.set(selection))
    };

    let on_start_change = {
        let filter = filter.clone();
        Callback::from(move |year: i32| filter.set(filter.with_start(year)))
    };

    let on_end_change = {
        let filter = filter.clone();
        Callback::from(move |year: i32| filter.set(filter.with_end(year)))
    };

    let comparison_name = (*comparison)
        .as_ref()
        .and_then(|id| props.registry.dataset_by_id(id))
        .map(|d| AttrValue::from(d.name));
    let primary_result = datasets.result(&primary_id);
    let comparison_result = (*comparison).as_ref().and_then(|id| datasets.result(id));

    let primary_data = primary_result.and_then(|r| r.state.data().cloned());
    let comparison_data = comparison_result.and_then(|r| r.state.data().cloned());
    let show_charts = datasets.is_ready() && !datasets.is_error;

    html! {
        <>
            <section class="controls-section">
                <YearRangePicker
                    start_year={filter.start_year}
                    end_year={filter.end_year}
                    {on_start_change}
                    {on_end_change}
                />
                <ComparisonSelector
                    registry={props.registry}
                    primary_id={primary_id.clone()}
                    selected={(*comparison).clone()}
                    on_change={on_comparison_change}
                />
            </section>

            <Status state={datasets.clone()} />

            if show_charts {
                <section class={classes!("charts-grid", comparison_data.is_some().then_some("charts-grid-compare"))}>
                    if let Some(data) = primary_data.clone() {
                        <DatasetCard
                            title={props.primary.name}
                            metadata={primary_result.and_then(|r| r.metadata())}
                        >
                            <StackedBarChart
                                chart_id="chart-primary"
                                dataset={data}
                                comparison={comparison_data.clone()}
                                comparison_name={comparison_name.clone()}
                                sync={sync.chart_view()}
                            />
                        </DatasetCard>
                    }
                    if let Some(data) = comparison_data.clone() {
                        <DatasetCard
                            title={comparison_name.clone().unwrap_or_else(|| AttrValue::from("Comparison"))}
                            metadata={comparison_result.and_then(|r| r.metadata())}
                        >
                            <StackedBarChart
                                chart_id="chart-comparison"
                                dataset={data}
                                comparison={primary_data.clone()}
                                comparison_name={AttrValue::from(props.primary.name)}
                                sync={sync.chart_view()}
                            />
                        </DatasetCard>
                    }
                </section>

                <SharedLegend sync={sync.clone()} />
            }
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
