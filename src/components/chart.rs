use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine},
    renderer::WasmRenderer,
    series::Bar,
};
use std::collections::HashSet;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::tooltip::ChartTooltip;
use crate::config::Config;
use crate::hooks::use_chart_sync::ChartView;
use crate::models::{
    dataset::FilteredDataset,
    technology::{TECHNOLOGIES, Technology},
    tooltip::build_tooltip,
};
use crate::utils::debounce::debounced_resize_listener;

/// Plot area insets in pixels. Pointer positions are mapped to bars with the same numbers.
const GRID_LEFT_PX: i32 = 64;
const GRID_RIGHT_PX: i32 = 16;
const GRID_TOP_PX: i32 = 16;
const GRID_BOTTOM_PX: i32 = 40;
const STACK_ID: &str = "generation";

#[derive(Properties, PartialEq)]
pub struct StackedBarChartProps {
    /// DOM id of the element the chart is drawn into; unique per chart
    pub chart_id: AttrValue,
    pub dataset: Rc<FilteredDataset>,
    /// Dataset whose figures are shown alongside in the tooltip
    #[prop_or_default]
    pub comparison: Option<Rc<FilteredDataset>>,
    #[prop_or_default]
    pub comparison_name: Option<AttrValue>,
    #[prop_or(TECHNOLOGIES)]
    pub technologies: &'static [Technology],
    pub sync: ChartView,
}

#[function_component(StackedBarChart)]
pub fn stacked_bar_chart(props: &StackedBarChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id.clone();

        use_effect_with(
            (
                props.dataset.clone(),
                props.sync.hidden.clone(),
                props.technologies,
                container_ref,
            ),
            move |(dataset, hidden, technologies, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let chart = build_chart(dataset, technologies, hidden);
                    render_chart(&container, &chart_id, &chart);

                    debounced_resize_listener(
                        move || render_chart(&container, &chart_id, &chart),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    let onmousemove = {
        let container_ref = container_ref.clone();
        let set_hover = props.sync.set_hover.clone();
        let len = props.dataset.data.len();

        Callback::from(move |e: MouseEvent| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                let rect = container.get_bounding_client_rect();
                let offset_x = f64::from(e.client_x()) - rect.left();
                set_hover.emit(hover_index_at(offset_x, rect.width(), len));
            }
        })
    };

    let onmouseleave = {
        let set_hover = props.sync.set_hover.clone();
        Callback::from(move |_: MouseEvent| set_hover.emit(None))
    };

    let tooltip = props.sync.hover_index.and_then(|index| {
        build_tooltip(
            &props.dataset,
            index,
            props.technologies,
            &props.sync.hidden,
            props.comparison.as_deref(),
        )
        .map(|tooltip| (index, tooltip))
    });

    html! {
        <div
            class="chart-container"
            ref={container_ref}
            {onmousemove}
            {onmouseleave}
        >
            <div id={props.chart_id.clone()} class="chart-canvas" />
            if let Some((index, tooltip)) = tooltip {
                <ChartTooltip
                    {tooltip}
                    comparison_name={props.comparison_name.clone()}
                    left={tooltip_left(index, props.dataset.data.len())}
                />
            }
        </div>
    }
}

/// Maps a pointer x offset within the chart container to the bar under it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hover_index_at(offset_x: f64, width: f64, len: usize) -> Option<usize> {
    let plot_width = width - f64::from(GRID_LEFT_PX + GRID_RIGHT_PX);
    if len == 0 || plot_width <= 0.0 {
        return None;
    }

    let position = offset_x - f64::from(GRID_LEFT_PX);
    if !(0.0..plot_width).contains(&position) {
        return None;
    }

    let index = (position / plot_width * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

/// CSS `left` placing the tooltip over the centre of bar `index`.
fn tooltip_left(index: usize, len: usize) -> AttrValue {
    let fraction = (index as f64 + 0.5) / len.max(1) as f64;
    format!(
        "calc({GRID_LEFT_PX}px + (100% - {}px) * {fraction:.4})",
        GRID_LEFT_PX + GRID_RIGHT_PX
    )
    .into()
}

/// Values of one technology per bar. Hidden technologies stay in the stack as zeros.
pub fn series_values(dataset: &FilteredDataset, key: &str, hidden: &HashSet<String>) -> Vec<f64> {
    if hidden.contains(key) {
        return vec![0.0; dataset.data.len()];
    }
    dataset.data.iter().map(|p| p.value(key)).collect()
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(format!("Render error for {chart_id}: {e:?}"));
    }
}

fn build_chart(
    dataset: &FilteredDataset,
    technologies: &[Technology],
    hidden: &HashSet<String>,
) -> CharmingChart {
    let axis_color = "#6b7280";
    let grid_color = "#e5e7eb";

    let chart = CharmingChart::new()
        // No ECharts tooltip; hover details come from the shared overlay.
        .legend(Legend::new().show(false))
        .grid(
            Grid::new()
                .left(GRID_LEFT_PX)
                .right(GRID_RIGHT_PX)
                .top(GRID_TOP_PX)
                .bottom(GRID_BOTTOM_PX),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(dataset.x_labels())
                .axis_label(AxisLabel::new().color(axis_color).interval(2)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(Config::UNIT_LABEL)
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    technologies.iter().fold(chart, |chart, technology| {
        chart.series(
            Bar::new()
                .name(technology.label)
                .stack(STACK_ID)
                .item_style(ItemStyle::new().color(technology.color))
                .data(series_values(dataset, technology.key, hidden)),
        )
    })
}
