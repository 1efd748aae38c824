use yew::prelude::*;

use crate::models::tooltip::Tooltip;

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    pub tooltip: Tooltip,
    #[prop_or_default]
    pub comparison_name: Option<AttrValue>,
    /// CSS `left` of the tooltip within the chart container
    pub left: AttrValue,
}

/// Hover card: year and total, then one row per visible technology.
#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    let tooltip = &props.tooltip;
    let style = format!("left: {};", props.left);
    let comparison_label = props
        .comparison_name
        .clone()
        .unwrap_or_else(|| AttrValue::from("Comparison"));

    html! {
        <div class="chart-tooltip" {style}>
            <div class="tooltip-header">
                <span class="tooltip-year">{tooltip.x}</span>
                <span class="tooltip-total">{&tooltip.formatted_total}</span>
            </div>

            if let Some(figures) = &tooltip.comparison {
                <div class="tooltip-comparison">
                    <span class="tooltip-comparison-name">{comparison_label.clone()}</span>
                    <span class="tooltip-comparison-total">
                        {&figures.formatted_total}
                        <span class="tooltip-delta">{format!(" ({})", figures.formatted_delta)}</span>
                    </span>
                </div>
            }

            <div class="tooltip-rows">
                {
                    tooltip.rows.iter().map(|row| {
                        let swatch = format!("background-color: {};", row.color);
                        html! {
                            <div class="tooltip-row" key={row.key}>
                                <div class="tooltip-label">
                                    <span class="tooltip-swatch" style={swatch} />
                                    <span>{row.label}</span>
                                </div>
                                <span class="tooltip-value">
                                    {&row.formatted}
                                    if let Some(compared) = &row.comparison {
                                        <span class="tooltip-compared">{format!(" / {compared}")}</span>
                                    }
                                </span>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
