use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::dataset::{end_options, start_options};

#[derive(Properties, PartialEq)]
pub struct YearRangePickerProps {
    pub start_year: i32,
    pub end_year: i32,
    pub on_start_change: Callback<i32>,
    pub on_end_change: Callback<i32>,
    #[prop_or(Config::MIN_YEAR)]
    pub min_year: i32,
    #[prop_or(Config::MAX_YEAR)]
    pub max_year: i32,
}

fn year_select(
    label: &'static str,
    years: Vec<i32>,
    current: i32,
    on_change: Callback<i32>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let target: HtmlSelectElement = e.target_unchecked_into();
        if let Ok(year) = target.value().parse::<i32>() {
            on_change.emit(year);
        }
    });

    html! {
        <select class="year-select" {onchange} aria-label={label}>
            {
                years.into_iter().map(|year| {
                    html! {
                        <option value={year.to_string()} selected={year == current}>{year}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}

/// Start and end year dropdowns. Each only offers years that keep start <= end.
#[function_component(YearRangePicker)]
pub fn year_range_picker(props: &YearRangePickerProps) -> Html {
    let starts = start_options(props.min_year, props.max_year, props.end_year);
    let ends = end_options(props.min_year, props.max_year, props.start_year);

    html! {
        <div class="year-range-picker">
            <label>{"Year Range:"}</label>
            {year_select("Start year", starts, props.start_year, props.on_start_change.clone())}
            <span class="year-range-separator">{"to"}</span>
            {year_select("End year", ends, props.end_year, props.on_end_change.clone())}
        </div>
    }
}
