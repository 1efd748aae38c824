use yew::prelude::*;

use crate::hooks::use_chart_sync::ChartSyncHandle;
use crate::models::technology::{TECHNOLOGIES, Technology};

#[derive(Properties, PartialEq)]
pub struct SharedLegendProps {
    pub sync: ChartSyncHandle,
    #[prop_or(TECHNOLOGIES)]
    pub technologies: &'static [Technology],
}

/// One legend for all charts; clicking an entry hides or shows that technology everywhere.
#[function_component(SharedLegend)]
pub fn shared_legend(props: &SharedLegendProps) -> Html {
    html! {
        <div class="shared-legend">
            {
                props.technologies.iter().map(|technology| {
                    let hidden = props.sync.is_hidden(technology.key);
                    let class = classes!("legend-item", hidden.then_some("legend-item-hidden"));
                    let swatch = format!("background-color: {};", technology.color);
                    let onclick = {
                        let toggle = props.sync.toggle.clone();
                        let key = technology.key;
                        Callback::from(move |_: MouseEvent| toggle.emit(AttrValue::from(key)))
                    };

                    html! {
                        <button
                            {class}
                            key={technology.key}
                            {onclick}
                            aria-pressed={(!hidden).to_string()}
                            title={format!("Show or hide {}", technology.label)}
                        >
                            <span class="legend-swatch" style={swatch} />
                            {technology.label}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
