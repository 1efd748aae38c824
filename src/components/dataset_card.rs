use crate::models::dataset::DatasetMetadata;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatasetCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub metadata: Option<DatasetMetadata>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DatasetCard)]
pub fn dataset_card(props: &DatasetCardProps) -> Html {
    html! {
        <div class="dataset-card">
            <div class="card-header">
                <h2>{props.title.clone()}</h2>
                if let Some(metadata) = props.metadata {
                    <p class="card-description">
                        {format!(
                            "Electricity generation by technology from {} to {}",
                            metadata.first_year(),
                            metadata.last_year()
                        )}
                    </p>
                }
            </div>
            <div class="card-content">
                {props.children.clone()}
            </div>
            if let Some(metadata) = props.metadata {
                <div class="card-footer">
                    {format!(
                        "Data shows projected energy generation mix evolution {}-{}",
                        metadata.first_year(),
                        metadata.last_year()
                    )}
                </div>
            }
        </div>
    }
}
