pub mod use_chart_sync;
pub mod use_dataset;
pub mod use_datasets;
