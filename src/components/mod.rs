pub mod chart;
pub mod comparison_selector;
pub mod dataset_card;
pub mod legend;
pub mod status;
pub mod tooltip;
pub mod year_range_picker;

pub use chart::StackedBarChart;
pub use comparison_selector::ComparisonSelector;
pub use dataset_card::DatasetCard;
pub use legend::SharedLegend;
pub use status::Status;
pub use year_range_picker::YearRangePicker;
