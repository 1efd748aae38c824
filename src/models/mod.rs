pub mod chart_sync;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod registry;
pub mod technology;
pub mod tooltip;
