/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the dataset API
    pub const API_BASE_URL: &'static str = "http://localhost:3001/api";

    /// Year range requested on first load
    pub const DEFAULT_START_YEAR: i32 = 2023;
    pub const DEFAULT_END_YEAR: i32 = 2025;

    /// Bounds offered by the year range picker
    pub const MIN_YEAR: i32 = 2023;
    pub const MAX_YEAR: i32 = 2050;

    /// Unit suffix for every figure shown in a tooltip
    pub const UNIT_LABEL: &'static str = "MW";

    /// Quiet period before charts redraw after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
