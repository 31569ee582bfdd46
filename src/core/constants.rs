// Frame loop
pub const FRAME_POLL_MS: u64 = 50;

// Loading splash
pub const LOADER_PROGRESS_TICK_MS: u64 = 50;
pub const LOADER_STATUS_INTERVAL_MS: u64 = 1000;
pub const LOADER_WINDOW_MS: u64 = 4000;
pub const PROGRESS_TARGET: f64 = 100.0;
pub const PROGRESS_DIVISOR: f64 = 15.0;
pub const PROGRESS_MIN_STEP: f64 = 1.0;
pub const PROGRESS_SNAP_DISTANCE: f64 = 0.1;
pub const LOADER_PHRASES: [&str; 4] = [
    "INITIALIZING NEURAL NET",
    "VERIFYING PROTOCOLS",
    "ESTABLISHING SECURE UPLINK",
    "WELCOME TO LABELX",
];

// Counters: cubic-bezier(0.16, 1, 0.3, 1)
pub const COUNTER_DURATION_MS: u64 = 2500;
pub const COUNTER_EASE: (f64, f64, f64, f64) = (0.16, 1.0, 0.3, 1.0);

// Live metrics
pub const HERO_METRICS_TICK_MS: u64 = 2500;
pub const HERO_PULSE_HOLD_MS: u64 = 2000;
pub const HERO_CONNECTION_INTERVAL_MS: u64 = 1500;
pub const HERO_CONNECTION_LIFETIME_MS: u64 = 3000;
pub const HERO_CONNECTIONS_KEPT: usize = 4;
pub const AGENT_TICKER_TICK_MS: u64 = 2000;

// Scrolling
pub const SCROLL_DURATION_MS: u64 = 1200;
pub const SCROLL_LINE_ROWS: f64 = 3.0;
pub const VIEWPORT_MARGIN_ROWS: u16 = 1;
