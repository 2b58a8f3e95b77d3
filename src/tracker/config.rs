pub mod api {
    use std::time::Duration;
    pub const BASE_URL: &str = "https://codeforces.com/api";
    pub const RETRY_COUNT: u32 = 3;
    pub const RETRY_BACKOFF: Duration = Duration::from_millis(500);
    pub const RATE_LIMIT_WAIT: Duration = Duration::from_secs(2);
}
pub mod schedule {
    use std::time::Duration;
    pub const MAX_CONCURRENT: usize = 3;
    pub const COOLDOWN: Duration = Duration::from_millis(1200);
}
pub mod view {
    pub const STATS_PAGE_SIZE: usize = 20;
    pub const STANDINGS_PAGE_SIZE: usize = 25;
}
