// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://www.thebluealliance.com/api/v3";
// lowercase: http's from_static rejects uppercase header names
pub const AUTH_HEADER: &str = "x-tba-auth-key";
pub const AUTH_ENV: &str = "TBA_AUTH_KEY";
pub const HTTP_TIMEOUT_SECS: u64 = 20;

// Seasons. FRC first ran in 1992; bump CURRENT_SEASON once a new
// season's awards are on the books.
pub const FIRST_SEASON: u16 = 1992;
pub const CURRENT_SEASON: u16 = 2026;

// Output
pub const DEFAULT_OUT_FILE: &str = "team_awards.csv";
pub const OUTPUT_HEADER: [&str; 4] = ["team", "award_name", "year", "event"];

// Report
pub const DEFAULT_TOP_N: usize = 30;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
