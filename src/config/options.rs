// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::PathBuf;

use super::consts::*;

/// Options for the fetch-and-resume pipeline.
#[derive(Clone, Debug)]
pub struct ScrapeOptions {
    pub out: PathBuf,                  // output CSV, also the resume ledger
    pub first_page: u32,               // first team-listing page
    pub seasons: RangeInclusive<u16>,  // inclusive year range per team
    pub workers: usize,                // fetch threads
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_FILE),
            first_page: 0,
            seasons: FIRST_SEASON..=CURRENT_SEASON,
            workers: WORKERS,
        }
    }
}

/// Options for the offline report pass.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub search: String, // case-insensitive substring on award name
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_OUT_FILE),
            search: s!(),
            top_n: DEFAULT_TOP_N,
        }
    }
}
