// src/specs/teams.rs
//! Endpoint spec for the paginated team listing.
//!
//! `GET teams/{page}` returns one bounded batch of team objects; a page
//! past the end returns an empty array. The walk stops on the first
//! empty page, or on the first failed page: a transport error here
//! truncates the team universe for the run rather than aborting it.

use std::error::Error;

use serde::Deserialize;

use crate::core::net::TbaClient;

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub key: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl Team {
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.key)
    }
}

/// Source of team-listing pages. `TbaClient` is the live
/// implementation; tests substitute canned pages.
pub trait TeamPages {
    fn page(&self, page: u32) -> Result<Vec<Team>, Box<dyn Error>>;
}

impl TeamPages for TbaClient {
    fn page(&self, page: u32) -> Result<Vec<Team>, Box<dyn Error>> {
        self.get_array(&format!("teams/{page}"))
    }
}

/// Walk pages from `first_page` until an empty page or a failed
/// request. Every team comes back exactly once, in emission order.
pub fn enumerate(src: &impl TeamPages, first_page: u32) -> Vec<Team> {
    let mut teams = Vec::new();

    for page in first_page.. {
        match src.page(page) {
            Ok(batch) if batch.is_empty() => break,
            Ok(batch) => {
                logd!("Fetched {} teams from page {}", batch.len(), page);
                teams.extend(batch);
            }
            Err(e) => {
                loge!("Team page {page} failed: {e}");
                break;
            }
        }
    }

    teams
}

/// Count every team without keeping them around. Same walk and same
/// early-stop rules as `enumerate`.
pub fn count(src: &impl TeamPages, first_page: u32) -> usize {
    enumerate(src, first_page).len()
}
