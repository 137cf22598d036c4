// src/specs/awards.rs
//! Endpoint spec for per-team award history.
//!
//! `GET team/{team_key}/awards/{year}` returns the awards a team won
//! during one season. History is assembled year by year over the
//! configured range; a failed year is logged and treated as "no awards
//! that year" so the remaining years still run. The persisted format
//! cannot tell the two apart; the log is the only place the
//! difference shows up.

use std::{error::Error, ops::RangeInclusive};

use serde::Deserialize;

use crate::core::net::TbaClient;

/// Award object as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct Award {
    pub name: String,
    pub event_key: String,
}

/// One persisted output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    pub team_key: String,
    pub award_name: String,
    pub year: u16,
    pub event_key: String,
}

impl AwardRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.team_key.clone(),
            self.award_name.clone(),
            self.year.to_string(),
            self.event_key.clone(),
        ]
    }

    /// Strict inverse of `to_row`. Short rows and unparseable years are
    /// malformed; the resume ledger treats that as fatal.
    pub fn from_row(row: &[String]) -> Result<Self, Box<dyn Error>> {
        if row.len() < 4 {
            return Err(format!("Malformed row: expected 4 columns, got {}", row.len()).into());
        }
        let year: u16 = row[2]
            .parse()
            .map_err(|_| format!("Malformed row: bad year {:?}", row[2]))?;
        Ok(Self {
            team_key: row[0].clone(),
            award_name: row[1].clone(),
            year,
            event_key: row[3].clone(),
        })
    }
}

/// Source of per-team per-year award lists.
pub trait AwardYears {
    fn awards(&self, team_key: &str, year: u16) -> Result<Vec<Award>, Box<dyn Error>>;
}

impl AwardYears for TbaClient {
    fn awards(&self, team_key: &str, year: u16) -> Result<Vec<Award>, Box<dyn Error>> {
        self.get_array(&format!("team/{team_key}/awards/{year}"))
    }
}

/// Fetch one team's full award history over `seasons`, one request per
/// year in increasing order. No dedup, within or across years.
pub fn fetch_team(
    src: &impl AwardYears,
    team_key: &str,
    seasons: RangeInclusive<u16>,
) -> Vec<AwardRecord> {
    let mut records = Vec::new();

    for year in seasons {
        let awards = match src.awards(team_key, year) {
            Ok(v) => v,
            Err(e) => {
                loge!("{team_key} awards for {year} failed: {e}");
                Vec::new()
            }
        };

        for award in awards {
            logd!("{team_key}: '{}' in {year} at {}", award.name, award.event_key);
            records.push(AwardRecord {
                team_key: s!(team_key),
                award_name: award.name,
                year,
                event_key: award.event_key,
            });
        }
    }

    records
}
