// src/store.rs

// The output CSV, from both sides: the resume ledger on the read side,
// append-and-sync on the write side.

use std::{
    collections::HashSet,
    error::Error,
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::config::consts::OUTPUT_HEADER;
use crate::csv;
use crate::specs::awards::AwardRecord;

pub struct AwardsStore {
    path: PathBuf,
}

impl AwardsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Distinct team keys already present in the output file. A team in
    /// this set is assumed fully processed for all years. Missing file
    /// means nothing is processed yet. A malformed row is fatal here:
    /// fetching must not start over a ledger we can't trust.
    pub fn processed_teams(&self) -> Result<HashSet<String>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let text = fs::read_to_string(&self.path)?;
        let mut seen = HashSet::new();
        for row in csv::parse_rows(&text).into_iter().skip(1) {
            let rec = AwardRecord::from_row(&row)?;
            seen.insert(rec.team_key);
        }
        Ok(seen)
    }

    /// Open for appending. Writes the header row iff the file is empty
    /// at open time, and makes it durable before any team data goes in.
    pub fn appender(&self) -> Result<AwardsAppender, Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let empty = file.metadata()?.len() == 0;

        let mut appender = AwardsAppender { out: BufWriter::new(file) };
        if empty {
            let header: Vec<String> = OUTPUT_HEADER.iter().map(|h| s!(*h)).collect();
            csv::write_row(&mut appender.out, &header)?;
            appender.sync()?;
        }
        Ok(appender)
    }
}

pub struct AwardsAppender {
    out: BufWriter<File>,
}

impl AwardsAppender {
    /// Append one completed team's rows (zero or more) and make them
    /// durable before returning. An interruption before this returns
    /// leaves the team out of the ledger, so the next run retries it
    /// from the start of the year range.
    pub fn append_team(&mut self, records: &[AwardRecord]) -> Result<(), Box<dyn Error>> {
        for rec in records {
            csv::write_row(&mut self.out, &rec.to_row())?;
        }
        self.sync()
    }

    fn sync(&mut self) -> Result<(), Box<dyn Error>> {
        self.out.flush()?;
        self.out.get_ref().sync_data()?;
        Ok(())
    }
}
