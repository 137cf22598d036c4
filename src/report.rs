// src/report.rs

// Offline frequency report over the persisted award rows. Pure read
// pass; never touches the network or mutates the file.

use std::{collections::HashMap, error::Error, fs};

use crate::config::consts::OUTPUT_HEADER;
use crate::config::options::ReportOptions;
use crate::csv;

/// Count rows whose award name contains `filter` (case-insensitive),
/// one increment per matching row. Teams come back in the order they
/// were first encountered.
pub fn tally<'a, I>(rows: I, filter: &str) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let needle = filter.to_lowercase();
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (team, award) in rows {
        if !award.to_lowercase().contains(&needle) {
            continue;
        }
        if !counts.contains_key(team) {
            order.push(s!(team));
        }
        *counts.entry(s!(team)).or_insert(0) += 1;
    }

    order.into_iter().map(|t| { let n = counts[&t]; (t, n) }).collect()
}

/// Top `n` by descending count. The sort is stable, so ties keep their
/// tally (first-encountered) order.
pub fn top(mut tallies: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies.truncate(n);
    tallies
}

/// Read the output file, rank teams by matching award rows, print
/// `{team}: {count}` lines to stdout.
pub fn run(opts: &ReportOptions) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&opts.input)?;
    let rows = csv::parse_rows(&text);

    let mut iter = rows.iter();
    let header = iter.next().ok_or("Output file is empty: nothing to report")?;
    let team_col = column(header, OUTPUT_HEADER[0])?;
    let award_col = column(header, OUTPUT_HEADER[1])?;

    let mut pairs = Vec::with_capacity(rows.len().saturating_sub(1));
    for row in iter {
        let team = row.get(team_col).ok_or("Malformed row: missing team column")?;
        let award = row.get(award_col).ok_or("Malformed row: missing award_name column")?;
        pairs.push((team.as_str(), award.as_str()));
    }

    for (team, count) in top(tally(pairs, &opts.search), opts.top_n) {
        println!("{team}: {count}");
    }
    Ok(())
}

fn column(header: &[String], name: &str) -> Result<usize, Box<dyn Error>> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| format!("Output file header is missing {name:?} column").into())
}
