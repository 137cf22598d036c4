// src/runner.rs
use std::{
    error::Error,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS},
    config::options::ScrapeOptions,
    core::net::TbaClient,
    progress::Progress,
    specs::awards::{self, AwardRecord, AwardYears},
    specs::teams::{self, Team, TeamPages},
    store::AwardsStore,
};

/// What a scrape run did.
pub struct RunSummary {
    pub teams_total: usize,
    pub teams_skipped: usize,
    pub teams_processed: usize,
    pub rows_written: usize,
}

/// Full pipeline against the live API.
pub fn scrape(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let client = TbaClient::new(&crate::config::auth_key()?)?;
    scrape_with(&client, opts, progress)
}

/// Count mode: walk the team pages and report only the total.
pub fn count_teams(first_page: u32) -> Result<usize, Box<dyn Error>> {
    let client = TbaClient::new(&crate::config::auth_key()?)?;
    Ok(teams::count(&client, first_page))
}

/// Pipeline core, generic over the endpoint seams so tests drive it
/// offline.
///
/// Enumerate teams, drop the ones the output file already records,
/// then fetch the rest on a small worker pool (years strictly
/// sequential within a team). The main thread stays the single
/// writer, appending and syncing each team as its results arrive.
pub fn scrape_with<S>(
    src: &S,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>>
where
    S: TeamPages + AwardYears + Sync,
{
    let store = AwardsStore::new(&opts.out);
    let processed = store.processed_teams()?;

    let all = teams::enumerate(src, opts.first_page);
    let teams_total = all.len();

    let mut pending: Vec<Team> = Vec::new();
    for team in all {
        if processed.contains(&team.key) {
            logd!("Skipping {} ({}), already processed", team.display_name(), team.key);
        } else {
            pending.push(team);
        }
    }
    let teams_skipped = teams_total - pending.len();

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{teams_total} teams listed, {teams_skipped} already on file"));
        p.begin(pending.len());
    }

    let mut appender = store.appender()?;
    let mut rows_written = 0usize;
    let mut teams_processed = 0usize;

    if !pending.is_empty() {
        let workers = opts.workers.clamp(1, pending.len());
        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<(usize, Vec<AwardRecord>)>();

        thread::scope(|scope| -> Result<(), Box<dyn Error>> {
            for _ in 0..workers {
                let tx = tx.clone();
                let next = &next;
                let pending = &pending;
                let seasons = opts.seasons.clone();
                scope.spawn(move || {
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        if i >= pending.len() {
                            break;
                        }
                        let records = awards::fetch_team(src, &pending[i].key, seasons.clone());
                        if tx.send((i, records)).is_err() {
                            break; // writer bailed; stop claiming work
                        }
                        let jitter = (i as u64) % JITTER_MS;
                        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                    }
                });
            }
            drop(tx); // main thread is sole receiver now

            // Teams land in completion order. The ledger is a set, so
            // row order across teams doesn't matter; the per-team
            // sync before the next write is what does.
            for (i, records) in rx {
                appender.append_team(&records)?;
                teams_processed += 1;
                rows_written += records.len();
                if let Some(p) = progress.as_deref_mut() {
                    let team = &pending[i];
                    p.team_done(&team.key, team.display_name(), records.len());
                }
            }
            Ok(())
        })?;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!(
        "Run complete: {teams_processed} teams fetched, {teams_skipped} skipped, {rows_written} rows"
    );

    Ok(RunSummary {
        teams_total,
        teams_skipped,
        teams_processed,
        rows_written,
    })
}
