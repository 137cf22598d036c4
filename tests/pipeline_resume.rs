// tests/pipeline_resume.rs
//
// Drives the whole pipeline offline through the endpoint seams:
// header discipline, ledger-based skipping, and recovery after an
// interrupted run.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tba_scrape::config::options::ScrapeOptions;
use tba_scrape::runner::scrape_with;
use tba_scrape::specs::awards::{Award, AwardRecord, AwardYears};
use tba_scrape::specs::teams::{Team, TeamPages};
use tba_scrape::store::AwardsStore;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tba_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn team(key: &str, nickname: &str) -> Team {
    Team {
        key: key.to_string(),
        nickname: Some(nickname.to_string()),
    }
}

fn award(name: &str, event: &str) -> Award {
    Award {
        name: name.to_string(),
        event_key: event.to_string(),
    }
}

/// In-memory stand-in for the remote API, recording what was asked.
struct FakeApi {
    pages: Vec<Vec<Team>>,
    awards: HashMap<(String, u16), Vec<Award>>,
    page_calls: Mutex<u32>,
    award_calls: Mutex<Vec<String>>, // "{team}/{year}"
}

impl FakeApi {
    fn new(pages: Vec<Vec<Team>>) -> Self {
        Self {
            pages,
            awards: HashMap::new(),
            page_calls: Mutex::new(0),
            award_calls: Mutex::new(Vec::new()),
        }
    }

    fn with_awards(mut self, team: &str, year: u16, list: Vec<Award>) -> Self {
        self.awards.insert((team.to_string(), year), list);
        self
    }

    fn teams_fetched(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .award_calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.split('/').next().unwrap().to_string())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    fn reset_calls(&self) {
        *self.page_calls.lock().unwrap() = 0;
        self.award_calls.lock().unwrap().clear();
    }
}

impl TeamPages for FakeApi {
    fn page(&self, page: u32) -> Result<Vec<Team>, Box<dyn Error>> {
        *self.page_calls.lock().unwrap() += 1;
        Ok(self.pages.get(page as usize).cloned().unwrap_or_default())
    }
}

impl AwardYears for FakeApi {
    fn awards(&self, team_key: &str, year: u16) -> Result<Vec<Award>, Box<dyn Error>> {
        self.award_calls.lock().unwrap().push(format!("{team_key}/{year}"));
        Ok(self
            .awards
            .get(&(team_key.to_string(), year))
            .cloned()
            .unwrap_or_default())
    }
}

fn opts(out: PathBuf) -> ScrapeOptions {
    ScrapeOptions {
        out,
        first_page: 0,
        seasons: 2010..=2015,
        workers: 2,
    }
}

fn two_team_api() -> FakeApi {
    FakeApi::new(vec![
        vec![team("frcA", "Alphas"), team("frcB", "Betas")],
        vec![],
    ])
    .with_awards("frcA", 2010, vec![award("Regional Winner", "2010casj")])
    .with_awards("frcA", 2012, vec![
        award("Imagery Award", "2012casj"),
        award("Engineering Inspiration", "2012cada"),
    ])
    .with_awards("frcB", 2015, vec![award("Rookie All Star", "2015mndu")])
}

#[test]
fn full_run_writes_header_then_all_rows() {
    let dir = tmp_dir("full");
    let out = dir.join("team_awards.csv");

    let api = two_team_api();
    let summary = scrape_with(&api, &opts(out.clone()), None).unwrap();

    assert_eq!(summary.teams_total, 2);
    assert_eq!(summary.teams_skipped, 0);
    assert_eq!(summary.teams_processed, 2);
    assert_eq!(summary.rows_written, 4);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("team,award_name,year,event\n"));
    assert!(text.contains("frcA,Regional Winner,2010,2010casj"));
    assert!(text.contains("frcA,Imagery Award,2012,2012casj"));
    assert!(text.contains("frcB,Rookie All Star,2015,2015mndu"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn second_run_is_idempotent() {
    let dir = tmp_dir("idem");
    let out = dir.join("team_awards.csv");

    let api = two_team_api();
    scrape_with(&api, &opts(out.clone()), None).unwrap();
    let first = fs::read_to_string(&out).unwrap();

    api.reset_calls();
    let summary = scrape_with(&api, &opts(out.clone()), None).unwrap();

    assert_eq!(summary.teams_skipped, 2);
    assert_eq!(summary.teams_processed, 0);
    assert_eq!(summary.rows_written, 0);
    assert!(api.teams_fetched().is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), first);

    // still exactly one header row
    let headers = first.lines().filter(|l| *l == "team,award_name,year,event").count();
    assert_eq!(headers, 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn interrupted_run_resumes_without_duplicates() {
    let dir = tmp_dir("resume");
    let out = dir.join("team_awards.csv");

    // Simulate a run killed after frcA's flush but before frcB's:
    // frcA's rows are on disk, frcB's are not.
    let store = AwardsStore::new(&out);
    {
        let mut app = store.appender().unwrap();
        app.append_team(&[
            AwardRecord {
                team_key: "frcA".to_string(),
                award_name: "Regional Winner".to_string(),
                year: 2010,
                event_key: "2010casj".to_string(),
            },
            AwardRecord {
                team_key: "frcA".to_string(),
                award_name: "Imagery Award".to_string(),
                year: 2012,
                event_key: "2012casj".to_string(),
            },
            AwardRecord {
                team_key: "frcA".to_string(),
                award_name: "Engineering Inspiration".to_string(),
                year: 2012,
                event_key: "2012cada".to_string(),
            },
        ])
        .unwrap();
    }

    let api = two_team_api();
    let summary = scrape_with(&api, &opts(out.clone()), None).unwrap();

    // frcA was never re-fetched; frcB ran its full year range
    assert_eq!(api.teams_fetched(), vec!["frcB".to_string()]);
    assert_eq!(api.award_calls.lock().unwrap().len(), 6); // 2010..=2015
    assert_eq!(summary.teams_skipped, 1);
    assert_eq!(summary.teams_processed, 1);

    let text = fs::read_to_string(&out).unwrap();
    let a_winner_rows = text
        .lines()
        .filter(|l| *l == "frcA,Regional Winner,2010,2010casj")
        .count();
    assert_eq!(a_winner_rows, 1);
    assert!(text.contains("frcB,Rookie All Star,2015,2015mndu"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn zero_award_team_is_refetched_next_run() {
    let dir = tmp_dir("zero");
    let out = dir.join("team_awards.csv");

    let api = FakeApi::new(vec![vec![team("frcC", "Gammas")], vec![]]);
    scrape_with(&api, &opts(out.clone()), None).unwrap();
    assert_eq!(api.teams_fetched(), vec!["frcC".to_string()]);

    // no rows means no ledger entry, so it gets fetched again
    api.reset_calls();
    let summary = scrape_with(&api, &opts(out.clone()), None).unwrap();
    assert_eq!(api.teams_fetched(), vec!["frcC".to_string()]);
    assert_eq!(summary.teams_skipped, 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_ledger_aborts_before_any_fetch() {
    let dir = tmp_dir("malformed");
    let out = dir.join("team_awards.csv");
    fs::write(&out, "team,award_name,year,event\nfrcA,Winner\n").unwrap();

    let api = two_team_api();
    let result = scrape_with(&api, &opts(out), None);

    assert!(result.is_err());
    assert_eq!(*api.page_calls.lock().unwrap(), 0);
    assert!(api.teams_fetched().is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn enumeration_minus_ledger_feeds_the_fetch() {
    let dir = tmp_dir("universe");
    let out = dir.join("team_awards.csv");

    // Three teams across two pages; frcB already on file.
    let api = FakeApi::new(vec![
        vec![team("frcA", "Alphas"), team("frcB", "Betas")],
        vec![team("frcC", "Gammas")],
        vec![],
    ])
    .with_awards("frcA", 2011, vec![award("Quality Award", "2011casj")])
    .with_awards("frcB", 2011, vec![award("Quality Award", "2011cada")])
    .with_awards("frcC", 2011, vec![award("Quality Award", "2011mndu")]);

    let store = AwardsStore::new(&out);
    store
        .appender()
        .unwrap()
        .append_team(&[AwardRecord {
            team_key: "frcB".to_string(),
            award_name: "Quality Award".to_string(),
            year: 2011,
            event_key: "2011cada".to_string(),
        }])
        .unwrap();

    let summary = scrape_with(&api, &opts(out), None).unwrap();

    assert_eq!(*api.page_calls.lock().unwrap(), 3); // two full pages + the empty one
    assert_eq!(summary.teams_total, 3);
    assert_eq!(summary.teams_skipped, 1);
    let fetched = api.teams_fetched();
    assert_eq!(fetched, vec!["frcA".to_string(), "frcC".to_string()]);

    let _ = fs::remove_dir_all(&dir);
}
