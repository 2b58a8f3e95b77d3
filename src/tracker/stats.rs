use crate::api::types::Submission;
use std::{
    collections::HashSet,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

const ACCEPTED: &str = "OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    LastYear,
    Last30Days,
    Today,
}
impl Period {
    pub fn window(self) -> Option<Duration> {
        match self {
            Period::All => None,
            Period::LastYear => Some(Duration::from_secs(365 * 24 * 3600)),
            Period::Last30Days => Some(Duration::from_secs(30 * 24 * 3600)),
            Period::Today => Some(Duration::from_secs(24 * 3600)),
        }
    }
    // Rolling window anchored at the moment of the call, not at calendar
    // boundaries.
    pub fn cutoff(self, now_seconds: u64) -> Option<u64> {
        self.window()
            .map(|window| now_seconds.saturating_sub(window.as_secs()))
    }
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

pub fn filter_by_period(
    submissions: &[Submission],
    period: Period,
    now_seconds: u64,
) -> Vec<&Submission> {
    match period.cutoff(now_seconds) {
        None => submissions.iter().collect(),
        Some(cutoff) => submissions
            .iter()
            .filter(|submission| submission.creation_time_seconds > cutoff)
            .collect(),
    }
}

// Distinct problems with an accepted verdict; gym submissions without a
// contest id don't count.
pub fn solved_count<'a, I>(submissions: I) -> usize
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut seen = HashSet::new();
    for submission in submissions {
        if submission.verdict.as_deref() != Some(ACCEPTED) {
            continue;
        }
        if let Some(contest) = submission.problem.contest_id {
            seen.insert((contest, submission.problem.index.as_str()));
        }
    }
    seen.len()
}

#[derive(Debug, Clone)]
pub struct UserStats {
    pub handle: String,
    pub solved: usize,
    pub organization: Option<String>,
    pub rating: Option<i64>,
}

// Running ranking over a roster refresh: rebuilt after every arriving stat
// so consumers can render while slower fetches are still in flight.
pub struct Leaderboard {
    entries: Vec<UserStats>,
    total: usize,
}
impl Leaderboard {
    pub fn new(total: usize) -> Self {
        Leaderboard {
            entries: Vec::with_capacity(total),
            total,
        }
    }
    pub fn insert(&mut self, stats: UserStats) {
        self.entries.push(stats);
        // stable: equal counts keep arrival order
        self.entries.sort_by(|a, b| b.solved.cmp(&a.solved));
    }
    pub fn entries(&self) -> &[UserStats] {
        &self.entries
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn processed(&self) -> usize {
        self.entries.len()
    }
    pub fn progress(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        let percent = (self.processed() as f64 * 100.0 / self.total as f64).round() as u32;
        percent.min(100)
    }
}
