extern crate futures;

use crate::{
    api::{
        types::{Submission, User},
        Session,
    },
    cache::Cache,
    schedule::Scheduler,
    standings::{self, Participation, StandingsView},
    stats::{filter_by_period, solved_count, unix_now, Leaderboard, Period, UserStats},
};
use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;
use std::collections::HashMap;

// Ties the API session, the request scheduler and the per-session cache
// together and turns raw payloads into ranked rows. A handle whose fetches
// fail terminally still shows up, with zero solved problems and placeholder
// metadata.
pub struct Tracker {
    api: Session,
    queue: Scheduler,
    cache: Cache,
}

impl Tracker {
    pub fn new(api: Session, queue: Scheduler, cache: Cache) -> Self {
        Tracker { api, queue, cache }
    }
    pub fn api(&self) -> &Session {
        &self.api
    }

    pub async fn submissions(&self, handle: &str) -> Vec<Submission> {
        if let Some(cached) = self.cache.submissions(handle) {
            return cached;
        }
        let fetched = self
            .queue
            .run(self.api.user_status(handle))
            .await
            .unwrap_or_default();
        self.cache.store_submissions(handle, fetched.clone());
        fetched
    }

    pub async fn user(&self, handle: &str) -> User {
        if let Some(cached) = self.cache.user(handle) {
            return cached;
        }
        let fetched = self
            .queue
            .run(self.api.user_info(&[handle.to_string()]))
            .await
            .and_then(|users| users.into_iter().next())
            .unwrap_or_else(|| User::placeholder(handle));
        self.cache.store_user(handle, fetched.clone());
        fetched
    }

    pub async fn user_stats(&self, handle: &str, period: Period) -> UserStats {
        let submissions = self.submissions(handle).await;
        let solved = solved_count(filter_by_period(&submissions, period, unix_now()));
        let user = self.user(handle).await;
        UserStats {
            handle: handle.to_string(),
            solved,
            organization: user.organization,
            rating: user.rating,
        }
    }

    // Stats for a whole roster; the observer sees the re-ranked board after
    // every completed handle, slow fetches never hold the display back.
    pub async fn collect<F>(&self, handles: &[String], period: Period, mut observe: F) -> Leaderboard
    where
        F: FnMut(&Leaderboard),
    {
        let mut board = Leaderboard::new(handles.len());
        let mut pending: FuturesUnordered<_> = handles
            .iter()
            .map(|handle| self.user_stats(handle, period))
            .collect();
        while let Some(stats) = pending.next().await {
            debug!("collected {} ({} solved)", stats.handle, stats.solved);
            board.insert(stats);
            observe(&board);
        }
        board
    }

    // One contest, roster members only. Unofficial participants are always
    // requested; the participation filter is applied on our side.
    pub async fn standings(
        &self,
        handles: &[String],
        contest_id: u64,
        organization: Option<&str>,
        participation: Participation,
    ) -> StandingsView {
        let payload = match self.queue.run(self.api.contest_standings(contest_id, true)).await {
            Some(payload) => payload,
            None => return StandingsView::default(),
        };
        let mut present: Vec<String> = Vec::new();
        for row in &payload.rows {
            if let Some(member) = row.party.members.first() {
                if handles.iter().any(|handle| handle == &member.handle)
                    && !present.contains(&member.handle)
                {
                    present.push(member.handle.clone());
                }
            }
        }
        let users = if present.is_empty() {
            Vec::new()
        } else {
            self.queue
                .run(self.api.user_info(&present))
                .await
                .unwrap_or_default()
        };
        for user in &users {
            self.cache.store_user(&user.handle, user.clone());
        }
        let info: HashMap<&str, &User> = users
            .iter()
            .map(|user| (user.handle.as_str(), user))
            .collect();
        standings::build_view(&payload, handles, &info, organization, participation)
    }
}
