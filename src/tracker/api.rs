extern crate reqwest;
extern crate serde;

mod retry;
pub mod types;

pub use self::retry::RetryPolicy;

use self::types::{Envelope, Standings, Submission, User};
use crate::{
    config::api::BASE_URL,
    error::{Error, Result},
};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub struct Session {
    client: Client,
    base: String,
    policy: RetryPolicy,
}

impl Session {
    pub fn new() -> Self {
        Self::with_base(BASE_URL)
    }
    pub fn with_base<T: Into<String>>(base: T) -> Self {
        Session {
            client: Client::new(),
            base: base.into(),
            policy: RetryPolicy::default(),
        }
    }
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base, endpoint);
        let Envelope {
            status,
            result,
            comment,
        } = retry::fetch_json(&self.client, endpoint, &url, query, &self.policy).await?;
        if status == "OK" {
            result.ok_or_else(|| Error::api(endpoint, comment))
        } else {
            Err(Error::api(endpoint, comment))
        }
    }

    pub async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        self.call("user.status", &[("handle", handle.to_string())])
            .await
    }
    pub async fn user_info(&self, handles: &[String]) -> Result<Vec<User>> {
        self.call("user.info", &[("handles", handles.join(";"))])
            .await
    }
    pub async fn contest_standings(
        &self,
        contest_id: u64,
        show_unofficial: bool,
    ) -> Result<Standings> {
        self.call(
            "contest.standings",
            &[
                ("contestId", contest_id.to_string()),
                ("showUnofficial", show_unofficial.to_string()),
            ],
        )
        .await
    }
}
impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
