extern crate reqwest;
extern crate tokio;

use crate::{
    config::api::{RATE_LIMIT_WAIT, RETRY_BACKOFF, RETRY_COUNT},
    error::{Error, Result},
};
use log::{debug, warn};
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub retries: u32,
    pub backoff: Duration,
    pub rate_limit_wait: Duration,
}
impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            retries: RETRY_COUNT,
            backoff: RETRY_BACKOFF,
            rate_limit_wait: RATE_LIMIT_WAIT,
        }
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

// Rate-limit waits are mandatory and unbounded; only transient failures
// consume the retry budget. Any other 4xx is terminal right away.
pub(super) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    endpoint: &'static str,
    url: &str,
    query: &[(&str, String)],
    policy: &RetryPolicy,
) -> Result<T> {
    let mut attempt = 0;
    loop {
        let error = match client.get(url).query(query).send().await {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::TOO_MANY_REQUESTS {
                    let wait = retry_after(&response).unwrap_or(policy.rate_limit_wait);
                    debug!("{}: rate limited, waiting {:?}", endpoint, wait);
                    sleep(wait).await;
                    continue;
                }
                if status.is_client_error() {
                    return Err(Error::status(endpoint, status));
                }
                if status.is_success() {
                    match response.json::<T>().await {
                        Ok(value) => return Ok(value),
                        Err(err) => Error::malformed(endpoint, err),
                    }
                } else {
                    Error::status(endpoint, status)
                }
            }
            Err(err) => Error::network(endpoint, err),
        };
        attempt += 1;
        if attempt > policy.retries {
            warn!("{}: giving up after {} attempts: {}", endpoint, attempt, error);
            return Err(error);
        }
        debug!("{}: attempt {} failed, retrying: {}", endpoint, attempt, error);
        sleep(policy.backoff * attempt).await;
    }
}
