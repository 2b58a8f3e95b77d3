extern crate tokio;

use crate::config::schedule::{COOLDOWN, MAX_CONCURRENT};
use log::warn;
use std::{fmt::Display, future::Future, sync::Arc, time::Duration};
use tokio::{sync::Semaphore, time::sleep};

// Slots are handed out in submission order (the semaphore queues waiters
// fairly) and a finished task's slot stays taken for `cooldown` before the
// next waiter may have it, keeping the aggregate request rate below what
// the remote tolerates.
pub struct Scheduler {
    slots: Arc<Semaphore>,
    limit: usize,
    cooldown: Duration,
}

impl Scheduler {
    pub fn new(limit: usize, cooldown: Duration) -> Self {
        Scheduler {
            slots: Arc::new(Semaphore::new(limit)),
            limit,
            cooldown,
        }
    }

    pub async fn run<T, E, F>(&self, task: F) -> Option<T>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let slot = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .expect("scheduler semaphore closed");
        let result = task.await;
        let cooldown = self.cooldown;
        tokio::spawn(async move {
            sleep(cooldown).await;
            drop(slot);
        });
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("scheduled request failed: {}", err);
                None
            }
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
    pub fn in_flight(&self) -> usize {
        self.limit - self.slots.available_permits()
    }
}
impl Default for Scheduler {
    fn default() -> Self {
        Self::new(MAX_CONCURRENT, COOLDOWN)
    }
}
