use crate::api::types::{Submission, User};
use std::{collections::HashMap, sync::Mutex};

// Per-session store. Entries are never invalidated: a stale read costs far
// less than a second round-trip, and failed lookups are stored too so a
// handle is fetched at most once per session.
pub struct Cache {
    submissions: Mutex<HashMap<String, Vec<Submission>>>,
    users: Mutex<HashMap<String, User>>,
}

impl Cache {
    pub fn new() -> Self {
        Cache {
            submissions: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
        }
    }

    pub fn submissions(&self, handle: &str) -> Option<Vec<Submission>> {
        self.submissions.lock().unwrap().get(handle).cloned()
    }
    pub fn store_submissions(&self, handle: &str, submissions: Vec<Submission>) {
        self.submissions
            .lock()
            .unwrap()
            .insert(handle.to_string(), submissions);
    }

    pub fn user(&self, handle: &str) -> Option<User> {
        self.users.lock().unwrap().get(handle).cloned()
    }
    pub fn store_user(&self, handle: &str, user: User) {
        self.users.lock().unwrap().insert(handle.to_string(), user);
    }
}
impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}
