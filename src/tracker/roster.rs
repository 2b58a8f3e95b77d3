extern crate serde;
extern crate serde_yaml;

use crate::api::Session;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStatus {
    Added,
    Exists,
    NotInCommunity,
    Invalid,
}

// The tracked community: an ordered handle list, optionally restricted to
// one country.
#[derive(Debug, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    handles: Vec<String>,
}

impl Roster {
    pub fn new(country: Option<String>) -> Self {
        Roster {
            country,
            handles: Vec::new(),
        }
    }
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(rdr)
    }

    pub fn handles(&self) -> &[String] {
        &self.handles
    }
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
    pub fn len(&self) -> usize {
        self.handles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
    pub fn contains(&self, handle: &str) -> bool {
        self.handles.iter().any(|known| known == handle)
    }

    pub async fn verify_and_add(&mut self, api: &Session, handle: &str) -> AddStatus {
        if self.contains(handle) {
            return AddStatus::Exists;
        }
        let found = match api.user_info(&[handle.to_string()]).await {
            Ok(users) => users.into_iter().next(),
            Err(_) => None,
        };
        match found {
            None => AddStatus::Invalid,
            Some(user) => {
                if let Some(required) = &self.country {
                    if user.country.as_deref() != Some(required.as_str()) {
                        return AddStatus::NotInCommunity;
                    }
                }
                self.handles.push(handle.to_string());
                AddStatus::Added
            }
        }
    }
}
