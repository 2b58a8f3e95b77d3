extern crate serde;

use serde::Deserialize;

const OFFICIAL: &str = "CONTESTANT";

#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    pub status: String,
    pub result: Option<T>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub creation_time_seconds: u64,
    pub problem: ProblemRef,
    #[serde(default)]
    pub verdict: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRef {
    #[serde(default)]
    pub contest_id: Option<u64>,
    pub index: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub handle: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub country: Option<String>,
}
impl User {
    pub fn placeholder(handle: &str) -> Self {
        User {
            handle: handle.to_string(),
            organization: None,
            rating: None,
            country: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub rows: Vec<RanklistRow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanklistRow {
    pub party: Party,
    pub rank: u32,
    pub points: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub members: Vec<Member>,
    #[serde(default)]
    pub participant_type: Option<String>,
}
impl Party {
    pub fn is_official(&self) -> bool {
        self.participant_type.as_deref() == Some(OFFICIAL)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub handle: String,
}
