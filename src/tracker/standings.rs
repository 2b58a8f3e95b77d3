use crate::api::types::{Standings, User};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participation {
    All,
    Official,
    Unofficial,
}

#[derive(Debug, Clone)]
pub struct StandingsRow {
    pub rank: u32,
    pub official_rank: Option<u32>,
    pub handle: String,
    pub organization: Option<String>,
    pub rating: Option<i64>,
    pub points: f64,
}

#[derive(Debug, Default)]
pub struct StandingsView {
    pub rows: Vec<StandingsRow>,
    // every organization seen among roster rows, including rows the active
    // filters drop, so a selection control can offer them all
    pub organizations: BTreeSet<String>,
}

pub fn build_view(
    standings: &Standings,
    roster: &[String],
    info: &HashMap<&str, &User>,
    organization: Option<&str>,
    participation: Participation,
) -> StandingsView {
    let mut view = StandingsView::default();
    for row in &standings.rows {
        let member = match row.party.members.first() {
            Some(member) => member,
            None => continue,
        };
        if !roster.iter().any(|handle| handle == &member.handle) {
            continue;
        }
        let user = info.get(member.handle.as_str());
        let official = row.party.is_official();
        if let Some(org) = user.and_then(|user| user.organization.as_deref()) {
            view.organizations.insert(org.to_string());
        }
        if let Some(wanted) = organization {
            if user.and_then(|user| user.organization.as_deref()) != Some(wanted) {
                continue;
            }
        }
        match participation {
            Participation::Official if !official => continue,
            Participation::Unofficial if official => continue,
            _ => {}
        }
        view.rows.push(StandingsRow {
            rank: row.rank,
            official_rank: if official { Some(row.rank) } else { None },
            handle: member.handle.clone(),
            organization: user.and_then(|user| user.organization.clone()),
            rating: user.and_then(|user| user.rating),
            points: row.points,
        });
    }
    view
}
