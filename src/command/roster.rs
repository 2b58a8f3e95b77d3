extern crate termcolor;

use crate::read::read_line;
use cf_tracker::{
    api::Session,
    roster::{AddStatus, Roster},
};
use std::io::Write;
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub async fn add_handle(stdout: &mut StandardStream, api: &Session, roster: &mut Roster) {
    let handle = read_line(stdout, b"Handle: ");
    let handle = handle.trim();
    if handle.is_empty() {
        return;
    }
    write_info!(stdout, "Info", "Verifying {}...", handle);
    match roster.verify_and_add(api, handle).await {
        AddStatus::Added => write_ok!(stdout, "Success", "{} added to the roster", handle),
        AddStatus::Exists => write_info!(stdout, "Info", "{} is already on the roster", handle),
        AddStatus::NotInCommunity => write_error!(
            stdout,
            "Error",
            "{} exists but is outside the tracked community",
            handle
        ),
        AddStatus::Invalid => write_error!(
            stdout,
            "Error",
            "{} is invalid or unknown on codeforces.com",
            handle
        ),
    }
}

#[allow(unused_must_use)]
pub fn list(stdout: &mut StandardStream, roster: &Roster) {
    if roster.is_empty() {
        write_info!(stdout, "Info", "Roster is empty.");
        return;
    }
    write_info!(stdout, "Info", "{} tracked handles:", roster.len());
    for handle in roster.handles() {
        writeln!(stdout, "    {}", handle);
    }
}
