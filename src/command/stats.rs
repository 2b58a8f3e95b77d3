extern crate termcolor;

use crate::{
    color::{position_label, rating_color},
    read::{read_line, read_period},
};
use cf_tracker::{
    config::view::STATS_PAGE_SIZE,
    pagination::Pager,
    roster::Roster,
    stats::UserStats,
    tracker::Tracker,
};
use std::io::Write;
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub async fn stats_loop(stdout: &mut StandardStream, tracker: &Tracker, roster: &Roster) {
    if roster.is_empty() {
        write_error!(stdout, "Error", "Roster is empty, nothing to rank.");
        return;
    }
    let period = read_period(stdout);
    write_info!(
        stdout,
        "Info",
        "Collecting statistics for {} handles...",
        roster.len()
    );
    let board = tracker
        .collect(roster.handles(), period, |board| {
            write_progress!(
                stdout,
                "Progress",
                "{:>3}% ({}/{})",
                board.progress(),
                board.processed(),
                board.total()
            );
        })
        .await;
    let mut pager = Pager::new(STATS_PAGE_SIZE);
    loop {
        render_page(stdout, board.entries(), &pager);
        if pager.pages(board.entries().len()) <= 1 {
            break;
        }
        let line = read_line(stdout, b"Page (empty to return): ");
        if line.is_empty() {
            break;
        }
        match line.parse::<usize>() {
            Ok(number) => pager.select(number, board.entries().len()),
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}

#[allow(unused_must_use)]
fn render_page(stdout: &mut StandardStream, entries: &[UserStats], pager: &Pager) {
    writeln!(stdout);
    writeln!(
        stdout,
        "{:>4} {:<24} {:<28} {:>6} {:>7}",
        "#", "Handle", "Organization", "Rating", "Solved"
    );
    let offset = (pager.current() - 1) * STATS_PAGE_SIZE;
    for (index, row) in pager.slice(entries).iter().enumerate() {
        write!(stdout, "{:>4} ", position_label(offset + index + 1));
        crate::color::set_fg(stdout, rating_color(row.rating));
        write!(stdout, "{:<24} ", row.handle);
        crate::color::reset_fg(stdout);
        writeln!(
            stdout,
            "{:<28} {:>6} {:>7}",
            row.organization.as_deref().unwrap_or("N/A"),
            row.rating
                .map(|rating| rating.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            row.solved
        );
    }
    writeln!(
        stdout,
        "Page {}/{} ({} ranked)",
        pager.current(),
        pager.pages(entries.len()).max(1),
        entries.len()
    );
}
