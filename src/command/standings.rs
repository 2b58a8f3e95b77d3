extern crate termcolor;

use crate::{
    color::{position_label, rating_color},
    read::{read_line, read_participation, read_usize},
};
use cf_tracker::{
    config::view::STANDINGS_PAGE_SIZE,
    pagination::Pager,
    roster::Roster,
    standings::StandingsRow,
    tracker::Tracker,
};
use std::io::Write;
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub async fn standings_loop(stdout: &mut StandardStream, tracker: &Tracker, roster: &Roster) {
    if roster.is_empty() {
        write_error!(stdout, "Error", "Roster is empty, nothing to look up.");
        return;
    }
    let contest = read_usize(stdout, b"Contest id: ", 1, usize::MAX) as u64;
    let participation = read_participation(stdout);
    write_info!(stdout, "Info", "Fetching standings of contest {}...", contest);
    let view = tracker
        .standings(roster.handles(), contest, None, participation)
        .await;
    if view.rows.is_empty() {
        write_error!(
            stdout,
            "Error",
            "No roster member found in contest {}.",
            contest
        );
        return;
    }
    if !view.organizations.is_empty() {
        let known: Vec<&str> = view.organizations.iter().map(String::as_str).collect();
        write_info!(stdout, "Info", "Organizations: {}", known.join(", "));
    }
    let mut filtered: Vec<&StandingsRow> = view.rows.iter().collect();
    let mut pager = Pager::new(STANDINGS_PAGE_SIZE);
    loop {
        render_page(stdout, &filtered, &pager);
        let line = read_line(stdout, b"Page number, \"org <name|all>\" or empty to return: ");
        if line.is_empty() {
            break;
        }
        if let Some(wanted) = line.strip_prefix("org ") {
            // narrowing the view starts it over from the first page
            filtered = match wanted.trim() {
                "all" => view.rows.iter().collect(),
                organization => view
                    .rows
                    .iter()
                    .filter(|row| row.organization.as_deref() == Some(organization))
                    .collect(),
            };
            pager.reset();
            continue;
        }
        match line.parse::<usize>() {
            Ok(number) => pager.select(number, filtered.len()),
            Err(e) => write_error!(stdout, "Error", "parse: {}", e),
        }
        stdout.reset();
    }
}

#[allow(unused_must_use)]
fn render_page(stdout: &mut StandardStream, rows: &[&StandingsRow], pager: &Pager) {
    writeln!(stdout);
    writeln!(
        stdout,
        "{:>4} {:>8} {:<24} {:<28} {:>9}",
        "#", "Official", "Handle", "Organization", "Points"
    );
    let offset = (pager.current() - 1) * STANDINGS_PAGE_SIZE;
    for (index, row) in pager.slice(rows).iter().enumerate() {
        let official = row
            .official_rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            stdout,
            "{:>4} {:>8} ",
            position_label(offset + index + 1),
            official
        );
        crate::color::set_fg(stdout, rating_color(row.rating));
        write!(stdout, "{:<24} ", row.handle);
        crate::color::reset_fg(stdout);
        writeln!(
            stdout,
            "{:<28} {:>9.2}",
            row.organization.as_deref().unwrap_or("N/A"),
            row.points
        );
    }
    writeln!(
        stdout,
        "Page {}/{} ({} shown)",
        pager.current(),
        pager.pages(rows.len()).max(1),
        rows.len()
    );
}
