extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_tracker::{api::Session, cache::Cache, roster::Roster, schedule::Scheduler, tracker::Tracker};
use clap::{crate_description, crate_name, App, Arg};
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod roster;
    pub mod standings;
    pub mod stats;
}
mod read;

use command::{
    roster::{add_handle, list},
    standings::standings_loop,
    stats::stats_loop,
};
use read::read_line;

#[allow(unused_must_use)]
fn load_roster(stdout: &mut StandardStream, path: Option<&str>) -> Roster {
    match path {
        Some(f) => match File::open(f) {
            Ok(v) => match Roster::from_reader(v) {
                Ok(r) => r,
                Err(e) => {
                    write_error!(stdout, "Error", "Error parse {}: {}", f, e);
                    Roster::new(None)
                }
            },
            Err(e) => {
                write_error!(stdout, "Error", "Error open {}: {}", f, e);
                Roster::new(None)
            }
        },
        None => Roster::new(None),
    }
}

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = App::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(Arg::new("roster").help("Path to roster list"))
        .get_matches();
    let mut roster = load_roster(&mut stdout, app.value_of("roster"));
    stdout.reset();
    let tracker = Tracker::new(Session::new(), Scheduler::default(), Cache::new());
    loop {
        match read_line(&mut stdout, b"cf-tracker> ").trim() {
            "stats" => stats_loop(&mut stdout, &tracker, &roster).await,
            "standings" => standings_loop(&mut stdout, &tracker, &roster).await,
            "add" => add_handle(&mut stdout, tracker.api(), &mut roster).await,
            "list" => list(&mut stdout, &roster),
            "exit" => break,
            "" => {}
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"cf-tracker: unknown command "{}""#,
                unknown
            ),
        }
        stdout.reset();
    }
}
