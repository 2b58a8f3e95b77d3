extern crate termcolor;

use cf_tracker::{standings::Participation, stats::Period};
use std::io::{stdin, Write};
use termcolor::{Color, StandardStream, WriteColor};

#[allow(unused_must_use)]
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) {
    dest.clear();
    loop {
        stdout.write(prompt);
        stdout.flush();
        match stdin().read_line(dest) {
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e.to_string()),
        }
        stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> String {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret);
    ret
}
#[allow(unused_must_use)]
pub fn read_usize(stdout: &mut StandardStream, prompt: &[u8], min: usize, max: usize) -> usize {
    let mut buf = String::new();
    loop {
        read_line_to(stdout, prompt, &mut buf);
        match buf.parse::<usize>() {
            Ok(v) => {
                if v < min || v >= max {
                    write_error!(
                        stdout,
                        "Error",
                        "parse: Value {} out of range. Expected value in [{}, {})",
                        v,
                        min,
                        max
                    );
                } else {
                    return v;
                }
            }
            Err(e) => write_error!(stdout, "Error", "parse: {}", e.to_string()),
        };
        stdout.reset();
    }
}
#[allow(unused_must_use)]
pub fn read_period(stdout: &mut StandardStream) -> Period {
    let mut buf = String::new();
    loop {
        read_line_to(
            stdout,
            b"Period [all/last12months/last30days/today]: ",
            &mut buf,
        );
        match buf.as_str() {
            "" | "all" => return Period::All,
            "last12months" => return Period::LastYear,
            "last30days" => return Period::Last30Days,
            "today" => return Period::Today,
            unknown => write_error!(stdout, "Error", r#"Unknown period "{}""#, unknown),
        }
        stdout.reset();
    }
}
#[allow(unused_must_use)]
pub fn read_participation(stdout: &mut StandardStream) -> Participation {
    let mut buf = String::new();
    loop {
        read_line_to(stdout, b"Participation [all/official/unofficial]: ", &mut buf);
        match buf.as_str() {
            "" | "all" => return Participation::All,
            "official" => return Participation::Official,
            "unofficial" => return Participation::Unofficial,
            unknown => write_error!(stdout, "Error", r#"Unknown participation "{}""#, unknown),
        }
        stdout.reset();
    }
}
