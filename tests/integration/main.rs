mod common;
mod test_fetch;
mod test_roster;
mod test_tracker;
