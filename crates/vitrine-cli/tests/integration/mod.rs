//! Integration test cases, grouped by subcommand path.

mod prices;
mod refresh;
