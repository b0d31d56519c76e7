//! `stylefold` binary entry point.

use anyhow::Result;
use serde_json::to_string_pretty;
use std::env;
use std::io::{Write as _, stderr, stdout};
use stylefold::{Command, USAGE, run};

/// Parse arguments, run the command and print its JSON result.
///
/// # Errors
/// Returns an error if argument parsing or command execution fails.
fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(err) => {
            writeln!(stderr(), "{USAGE}")?;
            return Err(err);
        }
    };
    let output = run(&command)?;
    writeln!(stdout().lock(), "{}", to_string_pretty(&output)?)?;
    Ok(())
}
