//! Interactive prompts on stdin/stdout.
//!
//! Set `GROCERIES_NONINTERACTIVE` to skip prompting: confirmations answer
//! "no" and value prompts take their default.

use anyhow::Result;
use std::io::{self, BufRead, Write};

const NONINTERACTIVE_ENV: &str = "GROCERIES_NONINTERACTIVE";

fn non_interactive() -> bool {
    std::env::var(NONINTERACTIVE_ENV).is_ok()
}

/// Ask a yes/no question on the terminal. Defaults to no.
pub fn confirm(question: &str) -> Result<bool> {
    if non_interactive() {
        return Ok(false);
    }
    let stdin = io::stdin();
    confirm_with(&mut stdin.lock(), &mut io::stdout(), question)
}

/// Ask for a value on the terminal, falling back to `default` on empty input.
pub fn ask_with_default(question: &str, default: &str) -> Result<String> {
    if non_interactive() {
        return Ok(default.to_string());
    }
    let stdin = io::stdin();
    ask_with_default_using(&mut stdin.lock(), &mut io::stdout(), question, default)
}

pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool> {
    write!(output, "{question} [y/N]: ")?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    let response = response.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

pub fn ask_with_default_using<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> Result<String> {
    write!(output, "{question} [{default}]: ")?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    let response = response.trim();
    if response.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(response.to_string())
    }
}
