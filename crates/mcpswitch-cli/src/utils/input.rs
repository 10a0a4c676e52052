//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Prompts the user for a yes/no confirmation.
///
/// Only an answer starting with `y` or `Y` counts as yes.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(is_yes(&input))
}

fn is_yes(answer: &str) -> bool {
    answer.trim_start().starts_with(['y', 'Y'])
}
