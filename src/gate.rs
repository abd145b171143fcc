//! Confirmation gate
//!
//! The plan preview is always shown first; files only move after an explicit
//! opt-in, either the `--execute` flag or an affirmative answer to the prompt.

use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

/// Prompt shown before moving files
pub const PROMPT: &str = "Move the files now? (y/N)";

/// Message printed when the user declines
pub const ABORT_MESSAGE: &str = "Cancelled. Pass --execute to run without prompting.";

/// Answers accepted as confirmation (compared case-insensitively)
const AFFIRMATIVE: &[&str] = &["y", "yes", "是"];

/// Outcome of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run the executor
    Execute,
    /// Leave the filesystem untouched
    Abort,
}

/// Decide whether to execute
///
/// `confirm` is only consulted when `execute_flag` is not set.
pub fn decide(execute_flag: bool, confirm: impl FnOnce() -> bool) -> Decision {
    if execute_flag || confirm() {
        Decision::Execute
    } else {
        Decision::Abort
    }
}

/// Whether an answer counts as confirmation
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.iter().any(|token| *token == answer)
}

/// Ask on the controlling terminal, or read one line from stdin otherwise
///
/// End of input and read errors count as "no".
pub fn prompt_confirmation() -> bool {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        let answer = Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                debug!(error = %e, "confirmation prompt failed");
                false
            }
        }
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_confirmation(&mut stdin.lock(), &mut stdout.lock())
    }
}

/// Write the prompt to `out` and read one answer line from `input`
pub fn read_confirmation<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> bool {
    if let Err(e) = write!(out, "{}: ", PROMPT).and_then(|()| out.flush()) {
        debug!(error = %e, "failed to write confirmation prompt");
    }

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => false,
        Ok(_) => is_affirmative(&answer),
        Err(e) => {
            debug!(error = %e, "failed to read confirmation");
            false
        }
    }
}
