//! Prompt loop and outcome reporting.
//!
//! `attempt()` drives a [`GateEngine`] over a pair of streams: check the
//! deadline, prompt, block on one line, evaluate. The deadline is only
//! checked between prompts - a blocking read is never interrupted, so a
//! line typed before the deadline and delivered after it still counts.
//! `run()` wires the loop to stdin/stdout and prints the final result.

use std::io::{self, BufRead, Write};

use chrono::Utc;

use crate::error::Result;
use crate::events::Event;
use crate::gate::GateEngine;

const PROMPT: &str = "Enter password to unlock: ";
const REJECT_MSG: &str = "Incorrect password. Try again.";
const FAILURE_MSG: &str = "Sorry, the lock couldn't be opened.";

/// Run one gate attempt over the given streams.
///
/// Returns `Ok(true)` if the correct password arrived within the budget,
/// `Ok(false)` on expiry. A closed input stream also yields `Ok(false)`:
/// no further guess can ever unlock the gate, so it reports the same
/// outcome as a timeout.
pub fn attempt<R: BufRead, W: Write>(
    engine: &mut GateEngine,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    engine.start(Utc::now());
    loop {
        if let Some(Event::GateExpired { .. }) = engine.tick(Utc::now()) {
            // No new prompt after expiry.
            return Ok(false);
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        // Strip only the line terminator; the guess itself is compared
        // verbatim, spaces and all.
        let guess = line
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&line);

        match engine.submit(guess, Utc::now()) {
            Some(Event::GateUnlocked { .. }) => return Ok(true),
            _ => writeln!(out, "{REJECT_MSG}")?,
        }
    }
}

/// Run one gate attempt on stdin/stdout and report the result.
pub fn run() -> Result<()> {
    let mut engine = GateEngine::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let unlocked = attempt(&mut engine, &mut stdin.lock(), &mut stdout.lock())?;

    if unlocked {
        let result = 1 + 2;
        println!("Sum of 1 and 2 is: {result}");
    } else {
        println!("{FAILURE_MSG}");
    }
    Ok(())
}
