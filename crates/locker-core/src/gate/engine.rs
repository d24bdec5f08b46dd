//! Gate engine implementation.
//!
//! The gate engine is a wall-clock-based state machine. It does not use
//! internal threads and never reads the clock itself - the caller passes
//! the current time into each operation, so tests drive it with synthetic
//! timestamps.
//!
//! ## State Transitions
//!
//! ```text
//! Waiting -> (Unlocked | Expired)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = GateEngine::new();
//! engine.start(Utc::now());
//! // In a loop:
//! engine.tick(Utc::now());          // Some(GateExpired) when the budget runs out
//! engine.submit(guess, Utc::now()); // Some(GateUnlocked) on a match
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// The fixed correct password.
pub const DEFAULT_SECRET: &str = "OpenSesame";

/// Time budget for a gate attempt (10 seconds).
pub const DEFAULT_BUDGET_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    Waiting,
    /// Correct password entered within the budget. Terminal.
    Unlocked,
    /// Budget ran out without a correct entry. Terminal.
    Expired,
}

/// Core gate engine.
///
/// Operates on caller-supplied timestamps -- no internal thread, no clock
/// reads. The caller is responsible for calling `tick()` between prompts;
/// a blocking read is never interrupted, so a guess typed before the
/// deadline but delivered after it is still evaluated.
#[derive(Debug, Clone)]
pub struct GateEngine {
    secret: String,
    budget_ms: u64,
    state: GateState,
    /// Set once by `start()`; the deadline is immutable after that.
    started_at: Option<DateTime<Utc>>,
}

impl GateEngine {
    /// Create a gate with the fixed secret and the 10-second budget.
    pub fn new() -> Self {
        Self::with_secret(DEFAULT_SECRET, DEFAULT_BUDGET_MS)
    }

    /// Create a gate with a custom secret and budget.
    pub fn with_secret(secret: impl Into<String>, budget_ms: u64) -> Self {
        Self {
            secret: secret.into(),
            budget_ms,
            state: GateState::Waiting,
            started_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn budget_ms(&self) -> u64 {
        self.budget_ms
    }

    /// Milliseconds since `start()`. Zero before the gate has started.
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> u64 {
        self.started_at
            .map(|started| (now - started).num_milliseconds().max(0) as u64)
            .unwrap_or(0)
    }

    /// Milliseconds left in the budget. Saturates at zero.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> u64 {
        self.budget_ms.saturating_sub(self.elapsed_ms(now))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record the start of the attempt. A second call is a no-op.
    pub fn start(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.started_at.is_some() {
            return None;
        }
        self.started_at = Some(now);
        Some(Event::GateStarted {
            budget_ms: self.budget_ms,
            at: now,
        })
    }

    /// Deadline check. Call between prompts, never during a blocking read.
    ///
    /// Expiry is strict: exactly `budget_ms` elapsed still leaves the gate
    /// waiting, matching `elapsed > budget`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != GateState::Waiting || self.started_at.is_none() {
            return None;
        }
        let elapsed_ms = self.elapsed_ms(now);
        if elapsed_ms > self.budget_ms {
            self.state = GateState::Expired;
            return Some(Event::GateExpired { elapsed_ms, at: now });
        }
        None
    }

    /// Evaluate one guess. Comparison is verbatim: case-sensitive, no
    /// trimming. Terminal states ignore further guesses.
    pub fn submit(&mut self, guess: &str, now: DateTime<Utc>) -> Option<Event> {
        if self.state != GateState::Waiting {
            return None;
        }
        let elapsed_ms = self.elapsed_ms(now);
        if guess == self.secret {
            self.state = GateState::Unlocked;
            Some(Event::GateUnlocked { elapsed_ms, at: now })
        } else {
            Some(Event::GuessRejected { elapsed_ms, at: now })
        }
    }
}

impl Default for GateEngine {
    fn default() -> Self {
        Self::new()
    }
}
