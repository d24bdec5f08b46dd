use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every gate transition produces an Event.
/// The runner branches on them; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    GateStarted {
        budget_ms: u64,
        at: DateTime<Utc>,
    },
    /// A guess did not match the secret; the gate keeps waiting.
    GuessRejected {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    GateUnlocked {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    /// The time budget ran out before a correct guess.
    GateExpired {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
}
