//! # Locker Core Library
//!
//! This library provides the core logic for Locker, a timed password gate.
//! It implements a CLI-first philosophy where the whole program is available
//! via a standalone CLI binary over this library.
//!
//! ## Architecture
//!
//! - **Gate Engine**: A wall-clock-based state machine that requires the
//!   caller to pass the current time into each operation
//! - **Runner**: The prompt/read loop that drives the engine over a pair of
//!   `BufRead`/`Write` streams and reports the outcome
//!
//! ## Key Components
//!
//! - [`GateEngine`]: Core gate state machine
//! - [`Event`]: Serializable records of engine transitions
//! - [`CoreError`]: Error type for console I/O failures

pub mod error;
pub mod events;
pub mod gate;
pub mod runner;

pub use error::{CoreError, Result};
pub use events::Event;
pub use gate::{GateEngine, GateState};
