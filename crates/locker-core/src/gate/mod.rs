mod engine;

pub use engine::{GateEngine, GateState, DEFAULT_BUDGET_MS, DEFAULT_SECRET};
