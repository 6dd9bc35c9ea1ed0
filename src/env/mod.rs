//! Episode state machine: gym-style `reset`/`step` over the rule engine.
//!
//! Sequences moves one action index at a time, enforces mandatory
//! multi-jump continuation, and reports terminal outcomes, rewards, and
//! action masks to agents and training loops.

pub mod episode;
pub mod observation;

pub use episode::{CheckersEnv, EnvConfig};
pub use observation::{Observation, StepInfo, StepResult};
