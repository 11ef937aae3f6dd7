//! Round state machine
//!
//! The engine owns the authoritative round state. Presentation layers only ever
//! see [`RoundSnapshot`]s pulled on demand.

mod clock;
mod round;
mod snapshot;
mod state_machine;

pub use clock::{Clock, ManualClock, SystemClock};
pub use round::{GuessOutcome, RoundId, RoundState};
pub use snapshot::{GALLOWS_STAGES, RoundSnapshot};
pub use state_machine::{DEFAULT_MAX_LIVES, DEFAULT_ROUND_TIME, EngineConfig, RoundEngine, Tick};
