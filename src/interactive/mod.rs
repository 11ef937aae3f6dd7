//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, TICK_RATE, run_tui};
