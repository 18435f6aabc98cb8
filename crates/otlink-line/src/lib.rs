//! Two-wire line interface abstraction for the otlink protocol engine.
//!
//! The protocol core never touches hardware directly. It is written against
//! the [`LineDriver`] contract: read the input level, drive the output level,
//! read a wrapping microsecond clock, and busy-wait with microsecond
//! precision. A GPIO-backed implementation lives with the host application;
//! this crate ships [`SimulatedLine`], a fully scriptable in-memory line used
//! by the test suites and the CLI simulation.

pub mod sim;
pub mod traits;

pub use sim::{Edge, SimClock, SimulatedLine};
pub use traits::{elapsed_micros, Level, LineDriver};
