//! In-memory line driver for tests and the CLI simulation.
//!
//! A [`SimClock`] is a shared, manually advanced microsecond counter. Two
//! [`SimulatedLine`]s over the same clock form a virtual wire: every output
//! transition is recorded as a timestamped [`Edge`], and a harness drains
//! those edges and replays them into the other end's edge handler — playing
//! the role the level-change interrupt plays on real hardware.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::trace;

use crate::traits::{Level, LineDriver};

/// A shared simulated microsecond clock.
///
/// Cloning is cheap; clones observe the same time. The counter wraps at
/// `u32::MAX` exactly like an MCU timer register.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    micros: Arc<AtomicU32>,
}

impl SimClock {
    /// A clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock starting at an arbitrary reading, e.g. near the wrap point.
    pub fn starting_at(micros: u32) -> Self {
        Self {
            micros: Arc::new(AtomicU32::new(micros)),
        }
    }

    /// Current reading.
    pub fn now(&self) -> u32 {
        self.micros.load(Ordering::SeqCst)
    }

    /// Advance the clock, wrapping on overflow.
    pub fn advance(&self, micros: u32) {
        self.micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.wrapping_add(micros))
            })
            .ok();
    }
}

/// A level transition observed on a simulated wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The level the line settled at.
    pub level: Level,
    /// Clock reading at the moment of the transition.
    pub at_micros: u32,
}

/// A scriptable [`LineDriver`] over a [`SimClock`].
///
/// Output transitions are recorded with timestamps and retrieved with
/// [`SimulatedLine::drain_edges`]; the input level is set by the harness
/// with [`SimulatedLine::set_input`]. `delay_micros` advances the shared
/// clock, so a transmit burst produces edges with realistic spacing.
#[derive(Debug)]
pub struct SimulatedLine {
    clock: SimClock,
    output: Level,
    input: Level,
    edges: Vec<Edge>,
}

impl SimulatedLine {
    /// A line resting idle in both directions.
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            output: Level::Idle,
            input: Level::Idle,
            edges: Vec::new(),
        }
    }

    /// The shared clock this line runs on.
    pub fn clock(&self) -> SimClock {
        self.clock.clone()
    }

    /// Script the input level the next `read_level` call will observe.
    pub fn set_input(&mut self, level: Level) {
        self.input = level;
    }

    /// Current output level.
    pub fn output_level(&self) -> Level {
        self.output
    }

    /// Take all output transitions recorded since the last drain.
    pub fn drain_edges(&mut self) -> Vec<Edge> {
        std::mem::take(&mut self.edges)
    }

    fn drive(&mut self, level: Level) {
        if self.output == level {
            return;
        }
        self.output = level;
        let edge = Edge {
            level,
            at_micros: self.clock.now(),
        };
        trace!(?edge.level, at_micros = edge.at_micros, "line transition");
        self.edges.push(edge);
    }
}

impl LineDriver for SimulatedLine {
    fn read_level(&self) -> Level {
        self.input
    }

    fn drive_active(&mut self) {
        self.drive(Level::Active);
    }

    fn drive_idle(&mut self) {
        self.drive(Level::Idle);
    }

    fn now_micros(&self) -> u32 {
        self.clock.now()
    }

    fn delay_micros(&mut self, micros: u32) {
        self.clock.advance(micros);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_clones_share_time() {
        let clock = SimClock::new();
        let other = clock.clone();
        clock.advance(1234);
        assert_eq!(other.now(), 1234);
    }

    #[test]
    fn clock_wraps() {
        let clock = SimClock::starting_at(u32::MAX - 10);
        clock.advance(20);
        assert_eq!(clock.now(), 9);
    }

    #[test]
    fn records_output_transitions_with_timestamps() {
        let clock = SimClock::new();
        let mut line = SimulatedLine::new(clock.clone());

        line.drive_active();
        line.delay_micros(500);
        line.drive_idle();
        line.delay_micros(500);

        let edges = line.drain_edges();
        assert_eq!(
            edges,
            vec![
                Edge {
                    level: Level::Active,
                    at_micros: 0
                },
                Edge {
                    level: Level::Idle,
                    at_micros: 500
                },
            ]
        );
        assert!(line.drain_edges().is_empty());
    }

    #[test]
    fn redundant_drives_produce_no_edges() {
        let mut line = SimulatedLine::new(SimClock::new());
        line.drive_idle();
        line.drive_idle();
        assert!(line.drain_edges().is_empty());
    }

    #[test]
    fn scripted_input_is_observable() {
        let mut line = SimulatedLine::new(SimClock::new());
        assert_eq!(line.read_level(), Level::Idle);
        line.set_input(Level::Active);
        assert_eq!(line.read_level(), Level::Active);
    }

    #[test]
    fn delay_advances_shared_clock() {
        let clock = SimClock::new();
        let mut line = SimulatedLine::new(clock.clone());
        line.delay_micros(34_000);
        assert_eq!(clock.now(), 34_000);
    }
}
