//! Session state shared between the polling context and the edge context.
//!
//! [`Session::on_edge`] is the receive state machine. It runs in whatever
//! context delivers level-change notifications — on hardware, an interrupt
//! racing the poll loop — so it only ever works with the level and
//! timestamp carried by the event, never with blocking reads of the line.

use std::fmt;

use otlink_line::{elapsed_micros, Level};

use crate::config::LinkConfig;

/// Which end of the link this node is. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Initiates transactions.
    Master,
    /// Answers them.
    Slave,
}

/// Final outcome of a transaction, reported once per finalized exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// No transaction has completed yet.
    None,
    /// A frame arrived and passed the role-appropriate validity check.
    Success,
    /// The bitstream or the frame was malformed: bad start bit, stray edge
    /// timing, parity failure, or a message type outside the expected
    /// family (a RESERVED frame resolves here too, not to a third state).
    Invalid,
    /// No valid frame arrived within the response timeout.
    Timeout,
}

impl ResponseOutcome {
    /// Canonical name, matching the protocol vocabulary.
    pub fn name(self) -> &'static str {
        match self {
            ResponseOutcome::None => "NONE",
            ResponseOutcome::Success => "SUCCESS",
            ResponseOutcome::Invalid => "INVALID",
            ResponseOutcome::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for ResponseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase of the transaction lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPhase {
    /// Constructed but the line has not been initialized.
    Uninitialized,
    /// Idle; a new transaction may start.
    Ready,
    /// Post-transaction settle interval before returning to ready.
    Delay,
    /// Transient: held only during the synchronous transmit burst.
    Sending,
    /// Expecting the start bit of an incoming frame.
    Waiting,
    /// Start-bit leading edge seen; expecting its mid-bit transition.
    StartBitSeen,
    /// Accumulating data bits.
    Receiving,
    /// 32 bits plus stop bit collected; awaiting finalization by poll.
    FrameReady,
    /// Framing violated; awaiting finalization by poll.
    Invalid,
}

impl fmt::Display for LinkPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkPhase::Uninitialized => "uninitialized",
            LinkPhase::Ready => "ready",
            LinkPhase::Delay => "delay",
            LinkPhase::Sending => "sending",
            LinkPhase::Waiting => "waiting",
            LinkPhase::StartBitSeen => "start-bit-seen",
            LinkPhase::Receiving => "receiving",
            LinkPhase::FrameReady => "frame-ready",
            LinkPhase::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// The single mutable record of an in-flight transaction.
///
/// `on_edge` is the sole writer of the receive-path fields (`accumulator`,
/// `bit_count`); the poll side reads them only after observing a terminal
/// phase. All cross-context access goes through one mutex in
/// [`crate::Link`].
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) phase: LinkPhase,
    pub(crate) accumulator: u32,
    pub(crate) bit_count: u8,
    pub(crate) last_edge_micros: u32,
    pub(crate) last_response: u32,
    pub(crate) outcome: ResponseOutcome,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            phase: LinkPhase::Uninitialized,
            accumulator: 0,
            bit_count: 0,
            last_edge_micros: 0,
            last_response: 0,
            outcome: ResponseOutcome::None,
        }
    }

    /// Drive the receive state machine with one level-change event.
    ///
    /// Spurious edges are tolerated by timing classification alone: edges
    /// spaced below the threshold are the expected mid-bit transitions of
    /// the biphase code and are ignored while receiving.
    pub(crate) fn on_edge(&mut self, level: Level, now: u32, role: Role, config: &LinkConfig) {
        if self.phase == LinkPhase::Ready {
            // Only a slave is woken by the line going active; a master in
            // ready ignores stray edges entirely.
            if role == Role::Slave && level.is_active() {
                self.phase = LinkPhase::Waiting;
            } else {
                return;
            }
        }

        match self.phase {
            LinkPhase::Waiting => {
                if level.is_active() {
                    self.phase = LinkPhase::StartBitSeen;
                } else {
                    self.phase = LinkPhase::Invalid;
                }
                self.last_edge_micros = now;
            }
            LinkPhase::StartBitSeen => {
                // The start bit's own mid-bit transition must arrive below
                // the threshold and settle the line back to idle; anything
                // else is a malformed start bit.
                let elapsed = elapsed_micros(now, self.last_edge_micros);
                if elapsed < config.edge_threshold_micros && !level.is_active() {
                    self.phase = LinkPhase::Receiving;
                    self.accumulator = 0;
                    self.bit_count = 0;
                } else {
                    self.phase = LinkPhase::Invalid;
                }
                self.last_edge_micros = now;
            }
            LinkPhase::Receiving => {
                if elapsed_micros(now, self.last_edge_micros) > config.edge_threshold_micros {
                    if self.bit_count < 32 {
                        // The level after a bit-boundary transition is the
                        // second half-cell of the bit, so the bit value is
                        // its complement.
                        let bit = u32::from(!level.is_active());
                        self.accumulator = (self.accumulator << 1) | bit;
                        self.bit_count += 1;
                    } else {
                        // 33rd qualifying edge is the stop bit.
                        self.phase = LinkPhase::FrameReady;
                    }
                    self.last_edge_micros = now;
                }
            }
            _ => {}
        }
    }
}
