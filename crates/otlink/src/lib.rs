//! Master/slave biphase protocol engine for heating controller to boiler
//! links.
//!
//! otlink implements the 32-bit framed, biphase-encoded request/response
//! protocol spoken between a heating controller (master) and a boiler
//! (slave) over a two-wire current/voltage loop.
//!
//! # Crate Structure
//!
//! - [`line`] — Physical line abstraction: levels, the driver trait, and
//!   a deterministic simulated line for tests
//! - [`frame`] — Stateless 32-bit frame codec: parity, message types,
//!   data identifiers, fixed-point conversions
//! - [`link`] — The engine: bit transmitter, receive state machine and
//!   transaction lifecycle

/// Re-export line types.
pub mod line {
    pub use otlink_line::*;
}

/// Re-export frame types.
pub mod frame {
    pub use otlink_frame::*;
}

/// Re-export link types.
pub mod link {
    pub use otlink_link::*;
}
