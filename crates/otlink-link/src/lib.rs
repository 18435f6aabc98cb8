//! Bit transmitter, receive state machine and transaction lifecycle for
//! the otlink master/slave protocol.
//!
//! The protocol is strictly request/response: the master transmits a
//! 34-bit biphase burst, the slave answers within one second, and both
//! sides observe a settle interval before the next exchange. This crate
//! turns level-change events from an [`otlink_line::LineDriver`] into
//! finalized transactions:
//!
//! - [`Link`] owns the line and the lifecycle; drive it with
//!   [`Link::poll`] from a main loop.
//! - [`EdgeHandle`] delivers timestamped edges from an interrupt shim or
//!   listener thread.
//! - [`ResponseOutcome`] tells a transaction's fate: success, invalid, or
//!   timeout.
//!
//! ```
//! use otlink_frame::{DataId, Frame, MessageType};
//! use otlink_line::{SimClock, SimulatedLine};
//! use otlink_link::{Link, Role};
//!
//! let clock = SimClock::new();
//! let mut link = Link::new(SimulatedLine::new(clock), Role::Master);
//! link.begin();
//! assert!(link.is_ready());
//! link.send_async(Frame::request(MessageType::ReadData, DataId::Status, 0)).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod session;

mod transmitter;

pub use config::LinkConfig;
pub use error::{LinkError, Result};
pub use link::{EdgeHandle, Link, ResponseHandler};
pub use session::{LinkPhase, ResponseOutcome, Role};
