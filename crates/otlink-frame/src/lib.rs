//! 32-bit frame codec for the otlink master/slave protocol.
//!
//! This is the pure, stateless layer of the engine. Every frame is a single
//! 32-bit word:
//! - A parity bit keeping the total set-bit count even
//! - A 3-bit message type (read/write requests, ack/nack responses)
//! - An 8-bit data-item identifier
//! - A 16-bit data value (u16, s16, packed bytes, or fixed-point 8.8)
//!
//! Decoding is total: fields are always masked to their declared widths, so
//! malformed frames are rejected by the validity checks, never by panics.

pub mod codec;
pub mod data_id;
pub mod error;
pub mod message;
pub mod status;

pub use codec::{f88_to_float, parity, temperature_to_data, Frame, PARITY_BIT};
pub use data_id::DataId;
pub use error::{FrameError, Result};
pub use message::MessageType;
pub use status::MasterStatus;
