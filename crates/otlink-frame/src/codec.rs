use std::fmt;

use crate::data_id::DataId;
use crate::error::FrameError;
use crate::message::MessageType;

/// Bit position of the parity bit.
pub const PARITY_BIT: u32 = 1 << 31;

const MSG_TYPE_SHIFT: u32 = 28;
const DATA_ID_SHIFT: u32 = 16;

/// A 32-bit protocol frame.
///
/// Wire layout, most significant bit first:
///
/// ```text
/// ┌────────┬───────────┬─────────┬──────────┬─────────────┐
/// │ bit 31 │ bits 30-28│ 27-24   │ 23-16    │ 15-0        │
/// │ parity │ msg type  │ spare=0 │ data id  │ data value  │
/// └────────┴───────────┴─────────┴──────────┴─────────────┘
/// ```
///
/// The parity bit is chosen so the total set-bit count of the frame is
/// even. A frame with odd parity is invalid and must never be acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame(u32);

/// True if the 32-bit word has an odd number of set bits.
///
/// An odd raw count means the parity bit must be set to restore evenness;
/// on a complete frame, true means the frame is corrupt.
pub fn parity(word: u32) -> bool {
    word.count_ones() % 2 == 1
}

/// Encode a temperature in °C as the fixed-point 8.8 data value.
///
/// Input is clamped to the protocol's 0-100 °C setpoint range.
pub fn temperature_to_data(celsius: f32) -> u16 {
    let clamped = celsius.clamp(0.0, 100.0);
    (clamped * 256.0).round() as u16
}

/// Decode a fixed-point 8.8 data value, two's complement over 16 bits.
pub fn f88_to_float(raw: u16) -> f32 {
    if raw & 0x8000 != 0 {
        -((0x1_0000 - u32::from(raw)) as f32) / 256.0
    } else {
        f32::from(raw) / 256.0
    }
}

impl Frame {
    /// Wrap a raw 32-bit wire value. No validation happens here; use the
    /// `is_valid_*` checks before acting on a received frame.
    pub const fn from_raw(raw: u32) -> Self {
        Frame(raw)
    }

    /// The raw 32-bit wire value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Parse a frame from up to 8 hex digits, with or without `0x`.
    pub fn from_hex(input: &str) -> Result<Self, FrameError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 8 {
            return Err(FrameError::InvalidHex(input.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Frame)
            .map_err(|_| FrameError::InvalidHex(input.to_string()))
    }

    /// Build a master→slave frame.
    ///
    /// Any write maps to [`MessageType::WriteData`]; every other type maps
    /// to [`MessageType::ReadData`]. The parity bit is installed last.
    pub fn request(msg_type: MessageType, id: DataId, data: u16) -> Self {
        let mut word = u32::from(data);
        if msg_type == MessageType::WriteData {
            word |= 1 << MSG_TYPE_SHIFT;
        }
        word |= u32::from(id.raw()) << DATA_ID_SHIFT;
        if parity(word) {
            word |= PARITY_BIT;
        }
        Frame(word)
    }

    /// Build a slave→master frame with an explicit message type (ACK or
    /// NACK family). The parity bit is installed last.
    pub fn response(msg_type: MessageType, id: DataId, data: u16) -> Self {
        let mut word = u32::from(data);
        word |= u32::from(msg_type.bits()) << MSG_TYPE_SHIFT;
        word |= u32::from(id.raw()) << DATA_ID_SHIFT;
        if parity(word) {
            word |= PARITY_BIT;
        }
        Frame(word)
    }

    /// True iff parity is even and the message type is READ or WRITE.
    pub fn is_valid_request(self) -> bool {
        !parity(self.0)
            && matches!(
                self.msg_type(),
                MessageType::ReadData | MessageType::WriteData
            )
    }

    /// True iff parity is even and the message type is READ_ACK or
    /// WRITE_ACK.
    pub fn is_valid_response(self) -> bool {
        !parity(self.0)
            && matches!(self.msg_type(), MessageType::ReadAck | MessageType::WriteAck)
    }

    /// The 3-bit message type field.
    pub fn msg_type(self) -> MessageType {
        MessageType::from_bits(((self.0 >> MSG_TYPE_SHIFT) & 0x7) as u8)
    }

    /// The raw data-item identifier byte.
    pub fn data_id_raw(self) -> u8 {
        ((self.0 >> DATA_ID_SHIFT) & 0xFF) as u8
    }

    /// The data-item identifier, if it is a defined data point.
    pub fn data_id(self) -> Option<DataId> {
        DataId::from_u8(self.data_id_raw())
    }

    /// The 16-bit data value.
    pub fn data_value(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// High byte of the data value (first of two packed 8-bit fields).
    pub fn high_byte(self) -> u8 {
        (self.data_value() >> 8) as u8
    }

    /// Low byte of the data value (second of two packed 8-bit fields).
    pub fn low_byte(self) -> u8 {
        (self.data_value() & 0xFF) as u8
    }

    /// The data value decoded as fixed-point 8.8.
    pub fn to_f88(self) -> f32 {
        f88_to_float(self.data_value())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl From<u32> for Frame {
    fn from(raw: u32) -> Self {
        Frame(raw)
    }
}

impl From<Frame> for u32 {
    fn from(frame: Frame) -> u32 {
        frame.raw()
    }
}
