use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;

/// 3-bit message-type field of a frame (bits 30-28).
///
/// The low four codes travel master→slave, the high four slave→master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    /// Master→slave: read a data item.
    ReadData = 0,
    /// Master→slave: write a data item.
    WriteData = 1,
    /// Master→slave: the previous data value was invalid.
    InvalidData = 2,
    /// Master→slave: reserved, never sent by conforming masters.
    Reserved = 3,
    /// Slave→master: read acknowledged, data value attached.
    ReadAck = 4,
    /// Slave→master: write acknowledged.
    WriteAck = 5,
    /// Slave→master: the data item is known but the value is invalid.
    DataInvalid = 6,
    /// Slave→master: the data item is not supported.
    UnknownDataId = 7,
}

impl MessageType {
    /// Decode from the 3-bit wire field. Total: extra bits are masked off.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x7 {
            0 => MessageType::ReadData,
            1 => MessageType::WriteData,
            2 => MessageType::InvalidData,
            3 => MessageType::Reserved,
            4 => MessageType::ReadAck,
            5 => MessageType::WriteAck,
            6 => MessageType::DataInvalid,
            _ => MessageType::UnknownDataId,
        }
    }

    /// The 3-bit wire encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// True for the four master→slave codes.
    pub fn is_master_to_slave(self) -> bool {
        self.bits() < 4
    }

    /// True for the four slave→master codes.
    pub fn is_slave_to_master(self) -> bool {
        self.bits() >= 4
    }

    /// Canonical protocol name.
    pub fn name(self) -> &'static str {
        match self {
            MessageType::ReadData => "READ_DATA",
            MessageType::WriteData => "WRITE_DATA",
            MessageType::InvalidData => "INVALID_DATA",
            MessageType::Reserved => "RESERVED",
            MessageType::ReadAck => "READ_ACK",
            MessageType::WriteAck => "WRITE_ACK",
            MessageType::DataInvalid => "DATA_INVALID",
            MessageType::UnknownDataId => "UNKNOWN_DATA_ID",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MessageType {
    type Err = FrameError;

    /// Accepts the canonical names case-insensitively, with `-` or `_`
    /// separators, plus the short aliases `read` and `write`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "READ" | "READ_DATA" => Ok(MessageType::ReadData),
            "WRITE" | "WRITE_DATA" => Ok(MessageType::WriteData),
            "INVALID_DATA" => Ok(MessageType::InvalidData),
            "RESERVED" => Ok(MessageType::Reserved),
            "READ_ACK" => Ok(MessageType::ReadAck),
            "WRITE_ACK" => Ok(MessageType::WriteAck),
            "DATA_INVALID" => Ok(MessageType::DataInvalid),
            "UNKNOWN_DATA_ID" => Ok(MessageType::UnknownDataId),
            _ => Err(FrameError::UnknownMessageType(input.to_string())),
        }
    }
}
