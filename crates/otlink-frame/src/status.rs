//! Field helpers for the `Status` data item.
//!
//! A status exchange packs the master's enable flags in the high byte of
//! the data value and the slave's state flags in the low byte. These are
//! plain field extractions over [`Frame::data_value`], not protocol logic.

use crate::codec::Frame;

const FAULT: u16 = 1 << 0;
const CH_ACTIVE: u16 = 1 << 1;
const DHW_ACTIVE: u16 = 1 << 2;
const FLAME_ON: u16 = 1 << 3;
const COOLING_ACTIVE: u16 = 1 << 4;
const DIAGNOSTIC: u16 = 1 << 6;

impl Frame {
    /// Slave status: fault indication.
    pub fn is_fault(self) -> bool {
        self.data_value() & FAULT != 0
    }

    /// Slave status: central heating active.
    pub fn is_central_heating_active(self) -> bool {
        self.data_value() & CH_ACTIVE != 0
    }

    /// Slave status: domestic hot water active.
    pub fn is_hot_water_active(self) -> bool {
        self.data_value() & DHW_ACTIVE != 0
    }

    /// Slave status: flame on.
    pub fn is_flame_on(self) -> bool {
        self.data_value() & FLAME_ON != 0
    }

    /// Slave status: cooling active.
    pub fn is_cooling_active(self) -> bool {
        self.data_value() & COOLING_ACTIVE != 0
    }

    /// Slave status: diagnostic event pending.
    pub fn is_diagnostic(self) -> bool {
        self.data_value() & DIAGNOSTIC != 0
    }
}

/// Master enable flags for the high byte of a `Status` exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MasterStatus {
    /// Enable central heating.
    pub central_heating: bool,
    /// Enable domestic hot water.
    pub hot_water: bool,
    /// Enable cooling.
    pub cooling: bool,
    /// Enable outside temperature compensation.
    pub outside_compensation: bool,
    /// Enable the second central-heating circuit.
    pub central_heating_2: bool,
}

impl MasterStatus {
    /// Pack the flags into the data value (flags in the high byte, slave
    /// byte zeroed).
    pub fn to_data(self) -> u16 {
        let flags = u16::from(self.central_heating)
            | u16::from(self.hot_water) << 1
            | u16::from(self.cooling) << 2
            | u16::from(self.outside_compensation) << 3
            | u16::from(self.central_heating_2) << 4;
        flags << 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_id::DataId;
    use crate::message::MessageType;

    #[test]
    fn slave_status_bits() {
        let frame = Frame::response(MessageType::ReadAck, DataId::Status, 0x000A);
        assert!(!frame.is_fault());
        assert!(frame.is_central_heating_active());
        assert!(!frame.is_hot_water_active());
        assert!(frame.is_flame_on());
        assert!(!frame.is_cooling_active());
        assert!(!frame.is_diagnostic());
    }

    #[test]
    fn diagnostic_bit() {
        let frame = Frame::response(MessageType::ReadAck, DataId::Status, 0x0040);
        assert!(frame.is_diagnostic());
    }

    #[test]
    fn master_flags_pack_into_high_byte() {
        let status = MasterStatus {
            central_heating: true,
            hot_water: true,
            ..MasterStatus::default()
        };
        assert_eq!(status.to_data(), 0x0300);
        assert_eq!(MasterStatus::default().to_data(), 0);

        let all = MasterStatus {
            central_heating: true,
            hot_water: true,
            cooling: true,
            outside_compensation: true,
            central_heating_2: true,
        };
        assert_eq!(all.to_data(), 0x1F00);
    }
}
