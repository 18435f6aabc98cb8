//! Protocol data-item identifiers.
//!
//! Pure data: one variant per data point the protocol defines, with its
//! wire byte as the discriminant and a display-name table. The numbering
//! has gaps; [`DataId::from_u8`] resolves only defined identifiers.

use std::fmt;

use crate::error::FrameError;

/// Identifier of a protocol data item (bits 23-16 of a frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataId {
    /// Master and slave status flag words.
    Status = 0,
    /// Central-heating water temperature setpoint (f8.8, °C).
    ControlSetpoint = 1,
    /// Master configuration flags / member id.
    MasterConfig = 2,
    /// Slave configuration flags / member id.
    SlaveConfig = 3,
    /// Remote command request.
    RemoteCommand = 4,
    /// Application-specific fault flags and OEM fault code.
    FaultFlags = 5,
    /// Remote-parameter transfer-enable and read/write flags.
    RemoteParameterFlags = 6,
    /// Cooling control signal (f8.8, %).
    CoolingControl = 7,
    /// Control setpoint for the second heating circuit (f8.8, °C).
    ControlSetpointCh2 = 8,
    /// Remote override of the room setpoint (f8.8, °C).
    RoomSetpointOverride = 9,
    /// Number of transparent slave parameters supported.
    TspCount = 10,
    /// Transparent slave parameter index / value.
    TspEntry = 11,
    /// Size of the fault-history buffer.
    FaultBufferSize = 12,
    /// Fault-history buffer index / value.
    FaultBufferEntry = 13,
    /// Maximum relative modulation level setting (f8.8, %).
    MaxModulationLevel = 14,
    /// Maximum boiler capacity (kW) / minimum modulation level (%).
    BoilerCapacity = 15,
    /// Room setpoint (f8.8, °C).
    RoomSetpoint = 16,
    /// Relative modulation level (f8.8, %).
    ModulationLevel = 17,
    /// Central-heating circuit water pressure (f8.8, bar).
    ChWaterPressure = 18,
    /// Domestic hot water flow rate (f8.8, l/min).
    DhwFlowRate = 19,
    /// Day of week and time of day.
    DayTime = 20,
    /// Calendar date.
    Date = 21,
    /// Calendar year.
    Year = 22,
    /// Room setpoint for the second heating circuit (f8.8, °C).
    RoomSetpointCh2 = 23,
    /// Room temperature (f8.8, °C).
    RoomTemperature = 24,
    /// Boiler flow water temperature (f8.8, °C).
    BoilerTemperature = 25,
    /// Domestic hot water temperature (f8.8, °C).
    DhwTemperature = 26,
    /// Outside temperature (f8.8, °C).
    OutsideTemperature = 27,
    /// Return water temperature (f8.8, °C).
    ReturnTemperature = 28,
    /// Solar storage temperature (f8.8, °C).
    SolarStorageTemperature = 29,
    /// Solar collector temperature (f8.8, °C).
    SolarCollectorTemperature = 30,
    /// Flow water temperature of the second circuit (f8.8, °C).
    FlowTemperatureCh2 = 31,
    /// Second domestic hot water temperature (f8.8, °C).
    DhwTemperature2 = 32,
    /// Boiler exhaust temperature (s16, °C).
    ExhaustTemperature = 33,
    /// Boiler heat exchanger temperature (f8.8, °C).
    HeatExchangerTemperature = 34,
    /// Boiler fan speed setpoint and actual value.
    FanSpeed = 35,
    /// Electrical current through the burner flame (f8.8, µA).
    FlameCurrent = 36,
    /// Room temperature of the second circuit (f8.8, °C).
    RoomTemperatureCh2 = 37,
    /// Actual relative humidity (f8.8, %).
    RelativeHumidity = 38,
    /// Second remote override of the room setpoint (f8.8, °C).
    RoomSetpointOverride2 = 39,
    /// Adjustment bounds for the DHW setpoint (s8/s8, °C).
    DhwSetpointBounds = 48,
    /// Adjustment bounds for the max CH setpoint (s8/s8, °C).
    MaxChSetpointBounds = 49,
    /// Domestic hot water setpoint (f8.8, °C).
    DhwSetpoint = 56,
    /// Maximum central-heating water setpoint (f8.8, °C).
    MaxChSetpoint = 57,
    /// Ventilation / heat-recovery status flags.
    VentilationStatus = 70,
    /// Relative ventilation position setpoint (%).
    VentilationSetpoint = 71,
    /// Ventilation fault flags and OEM fault code.
    VentilationFaultFlags = 72,
    /// Ventilation OEM diagnostic code.
    VentilationDiagnosticCode = 73,
    /// Ventilation slave configuration flags / member id.
    VentilationConfig = 74,
    /// Protocol version implemented by the ventilation unit (f8.8).
    VentilationProtocolVersion = 75,
    /// Ventilation product version and type.
    VentilationVersion = 76,
    /// Relative ventilation level (%).
    VentilationLevel = 77,
    /// Exhaust air relative humidity (%).
    ExhaustHumidity = 78,
    /// Exhaust air CO2 level (ppm).
    ExhaustCo2 = 79,
    /// Supply inlet temperature (f8.8, °C).
    SupplyInletTemperature = 80,
    /// Supply outlet temperature (f8.8, °C).
    SupplyOutletTemperature = 81,
    /// Exhaust inlet temperature (f8.8, °C).
    ExhaustInletTemperature = 82,
    /// Exhaust outlet temperature (f8.8, °C).
    ExhaustOutletTemperature = 83,
    /// Exhaust fan speed (rpm).
    ExhaustFanSpeed = 84,
    /// Supply fan speed (rpm).
    SupplyFanSpeed = 85,
    /// Ventilation remote-parameter flags.
    VentilationParameterFlags = 86,
    /// Nominal relative ventilation value (%).
    NominalVentilation = 87,
    /// Ventilation transparent slave parameter count.
    VentilationTspCount = 88,
    /// Ventilation transparent slave parameter index / value.
    VentilationTspEntry = 89,
    /// Ventilation fault-history buffer size.
    VentilationFaultBufferSize = 90,
    /// Ventilation fault-history buffer index / value.
    VentilationFaultBufferEntry = 91,
    /// Brand name character lookup.
    Brand = 93,
    /// Brand version character lookup.
    BrandVersion = 94,
    /// Brand serial number character lookup.
    BrandSerialNumber = 95,
    /// Hours spent in cooling mode.
    CoolingOperationHours = 96,
    /// Number of slave power cycles.
    PowerCycles = 97,
    /// RF sensor strength and battery level.
    RfSensorStatus = 98,
    /// Remote override of the operating modes.
    RemoteOperatingMode = 99,
    /// Function of manual and program setpoint changes.
    RemoteOverrideFunction = 100,
    /// Solar storage status flags.
    SolarStorageStatus = 101,
    /// Solar storage fault flags and OEM fault code.
    SolarStorageFaultFlags = 102,
    /// Solar storage configuration flags / member id.
    SolarStorageConfig = 103,
    /// Solar storage product version and type.
    SolarStorageVersion = 104,
    /// Solar storage transparent slave parameter count.
    SolarStorageTspCount = 105,
    /// Solar storage transparent slave parameter index / value.
    SolarStorageTspEntry = 106,
    /// Solar storage fault-history buffer size.
    SolarStorageFaultBufferSize = 107,
    /// Solar storage fault-history buffer index / value.
    SolarStorageFaultBufferEntry = 108,
    /// Number of electricity producer starts.
    ElectricityProducerStarts = 109,
    /// Hours the electricity producer has been in operation.
    ElectricityProducerHours = 110,
    /// Current electricity production (W).
    ElectricityProduction = 111,
    /// Cumulative electricity production (kWh).
    CumulativeElectricityProduction = 112,
    /// Number of unsuccessful burner starts.
    UnsuccessfulBurnerStarts = 113,
    /// Number of times the flame signal was too low.
    FlameSignalTooLowCount = 114,
    /// OEM-specific diagnostic or service code.
    OemDiagnosticCode = 115,
    /// Number of successful burner starts.
    BurnerStarts = 116,
    /// Number of central-heating pump starts.
    ChPumpStarts = 117,
    /// Number of DHW pump/valve starts.
    DhwPumpValveStarts = 118,
    /// Number of burner starts in DHW mode.
    DhwBurnerStarts = 119,
    /// Hours the burner has been in operation.
    BurnerOperationHours = 120,
    /// Hours the central-heating pump has been running.
    ChPumpOperationHours = 121,
    /// Hours the DHW pump has run or the DHW valve been open.
    DhwPumpValveOperationHours = 122,
    /// Hours the burner has operated in DHW mode.
    DhwBurnerOperationHours = 123,
    /// Protocol version implemented by the master (f8.8).
    MasterProtocolVersion = 124,
    /// Protocol version implemented by the slave (f8.8).
    SlaveProtocolVersion = 125,
    /// Master product version and type.
    MasterVersion = 126,
    /// Slave product version and type.
    SlaveVersion = 127,
}

impl DataId {
    /// All defined data-item identifiers, in wire order.
    pub const ALL: &'static [DataId] = &[
        DataId::Status,
        DataId::ControlSetpoint,
        DataId::MasterConfig,
        DataId::SlaveConfig,
        DataId::RemoteCommand,
        DataId::FaultFlags,
        DataId::RemoteParameterFlags,
        DataId::CoolingControl,
        DataId::ControlSetpointCh2,
        DataId::RoomSetpointOverride,
        DataId::TspCount,
        DataId::TspEntry,
        DataId::FaultBufferSize,
        DataId::FaultBufferEntry,
        DataId::MaxModulationLevel,
        DataId::BoilerCapacity,
        DataId::RoomSetpoint,
        DataId::ModulationLevel,
        DataId::ChWaterPressure,
        DataId::DhwFlowRate,
        DataId::DayTime,
        DataId::Date,
        DataId::Year,
        DataId::RoomSetpointCh2,
        DataId::RoomTemperature,
        DataId::BoilerTemperature,
        DataId::DhwTemperature,
        DataId::OutsideTemperature,
        DataId::ReturnTemperature,
        DataId::SolarStorageTemperature,
        DataId::SolarCollectorTemperature,
        DataId::FlowTemperatureCh2,
        DataId::DhwTemperature2,
        DataId::ExhaustTemperature,
        DataId::HeatExchangerTemperature,
        DataId::FanSpeed,
        DataId::FlameCurrent,
        DataId::RoomTemperatureCh2,
        DataId::RelativeHumidity,
        DataId::RoomSetpointOverride2,
        DataId::DhwSetpointBounds,
        DataId::MaxChSetpointBounds,
        DataId::DhwSetpoint,
        DataId::MaxChSetpoint,
        DataId::VentilationStatus,
        DataId::VentilationSetpoint,
        DataId::VentilationFaultFlags,
        DataId::VentilationDiagnosticCode,
        DataId::VentilationConfig,
        DataId::VentilationProtocolVersion,
        DataId::VentilationVersion,
        DataId::VentilationLevel,
        DataId::ExhaustHumidity,
        DataId::ExhaustCo2,
        DataId::SupplyInletTemperature,
        DataId::SupplyOutletTemperature,
        DataId::ExhaustInletTemperature,
        DataId::ExhaustOutletTemperature,
        DataId::ExhaustFanSpeed,
        DataId::SupplyFanSpeed,
        DataId::VentilationParameterFlags,
        DataId::NominalVentilation,
        DataId::VentilationTspCount,
        DataId::VentilationTspEntry,
        DataId::VentilationFaultBufferSize,
        DataId::VentilationFaultBufferEntry,
        DataId::Brand,
        DataId::BrandVersion,
        DataId::BrandSerialNumber,
        DataId::CoolingOperationHours,
        DataId::PowerCycles,
        DataId::RfSensorStatus,
        DataId::RemoteOperatingMode,
        DataId::RemoteOverrideFunction,
        DataId::SolarStorageStatus,
        DataId::SolarStorageFaultFlags,
        DataId::SolarStorageConfig,
        DataId::SolarStorageVersion,
        DataId::SolarStorageTspCount,
        DataId::SolarStorageTspEntry,
        DataId::SolarStorageFaultBufferSize,
        DataId::SolarStorageFaultBufferEntry,
        DataId::ElectricityProducerStarts,
        DataId::ElectricityProducerHours,
        DataId::ElectricityProduction,
        DataId::CumulativeElectricityProduction,
        DataId::UnsuccessfulBurnerStarts,
        DataId::FlameSignalTooLowCount,
        DataId::OemDiagnosticCode,
        DataId::BurnerStarts,
        DataId::ChPumpStarts,
        DataId::DhwPumpValveStarts,
        DataId::DhwBurnerStarts,
        DataId::BurnerOperationHours,
        DataId::ChPumpOperationHours,
        DataId::DhwPumpValveOperationHours,
        DataId::DhwBurnerOperationHours,
        DataId::MasterProtocolVersion,
        DataId::SlaveProtocolVersion,
        DataId::MasterVersion,
        DataId::SlaveVersion,
    ];

    /// Resolve a wire byte to a defined identifier.
    pub fn from_u8(raw: u8) -> Option<DataId> {
        // The table is sorted by discriminant, so a binary search keyed on
        // the wire byte resolves gaps without a 128-arm match.
        DataId::ALL
            .binary_search_by_key(&raw, |id| *id as u8)
            .ok()
            .map(|index| DataId::ALL[index])
    }

    /// The wire byte.
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Display name, matching the variant name.
    pub fn name(self) -> &'static str {
        match self {
            DataId::Status => "Status",
            DataId::ControlSetpoint => "ControlSetpoint",
            DataId::MasterConfig => "MasterConfig",
            DataId::SlaveConfig => "SlaveConfig",
            DataId::RemoteCommand => "RemoteCommand",
            DataId::FaultFlags => "FaultFlags",
            DataId::RemoteParameterFlags => "RemoteParameterFlags",
            DataId::CoolingControl => "CoolingControl",
            DataId::ControlSetpointCh2 => "ControlSetpointCh2",
            DataId::RoomSetpointOverride => "RoomSetpointOverride",
            DataId::TspCount => "TspCount",
            DataId::TspEntry => "TspEntry",
            DataId::FaultBufferSize => "FaultBufferSize",
            DataId::FaultBufferEntry => "FaultBufferEntry",
            DataId::MaxModulationLevel => "MaxModulationLevel",
            DataId::BoilerCapacity => "BoilerCapacity",
            DataId::RoomSetpoint => "RoomSetpoint",
            DataId::ModulationLevel => "ModulationLevel",
            DataId::ChWaterPressure => "ChWaterPressure",
            DataId::DhwFlowRate => "DhwFlowRate",
            DataId::DayTime => "DayTime",
            DataId::Date => "Date",
            DataId::Year => "Year",
            DataId::RoomSetpointCh2 => "RoomSetpointCh2",
            DataId::RoomTemperature => "RoomTemperature",
            DataId::BoilerTemperature => "BoilerTemperature",
            DataId::DhwTemperature => "DhwTemperature",
            DataId::OutsideTemperature => "OutsideTemperature",
            DataId::ReturnTemperature => "ReturnTemperature",
            DataId::SolarStorageTemperature => "SolarStorageTemperature",
            DataId::SolarCollectorTemperature => "SolarCollectorTemperature",
            DataId::FlowTemperatureCh2 => "FlowTemperatureCh2",
            DataId::DhwTemperature2 => "DhwTemperature2",
            DataId::ExhaustTemperature => "ExhaustTemperature",
            DataId::HeatExchangerTemperature => "HeatExchangerTemperature",
            DataId::FanSpeed => "FanSpeed",
            DataId::FlameCurrent => "FlameCurrent",
            DataId::RoomTemperatureCh2 => "RoomTemperatureCh2",
            DataId::RelativeHumidity => "RelativeHumidity",
            DataId::RoomSetpointOverride2 => "RoomSetpointOverride2",
            DataId::DhwSetpointBounds => "DhwSetpointBounds",
            DataId::MaxChSetpointBounds => "MaxChSetpointBounds",
            DataId::DhwSetpoint => "DhwSetpoint",
            DataId::MaxChSetpoint => "MaxChSetpoint",
            DataId::VentilationStatus => "VentilationStatus",
            DataId::VentilationSetpoint => "VentilationSetpoint",
            DataId::VentilationFaultFlags => "VentilationFaultFlags",
            DataId::VentilationDiagnosticCode => "VentilationDiagnosticCode",
            DataId::VentilationConfig => "VentilationConfig",
            DataId::VentilationProtocolVersion => "VentilationProtocolVersion",
            DataId::VentilationVersion => "VentilationVersion",
            DataId::VentilationLevel => "VentilationLevel",
            DataId::ExhaustHumidity => "ExhaustHumidity",
            DataId::ExhaustCo2 => "ExhaustCo2",
            DataId::SupplyInletTemperature => "SupplyInletTemperature",
            DataId::SupplyOutletTemperature => "SupplyOutletTemperature",
            DataId::ExhaustInletTemperature => "ExhaustInletTemperature",
            DataId::ExhaustOutletTemperature => "ExhaustOutletTemperature",
            DataId::ExhaustFanSpeed => "ExhaustFanSpeed",
            DataId::SupplyFanSpeed => "SupplyFanSpeed",
            DataId::VentilationParameterFlags => "VentilationParameterFlags",
            DataId::NominalVentilation => "NominalVentilation",
            DataId::VentilationTspCount => "VentilationTspCount",
            DataId::VentilationTspEntry => "VentilationTspEntry",
            DataId::VentilationFaultBufferSize => "VentilationFaultBufferSize",
            DataId::VentilationFaultBufferEntry => "VentilationFaultBufferEntry",
            DataId::Brand => "Brand",
            DataId::BrandVersion => "BrandVersion",
            DataId::BrandSerialNumber => "BrandSerialNumber",
            DataId::CoolingOperationHours => "CoolingOperationHours",
            DataId::PowerCycles => "PowerCycles",
            DataId::RfSensorStatus => "RfSensorStatus",
            DataId::RemoteOperatingMode => "RemoteOperatingMode",
            DataId::RemoteOverrideFunction => "RemoteOverrideFunction",
            DataId::SolarStorageStatus => "SolarStorageStatus",
            DataId::SolarStorageFaultFlags => "SolarStorageFaultFlags",
            DataId::SolarStorageConfig => "SolarStorageConfig",
            DataId::SolarStorageVersion => "SolarStorageVersion",
            DataId::SolarStorageTspCount => "SolarStorageTspCount",
            DataId::SolarStorageTspEntry => "SolarStorageTspEntry",
            DataId::SolarStorageFaultBufferSize => "SolarStorageFaultBufferSize",
            DataId::SolarStorageFaultBufferEntry => "SolarStorageFaultBufferEntry",
            DataId::ElectricityProducerStarts => "ElectricityProducerStarts",
            DataId::ElectricityProducerHours => "ElectricityProducerHours",
            DataId::ElectricityProduction => "ElectricityProduction",
            DataId::CumulativeElectricityProduction => "CumulativeElectricityProduction",
            DataId::UnsuccessfulBurnerStarts => "UnsuccessfulBurnerStarts",
            DataId::FlameSignalTooLowCount => "FlameSignalTooLowCount",
            DataId::OemDiagnosticCode => "OemDiagnosticCode",
            DataId::BurnerStarts => "BurnerStarts",
            DataId::ChPumpStarts => "ChPumpStarts",
            DataId::DhwPumpValveStarts => "DhwPumpValveStarts",
            DataId::DhwBurnerStarts => "DhwBurnerStarts",
            DataId::BurnerOperationHours => "BurnerOperationHours",
            DataId::ChPumpOperationHours => "ChPumpOperationHours",
            DataId::DhwPumpValveOperationHours => "DhwPumpValveOperationHours",
            DataId::DhwBurnerOperationHours => "DhwBurnerOperationHours",
            DataId::MasterProtocolVersion => "MasterProtocolVersion",
            DataId::SlaveProtocolVersion => "SlaveProtocolVersion",
            DataId::MasterVersion => "MasterVersion",
            DataId::SlaveVersion => "SlaveVersion",
        }
    }
}

impl fmt::Display for DataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for DataId {
    type Error = FrameError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        DataId::from_u8(raw).ok_or(FrameError::UnknownDataId(raw))
    }
}

impl From<DataId> for u8 {
    fn from(id: DataId) -> u8 {
        id.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_and_unique() {
        for pair in DataId::ALL.windows(2) {
            assert!(pair[0].raw() < pair[1].raw());
        }
    }

    #[test]
    fn resolves_defined_ids() {
        assert_eq!(DataId::from_u8(0), Some(DataId::Status));
        assert_eq!(DataId::from_u8(25), Some(DataId::BoilerTemperature));
        assert_eq!(DataId::from_u8(57), Some(DataId::MaxChSetpoint));
        assert_eq!(DataId::from_u8(127), Some(DataId::SlaveVersion));
    }

    #[test]
    fn rejects_gaps_and_out_of_range() {
        assert_eq!(DataId::from_u8(40), None);
        assert_eq!(DataId::from_u8(69), None);
        assert_eq!(DataId::from_u8(92), None);
        assert_eq!(DataId::from_u8(200), None);
        assert!(matches!(
            DataId::try_from(40),
            Err(FrameError::UnknownDataId(40))
        ));
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(DataId::Status.name(), "Status");
        assert_eq!(DataId::BoilerTemperature.to_string(), "BoilerTemperature");
    }
}
