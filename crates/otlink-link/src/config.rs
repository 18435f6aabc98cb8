use crate::session::Role;

/// Timing parameters of the link.
///
/// The defaults are the protocol's interoperability constants and should
/// not normally be changed; they are configurable so tests can tighten the
/// slow intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
    /// Duration of half a bit cell. Each bit is two half-cells.
    pub half_bit_micros: u32,
    /// Edge classification threshold: edges closer together than this are
    /// mid-bit clock transitions, edges farther apart are bit boundaries.
    /// Sits between the 500 µs mid-bit and 1000 µs full-bit spacing.
    pub edge_threshold_micros: u32,
    /// Inactivity after which a pending transaction resolves to timeout.
    pub response_timeout_micros: u32,
    /// Minimum idle time a master must leave between transactions.
    pub settle_master_micros: u32,
    /// Minimum idle time a slave must leave before its next exchange.
    /// Shorter than the master's: a slave has to answer quickly.
    pub settle_slave_micros: u32,
    /// How long the line is held idle during initialization before the
    /// link reports ready.
    pub activation_hold_micros: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            half_bit_micros: 500,
            edge_threshold_micros: 750,
            response_timeout_micros: 1_000_000,
            settle_master_micros: 100_000,
            settle_slave_micros: 20_000,
            activation_hold_micros: 1_000_000,
        }
    }
}

impl LinkConfig {
    /// The settle interval for a role.
    pub fn settle_micros(&self, role: Role) -> u32 {
        match role {
            Role::Master => self.settle_master_micros,
            Role::Slave => self.settle_slave_micros,
        }
    }
}
