//! Synchronous biphase transmit path.
//!
//! A frame goes out as a 34-bit burst: start bit, 32 data bits MSB first,
//! stop bit. Each bit occupies two half-cells; a logical one is driven
//! active-then-idle, a zero idle-then-active, so every bit carries a
//! mid-cell transition the receiver can clock from. Start and stop bits
//! are both ones.

use otlink_frame::Frame;
use otlink_line::LineDriver;

/// Transmit one frame, blocking for the duration of the burst
/// (34 bit times; 34 ms at the standard rate).
///
/// Leaves the line idle afterwards. The caller owns the lifecycle phase;
/// this function only moves bits.
pub(crate) fn send_frame<L: LineDriver>(line: &mut L, frame: Frame, half_bit_micros: u32) {
    send_bit(line, true, half_bit_micros);
    let raw = frame.raw();
    for shift in (0..32).rev() {
        send_bit(line, (raw >> shift) & 1 == 1, half_bit_micros);
    }
    send_bit(line, true, half_bit_micros);
    line.drive_idle();
}

fn send_bit<L: LineDriver>(line: &mut L, high: bool, half_bit_micros: u32) {
    if high {
        line.drive_active();
    } else {
        line.drive_idle();
    }
    line.delay_micros(half_bit_micros);
    if high {
        line.drive_idle();
    } else {
        line.drive_active();
    }
    line.delay_micros(half_bit_micros);
}

#[cfg(test)]
mod tests {
    use otlink_line::{Level, SimClock, SimulatedLine};

    use super::*;

    #[test]
    fn burst_duration_is_34_bit_times() {
        let clock = SimClock::new();
        let mut line = SimulatedLine::new(clock.clone());
        send_frame(&mut line, Frame::from_raw(0x8019_2580), 500);
        assert_eq!(clock.now(), 34 * 1000);
        assert_eq!(line.output_level(), Level::Idle);
    }

    #[test]
    fn every_bit_has_a_mid_cell_transition() {
        let mut line = SimulatedLine::new(SimClock::new());
        send_frame(&mut line, Frame::from_raw(0xFFFF_FFFF), 500);
        let edges = line.drain_edges();
        // All-ones frame: every cell is active-then-idle, giving exactly
        // two edges per bit over 34 bits.
        assert_eq!(edges.len(), 68);
        for pair in edges.chunks(2) {
            assert_eq!(pair[0].level, Level::Active);
            assert_eq!(pair[1].level, Level::Idle);
            assert_eq!(pair[1].at_micros - pair[0].at_micros, 500);
        }
    }

    #[test]
    fn leading_edge_is_active_and_immediate() {
        let clock = SimClock::starting_at(7_000);
        let mut line = SimulatedLine::new(clock);
        send_frame(&mut line, Frame::from_raw(0), 500);
        let edges = line.drain_edges();
        assert_eq!(edges[0].level, Level::Active);
        assert_eq!(edges[0].at_micros, 7_000);
    }

    #[test]
    fn zero_bits_invert_the_half_cells() {
        let mut line = SimulatedLine::new(SimClock::new());
        // Start bit (1), then 32 zeros, then stop bit (1).
        send_frame(&mut line, Frame::from_raw(0), 500);
        let edges = line.drain_edges();
        // Start: Active@0, Idle@500. First zero continues idle, so the
        // next edge is the zero's mid-cell at 1500.
        assert_eq!(edges[1].level, Level::Idle);
        assert_eq!(edges[1].at_micros, 500);
        assert_eq!(edges[2].level, Level::Active);
        assert_eq!(edges[2].at_micros, 1_500);
        // Zero-to-zero boundary: Active falls back to Idle at the cell
        // boundary, 2000.
        assert_eq!(edges[3].level, Level::Idle);
        assert_eq!(edges[3].at_micros, 2_000);
    }
}
