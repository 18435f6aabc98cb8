//! End-to-end exchanges between a master and a slave link wired through
//! the simulated line.

use otlink::frame::{temperature_to_data, DataId, Frame, MessageType};
use otlink::line::{SimClock, SimulatedLine};
use otlink::link::{EdgeHandle, Link, LinkError, LinkPhase, ResponseOutcome, Role};

struct Bench {
    clock: SimClock,
    master: Link<SimulatedLine>,
    slave: Link<SimulatedLine>,
}

impl Bench {
    fn new() -> Self {
        let clock = SimClock::new();
        let mut master = Link::new(SimulatedLine::new(clock.clone()), Role::Master);
        let mut slave = Link::new(SimulatedLine::new(clock.clone()), Role::Slave);
        master.begin();
        slave.begin();
        Self {
            clock,
            master,
            slave,
        }
    }

    fn relay_master_to_slave(&mut self) {
        let handle = self.slave.edge_handle();
        relay(&mut self.master, &handle);
    }

    fn relay_slave_to_master(&mut self) {
        let handle = self.master.edge_handle();
        relay(&mut self.slave, &handle);
    }

    /// One full transaction: request out, slave validates, waits out its
    /// settle interval and answers, master validates the reply.
    fn exchange(&mut self, request: Frame, reply: Frame) -> ResponseOutcome {
        self.master.send_async(request).expect("master is ready");
        self.relay_master_to_slave();
        self.slave.poll();
        assert_eq!(self.slave.last_outcome(), ResponseOutcome::Success);
        assert_eq!(self.slave.last_response(), request);

        // 20 ms slave settle before the reply may go out.
        self.clock.advance(20_001);
        self.slave.poll();
        self.slave.send_reply(reply).expect("slave is ready");
        self.relay_slave_to_master();
        self.master.poll();
        self.master.last_outcome()
    }
}

fn relay(sender: &mut Link<SimulatedLine>, receiver: &EdgeHandle) {
    for edge in sender.line_mut().drain_edges() {
        receiver.handle_edge(edge.level, edge.at_micros);
    }
}

#[test]
fn read_boiler_temperature_round_trip() {
    let mut bench = Bench::new();
    let request = Frame::request(MessageType::ReadData, DataId::BoilerTemperature, 0);
    let reply = Frame::response(
        MessageType::ReadAck,
        DataId::BoilerTemperature,
        temperature_to_data(48.5),
    );

    assert_eq!(bench.exchange(request, reply), ResponseOutcome::Success);
    let response = bench.master.last_response();
    assert_eq!(response, reply);
    assert_eq!(response.data_id(), Some(DataId::BoilerTemperature));
    assert_eq!(response.to_f88(), 48.5);
}

#[test]
fn write_setpoint_round_trip() {
    let mut bench = Bench::new();
    let data = temperature_to_data(60.0);
    let request = Frame::request(MessageType::WriteData, DataId::ControlSetpoint, data);
    let reply = Frame::response(MessageType::WriteAck, DataId::ControlSetpoint, data);

    assert_eq!(bench.exchange(request, reply), ResponseOutcome::Success);
    assert_eq!(bench.master.last_response().msg_type(), MessageType::WriteAck);
}

#[test]
fn nack_replies_finalize_as_invalid() {
    // DATA_INVALID and UNKNOWN_DATAID are complete frames outside the ACK
    // family; the master reports them as invalid responses.
    for msg_type in [MessageType::DataInvalid, MessageType::UnknownDataId] {
        let mut bench = Bench::new();
        let request = Frame::request(MessageType::ReadData, DataId::OutsideTemperature, 0);
        let reply = Frame::response(msg_type, DataId::OutsideTemperature, 0);
        assert_eq!(bench.exchange(request, reply), ResponseOutcome::Invalid);
    }
}

#[test]
fn silent_slave_times_out_the_master() {
    let mut bench = Bench::new();
    let request = Frame::request(MessageType::ReadData, DataId::Status, 0x0300);
    bench.master.send_async(request).expect("master is ready");
    bench.relay_master_to_slave();
    bench.slave.poll();
    assert_eq!(bench.slave.last_outcome(), ResponseOutcome::Success);

    bench.clock.advance(1_000_001);
    bench.master.poll();
    assert_eq!(bench.master.last_outcome(), ResponseOutcome::Timeout);
    assert!(bench.master.is_ready());
}

#[test]
fn master_observes_settle_before_next_request() {
    let mut bench = Bench::new();
    let request = Frame::request(MessageType::ReadData, DataId::Status, 0x0300);
    let reply = Frame::response(MessageType::ReadAck, DataId::Status, 0x0300);
    assert_eq!(bench.exchange(request, reply), ResponseOutcome::Success);
    assert_eq!(bench.master.phase(), LinkPhase::Delay);

    let refused = bench.master.send_async(request);
    assert_eq!(refused, Err(LinkError::NotReady(LinkPhase::Delay)));

    bench.clock.advance(100_001);
    bench.master.poll();
    assert!(bench.master.is_ready());
    bench.master.send_async(request).expect("ready after settle");
}

#[test]
fn back_to_back_transactions_share_one_link_pair() {
    let mut bench = Bench::new();
    for celsius in [20.0_f32, 35.5, 60.0] {
        let data = temperature_to_data(celsius);
        let request = Frame::request(MessageType::WriteData, DataId::ControlSetpoint, data);
        let reply = Frame::response(MessageType::WriteAck, DataId::ControlSetpoint, data);
        assert_eq!(bench.exchange(request, reply), ResponseOutcome::Success);
        assert_eq!(bench.master.last_response().to_f88(), celsius);

        // Walk both ends through their settle intervals.
        bench.clock.advance(100_001);
        bench.master.poll();
        bench.slave.poll();
        assert!(bench.master.is_ready());
        assert!(bench.slave.is_ready());
    }
}

#[test]
fn corrupted_bit_on_the_wire_is_rejected() {
    let mut bench = Bench::new();
    let request = Frame::request(MessageType::ReadData, DataId::BoilerTemperature, 0);
    let reply = Frame::response(
        MessageType::ReadAck,
        DataId::BoilerTemperature,
        temperature_to_data(48.5),
    );
    // Flip one data bit after parity installation.
    let corrupted = Frame::from_raw(reply.raw() ^ 0x0000_0010);

    bench.master.send_async(request).expect("master is ready");
    bench.relay_master_to_slave();
    bench.slave.poll();
    bench.clock.advance(20_001);
    bench.slave.poll();
    bench.slave.send_reply(corrupted).expect("slave is ready");
    bench.relay_slave_to_master();
    bench.master.poll();

    assert_eq!(bench.master.last_outcome(), ResponseOutcome::Invalid);
}

#[test]
fn response_handler_fires_once_per_transaction() {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    let clock = SimClock::new();
    let seen = Arc::new(AtomicU32::new(0));
    let seen_in_handler = Arc::clone(&seen);
    let mut master = Link::new(SimulatedLine::new(clock.clone()), Role::Master)
        .on_response(move |frame, outcome| {
            assert_eq!(outcome, ResponseOutcome::Success);
            assert_eq!(frame.data_id(), Some(DataId::ModulationLevel));
            seen_in_handler.fetch_add(1, Ordering::SeqCst);
        });
    let mut slave = Link::new(SimulatedLine::new(clock.clone()), Role::Slave);
    master.begin();
    slave.begin();

    let request = Frame::request(MessageType::ReadData, DataId::ModulationLevel, 0);
    master.send_async(request).expect("master is ready");
    relay(&mut master, &slave.edge_handle());
    slave.poll();
    clock.advance(20_001);
    slave.poll();
    slave
        .send_reply(Frame::response(MessageType::ReadAck, DataId::ModulationLevel, 0x3200))
        .expect("slave is ready");
    relay(&mut slave, &master.edge_handle());

    master.poll();
    master.poll();
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}
