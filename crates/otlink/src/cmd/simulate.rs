use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use otlink_frame::{Frame, MessageType};
use otlink_line::{SimClock, SimulatedLine};
use otlink_link::{EdgeHandle, Link, ResponseOutcome, Role};
use serde::Serialize;

use crate::cmd::SimulateArgs;
use crate::exit::{frame_error, link_error, CliError, CliResult, DATA_INVALID, SUCCESS, TIMEOUT};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct SimulateOutput {
    transaction: u32,
    request: String,
    request_outcome: &'static str,
    reply: Option<String>,
    response_outcome: &'static str,
    elapsed_micros: u32,
}

pub fn run(args: SimulateArgs, format: OutputFormat) -> CliResult<i32> {
    let request =
        Frame::from_hex(&args.request).map_err(|err| frame_error("simulate failed", err))?;
    let reply = match &args.reply {
        Some(input) => Some(Frame::from_hex(input).map_err(|err| frame_error("simulate failed", err))?),
        None if args.silent => None,
        None => Some(auto_reply(request)?),
    };

    let clock = SimClock::new();
    let mut master = Link::new(SimulatedLine::new(clock.clone()), Role::Master);
    let mut slave = Link::new(SimulatedLine::new(clock.clone()), Role::Slave);
    master.begin();
    slave.begin();

    let mut final_outcome = ResponseOutcome::None;
    for transaction in 0..args.count.max(1) {
        let start = clock.now();

        master
            .send_async(request)
            .map_err(|err| link_error("simulate failed", err))?;
        relay(master.line_mut(), &slave.edge_handle());
        slave.poll();

        let sent_reply = match (slave.last_outcome(), reply) {
            (ResponseOutcome::Success, Some(reply)) => {
                // The slave answers once its 20 ms settle interval is up.
                clock.advance(20_001);
                slave.poll();
                slave
                    .send_reply(reply)
                    .map_err(|err| link_error("simulate failed", err))?;
                relay(slave.line_mut(), &master.edge_handle());
                Some(reply)
            }
            _ => {
                // No answer is coming; run the master into its timeout.
                clock.advance(1_000_001);
                None
            }
        };
        master.poll();
        final_outcome = master.last_outcome();

        let out = SimulateOutput {
            transaction,
            request: request.to_string(),
            request_outcome: slave.last_outcome().name(),
            reply: sent_reply.map(|frame| frame.to_string()),
            response_outcome: final_outcome.name(),
            elapsed_micros: clock.now().wrapping_sub(start),
        };
        print_output(&out, format);

        // Walk both ends through their settle intervals.
        clock.advance(100_001);
        master.poll();
        slave.poll();
    }

    Ok(match final_outcome {
        ResponseOutcome::Success => SUCCESS,
        ResponseOutcome::Timeout => TIMEOUT,
        _ => DATA_INVALID,
    })
}

/// Move every edge recorded on `line` into the receiving end.
fn relay(line: &mut SimulatedLine, receiver: &EdgeHandle) {
    for edge in line.drain_edges() {
        receiver.handle_edge(edge.level, edge.at_micros);
    }
}

/// An ACK echoing the request's data id and value, the reply a
/// well-behaved slave would produce for a known data point.
fn auto_reply(request: Frame) -> CliResult<Frame> {
    let id = request.data_id().ok_or_else(|| {
        CliError::new(
            DATA_INVALID,
            format!("no automatic reply for unknown data id {}", request.data_id_raw()),
        )
    })?;
    let msg_type = if request.msg_type() == MessageType::WriteData {
        MessageType::WriteAck
    } else {
        MessageType::ReadAck
    };
    Ok(Frame::response(msg_type, id, request.data_value()))
}

fn print_output(out: &SimulateOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TX", "REQUEST", "REQ OUTCOME", "REPLY", "RESP OUTCOME", "ELAPSED µs"])
                .add_row(vec![
                    out.transaction.to_string(),
                    out.request.clone(),
                    out.request_outcome.to_string(),
                    out.reply.clone().unwrap_or_else(|| "-".to_string()),
                    out.response_outcome.to_string(),
                    out.elapsed_micros.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            println!(
                "tx={} request={} request_outcome={} reply={} response_outcome={} elapsed_micros={}",
                out.transaction,
                out.request,
                out.request_outcome,
                out.reply.as_deref().unwrap_or("-"),
                out.response_outcome,
                out.elapsed_micros,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use otlink_frame::DataId;

    use super::*;

    #[test]
    fn auto_reply_acknowledges_reads_and_writes() {
        let read = Frame::request(MessageType::ReadData, DataId::BoilerTemperature, 0);
        let reply = auto_reply(read).unwrap();
        assert_eq!(reply.msg_type(), MessageType::ReadAck);
        assert_eq!(reply.data_id(), Some(DataId::BoilerTemperature));

        let write = Frame::request(MessageType::WriteData, DataId::ControlSetpoint, 0x2580);
        let reply = auto_reply(write).unwrap();
        assert_eq!(reply.msg_type(), MessageType::WriteAck);
        assert_eq!(reply.data_value(), 0x2580);
    }

    #[test]
    fn auto_reply_refuses_unknown_ids() {
        // Data id 40 is a gap in the id table.
        let request = Frame::from_raw(0x0028_0000);
        assert!(auto_reply(request).is_err());
    }
}
