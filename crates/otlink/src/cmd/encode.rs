use otlink_frame::{temperature_to_data, DataId, Frame, MessageType};

use crate::cmd::EncodeArgs;
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let id = parse_data_id(&args.id)?;
    let msg_type: MessageType = args
        .msg_type
        .parse()
        .map_err(|err| frame_error("encode failed", err))?;
    let data = resolve_data(&args)?;

    let frame = if msg_type.is_slave_to_master() {
        Frame::response(msg_type, id, data)
    } else {
        Frame::request(msg_type, id, data)
    };
    print_frame(&frame, format);
    Ok(SUCCESS)
}

fn parse_data_id(input: &str) -> CliResult<DataId> {
    if let Some(&id) = DataId::ALL
        .iter()
        .find(|id| id.name().eq_ignore_ascii_case(input))
    {
        return Ok(id);
    }
    let raw: u8 = input
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("unknown data id: {input}")))?;
    DataId::try_from(raw).map_err(|err| frame_error("encode failed", err))
}

fn resolve_data(args: &EncodeArgs) -> CliResult<u16> {
    if let Some(celsius) = args.temperature {
        return Ok(temperature_to_data(celsius));
    }
    let Some(input) = &args.data else {
        return Ok(0);
    };
    let trimmed = input.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| CliError::new(USAGE, format!("invalid data value: {input}")))
}
