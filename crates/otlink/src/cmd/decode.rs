use otlink_frame::Frame;

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    for input in &args.frames {
        let frame = Frame::from_hex(input).map_err(|err| frame_error("decode failed", err))?;
        print_frame(&frame, format);
    }
    Ok(SUCCESS)
}
