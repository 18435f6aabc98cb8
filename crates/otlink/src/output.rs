use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use otlink_frame::{parity, Frame};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput<'a> {
    frame: String,
    parity_ok: bool,
    valid_request: bool,
    valid_response: bool,
    msg_type: &'a str,
    data_id: u8,
    data_id_name: &'a str,
    data_value: u16,
    high_byte: u8,
    low_byte: u8,
    f8_8: f32,
}

impl FrameOutput<'_> {
    fn from_frame(frame: &Frame) -> FrameOutput<'static> {
        FrameOutput {
            frame: frame.to_string(),
            parity_ok: !parity(frame.raw()),
            valid_request: frame.is_valid_request(),
            valid_response: frame.is_valid_response(),
            msg_type: frame.msg_type().name(),
            data_id: frame.data_id_raw(),
            data_id_name: data_id_name(frame),
            data_value: frame.data_value(),
            high_byte: frame.high_byte(),
            low_byte: frame.low_byte(),
            f8_8: frame.to_f88(),
        }
    }
}

pub fn print_frame(frame: &Frame, format: OutputFormat) {
    let out = FrameOutput::from_frame(frame);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FRAME", "PARITY", "TYPE", "DATA ID", "VALUE", "F8.8"])
                .add_row(vec![
                    out.frame.clone(),
                    if out.parity_ok { "ok" } else { "BAD" }.to_string(),
                    out.msg_type.to_string(),
                    format!("{} ({})", out.data_id, out.data_id_name),
                    format!("0x{:04X}", out.data_value),
                    format!("{:.2}", out.f8_8),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let valid_as = if out.valid_request {
                "request"
            } else if out.valid_response {
                "response"
            } else {
                "none"
            };
            println!(
                "frame={} parity={} valid_as={} type={} id={} ({}) value=0x{:04X} f8.8={:.2}",
                out.frame,
                if out.parity_ok { "ok" } else { "BAD" },
                valid_as,
                out.msg_type,
                out.data_id,
                out.data_id_name,
                out.data_value,
                out.f8_8,
            );
        }
        OutputFormat::Raw => {
            println!("{frame}");
        }
    }
}

pub fn data_id_name(frame: &Frame) -> &'static str {
    frame.data_id().map(|id| id.name()).unwrap_or("UNKNOWN")
}
