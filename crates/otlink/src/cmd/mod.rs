use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod ids;
pub mod simulate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode one or more hex frames into their fields.
    Decode(DecodeArgs),
    /// Build a frame from message type, data id and value.
    Encode(EncodeArgs),
    /// List the data-item identifiers.
    Ids(IdsArgs),
    /// Run a master/slave exchange over a simulated line.
    Simulate(SimulateArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Ids(args) => ids::run(args, format),
        Command::Simulate(args) => simulate::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex frames (8 digits, with or without 0x).
    #[arg(required = true)]
    pub frames: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Data id, by name (e.g. ControlSetpoint) or number (e.g. 1).
    pub id: String,
    /// Message type (e.g. read-data, write-data, read-ack).
    #[arg(long, short = 't', default_value = "read-data")]
    pub msg_type: String,
    /// 16-bit data value (hex with 0x, or decimal).
    #[arg(long, conflicts_with = "temperature")]
    pub data: Option<String>,
    /// Data value as a temperature in °C, encoded fixed-point 8.8.
    #[arg(long, conflicts_with = "data")]
    pub temperature: Option<f32>,
}

#[derive(Args, Debug, Default)]
pub struct IdsArgs {}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Request frame the master sends (hex).
    pub request: String,
    /// Reply frame the slave answers with (hex). Default: an ACK echoing
    /// the request's data id and value.
    #[arg(long, conflicts_with = "silent")]
    pub reply: Option<String>,
    /// The slave stays silent; the master runs into its response timeout.
    #[arg(long)]
    pub silent: bool,
    /// Number of back-to-back transactions, settle intervals included.
    #[arg(long, default_value = "1")]
    pub count: u32,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}
