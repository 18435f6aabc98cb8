use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use otlink_frame::DataId;
use serde::Serialize;

use crate::cmd::IdsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct IdOutput {
    id: u8,
    name: &'static str,
}

pub fn run(_args: IdsArgs, format: OutputFormat) -> CliResult<i32> {
    match format {
        OutputFormat::Json => {
            let out: Vec<IdOutput> = DataId::ALL
                .iter()
                .map(|id| IdOutput {
                    id: id.raw(),
                    name: id.name(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "NAME"]);
            for id in DataId::ALL {
                table.add_row(vec![id.raw().to_string(), id.name().to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for id in DataId::ALL {
                println!("{} {}", id.raw(), id.name());
            }
        }
    }
    Ok(SUCCESS)
}
