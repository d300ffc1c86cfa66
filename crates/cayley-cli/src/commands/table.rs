use std::error::Error;
use std::path::PathBuf;

use cayley_group::serde_io::{report_to_json, write_json};
use cayley_group::TableReport;
use clap::Args;

use super::GroupArgs;

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub group: GroupArgs,
    /// Also write the table report as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: &TableArgs) -> Result<(), Box<dyn Error>> {
    let group = args.group.build()?;
    print!("{}", group.render_table());
    if let Some(path) = &args.json {
        let report = TableReport::from_group(&group);
        write_json(path, &report_to_json(&report)?)?;
        tracing::info!(path = %path.display(), hash = %report.table_hash, "wrote table report");
    }
    Ok(())
}
