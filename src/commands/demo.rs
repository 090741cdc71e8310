use anyhow::Result;
use tracing::info;

use medrapor::{ReportParser, SAMPLE_REPORT};

use crate::cli::DemoArgs;
use crate::commands::parse::log_summary;
use crate::util::write_json_pretty;

pub fn run(args: DemoArgs) -> Result<()> {
    info!("parsing built-in sample report");

    let parser = ReportParser::new()?;
    let report = parser.parse(SAMPLE_REPORT);
    log_summary(&report);

    write_json_pretty(&args.output, &report.to_value()?)?;
    info!(path = %args.output.display(), "wrote demo report");

    Ok(())
}
