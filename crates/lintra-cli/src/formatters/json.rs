//! JSON formatter: the analysis output contract, pretty-printed.

use anyhow::Result;
use lintra_core::AnalysisReport;

pub fn print_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
