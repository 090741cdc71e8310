use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use medrapor::{MedicalReport, ReportParser};

use crate::cli::ParseArgs;
use crate::manifest::{ParseCounts, ParseRunManifest};
use crate::util::{
    now_utc_string, read_report_text, sha256_hex, write_json_pretty, write_json_stdout,
};

pub fn run(args: ParseArgs) -> Result<()> {
    let text = read_report_text(&args.input)?;
    let input_sha256 = sha256_hex(text.as_bytes());

    info!(
        path = %args.input.display(),
        bytes = text.len(),
        sha256 = %input_sha256,
        "parsing report"
    );

    let parser = ReportParser::new()?;
    let report = parser.parse(&text);
    log_summary(&report);

    let value = report.to_value()?;
    let output_path = if args.stdout {
        write_json_stdout(&value)?;
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_json_pretty(&path, &value)?;
        info!(path = %path.display(), "wrote structured report");
        Some(path)
    };

    if let Some(manifest_path) = &args.manifest_path {
        let manifest = ParseRunManifest {
            manifest_version: 1,
            generated_at: now_utc_string(),
            input_path: args.input.display().to_string(),
            input_sha256,
            output_path: output_path.map(|path| path.display().to_string()),
            counts: ParseCounts::from_report(&report),
        };
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote parse run manifest");
    }

    Ok(())
}

pub fn log_summary(report: &MedicalReport) {
    info!(
        report_number = %report.report_info.report_number.as_deref().unwrap_or_default(),
        report_date = %report.report_info.report_date.as_deref().unwrap_or_default(),
        facility = %report.report_info.facility_name.as_deref().unwrap_or_default(),
        diagnoses = report.diagnoses.len(),
        medications = report.medications.len(),
        doctors = report.doctors.len(),
        notes = report.notes.len(),
        additional_values = report.additional_values.len(),
        "parsed report"
    );
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());

    input.with_file_name(format!("{stem}_structured.json"))
}
