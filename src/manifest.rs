use serde::Serialize;

use medrapor::MedicalReport;

#[derive(Debug, Clone, Serialize)]
pub struct ParseCounts {
    pub notes: usize,
    pub diagnoses: usize,
    pub doctors: usize,
    pub medications: usize,
    pub additional_values: usize,
    pub has_patient_info: bool,
    pub has_report_number: bool,
}

impl ParseCounts {
    pub fn from_report(report: &MedicalReport) -> Self {
        Self {
            notes: report.notes.len(),
            diagnoses: report.diagnoses.len(),
            doctors: report.doctors.len(),
            medications: report.medications.len(),
            additional_values: report.additional_values.len(),
            has_patient_info: report.patient_info.is_some(),
            has_report_number: report.report_info.report_number.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub output_path: Option<String>,
    pub counts: ParseCounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrapor::{ReportParser, SAMPLE_REPORT};

    #[test]
    fn counts_reflect_the_parsed_report() {
        let parser = ReportParser::new().expect("patterns should compile");
        let counts = ParseCounts::from_report(&parser.parse(SAMPLE_REPORT));

        assert_eq!(counts.diagnoses, 3);
        assert_eq!(counts.medications, 5);
        assert_eq!(counts.doctors, 1);
        assert!(counts.has_report_number);
        assert!(!counts.has_patient_info);
    }
}
