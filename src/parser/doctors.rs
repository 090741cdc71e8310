use tracing::debug;

use super::heuristics::{join_tokens, non_empty, split_trailing_uppercase_run};
use super::section::{SectionScope, find_header, section_rows};
use super::{
    ADDITIONAL_VALUE_HEADER, DIAGNOSIS_HEADER, DOCTOR_HEADER, MEDICATION_HEADER, REPORT_INFO_HEADER,
};
use crate::model::Doctor;

const DOCTOR_SCOPE: SectionScope = SectionScope {
    stop_on_blank: false,
    terminators: &[
        MEDICATION_HEADER,
        ADDITIONAL_VALUE_HEADER,
        REPORT_INFO_HEADER,
        DIAGNOSIS_HEADER,
    ],
    max_rows: None,
};

pub(super) fn extract_doctors(lines: &[String]) -> Vec<Doctor> {
    let Some(header) = find_header(lines, DOCTOR_HEADER) else {
        debug!("doctor header not found");
        return Vec::new();
    };

    let doctors = section_rows(lines, header, DOCTOR_SCOPE)
        .into_iter()
        .filter(|row| !is_column_title_row(row.text))
        .filter_map(|row| parse_doctor_row(row.text))
        .collect::<Vec<Doctor>>();

    debug!(header_line = header, count = doctors.len(), "extracted doctors");
    doctors
}

fn is_column_title_row(row: &str) -> bool {
    row.contains("Dr.") && row.contains("Diploma No")
}

fn parse_doctor_row(row: &str) -> Option<Doctor> {
    let tokens = row.split_whitespace().collect::<Vec<&str>>();
    if tokens.len() < 3 {
        return None;
    }

    let (specialty, name) = split_trailing_uppercase_run(&tokens[2..]);

    Some(Doctor {
        diploma_number: Some(tokens[0].to_string()),
        registration_number: Some(tokens[1].to_string()),
        specialty: non_empty(join_tokens(specialty)),
        name: non_empty(join_tokens(name)),
    })
}
