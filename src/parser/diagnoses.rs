use std::collections::HashSet;

use tracing::debug;

use super::patterns::ReportPatterns;
use super::section::{SectionScope, find_header, section_rows};
use super::{DIAGNOSIS_HEADER, DOCTOR_HEADER};
use crate::model::Diagnosis;

const DIAGNOSIS_SEPARATOR: &str = " - ";

const DATE_RANGE_LOOKAHEAD: usize = 4;

const DIAGNOSIS_SCOPE: SectionScope = SectionScope {
    stop_on_blank: false,
    terminators: &[DOCTOR_HEADER],
    max_rows: None,
};

pub(super) fn extract_diagnoses(lines: &[String], patterns: &ReportPatterns) -> Vec<Diagnosis> {
    let Some(header) = find_header(lines, DIAGNOSIS_HEADER) else {
        debug!("diagnosis header not found");
        return Vec::new();
    };

    let mut diagnoses = Vec::new();
    let mut seen = HashSet::<(String, String)>::new();
    let mut duplicates = 0usize;

    for row in section_rows(lines, header, DIAGNOSIS_SCOPE) {
        if !patterns.diagnosis_code.is_match(row.text) {
            continue;
        }
        let Some((code, description)) = row.text.split_once(DIAGNOSIS_SEPARATOR) else {
            continue;
        };

        let code = code.trim().to_string();
        let mut description = description.trim().to_string();

        if let Some(subcode) = lines.get(row.index + 1).map(|line| line.trim()) {
            if patterns.icd_subcode.is_match(subcode) {
                description.push(' ');
                description.push_str(subcode);
            }
        }

        let (start_date, end_date) = lookahead_date_range(lines, row.index, patterns);

        if !seen.insert((code.clone(), description.clone())) {
            duplicates += 1;
            continue;
        }

        diagnoses.push(Diagnosis {
            code,
            description,
            start_date,
            end_date,
        });
    }

    debug!(
        header_line = header,
        count = diagnoses.len(),
        duplicates,
        "extracted diagnoses"
    );
    diagnoses
}

fn lookahead_date_range(
    lines: &[String],
    code_index: usize,
    patterns: &ReportPatterns,
) -> (Option<String>, Option<String>) {
    let candidates = lines
        .iter()
        .skip(code_index + 1)
        .take(DATE_RANGE_LOOKAHEAD)
        .map(|line| line.trim());

    for candidate in candidates {
        if !patterns.date_prefix.is_match(candidate) {
            continue;
        }

        let dates = patterns
            .date_anywhere
            .find_iter(candidate)
            .map(|found| found.as_str().to_string())
            .collect::<Vec<String>>();

        return match dates.as_slice() {
            [start, end, ..] => (Some(start.clone()), Some(end.clone())),
            _ => (None, None),
        };
    }

    (None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize_lines;

    fn extract(text: &str) -> Vec<Diagnosis> {
        let patterns = ReportPatterns::new().expect("patterns should compile");
        extract_diagnoses(&normalize_lines(text), &patterns)
    }

    #[test]
    fn subcode_without_dot_is_not_appended() {
        let diagnoses = extract(
            "Tanı Bilgileri\n04.05 - Arteriyel Hipertansiyon(I10 -I13)(I15)\nI10 ESANSİYEL (PRİMER) HİPERTANSİYON\n  18/10/2023 16/10/2025",
        );
        assert_eq!(diagnoses.len(), 1);
        assert_eq!(diagnoses[0].description, "Arteriyel Hipertansiyon(I10 -I13)(I15)");
        assert_eq!(diagnoses[0].start_date.as_deref(), Some("18/10/2023"));
        assert_eq!(diagnoses[0].end_date.as_deref(), Some("16/10/2025"));
    }

    #[test]
    fn single_date_line_ends_lookahead_without_dates() {
        let diagnoses = extract(
            "Tanı Bilgileri\n04.02 - Koroner arter hastaligi\n18/10/2023\n18/10/2023 16/10/2025",
        );
        assert_eq!(diagnoses.len(), 1);
        assert!(diagnoses[0].start_date.is_none());
        assert!(diagnoses[0].end_date.is_none());
    }

    #[test]
    fn dates_beyond_four_lines_are_not_attached() {
        let diagnoses = extract(
            "Tanı Bilgileri\n04.02 - Koroner arter hastaligi\na\nb\nc\nd\n18/10/2023 16/10/2025",
        );
        assert!(diagnoses[0].start_date.is_none());
    }

    #[test]
    fn code_rows_without_separator_are_skipped() {
        let diagnoses = extract("Tanı Bilgileri\n04.02 Koroner arter hastaligi\n04.05 - Hipertansiyon");
        assert_eq!(diagnoses.len(), 1);
        assert_eq!(diagnoses[0].code, "04.05");
    }

    #[test]
    fn whitespace_variants_are_distinct_entries() {
        let diagnoses = extract(
            "Tanı Bilgileri\n04.02 - Koroner arter hastaligi\n04.02 - Koroner  arter hastaligi",
        );
        assert_eq!(diagnoses.len(), 2);
    }

    #[test]
    fn blank_lines_inside_section_do_not_end_it() {
        let diagnoses = extract(
            "Tanı Bilgileri\n04.02 - Koroner\n\n04.05 - Hipertansiyon\nDoktor Bilgileri\n04.08 - Hiperlipidemi",
        );
        let codes = diagnoses
            .iter()
            .map(|diagnosis| diagnosis.code.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(codes, vec!["04.02", "04.05"]);
    }
}
