use tracing::debug;

use super::patterns::ReportPatterns;
use super::section::{SectionScope, find_header, section_rows};
use super::{
    ADDITIONAL_VALUE_HEADER, DIAGNOSIS_HEADER, DOCTOR_HEADER, MEDICATION_HEADER, REPORT_INFO_HEADER,
};
use crate::model::AdditionalValue;

const COLUMN_TITLE_PREFIX: &str = "Türü";

const ADDITIONAL_VALUE_SCOPE: SectionScope = SectionScope {
    stop_on_blank: false,
    terminators: &[
        REPORT_INFO_HEADER,
        DIAGNOSIS_HEADER,
        DOCTOR_HEADER,
        MEDICATION_HEADER,
    ],
    max_rows: None,
};

pub(super) fn extract_additional_values(
    lines: &[String],
    patterns: &ReportPatterns,
) -> Vec<AdditionalValue> {
    let Some(header) = find_header(lines, ADDITIONAL_VALUE_HEADER) else {
        debug!("additional value header not found");
        return Vec::new();
    };

    let mut values = Vec::new();
    for row in section_rows(lines, header, ADDITIONAL_VALUE_SCOPE) {
        if row.text.starts_with(COLUMN_TITLE_PREFIX) {
            continue;
        }

        let Some(captures) = patterns.additional_value_row.captures(row.text) else {
            continue;
        };
        let (Some(label), Some(value), Some(date)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            continue;
        };

        let added_time = match captures.get(4) {
            Some(time) => format!("{} {}", date.as_str(), time.as_str()),
            None => date.as_str().to_string(),
        };

        values.push(AdditionalValue {
            kind: label.as_str().trim().to_string(),
            value: value.as_str().trim().to_string(),
            note: None,
            added_time: Some(added_time),
        });
    }

    debug!(header_line = header, count = values.len(), "extracted additional values");
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize_lines;

    fn extract(text: &str) -> Vec<AdditionalValue> {
        let patterns = ReportPatterns::new().expect("patterns should compile");
        extract_additional_values(&normalize_lines(text), &patterns)
    }

    #[test]
    fn rows_combine_date_and_time() {
        let values = extract(
            "Rapor İlave Değer Bilgileri\nTürü Değeri Açıklama Eklenme Zamanı\nKilo\t80.00\t23/09/2024 15:47\nHbA1c 7,2 23/09/2024",
        );
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].kind, "Kilo");
        assert_eq!(values[0].value, "80.00");
        assert_eq!(values[0].added_time.as_deref(), Some("23/09/2024 15:47"));
        assert!(values[0].note.is_none());
        assert_eq!(values[1].kind, "HbA1c");
        assert_eq!(values[1].value, "7,2");
        assert_eq!(values[1].added_time.as_deref(), Some("23/09/2024"));
    }

    #[test]
    fn multi_word_labels_are_kept_whole() {
        let values = extract("Rapor İlave Değer Bilgileri\nLDL Kolesterol 97 18/10/2023 14:30");
        assert_eq!(values[0].kind, "LDL Kolesterol");
        assert_eq!(values[0].value, "97");
    }

    #[test]
    fn rows_without_date_are_skipped_and_next_header_stops() {
        let values = extract(
            "Rapor İlave Değer Bilgileri\nKilo 80.00\n\nBoy 175 23/09/2024\nDoktor Bilgileri\nNabız 72 23/09/2024",
        );
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].kind, "Boy");
    }
}
