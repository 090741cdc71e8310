use anyhow::{Context, Result};
use regex::Regex;

use crate::model::ReportInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ReportField {
    ReportNumber,
    ReportDate,
    ProtocolNumber,
    ReportType,
    Description,
    RecordType,
    FacilityCode,
    TrackingNumber,
    FacilityName,
    Username,
}

impl ReportField {
    pub(super) fn slot(self, info: &mut ReportInfo) -> &mut Option<String> {
        match self {
            ReportField::ReportNumber => &mut info.report_number,
            ReportField::ReportDate => &mut info.report_date,
            ReportField::ProtocolNumber => &mut info.protocol_number,
            ReportField::ReportType => &mut info.report_type,
            ReportField::Description => &mut info.description,
            ReportField::RecordType => &mut info.record_type,
            ReportField::FacilityCode => &mut info.facility_code,
            ReportField::TrackingNumber => &mut info.tracking_number,
            ReportField::FacilityName => &mut info.facility_name,
            ReportField::Username => &mut info.username,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ReportField::ReportNumber => "report_number",
            ReportField::ReportDate => "report_date",
            ReportField::ProtocolNumber => "protocol_number",
            ReportField::ReportType => "report_type",
            ReportField::Description => "description",
            ReportField::RecordType => "record_type",
            ReportField::FacilityCode => "facility_code",
            ReportField::TrackingNumber => "tracking_number",
            ReportField::FacilityName => "facility_name",
            ReportField::Username => "username",
        }
    }
}

#[derive(Debug)]
pub(super) struct FieldMatcher {
    pub(super) field: ReportField,
    pub(super) keyword: &'static str,
    pub(super) pattern: Regex,
}

const REPORT_FIELD_RULES: [(ReportField, &str, &str); 10] = [
    (
        ReportField::ReportNumber,
        "Rapor Numarası",
        r"Rapor Numarası.*?:\s*(\d+)",
    ),
    (
        ReportField::ReportDate,
        "Rapor Tarihi",
        r"Rapor Tarihi.*?:\s*(\d{2}/\d{2}/\d{4})",
    ),
    (
        ReportField::ProtocolNumber,
        "Protokol No",
        r"Protokol No\s*:\s*(\d+)",
    ),
    (
        ReportField::ReportType,
        "Düzenleme Türü",
        r"Düzenleme Türü\s*:\s*(.+)",
    ),
    (ReportField::Description, "Açıklama", r"Açıklama\s*:\s*(.+)"),
    (ReportField::RecordType, "Kayıt Şekli", r"Kayıt Şekli\s*:\s*(.+)"),
    (
        ReportField::FacilityCode,
        "Tesis Kodu",
        r"Tesis Kodu.*?:\s*(\d+)",
    ),
    (
        ReportField::TrackingNumber,
        "Rapor Takip No",
        r"Rapor Takip No\s*:\s*(\d+)",
    ),
    (
        ReportField::FacilityName,
        "Tesis Ünvanı",
        r"Tesis Ünvanı\s*:\s*(.+)",
    ),
    (
        ReportField::Username,
        "Kullanıcı Adı",
        r"Kullanıcı Adı\s*:\s*(.+)",
    ),
];

#[derive(Debug)]
pub(super) struct ReportPatterns {
    pub(super) report_fields: Vec<FieldMatcher>,
    pub(super) date_prefix: Regex,
    pub(super) date_anywhere: Regex,
    pub(super) gender: Regex,
    pub(super) birth_date: Regex,
    pub(super) diagnosis_code: Regex,
    pub(super) icd_subcode: Regex,
    pub(super) additional_value_row: Regex,
}

impl ReportPatterns {
    pub(super) fn new() -> Result<Self> {
        let mut report_fields = Vec::with_capacity(REPORT_FIELD_RULES.len());
        for (field, keyword, pattern) in REPORT_FIELD_RULES {
            let pattern = Regex::new(pattern)
                .with_context(|| format!("failed to compile {} regex", field.as_str()))?;
            report_fields.push(FieldMatcher {
                field,
                keyword,
                pattern,
            });
        }

        Ok(Self {
            report_fields,
            date_prefix: Regex::new(r"^\d{2}/\d{2}/\d{4}")
                .context("failed to compile date prefix regex")?,
            date_anywhere: Regex::new(r"\d{2}/\d{2}/\d{4}")
                .context("failed to compile date regex")?,
            gender: Regex::new(r"Cinsiyet[ıi]\s*:\s*([A-Za-zÇĞİÖŞÜçğıöşü]+)")
                .context("failed to compile gender regex")?,
            birth_date: Regex::new(r"Doğum\s*Tarihi\s*:\s*(\d{2}[./-]\d{2}[./-]\d{4})")
                .context("failed to compile birth date regex")?,
            diagnosis_code: Regex::new(r"^\d{2}\.\d{2}")
                .context("failed to compile diagnosis code regex")?,
            icd_subcode: Regex::new(r"^[A-Z]\d{2}\.")
                .context("failed to compile ICD sub-code regex")?,
            additional_value_row: Regex::new(
                r"^(.+?)\s+([\d.,]+)\s+(\d{2}/\d{2}/\d{4})(?:\s+(\d{2}:\d{2}))?",
            )
            .context("failed to compile additional value row regex")?,
        })
    }
}

pub(super) fn capture_trimmed(pattern: &Regex, line: &str, group: usize) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|captures| captures.get(group))
        .map(|value| value.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_report_field_has_one_matcher() {
        let patterns = ReportPatterns::new().expect("patterns should compile");
        assert_eq!(patterns.report_fields.len(), 10);

        let mut info = ReportInfo::default();
        for matcher in &patterns.report_fields {
            *matcher.field.slot(&mut info) = Some(matcher.field.as_str().to_string());
        }
        assert_eq!(info.report_number.as_deref(), Some("report_number"));
        assert_eq!(info.username.as_deref(), Some("username"));
        assert_eq!(info.facility_name.as_deref(), Some("facility_name"));
    }

    #[test]
    fn rest_of_line_matchers_trim_the_value() {
        let patterns = ReportPatterns::new().expect("patterns should compile");
        let username = patterns
            .report_fields
            .iter()
            .find(|matcher| matcher.field == ReportField::Username)
            .expect("username matcher should exist");

        assert_eq!(
            capture_trimmed(&username.pattern, "Kullanıcı Adı  :  MUSTAFA AKCA  ", 1).as_deref(),
            Some("MUSTAFA AKCA")
        );
    }

    #[test]
    fn date_prefix_only_matches_at_line_start() {
        let patterns = ReportPatterns::new().expect("patterns should compile");
        assert!(patterns.date_prefix.is_match("18/10/2023 14:30"));
        assert!(!patterns.date_prefix.is_match("Adet 18/10/2023"));
    }
}
