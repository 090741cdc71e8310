use tracing::debug;

use super::patterns::{ReportPatterns, capture_trimmed};
use super::section::{SectionScope, find_header, section_rows};
use super::{DIAGNOSIS_HEADER, NOTES_HEADER, REPORT_INFO_HEADER};
use crate::model::ReportInfo;

const REPORT_INFO_SCOPE: SectionScope = SectionScope {
    stop_on_blank: true,
    terminators: &[DIAGNOSIS_HEADER, NOTES_HEADER],
    max_rows: Some(15),
};

pub(super) fn extract_report_info(lines: &[String], patterns: &ReportPatterns) -> ReportInfo {
    let mut info = ReportInfo::default();

    let Some(header) = find_header(lines, REPORT_INFO_HEADER) else {
        debug!("report info header not found");
        return info;
    };

    for row in section_rows(lines, header, REPORT_INFO_SCOPE) {
        for matcher in &patterns.report_fields {
            if !row.text.contains(matcher.keyword) {
                continue;
            }
            if let Some(value) = capture_trimmed(&matcher.pattern, row.text, 1) {
                *matcher.field.slot(&mut info) = Some(value);
            }
        }
    }

    debug!(
        header_line = header,
        report_number = info.report_number.as_deref().unwrap_or_default(),
        "extracted report info"
    );

    info
}
