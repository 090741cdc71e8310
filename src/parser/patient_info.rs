use tracing::debug;

use super::GENDER_MARKER;
use super::patterns::{ReportPatterns, capture_trimmed};
use crate::model::PatientInfo;

const PATIENT_INFO_WINDOW: usize = 10;

pub(super) fn extract_patient_info(
    lines: &[String],
    patterns: &ReportPatterns,
) -> Option<PatientInfo> {
    let line = lines
        .iter()
        .take(PATIENT_INFO_WINDOW)
        .find(|line| line.contains(GENDER_MARKER));

    let Some(line) = line else {
        debug!("patient info marker not found in preamble");
        return None;
    };

    let gender = capture_trimmed(&patterns.gender, line, 1);
    let birth_date = capture_trimmed(&patterns.birth_date, line, 1)
        .map(|value| value.replace(['-', '.'], "/"));

    if gender.is_none() && birth_date.is_none() {
        debug!("patient info marker present but no values matched");
        return None;
    }

    Some(PatientInfo { gender, birth_date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize_lines;

    fn extract(text: &str) -> Option<PatientInfo> {
        let patterns = ReportPatterns::new().expect("patterns should compile");
        extract_patient_info(&normalize_lines(text), &patterns)
    }

    #[test]
    fn gender_and_birth_date_share_one_line() {
        let info = extract("Hasta\n Cinsiyeti :  Erkek   Doğum Tarihi :  01.04.1947")
            .expect("patient info should be recognized");
        assert_eq!(info.gender.as_deref(), Some("Erkek"));
        assert_eq!(info.birth_date.as_deref(), Some("01/04/1947"));
    }

    #[test]
    fn dash_separated_birth_date_is_normalized() {
        let info = extract("Cinsiyeti : Kadın Doğum Tarihi : 15-06-1980")
            .expect("patient info should be recognized");
        assert_eq!(info.gender.as_deref(), Some("Kadın"));
        assert_eq!(info.birth_date.as_deref(), Some("15/06/1980"));
    }

    #[test]
    fn first_marker_line_ends_the_search() {
        let info = extract("Cinsiyet bilgisi yok\nCinsiyeti : Erkek");
        assert!(info.is_none());
    }
}
