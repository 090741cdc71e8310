use tracing::debug;

use super::patterns::ReportPatterns;
use super::section::{SectionScope, find_header_all, section_rows};
use super::{DIAGNOSIS_HEADER, NOTES_HEADER, NOTES_HEADER_COLUMN};
use crate::model::Note;

const NOTE_PLACEHOLDER: &str = ".";

const NOTES_SCOPE: SectionScope = SectionScope {
    stop_on_blank: true,
    terminators: &[DIAGNOSIS_HEADER],
    max_rows: None,
};

pub(super) fn extract_notes(lines: &[String], patterns: &ReportPatterns) -> Vec<Note> {
    let Some(header) = find_header_all(lines, &[NOTES_HEADER, NOTES_HEADER_COLUMN]) else {
        debug!("notes header not found");
        return Vec::new();
    };

    let mut notes = Vec::new();
    for row in section_rows(lines, header, NOTES_SCOPE) {
        if !patterns.date_prefix.is_match(row.text) {
            continue;
        }

        let tokens = row.text.split_whitespace().collect::<Vec<&str>>();
        if tokens.len() < 2 {
            continue;
        }

        let content = tokens[2..].join(" ");
        if content.is_empty() || content == NOTE_PLACEHOLDER {
            continue;
        }

        notes.push(Note {
            content,
            date: Some(tokens[0].to_string()),
            time: tokens[1].contains(':').then(|| tokens[1].to_string()),
        });
    }

    debug!(header_line = header, count = notes.len(), "extracted notes");
    notes
}
