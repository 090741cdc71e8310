use tracing::debug;

use super::MEDICATION_HEADER;
use super::heuristics::{join_tokens, leading_name_run};
use super::patterns::ReportPatterns;
use super::section::{SectionScope, find_header, section_rows};
use crate::model::Medication;

const MIN_MEDICATION_TOKENS: usize = 6;

const MEDICATION_SCOPE: SectionScope = SectionScope {
    stop_on_blank: true,
    terminators: &[],
    max_rows: None,
};

pub(super) fn extract_medications(lines: &[String], patterns: &ReportPatterns) -> Vec<Medication> {
    let Some(header) = find_header(lines, MEDICATION_HEADER) else {
        debug!("medication header not found");
        return Vec::new();
    };

    let mut medications = Vec::new();
    let mut positional_rows = 0usize;

    for row in section_rows(lines, header, MEDICATION_SCOPE) {
        if is_column_title_row(row.text) {
            continue;
        }

        let tokens = row.text.split_whitespace().collect::<Vec<&str>>();
        if tokens.len() < MIN_MEDICATION_TOKENS {
            continue;
        }

        let date_index = tokens
            .iter()
            .position(|token| patterns.date_prefix.is_match(token));

        let medication = match date_index {
            Some(date_index) if date_index > 0 => segment_dated_row(&tokens, date_index),
            _ => {
                positional_rows += 1;
                segment_positional_row(&tokens)
            }
        };
        medications.push(medication);
    }

    debug!(
        header_line = header,
        count = medications.len(),
        positional_rows,
        "extracted medications"
    );
    medications
}

fn is_column_title_row(row: &str) -> bool {
    row.contains("Kodu") && row.contains("Adı")
}

fn segment_dated_row(tokens: &[&str], date_index: usize) -> Medication {
    let drug = &tokens[1..date_index];
    let (name, rest) = drug.split_at(leading_name_run(drug));
    let (form, scheme) = rest.split_at(rest.len().min(2));

    Medication {
        code: tokens[0].to_string(),
        name: join_tokens(name),
        form: join_tokens(form),
        treatment_scheme: join_tokens(scheme),
        quantity: String::new(),
        content: None,
        added_time: Some(join_tokens(&tokens[date_index..])),
    }
}

// TODO: rows without an added-time date are cut at fixed positions and come
// out mis-segmented whenever the name or scheme spans several tokens; needs
// the intended column layout from the report owners before it can change.
fn segment_positional_row(tokens: &[&str]) -> Medication {
    let token = |index: usize| tokens.get(index).copied().unwrap_or_default().to_string();

    Medication {
        code: token(0),
        name: token(1),
        form: token(2),
        treatment_scheme: token(3),
        quantity: token(4),
        content: Some(token(5)),
        added_time: None,
    }
}
