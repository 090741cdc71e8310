use std::ops::Range;

#[derive(Debug, Clone, Copy)]
pub(super) struct SectionScope {
    pub(super) stop_on_blank: bool,
    pub(super) terminators: &'static [&'static str],
    pub(super) max_rows: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct SectionRow<'a> {
    pub(super) index: usize,
    pub(super) text: &'a str,
}

pub(super) fn find_header(lines: &[String], phrase: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(phrase))
}

pub(super) fn find_header_all(lines: &[String], phrases: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| phrases.iter().all(|phrase| line.contains(phrase)))
}

pub(super) fn section_rows<'a>(
    lines: &'a [String],
    header: usize,
    scope: SectionScope,
) -> Vec<SectionRow<'a>> {
    let window = section_window(lines.len(), header, scope.max_rows);
    let mut rows = Vec::new();

    for index in window {
        let text = lines[index].trim();

        if text.is_empty() {
            if scope.stop_on_blank {
                break;
            }
            continue;
        }

        if scope
            .terminators
            .iter()
            .any(|terminator| text.contains(terminator))
        {
            break;
        }

        rows.push(SectionRow { index, text });
    }

    rows
}

fn section_window(line_count: usize, header: usize, max_rows: Option<usize>) -> Range<usize> {
    let start = (header + 1).min(line_count);
    let end = match max_rows {
        Some(limit) => start.saturating_add(limit).min(line_count),
        None => line_count,
    };
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn find_header_uses_first_substring_match() {
        let lines = lines(&["x", "  Doktor Bilgileri  ", "Doktor Bilgileri"]);
        assert_eq!(find_header(&lines, "Doktor Bilgileri"), Some(1));
        assert_eq!(find_header(&lines, "Tanı Bilgileri"), None);
    }

    #[test]
    fn blank_line_ends_section_when_requested() {
        let lines = lines(&["H", "a", "", "b"]);
        let scope = SectionScope {
            stop_on_blank: true,
            terminators: &[],
            max_rows: None,
        };
        let rows = section_rows(&lines, 0, scope);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "a");
    }

    #[test]
    fn blank_lines_are_skipped_until_terminator() {
        let lines = lines(&["H", "a", "", "  b  ", "NEXT header", "c"]);
        let scope = SectionScope {
            stop_on_blank: false,
            terminators: &["NEXT"],
            max_rows: None,
        };
        let rows = section_rows(&lines, 0, scope);
        let texts = rows.iter().map(|row| row.text).collect::<Vec<&str>>();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(rows[1].index, 3);
    }

    #[test]
    fn max_rows_bounds_the_window() {
        let lines = lines(&["H", "1", "2", "3", "4"]);
        let scope = SectionScope {
            stop_on_blank: true,
            terminators: &[],
            max_rows: Some(2),
        };
        assert_eq!(section_rows(&lines, 0, scope).len(), 2);
        assert!(section_rows(&lines, 4, scope).is_empty());
    }
}
