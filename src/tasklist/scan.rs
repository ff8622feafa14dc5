//! First pass: flat heading records in document order.

/// A Markdown ATX heading found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (1-6).
    pub level: u8,
    /// Heading text with surrounding whitespace trimmed.
    pub text: String,
    /// Byte offset of the heading line in the source text.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
}

/// Extract every heading line from `text`.
///
/// A heading is 1-6 `#` characters at the start of a line followed by at
/// least one space or tab and non-empty text. `####### x` and `#x` are body
/// text, not headings.
pub fn scan_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for (idx, raw_line) in text.split_inclusive('\n').enumerate() {
        if let Some((level, heading_text)) = parse_heading_line(raw_line) {
            headings.push(Heading {
                level,
                text: heading_text.to_string(),
                offset,
                line: idx + 1,
            });
        }
        offset += raw_line.len();
    }

    headings
}

fn parse_heading_line(line: &str) -> Option<(u8, &str)> {
    let line = line.trim_end_matches(['\n', '\r']);
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some((hashes as u8, text))
}
