//! Stub filenames and slugs.

/// Marker carried by stub filenames until a document has been refined.
pub const NEEDS_REFINEMENT_MARKER: &str = "(NEEDS-REFINEMENT)";

/// Fallback slug for titles with no usable characters.
pub const EMPTY_SLUG: &str = "task";

/// Convert a title to a filename slug.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// `-`, turns each whitespace run into one `-`, cuts to `max_len` characters
/// and trims hyphens from both ends. Existing hyphens are kept as-is, so
/// `"A - B"` becomes `"a---b"`.
pub fn slugify(title: &str, max_len: usize) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let joined = kept.split_whitespace().collect::<Vec<_>>().join("-");
    let truncated: String = joined.chars().take(max_len).collect();
    let slug = truncated.trim_matches('-');

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Stub filename: `task-007-<slug> (NEEDS-REFINEMENT).md`, or `task-007a-…` for a subtask.
pub fn stub_filename(number: u32, suffix: Option<char>, title: &str, max_len: usize) -> String {
    let suffix = suffix.map(String::from).unwrap_or_default();
    format!(
        "task-{:03}{}-{} {}.md",
        number,
        suffix,
        slugify(title, max_len),
        NEEDS_REFINEMENT_MARKER
    )
}

/// Downstream filename for a stub: marker removed, whitespace runs collapsed to
/// one space, and no whitespace left around the stem.
///
/// `task-007-alpha (NEEDS-REFINEMENT).md` → `task-007-alpha.md`
pub fn normalize_filename(name: &str) -> String {
    let without_marker = name.replace(NEEDS_REFINEMENT_MARKER, "");
    let collapsed = without_marker.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.rsplit_once('.') {
        Some((stem, ext)) if !stem.trim().is_empty() => format!("{}.{}", stem.trim_end(), ext),
        _ => collapsed,
    }
}
