//! Common utility functions shared across the codebase.

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// The column counts characters, not bytes, so positions inside
/// non-ASCII text (Georgian, Arabic, ...) point at the right glyph.
pub fn offset_to_position(content: &str, line_index: &[usize], offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let line = offset_to_line(line_index, offset);
    let line_start = line_index.get(line.saturating_sub(1)).copied().unwrap_or(0);
    let col = content
        .get(line_start..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    (line, col + 1)
}

/// Pluralize a noun for summary lines ("1 file", "3 files").
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
