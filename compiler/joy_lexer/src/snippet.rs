//! Source-line excerpts for diagnostics.

use crate::Span;

/// The source line containing `span.start`, followed by a caret line
/// pointing at the span's first column.
pub fn caret_snippet(source: &str, span: Span) -> String {
    let start = (span.start as usize).min(source.len());
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    let line = &source[line_start..line_end];
    let column = source[line_start..start].chars().count();
    format!("{line}\n{}^", " ".repeat(column))
}
