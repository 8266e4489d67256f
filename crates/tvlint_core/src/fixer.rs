//! Edit application.

use tracing::debug;

use tvlint_rules::Edit;

use crate::LinterError;

/// Applies `edits` to `source` and returns the new text.
///
/// Edits address the original text. They are validated and checked for
/// conflicts up front, then applied from the end of the text to the
/// beginning so earlier offsets stay valid. On error nothing is applied.
///
/// Two edits conflict when their spans share a byte, or when both start at
/// the same offset (their relative order would be ambiguous).
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, LinterError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    for edit in edits {
        validate_edit(source, edit)?;
    }

    // Sort by span.start in descending order (apply from end to beginning)
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        b.span
            .start
            .cmp(&a.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });
    check_conflicts(&sorted)?;

    let mut result = source.to_string();
    for edit in sorted {
        let start = edit.span.start as usize;
        let end = edit.span.end as usize;

        debug!(
            "Applying edit: replace [{}..{}] with '{}'",
            start, end, edit.new_text
        );
        result.replace_range(start..end, &edit.new_text);
    }

    Ok(result)
}

fn validate_edit(source: &str, edit: &Edit) -> Result<(), LinterError> {
    let span = edit.span;
    if !span.fits(source.len()) {
        return Err(LinterError::invalid_edit(
            span,
            format!("out of bounds for text of {} bytes", source.len()),
        ));
    }
    let (start, end) = (span.start as usize, span.end as usize);
    if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
        return Err(LinterError::invalid_edit(span, "not on a character boundary"));
    }
    Ok(())
}

/// Expects `edits` sorted by start descending.
///
/// In that order an edit conflicting with any later-starting edit also
/// conflicts with its direct predecessor, so only neighbours are compared.
fn check_conflicts(edits: &[&Edit]) -> Result<(), LinterError> {
    for pair in edits.windows(2) {
        let (later, earlier) = (pair[0].span, pair[1].span);
        if earlier.start == later.start || earlier.intersects(&later) {
            return Err(LinterError::OverlappingEdits {
                first: earlier,
                second: later,
            });
        }
    }
    Ok(())
}
