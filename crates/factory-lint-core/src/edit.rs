//! In-memory application of [`TextEdit`]s.
//!
//! Rules only describe edits. This module splices them into a source string
//! for the caller; persisting the result is not its concern.

use crate::syntax::Span;
use crate::types::TextEdit;
use thiserror::Error;

/// Errors raised while applying edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// Edit range reaches past the end of the text.
    #[error("edit range {}..{} is out of bounds for text of length {len}", span.start, span.end)]
    OutOfBounds {
        /// Offending range.
        span: Span,
        /// Length of the text.
        len: usize,
    },

    /// Edit range splits a UTF-8 character.
    #[error("edit range {}..{} does not fall on character boundaries", span.start, span.end)]
    NotCharBoundary {
        /// Offending range.
        span: Span,
    },

    /// Two edits touch the same bytes.
    #[error("edit range {}..{} overlaps {}..{}", first.start, first.end, second.start, second.end)]
    Overlap {
        /// Earlier edit.
        first: Span,
        /// Later edit.
        second: Span,
    },
}

/// Applies `edits` to `source` and returns the new text.
///
/// Edits are ordered by start offset; insertions at the same offset keep
/// their relative order. An insertion may sit on either boundary of a
/// replacement but not inside it.
///
/// # Errors
///
/// Returns an error if an edit is out of bounds, splits a character, or
/// overlaps another edit. The source is never partially modified.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|e| (e.span.start, e.span.end));

    for edit in &ordered {
        let span = edit.span;
        if span.start > span.end || span.end > source.len() {
            return Err(EditError::OutOfBounds {
                span,
                len: source.len(),
            });
        }
        if !source.is_char_boundary(span.start) || !source.is_char_boundary(span.end) {
            return Err(EditError::NotCharBoundary { span });
        }
    }

    for pair in ordered.windows(2) {
        let (first, second) = (pair[0].span, pair[1].span);
        if first.overlaps(&second) {
            return Err(EditError::Overlap { first, second });
        }
    }

    let mut output = String::with_capacity(source.len() + edits.len() * 4);
    let mut cursor = 0;
    for edit in ordered {
        output.push_str(&source[cursor..edit.span.start]);
        output.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    output.push_str(&source[cursor..]);

    Ok(output)
}
