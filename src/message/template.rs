//! Template scanning.
//!
//! Templates carry three markers: `%s` (substitute the next rendered
//! argument), `%n` (line separator), and `%%` (a literal percent sign).
//! Any other `%` sequence passes through verbatim.

/// The line separator substituted for `%n`.
///
/// Always `"\n"`, on every platform, so rendered messages are
/// byte-identical across platforms and in tests.
pub const LINE_SEPARATOR: &str = "\n";

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Literal text emitted as-is.
    Literal(String),
    /// A `%s` marker: substitute the next rendered argument.
    Placeholder,
    /// A `%n` marker: substitute [`LINE_SEPARATOR`].
    Newline,
}

/// Scan a template into segments. Never fails; unknown `%` sequences are
/// kept as literal text.
pub(crate) fn scan(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                flush(&mut literal, &mut segments);
                segments.push(Segment::Placeholder);
            }
            Some('n') => {
                chars.next();
                flush(&mut literal, &mut segments);
                segments.push(Segment::Newline);
            }
            Some('%') => {
                chars.next();
                literal.push('%');
            }
            _ => literal.push('%'),
        }
    }
    flush(&mut literal, &mut segments);
    segments
}

fn flush(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

/// Count the `%s` placeholders in a scanned template.
pub(crate) fn placeholder_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|s| matches!(s, Segment::Placeholder))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_literal() {
        assert_eq!(
            scan("to be ASCII"),
            vec![Segment::Literal("to be ASCII".to_string())]
        );
    }

    #[test]
    fn test_markers_split_literals() {
        assert_eq!(
            scan("expecting:%n <%s>"),
            vec![
                Segment::Literal("expecting:".to_string()),
                Segment::Newline,
                Segment::Literal(" <".to_string()),
                Segment::Placeholder,
                Segment::Literal(">".to_string()),
            ]
        );
    }

    #[test]
    fn test_escaped_percent() {
        assert_eq!(
            scan("100%% of %s"),
            vec![
                Segment::Literal("100% of ".to_string()),
                Segment::Placeholder,
            ]
        );
    }

    #[test]
    fn test_unknown_sequence_passes_through() {
        assert_eq!(scan("%d%"), vec![Segment::Literal("%d%".to_string())]);
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(placeholder_count(&scan("%s and %s but not %n")), 2);
        assert_eq!(placeholder_count(&scan("no markers")), 0);
    }
}
