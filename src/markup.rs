//! The `**bold**` convention used inside achievement strings.
//!
//! Delimiters pair up left to right. A trailing delimiter without a partner
//! stays in the text as written.

pub const DELIMITER: &str = "**";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Span::Plain(s) | Span::Strong(s) => s,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, Span::Strong(_))
    }
}

/// Split `text` into alternating plain and emphasized spans. Empty spans are
/// dropped, so `"****"` yields nothing.
pub fn parse_emphasis(text: &str) -> Vec<Span<'_>> {
    let marks = text
        .match_indices(DELIMITER)
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    let paired = marks.len() - marks.len() % 2;

    let mut spans = Vec::with_capacity(paired + 1);
    let mut cursor = 0;
    for pair in marks[..paired].chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        spans.push(Span::Plain(&text[cursor..open]));
        spans.push(Span::Strong(&text[open + DELIMITER.len()..close]));
        cursor = close + DELIMITER.len();
    }
    spans.push(Span::Plain(&text[cursor..]));

    spans.retain(|s| !s.text().is_empty());
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(
            parse_emphasis("no markup here"),
            vec![Span::Plain("no markup here")]
        );
        assert!(parse_emphasis("").is_empty());
    }

    #[test]
    fn test_alternating_spans() {
        let spans = parse_emphasis(
            "Optimized **Facebook Meta ad performance**, increasing engagement by **25%**",
        );
        assert_eq!(
            spans,
            vec![
                Span::Plain("Optimized "),
                Span::Strong("Facebook Meta ad performance"),
                Span::Plain(", increasing engagement by "),
                Span::Strong("25%"),
            ]
        );
    }

    #[test]
    fn test_leading_emphasis() {
        let spans = parse_emphasis("**30%** uplift");
        assert_eq!(spans, vec![Span::Strong("30%"), Span::Plain(" uplift")]);
        assert!(spans[0].is_strong());
    }

    #[test]
    fn test_unmatched_delimiter_is_literal() {
        let spans = parse_emphasis("a **b** c **d");
        assert_eq!(
            spans,
            vec![Span::Plain("a "), Span::Strong("b"), Span::Plain(" c **d")]
        );

        let spans = parse_emphasis("dangling ** only");
        assert_eq!(spans, vec![Span::Plain("dangling ** only")]);
    }

    #[test]
    fn test_empty_pairs_are_dropped() {
        assert!(parse_emphasis("****").is_empty());
        assert_eq!(
            parse_emphasis("a****b"),
            vec![Span::Plain("a"), Span::Plain("b")]
        );
    }

    #[test]
    fn test_multibyte_text() {
        let spans = parse_emphasis("R² of **74%** — “good”");
        assert_eq!(
            spans,
            vec![
                Span::Plain("R² of "),
                Span::Strong("74%"),
                Span::Plain(" — “good”"),
            ]
        );
    }
}
