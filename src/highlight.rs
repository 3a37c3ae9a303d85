// ✨ Highlighter - Mark query occurrences inside a display string
//
// Pure splitting only: the presentation layer decides how matching segments
// are visually marked. The query is matched as a literal string (never as a
// pattern), case-insensitively, left to right without overlap.

// ============================================================================
// SEGMENT
// ============================================================================

/// One piece of the split text. Segments concatenate back to the exact
/// input; matching segments carry the original-case substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSegment<'a> {
    pub is_match: bool,
    pub text: &'a str,
}

impl<'a> HighlightSegment<'a> {
    fn plain(text: &'a str) -> Self {
        HighlightSegment {
            is_match: false,
            text,
        }
    }

    fn matched(text: &'a str) -> Self {
        HighlightSegment {
            is_match: true,
            text,
        }
    }
}

// ============================================================================
// HIGHLIGHT
// ============================================================================

/// Split `text` into alternating non-matching and matching segments around
/// case-insensitive occurrences of the literal `query`.
///
/// A trimmed-empty query returns the whole text as a single non-matching
/// segment. Empty segments are never emitted between matches, so adjacent
/// occurrences produce adjacent matching segments.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<HighlightSegment<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![HighlightSegment::plain(text)];
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len(&text[pos..], &needle) {
            Some(len) => {
                if pos > segment_start {
                    segments.push(HighlightSegment::plain(&text[segment_start..pos]));
                }
                segments.push(HighlightSegment::matched(&text[pos..pos + len]));
                pos += len;
                segment_start = pos;
            }
            None => {
                // Advance one char; pos always stays on a char boundary.
                pos += text[pos..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
            }
        }
    }

    if segment_start < text.len() {
        segments.push(HighlightSegment::plain(&text[segment_start..]));
    }
    if segments.is_empty() {
        // No match in empty text still yields one whole-text segment.
        segments.push(HighlightSegment::plain(text));
    }

    segments
}

/// Byte length of a case-insensitive occurrence of `needle` at the start of
/// `haystack`, if present. Compares lowercased char sequences so the match
/// length refers to the original (unlowercased) bytes.
fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched_chars = 0;
    let mut matched_bytes = 0;

    for c in haystack.chars() {
        for lower in c.to_lowercase() {
            if matched_chars == needle.len() {
                break;
            }
            if lower != needle[matched_chars] {
                return None;
            }
            matched_chars += 1;
        }

        // Whole chars only: a char whose lowercase form straddles the end of
        // the needle is consumed in full.
        matched_bytes += c.len_utf8();
        if matched_chars == needle.len() {
            return Some(matched_bytes);
        }
    }

    None
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(segments: &[HighlightSegment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_case_insensitive_match_keeps_original_casing() {
        let segments = highlight("Hello World", "world");

        assert_eq!(reconstruct(&segments), "Hello World");

        let matches: Vec<_> = segments.iter().filter(|s| s.is_match).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "World");
    }

    #[test]
    fn test_empty_query_is_single_plain_segment() {
        for query in ["", "   "] {
            let segments = highlight("Hello World", query);
            assert_eq!(segments, vec![HighlightSegment::plain("Hello World")]);
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(highlight("", "x"), vec![HighlightSegment::plain("")]);
        assert_eq!(highlight("", ""), vec![HighlightSegment::plain("")]);
    }

    #[test]
    fn test_multiple_occurrences() {
        let segments = highlight("abcabcabc", "b");

        assert_eq!(reconstruct(&segments), "abcabcabc");
        assert_eq!(segments.iter().filter(|s| s.is_match).count(), 3);
        assert!(segments.iter().filter(|s| s.is_match).all(|s| s.text == "b"));
    }

    #[test]
    fn test_match_at_string_edges() {
        let segments = highlight("john smith", "john");
        assert_eq!(
            segments,
            vec![
                HighlightSegment::matched("john"),
                HighlightSegment::plain(" smith"),
            ]
        );

        let segments = highlight("john smith", "smith");
        assert_eq!(
            segments,
            vec![
                HighlightSegment::plain("john "),
                HighlightSegment::matched("smith"),
            ]
        );
    }

    #[test]
    fn test_whole_text_match() {
        let segments = highlight("John", "JOHN");
        assert_eq!(segments, vec![HighlightSegment::matched("John")]);
    }

    #[test]
    fn test_adjacent_occurrences_have_no_empty_gap() {
        let segments = highlight("aaaa", "aa");
        assert_eq!(
            segments,
            vec![
                HighlightSegment::matched("aa"),
                HighlightSegment::matched("aa"),
            ]
        );
    }

    #[test]
    fn test_metacharacters_are_literal() {
        // "$1,234.56" and friends must match as plain text, not patterns.
        let segments = highlight("pay $9.99 today", "$9.99");
        assert_eq!(reconstruct(&segments), "pay $9.99 today");
        assert_eq!(segments.iter().filter(|s| s.is_match).count(), 1);

        // "." must not act as a wildcard.
        let segments = highlight("pay x9y99 today", ".9.99");
        assert!(segments.iter().all(|s| !s.is_match));
    }

    #[test]
    fn test_surrounding_query_whitespace_is_trimmed() {
        let segments = highlight("Hello World", "  world  ");
        assert_eq!(segments.iter().filter(|s| s.is_match).count(), 1);
    }

    #[test]
    fn test_multibyte_text_boundaries() {
        let segments = highlight("café CAFÉ", "café");

        assert_eq!(reconstruct(&segments), "café CAFÉ");
        let matches: Vec<_> = segments.iter().filter(|s| s.is_match).collect();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "café");
        assert_eq!(matches[1].text, "CAFÉ");
    }
}
