// 🔍 Matcher - Substring and prefix predicates over searchable fields
//
// Two pure predicates shared by the search engine. Both lowercase the query
// themselves, so they are case-symmetric regardless of whether the caller
// already normalized it.

// ============================================================================
// SUBSTRING MATCH
// ============================================================================

/// Check whether `query` occurs as a substring of the record's searchable
/// text, case-insensitively.
///
/// The fields are joined with a single space before searching, so a query
/// can match across a field boundary (e.g. the last word of one field plus
/// the first word of the next). That cross-boundary behavior is part of the
/// matching contract and is asserted by tests; do not switch this to
/// per-field matching.
pub fn matches_query(fields: &[String], query: &str) -> bool {
    let lower_query = query.to_lowercase();
    let searchable = fields.join(" ").to_lowercase();
    searchable.contains(&lower_query)
}

// ============================================================================
// PRIORITY MATCH
// ============================================================================

/// Check whether `query` is a prefix of an entire field or of one of its
/// whitespace-delimited words, case-insensitively.
///
/// Evaluated per-field only: a match that exists solely across the joined
/// field boundary never counts as high priority. Callers invoke this after
/// `matches_query`, but the predicate does not depend on that ordering.
pub fn has_high_priority_match(fields: &[String], query: &str) -> bool {
    let lower_query = query.to_lowercase();

    for field in fields {
        let lower_field = field.to_lowercase();
        if lower_field.starts_with(&lower_query) {
            return true;
        }

        for word in lower_field.split_whitespace() {
            if word.starts_with(&lower_query) {
                return true;
            }
        }
    }

    false
}

// ============================================================================
// TESTS
// ============================================================================
