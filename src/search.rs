// 🗂️ Search Engine - Two-tier ranking and per-category capping
//
// The engine re-scans the full input collections on every call: no index is
// built or retained, which keeps it pure and reentrant (safe to call from
// multiple tasks without locking).

use serde::Serialize;

use crate::entities::{Account, Customer, Transaction};
use crate::matcher::{has_high_priority_match, matches_query};

// ============================================================================
// FIELD EXTRACTION
// ============================================================================

/// Per-entity rule mapping a record to its ordered list of searchable text
/// fields. Pure and deterministic; numeric fields are rendered in their
/// canonical decimal form (e.g. "150.5"), not a display-formatted one, so a
/// query like "150" matches an amount of 150.50.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

impl Searchable for Account {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.account_number.clone(),
            self.account_holder.clone(),
            self.category.as_str().to_string(),
        ]
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.amount.to_string(),
            self.date.clone(),
            self.direction.as_str().to_string(),
        ]
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.customer_id.clone(),
            self.phone.clone(),
        ]
    }
}

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// A matched record tagged with its category.
///
/// Closed set of three variants; no fourth category is anticipated, so a sum
/// type is preferred over an open trait hierarchy. Serializes in the
/// `{"type": "account", "data": {...}}` shape the presentation layer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchResult {
    Account(Account),
    Transaction(Transaction),
    Customer(Customer),
}

impl SearchResult {
    /// Category tag as a lowercase string ("account", "transaction",
    /// "customer")
    pub fn category(&self) -> &'static str {
        match self {
            SearchResult::Account(_) => "account",
            SearchResult::Transaction(_) => "transaction",
            SearchResult::Customer(_) => "customer",
        }
    }
}

// ============================================================================
// SEARCH RESULTS
// ============================================================================

/// One bounded, ordered result list per category.
///
/// Results are ephemeral: constructed per query pass and replaced on the
/// next one. The flattened ordering (accounts, then transactions, then
/// customers) is what keyboard navigation in a UI shell indexes into.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub accounts: Vec<SearchResult>,
    pub transactions: Vec<SearchResult>,
    pub customers: Vec<SearchResult>,
}

impl SearchResults {
    /// Total result count across all three categories
    pub fn len(&self) -> usize {
        self.accounts.len() + self.transactions.len() + self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.transactions.is_empty() && self.customers.is_empty()
    }

    /// Iterate all results in flattened order:
    /// accounts, then transactions, then customers.
    pub fn iter_flat(&self) -> impl Iterator<Item = &SearchResult> {
        self.accounts
            .iter()
            .chain(self.transactions.iter())
            .chain(self.customers.iter())
    }

    /// Result at the given flattened index
    pub fn get(&self, index: usize) -> Option<&SearchResult> {
        self.iter_flat().nth(index)
    }

    /// Flattened index of the first result equal to `result`.
    ///
    /// Position is computed from the ordered lists by value comparison, so
    /// callers need no identity keys or side tables to map a selection back
    /// to its slot.
    pub fn position_of(&self, result: &SearchResult) -> Option<usize> {
        self.iter_flat().position(|r| r == result)
    }
}

// ============================================================================
// SEARCH ENGINE
// ============================================================================

/// Default per-category result cap
pub const DEFAULT_MAX_PER_CATEGORY: usize = 5;

/// Multi-category filter with a two-tier priority split.
///
/// High-priority matches (query is a prefix of a field or of one of its
/// words) precede normal substring matches; within each tier the input
/// order is preserved. Each category is filtered and capped independently.
pub struct SearchEngine {
    /// Maximum results returned per category (default: 5)
    pub max_per_category: usize,
}

impl SearchEngine {
    /// Create engine with the default per-category cap
    pub fn new() -> Self {
        SearchEngine {
            max_per_category: DEFAULT_MAX_PER_CATEGORY,
        }
    }

    /// Create engine with an explicit per-category cap
    pub fn with_max_per_category(max_per_category: usize) -> Self {
        SearchEngine { max_per_category }
    }

    /// Filter the three collections against a raw query string.
    ///
    /// The query is normalized (lowercased, trimmed) exactly once here; an
    /// empty or whitespace-only query returns three empty lists. Absent
    /// collections are simply empty slices. The function is total: no input
    /// shape it accepts can make it fail, and a record that matches nothing
    /// just does not appear.
    pub fn filter(
        &self,
        query: &str,
        accounts: &[Account],
        transactions: &[Transaction],
        customers: &[Customer],
    ) -> SearchResults {
        let lower_query = query.to_lowercase();
        let lower_query = lower_query.trim();

        if lower_query.is_empty() {
            return SearchResults::default();
        }

        SearchResults {
            accounts: self.filter_category(accounts, lower_query, |a| {
                SearchResult::Account(a.clone())
            }),
            transactions: self.filter_category(transactions, lower_query, |t| {
                SearchResult::Transaction(t.clone())
            }),
            customers: self.filter_category(customers, lower_query, |c| {
                SearchResult::Customer(c.clone())
            }),
        }
    }

    /// Filter one category: partition matches into high-priority and normal
    /// buckets (both in input order), concatenate high-then-normal, truncate
    /// to the cap.
    fn filter_category<T, F>(&self, records: &[T], query: &str, wrap: F) -> Vec<SearchResult>
    where
        T: Searchable,
        F: Fn(&T) -> SearchResult,
    {
        let mut high_priority = Vec::new();
        let mut normal = Vec::new();

        for record in records {
            let fields = record.search_fields();
            if matches_query(&fields, query) {
                if has_high_priority_match(&fields, query) {
                    high_priority.push(wrap(record));
                } else {
                    normal.push(wrap(record));
                }
            }
        }

        high_priority.extend(normal);
        high_priority.truncate(self.max_per_category);
        high_priority
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
