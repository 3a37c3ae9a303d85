// Financial Search - Core Library
// In-memory, multi-category substring search over financial records.
//
// The engine is the only part with real logic: a UI shell supplies the three
// record collections and a raw query, and gets back three bounded, ordered
// result lists. Formatting and highlighting are presentation helpers layered
// on top; the engine itself returns data only and never touches display
// state.

pub mod debounce;
pub mod entities;
pub mod format;
pub mod highlight;
pub mod matcher;
pub mod mock;
pub mod search;

// Re-export commonly used types
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_WINDOW};
pub use entities::{
    Account, AccountCategory, Customer, Transaction, TransactionDirection,
};
pub use format::{format_currency, format_date};
pub use highlight::{highlight, HighlightSegment};
pub use matcher::{has_high_priority_match, matches_query};
pub use search::{
    SearchEngine, SearchResult, SearchResults, Searchable, DEFAULT_MAX_PER_CATEGORY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
