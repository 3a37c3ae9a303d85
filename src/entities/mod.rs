// Entity Models - Searchable financial records
//
// All three entities are plain read-only values: the search engine never
// mutates or retains them, and identity is whatever the caller put in `id`.

pub mod account;
pub mod customer;
pub mod transaction;

pub use account::{Account, AccountCategory};
pub use customer::Customer;
pub use transaction::{Transaction, TransactionDirection};
