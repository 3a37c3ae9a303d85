// 💸 Transaction Entity - Ledger movement against an account

use serde::{Deserialize, Serialize};

// ============================================================================
// DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    /// Money leaving the account
    Debit,

    /// Money entering the account
    Credit,
}

impl TransactionDirection {
    /// Lowercase wire/search form ("debit", "credit")
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionDirection::Debit => "debit",
            TransactionDirection::Credit => "credit",
        }
    }
}

// ============================================================================
// TRANSACTION RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-supplied identifier (e.g. "txn-001")
    pub id: String,

    /// Signed decimal amount
    pub amount: f64,

    /// ISO-8601 calendar date or date-time string, kept verbatim.
    /// The engine searches the raw string; display formatting happens
    /// in the presentation layer via `format_date`.
    pub date: String,

    /// Free-text description (e.g. "Grocery Store Purchase")
    pub description: String,

    /// Identifier of the owning account
    pub account_id: String,

    /// Debit or credit
    pub direction: TransactionDirection,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        description: impl Into<String>,
        account_id: impl Into<String>,
        direction: TransactionDirection,
    ) -> Self {
        Transaction {
            id: id.into(),
            amount,
            date: date.into(),
            description: description.into(),
            account_id: account_id.into(),
            direction,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_wire_form() {
        assert_eq!(TransactionDirection::Debit.as_str(), "debit");
        assert_eq!(TransactionDirection::Credit.as_str(), "credit");
    }

    #[test]
    fn test_transaction_deserializes_from_wire_shape() {
        let json = r#"{
            "id": "txn-001",
            "amount": 125.5,
            "date": "2024-01-15",
            "description": "Grocery Store Purchase",
            "account_id": "acc-001",
            "direction": "debit"
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount, 125.5);
        assert_eq!(txn.direction, TransactionDirection::Debit);
    }
}
