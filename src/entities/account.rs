// 💳 Account Entity - Deposit/credit account record
// Read-only input to the search engine; owned and mutated by the caller

use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Checking account (debit card, daily transactions)
    Checking,

    /// Savings account (interest-bearing)
    Savings,

    /// Credit card (credit line)
    Credit,
}

impl AccountCategory {
    /// Lowercase wire/search form ("checking", "savings", "credit")
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountCategory::Checking => "checking",
            AccountCategory::Savings => "savings",
            AccountCategory::Credit => "credit",
        }
    }
}

// ============================================================================
// ACCOUNT RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Caller-supplied identifier (e.g. "acc-001")
    pub id: String,

    /// Account number (e.g. "1234567890")
    pub account_number: String,

    /// Holder's full name
    pub account_holder: String,

    /// Signed balance; negative for carried credit-card debt
    pub balance: f64,

    /// Account category
    pub category: AccountCategory,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: f64,
        category: AccountCategory,
    ) -> Self {
        Account {
            id: id.into(),
            account_number: account_number.into(),
            account_holder: account_holder.into(),
            balance,
            category,
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
    fn test_category_wire_form() {
        assert_eq!(AccountCategory::Checking.as_str(), "checking");
        assert_eq!(AccountCategory::Savings.as_str(), "savings");
        assert_eq!(AccountCategory::Credit.as_str(), "credit");
    }

    #[test]
    fn test_account_json_roundtrip() {
        let account = Account::new(
            "acc-001",
            "1234567890",
            "John Smith",
            5420.50,
            AccountCategory::Checking,
        );

        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"category\":\"checking\""));

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}
