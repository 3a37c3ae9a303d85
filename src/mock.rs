// 📋 Sample Data - Built-in dataset for the demo CLI and end-to-end tests

use crate::entities::{
    Account, AccountCategory, Customer, Transaction, TransactionDirection,
};

pub fn sample_accounts() -> Vec<Account> {
    use AccountCategory::*;

    vec![
        Account::new("acc-001", "1234567890", "John Smith", 5420.50, Checking),
        Account::new("acc-002", "2345678901", "Sarah Johnson", 12350.75, Savings),
        Account::new("acc-003", "3456789012", "Michael Brown", -850.25, Credit),
        Account::new("acc-004", "4567890123", "Emily Davis", 8900.00, Checking),
        Account::new("acc-005", "5678901234", "David Wilson", 25600.40, Savings),
        Account::new("acc-006", "6789012345", "Jennifer Martinez", -1200.00, Credit),
        Account::new("acc-007", "7890123456", "Robert Taylor", 3250.80, Checking),
    ]
}

pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionDirection::*;

    vec![
        Transaction::new("txn-001", 125.50, "2024-01-15", "Grocery Store Purchase", "acc-001", Debit),
        Transaction::new("txn-002", 2500.00, "2024-01-14", "Salary Deposit", "acc-001", Credit),
        Transaction::new("txn-003", 45.99, "2024-01-13", "Netflix Subscription", "acc-004", Debit),
        Transaction::new("txn-004", 1200.00, "2024-01-12", "Rent Payment", "acc-002", Debit),
        Transaction::new("txn-005", 350.25, "2024-01-11", "Amazon Purchase", "acc-003", Debit),
        Transaction::new("txn-006", 75.00, "2024-01-10", "Gas Station", "acc-001", Debit),
        Transaction::new("txn-007", 5000.00, "2024-01-09", "Investment Transfer", "acc-005", Credit),
        Transaction::new("txn-008", 220.00, "2024-01-08", "Electric Bill Payment", "acc-004", Debit),
        Transaction::new("txn-009", 89.99, "2024-01-07", "Restaurant Dinner", "acc-001", Debit),
        Transaction::new("txn-010", 1500.00, "2024-01-06", "Freelance Payment", "acc-002", Credit),
        Transaction::new("txn-011", 450.00, "2024-01-05", "Car Insurance", "acc-007", Debit),
        Transaction::new("txn-012", 32.50, "2024-01-04", "Coffee Shop", "acc-004", Debit),
    ]
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("cust-001", "John Smith", "john.smith@email.com", "(555) 123-4567", "CUST-10001"),
        Customer::new("cust-002", "Sarah Johnson", "sarah.j@email.com", "(555) 234-5678", "CUST-10002"),
        Customer::new("cust-003", "Michael Brown", "mbrown@email.com", "(555) 345-6789", "CUST-10003"),
        Customer::new("cust-004", "Emily Davis", "emily.davis@email.com", "(555) 456-7890", "CUST-10004"),
        Customer::new("cust-005", "David Wilson", "dwilson@email.com", "(555) 567-8901", "CUST-10005"),
        Customer::new("cust-006", "Jennifer Martinez", "jmartinez@email.com", "(555) 678-9012", "CUST-10006"),
        Customer::new("cust-007", "Robert Taylor", "robert.t@email.com", "(555) 789-0123", "CUST-10007"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchEngine, SearchResult};

    #[test]
    fn test_sample_dataset_shape() {
        assert_eq!(sample_accounts().len(), 7);
        assert_eq!(sample_transactions().len(), 12);
        assert_eq!(sample_customers().len(), 7);
    }

    #[test]
    fn test_john_finds_account_and_customer_but_no_transactions() {
        let results = SearchEngine::new().filter(
            "john",
            &sample_accounts(),
            &sample_transactions(),
            &sample_customers(),
        );

        // John Smith's account, no transaction text mentions "john",
        // and two customers: John Smith plus sarah.j's "johnson".
        assert_eq!(results.accounts.len(), 2); // John Smith + Sarah Johnson
        assert!(results.transactions.is_empty());
        assert_eq!(results.customers.len(), 2);

        match &results.accounts[0] {
            SearchResult::Account(a) => assert_eq!(a.account_holder, "John Smith"),
            other => panic!("expected account result, got {other:?}"),
        }
    }

    #[test]
    fn test_payment_matches_multiple_transactions() {
        let results = SearchEngine::new().filter(
            "payment",
            &sample_accounts(),
            &sample_transactions(),
            &sample_customers(),
        );

        // Rent Payment, Electric Bill Payment, Freelance Payment.
        assert_eq!(results.transactions.len(), 3);
        assert!(results.accounts.is_empty());
        assert!(results.customers.is_empty());
    }
}
