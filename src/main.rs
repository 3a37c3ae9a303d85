// Financial Search - Demo CLI
// Runs one query against the built-in sample dataset or a JSON file of
// records, then prints each category with formatted values and the matched
// portion of each line bracketed.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use serde::Deserialize;

use finsearch::{
    format_currency, format_date, highlight, Account, Customer, SearchEngine, SearchResult,
    Transaction, DEFAULT_MAX_PER_CATEGORY,
};

/// JSON input shape: absent collections are treated as empty.
#[derive(Deserialize, Default)]
struct Dataset {
    #[serde(default)]
    accounts: Vec<Account>,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    customers: Vec<Customer>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut query: Option<String> = None;
    let mut limit = DEFAULT_MAX_PER_CATEGORY;
    let mut data_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" => {
                let value = args.get(i + 1).context("--limit requires a value")?;
                limit = value
                    .parse()
                    .with_context(|| format!("invalid --limit value: {value}"))?;
                i += 2;
            }
            "--data" => {
                data_path = Some(
                    args.get(i + 1)
                        .context("--data requires a file path")?
                        .clone(),
                );
                i += 2;
            }
            arg if query.is_none() => {
                query = Some(arg.to_string());
                i += 1;
            }
            arg => {
                eprintln!("Unexpected argument: {arg}");
                print_usage();
                process::exit(2);
            }
        }
    }

    let Some(query) = query else {
        print_usage();
        process::exit(2);
    };

    let dataset = match data_path {
        Some(path) => load_dataset(Path::new(&path))?,
        None => Dataset {
            accounts: finsearch::mock::sample_accounts(),
            transactions: finsearch::mock::sample_transactions(),
            customers: finsearch::mock::sample_customers(),
        },
    };

    let engine = SearchEngine::with_max_per_category(limit);
    let results = engine.filter(
        &query,
        &dataset.accounts,
        &dataset.transactions,
        &dataset.customers,
    );

    if results.is_empty() {
        println!("No results for \"{query}\"");
        return Ok(());
    }

    print_category("Accounts", &results.accounts, &query);
    print_category("Transactions", &results.transactions, &query);
    print_category("Customers", &results.customers, &query);
    println!("{} result(s)", results.len());

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: finsearch <query> [--limit N] [--data records.json]");
    eprintln!();
    eprintln!("Searches accounts, transactions, and customers. Without --data,");
    eprintln!("the built-in sample dataset is used.");
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {path:?}"))?;

    serde_json::from_str(&content).context("Failed to parse records JSON")
}

fn print_category(label: &str, results: &[SearchResult], query: &str) {
    if results.is_empty() {
        return;
    }

    println!("{label}:");
    for result in results {
        match result {
            SearchResult::Account(a) => {
                println!(
                    "  {} · {} · {} · {}",
                    mark(&a.account_holder, query),
                    mark(&a.account_number, query),
                    a.category.as_str(),
                    format_currency(a.balance),
                );
            }
            SearchResult::Transaction(t) => {
                println!(
                    "  {} · {} · {} · {}",
                    mark(&t.description, query),
                    format_currency(t.amount),
                    format_date(&t.date),
                    t.direction.as_str(),
                );
            }
            SearchResult::Customer(c) => {
                println!(
                    "  {} · {} · {} · {}",
                    mark(&c.name, query),
                    mark(&c.email, query),
                    mark(&c.customer_id, query),
                    c.phone,
                );
            }
        }
    }
    println!();
}

/// Bracket the matched portions of a display string: "John" -> "[John]"
fn mark(text: &str, query: &str) -> String {
    highlight(text, query)
        .iter()
        .map(|segment| {
            if segment.is_match {
                format!("[{}]", segment.text)
            } else {
                segment.text.to_string()
            }
        })
        .collect()
}
