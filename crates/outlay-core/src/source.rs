//! Transaction sources and list helpers
//!
//! The analytics engine only needs a flat `Vec<Transaction>`. Sources hide
//! where it comes from: the bank-connection payload of the backend (nested
//! connections -> accounts -> transactions), a flat JSON export, or CSV.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::ReaderBuilder;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionKind};

/// Anything that can supply the transactions of one user
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Vec<Transaction>>;
}

/// Source over transactions already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    transactions: Vec<Transaction>,
}

impl StaticSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}

/// On-disk layouts a file source understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `{ "bankConnections": [{ "accounts": [{ "transactions": [...] }] }] }`
    BankConnections,
    /// `[ {transaction}, ... ]`
    TransactionList,
    /// CSV with camelCase transaction headers
    Csv,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankConnections => "bank_connections",
            Self::TransactionList => "transactions",
            Self::Csv => "csv",
        }
    }
}

impl std::str::FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bank_connections" | "bank-connections" => Ok(Self::BankConnections),
            "transactions" | "json" => Ok(Self::TransactionList),
            "csv" => Ok(Self::Csv),
            _ => Err(format!(
                "Unknown file format: {} (valid: bank_connections, transactions, csv)",
                s
            )),
        }
    }
}

/// Source reading a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: Option<FileFormat>,
}

impl FileSource {
    /// Format is detected from extension and content
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            format: Some(format),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TransactionSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<Transaction>> {
        let format = self.format.or_else(|| format_from_extension(&self.path));
        let content = std::fs::read_to_string(&self.path)?;
        let transactions = match format {
            Some(FileFormat::Csv) => parse_csv(content.as_bytes())?,
            Some(FileFormat::BankConnections) => parse_bank_connections(&content)?,
            Some(FileFormat::TransactionList) => parse_transaction_list(&content)?,
            None => parse_json_auto(&content)?,
        };

        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded transactions"
        );
        Ok(transactions)
    }
}

fn format_from_extension(path: &Path) -> Option<FileFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Some(FileFormat::Csv),
        _ => None,
    }
}

/// Load transactions from a file, detecting its format
pub async fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    FileSource::new(path).fetch().await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPayload {
    #[serde(default)]
    bank_connections: Vec<BankConnection>,
}

#[derive(Debug, Deserialize)]
struct BankConnection {
    #[serde(default)]
    accounts: Vec<BankAccount>,
}

#[derive(Debug, Deserialize)]
struct BankAccount {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

fn flatten(payload: UserPayload) -> Vec<Transaction> {
    payload
        .bank_connections
        .into_iter()
        .flat_map(|c| c.accounts)
        .flat_map(|a| a.transactions)
        .collect()
}

/// Flatten a user payload into its transactions, in connection/account order
pub fn parse_bank_connections(content: &str) -> Result<Vec<Transaction>> {
    let payload: UserPayload = serde_json::from_str(content)?;
    Ok(flatten(payload))
}

/// Parse a flat JSON array of transactions
pub fn parse_transaction_list(content: &str) -> Result<Vec<Transaction>> {
    Ok(serde_json::from_str(content)?)
}

/// Pick the JSON layout from the top-level shape
fn parse_json_auto(content: &str) -> Result<Vec<Transaction>> {
    let value: Value = serde_json::from_str(content)?;
    if value.is_array() {
        debug!("Detected flat transaction list");
        return Ok(serde_json::from_value(value)?);
    }
    if value.get("bankConnections").is_some() {
        debug!("Detected bank connections payload");
        return Ok(flatten(serde_json::from_value(value)?));
    }
    Err(Error::InvalidData(
        "Expected a transaction array or an object with bankConnections".into(),
    ))
}

/// Parse CSV with headers `id,amount,currency,valueDate,transactionDate,category,description,type`
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for result in rdr.deserialize() {
        let tx: Transaction = result?;
        transactions.push(tx);
    }
    Ok(transactions)
}

/// Category and direction filter for transaction lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Exact category match
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(ref category) = self.category {
            if tx.category != *category {
                return false;
            }
        }
        match self.kind {
            Some(kind) => tx.kind() == Some(kind),
            None => true,
        }
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

/// Distinct categories in first-seen order
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    transactions
        .iter()
        .filter(|tx| seen.insert(tx.category.as_str()))
        .map(|tx| tx.category.clone())
        .collect()
}
