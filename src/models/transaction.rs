use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Cash-book category. Anything the server sends besides income/expense
/// lands in `Other` and is skipped during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// TransactionRecord: one cash-book entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "transaction_type")]
    pub kind: TransactionType,
    #[serde(rename = "transaction_amount", deserialize_with = "decimal_from_json")]
    pub amount: Decimal,
    #[serde(rename = "transaction_time", deserialize_with = "timestamp_from_json")]
    pub timestamp: DateTime<FixedOffset>,
}

impl TransactionRecord {
    pub fn new(kind: TransactionType, amount: Decimal, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    /// Calendar day of the record in its own offset.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

// ---------------------------------------------------------------------------
// OwnerAccount: wire shape of `transaction/owner-accounts`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerAccount {
    #[serde(default)]
    pub id: Option<Value>,
    /// Entries that fail to parse are skipped rather than failing the
    /// whole account.
    #[serde(default, alias = "transaction_set", deserialize_with = "records_from_json")]
    pub transactions: Vec<TransactionRecord>,
}

/// Flatten the nested per-account lists into one record list.
pub fn flatten_accounts(accounts: Vec<OwnerAccount>) -> Vec<TransactionRecord> {
    accounts
        .into_iter()
        .flat_map(|account| account.transactions)
        .collect()
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

fn records_from_json<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<TransactionRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();
    let records: Vec<TransactionRecord> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!(error = %e, "unparseable transaction");
                None
            }
        })
        .collect();
    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(skipped, total, "skipped malformed transactions");
    }
    Ok(records)
}

fn decimal_from_json<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = match &value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a number for transaction_amount, got {}",
                other
            )))
        }
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(serde::de::Error::custom)
}

fn timestamp_from_json<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {}", raw)))
}

/// Parse the ISO-like timestamps the backend emits.
///
/// Offset-less forms are read as local wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => Some(local.fixed_offset()),
        None => Some(Utc.from_utc_datetime(&naive).fixed_offset()),
    }
}
