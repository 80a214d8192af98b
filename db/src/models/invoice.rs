use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of invoice states. Stored as text; raw rows carry the stored
/// string and mapping functions parse it with [`InvoiceStatus::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(format!("unknown invoice status: {}", other)),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
        }
    }
}

/// One row of the windowed invoice search. `total_count` is the window
/// aggregate attached to every row; it is metadata stripped during view
/// mapping, never domain data.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FilteredInvoiceRow {
    pub id: Uuid,
    pub amount: i32,
    pub date: NaiveDate,
    pub status: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LatestInvoiceRow {
    pub id: Uuid,
    pub amount: i32,
    pub name: String,
    pub image_url: String,
    pub email: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceFormRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: String,
}

/// Conditional paid/pending sums computed store-side in one pass.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct InvoiceStatusTotals {
    pub paid: i64,
    pub pending: i64,
}
