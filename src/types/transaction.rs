//! Transaction-related types for the OFX client
//!
//! This module defines the transaction record produced by statement
//! responses, and the statement result pairing the record list with the
//! account balance. Both are constructed only by the domain mapper from a
//! validated wire reply and are immutable thereafter.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single statement transaction line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Institution-assigned transaction identifier (`FITID`)
    pub id: String,

    /// Transaction type code as reported on the wire (e.g. `DEBIT`, `CREDIT`)
    pub trn_type: String,

    /// Signed amount; negative for debits
    ///
    /// Parsed strictly — a statement line whose amount does not parse fails
    /// the whole call rather than silently corrupting totals.
    pub amount: Decimal,

    /// Moment the transaction posted, normalized from the wire timestamp
    pub posted: DateTime<Utc>,

    /// Payee name if the line carried a structured payee, otherwise the
    /// free-text name field
    pub description: Option<String>,

    /// Memo text, copied verbatim
    pub memo: Option<String>,
}

/// Result of a statement request: balance plus transaction list
///
/// The balance is supplementary: if the server sends unparseable balance
/// text it defaults to zero instead of failing the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransactions {
    /// Available balance for bank accounts, ledger balance for credit cards
    pub balance: Decimal,

    /// Transactions in server-reported order
    pub transactions: Vec<Transaction>,
}

impl AccountTransactions {
    /// Pair a balance with its transaction list
    pub fn new(balance: Decimal, transactions: Vec<Transaction>) -> Self {
        AccountTransactions {
            balance,
            transactions,
        }
    }
}
