//! Account-related types for the OFX client
//!
//! This module defines the account record returned by account-info responses.
//! Records are constructed once per server-reported account entry by the
//! domain mapper; duplicates reported by the server are passed through
//! unchanged.

use serde::{Deserialize, Serialize};

/// Kind of account reported by the institution
///
/// Bank account entries map to `Checking`; credit-card entries map to
/// `Credit`. The kind decides which statement request the client builds
/// and which balance field it reads from the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Bank account, requested via the bank statement message set
    Checking,
    /// Credit-card account, requested via the credit-card message set
    Credit,
}

/// A single account as reported by an account-info response
///
/// Checking accounts carry a routing (bank) id and a subtype derived from
/// the bank sub-shape; credit accounts carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Kind of account (checking or credit)
    pub account_type: AccountType,

    /// Account number as reported by the institution
    pub id: String,

    /// Routing/bank identifier; absent for credit accounts
    pub bank_id: Option<String>,

    /// Human-readable description supplied by the server
    pub description: Option<String>,

    /// Customer-service phone number supplied by the server
    pub phone: Option<String>,

    /// Account subtype (e.g. `CHECKING`, `SAVINGS`); bank accounts only
    pub subtype: Option<String>,

    /// Service status reported by the server (e.g. `ACTIVE`)
    pub status: Option<String>,
}

impl Account {
    /// Create an account with only the fields needed to request a statement
    ///
    /// Description, phone, subtype, and status are left unset; they are
    /// informational and not part of any request.
    pub fn new(
        account_type: AccountType,
        id: impl Into<String>,
        bank_id: Option<String>,
    ) -> Self {
        Account {
            account_type,
            id: id.into(),
            bank_id,
            description: None,
            phone: None,
            subtype: None,
            status: None,
        }
    }
}
