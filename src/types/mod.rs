//! Types module
//!
//! Contains the caller-facing data structures used throughout the client.
//! This module organizes types into logical submodules:
//! - `account`: account records and the account kind
//! - `transaction`: transaction records and statement results
//! - `filter`: the date filter for statement requests
//! - `error`: error taxonomy for the whole client

pub mod account;
pub mod error;
pub mod filter;
pub mod transaction;

pub use account::{Account, AccountType};
pub use error::OfxError;
pub use filter::TransactionsFilter;
pub use transaction::{AccountTransactions, Transaction};
