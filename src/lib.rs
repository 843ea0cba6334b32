//! OFX Client Library
//!
//! # Overview
//!
//! This library is a client for the OFX 1.x financial data exchange
//! protocol: it signs on to an institution's OFX endpoint, requests account
//! and statement data, and maps the reply into plain domain records.
//!
//! OFX 1.x is an SGML dialect that predates well-formed markup — leaf
//! elements are never closed, so the wire grammar is ambiguous without a
//! schema side table. The codec here parses it with a stack-based scanner
//! over a closed tag catalogue, and re-serializes canonically enough that
//! compliant bodies round-trip byte for byte.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Domain records (Account, Transaction, filter) and errors
//! - [`protocol`] - Wire codec: element tree, schema catalogue,
//!   serializer/deserializer, message-set kinds
//! - [`session`] - Envelope builder, transport port, and the dispatcher
//!   running one authenticated request/response cycle
//! - [`client`] - The caller-facing facade and the domain mapper
//!
//! # Request Lifecycle
//!
//! Each call is one unit of work: build → serialize → post → deserialize →
//! validate sign-on → extract → map. Every step's failure is fatal to that
//! call; nothing is retried. The engine holds no state across calls, so a
//! single client may be used concurrently.
//!
//! # Example
//!
//! ```no_run
//! use ofx_client::{OfxClient, OfxClientOptions};
//! use url::Url;
//!
//! # async fn run() -> Result<(), ofx_client::OfxError> {
//! let options = OfxClientOptions::new(
//!     Url::parse("https://ofx.example.com/ofx").unwrap(),
//!     "HAN",
//!     "5959",
//!     "username",
//!     "password",
//! );
//! let client = OfxClient::new(options);
//!
//! for account in client.get_accounts().await? {
//!     let statement = client.get_transactions(&account, None).await?;
//!     println!("{}: {} transactions, balance {}",
//!         account.id, statement.transactions.len(), statement.balance);
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod client;
pub mod protocol;
pub mod session;
pub mod types;

pub use client::{OfxClient, OfxClientOptions};
pub use protocol::{deserialize, serialize, MessageSetKind, OfxElement};
pub use session::{Dispatcher, HttpTransport, OfxTransport, ReplayDispatcher, SessionDispatcher};
pub use types::{
    Account, AccountTransactions, AccountType, OfxError, Transaction, TransactionsFilter,
};
