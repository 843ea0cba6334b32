//! Client module
//!
//! The caller-facing surface: [`OfxClient`] orchestrates the flow between
//! the request builders, the session dispatcher, and the domain mapper.
//!
//! # Components
//!
//! - `options` - endpoint, institution identity, and credentials
//! - `requests` - builders for the business message sets
//! - `mapper` - reply message sets to domain records

pub mod mapper;
pub mod options;
pub mod requests;

pub use options::OfxClientOptions;

use crate::protocol::MessageSetKind;
use crate::session::{Dispatcher, ReplayDispatcher, SessionDispatcher};
use crate::types::{
    Account, AccountTransactions, AccountType, OfxError, TransactionsFilter,
};
use chrono::Utc;
use std::sync::Arc;

/// OFX client: fetch accounts and statements from one institution
///
/// Holds no mutable state; every call builds, sends, and maps a fresh
/// request, so one client may be shared and called concurrently.
pub struct OfxClient {
    options: OfxClientOptions,
    dispatcher: Arc<dyn Dispatcher>,
}

impl OfxClient {
    /// Create a client that talks HTTP to the configured endpoint
    pub fn new(options: OfxClientOptions) -> Self {
        let dispatcher = Arc::new(SessionDispatcher::new(options.clone()));
        OfxClient {
            options,
            dispatcher,
        }
    }

    /// Create a client over a caller-supplied dispatcher
    ///
    /// This is how tests plug in the replay dispatcher, and how callers can
    /// substitute their own transport stack.
    pub fn with_dispatcher(options: OfxClientOptions, dispatcher: Arc<dyn Dispatcher>) -> Self {
        OfxClient {
            options,
            dispatcher,
        }
    }

    /// Fetch the accounts the server reports for the signed-on user
    ///
    /// Entries matching neither the bank nor the credit-card sub-shape are
    /// skipped; duplicates are passed through as reported.
    ///
    /// # Errors
    ///
    /// Any of the dispatch errors ([`OfxError::Serialization`],
    /// [`OfxError::Transport`], [`OfxError::Format`], [`OfxError::Protocol`])
    /// plus [`OfxError::Response`] if a matched entry lacks its account id.
    pub async fn get_accounts(&self) -> Result<Vec<Account>, OfxError> {
        let response = self
            .dispatcher
            .execute(requests::account_info(), MessageSetKind::SignupResponse)
            .await?;
        mapper::map_accounts(&response)
    }

    /// Fetch a statement for one account
    ///
    /// With no filter, the three months up to today are requested. The
    /// statement kind follows the account type: bank statement for checking
    /// accounts, credit-card statement for credit accounts.
    ///
    /// # Errors
    ///
    /// [`OfxError::Validation`] if the filter's start date is after its end
    /// date (no request is sent); otherwise any of the dispatch errors, and
    /// [`OfxError::Response`] if a transaction amount or date cannot be
    /// parsed. An unparseable balance is not an error; it is reported as
    /// zero.
    pub async fn get_transactions(
        &self,
        account: &Account,
        filter: Option<TransactionsFilter>,
    ) -> Result<AccountTransactions, OfxError> {
        let filter = match filter {
            Some(filter) => {
                filter.validate()?;
                filter
            }
            None => TransactionsFilter::last_three_months(Utc::now().date_naive()),
        };

        match account.account_type {
            AccountType::Credit => {
                let request = requests::credit_card_statement(account, &filter);
                let response = self
                    .dispatcher
                    .execute(request, MessageSetKind::CreditCardResponse)
                    .await?;
                mapper::map_credit_card_statement(&response)
            }
            AccountType::Checking => {
                let request = requests::bank_statement(account, &filter);
                let response = self
                    .dispatcher
                    .execute(request, MessageSetKind::BankResponse)
                    .await?;
                mapper::map_bank_statement(&response)
            }
        }
    }

    /// Replay a recorded response body through the statement mapping path
    ///
    /// Runs the same validation and mapping as [`OfxClient::get_transactions`]
    /// but against `body` instead of a live round trip. Useful against
    /// recorded server replies.
    pub async fn get_transactions_from_body(
        &self,
        account: &Account,
        filter: Option<TransactionsFilter>,
        body: &str,
    ) -> Result<AccountTransactions, OfxError> {
        let replay = OfxClient::with_dispatcher(
            self.options.clone(),
            Arc::new(ReplayDispatcher::new(body)),
        );
        replay.get_transactions(account, filter).await
    }
}
