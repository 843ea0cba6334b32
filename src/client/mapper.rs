//! Domain mapper
//!
//! Turns validated reply message sets into caller-facing records, applying
//! the defensive rules the wire format needs:
//!
//! - Account entries are classified by which sub-shape they carry
//!   (`BANKACCTINFO` vs `CCACCTINFO`); entries matching neither are skipped
//!   with a warning, not failed.
//! - Transaction amounts parse strictly — a bad amount fails the whole
//!   call, since defaulting it would corrupt financial totals.
//! - Posted dates are normalized to the canonical 14-character timestamp
//!   (right-padded with zeros or truncated) before parsing; a normalized
//!   value that still fails is fatal.
//! - Balances are supplementary: unparseable balance text defaults to zero
//!   with a warning instead of failing the call.

use crate::protocol::OfxElement;
use crate::types::{Account, AccountTransactions, AccountType, OfxError, Transaction};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

/// Canonical wire timestamp length (`YYYYMMDDHHMMSS`)
const DATETIME_LENGTH: usize = 14;

/// Extract account records from an account-info response set
///
/// `message_set` is the `SIGNUPMSGSRSV1` element as returned by the
/// dispatcher.
///
/// # Errors
///
/// - [`OfxError::Protocol`] if the account-info transaction response is
///   missing from the set
/// - [`OfxError::Response`] if a matched sub-shape lacks its account id
pub(crate) fn map_accounts(message_set: &OfxElement) -> Result<Vec<Account>, OfxError> {
    let account_list = message_set
        .path(&["ACCTINFOTRNRS", "ACCTINFORS"])
        .ok_or_else(|| OfxError::protocol("required response is not present in message set"))?;

    let mut accounts = Vec::new();
    for info in account_list.children_named("ACCTINFO") {
        let description = info.leaf_text("DESC").map(str::to_string);
        let phone = info.leaf_text("PHONE").map(str::to_string);

        let account = if let Some(bank) = info.child("BANKACCTINFO") {
            let from = bank
                .child("BANKACCTFROM")
                .ok_or_else(|| OfxError::response("bank account info lacks BANKACCTFROM"))?;
            Account {
                account_type: AccountType::Checking,
                id: required_leaf(from, "ACCTID")?,
                bank_id: from.leaf_text("BANKID").map(str::to_string),
                description,
                phone,
                subtype: from.leaf_text("ACCTTYPE").map(str::to_string),
                status: bank.leaf_text("SVCSTATUS").map(str::to_string),
            }
        } else if let Some(card) = info.child("CCACCTINFO") {
            let from = card
                .child("CCACCTFROM")
                .ok_or_else(|| OfxError::response("credit card info lacks CCACCTFROM"))?;
            Account {
                account_type: AccountType::Credit,
                id: required_leaf(from, "ACCTID")?,
                bank_id: None,
                description,
                phone,
                subtype: None,
                status: card.leaf_text("SVCSTATUS").map(str::to_string),
            }
        } else {
            warn!(
                description = description.as_deref().unwrap_or(""),
                "skipping account entry with no recognized sub-shape"
            );
            continue;
        };

        accounts.push(account);
    }
    Ok(accounts)
}

/// Extract balance and transactions from a bank statement response set
pub(crate) fn map_bank_statement(
    message_set: &OfxElement,
) -> Result<AccountTransactions, OfxError> {
    // Bank accounts report the available balance.
    map_statement(message_set, "STMTTRNRS", "STMTRS", "AVAILBAL")
}

/// Extract balance and transactions from a credit-card statement response set
pub(crate) fn map_credit_card_statement(
    message_set: &OfxElement,
) -> Result<AccountTransactions, OfxError> {
    // Credit cards report the ledger balance.
    map_statement(message_set, "CCSTMTTRNRS", "CCSTMTRS", "LEDGERBAL")
}

fn map_statement(
    message_set: &OfxElement,
    response_tag: &str,
    statement_tag: &str,
    balance_tag: &str,
) -> Result<AccountTransactions, OfxError> {
    let statement = message_set
        .path(&[response_tag, statement_tag])
        .ok_or_else(|| OfxError::protocol("required response is not present in message set"))?;

    let transactions = match statement.child("BANKTRANLIST") {
        Some(list) => list
            .children_named("STMTTRN")
            .map(map_transaction)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(AccountTransactions::new(
        parse_balance(statement, balance_tag),
        transactions,
    ))
}

fn map_transaction(line: &OfxElement) -> Result<Transaction, OfxError> {
    let raw_amount = line
        .leaf_text("TRNAMT")
        .ok_or_else(|| OfxError::response("transaction amount missing"))?;
    let amount = Decimal::from_str(raw_amount).map_err(|_| {
        OfxError::response(format!(
            "transaction amount cannot be parsed: '{}'",
            raw_amount
        ))
    })?;

    let raw_posted = line
        .leaf_text("DTPOSTED")
        .ok_or_else(|| OfxError::response("transaction date missing"))?;
    let posted = parse_posted(raw_posted)?;

    // A structured payee name wins over the free-text name field.
    let description = line
        .child("PAYEE")
        .and_then(|payee| payee.leaf_text("NAME"))
        .or_else(|| line.leaf_text("NAME"))
        .map(str::to_string);

    Ok(Transaction {
        id: required_leaf(line, "FITID")?,
        trn_type: required_leaf(line, "TRNTYPE")?,
        amount,
        posted,
        description,
        memo: line.leaf_text("MEMO").map(str::to_string),
    })
}

/// Normalize a wire timestamp to 14 characters and parse it
///
/// Servers send anything from bare dates (`20230101`) to timestamps with
/// sub-second and timezone suffixes; shorter values are right-padded with
/// zeros and longer ones truncated before the canonical-format parse.
fn parse_posted(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, OfxError> {
    let mut normalized: String = raw.chars().take(DATETIME_LENGTH).collect();
    while normalized.len() < DATETIME_LENGTH {
        normalized.push('0');
    }

    chrono::NaiveDateTime::parse_from_str(&normalized, "%Y%m%d%H%M%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            OfxError::response(format!("transaction date cannot be parsed: '{}'", raw))
        })
}

/// Parse a balance, defaulting to zero on missing or malformed text
fn parse_balance(statement: &OfxElement, balance_tag: &str) -> Decimal {
    let raw = statement
        .child(balance_tag)
        .and_then(|balance| balance.leaf_text("BALAMT"))
        .unwrap_or("");
    match Decimal::from_str(raw) {
        Ok(amount) => amount,
        Err(_) => {
            warn!(balance = raw, tag = balance_tag, "unparseable balance, defaulting to zero");
            Decimal::ZERO
        }
    }
}

fn required_leaf(element: &OfxElement, tag: &str) -> Result<String, OfxError> {
    element
        .leaf_text(tag)
        .map(str::to_string)
        .ok_or_else(|| OfxError::response(format!("required field {} missing", tag)))
}
