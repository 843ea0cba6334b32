//! Business request builders
//!
//! Builds the three business message sets the client sends: account info,
//! bank statement, and credit-card statement. Children are inserted in
//! schema declaration order. Each transaction-level request carries a fresh
//! `TRNUID`.

use crate::protocol::{MessageSetKind, OfxElement};
use crate::types::{Account, TransactionsFilter};
use chrono::NaiveDate;
use uuid::Uuid;

/// `DTACCTUP` sentinel asking for the full account list
const ACCOUNT_LIST_SINCE: &str = "19900101000000";

/// Fresh per-request transaction UID
fn transaction_uid() -> String {
    Uuid::new_v4().to_string()
}

/// Filter dates go on the wire as midnight timestamps
fn format_date(date: NaiveDate) -> String {
    format!("{}000000", date.format("%Y%m%d"))
}

/// Account-info request (`SIGNUPMSGSRQV1`)
pub(crate) fn account_info() -> OfxElement {
    OfxElement::container(
        MessageSetKind::SignupRequest.tag(),
        vec![OfxElement::container(
            "ACCTINFOTRNRQ",
            vec![
                OfxElement::leaf("TRNUID", transaction_uid()),
                OfxElement::leaf("CLTCOOKIE", "4"),
                OfxElement::container(
                    "ACCTINFORQ",
                    vec![OfxElement::leaf("DTACCTUP", ACCOUNT_LIST_SINCE)],
                ),
            ],
        )],
    )
}

/// Bank statement request (`BANKMSGSRQV1`) for one account and date range
pub(crate) fn bank_statement(account: &Account, filter: &TransactionsFilter) -> OfxElement {
    let bank_acct_from = OfxElement::container(
        "BANKACCTFROM",
        vec![
            OfxElement::leaf("BANKID", account.bank_id.clone().unwrap_or_default()),
            OfxElement::leaf("ACCTID", account.id.clone()),
            OfxElement::leaf(
                "ACCTTYPE",
                account.subtype.clone().unwrap_or_else(|| "CHECKING".to_string()),
            ),
        ],
    );

    OfxElement::container(
        MessageSetKind::BankRequest.tag(),
        vec![OfxElement::container(
            "STMTTRNRQ",
            vec![
                OfxElement::leaf("TRNUID", transaction_uid()),
                OfxElement::container(
                    "STMTRQ",
                    vec![bank_acct_from, include_transactions(filter)],
                ),
            ],
        )],
    )
}

/// Credit-card statement request (`CREDITCARDMSGSRQV1`)
pub(crate) fn credit_card_statement(
    account: &Account,
    filter: &TransactionsFilter,
) -> OfxElement {
    let cc_acct_from = OfxElement::container(
        "CCACCTFROM",
        vec![OfxElement::leaf("ACCTID", account.id.clone())],
    );

    OfxElement::container(
        MessageSetKind::CreditCardRequest.tag(),
        vec![OfxElement::container(
            "CCSTMTTRNRQ",
            vec![
                OfxElement::leaf("TRNUID", transaction_uid()),
                OfxElement::container(
                    "CCSTMTRQ",
                    vec![cc_acct_from, include_transactions(filter)],
                ),
            ],
        )],
    )
}

fn include_transactions(filter: &TransactionsFilter) -> OfxElement {
    OfxElement::container(
        "INCTRAN",
        vec![
            OfxElement::leaf("DTSTART", format_date(filter.start)),
            OfxElement::leaf("DTEND", format_date(filter.end)),
            OfxElement::leaf("INCLUDE", "Y"),
        ],
    )
}
