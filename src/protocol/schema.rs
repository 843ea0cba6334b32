//! Schema catalogue: the fixed tag vocabulary
//!
//! OFX 1.x is an SGML dialect in which leaf elements are never closed, so
//! the grammar alone cannot tell a container from a leaf — the scanner has
//! to consult a side table. This module is that table: a closed catalogue
//! mapping every supported tag name to its kind, built once at first use
//! and immutable afterwards.
//!
//! The vocabulary covers the four supported top-level message sets
//! (sign-on, signup/account-info, bank statement, credit-card statement)
//! in both request and response form. A tag outside the catalogue is a
//! serialization error on the outbound path and a format error on the
//! inbound path — never silently skipped, because later semantic checks
//! (the sign-on status gate) depend on trusting the parsed shape.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Kind of a wire element, as declared by the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Holds nested child elements; always explicitly closed on the wire
    Container,
    /// Holds a scalar text value; never closed on the wire
    Leaf,
}

/// Tags whose elements contain child elements
const CONTAINER_TAGS: &[&str] = &[
    "OFX",
    // Sign-on
    "SIGNONMSGSRQV1",
    "SIGNONMSGSRSV1",
    "SONRQ",
    "SONRS",
    "STATUS",
    "FI",
    // Signup (account info)
    "SIGNUPMSGSRQV1",
    "SIGNUPMSGSRSV1",
    "ACCTINFOTRNRQ",
    "ACCTINFOTRNRS",
    "ACCTINFORQ",
    "ACCTINFORS",
    "ACCTINFO",
    "BANKACCTINFO",
    "CCACCTINFO",
    // Account references
    "BANKACCTFROM",
    "CCACCTFROM",
    // Bank statement
    "BANKMSGSRQV1",
    "BANKMSGSRSV1",
    "STMTTRNRQ",
    "STMTTRNRS",
    "STMTRQ",
    "STMTRS",
    "INCTRAN",
    "BANKTRANLIST",
    "STMTTRN",
    "PAYEE",
    "LEDGERBAL",
    "AVAILBAL",
    // Credit-card statement
    "CREDITCARDMSGSRQV1",
    "CREDITCARDMSGSRSV1",
    "CCSTMTTRNRQ",
    "CCSTMTTRNRS",
    "CCSTMTRQ",
    "CCSTMTRS",
];

/// Tags whose elements hold a scalar value
const LEAF_TAGS: &[&str] = &[
    // Sign-on request/response
    "DTCLIENT",
    "USERID",
    "USERPASS",
    "LANGUAGE",
    "ORG",
    "FID",
    "APPID",
    "APPVER",
    "CLIENTUID",
    "CODE",
    "SEVERITY",
    "MESSAGE",
    "DTSERVER",
    "USERKEY",
    "TSKEYEXPIRE",
    "SESSCOOKIE",
    "ACCESSKEY",
    // Signup
    "TRNUID",
    "CLTCOOKIE",
    "DTACCTUP",
    "DESC",
    "PHONE",
    "SUPTXDL",
    "XFERSRC",
    "XFERDEST",
    "SVCSTATUS",
    // Account references
    "BANKID",
    "BRANCHID",
    "ACCTID",
    "ACCTTYPE",
    "ACCTKEY",
    // Statements
    "DTSTART",
    "DTEND",
    "INCLUDE",
    "CURDEF",
    "TRNTYPE",
    "DTPOSTED",
    "TRNAMT",
    "FITID",
    "NAME",
    "MEMO",
    "CHECKNUM",
    "REFNUM",
    "SIC",
    "BALAMT",
    "DTASOF",
    "MKTGINFO",
    // Payee details
    "PAYEEID",
    "ADDR1",
    "ADDR2",
    "CITY",
    "STATE",
    "POSTALCODE",
    "COUNTRY",
];

static CATALOGUE: LazyLock<HashMap<&'static str, TagKind>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(CONTAINER_TAGS.len() + LEAF_TAGS.len());
    for tag in CONTAINER_TAGS {
        table.insert(*tag, TagKind::Container);
    }
    for tag in LEAF_TAGS {
        table.insert(*tag, TagKind::Leaf);
    }
    table
});

/// Look up the schema-declared kind of a tag
///
/// Returns `None` for tags outside the supported vocabulary. Lookup is
/// case-sensitive: tag names are canonical uppercase on the wire, and the
/// scanner normalizes before consulting the catalogue.
pub fn kind_of(tag: &str) -> Option<TagKind> {
    CATALOGUE.get(tag).copied()
}
