//! Message-set kinds
//!
//! The top-level children of the `<OFX>` envelope are message sets. This
//! enum is the closed list of the kinds this client supports, in request
//! and response form. The session dispatcher is parametrized over a kind:
//! the caller names the response variant it wants and extraction scans the
//! reply's top-level entries for the matching tag.

use std::fmt;

/// A supported top-level message-set kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSetKind {
    /// Sign-on request (`SIGNONMSGSRQV1`)
    SignonRequest,
    /// Sign-on response (`SIGNONMSGSRSV1`)
    SignonResponse,
    /// Account-info request (`SIGNUPMSGSRQV1`)
    SignupRequest,
    /// Account-info response (`SIGNUPMSGSRSV1`)
    SignupResponse,
    /// Bank statement request (`BANKMSGSRQV1`)
    BankRequest,
    /// Bank statement response (`BANKMSGSRSV1`)
    BankResponse,
    /// Credit-card statement request (`CREDITCARDMSGSRQV1`)
    CreditCardRequest,
    /// Credit-card statement response (`CREDITCARDMSGSRSV1`)
    CreditCardResponse,
}

impl MessageSetKind {
    /// Wire tag of this message-set kind
    pub const fn tag(self) -> &'static str {
        match self {
            MessageSetKind::SignonRequest => "SIGNONMSGSRQV1",
            MessageSetKind::SignonResponse => "SIGNONMSGSRSV1",
            MessageSetKind::SignupRequest => "SIGNUPMSGSRQV1",
            MessageSetKind::SignupResponse => "SIGNUPMSGSRSV1",
            MessageSetKind::BankRequest => "BANKMSGSRQV1",
            MessageSetKind::BankResponse => "BANKMSGSRSV1",
            MessageSetKind::CreditCardRequest => "CREDITCARDMSGSRQV1",
            MessageSetKind::CreditCardResponse => "CREDITCARDMSGSRSV1",
        }
    }
}

impl fmt::Display for MessageSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::schema::{self, TagKind};
    use rstest::rstest;

    #[rstest]
    #[case::signon_rq(MessageSetKind::SignonRequest, "SIGNONMSGSRQV1")]
    #[case::signon_rs(MessageSetKind::SignonResponse, "SIGNONMSGSRSV1")]
    #[case::signup_rs(MessageSetKind::SignupResponse, "SIGNUPMSGSRSV1")]
    #[case::bank_rs(MessageSetKind::BankResponse, "BANKMSGSRSV1")]
    #[case::cc_rs(MessageSetKind::CreditCardResponse, "CREDITCARDMSGSRSV1")]
    fn test_tag(#[case] kind: MessageSetKind, #[case] expected: &str) {
        assert_eq!(kind.tag(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    #[case(MessageSetKind::SignonRequest)]
    #[case(MessageSetKind::SignonResponse)]
    #[case(MessageSetKind::SignupRequest)]
    #[case(MessageSetKind::SignupResponse)]
    #[case(MessageSetKind::BankRequest)]
    #[case(MessageSetKind::BankResponse)]
    #[case(MessageSetKind::CreditCardRequest)]
    #[case(MessageSetKind::CreditCardResponse)]
    fn test_every_kind_is_a_schema_container(#[case] kind: MessageSetKind) {
        assert_eq!(schema::kind_of(kind.tag()), Some(TagKind::Container));
    }
}
