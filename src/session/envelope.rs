//! Envelope builder
//!
//! Wraps a single business message set in the sign-on envelope: the `<OFX>`
//! root with the sign-on request first and the caller's message set second.
//! The sign-on block is built fresh per call. Nothing is validated here
//! beyond the fields being present — empty credentials fail asynchronously,
//! via the server's sign-on status code.

use crate::client::OfxClientOptions;
use crate::protocol::OfxElement;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Application identity advertised in the sign-on block
///
/// Fixed literals matching a recognized desktop-client signature; servers
/// commonly reject unknown APPID/APPVER pairs, so these are deliberately
/// not caller-configurable.
const APP_ID: &str = "QWIN";
const APP_VERSION: &str = "2500";

/// The single supported language code
const LANGUAGE: &str = "ENG";

/// Wire timestamp format, `YYYYMMDDHHMMSS`
pub(crate) const DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Derive the client UID from the user id
///
/// A pure function of the user id (UUIDv5 over the OID namespace), so the
/// same user always presents the same UID across calls and processes.
pub(crate) fn client_uid(user_id: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, user_id.as_bytes()).to_string()
}

/// Build the request envelope for one business call
///
/// The sign-on message set always comes first; `business` follows as the
/// second top-level entry. `now` becomes the `DTCLIENT` timestamp — the
/// dispatcher passes the current call time, tests pass a fixed instant.
pub fn build_request(
    options: &OfxClientOptions,
    business: OfxElement,
    now: DateTime<Utc>,
) -> OfxElement {
    let sonrq = OfxElement::container(
        "SONRQ",
        vec![
            OfxElement::leaf("DTCLIENT", now.format(DATETIME_FORMAT).to_string()),
            OfxElement::leaf("USERID", options.user_id.clone()),
            OfxElement::leaf("USERPASS", options.password.clone()),
            OfxElement::leaf("LANGUAGE", LANGUAGE),
            OfxElement::container(
                "FI",
                vec![
                    OfxElement::leaf("ORG", options.bank_org.clone()),
                    OfxElement::leaf("FID", options.bank_fid.clone()),
                ],
            ),
            OfxElement::leaf("APPID", APP_ID),
            OfxElement::leaf("APPVER", APP_VERSION),
            OfxElement::leaf("CLIENTUID", client_uid(&options.user_id)),
        ],
    );

    OfxElement::container(
        "OFX",
        vec![
            OfxElement::container("SIGNONMSGSRQV1", vec![sonrq]),
            business,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{serialize, MessageSetKind};
    use url::Url;

    fn options() -> OfxClientOptions {
        OfxClientOptions::new(
            Url::parse("http://localhost:5000/api/ofx").unwrap(),
            "HAN",
            "5959",
            "testUserAccount",
            "testUserPassword",
        )
    }

    fn fixed_now() -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_client_uid_is_deterministic() {
        assert_eq!(client_uid("testUserAccount"), client_uid("testUserAccount"));
        assert_ne!(client_uid("testUserAccount"), client_uid("otherUser"));
    }

    #[test]
    fn test_signon_block_comes_first() {
        let business = OfxElement::container(MessageSetKind::SignupRequest.tag(), vec![]);
        let envelope = build_request(&options(), business, fixed_now());

        let tops: Vec<&str> = envelope.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tops, vec!["SIGNONMSGSRQV1", "SIGNUPMSGSRQV1"]);
    }

    #[test]
    fn test_signon_fields() {
        let business = OfxElement::container(MessageSetKind::SignupRequest.tag(), vec![]);
        let envelope = build_request(&options(), business, fixed_now());
        let sonrq = envelope.path(&["SIGNONMSGSRQV1", "SONRQ"]).unwrap();

        assert_eq!(sonrq.leaf_text("DTCLIENT"), Some("20260301120000"));
        assert_eq!(sonrq.leaf_text("USERID"), Some("testUserAccount"));
        assert_eq!(sonrq.leaf_text("USERPASS"), Some("testUserPassword"));
        assert_eq!(sonrq.leaf_text("LANGUAGE"), Some("ENG"));
        assert_eq!(sonrq.leaf_text("APPID"), Some("QWIN"));
        assert_eq!(sonrq.leaf_text("APPVER"), Some("2500"));
        assert_eq!(
            sonrq.path(&["FI"]).and_then(|fi| fi.leaf_text("ORG")),
            Some("HAN")
        );
        assert_eq!(
            sonrq.path(&["FI"]).and_then(|fi| fi.leaf_text("FID")),
            Some("5959")
        );
        assert_eq!(
            sonrq.leaf_text("CLIENTUID").map(str::to_string),
            Some(client_uid("testUserAccount"))
        );
    }

    #[test]
    fn test_envelope_serializes_cleanly() {
        let business = OfxElement::container(MessageSetKind::SignupRequest.tag(), vec![]);
        let envelope = build_request(&options(), business, fixed_now());
        assert!(serialize(&envelope).is_ok());
    }
}
