//! Session dispatcher
//!
//! Executes one request/response cycle: wrap the business message set in
//! the sign-on envelope, serialize, post, deserialize, gate on the sign-on
//! status, and extract the message set the caller asked for. Each call is a
//! single unit of work with no cross-call state and exactly one attempt —
//! any step's failure short-circuits to the caller.
//!
//! Two implementations share the [`Dispatcher`] contract: the live
//! [`SessionDispatcher`] and the [`ReplayDispatcher`], which skips the
//! serialize/post steps and runs validation and extraction against a
//! pre-recorded body. Tests against recorded server replies go through the
//! replay path without a transport.

use crate::client::OfxClientOptions;
use crate::protocol::{codec, MessageSetKind, OfxElement};
use crate::session::envelope;
use crate::session::transport::{HttpTransport, OfxTransport};
use crate::types::OfxError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

/// Sign-on status code meaning success; anything else is fatal
const SIGNON_SUCCESS_CODE: &str = "0";

/// One request/response cycle delivering a typed, authenticated result
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Execute `request` and return the reply entry matching `response_kind`
    ///
    /// # Errors
    ///
    /// - [`OfxError::Serialization`] if the envelope cannot be rendered
    /// - [`OfxError::Transport`] from the network collaborator, unchanged
    /// - [`OfxError::Format`] if the reply violates the wire grammar
    /// - [`OfxError::Protocol`] if the sign-on response is missing, its
    ///   status is non-success (detail carries the server message verbatim),
    ///   or the requested message set is absent
    async fn execute(
        &self,
        request: OfxElement,
        response_kind: MessageSetKind,
    ) -> Result<OfxElement, OfxError>;
}

/// Live dispatcher: serialize, post through the transport, parse the reply
pub struct SessionDispatcher<T: OfxTransport> {
    options: OfxClientOptions,
    transport: T,
}

impl SessionDispatcher<HttpTransport> {
    /// Create a dispatcher over the default HTTP transport
    pub fn new(options: OfxClientOptions) -> Self {
        SessionDispatcher {
            options,
            transport: HttpTransport::new(),
        }
    }
}

impl<T: OfxTransport> SessionDispatcher<T> {
    /// Create a dispatcher over a caller-supplied transport
    pub fn with_transport(options: OfxClientOptions, transport: T) -> Self {
        SessionDispatcher { options, transport }
    }
}

#[async_trait]
impl<T: OfxTransport> Dispatcher for SessionDispatcher<T> {
    async fn execute(
        &self,
        request: OfxElement,
        response_kind: MessageSetKind,
    ) -> Result<OfxElement, OfxError> {
        let envelope = envelope::build_request(&self.options, request, Utc::now());
        let body = codec::serialize(&envelope)?;
        debug!(bytes = body.len(), %response_kind, "posting OFX request");

        let reply = self.transport.post(&self.options.api_url, &body).await?;
        debug!(bytes = reply.len(), "received OFX response");

        extract_response(&reply, response_kind)
    }
}

/// Replay dispatcher: same contract, pre-recorded response body
///
/// Skips envelope building and transport entirely; the canned body goes
/// straight into deserialization, validation, and extraction. This is the
/// deterministic substitute for testing against recorded server replies.
pub struct ReplayDispatcher {
    body: String,
}

impl ReplayDispatcher {
    /// Create a dispatcher that always replays `body`
    pub fn new(body: impl Into<String>) -> Self {
        ReplayDispatcher { body: body.into() }
    }
}

#[async_trait]
impl Dispatcher for ReplayDispatcher {
    async fn execute(
        &self,
        _request: OfxElement,
        response_kind: MessageSetKind,
    ) -> Result<OfxElement, OfxError> {
        extract_response(&self.body, response_kind)
    }
}

/// Deserialize a reply body, gate on the sign-on status, extract one set
///
/// Shared by both dispatcher implementations. The sign-on response must be
/// present among the top-level entries with status code `"0"`; the server's
/// message text is carried verbatim on failure. The requested set is taken
/// by first match — reply order is server-determined and not guaranteed.
pub(crate) fn extract_response(
    body: &str,
    response_kind: MessageSetKind,
) -> Result<OfxElement, OfxError> {
    let root = codec::deserialize(body)?;

    let status = root
        .child(MessageSetKind::SignonResponse.tag())
        .ok_or_else(|| OfxError::protocol("authentication response missing"))?
        .path(&["SONRS", "STATUS"])
        .ok_or_else(|| OfxError::protocol("sign-on status missing"))?;

    let code = status
        .leaf_text("CODE")
        .ok_or_else(|| OfxError::protocol("sign-on status code missing"))?;
    if code != SIGNON_SUCCESS_CODE {
        let message = status.leaf_text("MESSAGE").unwrap_or_default().to_string();
        return Err(OfxError::protocol(message));
    }

    // The reply tree is owned by this call; the requested set is moved out
    // and everything else is dropped here.
    root.into_child(response_kind.tag()).ok_or_else(|| {
        OfxError::protocol(format!(
            "requested message set {} is not present in response",
            response_kind.tag()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = "<OFX>\n\
        <SIGNONMSGSRSV1>\n<SONRS>\n<STATUS>\n<CODE>0\n<SEVERITY>INFO\n</STATUS>\n</SONRS>\n</SIGNONMSGSRSV1>\n\
        <SIGNUPMSGSRSV1>\n</SIGNUPMSGSRSV1>\n\
        </OFX>\n";

    const FAILURE_BODY: &str = "<OFX>\n\
        <SIGNONMSGSRSV1>\n<SONRS>\n<STATUS>\n<CODE>15500\n<SEVERITY>ERROR\n<MESSAGE>Signon invalid\n</STATUS>\n</SONRS>\n</SIGNONMSGSRSV1>\n\
        <SIGNUPMSGSRSV1>\n</SIGNUPMSGSRSV1>\n\
        </OFX>\n";

    const NO_SIGNON_BODY: &str = "<OFX>\n<SIGNUPMSGSRSV1>\n</SIGNUPMSGSRSV1>\n</OFX>\n";

    #[test]
    fn test_extract_returns_requested_set() {
        let set = extract_response(SUCCESS_BODY, MessageSetKind::SignupResponse).unwrap();
        assert_eq!(set.tag(), "SIGNUPMSGSRSV1");
    }

    #[test]
    fn test_extract_missing_signon_is_protocol_error() {
        let err = extract_response(NO_SIGNON_BODY, MessageSetKind::SignupResponse).unwrap_err();
        assert_eq!(err, OfxError::protocol("authentication response missing"));
    }

    #[test]
    fn test_extract_failed_signon_carries_server_message() {
        // The auth gate fires even though the requested set is present.
        let err = extract_response(FAILURE_BODY, MessageSetKind::SignupResponse).unwrap_err();
        assert_eq!(err, OfxError::protocol("Signon invalid"));
    }

    #[test]
    fn test_extract_missing_requested_set_names_it() {
        let err = extract_response(SUCCESS_BODY, MessageSetKind::BankResponse).unwrap_err();
        assert_eq!(
            err,
            OfxError::protocol("requested message set BANKMSGSRSV1 is not present in response")
        );
    }

    #[tokio::test]
    async fn test_replay_dispatcher_skips_transport() {
        let dispatcher = ReplayDispatcher::new(SUCCESS_BODY);
        let request = OfxElement::container(MessageSetKind::SignupRequest.tag(), vec![]);
        let set = dispatcher
            .execute(request, MessageSetKind::SignupResponse)
            .await
            .unwrap();
        assert_eq!(set.tag(), "SIGNUPMSGSRSV1");
    }
}
