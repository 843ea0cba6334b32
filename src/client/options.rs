//! Client configuration
//!
//! Everything the client needs to address one institution: the OFX
//! endpoint, the institution identity (`ORG`/`FID`), and the user's
//! credentials. Credentials are not validated locally — a bad password
//! surfaces as a sign-on failure in the reply.

use url::Url;

/// Connection and identity options for an [`OfxClient`](crate::client::OfxClient)
#[derive(Debug, Clone)]
pub struct OfxClientOptions {
    /// OFX endpoint the serialized requests are posted to
    pub api_url: Url,

    /// Institution organization name (`ORG`)
    pub bank_org: String,

    /// Institution identifier (`FID`)
    pub bank_fid: String,

    /// User id; also the seed for the deterministic client UID
    pub user_id: String,

    /// Opaque password, forwarded as-is in the sign-on block
    pub password: String,
}

impl OfxClientOptions {
    /// Bundle endpoint, institution identity, and credentials
    pub fn new(
        api_url: Url,
        bank_org: impl Into<String>,
        bank_fid: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        OfxClientOptions {
            api_url,
            bank_org: bank_org.into(),
            bank_fid: bank_fid.into(),
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}
