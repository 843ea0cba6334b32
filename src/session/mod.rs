//! Session module
//!
//! The session layer around the wire codec: envelope construction, the
//! transport port, and the dispatcher that runs one authenticated
//! request/response cycle.
//!
//! # Components
//!
//! - `envelope` - wraps a business message set in the sign-on envelope
//! - `transport` - the `OfxTransport` port and its reqwest HTTP adapter
//! - `dispatcher` - the `Dispatcher` contract with live and replay
//!   implementations

pub mod dispatcher;
pub mod envelope;
pub mod transport;

pub use dispatcher::{Dispatcher, ReplayDispatcher, SessionDispatcher};
pub use envelope::build_request;
pub use transport::{HttpTransport, OfxTransport};
