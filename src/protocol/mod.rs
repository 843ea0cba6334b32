//! Protocol module: the wire codec
//!
//! Transcodes between raw OFX 1.x text and the typed, schema-shaped element
//! tree. OFX 1.x predates well-formed markup: leaf elements are never
//! closed, so parsing needs the schema catalogue as a side table rather
//! than the text alone.
//!
//! # Components
//!
//! - `tree` - the recursive element tree and its navigation helpers
//! - `schema` - the closed tag vocabulary (tag → container | leaf)
//! - `codec` - serializer and stack-based deserializer, fixed 103 header
//! - `message_set` - the enumeration of supported top-level message sets

pub mod codec;
pub mod message_set;
pub mod schema;
pub mod tree;

pub use codec::{deserialize, serialize, OFX_103_HEADER};
pub use message_set::MessageSetKind;
pub use schema::TagKind;
pub use tree::OfxElement;
