//! Tag-value codec for the order-entry session.
//!
//! Outbound: typed [`fix_auth::Message`] to SOH-delimited tag=value bytes
//! with BodyLength and CheckSum. Inbound: raw bytes to a
//! `{"Header":…,"Body":…,"Trailer":…}` JSON view keyed by FIX field names.

pub mod decoder;
pub mod encoder;
mod names;

pub use decoder::decode;
pub use encoder::encode;
