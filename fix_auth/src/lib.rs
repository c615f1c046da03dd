//! Session authentication for the Coinbase (GDAX) FIX order-entry gateway.
//!
//! The exchange layers a time-bound HMAC-SHA256 signature on top of the
//! standard FIX Logon: the client signs an SOH-joined string of session
//! fields and places the result in tag 96 (RawData), together with a set of
//! non-standard session options (tags 8013 and 9406). This crate owns that
//! contract: the prehash/signature construction ([`signer`]), the Logon
//! field population ([`logon`]), the typed outbound message model
//! ([`message`]), and the callback seam toward the surrounding FIX engine
//! ([`app`]).
//!
//! Session bookkeeping (sequence numbers, resends, heartbeats) and wire
//! framing live elsewhere; see the `fix_wire` crate for the codec.

pub mod app;
pub mod credentials;
pub mod error;
pub mod logon;
pub mod message;
pub mod signer;
pub mod tags;

pub use app::{Application, SessionId};
pub use credentials::EnvCredentials;
pub use error::AuthError;
pub use logon::{prepare_logon, prepare_logon_at};
pub use message::{Header, LogonMsg, Message, NewOrderMsg, OrdType, RawMsg, Side, TimeInForce};
pub use signer::{build_prehash, sign, SigningContext, SOH};
