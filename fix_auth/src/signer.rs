use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Start-of-Heading control character, the field separator mandated by the
/// exchange's signing scheme.
pub const SOH: &str = "\x01";

/// MsgType of a FIX Logon.
pub const MSG_TYPE_LOGON: &str = "A";

/// The exchange resets sequence numbers on every connection, so the signed
/// sequence number is always the Logon's own.
pub const LOGON_SEQ_NUM: &str = "1";

/// TargetCompID of the exchange's order-entry gateway.
pub const TARGET_COMP_ID: &str = "Coinbase";

/// The session fields covered by the Logon signature, rebuilt fresh for
/// every attempt so the timestamp is current.
#[derive(Debug, Clone)]
pub struct SigningContext {
    /// Unix timestamp in seconds, also written verbatim into tag 52.
    pub sending_time: i64,
    pub msg_type: &'static str,
    pub msg_seq_num: &'static str,
    /// Exchange-issued API key.
    pub sender_comp_id: String,
    pub target_comp_id: &'static str,
    pub passphrase: String,
}

impl SigningContext {
    pub fn new(
        sending_time: i64,
        sender_comp_id: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            sending_time,
            msg_type: MSG_TYPE_LOGON,
            msg_seq_num: LOGON_SEQ_NUM,
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: TARGET_COMP_ID,
            passphrase: passphrase.into(),
        }
    }
}

/// Joins the six context fields with SOH, in the order the exchange
/// verifies: sendingTime, msgType, msgSeqNum, senderCompID, targetCompID,
/// passphrase.
pub fn build_prehash(ctx: &SigningContext) -> String {
    [
        ctx.sending_time.to_string(),
        ctx.msg_type.to_string(),
        ctx.msg_seq_num.to_string(),
        ctx.sender_comp_id.clone(),
        ctx.target_comp_id.to_string(),
        ctx.passphrase.clone(),
    ]
    .join(SOH)
}

/// HMAC-SHA256 over the UTF-8 bytes of `prehash`, keyed with the decoded
/// secret, returned base64-encoded (standard alphabet, padded).
///
/// An empty or undecodable secret is a configuration error; the caller must
/// treat it as fatal and never fall through to sending the Logon.
pub fn sign(secret_b64: &str, prehash: &str) -> Result<String, AuthError> {
    if secret_b64.is_empty() {
        return Err(AuthError::EmptySecret);
    }

    let key = BASE64.decode(secret_b64)?;

    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC can take key of any size");
    mac.update(prehash.as_bytes());

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
