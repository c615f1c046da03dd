use anyhow::{anyhow, Result};
use serde_json::{json, Map, Value};

use fix_auth::signer::SOH;
use fix_auth::tags;

use crate::names::tag_name;

pub const TAG_HEADERS_REQ: &[u32] = &[8, 9, 35, 49, 56, 34, 52];
pub const TAG_HEADERS_OPT: &[u32] = &[
    115, 128, 90, 91, 50, 142, 57, 143, 116, 144, 129, 145, 43, 97, 122, 212, 213, 347, 369, 627,
    628, 629, 640,
];
pub const TAG_TRAILERS_OPT: &[u32] = &[93, 89];

/// Splits an inbound tag=value message into the Header/Body/Trailer JSON
/// shape. Ordering is not validated; unknown tags land in Body keyed by
/// their number.
pub fn decode(fix_message: &[u8]) -> Result<Value> {
    let msg_str = String::from_utf8_lossy(fix_message);

    let mut headers = Map::new();
    let mut bodies = Map::new();
    let mut trailers = Map::new();

    for field in msg_str.split_terminator(SOH) {
        let (tag, value) = field
            .split_once('=')
            .ok_or_else(|| anyhow!("malformed field {:?}", field))?;
        let tag: u32 = tag
            .parse()
            .map_err(|_| anyhow!("non-numeric tag {:?}", tag))?;

        let key = match tag_name(tag) {
            Some(name) => name.to_string(),
            None => tag.to_string(),
        };

        let section = if TAG_HEADERS_REQ.contains(&tag) || TAG_HEADERS_OPT.contains(&tag) {
            &mut headers
        } else if tag == tags::CHECK_SUM || TAG_TRAILERS_OPT.contains(&tag) {
            &mut trailers
        } else {
            &mut bodies
        };
        section.insert(key, Value::String(value.to_string()));
    }

    if headers.is_empty() {
        return Err(anyhow!("failed to decode"));
    }

    Ok(json!({
        "Header": headers,
        "Body": bodies,
        "Trailer": trailers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logon_ack_lands_in_the_expected_sections() {
        let raw = b"8=FIX.4.2\x019=70\x0135=A\x0149=Coinbase\x0156=KEY1\x0134=1\x01\
52=1700000000\x0198=0\x01108=30\x0110=042\x01";

        let decoded = decode(raw).unwrap();

        assert_eq!(decoded["Header"]["MsgType"], "A");
        assert_eq!(decoded["Header"]["SenderCompID"], "Coinbase");
        assert_eq!(decoded["Header"]["SendingTime"], "1700000000");
        assert_eq!(decoded["Body"]["EncryptMethod"], "0");
        assert_eq!(decoded["Body"]["HeartBtInt"], "30");
        assert_eq!(decoded["Trailer"]["CheckSum"], "042");
    }

    #[test]
    fn unknown_tags_are_kept_under_their_number() {
        let raw = b"8=FIX.4.2\x0135=8\x0149=Coinbase\x0156=KEY1\x017777=x\x0110=001\x01";

        let decoded = decode(raw).unwrap();

        assert_eq!(decoded["Body"]["7777"], "x");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode(b"not a fix message").is_err());
        assert!(decode(b"abc=1\x01").is_err());
        assert!(decode(b"").is_err());
    }
}
