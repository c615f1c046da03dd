//! Logon field population.
//!
//! Wire contract with the exchange, by tag:
//!
//! | Tag  | Name                     | Value                          |
//! |------|--------------------------|--------------------------------|
//! | 98   | EncryptMethod            | 0                              |
//! | 108  | HeartBtInt               | 30                             |
//! | 554  | Password                 | passphrase                     |
//! | 96   | RawData                  | base64 HMAC-SHA256 signature   |
//! | 8013 | CancelOrdersOnDisconnect | "S"                            |
//! | 9406 | DropCopyFlag             | "Y"                            |
//! | 52   | SendingTime (header)     | Unix seconds, identical to the |
//! |      |                          | value covered by the signature |

use chrono::Utc;

use crate::credentials::EnvCredentials;
use crate::error::AuthError;
use crate::message::Message;
use crate::signer::{build_prehash, sign, SigningContext};

/// EncryptMethod 0 (none); transport security sits below the FIX layer.
pub const ENCRYPT_METHOD_NONE: u32 = 0;

/// Heartbeat interval fixed by the exchange, in seconds.
pub const HEART_BT_INT_SECS: u32 = 30;

/// "S": on disconnect, cancel only orders placed during this session.
pub const CANCEL_SESSION_ORDERS_ON_DISCONNECT: &str = "S";

/// "Y": stream execution reports for all orders under the account.
pub const DROP_COPY_ALL_ORDERS: &str = "Y";

/// Populates a Logon with the exchange's session options and signature,
/// timestamped with the current wall clock. Any non-Logon message is left
/// untouched.
pub fn prepare_logon(msg: &mut Message, credentials: &EnvCredentials) -> Result<(), AuthError> {
    prepare_logon_at(msg, credentials, Utc::now().timestamp())
}

/// [`prepare_logon`] with an explicit signing timestamp.
///
/// The exchange verifies the signature against tag 52 literally, so the
/// header gets the exact decimal Unix-seconds string that was signed rather
/// than the usual UTCTimestamp rendering.
pub fn prepare_logon_at(
    msg: &mut Message,
    credentials: &EnvCredentials,
    sending_time: i64,
) -> Result<(), AuthError> {
    let logon = match msg {
        Message::Logon(logon) => logon,
        _ => return Ok(()),
    };

    let ctx = SigningContext::new(
        sending_time,
        credentials.api_key.clone(),
        credentials.passphrase.clone(),
    );
    let signature = sign(&credentials.secret, &build_prehash(&ctx))?;

    logon.encrypt_method = ENCRYPT_METHOD_NONE;
    logon.heart_bt_int = HEART_BT_INT_SECS;
    logon.password = credentials.passphrase.clone();
    logon.raw_data = signature;
    logon.cancel_orders_on_disconnect = CANCEL_SESSION_ORDERS_ON_DISCONNECT.to_string();
    logon.drop_copy_flag = DROP_COPY_ALL_ORDERS.to_string();

    logon.header.sender_comp_id = credentials.api_key.clone();
    logon.header.sending_time = sending_time.to_string();

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::message::{Header, Message, NewOrderMsg, OrdType, Side, TimeInForce};

    const ZERO_KEY_B64: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

    fn creds() -> EnvCredentials {
        EnvCredentials::new("KEY1", "pw", ZERO_KEY_B64)
    }

    #[test]
    fn logon_carries_the_fixed_session_options() {
        let mut msg = Message::logon("KEY1", "Coinbase");
        prepare_logon_at(&mut msg, &creds(), 1_700_000_000).unwrap();

        let logon = match msg {
            Message::Logon(logon) => logon,
            other => panic!("expected Logon, got {:?}", other),
        };

        assert_eq!(logon.encrypt_method, 0);
        assert_eq!(logon.heart_bt_int, 30);
        assert_eq!(logon.password, "pw");
        assert_eq!(logon.cancel_orders_on_disconnect, "S");
        assert_eq!(logon.drop_copy_flag, "Y");
    }

    #[test]
    fn header_time_matches_the_signed_time_byte_for_byte() {
        let mut msg = Message::logon("KEY1", "Coinbase");
        prepare_logon_at(&mut msg, &creds(), 1_700_000_000).unwrap();

        let logon = match msg {
            Message::Logon(logon) => logon,
            other => panic!("expected Logon, got {:?}", other),
        };

        assert_eq!(logon.header.sending_time, "1700000000");

        // Signature over a prehash rebuilt from the header value must match
        // what the builder stored in RawData.
        let ctx = SigningContext::new(
            logon.header.sending_time.parse().unwrap(),
            "KEY1",
            "pw",
        );
        let expected = sign(ZERO_KEY_B64, &build_prehash(&ctx)).unwrap();
        assert_eq!(logon.raw_data, expected);
        assert_eq!(logon.raw_data, "h2fguuc+hgEav5ry3BkGQiKIDFHEYLvbArsVTG1EqCY=");
    }

    #[test]
    fn current_time_logon_signs_a_recent_timestamp() {
        let mut msg = Message::logon("KEY1", "Coinbase");
        let before = Utc::now().timestamp();
        prepare_logon(&mut msg, &creds()).unwrap();
        let after = Utc::now().timestamp();

        let stamped: i64 = msg.header().sending_time.parse().unwrap();
        assert!(stamped >= before && stamped <= after);
    }

    #[test]
    fn non_logon_messages_are_left_untouched() {
        let order = NewOrderMsg {
            header: Header::new("KEY1", "Coinbase", 2),
            cl_ord_id: "abc".to_string(),
            handl_inst: "1".to_string(),
            symbol: "BTC-EUR".to_string(),
            side: Side::Sell,
            transact_time: "20231012-16:16:50.000".to_string(),
            ord_type: OrdType::Limit,
            order_qty: dec!(0.01),
            price: dec!(9000.00),
            time_in_force: TimeInForce::GoodTillCancel,
        };

        let mut msg = Message::NewOrderSingle(order.clone());
        prepare_logon_at(&mut msg, &creds(), 1_700_000_000).unwrap();

        assert_eq!(msg, Message::NewOrderSingle(order));
    }

    #[test]
    fn bad_secret_never_yields_a_populated_logon() {
        let mut msg = Message::logon("KEY1", "Coinbase");
        let bad = EnvCredentials::new("KEY1", "pw", "not!!base64");

        assert!(prepare_logon_at(&mut msg, &bad, 1_700_000_000).is_err());

        let logon = match msg {
            Message::Logon(logon) => logon,
            other => panic!("expected Logon, got {:?}", other),
        };
        assert!(logon.raw_data.is_empty());
    }
}
