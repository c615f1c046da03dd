//! Typed outbound message model.
//!
//! The surrounding engine used to dispatch on the MsgType string; here the
//! message kind is a tagged enum, so "only touch Logon" rules hold by
//! construction instead of by runtime comparison.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;

pub const BEGIN_STRING_FIX42: &str = "FIX.4.2";

pub const MSG_TYPE_LOGON: &str = "A";
pub const MSG_TYPE_NEW_ORDER_SINGLE: &str = "D";

/// Standard header fields shared by every outbound message. MsgType is not
/// stored here; it follows from the [`Message`] variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    pub begin_string: String,
    pub msg_seq_num: u64,
    pub sender_comp_id: String,
    pub target_comp_id: String,
    pub sending_time: String,
}

impl Header {
    pub fn new(
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
        msg_seq_num: u64,
    ) -> Self {
        Self {
            begin_string: BEGIN_STRING_FIX42.to_string(),
            msg_seq_num,
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
            sending_time: fix_timestamp(),
        }
    }
}

/// Session-initiation message. Created bare by the engine for each
/// handshake, populated in place by [`crate::logon::prepare_logon`], then
/// handed back for transmission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogonMsg {
    #[serde(flatten)]
    pub header: Header,
    pub encrypt_method: u32,
    pub heart_bt_int: u32,
    pub password: String,
    pub raw_data: String,
    pub cancel_orders_on_disconnect: String,
    pub drop_copy_flag: String,
}

impl LogonMsg {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            encrypt_method: 0,
            heart_bt_int: 0,
            password: String::new(),
            raw_data: String::new(),
            cancel_orders_on_disconnect: String::new(),
            drop_copy_flag: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_fix(self) -> &'static str {
        match self {
            Side::Buy => "1",
            Side::Sell => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrdType {
    Market,
    Limit,
}

impl OrdType {
    pub fn as_fix(self) -> &'static str {
        match self {
            OrdType::Market => "1",
            OrdType::Limit => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeInForce {
    GoodTillCancel,
    ImmediateOrCancel,
}

impl TimeInForce {
    pub fn as_fix(self) -> &'static str {
        match self {
            TimeInForce::GoodTillCancel => "1",
            TimeInForce::ImmediateOrCancel => "3",
        }
    }
}

/// Illustrative NewOrderSingle. Sender and target CompIDs must match the
/// Logon handshake's.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewOrderMsg {
    #[serde(flatten)]
    pub header: Header,
    pub cl_ord_id: String,
    pub handl_inst: String,
    pub symbol: String,
    pub side: Side,
    pub transact_time: String,
    pub ord_type: OrdType,
    pub order_qty: Decimal,
    pub price: Decimal,
    pub time_in_force: TimeInForce,
}

/// Escape hatch for message kinds this client does not model; fields are
/// emitted in the order given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMsg {
    pub header: Header,
    pub msg_type: String,
    pub fields: Vec<(u32, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Logon(LogonMsg),
    NewOrderSingle(NewOrderMsg),
    Raw(RawMsg),
}

impl Message {
    /// A bare Logon for the engine to run through logon preparation.
    pub fn logon(sender_comp_id: impl Into<String>, target_comp_id: impl Into<String>) -> Self {
        Message::Logon(LogonMsg::new(Header::new(sender_comp_id, target_comp_id, 1)))
    }

    pub fn msg_type(&self) -> &str {
        match self {
            Message::Logon(_) => MSG_TYPE_LOGON,
            Message::NewOrderSingle(_) => MSG_TYPE_NEW_ORDER_SINGLE,
            Message::Raw(msg) => &msg.msg_type,
        }
    }

    pub fn header(&self) -> &Header {
        match self {
            Message::Logon(msg) => &msg.header,
            Message::NewOrderSingle(msg) => &msg.header,
            Message::Raw(msg) => &msg.header,
        }
    }

    pub fn header_mut(&mut self) -> &mut Header {
        match self {
            Message::Logon(msg) => &mut msg.header,
            Message::NewOrderSingle(msg) => &mut msg.header,
            Message::Raw(msg) => &mut msg.header,
        }
    }
}

/// FIX UTCTimestamp with millisecond precision, e.g. `20231012-16:16:50.000`.
pub fn fix_timestamp() -> String {
    Utc::now().format("%Y%m%d-%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msg_type_follows_variant() {
        let logon = Message::logon("KEY1", "Coinbase");
        assert_eq!(logon.msg_type(), "A");

        let raw = Message::Raw(RawMsg {
            header: Header::new("KEY1", "Coinbase", 3),
            msg_type: "0".to_string(),
            fields: vec![],
        });
        assert_eq!(raw.msg_type(), "0");
    }

    #[test]
    fn bare_logon_starts_at_sequence_one() {
        let logon = Message::logon("KEY1", "Coinbase");

        assert_eq!(logon.header().msg_seq_num, 1);
        assert_eq!(logon.header().begin_string, BEGIN_STRING_FIX42);
        assert_eq!(logon.header().sender_comp_id, "KEY1");
        assert_eq!(logon.header().target_comp_id, "Coinbase");
    }
}
