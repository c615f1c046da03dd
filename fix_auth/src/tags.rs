//! FIX tag numbers spoken on the order-entry session.

// Framing and header.
pub const BEGIN_STRING: u32 = 8;
pub const BODY_LENGTH: u32 = 9;
pub const CHECK_SUM: u32 = 10;
pub const MSG_SEQ_NUM: u32 = 34;
pub const MSG_TYPE: u32 = 35;
pub const SENDER_COMP_ID: u32 = 49;
pub const SENDING_TIME: u32 = 52;
pub const TARGET_COMP_ID: u32 = 56;

// Logon body.
pub const RAW_DATA: u32 = 96;
pub const ENCRYPT_METHOD: u32 = 98;
pub const HEART_BT_INT: u32 = 108;
pub const PASSWORD: u32 = 554;
pub const CANCEL_ORDERS_ON_DISCONNECT: u32 = 8013;
pub const DROP_COPY_FLAG: u32 = 9406;

// Order entry.
pub const CL_ORD_ID: u32 = 11;
pub const HANDL_INST: u32 = 21;
pub const ORDER_QTY: u32 = 38;
pub const ORD_TYPE: u32 = 40;
pub const PRICE: u32 = 44;
pub const SIDE: u32 = 54;
pub const SYMBOL: u32 = 55;
pub const TIME_IN_FORCE: u32 = 59;
pub const TRANSACT_TIME: u32 = 60;

// Inbound execution reports and rejects.
pub const ORDER_ID: u32 = 37;
pub const ORD_STATUS: u32 = 39;
pub const TEXT: u32 = 58;
pub const EXEC_ID: u32 = 17;
pub const EXEC_TYPE: u32 = 150;
pub const TEST_REQ_ID: u32 = 112;
