use fix_auth::tags;

/// Field name for a tag, for the JSON view of decoded messages. Covers the
/// tags this client sends or expects back; anything else is keyed by its
/// number.
pub fn tag_name(tag: u32) -> Option<&'static str> {
    let name = match tag {
        tags::BEGIN_STRING => "BeginString",
        tags::BODY_LENGTH => "BodyLength",
        tags::CHECK_SUM => "CheckSum",
        tags::MSG_SEQ_NUM => "MsgSeqNum",
        tags::MSG_TYPE => "MsgType",
        tags::SENDER_COMP_ID => "SenderCompID",
        tags::SENDING_TIME => "SendingTime",
        tags::TARGET_COMP_ID => "TargetCompID",
        tags::RAW_DATA => "RawData",
        tags::ENCRYPT_METHOD => "EncryptMethod",
        tags::HEART_BT_INT => "HeartBtInt",
        tags::PASSWORD => "Password",
        tags::CANCEL_ORDERS_ON_DISCONNECT => "CancelOrdersOnDisconnect",
        tags::DROP_COPY_FLAG => "DropCopyFlag",
        tags::CL_ORD_ID => "ClOrdID",
        tags::HANDL_INST => "HandlInst",
        tags::ORDER_QTY => "OrderQty",
        tags::ORD_TYPE => "OrdType",
        tags::PRICE => "Price",
        tags::SIDE => "Side",
        tags::SYMBOL => "Symbol",
        tags::TIME_IN_FORCE => "TimeInForce",
        tags::TRANSACT_TIME => "TransactTime",
        tags::ORDER_ID => "OrderID",
        tags::ORD_STATUS => "OrdStatus",
        tags::TEXT => "Text",
        tags::EXEC_ID => "ExecID",
        tags::EXEC_TYPE => "ExecType",
        tags::TEST_REQ_ID => "TestReqID",
        93 => "SignatureLength",
        89 => "Signature",
        _ => return None,
    };
    Some(name)
}
