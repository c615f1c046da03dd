use fix_auth::message::Message;
use fix_auth::signer::SOH;
use fix_auth::tags;

/// Renders a typed message as SOH-delimited tag=value text.
///
/// Header field order is 8, 9, 35, 49, 56, 34, 52; body fields follow in a
/// fixed per-type order; BodyLength counts the bytes after the 9 field up to
/// and excluding the 10 field; CheckSum is the byte sum of everything before
/// the 10 field, mod 256, zero-padded to three digits.
pub fn encode(msg: &Message) -> String {
    let header = msg.header();

    let mut body = String::new();
    push_field(&mut body, tags::MSG_TYPE, msg.msg_type());
    push_field(&mut body, tags::SENDER_COMP_ID, &header.sender_comp_id);
    push_field(&mut body, tags::TARGET_COMP_ID, &header.target_comp_id);
    push_field(&mut body, tags::MSG_SEQ_NUM, &header.msg_seq_num.to_string());
    push_field(&mut body, tags::SENDING_TIME, &header.sending_time);

    match msg {
        Message::Logon(logon) => {
            push_field(&mut body, tags::ENCRYPT_METHOD, &logon.encrypt_method.to_string());
            push_field(&mut body, tags::HEART_BT_INT, &logon.heart_bt_int.to_string());
            push_field(&mut body, tags::PASSWORD, &logon.password);
            push_field(&mut body, tags::RAW_DATA, &logon.raw_data);
            push_field(
                &mut body,
                tags::CANCEL_ORDERS_ON_DISCONNECT,
                &logon.cancel_orders_on_disconnect,
            );
            push_field(&mut body, tags::DROP_COPY_FLAG, &logon.drop_copy_flag);
        }
        Message::NewOrderSingle(order) => {
            push_field(&mut body, tags::CL_ORD_ID, &order.cl_ord_id);
            push_field(&mut body, tags::HANDL_INST, &order.handl_inst);
            push_field(&mut body, tags::SYMBOL, &order.symbol);
            push_field(&mut body, tags::SIDE, order.side.as_fix());
            push_field(&mut body, tags::TRANSACT_TIME, &order.transact_time);
            push_field(&mut body, tags::ORD_TYPE, order.ord_type.as_fix());
            push_field(&mut body, tags::ORDER_QTY, &order.order_qty.to_string());
            push_field(&mut body, tags::PRICE, &order.price.to_string());
            push_field(&mut body, tags::TIME_IN_FORCE, order.time_in_force.as_fix());
        }
        Message::Raw(raw) => {
            for (tag, value) in &raw.fields {
                push_field(&mut body, *tag, value);
            }
        }
    }

    let mut out = String::new();
    push_field(&mut out, tags::BEGIN_STRING, &header.begin_string);
    push_field(&mut out, tags::BODY_LENGTH, &body.len().to_string());
    out.push_str(&body);

    let checksum = out.bytes().map(u32::from).sum::<u32>() % 256;
    push_field(&mut out, tags::CHECK_SUM, &format!("{:03}", checksum));

    out
}

fn push_field(buf: &mut String, tag: u32, value: &str) {
    buf.push_str(&tag.to_string());
    buf.push('=');
    buf.push_str(value);
    buf.push_str(SOH);
}

#[cfg(test)]
mod tests {
    use fix_auth::message::{Header, NewOrderMsg, OrdType, Side, TimeInForce};
    use fix_auth::{prepare_logon_at, EnvCredentials, Message};
    use rust_decimal_macros::dec;

    use super::*;

    const ZERO_KEY_B64: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

    fn prepared_logon() -> Message {
        let mut msg = Message::logon("KEY1", "Coinbase");
        let creds = EnvCredentials::new("KEY1", "pw", ZERO_KEY_B64);
        prepare_logon_at(&mut msg, &creds, 1_700_000_000).unwrap();
        msg
    }

    #[test]
    fn logon_fields_appear_in_wire_order() {
        let wire = encode(&prepared_logon());

        assert!(wire.starts_with("8=FIX.4.2\x019="));
        for field in [
            "\x0135=A\x01",
            "\x0149=KEY1\x01",
            "\x0156=Coinbase\x01",
            "\x0134=1\x01",
            "\x0152=1700000000\x01",
            "\x0198=0\x01",
            "\x01108=30\x01",
            "\x01554=pw\x01",
            "\x0196=h2fguuc+hgEav5ry3BkGQiKIDFHEYLvbArsVTG1EqCY=\x01",
            "\x018013=S\x01",
            "\x019406=Y\x01",
        ] {
            assert!(wire.contains(field), "missing {:?} in {:?}", field, wire);
        }

        let order = ["35=", "49=", "56=", "34=", "52=", "98=", "108=", "554=", "96="];
        let positions: Vec<usize> = order
            .iter()
            .map(|f| wire.find(&format!("\x01{}", f)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        assert!(wire.ends_with('\x01'));
    }

    #[test]
    fn body_length_and_checksum_are_self_consistent() {
        let wire = encode(&prepared_logon());

        // BodyLength counts from just past the 9 field's SOH up to the 10 field.
        let len_start = wire.find("\x019=").unwrap() + 3;
        let len_end = wire[len_start..].find('\x01').unwrap() + len_start;
        let declared: usize = wire[len_start..len_end].parse().unwrap();

        let body_start = len_end + 1;
        let trailer = wire.rfind("\x0110=").unwrap() + 1;
        assert_eq!(declared, trailer - body_start);

        let expected = wire[..trailer].bytes().map(u32::from).sum::<u32>() % 256;
        let declared_sum: u32 = wire[trailer + 3..trailer + 6].parse().unwrap();
        assert_eq!(declared_sum, expected);
    }

    #[test]
    fn order_prices_keep_two_decimal_places() {
        let order = NewOrderMsg {
            header: Header::new("KEY1", "Coinbase", 2),
            cl_ord_id: "11111111-2222-3333-4444-555555555555".to_string(),
            handl_inst: "1".to_string(),
            symbol: "BTC-EUR".to_string(),
            side: Side::Sell,
            transact_time: "20231012-16:16:50.000".to_string(),
            ord_type: OrdType::Limit,
            order_qty: dec!(0.01),
            price: dec!(9000.00),
            time_in_force: TimeInForce::GoodTillCancel,
        };

        let wire = encode(&Message::NewOrderSingle(order));

        assert!(wire.contains("\x0135=D\x01"));
        assert!(wire.contains("\x0138=0.01\x01"));
        assert!(wire.contains("\x0144=9000.00\x01"));
        assert!(wire.contains("\x0154=2\x01"));
        assert!(wire.contains("\x0140=2\x01"));
        assert!(wire.contains("\x0159=1\x01"));
    }
}
