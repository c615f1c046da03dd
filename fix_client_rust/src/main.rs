use std::env;
use std::error::Error;
use std::process;

use gdax_logger::*;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::signal;
use uuid::Uuid;

use fix_auth::message::{fix_timestamp, Header, NewOrderMsg, OrdType, Side, TimeInForce};
use fix_auth::message::BEGIN_STRING_FIX42;
use fix_auth::signer::TARGET_COMP_ID;
use fix_auth::{prepare_logon, Application, EnvCredentials, Message, SessionId};
use fix_wire::{decode, encode};
use rust_decimal_macros::dec;

struct TradeClient {
    credentials: EnvCredentials,
}

impl Application for TradeClient {
    fn on_create(&self, session_id: &SessionId) {
        info!("TradeClient:OnCreate session={:?}", session_id);
    }

    fn on_logon(&self, session_id: &SessionId) {
        info!("TradeClient:OnLogon session={:?}", session_id);
    }

    fn on_logout(&self, session_id: &SessionId) {
        info!("TradeClient:OnLogout session={:?}", session_id);
    }

    fn to_admin(&self, msg: &mut Message, session_id: &SessionId) {
        if !matches!(msg, Message::Logon(_)) {
            return;
        }

        if let Err(err) = prepare_logon(msg, &self.credentials) {
            // An unsigned Logon is worthless; stop instead of sending one.
            error!("refusing to send unsigned logon: {}", err);
            process::exit(1);
        }

        info!("TradeClient:ToAdmin session={:?}", session_id);
    }

    fn from_admin(&self, msg: &Value, session_id: &SessionId) {
        info!("TradeClient:FromAdmin msg={} session={:?}", msg, session_id);
    }

    fn to_app(&self, msg: &mut Message, session_id: &SessionId) {
        info!("TradeClient:ToApp msg_type={:?} session={:?}", msg.msg_type(), session_id);
    }

    fn from_app(&self, msg: &Value, session_id: &SessionId) {
        info!("TradeClient:FromApp msg={} session={:?}", msg, session_id);
    }
}

fn demo_order(session_id: &SessionId) -> NewOrderMsg {
    NewOrderMsg {
        header: Header::new(
            session_id.sender_comp_id.clone(),
            session_id.target_comp_id.clone(),
            2,
        ),
        cl_ord_id: Uuid::new_v4().to_string(),
        handl_inst: "1".to_string(),
        symbol: "BTC-EUR".to_string(),
        side: Side::Sell,
        transact_time: fix_timestamp(),
        ord_type: OrdType::Limit,
        order_qty: dec!(0.01),
        price: dec!(9000.00),
        time_in_force: TimeInForce::GoodTillCancel,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logger();

    let addr_orderentry = env::var("FIX_ORDERENTRY_ADDRESS")?;

    let credentials = match EnvCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            error!("cannot start without signing credentials: {}", err);
            process::exit(1);
        }
    };

    let session_id = SessionId::new(
        BEGIN_STRING_FIX42,
        credentials.api_key.clone(),
        TARGET_COMP_ID,
    );
    let client = TradeClient {
        credentials: credentials.clone(),
    };
    client.on_create(&session_id);

    info!("connect to FIX orderentry: {:?}", addr_orderentry);
    let mut stream = TcpStream::connect(&addr_orderentry).await?;

    // Logon handshake. The engine hands every outbound admin message
    // through to_admin right before transmission; the Logon picks up its
    // signature there.
    let mut logon = Message::logon(credentials.api_key.clone(), TARGET_COMP_ID);
    client.to_admin(&mut logon, &session_id);
    let fix_logon = encode(&logon);
    stream.write_all(fix_logon.as_bytes()).await?;

    let mut buf = vec![0; 1024];
    let n = stream.read(&mut buf).await?;
    let reply = decode(&buf[..n])?;
    client.from_admin(&reply, &session_id);

    if reply["Header"]["MsgType"] != "A" {
        error!("logon rejected: {}", reply);
        return Ok(());
    }
    client.on_logon(&session_id);

    // One illustrative order on the authenticated session.
    let mut order = Message::NewOrderSingle(demo_order(&session_id));
    client.to_app(&mut order, &session_id);
    let fix_order = encode(&order);
    info!("sending new order = {:?}", fix_order);
    stream.write_all(fix_order.as_bytes()).await?;

    // Stay on the session logging execution reports until a signal lands;
    // drop-copy mode means reports arrive for all account activity.
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("SIGINT received, logging out");
                break;
            }
            _ = sigterm.recv() => {
                info!("SIGTERM received, logging out");
                break;
            }
            read = stream.read(&mut buf) => {
                let n = read?;
                if n == 0 {
                    warn!("connection closed by the exchange");
                    break;
                }
                match decode(&buf[..n]) {
                    Ok(report) => client.from_app(&report, &session_id),
                    Err(err) => error!("undecodable message: {}", err),
                }
            }
        }
    }

    client.on_logout(&session_id);
    stream.shutdown().await?;

    info!("Finished");
    Ok(())
}
