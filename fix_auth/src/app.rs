//! Callback seam toward the surrounding FIX engine.

use serde_json::Value;

use crate::message::Message;

/// Identity of one FIX session: BeginString plus the two CompIDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId {
    pub begin_string: String,
    pub sender_comp_id: String,
    pub target_comp_id: String,
}

impl SessionId {
    pub fn new(
        begin_string: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
    ) -> Self {
        Self {
            begin_string: begin_string.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
        }
    }
}

/// Session lifecycle hooks the engine drives. Outbound hooks receive the
/// typed [`Message`] and may mutate it before transmission; inbound hooks
/// receive the decoded `{"Header":…,"Body":…,"Trailer":…}` view.
///
/// Only `to_admin` carries real logic in this client (Logon signing); every
/// other hook defaults to a pass-through.
pub trait Application {
    fn on_create(&self, _session_id: &SessionId) {}

    fn on_logon(&self, _session_id: &SessionId) {}

    fn on_logout(&self, _session_id: &SessionId) {}

    fn to_admin(&self, _msg: &mut Message, _session_id: &SessionId) {}

    fn from_admin(&self, _msg: &Value, _session_id: &SessionId) {}

    fn to_app(&self, _msg: &mut Message, _session_id: &SessionId) {}

    fn from_app(&self, _msg: &Value, _session_id: &SessionId) {}
}
