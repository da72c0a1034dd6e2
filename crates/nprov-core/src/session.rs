//! Send-side session: editable fields plus the checksum state machine.

use anyhow::Result;
use std::path::PathBuf;

use crate::ndef::NdefMessage;
use crate::params::ProvisioningParams;
use crate::payload;

/// The two states of the send side. A message can only be created in
/// `ChecksumReady`; every field edit drops back to `ChecksumPending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    ChecksumPending,
    ChecksumReady,
}

/// Owner of the provisioning fields and the cached checksum.
///
/// State only moves through the methods here: setters invalidate,
/// [`set_checksum`](Self::set_checksum) is the single transition to ready.
#[derive(Debug)]
pub struct ProvisioningSession {
    admin_component: String,
    download_url: String,
    wifi_ssid: String,
    wifi_password: String,
    wifi_security: String,
    checksum: Option<String>,
    state: SessionState,
    dump_path: Option<PathBuf>,
}

impl Default for ProvisioningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisioningSession {
    pub fn new() -> Self {
        Self {
            admin_component: String::new(),
            download_url: String::new(),
            wifi_ssid: String::new(),
            wifi_password: String::new(),
            wifi_security: String::new(),
            checksum: None,
            state: SessionState::ChecksumPending,
            dump_path: None,
        }
    }

    /// Where to write the diagnostic payload copy, if anywhere.
    pub fn with_dump_path(mut self, path: Option<PathBuf>) -> Self {
        self.dump_path = path;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The last computed checksum. Kept for display after an edit
    /// invalidates it; only the state decides whether it may be used.
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    pub fn set_admin_component(&mut self, value: impl Into<String>) {
        self.admin_component = value.into();
        self.invalidate();
    }

    pub fn set_download_url(&mut self, value: impl Into<String>) {
        self.download_url = value.into();
        self.invalidate();
    }

    pub fn set_wifi_ssid(&mut self, value: impl Into<String>) {
        self.wifi_ssid = value.into();
        self.invalidate();
    }

    pub fn set_wifi_password(&mut self, value: impl Into<String>) {
        self.wifi_password = value.into();
        self.invalidate();
    }

    pub fn set_wifi_security(&mut self, value: impl Into<String>) {
        self.wifi_security = value.into();
        self.invalidate();
    }

    /// Record a successfully computed checksum; the one transition to
    /// `ChecksumReady`.
    pub fn set_checksum(&mut self, digest: impl Into<String>) {
        self.checksum = Some(digest.into());
        self.state = SessionState::ChecksumReady;
    }

    fn invalidate(&mut self) {
        if self.state == SessionState::ChecksumReady {
            tracing::debug!("field edited, checksum invalidated");
        }
        self.state = SessionState::ChecksumPending;
    }

    /// Create the outgoing message.
    ///
    /// In `ChecksumPending` this is a no-op: a warning is logged and
    /// `Ok(None)` returned, never a panic or an `Err`. In `ChecksumReady`
    /// the message is built; assembly failures propagate.
    pub fn create_message(&self) -> Result<Option<NdefMessage>> {
        let checksum = match (&self.state, &self.checksum) {
            (SessionState::ChecksumReady, Some(checksum)) => checksum.clone(),
            _ => {
                tracing::warn!("checksum not computed yet; no message produced");
                return Ok(None);
            }
        };

        let params = ProvisioningParams {
            admin_component: self.admin_component.clone(),
            download_url: self.download_url.clone(),
            checksum,
            wifi_ssid: self.wifi_ssid.clone(),
            wifi_password: self.wifi_password.clone(),
            wifi_security: self.wifi_security.clone(),
        };
        payload::build_message(&params, self.dump_path.as_deref()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::KEY_WIFI_SECURITY_TYPE;
    use crate::payload::decode_payload;

    fn ready_session() -> ProvisioningSession {
        let mut session = ProvisioningSession::new();
        session.set_admin_component("a.b/.C");
        session.set_download_url("http://h/p.apk");
        session.set_wifi_security("WPA");
        session.set_checksum("abc");
        session
    }

    #[test]
    fn new_session_starts_pending() {
        assert_eq!(ProvisioningSession::new().state(), SessionState::ChecksumPending);
    }

    #[test]
    fn checksum_moves_to_ready() {
        let session = ready_session();
        assert_eq!(session.state(), SessionState::ChecksumReady);
        assert_eq!(session.checksum(), Some("abc"));
    }

    #[test]
    fn create_message_while_pending_returns_none() {
        let session = ProvisioningSession::new();
        let msg = session.create_message().unwrap();
        assert!(msg.is_none());
    }

    #[test]
    fn any_edit_invalidates_ready_state() {
        let setters: [fn(&mut ProvisioningSession); 5] = [
            |s| s.set_admin_component("x"),
            |s| s.set_download_url("x"),
            |s| s.set_wifi_ssid("x"),
            |s| s.set_wifi_password("x"),
            |s| s.set_wifi_security("x"),
        ];
        for set in setters {
            let mut session = ready_session();
            set(&mut session);
            assert_eq!(session.state(), SessionState::ChecksumPending);
            assert!(session.create_message().unwrap().is_none());
        }
    }

    #[test]
    fn edited_session_keeps_checksum_text_for_display() {
        let mut session = ready_session();
        session.set_download_url("http://other/p.apk");
        assert_eq!(session.checksum(), Some("abc"));
        assert_eq!(session.state(), SessionState::ChecksumPending);
    }

    #[test]
    fn ready_session_builds_a_message() {
        let msg = ready_session().create_message().unwrap().expect("message");
        let pairs = decode_payload(msg.first_record().payload()).unwrap();
        let security = pairs
            .iter()
            .find(|(k, _)| k == KEY_WIFI_SECURITY_TYPE)
            .map(|(_, v)| v.as_str());
        assert_eq!(security, Some("WPA"));
    }

    #[test]
    fn recomputed_checksum_restores_ready() {
        let mut session = ready_session();
        session.set_download_url("http://other/p.apk");
        session.set_checksum("def");
        assert_eq!(session.state(), SessionState::ChecksumReady);
        assert!(session.create_message().unwrap().is_some());
    }
}
