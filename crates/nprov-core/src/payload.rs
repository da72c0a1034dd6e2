//! Outgoing provisioning payload assembly.

use anyhow::Result;
use std::path::Path;

use crate::ndef::{NdefMessage, NdefRecord};
use crate::params::{
    ProvisioningParams, KEY_ADMIN_COMPONENT_NAME, KEY_ADMIN_PACKAGE_DOWNLOAD_LOCATION,
    KEY_ADMIN_SIGNATURE_CHECKSUM, KEY_WIFI_PASSWORD, KEY_WIFI_SECURITY_TYPE, KEY_WIFI_SSID,
    PROVISIONING_MIME_TYPE, WIFI_PASSWORD_OVERRIDE, WIFI_SSID_OVERRIDE,
};
use crate::properties;

/// Header comment written at the top of every serialized payload.
const PAYLOAD_HEADER: &str = "";

/// Serialize the parameter set as the receiving platform expects it.
///
/// The entered Wi-Fi SSID and password are logged and then replaced with
/// the fixed [`WIFI_SSID_OVERRIDE`] and [`WIFI_PASSWORD_OVERRIDE`] values.
/// Pairs go out in a fixed order so identical parameters always serialize
/// identically.
pub fn serialize_params(params: &ProvisioningParams) -> Vec<u8> {
    tracing::debug!(
        "wifi fields as entered: ssid={:?} password={:?} security={:?}",
        params.wifi_ssid,
        params.wifi_password,
        params.wifi_security,
    );

    let pairs = vec![
        (KEY_ADMIN_COMPONENT_NAME.to_string(), params.admin_component.clone()),
        (
            KEY_ADMIN_PACKAGE_DOWNLOAD_LOCATION.to_string(),
            params.download_url.clone(),
        ),
        (KEY_ADMIN_SIGNATURE_CHECKSUM.to_string(), params.checksum.clone()),
        (KEY_WIFI_SSID.to_string(), WIFI_SSID_OVERRIDE.to_string()),
        (KEY_WIFI_PASSWORD.to_string(), WIFI_PASSWORD_OVERRIDE.to_string()),
        (KEY_WIFI_SECURITY_TYPE.to_string(), params.wifi_security.clone()),
    ];

    properties::store(&pairs, PAYLOAD_HEADER)
}

/// Build the outgoing message: serialized parameters wrapped as one
/// MIME-typed record.
///
/// When `dump_path` is set, the identical serialization is also written
/// there for inspection; a failed write is logged and does not fail the
/// build.
pub fn build_message(params: &ProvisioningParams, dump_path: Option<&Path>) -> Result<NdefMessage> {
    let bytes = serialize_params(params);

    if let Some(path) = dump_path {
        if let Err(err) = std::fs::write(path, &bytes) {
            tracing::warn!("failed to write payload dump {}: {}", path.display(), err);
        } else {
            tracing::debug!("payload dump written to {}", path.display());
        }
    }

    Ok(NdefMessage::single(NdefRecord::mime(
        PROVISIONING_MIME_TYPE,
        bytes,
    )))
}

/// Decode a received payload back into key/value pairs.
pub fn decode_payload(bytes: &[u8]) -> Result<Vec<(String, String)>> {
    properties::load(bytes)
}
