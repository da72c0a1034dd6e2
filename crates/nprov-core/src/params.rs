//! Provisioning parameter names and values.
//!
//! The key strings and the MIME type are the receiving platform's contract;
//! the receiver dispatches on the MIME type and feeds the payload to its
//! property parser keyed on these exact names.

/// MIME type of the provisioning record. The receiving side keys its
/// dispatch on this value; it must match the platform constant exactly.
pub const PROVISIONING_MIME_TYPE: &str = "application/com.android.managedprovisioning";

/// Component name of the device admin receiver to install.
pub const KEY_ADMIN_COMPONENT_NAME: &str =
    "android.app.extra.PROVISIONING_DEVICE_ADMIN_COMPONENT_NAME";

/// URL the receiving device downloads the admin package from.
pub const KEY_ADMIN_PACKAGE_DOWNLOAD_LOCATION: &str =
    "android.app.extra.PROVISIONING_DEVICE_ADMIN_PACKAGE_DOWNLOAD_LOCATION";

/// Checksum the receiving device verifies the downloaded package against.
pub const KEY_ADMIN_SIGNATURE_CHECKSUM: &str =
    "android.app.extra.PROVISIONING_DEVICE_ADMIN_SIGNATURE_CHECKSUM";

/// Wi-Fi network the receiving device joins to perform the download.
pub const KEY_WIFI_SSID: &str = "android.app.extra.PROVISIONING_WIFI_SSID";

/// Password for that network.
pub const KEY_WIFI_PASSWORD: &str = "android.app.extra.PROVISIONING_WIFI_PASSWORD";

/// Security type of that network (e.g. "WPA", "WEP", "NONE").
pub const KEY_WIFI_SECURITY_TYPE: &str = "android.app.extra.PROVISIONING_WIFI_SECURITY_TYPE";

/// Fixed SSID written into every payload in place of the entered value;
/// the entered value is only logged.
pub const WIFI_SSID_OVERRIDE: &str = "AndroidAP";

/// Fixed password written into every payload, same override as the SSID.
pub const WIFI_PASSWORD_OVERRIDE: &str = "12345678";

/// The full parameter set serialized into one outgoing payload.
///
/// A plain value: built from the session fields at message-construction
/// time and consumed by [`crate::payload::build_message`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningParams {
    pub admin_component: String,
    pub download_url: String,
    pub checksum: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub wifi_security: String,
}
