pub mod config;
pub mod logging;

// Payload logic
pub mod checksum;
pub mod ndef;
pub mod params;
pub mod payload;
pub mod properties;
pub mod session;
