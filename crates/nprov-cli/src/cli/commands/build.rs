//! `nprov build` – construct an outgoing provisioning message file.

use anyhow::{Context, Result};
use nprov_core::checksum::ChecksumTask;
use nprov_core::config::NprovConfig;
use nprov_core::session::ProvisioningSession;

use crate::cli::BuildArgs;

/// Drive a full send-side session: establish the checksum, build the
/// message, write the encoded NDEF bytes to the output file.
pub async fn run_build(cfg: &NprovConfig, args: BuildArgs) -> Result<()> {
    let dump_path = if args.no_dump { None } else { cfg.dump_path() };
    let mut session = ProvisioningSession::new().with_dump_path(dump_path);

    session.set_admin_component(args.admin);
    session.set_download_url(args.url.clone());
    session.set_wifi_ssid(args.wifi_ssid);
    session.set_wifi_password(args.wifi_password);
    session.set_wifi_security(
        args.wifi_security
            .unwrap_or_else(|| cfg.wifi_security_type.clone()),
    );

    match args.checksum {
        Some(digest) => session.set_checksum(digest),
        None => {
            let task = ChecksumTask::spawn(args.url, cfg.fetch_options());
            let abort = task.abort_handle();
            tokio::select! {
                result = task.join() => session.set_checksum(result?),
                _ = tokio::signal::ctrl_c() => {
                    abort.cancel();
                    anyhow::bail!("build aborted")
                }
            }
        }
    }

    match session.create_message()? {
        Some(msg) => {
            let bytes = msg.to_bytes();
            std::fs::write(&args.out, &bytes)
                .with_context(|| format!("write {}", args.out.display()))?;
            println!("Wrote {} byte message to {}", bytes.len(), args.out.display());
            if let Some(checksum) = session.checksum() {
                println!("Checksum: {}", checksum);
            }
        }
        None => {
            // Precondition not met; the session already logged the warning.
            println!("Checksum not computed; no message produced.");
        }
    }

    Ok(())
}
