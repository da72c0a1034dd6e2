//! `nprov checksum <url>` – fetch the admin package and print its checksum.

use anyhow::Result;
use nprov_core::checksum::ChecksumTask;
use nprov_core::config::NprovConfig;

/// Compute and print the provisioning checksum of the package at `url`.
/// Ctrl-C stops the transfer.
pub async fn run_checksum(cfg: &NprovConfig, url: &str) -> Result<()> {
    let task = ChecksumTask::spawn(url.to_string(), cfg.fetch_options());
    let abort = task.abort_handle();

    tokio::select! {
        result = task.join() => {
            let digest = result?;
            println!("{}  {}", digest, url);
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            abort.cancel();
            anyhow::bail!("checksum aborted")
        }
    }
}
