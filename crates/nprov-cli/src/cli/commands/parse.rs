//! `nprov parse <file>` – inspect a received message's first record.

use anyhow::{Context, Result};
use data_encoding::HEXLOWER;
use nprov_core::ndef::NdefMessage;
use nprov_core::payload::decode_payload;

use crate::cli::ParseArgs;

/// Parse the message bytes in `args.file` and show record index 0.
pub fn run_parse(args: ParseArgs) -> Result<()> {
    let bytes =
        std::fs::read(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let msg = NdefMessage::parse(&bytes)
        .with_context(|| format!("not a valid message: {}", args.file.display()))?;
    let record = msg.first_record();

    if args.decode {
        let pairs = decode_payload(record.payload()).context("payload is not a property list")?;
        if args.json {
            let value = serde_json::json!({
                "records": msg.records().len(),
                "mime_type": record.mime_type(),
                "properties": pairs,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            for (key, value) in pairs {
                println!("{} = {}", key, value);
            }
        }
        return Ok(());
    }

    if args.hex {
        let hex = HEXLOWER.encode(record.payload());
        if args.json {
            let value = serde_json::json!({
                "records": msg.records().len(),
                "mime_type": record.mime_type(),
                "payload_hex": hex,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", hex);
        }
        return Ok(());
    }

    // The receive contract: record 0's payload, verbatim, as text.
    let text = String::from_utf8_lossy(record.payload());
    if args.json {
        let value = serde_json::json!({
            "records": msg.records().len(),
            "mime_type": record.mime_type(),
            "payload": text,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
