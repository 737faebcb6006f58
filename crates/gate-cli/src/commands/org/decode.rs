use std::io::Read;
use std::path::Path;

use anyhow::Context;

use super::MembershipsResponse;
use crate::cli::{GlobalFlags, OrgDecodeArgs};
use crate::output::output;

/// Handle `gate org decode`.
pub fn handle(args: &OrgDecodeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_payload(args.file.as_deref())?;
    output(&summarize(&raw)?, flags.format)
}

fn read_payload(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read payload from stdin")?;
            Ok(raw)
        }
    }
}

fn summarize(raw: &str) -> anyhow::Result<MembershipsResponse> {
    let envelope = gate_auth::decode_memberships(raw)?;
    Ok(MembershipsResponse::from(&envelope))
}
