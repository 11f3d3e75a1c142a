use anyhow::Result;
use colored::*;
use creasepack_core::{encode_alpha, CreaseParams};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct EncodedRecord {
    alpha: f32,
    packed: u16,
    lod: u8,
    mode: u8,
    bump: bool,
    thickness: u8,
}

pub fn execute(lod: u8, mode: u8, bump: bool, thickness: u8, json: bool) -> Result<()> {
    let params = CreaseParams::new(lod, mode, bump, thickness)?;
    let encoded = encode_alpha(&params);

    info!(
        "Encoded lod={} mode={} bump={} thickness={} as {}",
        lod,
        mode,
        bump,
        thickness,
        encoded.value()
    );

    if json {
        let record = EncodedRecord {
            alpha: encoded.value(),
            packed: params.packed(),
            lod,
            mode,
            bump,
            thickness,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{} {}", "✓".green(), encoded.value());
    }

    Ok(())
}
