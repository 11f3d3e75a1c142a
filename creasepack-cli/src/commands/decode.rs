use anyhow::Result;
use colored::*;
use creasepack_core::{decode_alpha, CreaseParams, EncodedAlpha};
use serde::Serialize;

#[derive(Serialize)]
struct DecodedRecord {
    alpha: f32,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<CreaseParams>,
}

pub fn execute(alpha: f32, json: bool) -> Result<()> {
    let decoded = decode_alpha(EncodedAlpha::from_raw(alpha));

    if json {
        let record = DecodedRecord {
            alpha,
            valid: decoded.is_some(),
            params: decoded,
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    match decoded {
        Some(params) => {
            println!("{} Crease value", "✓".green());
            println!("LOD:        {}", params.lod);
            println!("Mode:       {}", params.mode);
            println!("Bump:       {}", params.bump);
            println!("Thickness:  {}", params.thickness);
        }
        None => {
            println!(
                "{} Not a crease value (plain alpha, treat as no crease)",
                "!".yellow()
            );
        }
    }

    Ok(())
}
