use anyhow::{Context, Result};
use colored::*;
use creasepack_core::channel::migrate_channel;
use std::fs;
use tracing::info;

pub fn execute(input: &str, output: &str) -> Result<()> {
    info!("Migrating v1 channel dump {} to {}", input, output);

    // Read input JSON
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let channel: Vec<f32> =
        serde_json::from_str(&content).with_context(|| "Failed to parse JSON channel dump")?;

    info!("Channel size: {} slots", channel.len());

    let (migrated, stats) = migrate_channel(&channel);

    // Write output file
    let json = serde_json::to_string_pretty(&migrated)
        .with_context(|| "Failed to serialize migrated channel")?;

    fs::write(output, json).with_context(|| format!("Failed to write output file: {}", output))?;

    println!("\n=== Migration Results ===");
    println!("Slots examined:    {}", stats.slots);
    println!("Slots migrated:    {}", stats.migrated);
    println!("Slots untouched:   {}", stats.skipped);

    if stats.migrated > 0 {
        println!("{} Channel migrated to {}", "✓".green(), output);
    } else {
        println!(
            "{} No v1 crease data found; output is a copy of the input",
            "!".yellow()
        );
    }

    Ok(())
}
