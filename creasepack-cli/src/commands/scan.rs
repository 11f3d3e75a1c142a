use anyhow::{Context, Result};
use creasepack_core::channel::sweep_channel_with_stats;
use std::fs;
use std::io::{self, Read};
use tracing::info;

pub fn execute(
    input: &str,
    output: Option<&str>,
    stats_only: bool,
    lod_min: Option<u8>,
    lod_max: Option<u8>,
) -> Result<()> {
    info!("Scanning channel dump: {}", input);

    // Read input file or stdin
    let content = if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    let channel: Vec<f32> =
        serde_json::from_str(&content).with_context(|| "Failed to parse JSON channel dump")?;

    info!("Channel size: {} slots", channel.len());

    // Sweep the channel
    let (mut creases, stats) = sweep_channel_with_stats(&channel);

    // Print statistics
    println!("\n=== Sweep Results ===");
    println!("Slots examined:    {}", stats.slots);
    println!("Crease slots:      {}", stats.creases);
    println!("Plain slots:       {}", stats.plain);
    println!("Crease rate:       {:.2}%", stats.crease_rate());
    println!(
        "Per LOD (0/1/2):   {} / {} / {}",
        stats.lod_counts[0], stats.lod_counts[1], stats.lod_counts[2]
    );
    if stats.lod_counts[3] > 0 {
        println!("Reserved LOD 3:    {}", stats.lod_counts[3]);
    }
    println!();

    if stats_only {
        return Ok(());
    }

    // Apply the LOD window, if any
    let lower = lod_min.unwrap_or(0);
    let upper = lod_max.unwrap_or(3);
    creases.retain(|crease| (lower..=upper).contains(&crease.params.lod));

    if let Some(output_path) = output {
        // Write to JSON file
        let json = serde_json::to_string_pretty(&creases)
            .with_context(|| "Failed to serialize located creases")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Located creases written to: {}", output_path);
    } else {
        // Print to stdout
        println!("=== Located Creases ===");
        for crease in &creases {
            println!(
                "Vertex {} @ {}: lod {} mode {} bump {} thickness {}",
                crease.index,
                crease.alpha,
                crease.params.lod,
                crease.params.mode,
                crease.params.bump,
                crease.params.thickness
            );
        }
    }

    Ok(())
}
