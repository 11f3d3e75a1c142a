//! Migrating a v1-authored alpha channel to the current format

use creasepack_core::channel::{migrate_channel, sweep_channel_with_stats};

fn main() {
    println!("Creasepack Channel Migration Example\n");

    // A v1 channel dump: fixed-width decimal fields, no checksum.
    // 0.2193 is lod 2 / bump 1 / thickness 93; 1.0 is untouched opacity.
    let v1_channel = vec![0.2193f32, 1.0, 0.3199, 1.0, 0.1008, 0.0];

    let (migrated, stats) = migrate_channel(&v1_channel);

    println!(
        "Migrated {} of {} slots ({} untouched)\n",
        stats.migrated,
        stats.slots,
        stats.skipped
    );

    let (creases, sweep) = sweep_channel_with_stats(&migrated);

    println!("Sweep of the migrated channel:");
    println!("  slots:   {}", sweep.slots);
    println!("  creases: {}", sweep.creases);
    println!("  plain:   {}", sweep.plain);
    println!();

    for crease in &creases {
        println!(
            "  vertex {}: alpha {} -> lod {} mode {} bump {} thickness {}",
            crease.index,
            crease.alpha,
            crease.params.lod,
            crease.params.mode,
            crease.params.bump,
            crease.params.thickness
        );
    }
}
