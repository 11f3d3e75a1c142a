use std::fs;
use tempfile::tempdir;

use creasepack_cli::commands::migrate;
use creasepack_core::{decode_alpha, EncodedAlpha};

#[test]
fn test_migrate_v1_channel() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("v1.json");
    let output_path = td.path().join("v2.json");

    // v1 crease (lod 2, bump 1, thickness 93), untouched default, wiped slot
    let channel = [0.2193f32, 1.0, 0.0];
    fs::write(&input_path, serde_json::to_string(&channel).unwrap()).unwrap();

    migrate::execute(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    )
    .unwrap();

    assert!(output_path.exists());

    let output_json = fs::read_to_string(&output_path).unwrap();
    let migrated: Vec<f32> = serde_json::from_str(&output_json).unwrap();

    assert_eq!(migrated.len(), 3);

    // The crease slot now decodes in the current format
    let params = decode_alpha(EncodedAlpha::from_raw(migrated[0])).unwrap();
    assert_eq!(params.lod, 1);
    assert_eq!(params.mode, 0);
    assert!(params.bump);
    assert_eq!(params.thickness, 30);

    // Non-crease slots pass through unchanged
    assert_eq!(migrated[1], 1.0);
    assert_eq!(migrated[2], 0.0);
}

#[test]
fn test_migrate_channel_without_creases() {
    let td = tempdir().unwrap();
    let input_path = td.path().join("plain.json");
    let output_path = td.path().join("out.json");

    let channel = [1.0f32, 1.0, 0.05];
    fs::write(&input_path, serde_json::to_string(&channel).unwrap()).unwrap();

    migrate::execute(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    )
    .unwrap();

    let output_json = fs::read_to_string(&output_path).unwrap();
    let migrated: Vec<f32> = serde_json::from_str(&output_json).unwrap();

    assert_eq!(migrated, channel);
}

#[test]
fn test_migrate_missing_input_fails() {
    let result = migrate::execute("/nonexistent/v1.json", "/tmp/never-written.json");
    assert!(result.is_err());
}
