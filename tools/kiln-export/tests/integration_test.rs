//! Integration tests for kiln-export
//!
//! Tests the full pipeline: generate scene fixture -> convert -> read the
//! container back.


use std::path::Path;
use std::process::Output;
use tempfile::tempdir;

use kiln_common::{HEADER_PREFIX_SIZE, ModelFile, wire};

#[test]
fn test_full_scene_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scene_path = dir.path().join("scene.json");
    generate_test_scenes::generate_full_scene(&scene_path).expect("Failed to generate scene");

    let output = kiln_export_convert(&scene_path, &[]);
    assert!(output.status.success(), "kiln-export failed: {output:?}");

    // Default output path: input with the model extension
    let model_path = dir.path().join("scene.kmodel");
    assert!(model_path.exists(), "model file should exist");

    let bytes = std::fs::read(&model_path).expect("Failed to read model file");
    let model = ModelFile::from_bytes(&bytes).expect("container should parse");

    // The prefix must equal the actual header byte length
    assert_eq!(
        bytes.len(),
        HEADER_PREFIX_SIZE + model.header_length as usize + model.payload.len()
    );

    // Spot light scenario: ambient "Fill" skipped, "Lamp" carried through
    let lights = model.header["lights"].as_array().expect("lights array");
    assert_eq!(lights.len(), 1);
    assert_eq!(lights[0]["id"], "Lamp");
    assert_eq!(lights[0]["type"], "spot");
    assert_eq!(lights[0]["color"], serde_json::json!([255, 0, 0]));
    assert_eq!(lights[0]["coneAngle"], 45.0);

    // Payload: cube (6 idx + 12 floats), tri (3 idx + 3 floats),
    // walk (3 floats) then idle (2 floats)
    let geometry_size = (6 * 2 + 12 * 4) + (3 * 2 + 3 * 4);
    let animation_size = (3 + 2) * 4;
    assert_eq!(model.payload.len(), geometry_size + animation_size);

    // Animation tracks in playback order at the payload tail
    let tail = geometry_size;
    assert_eq!(wire::get_f32_be(&model.payload, tail), Some(1.0));
    assert_eq!(wire::get_f32_be(&model.payload, tail + 4), Some(2.0));
    assert_eq!(wire::get_f32_be(&model.payload, tail + 8), Some(3.0));
    assert_eq!(wire::get_f32_be(&model.payload, tail + 12), Some(0.0));
    assert_eq!(wire::get_f32_be(&model.payload, tail + 16), Some(0.25));
}

#[test]
fn test_skip_binary_header_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scene_path = dir.path().join("scene.json");
    generate_test_scenes::generate_full_scene(&scene_path).expect("Failed to generate scene");

    let output = kiln_export_convert(&scene_path, &["skip-binary"]);
    assert!(output.status.success(), "kiln-export failed: {output:?}");

    let bytes = std::fs::read(dir.path().join("scene.kmodel")).expect("Failed to read model");
    let model = ModelFile::from_bytes(&bytes).expect("container should parse");

    // Only the prefix and the header; geometry/animation never queried
    assert_eq!(bytes.len(), HEADER_PREFIX_SIZE + model.header_length as usize);
    assert!(model.header.get("geometry").is_none());
    assert!(model.header.get("animation").is_none());
    assert!(model.header.get("hierarchy").is_some());
}

#[test]
fn test_sub_anim_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scene_path = dir.path().join("scene.json");
    generate_test_scenes::generate_full_scene(&scene_path).expect("Failed to generate scene");

    let output = kiln_export_convert(&scene_path, &["sub-anim"]);
    assert!(output.status.success(), "kiln-export failed: {output:?}");

    let bytes = std::fs::read(dir.path().join("scene.kmodel")).expect("Failed to read model");
    let model = ModelFile::from_bytes(&bytes).expect("container should parse");

    assert!(model.header.get("geometry").is_none());
    assert!(model.header.get("hierarchy").is_none());
    assert!(model.header.get("material").is_none());
    assert!(model.header.get("animation").is_some());
    assert_eq!(model.payload.len(), (3 + 2) * 4);
}

#[test]
fn test_lights_key_absent_for_lightless_scene() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scene_path = dir.path().join("props.json");
    generate_test_scenes::generate_lightless_scene(&scene_path).expect("Failed to generate scene");

    let output = kiln_export_convert(&scene_path, &[]);
    assert!(output.status.success(), "kiln-export failed: {output:?}");

    let bytes = std::fs::read(dir.path().join("props.kmodel")).expect("Failed to read model");
    let model = ModelFile::from_bytes(&bytes).expect("container should parse");
    assert!(model.header.get("lights").is_none());
}

#[test]
fn test_repeated_export_is_byte_identical() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scene_path = dir.path().join("scene.json");
    generate_test_scenes::generate_full_scene(&scene_path).expect("Failed to generate scene");

    assert!(kiln_export_convert(&scene_path, &[]).status.success());
    let first = std::fs::read(dir.path().join("scene.kmodel")).expect("read");

    assert!(kiln_export_convert(&scene_path, &[]).status.success());
    let second = std::fs::read(dir.path().join("scene.kmodel")).expect("read");

    assert_eq!(first, second);
}

#[test]
fn test_unknown_flag_aborts_before_any_work() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scene_path = dir.path().join("scene.json");
    generate_test_scenes::generate_full_scene(&scene_path).expect("Failed to generate scene");

    let output = kiln_export_convert(&scene_path, &["fast-mode"]);
    assert!(!output.status.success(), "unknown flag must fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fast-mode"), "stderr should name the flag: {stderr}");
    assert!(stderr.contains("skip-binary"), "stderr should list allowed flags: {stderr}");

    assert!(
        !dir.path().join("scene.kmodel").exists(),
        "no output file may be created"
    );
}

// Helper to run the kiln-export binary
fn kiln_export_convert(input: &Path, flags: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_kiln-export"))
        .arg(input)
        .args(flags)
        .output()
        .expect("Failed to run kiln-export")
}
