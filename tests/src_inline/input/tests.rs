use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("cxr-triage-input-{}-{}", std::process::id(), name))
}

#[test]
fn test_load_probabilities_json() {
    let path = temp_path("probs.json");
    std::fs::write(&path, r#"{"Mass": 0.9, "Edema": 0.12}"#).unwrap();
    let probs = load_probabilities(&path).unwrap();
    assert_eq!(probs.len(), 2);
    assert_eq!(probs["Mass"], 0.9);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_probabilities_gz() {
    let path = temp_path("probs.json.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(br#"{"Nodule": 0.4}"#).unwrap();
    std::fs::write(&path, enc.finish().unwrap()).unwrap();
    let probs = load_probabilities(&path).unwrap();
    assert_eq!(probs["Nodule"], 0.4);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_batch() {
    let path = temp_path("batch.json");
    std::fs::write(&path, r#"[{"Mass": 0.9}, {}, {"Edema": 0.3}]"#).unwrap();
    let items = load_batch(&path).unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[1].is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_parse_error_names_file() {
    let path = temp_path("bad.json");
    std::fs::write(&path, "[1, 2").unwrap();
    let err = load_probabilities(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_binary_validates() {
    let path = temp_path("binary.json");
    std::fs::write(&path, r#"{"malignant": 0.7, "benign": 0.3}"#).unwrap();
    let probs = load_binary(&path).unwrap();
    assert_eq!(probs.malignant, 0.7);

    std::fs::write(&path, r#"{"malignant": 1.7, "benign": 0.3}"#).unwrap();
    assert!(matches!(load_binary(&path), Err(InputError::Invalid(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_pixel_grid_text() {
    let path = temp_path("grid.txt");
    std::fs::write(&path, "# 2x3 grid\n0.0 0.5 1.0\n\n0.2 0.4 0.6\n").unwrap();
    let grid = load_pixel_grid(&path).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.get(1, 2), 0.6);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_pixel_grid_eight_bit_scaled() {
    let rows = grid::parse_rows("0 255\n51 102\n".as_bytes(), std::path::Path::new("mem")).unwrap();
    assert_eq!(rows[0], vec![0.0, 1.0]);
    assert_eq!(rows[1], vec![0.2, 0.4]);
}

#[test]
fn test_stray_value_in_unit_grid_is_not_rescaled() {
    let rows = grid::parse_rows("0.1 0.9\n0.5 3.0\n".as_bytes(), std::path::Path::new("mem")).unwrap();
    assert_eq!(rows[0], vec![0.1, 0.9]);
    assert_eq!(rows[1][1], 3.0);

    let path = temp_path("stray.txt");
    std::fs::write(&path, "0.1 0.9\n0.5 3.0\n").unwrap();
    assert!(matches!(
        load_pixel_grid(&path),
        Err(InputError::Invalid(
            crate::error::InputValidationError::PixelOutOfRange { index: 3, .. }
        ))
    ));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_pixel_grid_rejects_ragged_and_garbage() {
    let path = temp_path("ragged.txt");
    std::fs::write(&path, "0.1 0.2\n0.3\n").unwrap();
    assert!(matches!(load_pixel_grid(&path), Err(InputError::Invalid(_))));

    std::fs::write(&path, "0.1 abc\n").unwrap();
    assert!(matches!(load_pixel_grid(&path), Err(InputError::Parse { .. })));
    let _ = std::fs::remove_file(&path);
}
