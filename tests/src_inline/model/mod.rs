use super::*;

#[test]
fn test_round_to_two_places() {
    assert_eq!(round_to(0.6667 * 100.0, 2), 66.67);
    assert_eq!(round_to(1.0 / 3.0 * 100.0, 2), 33.33);
    assert_eq!(round_to(0.0, 2), 0.0);
}

#[test]
fn test_clip01() {
    assert_eq!(clip01(-0.5), 0.0);
    assert_eq!(clip01(1.5), 1.0);
    assert_eq!(clip01(0.25), 0.25);
}

#[test]
fn test_pixel_grid_rejects_empty() {
    assert_eq!(
        PixelGrid::new(0, 0, Vec::new()),
        Err(crate::error::InputValidationError::EmptyGrid)
    );
    assert_eq!(
        PixelGrid::from_rows(Vec::new()),
        Err(crate::error::InputValidationError::EmptyGrid)
    );
}

#[test]
fn test_pixel_grid_rejects_shape_mismatch() {
    let err = PixelGrid::new(3, 2, vec![0.0; 5]).unwrap_err();
    assert!(matches!(
        err,
        crate::error::InputValidationError::GridShape { width: 3, height: 2, len: 5 }
    ));

    let ragged = PixelGrid::from_rows(vec![vec![0.0, 0.5], vec![1.0]]);
    assert!(ragged.is_err());
}

#[test]
fn test_pixel_grid_rejects_out_of_range() {
    let err = PixelGrid::new(2, 1, vec![0.5, 1.5]).unwrap_err();
    assert!(matches!(
        err,
        crate::error::InputValidationError::PixelOutOfRange { index: 1, .. }
    ));
    assert!(PixelGrid::new(1, 1, vec![f64::NAN]).is_err());
}

#[test]
fn test_pixel_grid_row_major() {
    let grid = PixelGrid::from_rows(vec![vec![0.0, 0.1, 0.2], vec![0.3, 0.4, 0.5]]).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.get(1, 0), 0.3);
    assert_eq!(grid.get(0, 2), 0.2);
}

#[test]
fn test_recommendation_serializes_as_message() {
    let json = serde_json::to_string(&Recommendation::FollowUp).unwrap();
    assert_eq!(json, "\"Follow-up with specialist recommended\"");
    let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
    let json = serde_json::to_string(&QualityIssue::LowContrast).unwrap();
    assert_eq!(json, "\"low_contrast\"");
}
