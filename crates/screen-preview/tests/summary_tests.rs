use screen_preview::*;

fn phone_spec() -> ScreenSpec {
    PreviewOptions {
        unit: Unit::Inch,
        dimensions: DimensionFields {
            screen_width: Some(2.6),
            screen_height: Some(5.6),
            device_width: Some(2.8),
            device_height: Some(5.8),
        },
        mode: InputMode::Resolution {
            width: Some(1179),
            height: Some(2556),
        },
        pattern: PatternKind::Gradient,
    }
    .compute()
    .unwrap()
}

#[test]
fn test_summary_values() {
    let summary = DisplaySummary::new(&phone_spec(), Unit::Centimeter);
    assert_eq!(summary.diagonal_in, 6.17);
    assert_eq!(summary.diagonal_unit, 15.7);
    assert_eq!(summary.screen_in, (2.6, 5.6));
    assert_eq!(summary.screen_unit, (6.6, 14.2));
    assert_eq!(summary.device_unit, (7.1, 14.7));
    assert_eq!(summary.resolution, (1179, 2556));
    assert_eq!(summary.ppi, 456);
    assert_eq!(summary.megapixels, 3.01);
}

#[test]
fn test_summary_lines() {
    let summary = DisplaySummary::new(&phone_spec(), Unit::Centimeter);
    let lines = summary.lines();

    assert_eq!(
        lines,
        vec![
            ("Screen Diagonal", "6.17 inches (15.7 cm)".to_string()),
            (
                "Screen Dimensions",
                "2.6\" × 5.6\" (6.6 cm × 14.2 cm)".to_string()
            ),
            (
                "Device Dimensions",
                "2.8\" × 5.8\" (7.1 cm × 14.7 cm)".to_string()
            ),
            ("Resolution", "1179 × 2556 pixels".to_string()),
            ("Pixel Density", "456 PPI".to_string()),
            ("Aspect Ratio", "131:284".to_string()),
            ("Total Pixels", "3.01 megapixels".to_string()),
        ]
    );
}

#[test]
fn test_summary_in_millimeters_rounds_to_integers() {
    let summary = DisplaySummary::new(&phone_spec(), Unit::Millimeter);
    assert_eq!(summary.screen_unit, (66.0, 142.0));
    assert_eq!(summary.lines()[1].1, "2.6\" × 5.6\" (66 mm × 142 mm)");
}

#[test]
fn test_preview_layout_uses_points_per_inch() {
    let layout = PreviewLayout::new(&phone_spec(), 96.0);
    assert!((layout.screen_size.0 - 249.6).abs() < 1e-9);
    assert!((layout.device_size.1 - 556.8).abs() < 1e-9);
}

#[test]
fn test_image_fit_uv_rect() {
    // Stretch always shows the whole image
    assert_eq!(
        ImageFit::Stretch.uv_rect((1920.0, 1080.0), (100.0, 100.0)),
        [0.0, 0.0, 1.0, 1.0]
    );

    // Wide image in a square box: crop the sides
    let [u0, v0, u1, v1] = ImageFit::Cover.uv_rect((200.0, 100.0), (100.0, 100.0));
    assert_eq!((u0, v0, u1, v1), (0.25, 0.0, 0.75, 1.0));

    // Tall image in a square box: crop top and bottom
    let [u0, v0, u1, v1] = ImageFit::Cover.uv_rect((100.0, 400.0), (50.0, 50.0));
    assert_eq!((u0, v0, u1, v1), (0.0, 0.375, 1.0, 0.625));

    // Same aspect: nothing cropped
    assert_eq!(
        ImageFit::Cover.uv_rect((1920.0, 1080.0), (16.0, 9.0)),
        [0.0, 0.0, 1.0, 1.0]
    );
}

#[test]
fn test_pattern_kind_fit() {
    assert_eq!(PatternKind::Gradient.fit(), ImageFit::Cover);
    assert_eq!(
        PatternKind::Checkerboard { tile_size: None }.fit(),
        ImageFit::Stretch
    );
}
