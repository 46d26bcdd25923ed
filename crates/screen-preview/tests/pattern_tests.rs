use image::Rgba;
use screen_preview::pattern::*;
use screen_preview::*;

#[test]
fn test_pattern_has_exact_resolution() {
    for kind in [
        PatternKind::Gradient,
        PatternKind::Checkerboard { tile_size: None },
    ] {
        let image = render_pattern(321, 123, kind).unwrap();
        assert_eq!(image.dimensions(), (321, 123));
    }
}

#[test]
fn test_empty_and_oversized_patterns_are_rejected() {
    assert!(matches!(
        render_pattern(0, 100, PatternKind::Gradient),
        Err(PreviewError::EmptyPattern)
    ));
    assert!(matches!(
        render_pattern(20_000, 100, PatternKind::Gradient),
        Err(PreviewError::PatternTooLarge { width: 20_000, .. })
    ));
}

#[test]
fn test_total_pixel_cap() {
    // Both sides are within the per-side limit, but 100 Mpx is too much
    assert!(matches!(
        render_pattern(10_000, 10_000, PatternKind::Gradient),
        Err(PreviewError::PatternTooLarge {
            width: 10_000,
            height: 10_000
        })
    ));
    assert!(render_pattern(16_384, 1, PatternKind::Gradient).is_ok());
}

#[test]
fn test_dense_square_screen_is_rejected_before_rendering() {
    // 8" × 8" at 2048 PPI derives 16384 × 16384, a 1 GiB buffer
    let options = PreviewOptions {
        unit: Unit::Inch,
        dimensions: DimensionFields {
            screen_width: Some(8.0),
            screen_height: Some(8.0),
            device_width: Some(8.5),
            device_height: Some(8.5),
        },
        mode: InputMode::Ppi(Some(2048.0)),
        pattern: PatternKind::Checkerboard { tile_size: None },
    };

    let spec = options.compute().unwrap();
    assert_eq!((spec.res_width, spec.res_height), (16_384, 16_384));

    let err = generate_preview(&options).unwrap_err();
    assert!(matches!(err, PreviewError::PatternTooLarge { .. }));
    assert!(!err.is_validation());
    assert!(err.to_string().contains("16384 × 16384"));
}

#[test]
fn test_checker_tile_size() {
    assert_eq!(checker_tile_size(1920, 1080, None), 54);
    assert_eq!(checker_tile_size(1920, 1080, Some(0)), 54);
    assert_eq!(checker_tile_size(1920, 1080, Some(32)), 32);
    assert_eq!(checker_tile_size(10, 10, None), 1);
}

#[test]
fn test_checker_tile_parity() {
    assert_eq!(checker_tile_color(0, 0), checker_tile_color(1, 1));
    assert_eq!(checker_tile_color(0, 1), checker_tile_color(1, 0));
    assert_ne!(checker_tile_color(0, 0), checker_tile_color(0, 1));
    assert_eq!(checker_tile_color(0, 0), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_checker_tile_parity_at_extreme_indices() {
    assert_eq!(checker_tile_color(u32::MAX, u32::MAX), Rgba([0, 0, 0, 255]));
    assert_eq!(
        checker_tile_color(u32::MAX, 0),
        Rgba([255, 255, 255, 255])
    );
    assert_eq!(
        checker_tile_color(u32::MAX - 1, 2),
        checker_tile_color(0, 0)
    );
}

#[test]
fn test_checkerboard_pixels_follow_tiles() {
    // Label lands in the middle; corners are untouched tiles
    let image = render_pattern(
        400,
        400,
        PatternKind::Checkerboard {
            tile_size: Some(10),
        },
    )
    .unwrap();

    assert_eq!(image.get_pixel(0, 0), image.get_pixel(15, 15));
    assert_eq!(image.get_pixel(15, 0), image.get_pixel(0, 15));
    assert_ne!(image.get_pixel(0, 0), image.get_pixel(15, 0));
    assert_eq!(*image.get_pixel(9, 9), Rgba([0, 0, 0, 255]));
    assert_eq!(*image.get_pixel(10, 9), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_gradient_stops() {
    assert_eq!(gradient_color(0.0), [0xFF, 0x00, 0x80]);
    assert_eq!(gradient_color(0.25), [0xFF, 0x8C, 0x00]);
    assert_eq!(gradient_color(0.5), [0x40, 0xE0, 0xD0]);
    assert_eq!(gradient_color(0.75), [0x93, 0x70, 0xDB]);
    assert_eq!(gradient_color(1.0), [0x00, 0xCE, 0xD1]);
    // Out of range clamps
    assert_eq!(gradient_color(-1.0), gradient_color(0.0));
    assert_eq!(gradient_color(2.0), gradient_color(1.0));
}

#[test]
fn test_gradient_interpolates_between_stops() {
    // Halfway between #FF0080 and #FF8C00
    assert_eq!(gradient_color(0.125), [0xFF, 0x46, 0x40]);
}

#[test]
fn test_gradient_runs_corner_to_corner() {
    let image = render_pattern(1000, 500, PatternKind::Gradient).unwrap();
    let top_left = image.get_pixel(0, 0).0;
    let bottom_right = image.get_pixel(999, 499).0;
    assert_eq!(&top_left[..3], &[0xFF, 0x00, 0x80]);
    assert_eq!(&bottom_right[..3], &[0x00, 0xCE, 0xD1]);
}

#[test]
fn test_label() {
    assert_eq!(resolution_label(1920, 1080), "1920 × 1080");
    assert_eq!(label_font_size(1920), 96.0);
    assert_eq!(label_font_size(100), 20.0);
}

#[test]
fn test_label_is_drawn_in_the_center() {
    let plain = render_pattern(
        400,
        400,
        PatternKind::Checkerboard {
            tile_size: Some(400),
        },
    )
    .unwrap();

    // One black tile covers everything, so any non-black pixel is label
    let label_pixels = plain.pixels().filter(|p| p.0 != [0, 0, 0, 255]).count();
    assert!(label_pixels > 0);
    assert_eq!(*plain.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    assert_eq!(*plain.get_pixel(399, 399), Rgba([0, 0, 0, 255]));
}

#[test]
fn test_encode_png() {
    let image = render_pattern(64, 48, PatternKind::Gradient).unwrap();
    let bytes = encode_png(&image).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded, image);
}

#[tokio::test]
async fn test_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.png");
    let image = render_pattern(32, 32, PatternKind::Checkerboard { tile_size: None }).unwrap();

    save_png(image, &path).await.unwrap();

    let written = tokio::fs::read(&path).await.unwrap();
    assert!(written.starts_with(b"\x89PNG"));
}
