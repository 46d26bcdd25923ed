use screen_preview::display::{gcd, ppi_from_resolution, resolution_from_ppi};
use screen_preview::*;

#[test]
fn test_diagonal() {
    assert_eq!(diagonal(3.0, 4.0), 5.0);
    assert_eq!(diagonal(1920.0, 0.0), 1920.0);
}

#[test]
fn test_ppi_from_resolution() {
    // 16" × 9" panel at 1920 × 1080 is exactly 120 PPI
    let ppi = ppi_from_resolution(16.0, 9.0, 1920, 1080);
    assert!((ppi - 120.0).abs() < 1e-9);
}

#[test]
fn test_resolution_from_ppi_rounds() {
    assert_eq!(resolution_from_ppi(2.5, 5.4, 460.0), (1150, 2484));
    assert_eq!(resolution_from_ppi(0.001, 0.001, 100.0), (0, 0));
}

#[test]
fn test_ppi_round_trip_reproduces_resolution() {
    let cases = [
        (16.0, 9.0, 1920, 1080),
        (2.61, 5.65, 1179, 2556),
        (11.3, 7.1, 2560, 1600),
        (23.5, 10.07, 3440, 1440),
        (4.0, 3.0, 1024, 768),
    ];

    for (w, h, rw, rh) in cases {
        let ppi = ppi_from_resolution(w, h, rw, rh);
        let (back_w, back_h) = resolution_from_ppi(w, h, ppi);
        // Off by at most the rounding of a size that doesn't exactly match the pixel aspect
        let tolerance_w = (f64::from(rw) - w * ppi).abs().ceil() as i64 + 1;
        let tolerance_h = (f64::from(rh) - h * ppi).abs().ceil() as i64 + 1;
        assert!((i64::from(back_w) - i64::from(rw)).abs() <= tolerance_w);
        assert!((i64::from(back_h) - i64::from(rh)).abs() <= tolerance_h);
    }

    // Exactly proportional sizes round-trip exactly
    let ppi = ppi_from_resolution(16.0, 9.0, 1920, 1080);
    assert_eq!(resolution_from_ppi(16.0, 9.0, ppi), (1920, 1080));
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(1920, 1080), 120);
    assert_eq!(gcd(1000, 333), 1);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(0, 0), 0);
}

#[test]
fn test_named_aspect_ratios() {
    assert_eq!(aspect_ratio(1920, 1080).to_string(), "16:9");
    assert_eq!(aspect_ratio(2560, 1600).to_string(), "16:10");
    assert_eq!(aspect_ratio(1024, 768).to_string(), "4:3");
    assert_eq!(aspect_ratio(2560, 1080).to_string(), "64:27");
    assert_eq!(aspect_ratio(3440, 1440).to_string(), "43:18");
    assert_eq!(aspect_ratio(2100, 900).to_string(), "21:9");
    assert_eq!(aspect_ratio(3000, 2000).to_string(), "3:2");
    assert_eq!(
        aspect_ratio(1920, 1080),
        AspectRatio::Named(NamedRatio::Wide16x9)
    );
}

#[test]
fn test_near_named_ratio_uses_name() {
    // 1366 / 768 = 1.7786, within 0.01 of 16:9
    assert_eq!(aspect_ratio(1366, 768).to_string(), "16:9");
}

#[test]
fn test_unnamed_ratio_is_reduced() {
    // 1000 / 333 = 3.003; no named ratio is within 0.01
    assert_eq!(
        aspect_ratio(1000, 333),
        AspectRatio::Reduced {
            width: 1000,
            height: 333
        }
    );
    assert_eq!(aspect_ratio(1000, 333).to_string(), "1000:333");
    assert_eq!(aspect_ratio(1179, 2556).to_string(), "131:284");
}

#[test]
fn test_degenerate_aspect_ratios() {
    assert_eq!(aspect_ratio(1920, 0).to_string(), "1:0");
    assert_eq!(aspect_ratio(0, 0).to_string(), "0:0");
}
