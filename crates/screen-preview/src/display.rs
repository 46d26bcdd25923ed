//! Pixel density, resolution and aspect ratio math

use std::fmt;

use crate::constants::NAMED_RATIO_TOLERANCE;

/// Length of the diagonal of a `width` × `height` rectangle
pub fn diagonal(width: f64, height: f64) -> f64 {
    (width * width + height * height).sqrt()
}

/// Pixels per inch: diagonal pixels over diagonal inches
pub fn ppi_from_resolution(width_in: f64, height_in: f64, res_width: u32, res_height: u32) -> f64 {
    diagonal(f64::from(res_width), f64::from(res_height)) / diagonal(width_in, height_in)
}

/// Resolution a screen of the given size has at `ppi`, rounded per axis
pub fn resolution_from_ppi(width_in: f64, height_in: f64, ppi: f64) -> (u32, u32) {
    // `as` saturates, so absurd inputs clamp instead of wrapping
    (
        (width_in * ppi).round() as u32,
        (height_in * ppi).round() as u32,
    )
}

/// Greatest common divisor (Euclid)
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Well-known aspect ratios that get a label of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRatio {
    Wide16x9,
    Wide16x10,
    Standard4x3,
    Ultrawide21x9,
    Photo3x2,
}

impl NamedRatio {
    /// Checked in this order; the first one within tolerance wins
    pub const ALL: [NamedRatio; 5] = [
        NamedRatio::Wide16x9,
        NamedRatio::Wide16x10,
        NamedRatio::Standard4x3,
        NamedRatio::Ultrawide21x9,
        NamedRatio::Photo3x2,
    ];

    pub fn terms(self) -> (u32, u32) {
        match self {
            NamedRatio::Wide16x9 => (16, 9),
            NamedRatio::Wide16x10 => (16, 10),
            NamedRatio::Standard4x3 => (4, 3),
            NamedRatio::Ultrawide21x9 => (21, 9),
            NamedRatio::Photo3x2 => (3, 2),
        }
    }

    pub fn value(self) -> f64 {
        let (w, h) = self.terms();
        f64::from(w) / f64::from(h)
    }
}

/// Simplified aspect ratio of a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Named(NamedRatio),
    Reduced { width: u32, height: u32 },
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = match *self {
            AspectRatio::Named(named) => named.terms(),
            AspectRatio::Reduced { width, height } => (width, height),
        };
        write!(f, "{w}:{h}")
    }
}

/// Reduce `width:height`, preferring a named ratio when the raw ratio is
/// within 0.01 of one. The tolerance is absolute, so ratios close to a named
/// one are reported under that name.
pub fn aspect_ratio(width: u32, height: u32) -> AspectRatio {
    let divisor = gcd(width, height);
    let reduced = if divisor == 0 {
        AspectRatio::Reduced {
            width: 0,
            height: 0,
        }
    } else {
        AspectRatio::Reduced {
            width: width / divisor,
            height: height / divisor,
        }
    };

    if height == 0 {
        return reduced;
    }

    let ratio = f64::from(width) / f64::from(height);
    NamedRatio::ALL
        .into_iter()
        .find(|named| (ratio - named.value()).abs() < NAMED_RATIO_TOLERANCE)
        .map_or(reduced, AspectRatio::Named)
}
