use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Please fill in all dimension fields.")]
    MissingDimensions,
    #[error("Screen dimensions cannot be larger than device dimensions.")]
    ScreenExceedsDevice,
    #[error("Please fill in resolution fields.")]
    MissingResolution,
    #[error("Please fill in the PPI field.")]
    MissingPpi,
    #[error("Derived resolution is empty; increase the PPI or screen size.")]
    EmptyResolution,
    #[error(
        "Pattern of {width} × {height} pixels is too large (limit {side} px per side, {total} px in total)",
        side = crate::constants::MAX_PATTERN_DIMENSION,
        total = crate::constants::MAX_PATTERN_PIXELS
    )]
    PatternTooLarge { width: u32, height: u32 },
    #[error("Pattern must be at least 1 × 1 pixels")]
    EmptyPattern,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl PreviewError {
    /// True for input problems the user can fix in the form
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PreviewError::MissingDimensions
                | PreviewError::ScreenExceedsDevice
                | PreviewError::MissingResolution
                | PreviewError::MissingPpi
                | PreviewError::EmptyResolution
        )
    }
}

pub type Result<T> = std::result::Result<T, PreviewError>;

/// Length unit used by the dimension fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inch,
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Inch, Unit::Centimeter, Unit::Millimeter];

    /// Short label, as shown next to values
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Centimeter => "cm",
            Unit::Millimeter => "mm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = PreviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Unit::Inch),
            "cm" | "centimeter" | "centimeters" => Ok(Unit::Centimeter),
            "mm" | "millimeter" | "millimeters" => Ok(Unit::Millimeter),
            other => Err(PreviewError::Config(format!("Unknown unit: {other}"))),
        }
    }
}

/// Which value the user supplies alongside the physical size
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputMode {
    /// Pixel resolution is known, PPI is derived
    Resolution {
        width: Option<u32>,
        height: Option<u32>,
    },
    /// Pixel density is known, resolution is derived
    Ppi(Option<f64>),
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Resolution {
            width: None,
            height: None,
        }
    }
}

/// Test pattern drawn into the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatternKind {
    #[default]
    Gradient,
    /// Black/white tiles; `None` picks a size from the resolution
    Checkerboard { tile_size: Option<u32> },
}

impl PatternKind {
    /// How the rendered image is fitted into the screen rectangle
    pub fn fit(self) -> ImageFit {
        match self {
            PatternKind::Gradient => ImageFit::Cover,
            PatternKind::Checkerboard { .. } => ImageFit::Stretch,
        }
    }
}

/// Image scaling behavior when the pattern and its container differ in aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    /// Scale to cover the container, cropping the overflow (centered)
    Cover,
    /// Stretch to the container, ignoring aspect ratio
    Stretch,
}

/// The four editable dimension fields, in the currently active unit.
/// `None` marks an empty or non-numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionFields {
    pub screen_width: Option<f64>,
    pub screen_height: Option<f64>,
    pub device_width: Option<f64>,
    pub device_height: Option<f64>,
}

impl DimensionFields {
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Option<f64>> {
        [
            &mut self.screen_width,
            &mut self.screen_height,
            &mut self.device_width,
            &mut self.device_height,
        ]
        .into_iter()
    }
}

/// A fully validated screen description. All lengths are in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSpec {
    pub screen_width_in: f64,
    pub screen_height_in: f64,
    pub device_width_in: f64,
    pub device_height_in: f64,
    pub res_width: u32,
    pub res_height: u32,
    pub ppi: f64,
}

impl ScreenSpec {
    pub fn diagonal_in(&self) -> f64 {
        crate::display::diagonal(self.screen_width_in, self.screen_height_in)
    }

    pub fn megapixels(&self) -> f64 {
        f64::from(self.res_width) * f64::from(self.res_height) / 1_000_000.0
    }

    pub fn aspect_ratio(&self) -> crate::display::AspectRatio {
        crate::display::aspect_ratio(self.res_width, self.res_height)
    }
}
