use crate::display::{ppi_from_resolution, resolution_from_ppi};
use crate::types::*;
use crate::units::to_inches;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the user enters to describe the screen being previewed
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreviewOptions {
    /// Unit the dimension fields are expressed in
    pub unit: Unit,

    // Physical size (screen = visible area, device = outer body)
    pub dimensions: DimensionFields,

    // Resolution or PPI
    pub mode: InputMode,

    // Test pattern
    pub pattern: PatternKind,
}

impl PreviewOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PreviewError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PreviewError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options without computing anything
    pub fn validate(&self) -> Result<()> {
        self.compute().map(|_| ())
    }

    /// Validate the inputs and derive the missing half of resolution / PPI.
    /// Nothing is returned unless every check passes.
    pub fn compute(&self) -> Result<ScreenSpec> {
        let inches = |value: Option<f64>| value.map(|v| to_inches(v, self.unit));
        let dims = &self.dimensions;

        let (Some(screen_w), Some(screen_h), Some(device_w), Some(device_h)) = (
            inches(dims.screen_width).filter(|v| is_positive(*v)),
            inches(dims.screen_height).filter(|v| is_positive(*v)),
            inches(dims.device_width).filter(|v| is_positive(*v)),
            inches(dims.device_height).filter(|v| is_positive(*v)),
        ) else {
            return Err(PreviewError::MissingDimensions);
        };

        if screen_w > device_w || screen_h > device_h {
            return Err(PreviewError::ScreenExceedsDevice);
        }

        let (res_width, res_height, ppi) = match self.mode {
            InputMode::Resolution { width, height } => {
                let (Some(rw), Some(rh)) = (width.filter(|w| *w > 0), height.filter(|h| *h > 0))
                else {
                    return Err(PreviewError::MissingResolution);
                };
                (rw, rh, ppi_from_resolution(screen_w, screen_h, rw, rh))
            }
            InputMode::Ppi(ppi) => {
                let Some(ppi) = ppi.filter(|p| is_positive(*p)) else {
                    return Err(PreviewError::MissingPpi);
                };
                let (rw, rh) = resolution_from_ppi(screen_w, screen_h, ppi);
                if rw == 0 || rh == 0 {
                    return Err(PreviewError::EmptyResolution);
                }
                (rw, rh, ppi)
            }
        };

        log::debug!(
            "Computed {:.2}\" × {:.2}\" screen at {res_width} × {res_height} ({ppi:.1} PPI)",
            screen_w,
            screen_h
        );

        Ok(ScreenSpec {
            screen_width_in: screen_w,
            screen_height_in: screen_h,
            device_width_in: device_w,
            device_height_in: device_h,
            res_width,
            res_height,
            ppi,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
