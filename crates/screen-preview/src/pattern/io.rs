//! Pattern export

use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::types::*;

/// Encode a rendered pattern as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut writer = Cursor::new(Vec::new());
    image.write_to(&mut writer, ImageFormat::Png)?;
    Ok(writer.into_inner())
}

/// Save a rendered pattern as a PNG file
pub async fn save_png(image: RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || encode_png(&image)).await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote pattern to {}", path.display());
    Ok(())
}
