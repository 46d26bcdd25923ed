use crate::options::PreviewOptions;
use crate::pattern::render_pattern;
use crate::summary::DisplaySummary;
use crate::types::*;
use image::RgbaImage;

/// Everything needed to draw one preview
#[derive(Debug, Clone)]
pub struct Preview {
    pub spec: ScreenSpec,
    pub summary: DisplaySummary,
    pub pattern: RgbaImage,
    pub fit: ImageFit,
}

/// Validate the options, derive the screen spec and render its test pattern.
/// On error nothing is produced, so callers keep their previous preview.
pub fn generate_preview(options: &PreviewOptions) -> Result<Preview> {
    let spec = options.compute()?;
    let pattern = render_pattern(spec.res_width, spec.res_height, options.pattern)?;

    log::info!(
        "Generated {} × {} preview at {:.0} PPI",
        spec.res_width,
        spec.res_height,
        spec.ppi
    );

    Ok(Preview {
        summary: DisplaySummary::new(&spec, options.unit),
        spec,
        pattern,
        fit: options.pattern.fit(),
    })
}
