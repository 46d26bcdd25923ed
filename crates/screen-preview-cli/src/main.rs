use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use screen_preview::{InputMode, PatternKind, PreviewOptions, Unit};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spv", about = "Screen size and pixel density preview", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a screen's resolution / PPI and render its test pattern
    Render(RenderArgs),

    /// Convert a length between units
    Convert {
        value: f64,

        /// Unit the value is in
        #[arg(long, value_enum)]
        from: UnitArg,

        /// Unit to convert to
        #[arg(long, value_enum)]
        to: UnitArg,
    },

    /// Simplify a resolution to its aspect ratio
    Aspect { width: u32, height: u32 },

    /// Estimate the physical size of a display from its pixel geometry
    SelfDisplay {
        /// Logical screen width (CSS pixels / points)
        #[arg(long)]
        width: f64,

        /// Logical screen height
        #[arg(long)]
        height: f64,

        /// Device pixels per logical pixel
        #[arg(long, default_value = "1.0")]
        pixel_ratio: f64,

        /// Measured diagonal in inches, if known
        #[arg(long)]
        diagonal: Option<f64>,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Load options from a JSON file; other flags are ignored
    #[arg(long)]
    config: Option<PathBuf>,

    /// Unit for all dimension flags
    #[arg(long, default_value = "in", value_enum)]
    unit: UnitArg,

    /// Visible screen width
    #[arg(long)]
    screen_width: Option<f64>,

    /// Visible screen height
    #[arg(long)]
    screen_height: Option<f64>,

    /// Outer device width
    #[arg(long)]
    device_width: Option<f64>,

    /// Outer device height
    #[arg(long)]
    device_height: Option<f64>,

    /// Horizontal resolution in pixels
    #[arg(long, conflicts_with = "ppi")]
    res_width: Option<u32>,

    /// Vertical resolution in pixels
    #[arg(long, conflicts_with = "ppi")]
    res_height: Option<u32>,

    /// Pixel density; derives the resolution instead
    #[arg(long)]
    ppi: Option<f64>,

    /// Test pattern
    #[arg(long, default_value = "gradient", value_enum)]
    pattern: PatternArg,

    /// Checkerboard tile size in pixels
    #[arg(long)]
    tile_size: Option<u32>,

    /// Write the pattern to this PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the effective options as JSON
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show the summary only, don't render the pattern
    #[arg(long)]
    summary_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    In,
    Cm,
    Mm,
}

#[derive(Clone, Copy, ValueEnum)]
enum PatternArg {
    Gradient,
    Checkerboard,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::In => Self::Inch,
            UnitArg::Cm => Self::Centimeter,
            UnitArg::Mm => Self::Millimeter,
        }
    }
}

impl RenderArgs {
    fn to_options(&self) -> PreviewOptions {
        let mode = match self.ppi {
            Some(ppi) => InputMode::Ppi(Some(ppi)),
            None => InputMode::Resolution {
                width: self.res_width,
                height: self.res_height,
            },
        };
        let pattern = match self.pattern {
            PatternArg::Gradient => PatternKind::Gradient,
            PatternArg::Checkerboard => PatternKind::Checkerboard {
                tile_size: self.tile_size,
            },
        };

        PreviewOptions {
            unit: self.unit.into(),
            dimensions: screen_preview::DimensionFields {
                screen_width: self.screen_width,
                screen_height: self.screen_height,
                device_width: self.device_width,
                device_height: self.device_height,
            },
            mode,
            pattern,
        }
    }
}

async fn render(args: RenderArgs) -> Result<()> {
    let options = match &args.config {
        Some(path) => PreviewOptions::load(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => args.to_options(),
    };

    if let Some(path) = &args.save_config {
        options.save(path).await?;
        log::info!("Saved options to {}", path.display());
    }

    let spec = options.compute()?;
    let summary = screen_preview::DisplaySummary::new(&spec, options.unit);
    println!("Display Information:");
    for (label, value) in summary.lines() {
        println!("  {label}: {value}");
    }

    if args.summary_only {
        return Ok(());
    }

    let Some(output) = args.output else {
        log::warn!("No --output given, pattern not written");
        return Ok(());
    };

    let pattern = screen_preview::render_pattern(spec.res_width, spec.res_height, options.pattern)?;
    screen_preview::save_png(pattern, &output).await?;
    println!("Pattern → {}", output.display());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render(args).await?,

        Commands::Convert { value, from, to } => {
            let (from, to) = (Unit::from(from), Unit::from(to));
            let converted = screen_preview::units::convert(value, from, to);
            println!("{value} {from} = {converted} {to}");
        }

        Commands::Aspect { width, height } => {
            println!("{}", screen_preview::aspect_ratio(width, height));
        }

        Commands::SelfDisplay {
            width,
            height,
            pixel_ratio,
            diagonal,
        } => {
            let display =
                screen_preview::estimate_self_display(width, height, pixel_ratio, diagonal);
            println!("Your Display:");
            println!(
                "  Resolution: {} × {} pixels",
                display.pixel_width.round(),
                display.pixel_height.round()
            );
            println!("  Pixel Density: {:.0} PPI", display.ppi);
            println!(
                "  Size: {:.1}\" × {:.1}\" ({:.1}\" diagonal)",
                display.width_in, display.height_in, display.diagonal_in
            );
            if display.calibration == screen_preview::Calibration::Estimated {
                println!("  (estimated at 96 PPI; pass --diagonal for an exact value)");
            }
        }
    }

    Ok(())
}
