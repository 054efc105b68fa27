use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "kerfvec", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace an image into an SVG of closed contour paths in millimeters.
    Trace(TraceArgs),
    /// Dump the binarized mask as a PNG (threshold debugging aid).
    Mask(MaskArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DetailArg {
    Low,
    Medium,
    High,
}

impl From<DetailArg> for kerfvec::Detail {
    fn from(value: DetailArg) -> Self {
        match value {
            DetailArg::Low => Self::Low,
            DetailArg::Medium => Self::Medium,
            DetailArg::High => Self::High,
        }
    }
}

#[derive(Parser, Debug)]
struct BinarizeArgs {
    /// Luminance threshold (0-255); pixels brighter than this are background.
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Quality/performance tier.
    #[arg(long, value_enum, default_value = "medium")]
    detail: DetailArg,

    /// Trace the complement region (light-on-dark sources).
    #[arg(long, default_value_t = false)]
    invert: bool,

    /// Treat low-alpha pixels as background regardless of luminance.
    #[arg(long, default_value_t = false)]
    remove_background: bool,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input image (any format the engine can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Target footprint width, mm.
    #[arg(long)]
    width_mm: f64,

    /// Target footprint height, mm.
    #[arg(long)]
    height_mm: f64,

    /// Contour smoothing strength (0-1).
    #[arg(long, default_value_t = 0.5)]
    smoothing: f32,

    #[command(flatten)]
    binarize: BinarizeArgs,

    /// Print trace statistics as JSON to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Input image (any format the engine can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    binarize: BinarizeArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Mask(args) => cmd_mask(args),
    }
}

fn options_from(binarize: &BinarizeArgs, smoothing: f32) -> kerfvec::TraceOptions {
    kerfvec::TraceOptions {
        threshold: binarize.threshold,
        smoothing,
        detail: binarize.detail.into(),
        invert: binarize.invert,
        remove_background: binarize.remove_background,
    }
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let footprint = kerfvec::Footprint::new(args.width_mm, args.height_mm)?;
    let options = options_from(&args.binarize, args.smoothing);

    let (path, stats) = kerfvec::trace_with_stats(
        &bytes,
        footprint,
        &options,
        &mut kerfvec::RunToCompletion,
    )?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, kerfvec::document(&path, footprint))
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let options = options_from(&args.binarize, 0.0);

    let mut buffer = kerfvec::decode_for_detail(&bytes, options.detail)?;
    kerfvec::binarize_in_place(&mut buffer, &options, &mut kerfvec::RunToCompletion)?;
    let (width, height, data) = buffer.into_parts();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &data,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
