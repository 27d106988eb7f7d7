use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "ledwheel", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit the firmware lookup-table header.
    Header(HeaderArgs),
    /// Render every physical pixel position as a PNG.
    Layout(LayoutArgs),
    /// Run one effect, writing preview PNGs.
    Effect(EffectArgs),
    /// Cycle through every effect, writing preview PNGs.
    Play(PlayArgs),
    /// Map a still image or animated GIF onto the panel, writing preview PNGs.
    Frames(FramesArgs),
}

#[derive(Args, Debug, Clone)]
struct PanelArgs {
    /// Panel config JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raster width in cells.
    #[arg(long)]
    width: Option<u32>,

    /// Raster height in cells.
    #[arg(long)]
    height: Option<u32>,

    /// Preview upscale factor.
    #[arg(long)]
    scale: Option<u32>,

    /// Fixed delay between frames, replacing the native effect/frame timing.
    #[arg(long)]
    interval_ms: Option<u64>,
}

#[derive(Args, Debug)]
struct HeaderArgs {
    #[command(flatten)]
    panel: PanelArgs,

    /// Output header path. Printed to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    panel: PanelArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct EffectArgs {
    #[command(flatten)]
    panel: PanelArgs,

    /// Effect to run.
    #[arg(long, value_enum)]
    kind: EffectChoice,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 64)]
    frames: u64,

    /// Output directory for preview PNGs.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PlayArgs {
    #[command(flatten)]
    panel: PanelArgs,

    /// Ticks spent on each effect before switching.
    #[arg(long, default_value_t = 32)]
    frames_per_effect: u64,

    /// Full passes through the playlist.
    #[arg(long, default_value_t = 1)]
    rounds: u64,

    /// Output directory for preview PNGs.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    panel: PanelArgs,

    /// Input image or GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for preview PNGs.
    #[arg(long)]
    out: PathBuf,

    /// Source sub-rectangle as `x,y,w,h`.
    #[arg(long)]
    crop: Option<ledwheel::CropRect>,

    /// Times to play the frame list.
    #[arg(long, default_value_t = 1)]
    loops: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectChoice {
    Spiral,
    Wipe,
    Rings,
    Rainbow,
    Breath,
}

impl From<EffectChoice> for ledwheel::EffectKind {
    fn from(choice: EffectChoice) -> Self {
        match choice {
            EffectChoice::Spiral => Self::Spiral,
            EffectChoice::Wipe => Self::Wipe,
            EffectChoice::Rings => Self::Rings,
            EffectChoice::Rainbow => Self::Rainbow,
            EffectChoice::Breath => Self::Breath,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Header(args) => cmd_header(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Effect(args) => cmd_effect(args),
        Command::Play(args) => cmd_play(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(args: &PanelArgs) -> anyhow::Result<ledwheel::PanelConfig> {
    let mut cfg = match &args.config {
        Some(path) => ledwheel::PanelConfig::from_path(path)
            .with_context(|| format!("load panel config '{}'", path.display()))?,
        None => ledwheel::PanelConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if let Some(s) = args.scale {
        cfg.preview_scale = s;
    }
    if let Some(ms) = args.interval_ms {
        cfg.frame_interval_ms = Some(ms);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn build_panel(cfg: &ledwheel::PanelConfig) -> anyhow::Result<ledwheel::Panel> {
    let panel = ledwheel::Panel::build(cfg.width, cfg.height)
        .with_context(|| format!("build addressing tables for {}x{}", cfg.width, cfg.height))?;
    let tables = panel.tables();
    if !tables.collisions().is_empty() {
        eprintln!(
            "warning: {} raster collisions; {} of {} pixels addressable by raster",
            tables.collisions().len(),
            tables.addressable_by_raster(),
            tables.total_count()
        );
    }
    Ok(panel)
}

fn create_out_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))
}

fn cmd_header(args: HeaderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.panel)?;
    let panel = build_panel(&cfg)?;

    let text = match &args.out {
        Some(path) => {
            let text = ledwheel::write_header(panel.tables(), path)
                .with_context(|| format!("write header '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
            text
        }
        None => {
            let text = ledwheel::serialize_header(panel.tables())?;
            print!("{text}");
            text
        }
    };

    eprintln!("sha256: {}", sha256_hex(text.as_bytes()));
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.panel)?;
    let mut panel = build_panel(&cfg)?;
    panel.fill(ledwheel::Rgb8::GREEN);

    if let Some(parent) = args.out.parent() {
        create_out_dir(parent)?;
    }
    panel
        .buffer()
        .scaled(cfg.preview_scale)
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} pixels)",
        args.out.display(),
        panel.tables().total_count()
    );
    Ok(())
}

fn cmd_effect(args: EffectArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.panel)?;
    let mut panel = build_panel(&cfg)?;
    let kind = ledwheel::EffectKind::from(args.kind);

    create_out_dir(&args.out)?;
    let mut sink = ledwheel::PngSequenceSink::new(&args.out, kind.name());
    let mut driver = ledwheel::EffectDriver::new(cfg.driver_opts())?;
    let mut effect = kind.create(panel.canvas());
    let stats = driver.run(effect.as_mut(), &mut panel, &mut sink, Some(args.frames))?;

    eprintln!("wrote {} frames to {}", stats.ticks, args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.panel)?;
    let mut panel = build_panel(&cfg)?;

    create_out_dir(&args.out)?;
    let mut sink = ledwheel::PngSequenceSink::new(&args.out, "play");
    let mut driver = ledwheel::EffectDriver::new(cfg.driver_opts())?;
    let stats = driver.run_playlist(
        &ledwheel::EffectKind::ALL,
        &mut panel,
        &mut sink,
        args.frames_per_effect,
        Some(args.rounds),
    )?;

    eprintln!("wrote {} frames to {}", stats.ticks, args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.loops == 0 {
        anyhow::bail!("--loops must be >= 1");
    }
    let cfg = load_config(&args.panel)?;
    let mut panel = build_panel(&cfg)?;

    let mut source = ledwheel::ImageFileSource::open(&args.in_path, panel.canvas(), args.crop)
        .with_context(|| format!("load frames from '{}'", args.in_path.display()))?
        .with_loops(Some(args.loops));

    create_out_dir(&args.out)?;
    let mut sink = ledwheel::PngSequenceSink::new(&args.out, "frame");
    let n = ledwheel::play_source(&mut source, &mut panel, &mut sink, cfg.driver_opts())?;

    eprintln!("wrote {n} frames to {}", args.out.display());
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
