use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "diploma", version)]
#[command(about = "Render a certificate from an INI config over a background photo")]
struct Cli {
    /// INI config describing text items, stamp and rings.
    #[arg(long, default_value = "my.ini")]
    config: PathBuf,

    /// Background JPEG/PNG.
    #[arg(long, default_value = "1.jpg")]
    background: PathBuf,

    /// Output JPEG path.
    #[arg(long, default_value = "a.jpg")]
    out: PathBuf,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = diploma::DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Directory searched for font file names that are not absolute paths.
    #[arg(long, default_value = diploma::DEFAULT_FONT_DIR)]
    font_dir: PathBuf,

    /// Font used when `[text]` names none.
    #[arg(long, default_value = "simkai.ttf")]
    fontfile: String,

    /// Font size in points used when `[text]` names none.
    #[arg(long, default_value_t = 24.0)]
    size: f32,

    /// Output resolution; pixel size = points * dpi / 72.
    #[arg(long, default_value_t = diploma::BASE_DPI)]
    dpi: f32,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short)]
    verbose: bool,

    /// Print the resolved layout as JSON and exit without rendering.
    #[arg(long)]
    dump_layout: bool,
}

impl Cli {
    fn job(&self) -> diploma::RenderJob {
        diploma::RenderJob {
            config: self.config.clone(),
            background: self.background.clone(),
            out: self.out.clone(),
            quality: self.quality,
            dpi: self.dpi,
            fonts: diploma::FontSettings {
                font_dir: self.font_dir.clone(),
                default_font: self.fontfile.clone(),
                default_size: self.size,
            },
            ..diploma::RenderJob::default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let job = cli.job();
    if cli.dump_layout {
        return cmd_dump_layout(&job);
    }

    let stats = job
        .run()
        .with_context(|| format!("render '{}'", job.config.display()))?;
    eprintln!(
        "wrote {} ({}x{}, {} text items)",
        job.out.display(),
        stats.width,
        stats.height,
        stats.texts_drawn
    );
    Ok(())
}

fn cmd_dump_layout(job: &diploma::RenderJob) -> anyhow::Result<()> {
    let tree = diploma::load_config(&job.config)?;
    let plan = diploma::plan_layout(&tree, &job.fonts)
        .with_context(|| format!("resolve layout of '{}'", job.config.display()))?;
    let json = serde_json::to_string_pretty(&plan).context("serialize layout")?;
    println!("{json}");
    Ok(())
}
