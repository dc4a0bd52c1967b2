use std::{
    fmt::Write as _,
    io::Write as _,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context as _;
use chrono::Datelike as _;
use clap::Parser;
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

use contrib_text::{
    GitSink, PreviewReport, RasterBackend, RecordSink as _, Schedule, TextRasterizer, YearWord,
};

/// Write words into the yearly contribution grid with dated empty commits.
#[derive(Parser, Debug)]
#[command(name = "contrib-text", version)]
struct Cli {
    /// Mapping as YEAR:WORD (e.g. 2022:HELLO). Can repeat. Defaults to the last three full years.
    #[arg(long = "map", value_name = "YEAR:WORD")]
    map: Vec<String>,

    /// Git remote name to push to.
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Branch to create/reset and push. Defaults to the current HEAD.
    #[arg(long)]
    branch: Option<String>,

    /// Repository to write commits into.
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Only report how many commits each mapping would create. Also enabled by `DRY_RUN`.
    #[arg(long)]
    dry_run: bool,

    /// Print the computed schedules as JSON instead of committing.
    #[arg(long)]
    json: bool,

    /// Render with this TTF/OTF font instead of the built-in bitmap font.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Glyph size in pixels when `--font` is given.
    #[arg(long, default_value_t = contrib_text::DEFAULT_SIZE_PX)]
    font_size: f32,

    /// Print diagnostics about the font in use (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_font: bool,

    /// Year treated as "now" when picking default mappings. Defaults to the current UTC year.
    #[arg(long)]
    current_year: Option<i32>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Targets that receive log output at the CLI verbosity (library and binary share the name).
const CRATE_TARGETS: &[&str] = &["contrib_text"];

/// Map `-v` counts to a filter; `RUST_LOG` overrides when set.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dry_run = cli.dry_run || std::env::var_os("DRY_RUN").is_some();

    let mappings = resolve_mappings(&cli)?;

    let backend = match &cli.font {
        Some(path) => RasterBackend::Outline {
            font_path: path.clone(),
            size_px: cli.font_size,
        },
        None => RasterBackend::Bitmap,
    };
    let rasterizer =
        contrib_text::create_rasterizer(&backend).context("load text rendering backend")?;

    if cli.dump_font {
        dump_font_diagnostics(rasterizer.as_ref());
    }

    let schedules = contrib_text::build_schedules(rasterizer.as_ref(), &mappings);

    if cli.json {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &schedules).context("write schedule JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    if dry_run {
        print!("{}", PreviewReport::from_schedules(&schedules));
        return Ok(());
    }

    commit_and_push(&cli.repo, &cli.remote, cli.branch.clone(), &schedules)
}

fn resolve_mappings(cli: &Cli) -> anyhow::Result<Vec<YearWord>> {
    if cli.map.is_empty() {
        let current_year = cli
            .current_year
            .unwrap_or_else(|| chrono::Utc::now().year());
        let defaults = contrib_text::default_mappings(current_year)
            .context("cannot derive default mappings")?;
        tracing::info!(current_year, ?defaults, "no --map given; using defaults");
        return Ok(defaults);
    }
    contrib_text::parse_mappings(&cli.map).context("bad --map value")
}

fn commit_and_push(
    repo: &Path,
    remote: &str,
    branch: Option<String>,
    schedules: &[Schedule],
) -> anyhow::Result<()> {
    let mut sink = GitSink::open(repo, remote, branch)
        .with_context(|| format!("prepare repository '{}'", repo.display()))?;

    let stdout = std::io::stdout();
    let total = contrib_text::emit_schedules(&mut sink, schedules, &mut stdout.lock())?;
    tracing::info!(total, "created commits");

    println!("Pushing to '{}' {}", sink.remote(), sink.push_ref());
    sink.publish()?;
    Ok(())
}

fn dump_font_diagnostics(rasterizer: &dyn TextRasterizer) {
    eprintln!("font diagnostics:");
    eprintln!("  family:      {}", rasterizer.family_name());
    match rasterizer.font_bytes() {
        Some(bytes) => eprintln!("  sha256:      {}", sha256_hex(bytes)),
        None => eprintln!("  sha256:      (built-in)"),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        let _ = write!(out, "{b:02x}");
    }
    out
}
