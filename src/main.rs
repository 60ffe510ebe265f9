#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sparse_life::pattern::{SampleLibrary, load_world};
use sparse_life::sparselife::{Coordinate, World};
use sparse_life::viewer::{ViewerConfig, run_headless, run_terminal};
use tracing::{info, warn};

const DEFAULT_SAMPLE: &str = "gliders";

#[derive(Parser, Debug)]
#[command(
    name = "sparse-life",
    version,
    about = "Conway's Game of Life on an unbounded plane, viewed through a terminal window"
)]
struct Cli {
    /// Sample name to load from the samples directory (prompted for when omitted).
    sample: Option<String>,

    /// Load a pattern file directly instead of a named sample.
    #[arg(long, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Directory holding `<name>.life` samples.
    #[arg(long, env = "SPARSE_LIFE_SAMPLES", default_value = "./samples")]
    samples_dir: PathBuf,

    /// Left edge of the initial viewport.
    #[arg(long, default_value_t = -10, allow_negative_numbers = true)]
    left: i64,

    /// Top edge of the initial viewport.
    #[arg(long, default_value_t = -10, allow_negative_numbers = true)]
    top: i64,

    /// Right edge of the initial viewport (inclusive).
    #[arg(long, default_value_t = 80, allow_negative_numbers = true)]
    right: i64,

    /// Bottom edge of the initial viewport (inclusive).
    #[arg(long, default_value_t = 40, allow_negative_numbers = true)]
    bottom: i64,

    /// Minimum milliseconds between frames.
    #[arg(long, env = "SPARSE_LIFE_FRAME_MS", default_value_t = 200)]
    frame_ms: u64,

    /// Cells moved by the page keys.
    #[arg(long, default_value_t = 10)]
    page_step: i64,

    /// Evolve this many generations without a terminal, print the viewport and exit.
    #[arg(long, value_name = "GENERATIONS")]
    headless: Option<u64>,
}

impl Cli {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig::default()
            .frame_delay(Duration::from_millis(self.frame_ms))
            .page_step(self.page_step)
            .viewport(
                Coordinate::new(self.left, self.top),
                Coordinate::new(self.right, self.bottom),
            )
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.viewer_config();

    if let Some(generations) = cli.headless {
        let world = load_requested_world(&cli, false)?;
        let text = run_headless(world, config.top_left, config.bottom_right, generations);
        io::stdout()
            .write_all(text.as_bytes())
            .context("failed to write viewport")?;
        return Ok(());
    }

    if !io::stdin().is_terminal() {
        bail!("interactive mode needs a terminal on stdin; use --headless for redirected input");
    }

    let world = load_requested_world(&cli, true)?;
    let world = run_terminal(world, config).context("terminal session failed")?;
    info!(
        generation = world.generation(),
        population = world.population(),
        "exiting"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn load_requested_world(cli: &Cli, interactive: bool) -> Result<World> {
    if let Some(path) = &cli.file {
        return load_world(path)
            .with_context(|| format!("failed to load pattern {}", path.display()));
    }

    let library = SampleLibrary::new(&cli.samples_dir);
    let name = match &cli.sample {
        Some(name) => name.clone(),
        None if interactive => prompt_sample(&library)?,
        None => DEFAULT_SAMPLE.to_owned(),
    };

    info!(sample = %name, "loading sample");
    library
        .load(&name)
        .with_context(|| format!("failed to load sample '{name}'"))
}

fn prompt_sample(library: &SampleLibrary) -> Result<String> {
    let samples = library
        .list()
        .with_context(|| format!("failed to list samples in {}", library.dir().display()))?;
    if samples.is_empty() {
        warn!(dir = %library.dir().display(), "no samples found");
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Available samples:")?;
    for (i, sample) in samples.iter().enumerate() {
        writeln!(stdout, "{}. {sample}", i + 1)?;
    }
    write!(
        stdout,
        "\nEnter the number of the sample to display (or press Enter for default '{DEFAULT_SAMPLE}'): "
    )?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read sample selection")?;
    select_sample(&samples, input.trim())
}

fn select_sample(samples: &[String], input: &str) -> Result<String> {
    if input.is_empty() {
        return Ok(DEFAULT_SAMPLE.to_owned());
    }
    let index: usize = input
        .parse()
        .with_context(|| format!("invalid selection '{input}'"))?;
    match index.checked_sub(1).and_then(|i| samples.get(i)) {
        Some(name) => Ok(name.clone()),
        None => bail!("invalid selection {index}: choose 1..={}", samples.len()),
    }
}
