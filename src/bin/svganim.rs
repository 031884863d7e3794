use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use svganim::{AnimationConfig, AnimationMode, InputSource, Outcome};

#[derive(Parser, Debug)]
#[command(
    name = "svganim",
    version,
    about = "Merge static SVG frames into one looping animated SVG"
)]
struct Cli {
    /// SVG file the animation is written to.
    output: PathBuf,

    /// One SVG file per static frame, in display order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Basic mode: whole-frame fades. More robust, larger output.
    #[arg(short = 'b', long)]
    basic: bool,

    /// Seconds each frame is displayed statically [default: 1].
    #[arg(short = 's', long = "static", value_name = "STATIC_DURATION")]
    static_duration: Option<f64>,

    /// Seconds spent transitioning between frames [default: 0].
    #[arg(short = 't', long = "transition", value_name = "TRANSITION_DURATION")]
    transition_duration: Option<f64>,

    /// Number of repetitions; 0 loops indefinitely [default: 0].
    #[arg(
        short = 'l',
        long = "loop",
        value_name = "NUMBER_OF_LOOPS",
        allow_negative_numbers = true
    )]
    loop_count: Option<i64>,

    /// Significant digits for animation timings [default: 6].
    #[arg(short = 'p', long)]
    precision: Option<u32>,

    /// JSON animation config; explicit flags override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = build_config(&cli)?;

    let mut inputs = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let f = File::open(path).with_context(|| format!("open input '{}'", path.display()))?;
        inputs.push(InputSource::new(
            path.display().to_string(),
            BufReader::new(f),
        ));
    }

    // Build the whole document before touching the output path.
    let mut out = Vec::new();
    let outcome = svganim::animate_sources(&mut out, inputs, &config)?;
    std::fs::write(&cli.output, &out)
        .with_context(|| format!("write output '{}'", cli.output.display()))?;

    match outcome {
        Outcome::Copied { bytes } => {
            eprintln!("copied {} ({bytes} bytes)", cli.output.display());
        }
        Outcome::Animated(stats) => {
            eprintln!(
                "wrote {} ({} frames, {} nodes, {} placeholders, {} tracks)",
                cli.output.display(),
                cli.inputs.len(),
                stats.merged_nodes,
                stats.placeholders,
                stats.tracks
            );
        }
    }
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<AnimationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            AnimationConfig::from_json(&text)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => AnimationConfig::default(),
    };

    if cli.basic {
        config.mode = AnimationMode::Basic;
    }
    if let Some(v) = cli.static_duration {
        config.static_duration = v;
    }
    if let Some(v) = cli.transition_duration {
        config.transition_duration = v;
    }
    if let Some(v) = cli.loop_count {
        config.loop_count = v;
    }
    if let Some(v) = cli.precision {
        config.precision = v;
    }
    config.validate()?;
    Ok(config)
}
