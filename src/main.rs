use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fpgrowth::{fp_growth_algorithm, write_patterns_to_file, FileSource, MiningConfig};

#[derive(Parser, Debug)]
#[command(name = "fpgrowth", about = "Mine frequent itemsets with FP-Growth")]
struct Args {
    /// Transaction file, one whitespace-separated transaction per line
    #[arg(short, long, default_value = "td.txt")]
    input: PathBuf,

    /// Output file for `items : support` lines
    #[arg(short, long, default_value = "output_fp.txt")]
    output: PathBuf,

    /// Minimum support fraction in (0, 1]; overrides the config file
    #[arg(short = 's', long, env = "FPGROWTH_MIN_SUPPORT")]
    min_support: Option<f64>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FPGROWTH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("fpgrowth=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<MiningConfig> {
    let mut config = match &args.config {
        Some(path) => MiningConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => MiningConfig::default(),
    };
    if let Some(min_support) = args.min_support {
        config.min_support = min_support;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        min_support = config.min_support,
        "starting fp-growth"
    );

    let source = FileSource::new(&args.input);
    let patterns = fp_growth_algorithm(&source, &config)
        .with_context(|| format!("mining {}", args.input.display()))?;

    write_patterns_to_file(&patterns, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(patterns = patterns.len(), "wrote frequent itemsets");
    Ok(())
}
