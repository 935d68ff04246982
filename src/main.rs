//! Compute both explorers for one set of parameters and print every
//! derived value as YAML documents.
//!
//! Usage: `numeric_explorers [CONFIG.yaml] [OUTPUT.yaml]`
//!
//! With no config the slider defaults are used; with no output path the
//! documents go to stdout. Set `RUST_LOG=debug` to trace the computations.
use anyhow::Context;
use log::{error, info};
use numeric_explorers::config::ExplorerConfig;
use numeric_explorers::explorer::{derivative_snapshot, regression_snapshot};
use numeric_explorers::export::{write_yaml_documents, ToYaml};
use std::env;
use std::fs::File;
use std::io;
use std::process;

fn run(args: &[String]) -> anyhow::Result<()> {
    let config = match args.get(1) {
        Some(path) => ExplorerConfig::load(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => ExplorerConfig::default(),
    };

    let regression =
        regression_snapshot(&config.regression).context("computing regression explorer")?;
    info!(
        "regression: w={} b={} cost={:.2} ({})",
        regression.params.w,
        regression.params.b,
        regression.cost,
        regression.fit.label()
    );

    let derivative =
        derivative_snapshot(&config.derivative).context("computing derivative explorer")?;
    info!(
        "derivative: {} at x={} h={}: secant={:.4} exact={:.4} ({})",
        derivative.name,
        derivative.x,
        derivative.h,
        derivative.approximate,
        derivative.exact,
        derivative.quality.label()
    );

    let docs = vec![config.to_yaml(), regression.to_yaml(), derivative.to_yaml()];
    match args.get(2) {
        Some(path) => {
            let mut file =
                File::create(path).with_context(|| format!("creating output {}", path))?;
            write_yaml_documents(&docs, &mut file)?;
            info!("wrote {} documents to {}", docs.len(), path);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_yaml_documents(&docs, &mut out)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [CONFIG.yaml] [OUTPUT.yaml]", args[0]);
        process::exit(1);
    }
    if let Err(e) = run(&args) {
        error!("{:#}", e);
        process::exit(1);
    }
}
