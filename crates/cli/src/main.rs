use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    shelfsmart_observability::init();

    let config = shelfsmart_cli::config::from_env()?;

    let report = match std::env::args().nth(1).filter(|a| a != "-") {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
            shelfsmart_cli::run(BufReader::new(file), &config)?
        }
        None => shelfsmart_cli::run(io::stdin().lock(), &config)?,
    };

    let summary = report.summary();
    tracing::info!(
        run_id = %report.run_id,
        urgent = summary.urgent,
        medium = summary.medium,
        critical_items = report.status_counts.critical,
        low_items = report.status_counts.low,
        total_suggested_units = summary.total_suggested_units,
        "replenishment report ready"
    );

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report).context("failed to write report")?;
    writeln!(out)?;
    Ok(())
}
