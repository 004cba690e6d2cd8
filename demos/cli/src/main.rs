use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use deterioration_core::{score_trajectory_detailed, PatientTimeline, TrajectoryReport, WeightTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "deterioration-cli",
    about = "Score a patient timeline JSON file with the deterioration index."
)]
struct Args {
    /// Path to the patient timeline JSON file.
    #[arg(short, long)]
    input: PathBuf,
    /// Optional weight table JSON; the reference weights are used otherwise.
    #[arg(short, long)]
    weights: Option<PathBuf>,
    /// Print the full report as JSON instead of a table.
    #[arg(long)]
    json: bool,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read timeline file {:?}", args.input))?;
    let timeline: PatientTimeline = serde_json::from_str(&data)
        .with_context(|| format!("Invalid timeline JSON in {:?}", args.input))?;

    let weights = match &args.weights {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read weight file {path:?}"))?;
            WeightTable::from_json_str(&raw)
                .with_context(|| format!("Invalid weight table in {path:?}"))?
        }
        None => WeightTable::reference(),
    };
    info!(
        steps = timeline.len(),
        features = weights.len(),
        "loaded timeline"
    );

    let report = score_trajectory_detailed(&timeline, &weights)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid log level/filter '{log_level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!("Cannot install log subscriber: {err}"))
}

fn print_table(report: &TrajectoryReport) {
    println!(
        "Patient: {}",
        report.patient_id.as_deref().unwrap_or("(unknown)")
    );

    for step in &report.steps {
        let at = step
            .recorded_at
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        let moves: Vec<String> = step
            .contributions
            .iter()
            .filter(|c| c.transition != 0)
            .map(|c| {
                format!(
                    "{} {} {} {} ({:+})",
                    c.feature.label(),
                    c.value,
                    c.feature.unit(),
                    c.severity,
                    c.transition
                )
            })
            .collect();
        println!(
            "{:>4}  {:<25}  {:>7.3}  {}",
            step.index,
            at,
            step.score,
            moves.join(", ")
        );
    }

    if let Some(peak) = report.peak() {
        println!("Peak score {:.3} at step {}", peak.score, peak.index);
    }
}
