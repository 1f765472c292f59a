//! context-sim CLI: context-loading strategy sweeps from the command line.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use context_simulator_core_rs::{
    analyze_crossover, latency_parity, render_summary, CostProjection, CostProjector,
    CrossoverAnalysis, ModelParams, ResultTable, Strategy, SweepEngine, DEFAULT_WEIGHTING,
};

#[derive(Parser)]
#[command(name = "context-sim")]
#[command(about = "Token, latency and accuracy trade-offs for agent context-loading strategies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the checkpoint sweep and print the comparison report
    Sweep {
        /// Parameter overrides (JSON file, missing keys keep defaults)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Tool-count checkpoints to sweep (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        checkpoints: Option<Vec<u32>>,

        /// Weight on latency overhead in the net-benefit score
        #[arg(short, long)]
        weighting: Option<f64>,

        /// Write the full report (params, table, analysis) as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Print the static-vs-dynamic net-benefit curve
    Crossover {
        /// Parameter overrides (JSON file, missing keys keep defaults)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Tool-count checkpoints to sweep (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        checkpoints: Option<Vec<u32>>,

        /// Weight on latency overhead in the net-benefit score
        #[arg(short, long)]
        weighting: Option<f64>,
    },

    /// Project monthly token volumes and dollar costs
    Costs {
        /// Parameter overrides (JSON file, missing keys keep defaults)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Tool-count checkpoints to sweep (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        checkpoints: Option<Vec<u32>>,

        /// Queries per month
        #[arg(long)]
        volume: Option<u64>,

        /// USD per million input tokens
        #[arg(long)]
        price: Option<f64>,

        /// Only project one strategy (full-context, static-tool-set or
        /// dynamic-toolset)
        #[arg(long)]
        strategy: Option<String>,
    },
}

/// Everything a sweep run produced, for downstream tooling
#[derive(Serialize)]
struct ReportEnvelope<'a> {
    run_id: String,
    fingerprint: String,
    params: &'a ModelParams,
    table: &'a ResultTable,
    crossover: &'a CrossoverAnalysis,
    latency_parity: Option<u32>,
    projections: Vec<CostProjection>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sweep {
            params,
            checkpoints,
            weighting,
            json,
        } => cmd_sweep(params.as_deref(), checkpoints, weighting, json.as_deref()),
        Commands::Crossover {
            params,
            checkpoints,
            weighting,
        } => cmd_crossover(params.as_deref(), checkpoints, weighting),
        Commands::Costs {
            params,
            checkpoints,
            volume,
            price,
            strategy,
        } => cmd_costs(params.as_deref(), checkpoints, volume, price, strategy.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_params(path: Option<&Path>) -> Result<ModelParams, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(ModelParams::default()),
    }
}

fn build_engine(
    params: ModelParams,
    checkpoints: Option<Vec<u32>>,
) -> Result<SweepEngine, Box<dyn std::error::Error>> {
    let engine = match checkpoints {
        Some(checkpoints) => SweepEngine::new(params, checkpoints)?,
        None => SweepEngine::with_default_checkpoints(params)?,
    };
    Ok(engine)
}

fn cmd_sweep(
    params: Option<&Path>,
    checkpoints: Option<Vec<u32>>,
    weighting: Option<f64>,
    json: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = build_engine(load_params(params)?, checkpoints)?;
    let table = engine.run();
    let analysis = analyze_crossover(&table, weighting.unwrap_or(DEFAULT_WEIGHTING))?;

    print!("{}", render_summary(&engine, &table, &analysis)?);

    if let Some(path) = json {
        let projector = CostProjector::from_params(engine.params())?;
        let envelope = ReportEnvelope {
            run_id: Uuid::new_v4().to_string(),
            fingerprint: engine.params().fingerprint()?,
            params: engine.params(),
            table: &table,
            crossover: &analysis,
            latency_parity: latency_parity(&table)?,
            projections: projector.project_table(&table),
        };
        let rendered = serde_json::to_string_pretty(&envelope)?;
        fs::write(path, format!("{rendered}\n"))?;
        println!();
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

fn cmd_crossover(
    params: Option<&Path>,
    checkpoints: Option<Vec<u32>>,
    weighting: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = build_engine(load_params(params)?, checkpoints)?;
    let weighting = weighting.unwrap_or(DEFAULT_WEIGHTING);
    let table = engine.run();
    let analysis = analyze_crossover(&table, weighting)?;

    println!("Net benefit vs Static-Tool-Set (weighting {weighting:.2})");
    println!("================================================");
    println!(
        "{:>7} {:>15} {:>18} {:>13}",
        "tools", "token savings", "latency overhead", "net benefit"
    );
    for point in &analysis.points {
        println!(
            "{:>7} {:>15} {:>18} {:>13}",
            point.tool_count,
            format!("{:+.3}", point.token_savings),
            format!("{:+.3}", point.latency_overhead),
            format!("{:+.3}", point.net_benefit)
        );
    }
    println!();
    match analysis.crossover {
        Some(tools) => println!("Dynamic-Toolset pays off from {tools} tools"),
        None => println!("Dynamic-Toolset does not pay off in the swept range"),
    }

    Ok(())
}

fn cmd_costs(
    params: Option<&Path>,
    checkpoints: Option<Vec<u32>>,
    volume: Option<u64>,
    price: Option<f64>,
    strategy: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let only = strategy
        .map(|name| Strategy::from_name(name).ok_or_else(|| format!("unknown strategy: {name}")))
        .transpose()?;
    let engine = build_engine(load_params(params)?, checkpoints)?;
    let volume = volume.unwrap_or(engine.params().monthly_query_volume);
    let price = price.unwrap_or(engine.params().price_per_million_tokens);
    let projector = CostProjector::new(volume, price)?;
    let table = engine.run();

    println!("Monthly cost @ {volume} queries, ${price:.2}/M input tokens");
    println!("====================================================");
    for projection in projector.project_table(&table) {
        if only.is_some_and(|s| s != projection.strategy) {
            continue;
        }
        println!(
            "  {:<16} {:>4} tools  {:>8} tokens/query  ${:>12.2}",
            projection.strategy.label(),
            projection.tool_count,
            projection.tokens_per_query,
            projection.monthly_cost_usd
        );
    }

    Ok(())
}
