use std::path::{Path, PathBuf};
use std::sync::Arc;

use af_analysis::{CostStatus, Finding, ValidationReport};
use af_app::{AppResult, DesignSession, SessionOptions, design_service};
use af_catalog::Catalog;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "af-cli")]
#[command(about = "ArchFlow CLI - system architecture design checker", long_about = None)]
struct Cli {
    /// Component catalog YAML file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog component types
    Catalog {
        /// Only show types whose id or name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Validate a design file and print findings
    Validate {
        /// Path to the design JSON or YAML file
        design_path: PathBuf,
    },
    /// Print metrics for a design file
    Metrics {
        /// Path to the design JSON or YAML file
        design_path: PathBuf,
    },
    /// Re-export a design with a fresh validation snapshot
    Normalize {
        /// Input design file
        input: PathBuf,
        /// Output design file (format chosen by extension)
        output: PathBuf,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => design_service::load_catalog(path)?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Commands::Catalog { search } => cmd_catalog(&catalog, search.as_deref()),
        Commands::Validate { design_path } => cmd_validate(catalog, &design_path),
        Commands::Metrics { design_path } => cmd_metrics(catalog, &design_path),
        Commands::Normalize { input, output } => cmd_normalize(catalog, &input, &output),
    }
}

fn open_session(catalog: Catalog, design_path: &Path) -> AppResult<DesignSession> {
    let options = SessionOptions {
        real_time_validation: false,
        ..SessionOptions::default()
    };
    let mut session = DesignSession::new(Arc::new(catalog), options)?;
    let document = design_service::load_design(design_path)?;
    session.import(&document)?;
    Ok(session)
}

fn cmd_catalog(catalog: &Catalog, search: Option<&str>) -> AppResult<()> {
    let entries: Vec<_> = match search {
        Some(query) => catalog.search(query).collect(),
        None => catalog.iter().collect(),
    };
    if entries.is_empty() {
        println!("No matching component types");
        return Ok(());
    }

    for entry in entries {
        println!(
            "  {:<16} {:<16} ${:>7.2}/mo  in:{} out:{}",
            entry.type_id,
            entry.display_name,
            entry.monthly_cost,
            entry.input_ports(),
            entry.output_ports()
        );
    }
    Ok(())
}

fn print_findings(label: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    println!("{label}:");
    for f in findings {
        match &f.component_id {
            Some(id) => println!("  - [{id}] {}", f.message),
            None => println!("  - {}", f.message),
        }
    }
}

fn print_report(report: &ValidationReport) {
    print_findings("Issues", &report.issues);
    print_findings("Warnings", &report.warnings);
    print_findings("Suggestions", &report.suggestions);
    println!("Score: {}/100", report.score);
}

fn cmd_validate(catalog: Catalog, design_path: &Path) -> AppResult<()> {
    println!("Validating design: {}", design_path.display());
    let session = open_session(catalog, design_path)?;
    let report = session.validate();

    if report.is_valid {
        println!("✓ Design is valid");
    } else {
        println!("✗ Design has {} issue(s)", report.issues.len());
    }
    print_report(&report);
    Ok(())
}

fn cmd_metrics(catalog: Catalog, design_path: &Path) -> AppResult<()> {
    let session = open_session(catalog, design_path)?;
    let summary = session.summary();
    let m = &summary.metrics;

    println!("Components:  {}", summary.component_count);
    println!("Connections: {}", summary.connection_count);
    let cost_note = match m.cost_status() {
        CostStatus::High => " (high)",
        CostStatus::Reasonable => "",
    };
    println!("Monthly cost:   ${:.2}{cost_note}", m.monthly_cost);
    println!("Latency:        {}ms", m.estimated_latency_ms);
    println!("Throughput:     {}", m.throughput_bottleneck);
    println!(
        "Scalability:    {}/100 ({:?})",
        m.scalability_score,
        m.scalability_status()
    );
    println!("Reliability:    {}/100", m.reliability_score);
    Ok(())
}

fn cmd_normalize(catalog: Catalog, input: &Path, output: &Path) -> AppResult<()> {
    let session = open_session(catalog, input)?;
    let document = session.export()?;
    design_service::save_design(output, &document)?;
    println!(
        "✓ Wrote {} ({} components, {} connections)",
        output.display(),
        document.components.len(),
        document.connections.len()
    );
    Ok(())
}
