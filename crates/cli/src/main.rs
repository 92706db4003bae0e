use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tesseract_net::api::{
    draw_polyomino, validate_with, FaceAdjacencyModel, FaceLabel, Grid, PolyominoCfg,
    PolyominoReplay, Report, SearchCfg,
};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;

use provenance::{write_sidecar, Provenance};

/// Exit code for a well-formed grid that is not a tesseract net.
const EXIT_NOT_A_NET: u8 = 2;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Check grids of squares as tesseract nets")]
struct Cmd {
    /// Raise log level to debug (overrides RUST_LOG)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate a grid file (`-` for stdin) and print the JSON report
    Validate {
        #[arg(long)]
        input: String,
        /// Write the report here and a provenance sidecar next to it
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
        /// Label for the first searched square
        #[arg(long)]
        anchor: Option<FaceLabel>,
        /// Reject grids with a cycle instead of trying single-edge removal
        #[arg(long)]
        no_edge_removal: bool,
    },
    /// Print the 24 faces and their edge neighbours as JSON
    Faces,
    /// Print a random polyomino in grid text format
    Random {
        #[arg(long, default_value_t = 24)]
        cells: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Only grow cells touching exactly one existing cell
        #[arg(long)]
        tree: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);
    match cmd.action {
        Action::Validate {
            input,
            out,
            pretty,
            anchor,
            no_edge_removal,
        } => {
            let mut cfg = SearchCfg {
                allow_edge_removal: !no_edge_removal,
                ..SearchCfg::default()
            };
            if let Some(label) = anchor {
                cfg.seed_label = label;
            }
            let report = validate(&input, out.as_deref(), pretty, cfg)?;
            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_NOT_A_NET)
            })
        }
        Action::Faces => {
            println!("{}", serde_json::to_string_pretty(&face_table())?);
            Ok(ExitCode::SUCCESS)
        }
        Action::Random {
            cells,
            seed,
            index,
            tree,
        } => {
            print!("{}", random(cells, seed, index, tree)?);
            Ok(ExitCode::SUCCESS)
        }
        Action::Report => {
            let prov = Provenance::new("report", json!({}));
            println!("{}", serde_json::to_string_pretty(&prov)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading grid from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading grid from {input}"))
}

fn validate(input: &str, out: Option<&Path>, pretty: bool, cfg: SearchCfg) -> Result<Report> {
    let text = read_input(input)?;
    let grid: Grid = text
        .parse()
        .with_context(|| format!("parsing grid from {input}"))?;
    tracing::info!(
        input,
        rows = grid.rows(),
        cols = grid.cols(),
        squares = grid.filled_count(),
        "validate"
    );
    let report = validate_with(&grid, cfg).report();
    let body = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, body.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            let params = json!({
                "input": input,
                "anchor": cfg.seed_label,
                "allow_edge_removal": cfg.allow_edge_removal,
                "valid": report.valid,
            });
            write_sidecar(path, Provenance::new("validate", params))?;
        }
        None => println!("{body}"),
    }
    Ok(report)
}

#[derive(Serialize)]
struct FaceEntry {
    id: u8,
    label: FaceLabel,
    edge_neighbors: Vec<FaceLabel>,
}

fn face_table() -> Vec<FaceEntry> {
    let model = FaceAdjacencyModel::new();
    model
        .faces()
        .iter()
        .map(|&label| FaceEntry {
            id: label.face_id().0,
            label,
            edge_neighbors: model
                .edge_neighbors(label.face_id())
                .iter()
                .map(|id| model.label(id))
                .collect(),
        })
        .collect()
}

fn random(cells: usize, seed: u64, index: u64, tree_only: bool) -> Result<String> {
    let cfg = PolyominoCfg {
        cells,
        tree_only,
        ..PolyominoCfg::default()
    };
    let Some(grid) = draw_polyomino(cfg, PolyominoReplay { seed, index }) else {
        bail!("could not grow a {cells}-cell tree polyomino (seed {seed}, index {index})");
    };
    Ok(grid.to_string())
}
