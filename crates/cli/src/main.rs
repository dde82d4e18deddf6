use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use linref::ingest::read_points_csv;
use linref::sample::{random_walk, ReplayToken, SampleCfg};
use linref::{locate, Point, Polyline};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;
mod repl;

use output::{format_text, Row};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "linref")]
#[command(about = "Offset and station of points along a polyline")]
struct Cmd {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Locate a single point against a polyline CSV
    Locate {
        #[arg(long)]
        polyline: PathBuf,
        /// Query point as x,y
        #[arg(long, allow_hyphen_values = true)]
        point: Point,
        /// Print a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read x,y queries from stdin until a blank line, q or end of input
    Repl {
        #[arg(long)]
        polyline: PathBuf,
    },
    /// Locate every point of a query CSV and write JSON results plus provenance
    Batch {
        #[arg(long)]
        polyline: PathBuf,
        #[arg(long)]
        queries: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a seeded random-walk polyline CSV
    Generate {
        #[arg(long, default_value_t = 64)]
        points: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level_for(cmd.verbose))
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Locate {
            polyline,
            point,
            json,
        } => locate_one(&polyline, point, json),
        Action::Repl { polyline } => {
            let pl = load_polyline(&polyline)?;
            let answered = repl::run(&pl, std::io::stdin().lock(), std::io::stdout().lock())?;
            tracing::info!(answered, "repl_done");
            Ok(())
        }
        Action::Batch {
            polyline,
            queries,
            out,
        } => batch(&polyline, &queries, &out).map(|_| ()),
        Action::Generate { points, seed, out } => generate(points, seed, &out),
    }
}

/// Read a point CSV, logging every skipped line.
fn load_points(path: &Path) -> Result<Vec<Point>> {
    let parsed =
        read_points_csv(path).with_context(|| format!("reading points from {}", path.display()))?;
    for d in &parsed.diagnostics {
        tracing::warn!(file = %path.display(), line = d.line, "{d}");
    }
    tracing::info!(
        file = %path.display(),
        points = parsed.points.len(),
        skipped = parsed.diagnostics.len(),
        "points_loaded"
    );
    Ok(parsed.points)
}

fn load_polyline(path: &Path) -> Result<Polyline> {
    let points = load_points(path)?;
    if points.is_empty() {
        bail!("can't find any point in {}", path.display());
    }
    let pl = Polyline::new(&points);
    tracing::info!(
        segments = pl.segment_count(),
        length = pl.total_length(),
        "polyline_built"
    );
    Ok(pl)
}

fn locate_one(polyline: &Path, point: Point, json: bool) -> Result<()> {
    let pl = load_polyline(polyline)?;
    let location = locate(&pl, point);
    if json {
        println!("{}", serde_json::to_string_pretty(&Row::new(point, location))?);
    } else {
        println!("{}", format_text(&location.into()));
    }
    Ok(())
}

/// Returns the provenance sidecar path.
fn batch(polyline: &Path, queries: &Path, out: &Path) -> Result<PathBuf> {
    let pl = load_polyline(polyline)?;
    let points = load_points(queries)?;
    let rows: Vec<Row> = points.iter().map(|&q| Row::new(q, locate(&pl, q))).collect();
    let valid = rows.iter().filter(|r| r.is_valid).count();
    tracing::info!(queries = rows.len(), valid, out = %out.display(), "batch");

    create_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(serde_json::json!({
        "command": "batch",
        "segments": pl.segment_count(),
        "queries": rows.len(),
        "valid": valid
    }))
    .with_input(polyline)
    .with_input(queries);
    write_sidecar(out, payload)
}

fn generate(points: usize, seed: u64, out: &Path) -> Result<()> {
    let cfg = SampleCfg {
        vertex_count: points,
        ..SampleCfg::default()
    };
    let walk = random_walk(cfg, ReplayToken { seed, index: 0 });
    let mut csv = String::with_capacity(walk.len() * 12);
    for p in &walk {
        writeln!(csv, "{},{}", p.x, p.y)?;
    }
    tracing::info!(points, seed, out = %out.display(), "generate");

    create_parent(out)?;
    fs::write(out, csv).with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(serde_json::json!({
        "command": "generate",
        "points": points,
        "seed": seed,
        "step_min": cfg.step_min,
        "step_max": cfg.step_max,
        "max_turn": cfg.max_turn
    }));
    write_sidecar(out, payload)?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn locate_accepts_negative_point() {
        let cmd = Cmd::try_parse_from([
            "linref", "locate", "--polyline", "p.csv", "--point", "-3,4",
        ])
        .unwrap();
        match cmd.action {
            Action::Locate { point, json, .. } => {
                assert_eq!(point, Point::new(-3, 4));
                assert!(!json);
            }
            _ => panic!("expected locate"),
        }
    }

    #[test]
    fn rejects_malformed_point() {
        assert!(Cmd::try_parse_from([
            "linref", "locate", "--polyline", "p.csv", "--point", "3;4",
        ])
        .is_err());
    }

    #[test]
    fn batch_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let polyline = dir.path().join("polyline.csv");
        let queries = dir.path().join("queries.csv");
        let out = dir.path().join("out").join("results.json");
        fs::write(&polyline, "0,0\n5,0\n5,5\n").unwrap();
        fs::write(&queries, "7,3\nnot,a point\n15,15\n").unwrap();

        let sidecar = batch(&polyline, &queries, &out).unwrap();
        let rows: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["is_valid"], true);
        assert_eq!(rows[0]["station"], 8.0);
        assert_eq!(rows[0]["segment"], 1);
        assert_eq!(rows[1]["is_valid"], false);

        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["valid"], 1);
        assert_eq!(prov["inputs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_polyline_file_is_an_error() {
        let dir = tempdir().unwrap();
        let polyline = dir.path().join("empty.csv");
        fs::write(&polyline, "\nx,y\n").unwrap();
        let err = load_polyline(&polyline).unwrap_err();
        assert!(err.to_string().contains("can't find any point"));
    }

    #[test]
    fn generate_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        generate(32, 9, &a).unwrap();
        generate(32, 9, &b).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
        assert!(dir.path().join("a.provenance.json").exists());
        let pts = load_points(&a).unwrap();
        assert_eq!(pts.len(), 32);
    }
}
