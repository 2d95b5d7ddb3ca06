use std::{io, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use molpaths::{loader, molecule::Molecule, AdjacencyList, ShortestPaths};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Text,
    Csv,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a V2000 .mol file
    path: PathBuf,

    /// Start atom (0-based, in file order)
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// End atom; without it, report every atom
    #[arg(short, long)]
    end: Option<usize>,

    /// Print every shortest path to the end atom, not just the first
    #[arg(short, long, requires = "end")]
    all: bool,

    /// Refuse --all when there are more shortest paths than this
    #[arg(long, default_value_t = 1024)]
    max_paths: u64,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn join(path: &[usize]) -> String {
    path.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("-")
}

fn element(mol: &Molecule, v: usize) -> String {
    mol.atom(v).map(|a| a.to_string()).unwrap_or_default()
}

fn report_all(mol: &Molecule, sp: &ShortestPaths, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for v in 0..mol.atom_count() {
                match sp.distance(v) {
                    Some(d) => println!(
                        "{v}\t{}\t{d}\t{}\t{}",
                        element(mol, v),
                        sp.n_paths_to(v),
                        join(&sp.path_to(v))
                    ),
                    None => println!("{v}\t{}\t-\t0\t", element(mol, v)),
                }
            }
        }
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            wtr.write_record(["atom", "element", "distance", "paths", "path"])?;
            for v in 0..mol.atom_count() {
                wtr.write_record([
                    v.to_string(),
                    element(mol, v),
                    sp.distance(v).map(|d| d.to_string()).unwrap_or_default(),
                    sp.n_paths_to(v).to_string(),
                    join(&sp.path_to(v)),
                ])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

fn report_one(sp: &ShortestPaths, end: usize, all: bool, max_paths: u64, format: Format) -> Result<()> {
    let n_paths = sp.n_paths_to(end);
    let paths = if all {
        if n_paths > max_paths {
            bail!("{n_paths} shortest paths to atom {end} exceed --max-paths {max_paths}");
        }
        sp.paths_to(end)
    } else {
        vec![sp.path_to(end)]
    };

    match format {
        Format::Text => {
            match sp.distance(end) {
                Some(d) => println!("distance: {d}"),
                None => println!("distance: unreachable"),
            }
            println!("paths: {n_paths}");
            for path in paths.iter().filter(|p| !p.is_empty()) {
                println!("{}", join(path));
            }
        }
        Format::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            wtr.write_record(["distance", "paths", "path"])?;
            let distance = sp.distance(end).map(|d| d.to_string()).unwrap_or_default();
            for path in paths.iter().filter(|p| !p.is_empty()) {
                wtr.write_record([distance.clone(), n_paths.to_string(), join(path)])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let molecule = loader::parse(&cli.path).with_context(|| format!("failed to load {:?}", cli.path))?;
    if molecule.is_malformed() {
        warn!(path = ?cli.path, "molecule has self-loops or doubled bonds");
    }

    let adj = AdjacencyList::from_molecule(Some(&molecule))?;
    let sp = ShortestPaths::new(&adj, cli.start)
        .with_context(|| format!("cannot search from atom {}", cli.start))?;

    match cli.end {
        Some(end) => report_one(&sp, end, cli.all, cli.max_paths, cli.format),
        None => report_all(&molecule, &sp, cli.format),
    }
}
