//! Invert dense matrices with LU reuse and Gauss-Jordan elimination
//!
//! Usage:
//!     cargo run --bin dense-inverse --release
//!     cargo run --bin dense-inverse -- --matrix a.json --rhs 1,0,0 --method lu
//!
//! The matrix file holds a JSON array of rows, e.g. `[[4, 7], [2, 6]]`.
//! Without `--matrix` the two built-in demo matrices are used.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use math_audio_dense::ops::{from_rows, identity_defect, residual_norm};
use math_audio_dense::{
    PivotConfig, gauss_jordan_inverse_with_config, lu_inverse_with_config, lu_solve_with_config,
};
use ndarray::{Array1, Array2};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Method {
    /// Factor once, solve per column
    Lu,
    /// Augmented-matrix elimination
    GaussJordan,
    /// Run both and compare
    Both,
}

#[derive(Parser, Debug)]
#[command(
    name = "dense-inverse",
    about = "Invert dense matrices via LU factor reuse or Gauss-Jordan elimination"
)]
struct Cli {
    /// JSON file with the matrix rows (defaults to the demo matrices)
    #[arg(long)]
    matrix: Option<PathBuf>,

    /// Comma-separated right-hand side to solve for
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    rhs: Option<Vec<f64>>,

    /// Inversion method
    #[arg(long, value_enum, default_value_t = Method::Both)]
    method: Method,

    /// Pivots with magnitude at or below this value are treated as zero
    #[arg(long, default_value_t = 0.0)]
    pivot_tolerance: f64,

    /// Log every elimination step (shown with RUST_LOG=info)
    #[arg(long)]
    verbose: bool,
}

fn demo_matrices() -> Vec<(String, Vec<Vec<f64>>)> {
    vec![
        ("A".to_string(), vec![vec![4.0, 7.0], vec![2.0, 6.0]]),
        (
            "B".to_string(),
            vec![
                vec![1.0, 2.0, 3.0],
                vec![0.0, 1.0, 4.0],
                vec![5.0, 6.0, 0.0],
            ],
        ),
    ]
}

fn load_matrix(path: &Path) -> anyhow::Result<Vec<Vec<f64>>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {} as a JSON array of rows", path.display()))?;
    Ok(rows)
}

fn print_matrix(m: &Array2<f64>) {
    for row in m.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>12.6}", v)).collect();
        println!("  [{}]", cells.join(", "));
    }
}

fn run(name: &str, a: &Array2<f64>, cli: &Cli, config: &PivotConfig<f64>) -> anyhow::Result<()> {
    println!("\nMatrix {} ({}x{}):", name, a.nrows(), a.ncols());
    print_matrix(a);

    if matches!(cli.method, Method::Lu | Method::Both) {
        let result = lu_inverse_with_config(a, config)?;
        println!("\n{} inverse using LU factor reuse:", name);
        print_matrix(&result.inverse);
        println!("Total multiplications for {}: {}", name, result.multiplications);
        println!(
            "max |A*A_inv - I| = {:.3e}",
            identity_defect(a, &result.inverse)?
        );
    }

    if matches!(cli.method, Method::GaussJordan | Method::Both) {
        let inverse = gauss_jordan_inverse_with_config(a, config)?;
        println!("\n{} inverse using Gauss-Jordan:", name);
        print_matrix(&inverse);
        println!("max |A*A_inv - I| = {:.3e}", identity_defect(a, &inverse)?);
    }

    if let Some(rhs) = &cli.rhs {
        if rhs.len() != a.nrows() {
            bail!(
                "right-hand side has {} entries, matrix {} has {} rows",
                rhs.len(),
                name,
                a.nrows()
            );
        }
        let b = Array1::from_vec(rhs.clone());
        let solution = lu_solve_with_config(a, &b, config)?;
        println!("\nSolution of {} x = b: {:?}", name, solution.x.to_vec());
        println!("Multiplications: {}", solution.multiplications);
        println!("||A x - b|| = {:.3e}", residual_norm(a, &solution.x, &b)?);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PivotConfig::with_tolerance(cli.pivot_tolerance).verbose(cli.verbose);

    let inputs = match &cli.matrix {
        Some(path) => vec![(path.display().to_string(), load_matrix(path)?)],
        None => demo_matrices(),
    };

    let total = inputs.len();
    let mut failed = 0;
    for (name, rows) in inputs {
        let result = from_rows(&rows)
            .with_context(|| format!("matrix {}", name))
            .and_then(|a| run(&name, &a, &cli, &config));
        if let Err(e) = result {
            eprintln!("Error for matrix {}: {:#}", name, e);
            failed += 1;
        }
    }

    summarize(failed, total)
}

/// Turn the per-matrix outcome into the process result
fn summarize(failed: usize, total: usize) -> anyhow::Result<()> {
    if failed > 0 {
        bail!("{} of {} matrices failed", failed, total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_all_ok() {
        assert!(summarize(0, 2).is_ok());
    }

    #[test]
    fn test_summarize_reports_failures() {
        let err = summarize(1, 2).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 matrices failed");
    }

    #[test]
    fn test_singular_matrix_is_an_error() {
        let cli = Cli::parse_from(["dense-inverse"]);
        let a = from_rows(&[vec![1.0, 2.0], vec![0.0, 0.0]]).unwrap();
        assert!(run("S", &a, &cli, &PivotConfig::default()).is_err());
    }
}
