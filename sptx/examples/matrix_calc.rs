//! SPTX matrix calculator - load two matrices and combine them
//!
//! Loads the two named `.sptx` files, prints both, then runs addition,
//! subtraction and multiplication. Each operation reports its own result
//! or failure; one incompatible shape does not stop the others.

use std::path::PathBuf;

use clap::Parser;
use sptx::DokMatrix;

#[derive(Parser)]
#[command(author, version)]
#[command(about = "SPTX matrix calculator - add, subtract and multiply two sparse matrix files")]
struct Cli {
    /// Path to the left operand (.sptx)
    lhs: PathBuf,

    /// Path to the right operand (.sptx)
    rhs: PathBuf,

    /// Print machine-readable JSON summaries instead of dense grids
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let lhs = DokMatrix::<i64>::load(&cli.lhs)?;
    let rhs = DokMatrix::<i64>::load(&cli.rhs)?;

    print_matrix("left operand", &lhs, cli.json)?;
    print_matrix("right operand", &rhs, cli.json)?;

    match lhs.add(&rhs) {
        Ok(sum) => print_matrix("addition result", &sum, cli.json)?,
        Err(err) => eprintln!("addition failed: {err}"),
    }

    match lhs.sub(&rhs) {
        Ok(diff) => print_matrix("subtraction result", &diff, cli.json)?,
        Err(err) => eprintln!("subtraction failed: {err}"),
    }

    match lhs.mul(&rhs) {
        Ok(product) => print_matrix("multiplication result", &product, cli.json)?,
        Err(err) => eprintln!("multiplication failed: {err}"),
    }

    Ok(())
}

fn print_matrix(
    label: &str,
    matrix: &DokMatrix<i64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&matrix.summary())?);
    } else {
        println!("{label}: {}", matrix.summary());
        print!("{}", matrix.render());
        println!();
    }
    Ok(())
}
