use crate::cli::{SampleArgs, SampleDomain};
use crate::config::SamplingConfig;
use crate::error::{CliError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use puckerpp::workflows::{sample_fivering, sample_peptide, sample_sixring};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: SampleArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SamplingConfig::load(path)?,
        None => SamplingConfig::default(),
    };

    let (columns, header, default_name): (Vec<Vec<f64>>, &[&str], &str) = match args.domain {
        SampleDomain::Fivering { interval } => {
            let interval = resolve(interval, config.fivering.interval, "fivering interval")?;
            let grid = sample_fivering(interval)?;
            info!(points = grid.len(), "Generated fivering grid.");
            (vec![grid.nu1, grid.nu3], &["nu1", "nu3"], "fivering.csv")
        }
        SampleDomain::Peptide { interval } => {
            let interval = resolve(interval, config.peptide.interval, "peptide interval")?;
            let grid = sample_peptide(interval)?;
            info!(points = grid.len(), "Generated peptide grid.");
            (vec![grid.phi, grid.psi], &["phi", "psi"], "peptide.csv")
        }
        SampleDomain::Sixring { amount } => {
            let amount = resolve(amount, config.sixring.amount, "sixring amount")?;
            let grid = sample_sixring(amount)?;
            info!(
                requested = grid.requested,
                achieved = grid.achieved,
                "Generated sixring grid."
            );
            if grid.achieved != grid.requested {
                println!(
                    "Note: equal-area banding placed {} points (requested {}).",
                    grid.achieved, grid.requested
                );
            }
            (
                vec![grid.alpha1, grid.alpha2, grid.alpha3],
                &["alpha1", "alpha2", "alpha3"],
                "sixring.csv",
            )
        }
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_name));
    let points = write_grid(&columns, header, &output)?;
    println!("Wrote {points} grid points to '{}'.", output.display());
    Ok(())
}

fn resolve(flag: Option<usize>, config: Option<usize>, what: &str) -> Result<usize> {
    flag.or(config).ok_or_else(|| {
        CliError::Argument(format!(
            "{what} must be given on the command line or in the config file"
        ))
    })
}

fn write_grid(columns: &[Vec<f64>], header: &[&str], path: &Path) -> Result<usize> {
    let rows = columns.first().map_or(0, Vec::len);

    let file = std::fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(std::io::BufWriter::new(file));
    writer.write_record(header)?;

    let bar = ProgressBar::new(rows as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} rows").expect("static template is valid"),
    );
    for i in 0..rows {
        let record: Vec<String> = columns.iter().map(|col| format!("{:.6}", col[i])).collect();
        writer.write_record(&record)?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    writer
        .into_inner()
        .map_err(|e| CliError::Other(anyhow::anyhow!("failed to flush CSV writer: {e}")))?
        .flush()?;
    Ok(rows)
}
