use puckerpp::core::io::pdb::PdbError;
use puckerpp::core::io::xyz::XyzError;
use puckerpp::engine::error::PuckerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pucker(#[from] PuckerError),

    #[error("PDB file error: {0}")]
    Pdb(#[from] PdbError),

    #[error("XYZ file error: {0}")]
    Xyz(#[from] XyzError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
