use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, William A. Goddard III",
    version,
    about = "Pucker++ CLI - Compute, invert, and sample ring/backbone puckering coordinates (Cremer-Pople, Altona-Sundaralingam, Strauss-Pickett).",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel grid generation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the puckering descriptor of a ring in a molecular structure file.
    Analyze(AnalyzeArgs),
    /// Invert a puckering descriptor into a representative ring geometry.
    Invert(InvertArgs),
    /// Generate a descriptor-space sampling grid for restrained conformational searches.
    Sample(SampleArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the input structure file (.pdb or .xyz).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Descriptor family: cp5, cp6, as, or sp.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub formalism: String,

    /// Ring atom names in connectivity order (e.g. -a "O4'" -a "C1'" ...).
    #[arg(short = 'a', long = "atom", value_name = "NAME", conflicts_with = "indices")]
    pub atoms: Vec<String>,

    /// Ring atom indices (0-based) in connectivity order.
    #[arg(short = 'n', long = "index", value_name = "INT")]
    pub indices: Vec<usize>,
}

/// Arguments for the `invert` subcommand.
#[derive(Args, Debug)]
pub struct InvertArgs {
    /// Descriptor family to invert: cp5, cp6, or as.
    #[arg(short, long, required = true, value_name = "NAME")]
    pub formalism: String,

    /// Puckering amplitude (Angstroms for cp5/cp6, degrees for as).
    #[arg(short = 'Q', long, required = true, value_name = "FLOAT")]
    pub amplitude: f64,

    /// Phase angle in degrees.
    #[arg(short = 'p', long, required = true, value_name = "FLOAT")]
    pub phase: f64,

    /// Polar angle theta in degrees (cp6 only).
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub theta: Option<f64>,

    /// Path for the output structure file (.pdb or .xyz).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(subcommand)]
    pub domain: SampleDomain,

    /// Path to a TOML file with sampling defaults; flags override it.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the output CSV grid.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Descriptor-space domains available for grid generation.
#[derive(Subcommand, Debug)]
pub enum SampleDomain {
    /// Uniform nu1/nu3 grid over [-60, 60] degrees for five-membered rings.
    Fivering {
        /// Values per axis (grid holds interval^2 points).
        #[arg(short, long, value_name = "INT")]
        interval: Option<usize>,
    },
    /// Uniform phi/psi grid over [0, 360) degrees for peptide backbones.
    Peptide {
        /// Values per axis (grid holds interval^2 points).
        #[arg(short, long, value_name = "INT")]
        interval: Option<usize>,
    },
    /// Equal-area distribution over the six-ring puckering sphere.
    Sixring {
        /// Approximate number of points to place on the sphere.
        #[arg(short, long, value_name = "INT")]
        amount: Option<usize>,
    },
}
