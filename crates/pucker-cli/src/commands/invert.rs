use crate::cli::InvertArgs;
use crate::commands::write_molecule;
use crate::error::{CliError, Result};
use puckerpp::core::models::descriptor::PuckeringDescriptor;
use puckerpp::workflows::{self, Formalism};
use tracing::info;

pub fn run(args: InvertArgs) -> Result<()> {
    let formalism: Formalism = args.formalism.parse().map_err(CliError::Pucker)?;

    let descriptor = match formalism {
        Formalism::CremerPople5 => PuckeringDescriptor::CremerPople5 {
            amplitude: args.amplitude,
            phase: args.phase,
        },
        Formalism::CremerPople6 => PuckeringDescriptor::CremerPople6 {
            amplitude: args.amplitude,
            phase: args.phase,
            theta: args.theta.ok_or_else(|| {
                CliError::Argument("cp6 inversion requires --theta".to_string())
            })?,
        },
        Formalism::AltonaSundaralingam => PuckeringDescriptor::AltonaSundaralingam {
            amplitude: args.amplitude,
            phase: args.phase,
        },
        Formalism::StraussPickett => {
            return Err(CliError::Argument(
                "Strauss-Pickett descriptors define no inverse".to_string(),
            ));
        }
    };

    let (ring, atom_names) = workflows::invert(&descriptor)?;
    let molecule = workflows::to_molecule(ring, atom_names);
    write_molecule(&molecule, &args.output)?;

    info!("Wrote {} ring atoms to '{}'.", molecule.len(), args.output.display());
    println!("Wrote {} ring atoms to '{}'.", molecule.len(), args.output.display());
    Ok(())
}
