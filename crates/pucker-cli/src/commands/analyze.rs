use crate::cli::AnalyzeArgs;
use crate::commands::read_molecule;
use crate::error::{CliError, Result};
use puckerpp::core::models::descriptor::PuckeringDescriptor;
use puckerpp::engine::conformer;
use puckerpp::workflows::{self, Formalism, RingSelection};
use tracing::info;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let formalism: Formalism = args.formalism.parse().map_err(CliError::Pucker)?;

    let selection = if !args.atoms.is_empty() {
        RingSelection::Names(args.atoms.clone())
    } else if !args.indices.is_empty() {
        RingSelection::Indices(args.indices.clone())
    } else {
        return Err(CliError::Argument(
            "select the ring with --atom names or --index positions".to_string(),
        ));
    };

    let molecule = read_molecule(&args.input)?;
    info!(
        atoms = molecule.len(),
        "Parsed '{}'.",
        args.input.display()
    );

    let descriptor = workflows::analyze(&molecule, &selection, formalism)?;
    print_descriptor(&descriptor);
    Ok(())
}

fn print_descriptor(descriptor: &PuckeringDescriptor) {
    match descriptor {
        PuckeringDescriptor::CremerPople5 { amplitude, phase } => {
            println!("Cremer-Pople (5-ring)");
            println!("  amplitude Q = {amplitude:.4} A");
            println!("  phase     phi = {phase:.2} deg");
            if let Ok(name) = conformer::classify_fivering(descriptor) {
                println!("  conformer {name}");
            }
        }
        PuckeringDescriptor::CremerPople6 {
            amplitude,
            phase,
            theta,
        } => {
            println!("Cremer-Pople (6-ring)");
            println!("  amplitude Q = {amplitude:.4} A");
            println!("  phase     phi = {phase:.2} deg");
            println!("  polar     theta = {theta:.2} deg");
            if let Ok(name) = conformer::classify_sixring(descriptor) {
                println!("  conformer {name}");
            }
        }
        PuckeringDescriptor::AltonaSundaralingam { amplitude, phase } => {
            println!("Altona-Sundaralingam (5-ring)");
            println!("  amplitude tau_m = {amplitude:.2} deg");
            println!("  phase     P = {phase:.2} deg");
            if let Ok(name) = conformer::classify_fivering(descriptor) {
                println!("  conformer {name}");
            }
        }
        PuckeringDescriptor::StraussPickett { alphas, betas } => {
            println!("Strauss-Pickett (6-ring)");
            println!(
                "  alphas = {:.2}, {:.2}, {:.2} deg",
                alphas[0], alphas[1], alphas[2]
            );
            println!(
                "  betas  = {:.2}, {:.2}, {:.2} deg",
                betas[0], betas[1], betas[2]
            );
        }
    }
}
