//! # Engine Module
//!
//! This module implements the puckering coordinate engine: the geometric and
//! numerical algorithms that derive reduced puckering descriptors from ring
//! atom positions, invert them back into Cartesian geometry, and generate
//! the descriptor-space sampling grids that seed restrained conformational
//! searches.
//!
//! ## Architecture
//!
//! - **Ring Extraction** ([`extraction`]) - Resolves ordered ring geometries
//!   from a molecule snapshot by atom name or explicit index
//! - **Mean Plane** ([`mean_plane`]) - The R1/R2 plane construction and
//!   signed atomic elevations shared by the Cremer-Pople transforms
//! - **Transforms** ([`cremer_pople`], [`altona_sundaralingam`],
//!   [`strauss_pickett`]) - Forward and, where defined, inverse descriptor
//!   computation per formalism
//! - **Classification** ([`conformer`]) - Canonical conformer naming from
//!   descriptor values
//! - **Sampling** ([`sampling`]) - Deterministic descriptor-space grids for
//!   five-membered rings, six-membered rings, and peptide backbones
//! - **Error Handling** ([`error`]) - The engine-wide recoverable error
//!   taxonomy
//!
//! Every function here is pure: no shared mutable state, no internal I/O,
//! and safe to call concurrently from independent workers.

pub mod altona_sundaralingam;
pub mod conformer;
pub mod cremer_pople;
pub mod error;
pub mod extraction;
pub mod mean_plane;
pub mod sampling;
pub mod strauss_pickett;

use crate::core::models::ring::RingGeometry;
use self::error::PuckerError;

/// Checks a ring against the atom count a transform requires.
pub(crate) fn expect_ring_size(ring: &RingGeometry, expected: usize) -> Result<(), PuckerError> {
    if ring.len() != expected {
        return Err(PuckerError::RingSizeMismatch {
            expected,
            actual: ring.len(),
        });
    }
    Ok(())
}
