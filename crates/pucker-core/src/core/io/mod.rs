//! Provides input/output functionality for the molecular file formats the
//! puckering workflows consume and produce.
//!
//! Reading yields an immutable [`crate::core::models::molecule::Molecule`]
//! snapshot (atom names + coordinates); writing consumes one. The engine
//! itself never touches files — all I/O happens here, outside the hot path.

pub mod pdb;
pub mod traits;
pub mod xyz;
