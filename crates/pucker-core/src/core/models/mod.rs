//! Defines the stateless data models shared by the engine and workflows.
//!
//! All types here are plain immutable values: a [`molecule::Molecule`] is a
//! read-only snapshot produced by I/O, a [`ring::RingGeometry`] is an ordered
//! list of ring atom positions constructed per query and discarded after use,
//! and a [`descriptor::PuckeringDescriptor`] is a lightweight value owned by
//! the caller. None of them cache derived quantities; mean planes and
//! elevations are recomputed per transform call.

pub mod descriptor;
pub mod molecule;
pub mod ring;
