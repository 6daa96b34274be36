//! # Pucker++ Core Library
//!
//! A library for computing, inverting, and sampling ring and backbone
//! puckering coordinates for small molecular fragments: five- and
//! six-membered rings and peptide backbones.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Molecule`, `RingGeometry`,
//!   `PuckeringDescriptor`), pure geometric primitives (bond lengths, angles, dihedrals), and
//!   molecular file I/O (PDB, XYZ).
//!
//! - **[`engine`]: The Logic Core.** Implements the puckering formalisms — Cremer-Pople (five-
//!   and six-membered rings, forward and inverse), Altona-Sundaralingam (five-membered, with
//!   exact conversion to/from Cremer-Pople), and Strauss-Pickett (six-membered, forward only) —
//!   together with ring extraction, conformer classification, and the descriptor-space sampling
//!   grid generators used to seed restrained conformational searches.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together into the three end-user operations: analyze a ring out of a
//!   molecule, invert a descriptor back into Cartesian coordinates, and generate sampling grids.
//!
//! Every operation is a pure function over immutable value types: no global state, no internal
//! I/O, and all failures are reported through the typed [`engine::error::PuckerError`].

pub mod core;
pub mod engine;
pub mod workflows;
