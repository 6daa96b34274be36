use thiserror::Error;

/// The engine-wide error taxonomy.
///
/// Every failure is recoverable at the call site: the engine never aborts the
/// process, and because all inputs and outputs are immutable value objects no
/// operation leaves partial state behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PuckerError {
    /// A requested atom name did not resolve to exactly one atom —
    /// `matches` is 0 when the name is absent, and ≥ 2 when it is duplicated.
    #[error("atom name '{name}' resolved to {matches} atoms (expected exactly one)")]
    UnknownAtom { name: String, matches: usize },

    /// An explicit atom index lies outside the coordinate table.
    #[error("atom index {index} is out of bounds for {len} atoms")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The resolved atom count does not match the size the target transform
    /// requires (5 for CP5/AS, 6 for CP6/SP).
    #[error("ring size mismatch: transform requires {expected} atoms, got {actual}")]
    RingSizeMismatch { expected: usize, actual: usize },

    /// The geometry admits no well-defined descriptor: a zero-area mean
    /// plane, a planar ring, or a polar six-ring where the phase angle is
    /// undefined.
    #[error("degenerate ring geometry: {0}")]
    DegenerateRing(String),

    /// A caller-supplied parameter lies outside its domain (negative
    /// amplitude, theta outside [0°,180°], non-positive grid size, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
